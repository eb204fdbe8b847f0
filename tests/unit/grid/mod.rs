mod accessor;
mod definition;
