/// Command-line demo of grid setup and processing order output
pub mod cli;
/// Grid constants and runtime configuration defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
