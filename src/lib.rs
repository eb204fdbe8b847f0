//! Socket tray model and processing order engine for pick-and-place equipment
//!
//! A tray is a rectangular grid of sockets. The crate stores per-socket
//! attributes in row-major fill order and computes the order in which sockets
//! are visited for a chosen start corner and scan direction.

#![forbid(unsafe_code)]

/// Socket identifiers, grid dimensions and per-socket storage
pub mod grid;
/// Command-line interface, configuration constants and error handling
pub mod io;
/// Corner/direction policies and the processing order engine
pub mod order;

pub use io::error::{GridError, Result};
