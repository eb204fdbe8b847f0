//! Socket grid data model
//!
//! This module contains the grid-side building blocks:
//! - Packed socket identifiers
//! - Grid dimensions
//! - Structure-of-arrays socket storage and its editing surface

/// Bounds-checked socket editing with a one-entry lookup memo
pub mod accessor;
/// Grid dimensions and fill-index arithmetic
pub mod definition;
/// Packed (row, column) socket identifiers
pub mod id;
/// Per-socket attribute storage
pub mod store;

pub use accessor::GridAccessor;
pub use definition::GridDefinition;
pub use id::GridId;
pub use store::{GridCoord, GridStore, SocketStatus, SocketUsage};
