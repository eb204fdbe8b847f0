//! Visiting order computation
//!
//! Eight policies, one per start corner and scan direction, each a total
//! order over socket identifiers.

/// Processing order engine and its asynchronous wrapper
pub mod engine;
/// Corner/direction policies and their comparators
pub mod policy;

pub use engine::ProcessingOrder;
pub use policy::{ProcessingPolicy, ScanDirection, StartCorner};
