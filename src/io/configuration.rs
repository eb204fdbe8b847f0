//! Grid constants and runtime configuration defaults

use crate::order::policy::{ScanDirection, StartCorner};

// Per-socket attribute defaults applied when a store is allocated
/// Initial X/Y offset of every socket in millimetres
pub const DEFAULT_SOCKET_OFFSET_MM: f32 = 10.0;

/// Initial socket angle in degrees
pub const DEFAULT_SOCKET_ANGLE: f32 = 0.0;

/// Initial sub-section assignment
pub const DEFAULT_SUB_SECTION: u8 = 0;

// Identifier layout
/// Largest row or column number an identifier can carry
pub const MAX_AXIS_LENGTH: u8 = u8::MAX;

/// Number of bits each axis occupies in a packed identifier
pub const PACKED_AXIS_BITS: u32 = 8;

// Demo command defaults
/// Default number of columns for the demo tray
pub const DEFAULT_COLUMNS: u8 = 10;

/// Default number of rows for the demo tray
pub const DEFAULT_ROWS: u8 = 10;

/// Default X coordinate of the first socket in millimetres
pub const DEFAULT_FIRST_SOCKET_X_MM: f32 = 10.0;

/// Default Y coordinate of the first socket in millimetres
pub const DEFAULT_FIRST_SOCKET_Y_MM: f32 = 10.0;

/// Default distance between neighbouring columns in millimetres
pub const DEFAULT_PITCH_X_MM: f32 = 2.0;

/// Default distance between neighbouring rows in millimetres
pub const DEFAULT_PITCH_Y_MM: f32 = 3.0;

/// Corner the demo starts from unless told otherwise
pub const DEFAULT_START_CORNER: StartCorner = StartCorner::UpperLeft;

/// Scan direction the demo uses unless told otherwise
pub const DEFAULT_SCAN_DIRECTION: ScanDirection = ScanDirection::RowMajor;
