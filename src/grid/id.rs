use crate::io::configuration::PACKED_AXIS_BITS;
use std::fmt;

const AXIS_MASK: u16 = (1 << PACKED_AXIS_BITS) - 1;

/// Packed (row, column) identifier of one socket
///
/// Row and column are 1-based and occupy the high and low byte of a 16-bit
/// value respectively. Both axes keep their full 8 bits on packing and
/// unpacking, so every row and column up to 255 survives a round trip.
/// Equality and hashing are defined by the packed value alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridId(u16);

impl GridId {
    /// Sentinel for "no socket"; never produced by a grid store
    pub const EMPTY: Self = Self(0);

    /// Pack a row and column into an identifier
    pub const fn new(row: u8, column: u8) -> Self {
        Self(((row as u16) << PACKED_AXIS_BITS) | column as u16)
    }

    /// Rebuild an identifier from its packed representation
    pub const fn from_packed(packed: u16) -> Self {
        Self(packed)
    }

    /// Packed 16-bit value
    pub const fn packed(self) -> u16 {
        self.0
    }

    /// 1-based row number
    pub const fn row(self) -> u8 {
        ((self.0 >> PACKED_AXIS_BITS) & AXIS_MASK) as u8
    }

    /// 1-based column number
    pub const fn column(self) -> u8 {
        (self.0 & AXIS_MASK) as u8
    }

    /// Whether this is the empty sentinel
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl From<GridId> for u16 {
    fn from(id: GridId) -> Self {
        id.packed()
    }
}

impl From<u16> for GridId {
    fn from(packed: u16) -> Self {
        Self::from_packed(packed)
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.column())
    }
}
