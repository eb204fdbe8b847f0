//! Start corners, scan directions and the comparator each pair selects

use crate::grid::id::GridId;
use crate::io::error::{GridError, Result, invalid_operation};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;

/// Corner of the tray where processing begins
///
/// Row 1 is the upper edge and column 1 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[repr(u8)]
pub enum StartCorner {
    /// Row 1, column 1
    UpperLeft = 0,
    /// Row 1, last column
    UpperRight = 1,
    /// Last row, column 1
    LowerLeft = 2,
    /// Last row, last column
    LowerRight = 3,
}

impl StartCorner {
    /// All corners in code order
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// Whether the corner lies on the upper edge
    pub const fn is_upper(self) -> bool {
        matches!(self, Self::UpperLeft | Self::UpperRight)
    }

    /// Whether the corner lies on the left edge
    pub const fn is_left(self) -> bool {
        matches!(self, Self::UpperLeft | Self::LowerLeft)
    }

    /// Raw code of the corner
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Corner for a raw code, if one exists
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::UpperLeft),
            1 => Some(Self::UpperRight),
            2 => Some(Self::LowerLeft),
            3 => Some(Self::LowerRight),
            _ => None,
        }
    }
}

/// Which key groups sockets together in the visiting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[repr(u8)]
pub enum ScanDirection {
    /// All sockets of one row are visited before the next row
    RowMajor = 0,
    /// All sockets of one column are visited before the next column
    ColumnMajor = 1,
}

impl ScanDirection {
    /// All directions in code order
    pub const ALL: [Self; 2] = [Self::RowMajor, Self::ColumnMajor];

    /// Raw code of the direction
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Direction for a raw code, if one exists
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::RowMajor),
            1 => Some(Self::ColumnMajor),
            _ => None,
        }
    }
}

/// Sort key taken from an identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// 1-based row number
    Row,
    /// 1-based column number
    Column,
}

impl SortKey {
    const fn of(self, id: GridId) -> u8 {
        match self {
            Self::Row => id.row(),
            Self::Column => id.column(),
        }
    }
}

/// Ascending or descending key order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOrder {
    /// Smallest key first
    Ascending,
    /// Largest key first
    Descending,
}

impl KeyOrder {
    const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A start corner paired with a scan direction
///
/// The direction picks the primary key: rows for row-major, columns for
/// column-major, with the other axis as secondary key. The corner's vertical
/// half orders the primary key (upper ascending, lower descending) and its
/// horizontal half orders the secondary key (left ascending, right
/// descending).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProcessingPolicy {
    /// Corner where processing starts
    pub corner: StartCorner,
    /// Key that groups sockets
    pub direction: ScanDirection,
}

impl ProcessingPolicy {
    /// Pair a corner with a direction
    pub const fn new(corner: StartCorner, direction: ScanDirection) -> Self {
        Self { corner, direction }
    }

    /// Build a policy from raw corner and direction codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless both codes name one of the eight
    /// defined combinations
    pub const fn from_codes(corner: u8, direction: u8) -> Result<Self> {
        match (StartCorner::from_code(corner), ScanDirection::from_code(direction)) {
            (Some(corner), Some(direction)) => Ok(Self::new(corner, direction)),
            _ => Err(invalid_operation(corner, direction)),
        }
    }

    /// Every defined policy
    pub fn all() -> impl Iterator<Item = Self> {
        StartCorner::ALL.into_iter().flat_map(|corner| {
            ScanDirection::ALL
                .into_iter()
                .map(move |direction| Self::new(corner, direction))
        })
    }

    /// Primary and secondary sort keys
    pub const fn keys(self) -> (SortKey, SortKey) {
        match self.direction {
            ScanDirection::RowMajor => (SortKey::Row, SortKey::Column),
            ScanDirection::ColumnMajor => (SortKey::Column, SortKey::Row),
        }
    }

    /// Orders applied to the primary and secondary keys
    pub const fn orders(self) -> (KeyOrder, KeyOrder) {
        (
            KeyOrder::from_ascending(self.corner.is_upper()),
            KeyOrder::from_ascending(self.corner.is_left()),
        )
    }

    /// Total order over identifiers for this policy
    ///
    /// Two distinct identifiers never compare equal, since both axes take
    /// part in the comparison.
    pub fn comparator(self) -> impl Fn(&GridId, &GridId) -> Ordering + Copy + Send + Sync {
        let (primary, secondary) = self.keys();
        let (primary_order, secondary_order) = self.orders();

        move |a: &GridId, b: &GridId| {
            primary_order
                .apply(primary.of(*a).cmp(&primary.of(*b)))
                .then_with(|| secondary_order.apply(secondary.of(*a).cmp(&secondary.of(*b))))
        }
    }
}

impl TryFrom<(u8, u8)> for ProcessingPolicy {
    type Error = GridError;

    fn try_from((corner, direction): (u8, u8)) -> Result<Self> {
        Self::from_codes(corner, direction)
    }
}

impl fmt::Display for ProcessingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.corner, self.direction)
    }
}

/// Sort identifiers in place according to a policy
pub fn sort_ids(ids: &mut [GridId], policy: ProcessingPolicy) {
    ids.sort_unstable_by(policy.comparator());
}
