use crate::grid::id::GridId;

/// Dimensions of a rectangular socket grid
///
/// The cell count is derived once at construction. Both axes are bytes, so
/// the product always fits in 16 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDefinition {
    columns: u8,
    rows: u8,
    cell_count: u16,
}

impl GridDefinition {
    /// Define a grid of `columns` x `rows` sockets
    pub const fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cell_count: columns as u16 * rows as u16,
        }
    }

    /// Grid without any sockets
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Number of columns (X axis)
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Number of rows (Y axis)
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Total number of sockets
    pub const fn cell_count(&self) -> usize {
        self.cell_count as usize
    }

    /// Whether the grid has no sockets
    pub const fn is_empty(&self) -> bool {
        self.cell_count == 0
    }

    /// Whether the identifier names a socket of this grid
    pub const fn contains(&self, id: GridId) -> bool {
        id.row() >= 1 && id.row() <= self.rows && id.column() >= 1 && id.column() <= self.columns
    }

    /// Row-major fill index of a socket, if it lies inside the grid
    pub const fn index_of(&self, id: GridId) -> Option<usize> {
        if self.contains(id) {
            Some((id.row() as usize - 1) * self.columns as usize + (id.column() as usize - 1))
        } else {
            None
        }
    }

    /// Identifier stored at a row-major fill index
    pub const fn id_at(&self, index: usize) -> Option<GridId> {
        if index >= self.cell_count() || self.columns == 0 {
            return None;
        }
        let columns = self.columns as usize;
        Some(GridId::new(
            (index / columns + 1) as u8,
            (index % columns + 1) as u8,
        ))
    }
}
