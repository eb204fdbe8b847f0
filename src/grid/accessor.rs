use crate::grid::definition::GridDefinition;
use crate::grid::id::GridId;
use crate::grid::store::{GridCoord, GridStore, SocketStatus, SocketUsage};
use crate::io::error::{GridError, Result};
use ndarray::Array1;
use std::cell::Cell;

/// Add `delta` to position and offset of every socket `moves` selects
fn shift_sockets(
    definition: GridDefinition,
    positions: &mut Array1<f32>,
    offsets: &mut Array1<f32>,
    delta: f32,
    moves: impl Fn(GridId) -> bool,
) {
    for (index, (position, offset)) in positions.iter_mut().zip(offsets.iter_mut()).enumerate() {
        if definition.id_at(index).is_some_and(&moves) {
            *position += delta;
            *offset += delta;
        }
    }
}

/// Editing surface over a [`GridStore`]
///
/// Every socket operation resolves its identifier to a fill index first,
/// rejecting identifiers outside the grid. The most recent successful lookup
/// is remembered so repeated edits of one socket skip the bounds check.
pub struct GridAccessor<'a, T = ()> {
    store: &'a mut GridStore<T>,
    last_lookup: Cell<Option<(GridId, usize)>>,
}

impl<'a, T> GridAccessor<'a, T> {
    /// Wrap a store for editing
    pub const fn new(store: &'a mut GridStore<T>) -> Self {
        Self {
            store,
            last_lookup: Cell::new(None),
        }
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &GridStore<T> {
        &*self.store
    }

    /// Fill index of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the row or column is zero or exceeds the
    /// grid dimensions
    pub fn index_of(&self, id: GridId) -> Result<usize> {
        if let Some((_, cached_index)) = self.last_lookup.get().filter(|(cached, _)| *cached == id) {
            return Ok(cached_index);
        }

        let definition = self.store.definition();
        let index = definition
            .index_of(id)
            .ok_or_else(|| GridError::IdOutOfBounds {
                id,
                columns: definition.columns(),
                rows: definition.rows(),
            })?;

        self.last_lookup.set(Some((id, index)));
        Ok(index)
    }

    /// Lay out absolute positions from the first socket and the socket pitch
    ///
    /// The socket in column `c`, row `r` lands at
    /// `first + ((c - 1) * pitch.x, (r - 1) * pitch.y)`.
    pub fn initialize_coordinates(&mut self, first: GridCoord, pitch: GridCoord) {
        let definition = *self.store.definition();
        let positions = self
            .store
            .x_position
            .iter_mut()
            .zip(self.store.y_position.iter_mut());

        for (index, (x, y)) in positions.enumerate() {
            if let Some(id) = definition.id_at(index) {
                *x = f32::from(id.column() - 1).mul_add(pitch.x, first.x);
                *y = f32::from(id.row() - 1).mul_add(pitch.y, first.y);
            }
        }

        log::debug!(
            "Initialized {} socket positions from ({}, {}) with pitch ({}, {})",
            self.store.len(),
            first.x,
            first.y,
            pitch.x,
            pitch.y
        );
    }

    /// Mark a socket as processed
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn enable_socket(&mut self, id: GridId) -> Result<()> {
        self.set_usage(id, SocketUsage::InUse)
    }

    /// Exclude a socket from processing
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn disable_socket(&mut self, id: GridId) -> Result<()> {
        self.set_usage(id, SocketUsage::NotInUse)
    }

    /// Visit a socket without processing it
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn skip_socket(&mut self, id: GridId) -> Result<()> {
        self.set_usage(id, SocketUsage::SkipOver)
    }

    /// Usage flag of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn usage(&self, id: GridId) -> Result<SocketUsage> {
        let index = self.index_of(id)?;
        Ok(self
            .store
            .usage
            .get(index)
            .copied()
            .unwrap_or_default())
    }

    /// Set the angle of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn set_socket_angle(&mut self, id: GridId, angle: f32) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(slot) = self.store.angle.get_mut(index) {
            *slot = angle;
        }
        Ok(())
    }

    /// Assign a socket to a sub-section
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn set_sub_section(&mut self, id: GridId, sub_section: u8) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(slot) = self.store.sub_section.get_mut(index) {
            *slot = sub_section;
        }
        Ok(())
    }

    /// Record the processing status of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn set_status(&mut self, id: GridId, status: SocketStatus) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(slot) = self.store.status.get_mut(index) {
            *slot = status;
        }
        Ok(())
    }

    /// Attach an opaque tag to a socket, returning the previous tag
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn set_tag(&mut self, id: GridId, tag: T) -> Result<Option<T>> {
        let index = self.index_of(id)?;
        Ok(self
            .store
            .tags
            .get_mut(index)
            .and_then(|slot| slot.replace(tag)))
    }

    /// Absolute position of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn socket_coordinates(&self, id: GridId) -> Result<GridCoord> {
        let index = self.index_of(id)?;
        let x = self.store.x_position.get(index).copied().unwrap_or_default();
        let y = self.store.y_position.get(index).copied().unwrap_or_default();
        Ok(GridCoord::new(x, y))
    }

    /// Shift every column after `from_column` by `delta` millimetres in X
    ///
    /// Columns numbered `from_column` or lower keep their position. The
    /// shift also accumulates into the X offset of each moved socket.
    pub fn adjust_column_offset(&mut self, from_column: u8, delta: f32) {
        shift_sockets(
            *self.store.definition(),
            &mut self.store.x_position,
            &mut self.store.x_offset,
            delta,
            |id| id.column() > from_column,
        );

        log::debug!("Shifted columns after {from_column} by {delta} mm");
    }

    /// Column shift computed on the blocking worker pool
    ///
    /// Same result as [`adjust_column_offset`](Self::adjust_column_offset).
    /// The store is only written once the worker finishes.
    ///
    /// # Errors
    ///
    /// Returns `Worker` if the background task panicked or was cancelled
    #[cfg(feature = "async")]
    pub async fn adjust_column_offset_async(&mut self, from_column: u8, delta: f32) -> Result<()> {
        let definition = *self.store.definition();
        let mut positions = self.store.x_position.clone();
        let mut offsets = self.store.x_offset.clone();

        let (shifted_positions, shifted_offsets) = tokio::task::spawn_blocking(move || {
            shift_sockets(definition, &mut positions, &mut offsets, delta, |id| {
                id.column() > from_column
            });
            (positions, offsets)
        })
        .await?;

        self.store.x_position = shifted_positions;
        self.store.x_offset = shifted_offsets;
        log::debug!("Shifted columns after {from_column} by {delta} mm on worker");
        Ok(())
    }

    /// Shift every row after `from_row` by `delta` millimetres in Y
    ///
    /// Rows numbered `from_row` or lower keep their position. The shift also
    /// accumulates into the Y offset of each moved socket.
    pub fn adjust_row_offset(&mut self, from_row: u8, delta: f32) {
        shift_sockets(
            *self.store.definition(),
            &mut self.store.y_position,
            &mut self.store.y_offset,
            delta,
            |id| id.row() > from_row,
        );

        log::debug!("Shifted rows after {from_row} by {delta} mm");
    }

    /// Row shift computed on the blocking worker pool
    ///
    /// Same result as [`adjust_row_offset`](Self::adjust_row_offset). The
    /// store is only written once the worker finishes.
    ///
    /// # Errors
    ///
    /// Returns `Worker` if the background task panicked or was cancelled
    #[cfg(feature = "async")]
    pub async fn adjust_row_offset_async(&mut self, from_row: u8, delta: f32) -> Result<()> {
        let definition = *self.store.definition();
        let mut positions = self.store.y_position.clone();
        let mut offsets = self.store.y_offset.clone();

        let (shifted_positions, shifted_offsets) = tokio::task::spawn_blocking(move || {
            shift_sockets(definition, &mut positions, &mut offsets, delta, |id| {
                id.row() > from_row
            });
            (positions, offsets)
        })
        .await?;

        self.store.y_position = shifted_positions;
        self.store.y_offset = shifted_offsets;
        log::debug!("Shifted rows after {from_row} by {delta} mm on worker");
        Ok(())
    }

    fn set_usage(&mut self, id: GridId, usage: SocketUsage) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(slot) = self.store.usage.get_mut(index) {
            *slot = usage;
        }
        Ok(())
    }
}
