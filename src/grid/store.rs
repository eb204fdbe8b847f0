use crate::grid::definition::GridDefinition;
use crate::grid::id::GridId;
use crate::io::configuration::{DEFAULT_SOCKET_ANGLE, DEFAULT_SOCKET_OFFSET_MM, DEFAULT_SUB_SECTION};
use crate::io::error::{GridError, Result, invalid_argument};
use bitvec::vec::BitVec;
use ndarray::{Array1, ArrayView1};

/// Whether a socket takes part in processing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SocketUsage {
    /// Socket is processed
    #[default]
    InUse,
    /// Socket is disabled
    NotInUse,
    /// Socket is visited but not processed
    SkipOver,
}

/// Processing state of a socket, stored as a byte code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SocketStatus {
    /// Nothing has happened yet
    #[default]
    Nothing = 0,
    /// Socket has been prepared
    Initialized = 1,
    /// Socket is being worked on
    Processing = 2,
    /// Work on the socket finished
    Completed = 3,
    /// Work on the socket failed
    Fail = 255,
}

impl From<SocketStatus> for u8 {
    fn from(status: SocketStatus) -> Self {
        status as Self
    }
}

impl TryFrom<u8> for SocketStatus {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Nothing),
            1 => Ok(Self::Initialized),
            2 => Ok(Self::Processing),
            3 => Ok(Self::Completed),
            255 => Ok(Self::Fail),
            _ => Err(invalid_argument(
                "status",
                &format!("unknown status code {code}"),
            )),
        }
    }
}

/// Planar coordinate in millimetres
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridCoord {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl GridCoord {
    /// Create a coordinate
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Structure-of-arrays storage for every per-socket attribute
///
/// All arrays share one length (the definition's cell count) and one
/// indexing scheme: row-major fill order, `index = (row - 1) * columns +
/// (column - 1)`. Identities are written once at construction and never
/// change. Other attributes are edited through
/// [`GridAccessor`](crate::grid::accessor::GridAccessor).
///
/// `T` is the type of the opaque per-socket tag.
#[derive(Clone, Debug)]
pub struct GridStore<T = ()> {
    definition: GridDefinition,
    ids: Array1<GridId>,
    pub(super) usage: Array1<SocketUsage>,
    pub(super) sub_section: Array1<u8>,
    pub(super) x_position: Array1<f32>,
    pub(super) y_position: Array1<f32>,
    // Accumulated offsets, in millimetres
    pub(super) x_offset: Array1<f32>,
    pub(super) y_offset: Array1<f32>,
    pub(super) angle: Array1<f32>,
    pub(super) x_correction: Array1<f32>,
    pub(super) y_correction: Array1<f32>,
    pub(super) status: Array1<SocketStatus>,
    pub(super) tags: Array1<Option<T>>,
}

impl GridStore {
    /// Allocate an untagged store and fill identities in row-major order
    ///
    /// A definition with zero columns or rows produces empty arrays.
    pub fn new(definition: GridDefinition) -> Self {
        Self::with_tags(definition)
    }
}

impl<T> GridStore<T> {
    /// Allocate a store whose sockets carry tags of type `T`
    ///
    /// Every tag starts unset.
    pub fn with_tags(definition: GridDefinition) -> Self {
        let cell_count = definition.cell_count();

        let ids = (1..=definition.rows())
            .flat_map(|row| (1..=definition.columns()).map(move |column| GridId::new(row, column)))
            .collect::<Array1<_>>();

        log::debug!(
            "Allocated grid store with {} columns x {} rows ({cell_count} sockets)",
            definition.columns(),
            definition.rows()
        );

        Self {
            definition,
            ids,
            usage: Array1::from_elem(cell_count, SocketUsage::InUse),
            sub_section: Array1::from_elem(cell_count, DEFAULT_SUB_SECTION),
            x_position: Array1::zeros(cell_count),
            y_position: Array1::zeros(cell_count),
            x_offset: Array1::from_elem(cell_count, DEFAULT_SOCKET_OFFSET_MM),
            y_offset: Array1::from_elem(cell_count, DEFAULT_SOCKET_OFFSET_MM),
            angle: Array1::from_elem(cell_count, DEFAULT_SOCKET_ANGLE),
            x_correction: Array1::zeros(cell_count),
            y_correction: Array1::zeros(cell_count),
            status: Array1::from_elem(cell_count, SocketStatus::Nothing),
            tags: Array1::from_shape_simple_fn(cell_count, || None),
        }
    }

    /// Grid dimensions this store was built from
    pub const fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    /// Number of sockets held
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the store holds no sockets
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Socket identities in row-major fill order
    pub fn ids(&self) -> ArrayView1<'_, GridId> {
        self.ids.view()
    }

    /// Usage flag per socket
    pub fn usage(&self) -> ArrayView1<'_, SocketUsage> {
        self.usage.view()
    }

    /// Sub-section assignment per socket
    pub fn sub_sections(&self) -> ArrayView1<'_, u8> {
        self.sub_section.view()
    }

    /// Absolute X position per socket in millimetres
    pub fn x_positions(&self) -> ArrayView1<'_, f32> {
        self.x_position.view()
    }

    /// Absolute Y position per socket in millimetres
    pub fn y_positions(&self) -> ArrayView1<'_, f32> {
        self.y_position.view()
    }

    /// Accumulated X offset per socket in millimetres
    pub fn x_offsets(&self) -> ArrayView1<'_, f32> {
        self.x_offset.view()
    }

    /// Accumulated Y offset per socket in millimetres
    pub fn y_offsets(&self) -> ArrayView1<'_, f32> {
        self.y_offset.view()
    }

    /// Socket angle per socket
    pub fn angles(&self) -> ArrayView1<'_, f32> {
        self.angle.view()
    }

    /// X correction per socket
    pub fn x_corrections(&self) -> ArrayView1<'_, f32> {
        self.x_correction.view()
    }

    /// Y correction per socket
    pub fn y_corrections(&self) -> ArrayView1<'_, f32> {
        self.y_correction.view()
    }

    /// Status per socket
    pub fn statuses(&self) -> ArrayView1<'_, SocketStatus> {
        self.status.view()
    }

    /// Opaque tag per socket
    pub fn tags(&self) -> ArrayView1<'_, Option<T>> {
        self.tags.view()
    }

    /// Absolute position of a socket
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if the socket is not part of the grid
    pub fn socket_coordinates(&self, id: GridId) -> Result<GridCoord> {
        let index = self
            .definition
            .index_of(id)
            .ok_or_else(|| GridError::IdOutOfBounds {
                id,
                columns: self.definition.columns(),
                rows: self.definition.rows(),
            })?;

        let x = self.x_position.get(index).copied().unwrap_or_default();
        let y = self.y_position.get(index).copied().unwrap_or_default();
        Ok(GridCoord::new(x, y))
    }

    /// One bit per socket in fill order, set when the socket is in use
    pub fn usage_mask(&self) -> BitVec {
        self.usage
            .iter()
            .map(|usage| *usage == SocketUsage::InUse)
            .collect()
    }
}
