//! Processing order engine over a snapshot of grid identities

use crate::grid::id::GridId;
use crate::grid::store::GridStore;
use crate::io::error::{Result, invalid_argument};
use crate::order::policy::{ProcessingPolicy, ScanDirection, StartCorner, sort_ids};

/// Visiting order of the sockets of one grid
///
/// Holds a private copy of the store's identities taken at construction.
/// Each calculation re-sorts the current contents of that copy; later edits
/// to the store are not observed. Exclusive access (`&mut self`) is needed
/// to recalculate, so one instance is never sorted from two threads at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessingOrder {
    order: Vec<GridId>,
    policy: Option<ProcessingPolicy>,
}

impl ProcessingOrder {
    /// Snapshot the identities of a store
    pub fn new<T>(store: &GridStore<T>) -> Self {
        Self {
            order: store.ids().to_vec(),
            policy: None,
        }
    }

    /// Snapshot an identity array declared to hold `cell_count` sockets
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the array length disagrees with
    /// `cell_count`, or when it contains the empty identifier
    pub fn from_ids(ids: &[GridId], cell_count: usize) -> Result<Self> {
        if ids.len() != cell_count {
            return Err(invalid_argument(
                "ids",
                &format!(
                    "expected {cell_count} identities but {} were supplied",
                    ids.len()
                ),
            ));
        }

        if ids.iter().any(|id| id.is_empty()) {
            return Err(invalid_argument(
                "ids",
                &"identity array contains the empty identifier",
            ));
        }

        Ok(Self {
            order: ids.to_vec(),
            policy: None,
        })
    }

    /// Current visiting order
    pub fn processing_order(&self) -> &[GridId] {
        &self.order
    }

    /// Policy applied by the most recent calculation
    pub const fn policy(&self) -> Option<ProcessingPolicy> {
        self.policy
    }

    /// Number of sockets in the order
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Re-sort the order to start at `corner` and group by `direction`
    pub fn calculate(&mut self, corner: StartCorner, direction: ScanDirection) {
        self.apply(ProcessingPolicy::new(corner, direction));
    }

    /// Re-sort the order from raw corner and direction codes
    ///
    /// The codes are validated before the order is touched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the codes do not name a defined policy;
    /// the order is left unchanged
    pub fn calculate_codes(&mut self, corner: u8, direction: u8) -> Result<()> {
        let policy = ProcessingPolicy::from_codes(corner, direction)?;
        self.apply(policy);
        Ok(())
    }

    /// Re-sort the order on the blocking worker pool
    ///
    /// Produces the same order as [`calculate`](Self::calculate). The sort
    /// runs on a copy that replaces the order only once the worker
    /// finishes, so a failed worker leaves the order unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Worker` if the background task panicked or was cancelled
    #[cfg(feature = "async")]
    pub async fn calculate_async(
        &mut self,
        corner: StartCorner,
        direction: ScanDirection,
    ) -> Result<()> {
        let policy = ProcessingPolicy::new(corner, direction);
        let mut working = self.order.clone();

        let sorted = tokio::task::spawn_blocking(move || {
            sort_ids(&mut working, policy);
            working
        })
        .await?;

        self.order = sorted;
        self.policy = Some(policy);
        log::debug!("Calculated processing order {policy} on worker");
        Ok(())
    }

    /// Order restricted to sockets the store marks as in use
    ///
    /// Identifiers that do not belong to the store's grid are dropped.
    pub fn active_order<T>(&self, store: &GridStore<T>) -> Vec<GridId> {
        let mask = store.usage_mask();
        let definition = store.definition();

        self.order
            .iter()
            .copied()
            .filter(|&id| {
                definition
                    .index_of(id)
                    .and_then(|index| mask.get(index).as_deref().copied())
                    .unwrap_or(false)
            })
            .collect()
    }

    fn apply(&mut self, policy: ProcessingPolicy) {
        sort_ids(&mut self.order, policy);
        self.policy = Some(policy);
        log::debug!(
            "Calculated processing order {policy} over {} sockets",
            self.order.len()
        );
    }
}
