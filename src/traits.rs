use async_trait::async_trait;

use crate::error::PlannerError;
use crate::planner::PlannerState;

/// A place the whole planner state can be fetched from and replaced into.
///
/// The state always travels whole: `replace` overwrites the store's entire
/// contents (clear-then-write, not a merge), and there is no partial-update
/// path. Implementations are the relay client, the direct spreadsheet client,
/// and the local cache (which doubles as a mock remote in tests).
#[async_trait]
pub trait StateStore {
    /// Fetch the full state this store currently holds
    async fn fetch(&self) -> Result<PlannerState, PlannerError>;

    /// Replace the full contents of this store with `state`
    async fn replace(&mut self, state: &PlannerState) -> Result<(), PlannerError>;
}
