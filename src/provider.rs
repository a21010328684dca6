//! This module combines a remote store with the local cache, and decides
//! which one the session gets its data from

use crate::cache::Cache;
use crate::planner::PlannerState;
use crate::traits::StateStore;

/// A data source that merges a remote [`StateStore`] with the local [`Cache`].
///
/// `load` is infallible by design: when the remote store cannot be reached or
/// understood, it falls back to whatever the cache slots hold, down to an
/// empty state. `save` pushes the full state (clear-then-write, never a
/// merge); a failed save is logged and dropped, leaving the in-memory state
/// ahead of the remote one until a later save lands. That divergence window
/// is accepted: there is no retry queue and no optimistic-lock check.
pub struct Provider<R: StateStore> {
    remote: R,
    cache: Cache,
}

impl<R: StateStore> Provider<R> {
    /// Create a provider.
    ///
    /// `remote` is usually a [`RelayClient`](crate::client::RelayClient) or a
    /// [`SheetClient`](crate::sheet::SheetClient); tests mock it with a second
    /// [`Cache`].
    pub fn new(remote: R, cache: Cache) -> Self {
        Self { remote, cache }
    }

    /// Returns the local cache
    pub fn cache(&self) -> &Cache { &self.cache }
    /// Returns the remote store.
    ///
    /// Apart from tests, there are very few (if any) reasons to access it directly.
    pub fn remote(&self) -> &R { &self.remote }

    /// Fetch the current state.
    ///
    /// On success the cache slots are overwritten with the decoded state; on
    /// any failure each slot is recovered independently, defaulting to empty.
    /// This never fails: the caller always gets a usable state.
    pub async fn load(&mut self) -> PlannerState {
        match self.remote.fetch().await {
            Ok(state) => {
                log::debug!("Loaded {} subjects and {} planned dates", state.subjects().len(), state.activities().len());
                self.cache.remember(&state);
                state
            },
            Err(err) => {
                log::warn!("Unable to load from the remote store: {}. Falling back to the local slots.", err);
                self.cache.recall()
            },
        }
    }

    /// Replace the remote contents with this state, and tell whether it worked.
    ///
    /// On failure the error is logged and the state is left as the caller's
    /// problem only in the sense that nothing is rolled back; the next
    /// successful save overwrites the remote side anyway.
    pub async fn save(&mut self, state: &PlannerState) -> bool {
        match self.remote.replace(state).await {
            Ok(()) => {
                log::debug!("Saved {} subjects and {} planned dates", state.subjects().len(), state.activities().len());
                true
            },
            Err(err) => {
                log::warn!("Unable to save to the remote store: {}. Local changes are kept in memory only.", err);
                false
            },
        }
    }
}
