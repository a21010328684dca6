//! A live planner session: the owned state plus the provider it persists through
//!
//! The session is the single owner of the in-memory state (there are no
//! ambient globals). It is constructed at application start, turns user
//! gestures into model mutations, and follows every effective mutation with a
//! full-replace save. A failed save never rolls the local mutation back.

use crate::dragdrop::{apply_drop, DragPayload, DropTarget};
use crate::error::PlannerError;
use crate::planner::PlannerState;
use crate::provider::Provider;
use crate::subject::SubjectForm;
use crate::traits::StateStore;

pub struct PlannerSession<R: StateStore> {
    state: PlannerState,
    provider: Provider<R>,
}

impl<R: StateStore> PlannerSession<R> {
    /// Open a session: loads the initial state from the provider (remote,
    /// cache slots, or empty; this never fails)
    pub async fn open(mut provider: Provider<R>) -> Self {
        let state = provider.load().await;
        Self { state, provider }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    /// Validate the creation form, append the subject, and persist.
    /// Returns the new subject's id; on a validation error nothing changed
    /// and nothing is saved.
    pub async fn add_subject(&mut self, form: &SubjectForm) -> Result<String, PlannerError> {
        let id = self.state.add_subject(form)?;
        self.persist().await;
        Ok(id)
    }

    /// Remove a subject and every activity placed from it, then persist.
    /// An unknown id mutates nothing and skips the save.
    pub async fn remove_subject(&mut self, id: &str) -> bool {
        let changed = self.state.remove_subject(id);
        if changed {
            self.persist().await;
        }
        changed
    }

    /// Apply a finished drag gesture, persisting when it changed anything
    pub async fn handle_drop(&mut self, payload: DragPayload, target: DropTarget) -> bool {
        let changed = apply_drop(&mut self.state, payload, target);
        if changed {
            self.persist().await;
        }
        changed
    }

    /// Wipe every planned date of a month, then persist.
    /// Returns how many dates were cleared.
    pub async fn clear_month(&mut self, year: i32, month: u32) -> usize {
        let cleared = self.state.clear_month(year, month);
        if cleared > 0 {
            self.persist().await;
        }
        cleared
    }

    /// Drop the in-memory state and fetch a fresh copy from the store
    pub async fn reload(&mut self) {
        self.state = self.provider.load().await;
    }

    async fn persist(&mut self) {
        // A failure is logged by the provider; the local mutation stands either way
        self.provider.save(&self.state).await;
    }
}
