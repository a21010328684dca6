//! Shared helpers for the integration scenarios.
//!
//! The remote store is mocked by a second [`Cache`] (both implement
//! [`StateStore`](chalkplan::traits::StateStore)); a [`MockBehaviour`] decides
//! when that mocked remote must fail.

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use chalkplan::cache::Cache;
use chalkplan::mock_behaviour::MockBehaviour;
use chalkplan::planner::PlannerState;
use chalkplan::provider::Provider;
use chalkplan::subject::SubjectForm;
use chalkplan::Activity;

/// A provider over a mocked remote, plus the directories backing both stores.
/// Keep the rig alive for as long as the provider is used.
pub struct Rig {
    pub provider: Provider<Cache>,
    pub mock: Arc<Mutex<MockBehaviour>>,
    _remote_dir: TempDir,
    _local_dir: TempDir,
}

/// Build a provider whose mocked remote starts out holding `remote_state`
pub fn rig_with_remote_state(remote_state: &PlannerState) -> Rig {
    let remote_dir = tempfile::tempdir().unwrap();
    let local_dir = tempfile::tempdir().unwrap();

    let mut remote = Cache::open(remote_dir.path());
    remote.remember(remote_state);
    let mock = Arc::new(Mutex::new(MockBehaviour::new()));
    remote.set_mock_behaviour(Some(Arc::clone(&mock)));

    Rig {
        provider: Provider::new(remote, Cache::open(local_dir.path())),
        mock,
        _remote_dir: remote_dir,
        _local_dir: local_dir,
    }
}

/// Build a provider whose mocked remote is empty
pub fn rig() -> Rig {
    rig_with_remote_state(&PlannerState::new())
}

pub fn form(title: &str) -> SubjectForm {
    SubjectForm {
        title: title.to_string(),
        level: "1".to_string(),
        color: "blue".to_string(),
        start_time: "08:00".to_string(),
        end_time: "09:00".to_string(),
    }
}

/// A small populated state: two subjects, one of them placed on two dates
pub fn sample_state() -> PlannerState {
    let mut state = PlannerState::new();
    let math = state.add_subject(&form("Math")).unwrap();
    state.add_subject(&form("Art")).unwrap();

    let snapshot = Activity::from(state.subject(&math).unwrap());
    state.place_activity("2024-05-10", snapshot.clone());
    state.place_activity("2024-05-12", snapshot);
    state
}
