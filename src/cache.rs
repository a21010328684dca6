//! This module provides a local fallback copy of the planner state
//!
//! The copy lives in two independent slots (a subjects file and an activities
//! file), so that a corrupt half cannot take the other half down. Slots are
//! overwritten on every successful load and read back only when the remote
//! store cannot be.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::activity::Activity;
use crate::error::PlannerError;
use crate::mock_behaviour::MockBehaviour;
use crate::planner::PlannerState;
use crate::subject::Subject;
use crate::traits::StateStore;

const SUBJECTS_SLOT: &str = "subjects.json";
const ACTIVITIES_SLOT: &str = "activities.json";

/// A planner store that keeps its contents in two local JSON files.
///
/// Besides being the fallback the [`Provider`](crate::provider::Provider)
/// recovers from, a `Cache` implements [`StateStore`] itself, so tests can use
/// one to stand in for a remote store (see [`MockBehaviour`]).
#[derive(Debug)]
pub struct Cache {
    subjects_file: PathBuf,
    activities_file: PathBuf,
    data: CachedData,

    /// When set, this cache acts as a mocked remote store that can fail on demand
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

#[derive(Default, Debug, Clone)]
struct CachedData {
    subjects: Vec<Subject>,
    activities: BTreeMap<String, Vec<Activity>>,
}

impl Cache {
    /// The default slot directory for this platform, when one can be determined
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "chalkplan", "chalkplan")
            .map(|dirs| dirs.cache_dir().to_path_buf())
    }

    /// Initialize an empty cache over the given slot directory
    pub fn new(dir: &Path) -> Self {
        Self {
            subjects_file: dir.join(SUBJECTS_SLOT),
            activities_file: dir.join(ACTIVITIES_SLOT),
            data: CachedData::default(),
            mock_behaviour: None,
        }
    }

    /// Initialize a cache from whatever the slot directory holds.
    ///
    /// Each slot is recovered independently: an unreadable or corrupt slot
    /// falls back to empty without affecting the other one.
    pub fn open(dir: &Path) -> Self {
        if let Err(err) = std::fs::create_dir_all(dir) {
            log::warn!("Unable to create the cache directory {:?}: {}", dir, err);
        }
        let mut cache = Self::new(dir);
        cache.data.subjects = read_slot(&cache.subjects_file).unwrap_or_default();
        cache.data.activities = read_slot(&cache.activities_file).unwrap_or_default();
        cache
    }

    /// Attach a [`MockBehaviour`] that decides when this cache, used as a
    /// mocked remote store, must fail
    pub fn set_mock_behaviour(&mut self, mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = mock_behaviour;
    }

    /// Overwrite both slots (and the in-memory copy) with this state
    pub fn remember(&mut self, state: &PlannerState) {
        self.data.subjects = state.subjects().to_vec();
        self.data.activities = state.activities().clone();
        write_slot(&self.subjects_file, &self.data.subjects);
        write_slot(&self.activities_file, &self.data.activities);
    }

    /// The last state this cache has seen
    pub fn recall(&self) -> PlannerState {
        PlannerState::from_parts(self.data.subjects.clone(), self.data.activities.clone())
    }
}

fn read_slot<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let file = match std::fs::File::open(path) {
        Err(err) => {
            log::debug!("Slot {:?} is not readable: {}", path, err);
            return None;
        },
        Ok(file) => file,
    };
    match serde_json::from_reader(file) {
        Err(err) => {
            log::warn!("Slot {:?} is corrupt, ignoring it: {}", path, err);
            None
        },
        Ok(value) => Some(value),
    }
}

fn write_slot<T: Serialize>(path: &Path, value: &T) {
    let file = match std::fs::File::create(path) {
        Err(err) => {
            log::warn!("Unable to save slot {:?}: {}", path, err);
            return;
        },
        Ok(f) => f,
    };
    if let Err(err) = serde_json::to_writer(file, value) {
        log::warn!("Unable to serialize slot {:?}: {}", path, err);
    }
}

#[async_trait]
impl StateStore for Cache {
    async fn fetch(&self) -> Result<PlannerState, PlannerError> {
        if let Some(mock) = &self.mock_behaviour {
            mock.lock().unwrap().can_fetch()?;
        }
        Ok(self.recall())
    }

    async fn replace(&mut self, state: &PlannerState) -> Result<(), PlannerError> {
        if let Some(mock) = &self.mock_behaviour {
            mock.lock().unwrap().can_replace()?;
        }
        self.remember(state);
        Ok(())
    }
}
