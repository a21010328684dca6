//! The in-memory planner state, and the mutations user gestures boil down to
//!
//! The state is the sole unit of persistence: it is saved and loaded whole,
//! never incrementally. Mutations only ever touch the model; pushing the
//! result to a store is the caller's business (see
//! [`PlannerSession`](crate::session::PlannerSession), which saves after
//! every effective mutation).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::error::PlannerError;
use crate::subject::{symbol_for_color, Subject, SubjectForm};

/// The date key activities are filed under (`YYYY-MM-DD`)
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// The common prefix of every date key in a month (`YYYY-MM-`)
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{:04}-{:02}-", year, month)
}

/// The subject palette plus the date-keyed activities.
///
/// Invariants:
/// * subjects keep insertion order, activities keep per-date insertion order;
/// * an activity id appears at most once under a given date;
/// * no date key maps to an empty list (removals prune the key).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    subjects: Vec<Subject>,
    #[serde(default)]
    activities: BTreeMap<String, Vec<Activity>>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a state from decoded parts. Empty activity lists are pruned
    /// so the decoded state upholds the same invariants as a mutated one.
    pub fn from_parts(subjects: Vec<Subject>, mut activities: BTreeMap<String, Vec<Activity>>) -> Self {
        activities.retain(|_, list| list.is_empty() == false);
        Self { subjects, activities }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn activities(&self) -> &BTreeMap<String, Vec<Activity>> {
        &self.activities
    }

    /// The activities placed on a date, oldest placement first
    pub fn activities_on(&self, date: &str) -> &[Activity] {
        self.activities.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.activities.is_empty()
    }

    /// Validate the creation form and append a new subject.
    ///
    /// The new id is one more than the largest numeric id already in the
    /// palette (ids that do not parse as numbers are skipped). Returns the
    /// assigned id; on a validation error nothing is mutated.
    pub fn add_subject(&mut self, form: &SubjectForm) -> Result<String, PlannerError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(PlannerError::Validation("a subject title is required"));
        }
        if form.level.is_empty() {
            return Err(PlannerError::Validation("a level must be selected"));
        }
        if form.color.is_empty() {
            return Err(PlannerError::Validation("a color must be selected"));
        }
        if form.start_time.is_empty() || form.end_time.is_empty() {
            return Err(PlannerError::Validation("both start and end times are required"));
        }

        let id = self.next_subject_id();
        self.subjects.push(Subject::new(
            id.clone(),
            title.to_string(),
            None,
            form.level.clone(),
            symbol_for_color(&form.color).to_string(),
            Some(format!("{} - {}", form.start_time, form.end_time)),
        ));
        Ok(id)
    }

    fn next_subject_id(&self) -> String {
        let max = self.subjects.iter()
            .filter_map(|s| s.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Remove a subject and, on every date, the activities that carry its id.
    /// Returns whether anything was removed.
    pub fn remove_subject(&mut self, id: &str) -> bool {
        let subjects_before = self.subjects.len();
        self.subjects.retain(|s| s.id() != id);

        let placements_before: usize = self.activities.values().map(Vec::len).sum();
        self.activities.retain(|_, list| {
            list.retain(|a| a.id() != id);
            list.is_empty() == false
        });
        let placements_after: usize = self.activities.values().map(Vec::len).sum();

        subjects_before != self.subjects.len() || placements_before != placements_after
    }

    /// Place an activity under a date.
    ///
    /// When the date already holds an activity with the same id, the placement
    /// is silently dropped (first write wins). Returns whether it was placed.
    pub fn place_activity(&mut self, date: &str, activity: Activity) -> bool {
        let list = self.activities.entry(date.to_string()).or_insert_with(Vec::new);
        if list.iter().any(|a| a.id() == activity.id()) {
            return false;
        }
        list.push(activity);
        true
    }

    /// Remove the activity with this id from a date, pruning the date key when
    /// its list empties. Returns whether anything was removed.
    pub fn remove_activity(&mut self, date: &str, id: &str) -> bool {
        let removed = match self.activities.get_mut(date) {
            None => false,
            Some(list) => {
                let before = list.len();
                list.retain(|a| a.id() != id);
                list.len() != before
            }
        };
        if self.activities.get(date).map(Vec::is_empty).unwrap_or(false) {
            self.activities.remove(date);
        }
        removed
    }

    /// Remove the activity from its source date, then place it at the
    /// destination. A self-move is a benign remove + reinsert; moving onto a
    /// date that already holds the same id drops the activity (the placement
    /// half is suppressed). Returns whether the state changed.
    pub fn move_activity(&mut self, from: &str, to: &str, activity: Activity) -> bool {
        let removed = self.remove_activity(from, activity.id());
        let placed = self.place_activity(to, activity);
        removed || placed
    }

    /// Delete every date key of the given month. Returns how many dates were cleared.
    pub fn clear_month(&mut self, year: i32, month: u32) -> usize {
        let prefix = month_prefix(year, month);
        let before = self.activities.len();
        self.activities.retain(|date, _| date.starts_with(&prefix) == false);
        before - self.activities.len()
    }
}
