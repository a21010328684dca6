//! Drag gestures and their outcomes
//!
//! A drag carries an explicit origin tag: either the subject palette or an
//! existing calendar cell. That tag, combined with where the drop landed,
//! decides whether the gesture is an addition, a move, or a removal.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::planner::PlannerState;
use crate::subject::Subject;

/// What a drag gesture carries, tagged by where it started
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DragPayload {
    /// The drag started on the subject palette: dropping it is a pure
    /// addition, with no source to remove
    FromPalette { subject: Subject },
    /// The drag started on an already-placed activity: dropping it moves
    /// (or removes) that placement
    FromCell { date: String, activity: Activity },
}

/// Where a drag gesture ended
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget {
    /// A calendar cell, identified by its date key
    Cell(String),
    /// The subject palette list
    Palette,
    /// Anywhere that is neither a calendar cell nor the palette
    Outside,
}

/// Apply a finished drag gesture to the planner state.
///
/// * palette → cell: place a snapshot of the subject (duplicate ids on the
///   same date are silently dropped);
/// * cell → cell: move the activity, a self-move being a benign remove + reinsert;
/// * cell → palette or outside: remove the activity with no reinsertion
///   (drag-out deletion);
/// * palette → palette or outside: nothing.
///
/// Returns whether the state changed, so the caller knows if a save is due.
pub fn apply_drop(state: &mut PlannerState, payload: DragPayload, target: DropTarget) -> bool {
    match (payload, target) {
        (DragPayload::FromPalette { subject }, DropTarget::Cell(date)) => {
            state.place_activity(&date, Activity::from(&subject))
        },
        (DragPayload::FromPalette { .. }, _) => false,
        (DragPayload::FromCell { date, activity }, DropTarget::Cell(to)) => {
            state.move_activity(&date, &to, activity)
        },
        (DragPayload::FromCell { date, activity }, _) => {
            state.remove_activity(&date, activity.id())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SubjectForm;

    fn state_with_subject() -> (PlannerState, Subject) {
        let mut state = PlannerState::new();
        let id = state.add_subject(&SubjectForm {
            title: "Math".to_string(),
            level: "1".to_string(),
            color: "blue".to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
        }).unwrap();
        let subject = state.subject(&id).unwrap().clone();
        (state, subject)
    }

    #[test]
    fn payloads_serialize_with_their_origin_tag() {
        let (_, subject) = state_with_subject();
        let json = serde_json::to_value(&DragPayload::FromPalette { subject: subject.clone() }).unwrap();
        assert_eq!(json["kind"], "fromPalette");
        assert_eq!(json["subject"]["title"], "Math");

        let json = serde_json::to_value(&DragPayload::FromCell {
            date: "2024-05-10".to_string(),
            activity: Activity::from(&subject),
        }).unwrap();
        assert_eq!(json["kind"], "fromCell");
        assert_eq!(json["date"], "2024-05-10");

        let parsed: DragPayload = serde_json::from_value(json).unwrap();
        match parsed {
            DragPayload::FromCell { ref date, .. } => assert_eq!(date, "2024-05-10"),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn palette_to_cell_places_a_copy() {
        let (mut state, subject) = state_with_subject();
        let changed = apply_drop(&mut state,
            DragPayload::FromPalette { subject: subject.clone() },
            DropTarget::Cell("2024-05-10".to_string()));
        assert!(changed);
        assert_eq!(state.activities_on("2024-05-10")[0].id(), subject.id());

        // A second identical drop is suppressed
        let changed = apply_drop(&mut state,
            DragPayload::FromPalette { subject },
            DropTarget::Cell("2024-05-10".to_string()));
        assert!(changed == false);
        assert_eq!(state.activities_on("2024-05-10").len(), 1);
    }

    #[test]
    fn cell_to_cell_moves_the_activity() {
        let (mut state, subject) = state_with_subject();
        let activity = Activity::from(&subject);
        state.place_activity("2024-05-10", activity.clone());

        let changed = apply_drop(&mut state,
            DragPayload::FromCell { date: "2024-05-10".to_string(), activity },
            DropTarget::Cell("2024-05-11".to_string()));
        assert!(changed);
        assert!(state.activities_on("2024-05-10").is_empty());
        assert_eq!(state.activities_on("2024-05-11").len(), 1);
    }

    #[test]
    fn dragging_out_of_the_grid_removes_the_activity() {
        let (mut state, subject) = state_with_subject();
        let activity = Activity::from(&subject);
        state.place_activity("2024-05-10", activity.clone());

        let changed = apply_drop(&mut state,
            DragPayload::FromCell { date: "2024-05-10".to_string(), activity },
            DropTarget::Outside);
        assert!(changed);
        assert!(state.activities().is_empty());
    }

    #[test]
    fn dropping_a_cell_activity_on_the_palette_removes_it() {
        let (mut state, subject) = state_with_subject();
        let activity = Activity::from(&subject);
        state.place_activity("2024-05-10", activity.clone());

        let changed = apply_drop(&mut state,
            DragPayload::FromCell { date: "2024-05-10".to_string(), activity },
            DropTarget::Palette);
        assert!(changed);
        assert!(state.activities().is_empty());
    }

    #[test]
    fn palette_drops_outside_the_grid_are_ignored() {
        let (mut state, subject) = state_with_subject();
        assert!(apply_drop(&mut state,
            DragPayload::FromPalette { subject: subject.clone() },
            DropTarget::Outside) == false);
        assert!(apply_drop(&mut state,
            DragPayload::FromPalette { subject },
            DropTarget::Palette) == false);
        assert!(state.activities().is_empty());
    }
}
