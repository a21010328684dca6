//! Row layout of the two spreadsheet tables
//!
//! Column order is an explicit, versioned contract: the arrays below are the
//! only place it is defined, encoded tables lead with a header row naming the
//! columns, and decoding validates that header before trusting the rows.
//! Bump [`SCHEMA_VERSION`] whenever a column is added, renamed or reordered.

use std::collections::BTreeMap;

use crate::activity::Activity;
use crate::error::PlannerError;
use crate::subject::Subject;

/// Revision of the column layout below
pub const SCHEMA_VERSION: u32 = 1;

/// Columns of the subjects table, in storage order
pub const SUBJECT_COLUMNS: [&str; 6] = ["id", "title", "subtitle", "level", "symbol", "time"];

/// Columns of the activities table, in storage order.
///
/// The date leads: the table is a flattened, denormalized projection of the
/// date-keyed map, one row per activity occurrence.
pub const ACTIVITY_COLUMNS: [&str; 7] = ["date", "id", "title", "subtitle", "level", "symbol", "time"];

fn header_row(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn matches_header(row: &[String], columns: &[&str]) -> bool {
    row.len() == columns.len() && row.iter().zip(columns.iter()).all(|(cell, col)| cell == col)
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn optional_cell(row: &[String], index: usize) -> Option<String> {
    match cell(row, index) {
        "" => None,
        value => Some(value.to_string()),
    }
}

/// Whether a leading row claims to be a header, i.e. starts with the name of
/// the first schema column. Such a row must then match the schema exactly.
fn claims_header(row: &[String], columns: &[&str]) -> bool {
    cell(row, 0) == columns[0]
}

/// Flatten the subject palette into rows, header first
pub fn encode_subjects(subjects: &[Subject]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(subjects.len() + 1);
    rows.push(header_row(&SUBJECT_COLUMNS));
    for subject in subjects {
        rows.push(vec![
            subject.id().to_string(),
            subject.title().to_string(),
            subject.subtitle().unwrap_or("").to_string(),
            subject.level().to_string(),
            subject.symbol().to_string(),
            subject.time().unwrap_or("").to_string(),
        ]);
    }
    rows
}

/// Flatten the date-keyed activities into rows, header first.
///
/// Dates are written in key order; within a date, rows keep the list order, so
/// decoding reproduces the same ordered sequence.
pub fn encode_activities(activities: &BTreeMap<String, Vec<Activity>>) -> Vec<Vec<String>> {
    let mut rows = vec![header_row(&ACTIVITY_COLUMNS)];
    for (date, list) in activities {
        for activity in list {
            rows.push(vec![
                date.clone(),
                activity.id().to_string(),
                activity.title().to_string(),
                activity.subtitle().unwrap_or("").to_string(),
                activity.level().to_string(),
                activity.symbol().to_string(),
                activity.time().unwrap_or("").to_string(),
            ]);
        }
    }
    rows
}

/// Rebuild the subject palette from table rows.
///
/// A leading header row is validated against the schema and skipped. Rows may
/// omit trailing optional cells; a row without an id is a [`PlannerError::Decode`].
pub fn decode_subjects(rows: &[Vec<String>]) -> Result<Vec<Subject>, PlannerError> {
    let mut subjects = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if index == 0 && claims_header(row, &SUBJECT_COLUMNS) {
            if matches_header(row, &SUBJECT_COLUMNS) == false {
                return Err(PlannerError::Decode(format!(
                    "the subjects header {:?} does not match the v{} schema", row, SCHEMA_VERSION)));
            }
            continue;
        }
        let id = cell(row, 0);
        if id.is_empty() {
            return Err(PlannerError::Decode(format!("subjects row {} has no id", index)));
        }
        subjects.push(Subject::new(
            id.to_string(),
            cell(row, 1).to_string(),
            optional_cell(row, 2),
            cell(row, 3).to_string(),
            cell(row, 4).to_string(),
            optional_cell(row, 5),
        ));
    }
    Ok(subjects)
}

/// Rebuild the date-keyed activity map from table rows.
///
/// Rows are grouped back under their date key, preserving row order within
/// each date. Rows without a date or an id are a [`PlannerError::Decode`].
pub fn decode_activities(rows: &[Vec<String>]) -> Result<BTreeMap<String, Vec<Activity>>, PlannerError> {
    let mut activities: BTreeMap<String, Vec<Activity>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        if index == 0 && claims_header(row, &ACTIVITY_COLUMNS) {
            if matches_header(row, &ACTIVITY_COLUMNS) == false {
                return Err(PlannerError::Decode(format!(
                    "the activities header {:?} does not match the v{} schema", row, SCHEMA_VERSION)));
            }
            continue;
        }
        let date = cell(row, 0);
        if date.is_empty() {
            return Err(PlannerError::Decode(format!("activities row {} has no date", index)));
        }
        let id = cell(row, 1);
        if id.is_empty() {
            return Err(PlannerError::Decode(format!("activities row {} has no id", index)));
        }
        activities.entry(date.to_string()).or_insert_with(Vec::new).push(Activity::new(
            id.to_string(),
            cell(row, 2).to_string(),
            optional_cell(row, 3),
            cell(row, 4).to_string(),
            cell(row, 5).to_string(),
            optional_cell(row, 6),
        ));
    }
    Ok(activities)
}
