//! Month layout computations for the calendar grid

use chrono::{Datelike, NaiveDate};

use crate::error::PlannerError;
use crate::planner::date_key;

/// Column headers of the grid, Monday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// A month laid out in Monday-first weeks.
///
/// Each week holds seven cells; `None` cells pad the days before the first and
/// after the last of the month. Monday sits in column 0 and Sunday in column 6.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    headline: String,
    weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Lay out a month. Fails when the year/month pair does not name a valid month.
    pub fn new(year: i32, month: u32) -> Result<Self, PlannerError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PlannerError::Validation("a valid year and month are required"))?;

        let lead = first.weekday().num_days_from_monday() as usize;
        let days = days_in_month(first);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        for day in 1..=days {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot != 0 {
            weeks.push(week);
        }

        Ok(Self {
            year,
            month,
            headline: first.format("%B").to_string().to_uppercase(),
            weeks,
        })
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }

    /// The upper-cased English month name shown in the banner (e.g. `MAY`)
    pub fn headline(&self) -> &str { &self.headline }

    /// The weeks of the month, Monday-first
    pub fn weeks(&self) -> &[[Option<u32>; 7]] { &self.weeks }

    /// The date key a day of this month is filed under
    pub fn date_key(&self, day: u32) -> String {
        date_key(self.year, self.month, day)
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (next_year, next_month) = match first.month() {
        12 => (first.year() + 1, 1),
        m => (first.year(), m + 1),
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap(/* the first of the month after a valid month always exists */);
    next_first.signed_duration_since(first).num_days() as u32
}
