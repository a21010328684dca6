//! Some utility functions

use crate::grid::{MonthGrid, WEEKDAY_HEADERS};
use crate::planner::PlannerState;

/// A debug utility that pretty-prints the palette and the planned dates
pub fn print_state(state: &PlannerState) {
    println!("PALETTE");
    for subject in state.subjects() {
        println!("    [{}] {}\t{}", subject.level(), subject.title(), subject.time().unwrap_or("-"));
    }
    println!("PLANNED");
    for (date, list) in state.activities() {
        for activity in list {
            println!("    {} {}\t{}", date, activity.title(), activity.time().unwrap_or("-"));
        }
    }
}

/// A debug utility that pretty-prints a month, marking the days that have
/// activities planned
pub fn print_month(state: &PlannerState, grid: &MonthGrid) {
    println!("{} {}", grid.headline(), grid.year());
    println!("{}", WEEKDAY_HEADERS.join(" "));
    for week in grid.weeks() {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("    "),
                Some(day) => {
                    let mark = if state.activities_on(&grid.date_key(*day)).is_empty() { ' ' } else { '*' };
                    line.push_str(&format!("{:>2}{} ", day, mark));
                },
            }
        }
        println!("{}", line.trim_end());
    }
}
