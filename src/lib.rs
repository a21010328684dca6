//! This crate provides the moving parts of a drag-and-drop lesson planner.
//!
//! Users keep a palette of subjects (class-like entries with a level, a color
//! and a time range) and drop them onto calendar dates, which files a dated
//! copy (an activity) under that date. The whole state lives in the
//! [`planner`] module and is persisted as one document, full-replace on every
//! change.
//!
//! Because the store may be slow or unreachable, and the planner should come
//! up with usable data anyway, persistence is split the following way: a
//! remote [`StateStore`](traits::StateStore) (either the JSON relay in
//! [`client`], or the spreadsheet tables directly in [`sheet`]) and a local
//! two-slot [`cache`] are merged by a [`Provider`](provider::Provider), whose
//! `load` never fails. \
//! A [`PlannerSession`](session::PlannerSession) owns the state, applies the
//! gestures modeled in [`dragdrop`], and saves after every effective mutation.

pub mod error;
pub use error::PlannerError;

pub mod subject;
pub use subject::{Subject, SubjectForm};
pub mod activity;
pub use activity::Activity;
pub mod planner;
pub use planner::PlannerState;

pub mod traits;
pub mod client;
pub mod cache;
pub use cache::Cache;
pub mod sheet;
pub mod provider;
pub use provider::Provider;
pub mod session;
pub use session::PlannerSession;

pub mod dragdrop;
pub mod grid;

pub mod config;
pub mod mock_behaviour;
pub mod utils;
