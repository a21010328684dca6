//! The spreadsheet side of persistence
//!
//! [`schema`] fixes the row layout of the two tables the state flattens into,
//! and [`client`] reads and rewrites those tables through a spreadsheet
//! "values" REST API.

pub mod schema;
pub mod client;
pub use client::SheetClient;
