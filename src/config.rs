//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Name of the spreadsheet tab holding the subject palette.
/// Feel free to override it when initing this library.
pub static SUBJECTS_TABLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Subjects".to_string())));

/// Name of the spreadsheet tab holding the placed activities.
/// Feel free to override it when initing this library.
pub static ACTIVITIES_TABLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Activities".to_string())));
