//! Activities: dated placements of a subject on the calendar

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// A dated instance of a subject's attributes.
///
/// An activity is a copy made at placement time, not a reference: it carries
/// the subject's fields as they were when it was dropped onto a date. Its date
/// is not part of the record itself, it is the key the activity is filed
/// under in the planner state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    level: String,
    symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
}

impl Activity {
    /// Create an activity from already-decoded fields
    pub fn new(id: String, title: String, subtitle: Option<String>,
               level: String, symbol: String, time: Option<String>) -> Self
    {
        Self { id, title, subtitle, level, symbol, time }
    }

    pub fn id(&self) -> &str       { &self.id     }
    pub fn title(&self) -> &str    { &self.title  }
    pub fn level(&self) -> &str    { &self.level  }
    pub fn symbol(&self) -> &str   { &self.symbol }
    pub fn subtitle(&self) -> Option<&str> { self.subtitle.as_deref() }
    pub fn time(&self) -> Option<&str>     { self.time.as_deref()     }
}

impl From<&Subject> for Activity {
    /// Snapshot a subject into a placeable activity
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id().to_string(),
            title: subject.title().to_string(),
            subtitle: subject.subtitle().map(String::from),
            level: subject.level().to_string(),
            symbol: subject.symbol().to_string(),
            time: subject.time().map(String::from),
        }
    }
}
