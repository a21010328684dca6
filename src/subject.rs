//! Subjects: the reusable templates users drag onto the calendar

use serde::{Deserialize, Serialize};

/// A reusable template describing a kind of class: a display title, a level
/// marker (a "1".."N" style tag), a symbol class controlling how it is drawn,
/// and a default time range.
///
/// Subjects are never edited in place. They are created from a
/// [`SubjectForm`] and live until they are explicitly removed, which also
/// removes every activity that was placed from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    level: String,
    symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
}

impl Subject {
    /// Create a subject from already-validated fields (e.g. decoded from the store)
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

/// The raw content of the "new subject" form, before any validation happened.
///
/// `level` and `color` hold the value of the selected choice, or stay empty
/// when nothing was selected yet.
#[derive(Clone, Debug, Default)]
pub struct SubjectForm {
    pub title: String,
    pub level: String,
    pub color: String,
    pub start_time: String,
    pub end_time: String,
}

/// Maps the color choice of the creation form to the symbol class carried by
/// subjects and activities
pub fn symbol_for_color(color: &str) -> &'static str {
    match color {
        "red" => "level-red",
        _ => "level-blue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mapping() {
        assert_eq!(symbol_for_color("red"), "level-red");
        assert_eq!(symbol_for_color("blue"), "level-blue");
        assert_eq!(symbol_for_color("teal"), "level-blue");
    }

    #[test]
    fn serde_subject_skips_missing_optionals() {
        let subject = Subject::new("1".into(), "Math".into(), None,
                                   "1".into(), "level-blue".into(), None);
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json, serde_json::json!({
            "id": "1", "title": "Math", "level": "1", "symbol": "level-blue"
        }));

        let parsed: Subject = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, subject);
    }
}
