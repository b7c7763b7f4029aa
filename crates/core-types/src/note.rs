use crate::CoreError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length of a note name, in characters. Mirrors `VARCHAR(50)`.
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum length of a note description, in characters. Mirrors `VARCHAR(255)`.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MIN_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Ids accepted by the single-note lookup route.
pub const NOTE_ID_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// A note as stored in the `notes` table and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub done: bool,
}

/// The body of a note creation request. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub name: String,
    pub description: String,
    pub done: bool,
}

impl NewNote {
    /// Rejects values the `notes` columns cannot hold.
    ///
    /// Lengths are counted in characters, not bytes, to match how
    /// PostgreSQL measures `VARCHAR(n)`.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_length("name", &self.name, NAME_MAX_CHARS)?;
        check_length("description", &self.description, DESCRIPTION_MAX_CHARS)?;
        Ok(())
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::invalid(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Offset/limit window for listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NotePage {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for NotePage {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl NotePage {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.skip < 0 {
            return Err(CoreError::invalid("skip", "must not be negative"));
        }
        if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&self.limit) {
            return Err(CoreError::invalid(
                "limit",
                format!("must be between {MIN_PAGE_LIMIT} and {MAX_PAGE_LIMIT}"),
            ));
        }
        Ok(())
    }
}

/// Checks a note id against the range the lookup route serves.
pub fn validate_note_id(note_id: i32) -> Result<i32, CoreError> {
    if NOTE_ID_RANGE.contains(&note_id) {
        Ok(note_id)
    } else {
        Err(CoreError::invalid(
            "note_id",
            format!(
                "must be between {} and {}",
                NOTE_ID_RANGE.start(),
                NOTE_ID_RANGE.end()
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(name: &str, description: &str) -> NewNote {
        NewNote {
            name: name.to_string(),
            description: description.to_string(),
            done: false,
        }
    }

    #[test]
    fn accepts_values_at_the_column_limits() {
        let note = new_note(&"n".repeat(50), &"d".repeat(255));
        assert!(note.validate().is_ok());
    }

    #[test]
    fn rejects_overlong_name_and_description() {
        let err = new_note(&"n".repeat(51), "ok").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref field, _) if field == "name"));

        let err = new_note("ok", &"d".repeat(256)).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref field, _) if field == "description"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 50 two-byte characters fit in VARCHAR(50).
        let note = new_note(&"é".repeat(50), "multibyte");
        assert!(note.validate().is_ok());
    }

    #[test]
    fn new_note_requires_every_field() {
        let missing_done = r#"{"name": "a", "description": "b"}"#;
        assert!(serde_json::from_str::<NewNote>(missing_done).is_err());

        let full = r#"{"name": "Alduin", "description": "Testing", "done": true}"#;
        let note: NewNote = serde_json::from_str(full).unwrap();
        assert!(note.done);
    }

    #[test]
    fn page_defaults_and_bounds() {
        let page: NotePage = serde_json::from_str("{}").unwrap();
        assert_eq!(page, NotePage::default());
        assert!(page.validate().is_ok());

        assert!(NotePage { skip: 0, limit: 9 }.validate().is_err());
        assert!(NotePage { skip: 0, limit: 101 }.validate().is_err());
        assert!(NotePage { skip: 0, limit: 100 }.validate().is_ok());
        assert!(NotePage { skip: -1, limit: 10 }.validate().is_err());
    }

    #[test]
    fn note_id_range() {
        assert!(validate_note_id(0).is_err());
        assert_eq!(validate_note_id(1), Ok(1));
        assert_eq!(validate_note_id(10), Ok(10));
        assert!(validate_note_id(11).is_err());
    }
}
