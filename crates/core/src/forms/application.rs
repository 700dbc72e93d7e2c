use serde::Deserialize;
use validator::Validate;

use super::FieldErrors;

/// Upper bound on the note, in characters.
pub const MAX_NOTE_CHARS: usize = 2000;

/// The note a user attaches when applying to an event.
///
/// User and event are bound server-side; the form carries nothing else.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ApplicationForm {
    #[validate(length(max = 2000, message = "Ensure this value has at most 2000 characters."))]
    pub note: String,
}

impl ApplicationForm {
    /// Validate and return the note, trimmed. An empty note is allowed.
    pub fn parse(&self) -> Result<String, FieldErrors> {
        let form = ApplicationForm {
            note: self.note.trim().to_string(),
        };
        form.validate()?;
        Ok(form.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_note_is_valid() {
        assert_eq!(ApplicationForm::default().parse().unwrap(), "");
    }

    #[test]
    fn note_is_trimmed() {
        let form = ApplicationForm {
            note: "  vegetarian lunch please \n".into(),
        };
        assert_eq!(form.parse().unwrap(), "vegetarian lunch please");
    }

    #[test]
    fn overlong_note_is_rejected() {
        let form = ApplicationForm {
            note: "ž".repeat(MAX_NOTE_CHARS + 1),
        };
        let errors = form.parse().unwrap_err();
        assert!(errors.has("note"));
    }

    #[test]
    fn note_length_counts_characters_not_bytes() {
        let form = ApplicationForm {
            note: "ž".repeat(MAX_NOTE_CHARS),
        };
        assert!(form.parse().is_ok());
    }
}
