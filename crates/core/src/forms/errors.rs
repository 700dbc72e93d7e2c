use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Key under which errors not tied to a single field are collected.
pub const NON_FIELD: &str = "__all__";

/// Validation messages grouped by form field, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD, message);
    }

    /// Messages for `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn non_field(&self) -> &[String] {
        self.get(NON_FIELD)
    }

    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(source: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in source.field_errors() {
            let field = field.to_string();
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", err.code));
                out.add(&field, message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("username", "first");
        errors.add("username", "second");
        errors.add_non_field("general");

        assert_eq!(errors.get("username"), ["first", "second"]);
        assert_eq!(errors.non_field(), ["general"]);
        assert!(errors.get("email").is_empty());
        assert!(!errors.has("email"));
        assert!(!errors.is_empty());
    }
}
