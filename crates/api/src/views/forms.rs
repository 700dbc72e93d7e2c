//! Form field widgets with inline error messages.

use vylety_core::forms::FieldErrors;

use super::escape;

/// Error list for one field, empty when the field is valid.
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: Vec<String> = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e)))
        .collect();
    format!(r#"<ul class="errorlist">{}</ul>"#, items.concat())
}

/// Errors that belong to the form as a whole.
pub fn non_field_errors(errors: &FieldErrors) -> String {
    error_list(errors.non_field())
}

/// A labelled `<input>` with its current value and errors.
///
/// Password inputs are never pre-filled.
pub fn input(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    required: bool,
    errors: &FieldErrors,
) -> String {
    let value = if input_type == "password" { "" } else { value };
    let required = if required { " required" } else { "" };
    format!(
        r#"<p>
  <label for="id_{name}">{label}</label>
  {errors}<input type="{input_type}" name="{name}" id="id_{name}" value="{value}"{required}>
</p>"#,
        label = escape(label),
        errors = error_list(errors.get(name)),
        value = escape(value),
    )
}

/// A labelled `<textarea>` with its current value and errors.
pub fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<p>
  <label for="id_{name}">{label}</label>
  {errors}<textarea name="{name}" id="id_{name}" rows="4">{value}</textarea>
</p>"#,
        label = escape(label),
        errors = error_list(errors.get(name)),
        value = escape(value),
    )
}

/// Hidden field, used to carry `next` through the login form.
pub fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{name}" value="{}">"#,
        escape(value)
    )
}
