//! Form binding and field-level validation.
//!
//! Each form is a `Deserialize` struct matching the submitted
//! `application/x-www-form-urlencoded` body. Every field defaults to an
//! empty string so a missing field surfaces as a "required" error on the
//! re-rendered page instead of an extractor rejection.
//!
//! - [`registration`] -- account + demographic fields.
//! - [`application`] -- the optional note attached to an event application.
//! - [`login`] -- username and password.

pub mod application;
pub mod errors;
pub mod login;
pub mod registration;

pub use application::ApplicationForm;
pub use errors::FieldErrors;
pub use login::LoginForm;
pub use registration::{RegistrationForm, ValidRegistration};

use std::borrow::Cow;

use validator::ValidationError;

/// Message used for every empty required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Custom validator: the (already trimmed) value must not be empty.
pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error("required", REQUIRED_MESSAGE));
    }
    Ok(())
}

/// Build a [`ValidationError`] carrying a display message.
pub(crate) fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
