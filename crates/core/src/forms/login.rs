use serde::Deserialize;

use super::{FieldErrors, REQUIRED_MESSAGE};

/// Credentials submitted to `POST /login/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Where to go after a successful login.
    pub next: String,
}

impl LoginForm {
    /// Check that both credentials are present.
    ///
    /// Whether they are *correct* is decided against the user store.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.add("username", REQUIRED_MESSAGE);
        }
        if self.password.is_empty() {
            errors.add("password", REQUIRED_MESSAGE);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
