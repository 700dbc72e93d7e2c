//! Account registration form: identity fields plus the demographic data the
//! organisers need for every participant.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use super::{error, required, FieldErrors};
use crate::types::Date;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Input date format for `dob` (HTML `<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw registration submission. All strings as posted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationForm {
    #[validate(
        custom(function = "valid_username"),
        length(max = 150, message = "Ensure this value has at most 150 characters.")
    )]
    pub username: String,
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub first_name: String,
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub last_name: String,
    #[validate(
        custom(function = "optional_email"),
        length(max = 254, message = "Ensure this value has at most 254 characters.")
    )]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub password1: String,
    #[validate(
        custom(function = "required"),
        must_match(other = "password1", message = "The two password fields didn't match.")
    )]
    pub password2: String,
    #[validate(custom(function = "valid_birth_date"))]
    pub dob: String,
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub street: String,
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub city: String,
    #[validate(
        custom(function = "required"),
        length(max = 10, message = "Ensure this value has at most 10 characters.")
    )]
    pub number: String,
    #[validate(
        custom(function = "required"),
        length(max = 10, message = "Ensure this value has at most 10 characters.")
    )]
    pub postal_code: String,
    #[validate(
        custom(function = "required"),
        length(max = 20, message = "Ensure this value has at most 20 characters.")
    )]
    pub phone: String,
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub school: String,
    #[validate(
        custom(function = "required"),
        length(max = 10, message = "Ensure this value has at most 10 characters.")
    )]
    pub grade: String,
    #[validate(
        custom(function = "required"),
        length(max = 20, message = "Ensure this value has at most 20 characters.")
    )]
    pub id_number: String,
}

/// A registration that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext; hashed by the caller before it is stored.
    pub password: String,
    pub dob: Date,
    pub street: String,
    pub city: String,
    pub number: String,
    pub postal_code: String,
    pub phone: String,
    pub school: String,
    pub grade: String,
    pub id_number: String,
}

impl RegistrationForm {
    /// Copy with surrounding whitespace stripped from every non-password field.
    pub fn normalized(&self) -> Self {
        let t = |s: &String| s.trim().to_string();
        Self {
            username: t(&self.username),
            first_name: t(&self.first_name),
            last_name: t(&self.last_name),
            email: t(&self.email),
            password1: self.password1.clone(),
            password2: self.password2.clone(),
            dob: t(&self.dob),
            street: t(&self.street),
            city: t(&self.city),
            number: t(&self.number),
            postal_code: t(&self.postal_code),
            phone: t(&self.phone),
            school: t(&self.school),
            grade: t(&self.grade),
            id_number: t(&self.id_number),
        }
    }

    /// Run every field rule and, on success, return the typed registration.
    ///
    /// Password strength problems are reported on `password2`, next to the
    /// confirmation box. Username uniqueness needs the user store and is
    /// left to the caller.
    pub fn parse(&self) -> Result<ValidRegistration, FieldErrors> {
        let form = self.normalized();

        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if !form.password1.is_empty() && !errors.has("password2") {
            for problem in password_problems(&form.password1, &form.username) {
                errors.add("password2", problem);
            }
        }

        let dob = parse_date(&form.dob);
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(dob) = dob else {
            errors.add("dob", "Enter a valid date.");
            return Err(errors);
        };

        Ok(ValidRegistration {
            username: form.username,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password1,
            dob,
            street: form.street,
            city: form.city,
            number: form.number,
            postal_code: form.postal_code,
            phone: form.phone,
            school: form.school,
            grade: form.grade,
            id_number: form.id_number,
        })
    }
}

/// Password strength rules. Returns every rule the password breaks.
pub fn password_problems(password: &str, username: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push("This password is too short. It must contain at least 8 characters.");
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.");
    }
    if username.chars().count() >= 3
        && password.to_lowercase().contains(&username.to_lowercase())
    {
        problems.push("The password is too similar to the username.");
    }
    problems
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn valid_username(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !value.chars().all(allowed) {
        return Err(error(
            "username",
            "Enter a valid username. This value may contain only letters, \
             numbers, and @/./+/-/_ characters.",
        ));
    }
    Ok(())
}

fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(error("email", "Enter a valid email address."))
    }
}

fn valid_birth_date(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    let date = parse_date(value).ok_or_else(|| error("date", "Enter a valid date."))?;
    if date > Utc::now().date_naive() {
        return Err(error(
            "future_date",
            "Date of birth cannot be in the future.",
        ));
    }
    Ok(())
}
