//! Registration and login pages.

use vylety_core::forms::{FieldErrors, LoginForm, RegistrationForm};

use super::forms::{hidden, input, non_field_errors};
use super::layout;

/// The registration form, pre-filled with what was submitted (passwords excepted).
pub fn register_form(form: &RegistrationForm, errors: &FieldErrors, user: Option<&str>) -> String {
    let fields = [
        input("username", "Username", "text", &form.username, true, errors),
        input("first_name", "First name", "text", &form.first_name, false, errors),
        input("last_name", "Last name", "text", &form.last_name, false, errors),
        input("email", "Email", "email", &form.email, false, errors),
        input("password1", "Password", "password", "", true, errors),
        input("password2", "Password confirmation", "password", "", true, errors),
        input("dob", "Date of birth", "date", &form.dob, true, errors),
        input("street", "Street", "text", &form.street, true, errors),
        input("number", "House number", "text", &form.number, true, errors),
        input("city", "City", "text", &form.city, true, errors),
        input("postal_code", "Postal code", "text", &form.postal_code, true, errors),
        input("phone", "Phone", "tel", &form.phone, true, errors),
        input("school", "School", "text", &form.school, true, errors),
        input("grade", "Grade", "text", &form.grade, true, errors),
        input("id_number", "ID number", "text", &form.id_number, true, errors),
    ];

    let body = format!(
        r#"<h1>Register</h1>
<form method="post" action="/register/">
{non_field}{fields}
  <button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login/">Log in</a></p>"#,
        non_field = non_field_errors(errors),
        fields = fields.join("\n"),
    );
    layout("Register", user, &body)
}

/// The login form. `form.next` is carried through as a hidden field.
pub fn login_form(form: &LoginForm, errors: &FieldErrors, user: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
<form method="post" action="/login/">
{non_field}{username}
{password}
  {next}
  <button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/register/">Register</a></p>"#,
        non_field = non_field_errors(errors),
        username = input("username", "Username", "text", &form.username, true, errors),
        password = input("password", "Password", "password", "", true, errors),
        next = hidden("next", &form.next),
    );
    layout("Log in", user, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_renders_every_field() {
        let html = register_form(&RegistrationForm::default(), &FieldErrors::new(), None);
        for name in [
            "username",
            "first_name",
            "last_name",
            "email",
            "password1",
            "password2",
            "dob",
            "street",
            "city",
            "number",
            "postal_code",
            "phone",
            "school",
            "grade",
            "id_number",
        ] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
    }

    #[test]
    fn login_form_carries_next_and_non_field_errors() {
        let form = LoginForm {
            username: "jana".into(),
            password: "secret".into(),
            next: "/events/3/apply/".into(),
        };
        let mut errors = FieldErrors::new();
        errors.add_non_field("Please enter a correct username and password.");

        let html = login_form(&form, &errors, None);
        assert!(html.contains(r#"name="next" value="/events/3/apply/""#));
        assert!(html.contains("Please enter a correct username and password."));
        assert!(!html.contains("secret"));
    }
}
