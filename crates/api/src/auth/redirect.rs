//! Where to send the browser around login.

/// Default landing page after login or registration.
pub const DEFAULT_REDIRECT: &str = "/events/";

/// Login page path.
pub const LOGIN_PATH: &str = "/login/";

/// Login URL that returns the user to `next` afterwards.
pub fn login_url(next: &str) -> String {
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(next))
}

/// Accept `next` only when it points back into this site.
///
/// Local absolute paths are honoured; protocol-relative (`//host`),
/// absolute URLs and backslash tricks fall back to [`DEFAULT_REDIRECT`].
pub fn safe_next(next: &str) -> &str {
    let next = next.trim();
    let local = next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(char::is_control);
    if local {
        next
    } else {
        DEFAULT_REDIRECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_encodes_next() {
        assert_eq!(
            login_url("/events/3/apply/"),
            "/login/?next=%2Fevents%2F3%2Fapply%2F"
        );
    }

    #[test]
    fn local_paths_are_kept() {
        assert_eq!(safe_next("/my-applications/"), "/my-applications/");
        assert_eq!(safe_next("/events/1/?x=1"), "/events/1/?x=1");
    }

    #[test]
    fn foreign_targets_fall_back() {
        for next in [
            "",
            "https://evil.example/",
            "//evil.example/",
            "/\\evil.example",
            "javascript:alert(1)",
            "events/",
        ] {
            assert_eq!(safe_next(next), DEFAULT_REDIRECT, "{next:?}");
        }
    }
}
