use axum::http::StatusCode;

use super::{escape, layout};

/// Error page for a non-success status, with the visitor's navigation.
pub fn error_page(status: StatusCode, message: &str, user: Option<&str>) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{code} {title}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to the homepage</a></p>",
        code = status.as_u16(),
        title = escape(title),
        message = escape(message),
    );
    layout(title, user, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_visitor_keeps_account_navigation() {
        let html = error_page(StatusCode::NOT_FOUND, "Event abc does not exist.", Some("jana"));
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("/my-applications/"));
        assert!(!html.contains(r#"href="/login/""#));
    }

    #[test]
    fn anonymous_visitor_gets_login_links() {
        let html = error_page(StatusCode::INTERNAL_SERVER_ERROR, "<oops>", None);
        assert!(html.contains("&lt;oops&gt;"));
        assert!(html.contains(r#"href="/login/""#));
    }
}
