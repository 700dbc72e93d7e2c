//! Server-side HTML rendering.
//!
//! Views are plain functions from domain data to an HTML `String`; handlers
//! wrap the result in [`axum::response::Html`]. Every interpolated value
//! passes through [`escape`].

pub mod accounts;
pub mod applications;
pub mod errors;
pub mod events;
pub mod forms;
pub mod pages;

use vylety_core::types::Date;

const SITE_NAME: &str = "Výlety za vědou";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Dates as read in Czech: `17. 4. 2026`.
pub fn format_date(date: Date) -> String {
    date.format("%-d. %-m. %Y").to_string()
}

/// Free text as paragraphs: blank lines split paragraphs, single newlines
/// become `<br>`.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let lines: Vec<String> = p.lines().map(escape).collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap page content in the site chrome.
///
/// `user` is the signed-in username; it switches the navigation between
/// register/login links and the applications link plus logout button.
pub fn layout(title: &str, user: Option<&str>, body: &str) -> String {
    let account_nav = match user {
        Some(username) => format!(
            r#"<a href="/my-applications/">My applications</a>
      <span class="user">{}</span>
      <form method="post" action="/logout/" class="inline"><button type="submit">Log out</button></form>"#,
            escape(username)
        ),
        None => r#"<a href="/register/">Register</a>
      <a href="/login/">Log in</a>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="cs">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {site}</title>
</head>
<body>
  <header>
    <nav>
      <a href="/" class="brand">{site}</a>
      <a href="/events/">Events</a>
      {account_nav}
    </nav>
  </header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        site = SITE_NAME,
    )
}
