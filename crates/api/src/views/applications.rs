//! Application form and the "my applications" list.

use vylety_core::forms::{ApplicationForm, FieldErrors};
use vylety_db::models::application::ApplicationWithEvent;
use vylety_db::models::event::Event;

use super::forms::{non_field_errors, textarea};
use super::{escape, format_date, layout};

/// The note form for applying to `event`.
pub fn apply_form(
    event: &Event,
    form: &ApplicationForm,
    errors: &FieldErrors,
    user: Option<&str>,
) -> String {
    let body = format!(
        r#"<h1>Apply: {name}</h1>
<p class="meta">{date} · {place}</p>
<form method="post" action="/events/{id}/apply/">
{non_field}{note}
  <button type="submit">Submit application</button>
</form>
<p><a href="/events/{id}/">Back to the event</a></p>"#,
        name = escape(&event.name),
        date = format_date(event.date),
        place = escape(&event.place),
        id = event.id,
        non_field = non_field_errors(errors),
        note = textarea("note", "Note (optional)", &form.note, errors),
    );
    layout(&format!("Apply: {}", event.name), user, &body)
}

/// The signed-in user's applications with their events.
pub fn my_applications(applications: &[ApplicationWithEvent], user: Option<&str>) -> String {
    let body = if applications.is_empty() {
        r#"<h1>My applications</h1>
<p>You have not applied to any event yet. <a href="/events/">Browse events</a></p>"#
            .to_string()
    } else {
        let rows: Vec<String> = applications
            .iter()
            .map(|a| {
                let status = a.status();
                format!(
                    r#"  <tr>
    <td><a href="/events/{event_id}/">{name}</a></td>
    <td>{date}</td>
    <td>{place}</td>
    <td>{note}</td>
    <td class="status status-{status_name}">{label}</td>
  </tr>"#,
                    event_id = a.event_id,
                    name = escape(&a.event_name),
                    date = format_date(a.event_date),
                    place = escape(&a.event_place),
                    note = escape(&a.note),
                    status_name = status.name(),
                    label = escape(status.label()),
                )
            })
            .collect();
        format!(
            r#"<h1>My applications</h1>
<table class="applications">
  <thead><tr><th>Event</th><th>Date</th><th>Place</th><th>Note</th><th>Status</th></tr></thead>
  <tbody>
{}
  </tbody>
</table>"#,
            rows.join("\n")
        )
    };
    layout("My applications", user, &body)
}
