//! Event listing and detail pages.

use vylety_core::application_status::ApplicationStatus;
use vylety_db::models::event::Event;

use super::{escape, format_date, layout, paragraphs};

/// All events, in the order given (earliest first).
pub fn list(events: &[Event], user: Option<&str>) -> String {
    let body = if events.is_empty() {
        "<h1>Events</h1>\n<p>No excursions are scheduled right now.</p>".to_string()
    } else {
        let items: Vec<String> = events
            .iter()
            .map(|event| {
                format!(
                    r#"  <li class="event">
    <h2><a href="/events/{id}/">{name}</a></h2>
    <p class="meta">{date} · {place}</p>
    <p>{description}</p>
  </li>"#,
                    id = event.id,
                    name = escape(&event.name),
                    date = format_date(event.date),
                    place = escape(&event.place),
                    description = escape(&event.description),
                )
            })
            .collect();
        format!(
            "<h1>Events</h1>\n<ul class=\"events\">\n{}\n</ul>",
            items.join("\n")
        )
    };
    layout("Events", user, &body)
}

/// One event with all its practical information.
///
/// `application` is the signed-in visitor's existing application status, if
/// they have one; it replaces the apply link.
pub fn detail(event: &Event, user: Option<&str>, application: Option<ApplicationStatus>) -> String {
    let schedule = if event.schedule_coming_later {
        "<p class=\"notice\">The detailed schedule will be published later.</p>\n"
    } else {
        ""
    };

    let action = match (user, application) {
        (Some(_), Some(status)) => format!(
            r#"<p class="applied">You have applied to this event. Status: <strong>{}</strong>. <a href="/my-applications/">My applications</a></p>"#,
            escape(status.label())
        ),
        _ => format!(r#"<p><a class="button" href="/events/{}/apply/">Apply</a></p>"#, event.id),
    };

    let body = format!(
        r#"<article class="event-detail">
<h1>{name}</h1>
<p class="meta">{date} · {place}</p>
{schedule}<p class="lead">{description}</p>
{long_description}
<dl>
  <dt>For</dt><dd>{target_group}</dd>
  <dt>Age</dt><dd>{age_group}</dd>
  <dt>Price</dt><dd>{price}</dd>
  <dt>Meals</dt><dd>{food}</dd>
  <dt>What to bring</dt><dd>{to_bring}</dd>
  <dt>Contact</dt><dd>{contact}</dd>
</dl>
{action}
</article>"#,
        name = escape(&event.name),
        date = format_date(event.date),
        place = escape(&event.place),
        description = escape(&event.description),
        long_description = paragraphs(&event.long_description),
        target_group = escape(&event.target_group),
        age_group = escape(&event.age_group),
        price = paragraphs(&event.price_description),
        food = paragraphs(&event.food_info),
        to_bring = paragraphs(&event.to_bring),
        contact = paragraphs(&event.contact),
    );
    layout(&event.name, user, &body)
}
