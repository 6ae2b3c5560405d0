//! Document renderer — assembles the standalone newsletter HTML.
//!
//! Pure function of the record snapshot: the same record always yields the
//! same bytes. Text fields go through `format_text`, dates through
//! `format_date`, the time through `format_time`. Nothing is escaped.

use tracing::debug;

use crate::format::{format_date, format_text, format_time};
use crate::models::{Event, NewsletterData};
use crate::render::stylesheet::stylesheet;

pub const ISSUE_LABEL: &str = "H2 Update";

pub const UNSUBSCRIBE_NOTICE: &str =
    "Falls Sie keine H2 Updates mehr erhalten möchten, melden Sie sich bitte per E-Mail ab.";

pub const SIGN_OFF: &str = "Sonnige Grüße,";

pub const LEARN_MORE_LABEL: &str = "Mehr erfahren";

pub const REGISTER_LABEL: &str = "Jetzt anmelden";

/// Renders the full HTML document for a newsletter record.
pub fn generate_html(data: &NewsletterData) -> String {
    let issue_date = format_date(&data.date);

    let events: String = data.events.iter().map(render_event).collect();

    debug!(
        "Rendering newsletter {} with {} events",
        issue_date,
        data.events.len()
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{ISSUE_LABEL} {issue_date}</title>
<style>
{style}</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>Newsletter {ISSUE_LABEL} – {issue_date}</h1>
</div>
<div class="content">
<p class="hello">{greeting},</p>
<p class="hello">{introduction}</p>
{events}</div>
<div class="footer">
<p>{closing}</p>
<p>{UNSUBSCRIBE_NOTICE}</p>
<p>{SIGN_OFF}<br>{sender}</p>
</div>
</div>
</body>
</html>
"#,
        style = stylesheet(),
        greeting = format_text(&data.greeting),
        introduction = format_text(&data.introduction),
        closing = format_text(&data.closing_message),
        sender = format_text(&data.sender_name),
    )
}

/// One event card. The time line and the links block are conditional on the
/// raw fields being non-empty.
fn render_event(event: &Event) -> String {
    let mut card = String::new();
    card.push_str("<div class=\"event-wrapper\">\n<div class=\"event-card\">\n");
    card.push_str(&format!(
        "<div class=\"event-title\">{}</div>\n",
        format_text(&event.title)
    ));
    card.push_str(&format!(
        "<p><strong>Wann:</strong> {}</p>\n",
        format_date(&event.date)
    ));
    if !event.time.is_empty() {
        card.push_str(&format!(
            "<p><strong>Uhrzeit:</strong> {} Uhr</p>\n",
            format_time(&event.time)
        ));
    }
    card.push_str(&format!(
        "<p><strong>Wo:</strong> {}</p>\n",
        format_text(&event.location)
    ));
    card.push_str(&format!("<p>{}</p>\n", format_text(&event.description)));
    if event.has_links() {
        card.push_str(&render_links(event));
    }
    card.push_str("</div>\n</div>\n");
    card
}

fn render_links(event: &Event) -> String {
    let mut links = String::from("<div class=\"event-links\">\n");
    if !event.learn_more_url.is_empty() {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"event-link\">{LEARN_MORE_LABEL}</a>\n",
            event.learn_more_url
        ));
    }
    if !event.register_url.is_empty() {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"event-register-link\">{REGISTER_LABEL}</a>\n",
            event.register_url
        ));
    }
    links.push_str("</div>\n");
    links
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
