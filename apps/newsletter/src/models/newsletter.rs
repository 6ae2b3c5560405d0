//! Newsletter record — the complete editable snapshot driving rendering.
//!
//! Every string field is free-form text. Deserialisation is lenient: a field
//! that is missing, `null`, or not a JSON string becomes `""`, so a record
//! produced by any form or import always loads.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_GREETING: &str = "Guten Tag";

pub const DEFAULT_INTRODUCTION: &str = "hier erhalten Sie eine Übersicht der wichtigsten Veranstaltungen zum Thema Wasserstoff den kommenden Wochen. Nutzen Sie die Gelegenheit, sich über neue Entwicklungen und spannende Projekte zu informieren. Wir freuen uns, Sie bei einer der Veranstaltungen zu sehen!";

pub const DEFAULT_CLOSING_MESSAGE: &str =
    "Wir freuen uns auf ein Wiedersehen bei einer der Veranstaltungen!";

/// One newsletter-listed happening. Identity is positional within
/// `NewsletterData::events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Raw date, usually `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Raw time, usually `HH:mm`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Empty string means absent.
    #[serde(default, deserialize_with = "lenient_string")]
    pub learn_more_url: String,
    /// Empty string means absent.
    #[serde(default, deserialize_with = "lenient_string")]
    pub register_url: String,
}

impl Event {
    /// The event appended by "add event": every field empty.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn has_links(&self) -> bool {
        !self.learn_more_url.is_empty() || !self.register_url.is_empty()
    }

    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.date,
            &self.time,
            &self.location,
            &self.description,
            &self.learn_more_url,
            &self.register_url,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

/// Issue metadata plus the ordered event list. `events` order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterData {
    /// Raw issue date, same contract as `Event::date`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub greeting: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub introduction: String,
    #[serde(default, deserialize_with = "lenient_events")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub closing_message: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_name: String,
}

impl NewsletterData {
    /// The record an editor session starts with.
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            introduction: DEFAULT_INTRODUCTION.to_string(),
            events: Vec::new(),
            closing_message: DEFAULT_CLOSING_MESSAGE.to_string(),
            sender_name: String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient deserialisation
// ────────────────────────────────────────────────────────────────────────────

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// A non-array `events` value is treated as no events; non-object entries are
/// treated as blank events so positions are preserved.
fn lenient_events<'de, D>(deserializer: D) -> Result<Vec<Event>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
            _ => Event::blank(),
        })
        .collect())
}
