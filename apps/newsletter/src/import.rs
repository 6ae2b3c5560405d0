//! Spreadsheet import — turns CSV or JSON event lists into `Event` records.
//!
//! CSV headers are matched against English and German aliases; unknown
//! columns are ignored and missing ones become empty fields. Row order is
//! preserved so events append in the order they appear in the sheet.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Title,
    Date,
    Time,
    Location,
    Description,
    LearnMoreUrl,
    RegisterUrl,
}

const COLUMN_ALIASES: &[(Column, &[&str])] = &[
    (Column::Title, &["title", "titel", "veranstaltung", "name"]),
    (Column::Date, &["date", "datum"]),
    (Column::Time, &["time", "uhrzeit", "zeit"]),
    (Column::Location, &["location", "ort", "wo"]),
    (Column::Description, &["description", "beschreibung"]),
    (
        Column::LearnMoreUrl,
        &["learnmoreurl", "learn more url", "link", "mehr erfahren"],
    ),
    (
        Column::RegisterUrl,
        &["registerurl", "register url", "anmeldung", "jetzt anmelden"],
    ),
];

fn column_for_header(header: &str) -> Option<Column> {
    let normalized = header.trim().trim_start_matches('\u{feff}').to_lowercase();
    COLUMN_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
        .map(|(column, _)| *column)
}

/// Reads events from a `.csv` or `.json` file.
pub fn import_file(path: &Path) -> Result<Vec<Event>, AppError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let parse: fn(&str) -> Result<Vec<Event>, AppError> = match extension.as_deref() {
        Some("csv") => parse_csv,
        Some("json") => parse_json,
        other => {
            return Err(AppError::Import(format!(
                "Unsupported import format '{}' for {}; expected .csv or .json",
                other.unwrap_or(""),
                path.display()
            )))
        }
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    let events = parse(&content)?;

    debug!("Read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parses CSV with a header row. Rows with no value in a recognised column
/// are skipped.
pub fn parse_csv(content: &str) -> Result<Vec<Event>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<Option<Column>> = reader.headers()?.iter().map(column_for_header).collect();

    if columns.iter().all(Option::is_none) {
        warn!("CSV header has no recognised event columns; no rows will import");
    }

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut event = Event::blank();
        for (column, value) in columns.iter().zip(record.iter()) {
            let Some(column) = column else { continue };
            let value = value.trim().to_string();
            match column {
                Column::Title => event.title = value,
                Column::Date => event.date = value,
                Column::Time => event.time = value,
                Column::Location => event.location = value,
                Column::Description => event.description = value,
                Column::LearnMoreUrl => event.learn_more_url = value,
                Column::RegisterUrl => event.register_url = value,
            }
        }
        if event.is_blank() {
            continue;
        }
        events.push(event);
    }

    Ok(events)
}

/// Parses a JSON array of event objects using the lenient model rules.
pub fn parse_json(content: &str) -> Result<Vec<Event>, AppError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Array(items) = value else {
        return Err(AppError::Import(
            "JSON import must be an array of events".to_string(),
        ));
    };

    let mut events = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_object() {
            return Err(AppError::Import(format!(
                "JSON import entries must be objects, found {item}"
            )));
        }
        events.push(serde_json::from_value(item)?);
    }
    Ok(events)
}
