//! Editing session — full-record replacement with eager re-rendering.
//!
//! The session holds one immutable snapshot at a time. Every edit builds a
//! complete new `NewsletterData`, swaps it in, and re-renders from scratch.
//! A failed edit leaves the previous snapshot and HTML in place.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::export::export_filename;
use crate::models::{Event, NewsletterData};
use crate::render::generate_html;

/// Partial update for one event. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub learn_more_url: Option<String>,
    pub register_url: Option<String>,
}

impl EventPatch {
    /// Returns a new event with the patch merged over `event`.
    pub fn apply_to(&self, event: &Event) -> Event {
        let pick = |patched: &Option<String>, current: &String| {
            patched.clone().unwrap_or_else(|| current.clone())
        };
        Event {
            title: pick(&self.title, &event.title),
            date: pick(&self.date, &event.date),
            time: pick(&self.time, &event.time),
            location: pick(&self.location, &event.location),
            description: pick(&self.description, &event.description),
            learn_more_url: pick(&self.learn_more_url, &event.learn_more_url),
            register_url: pick(&self.register_url, &event.register_url),
        }
    }
}

pub struct Editor {
    snapshot: Arc<NewsletterData>,
    html: String,
}

impl Editor {
    pub fn new(record: NewsletterData) -> Self {
        let html = generate_html(&record);
        Self {
            snapshot: Arc::new(record),
            html,
        }
    }

    /// The current record. Callers hold a consistent value even if the
    /// session moves on.
    pub fn snapshot(&self) -> Arc<NewsletterData> {
        Arc::clone(&self.snapshot)
    }

    /// HTML rendered from the current snapshot.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn export_filename(&self) -> String {
        export_filename(&self.snapshot.date)
    }

    /// Replaces the whole record and re-renders.
    pub fn replace(&mut self, record: NewsletterData) {
        self.html = generate_html(&record);
        self.snapshot = Arc::new(record);
        debug!(
            "Record replaced: {} events, {} bytes rendered",
            self.snapshot.events.len(),
            self.html.len()
        );
    }

    pub fn add_event(&mut self) {
        let mut events = self.snapshot.events.clone();
        events.push(Event::blank());
        self.replace_events(events);
    }

    pub fn update_event(&mut self, index: usize, patch: &EventPatch) -> Result<(), AppError> {
        let current = self.event_at(index)?;
        let mut events = self.snapshot.events.clone();
        events[index] = patch.apply_to(current);
        self.replace_events(events);
        Ok(())
    }

    pub fn remove_event(&mut self, index: usize) -> Result<Event, AppError> {
        let removed = self.event_at(index)?.clone();
        let events = self
            .snapshot
            .events
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, event)| event.clone())
            .collect();
        self.replace_events(events);
        Ok(removed)
    }

    /// Appends imported events after the existing ones, keeping their order.
    pub fn import_events(&mut self, imported: Vec<Event>) {
        let count = imported.len();
        let mut events = self.snapshot.events.clone();
        events.extend(imported);
        self.replace_events(events);
        info!("Imported {count} events");
    }

    fn event_at(&self, index: usize) -> Result<&Event, AppError> {
        self.snapshot
            .events
            .get(index)
            .ok_or(AppError::EventIndex {
                index,
                len: self.snapshot.events.len(),
            })
    }

    fn replace_events(&mut self, events: Vec<Event>) {
        self.replace(NewsletterData {
            events,
            ..(*self.snapshot).clone()
        });
    }
}
