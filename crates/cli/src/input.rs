//! Event file loading.

use std::fs;
use std::path::Path;

use monthgrid_core::calendar::{events_from_records, EventRecord};
use monthgrid_core::CalendarEvent;

use crate::error::Result;

/// Reads a JSON array of event records from `path`.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let contents = fs::read_to_string(path)?;
    let events = parse_events(&contents)?;
    tracing::info!(path = %path.display(), events = events.len(), "Loaded events");
    Ok(events)
}

/// Parses a JSON array of event records, dropping records with an unusable
/// shape.
pub fn parse_events(json: &str) -> Result<Vec<CalendarEvent>> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let events = events_from_records(records);

    if events.len() < total {
        tracing::debug!(dropped = total - events.len(), "Skipped malformed event records");
    }

    Ok(events)
}
