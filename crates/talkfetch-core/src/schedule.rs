//! Schedule loading: calendar events → talks.
//!
//! Only `VEVENT` components carrying both a `URL` and a `LOCATION` property
//! become talks; everything else in the calendar is ignored.

use anyhow::{Context, Result};
use icalendar::{Calendar, CalendarComponent, Component};
use std::fs;
use std::path::Path;

use crate::talk::{derive_talk, Talk};

/// Reads and parses the calendar file at `path`.
pub fn load_schedule(path: &Path) -> Result<Vec<Talk>> {
    tracing::info!("parsing schedule {}", path.display());
    let content =
        fs::read_to_string(path).with_context(|| format!("read schedule {}", path.display()))?;
    let talks =
        parse_schedule(&content).with_context(|| format!("parse schedule {}", path.display()))?;
    tracing::info!("found {} talks", talks.len());
    Ok(talks)
}

/// Parses calendar content and derives one [`Talk`] per usable event, in
/// calendar order. A malformed calendar is an error; events without a URL or
/// location are skipped.
pub fn parse_schedule(content: &str) -> Result<Vec<Talk>> {
    if !starts_with_vcalendar(content) {
        anyhow::bail!("malformed calendar: content does not start with BEGIN:VCALENDAR");
    }
    let calendar = content
        .parse::<Calendar>()
        .map_err(|e| anyhow::anyhow!("malformed calendar: {}", e))?;

    let talks = calendar
        .components
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
        .filter_map(|event| {
            let url = non_empty(event.property_value("URL"));
            let location = non_empty(event.property_value("LOCATION"));
            match (url, location) {
                (Some(url), Some(location)) => Some(derive_talk(url, location)),
                _ => {
                    tracing::debug!(
                        uid = event.property_value("UID").unwrap_or("?"),
                        "skipping event without url or location"
                    );
                    None
                }
            }
        })
        .collect();
    Ok(talks)
}

fn starts_with_vcalendar(content: &str) -> bool {
    let first_line = content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    first_line.eq_ignore_ascii_case("BEGIN:VCALENDAR")
}

/// Surrounding whitespace of a field value is not part of it.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
