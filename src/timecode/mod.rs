//! Timestamp parsing and formatting
//!
//! Start and end times are entered as wall-clock strings, `HH:MM:SS` or
//! `HH:MM:SS.ffffff`. Parsing goes through `chrono::NaiveTime`, so component
//! ranges are whatever the clock type accepts: hours 00-23, minutes 00-59,
//! seconds 00-60 (the leap second). Out-of-range components such as
//! `25:61:61` are rejected rather than normalized.

use chrono::{NaiveTime, Timelike};

use crate::domain::errors::{CutError, CutResult};
use crate::domain::model::TimeOffset;

/// Accepted input formats, tried in order
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M:%S%.f"];

/// Parse a timestamp string into a second offset
pub fn parse_timestamp(input: &str) -> CutResult<TimeOffset> {
    let trimmed = input.trim();
    for format in TIME_FORMATS {
        if let Ok(clock) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(TimeOffset::from_seconds(clock_to_seconds(clock)));
        }
    }
    Err(CutError::InvalidTimeFormat {
        time: trimmed.to_string(),
    })
}

fn clock_to_seconds(clock: NaiveTime) -> f64 {
    // chrono represents a parsed leap second as nanosecond >= 1e9, which
    // folds back into whole seconds here
    f64::from(clock.hour()) * 3600.0
        + f64::from(clock.minute()) * 60.0
        + f64::from(clock.second())
        + f64::from(clock.nanosecond()) / 1_000_000_000.0
}

/// Format a second offset as `HH:MM:SS.mmm` for logs and reports
pub fn format_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u32;
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    let millis = (((seconds % 1.0) * 1000.0).round() as u32).min(999);
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

#[cfg(test)]
mod tests;
