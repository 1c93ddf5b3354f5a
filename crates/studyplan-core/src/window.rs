//! Recurring daily availability windows.
//!
//! A learning window is configured as a human-readable `"HH:MM - HH:MM"`
//! range. Parsing keeps the original label for display and computes the
//! duration in hours, which is all the allocator needs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// One recurring daily availability slot.
///
/// The parsed duration is immutable; the allocator tracks remaining
/// capacity separately so a planning run never mutates its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    /// Original range label, e.g. `"08:00 - 10:00"`.
    pub label: String,
    /// Window length in hours, rounded to 2 decimal places.
    pub duration_hours: f64,
}

impl TimeWindow {
    /// Parse a `"HH:MM - HH:MM"` label (24-hour clock).
    ///
    /// Ranges that are empty or inverted (`end <= start`) are rejected;
    /// windows spanning midnight are not supported.
    pub fn parse(label: &str) -> Result<Self, FormatError> {
        let (start_str, end_str) = label
            .split_once(" - ")
            .ok_or_else(|| FormatError::MissingSeparator(label.to_string()))?;

        let start = parse_timestamp(start_str)?;
        let end = parse_timestamp(end_str)?;

        if end <= start {
            return Err(FormatError::EmptyOrInverted(label.to_string()));
        }

        let seconds = (end - start).num_seconds();
        Ok(Self {
            label: label.to_string(),
            duration_hours: round2(seconds as f64 / 3600.0),
        })
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveTime, FormatError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| FormatError::BadTimestamp(value.to_string()))
}

/// Round to 2 decimal places, the precision used for all reported hours.
pub(crate) fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
