//! Parsing helpers for dates, ratings, and day IDs.

use chrono::{DateTime, NaiveDate, Utc};
use daylog_core::storage::Rating;
use uuid::Uuid;

use crate::errors::CliError;

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CliError::invalid_input(format!("Invalid date value: {}", value)))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
    .into())
}

/// Validate a 1-5 rating.
pub fn parse_rating(value: u8) -> anyhow::Result<Rating> {
    Ok(Rating::new(value)?)
}

/// Parse a full day UUID.
pub fn parse_day_id(value: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|e| CliError::invalid_input(format!("Invalid day ID: {}", e)).into())
}
