//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use daylog_core::storage::Rating;
use uuid::Uuid;

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Format a datetime for display.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Rating as filled/empty stars (unicode) or `***--` (ascii).
pub fn rating_bar(rating: Rating, unicode: bool) -> String {
    let (full, empty) = if unicode {
        ("\u{2605}", "\u{2606}") // ★ ☆
    } else {
        ("*", "-")
    };
    let filled = usize::from(rating.get());
    let max = usize::from(Rating::MAX);
    format!("{}{}", full.repeat(filled), empty.repeat(max - filled))
}
