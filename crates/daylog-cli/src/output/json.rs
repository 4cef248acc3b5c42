//! JSON output formatting for days and pages.

use daylog_core::storage::DayEntry;
use daylog_core::view::{AggregateRating, DayCollectionView};

/// Convert a day to JSON for output.
pub fn day_json(day: &DayEntry) -> serde_json::Value {
    serde_json::json!({
        "id": day.id,
        "date": day.date_label(),
        "rating": day.rating,
        "owner_id": day.owner.id,
        "owner_name": day.owner.name,
        "created_at": day.created_at,
    })
}

/// The current page of a view, with page info and the overall average.
pub fn page_json(view: &DayCollectionView) -> serde_json::Value {
    let days: Vec<serde_json::Value> = view
        .visible_window()
        .into_iter()
        .map(day_json)
        .collect();
    serde_json::json!({
        "average": view.aggregate_rating(),
        "page": view.page_info(),
        "days": days,
    })
}

/// Aggregate rating for `stats --json`.
pub fn stats_json(aggregate: &AggregateRating) -> serde_json::Value {
    serde_json::json!({
        "average": aggregate.value(),
        "count": aggregate.count(),
    })
}
