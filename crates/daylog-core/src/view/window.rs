//! Ordering and window-bounds derivations.

use std::cmp::Reverse;
use std::ops::Range;

use crate::storage::types::DayEntry;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Navigation {
    /// The window start moved.
    Moved { from: usize, to: usize },
    /// The move would leave the valid range; nothing changed.
    Rejected,
}

impl Navigation {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Order days newest first by calendar date.
///
/// Days on the same date keep their input order.
pub fn sort_newest_first(entries: &[DayEntry]) -> Vec<&DayEntry> {
    let mut sorted: Vec<&DayEntry> = entries.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|entry| Reverse(entry.day()));
    sorted
}

/// Index range of the window starting at `start` with `size` slots over
/// a sequence of `len` items. Empty when `start` is at or past the end.
pub fn window_bounds(len: usize, start: usize, size: usize) -> Range<usize> {
    if start >= len {
        return len..len;
    }
    start..start.saturating_add(size).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::{OwnerRef, Rating};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32, hour: u32) -> DayEntry {
        DayEntry {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap(),
            rating: Rating::new(3).unwrap(),
            owner: OwnerRef {
                id: Uuid::nil(),
                name: None,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let entries = vec![day(2024, 1, 1, 0), day(2024, 3, 1, 0), day(2024, 2, 1, 0)];
        let sorted = sort_newest_first(&entries);
        let labels: Vec<String> = sorted.iter().map(|d| d.date_label()).collect();
        assert_eq!(labels, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_same_date_keeps_input_order_regardless_of_time() {
        // Later time of day first in input, earlier second: input order wins.
        let entries = vec![day(2024, 1, 1, 22), day(2024, 1, 1, 6), day(2024, 1, 2, 0)];
        let sorted = sort_newest_first(&entries);
        assert_eq!(sorted[0].id, entries[2].id);
        assert_eq!(sorted[1].id, entries[0].id);
        assert_eq!(sorted[2].id, entries[1].id);
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(window_bounds(10, 0, 7), 0..7);
        assert_eq!(window_bounds(10, 7, 7), 7..10);
        assert_eq!(window_bounds(10, 10, 7), 10..10);
        assert_eq!(window_bounds(10, 12, 3), 10..10);
        assert_eq!(window_bounds(0, 0, 7), 0..0);
        assert_eq!(window_bounds(5, 2, usize::MAX), 2..5);
    }
}
