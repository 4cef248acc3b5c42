//! Average rating over a whole collection.

use std::fmt;

use serde::Serialize;

use crate::storage::types::DayEntry;

/// Aggregate rating of a collection.
///
/// An empty collection has no average; that is a state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregateRating {
    Empty,
    Mean { value: f64, count: usize },
}

impl AggregateRating {
    /// Arithmetic mean of every rating in `entries`.
    pub fn over(entries: &[DayEntry]) -> Self {
        if entries.is_empty() {
            return Self::Empty;
        }
        let total: u64 = entries
            .iter()
            .map(|entry| u64::from(entry.rating.get()))
            .sum();
        let count = entries.len();
        Self::Mean {
            value: total as f64 / count as f64,
            count,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Mean { value, .. } => Some(*value),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Mean { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for AggregateRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no data"),
            Self::Mean { value, .. } => write!(f, "{:.2}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::{OwnerRef, Rating};
    use chrono::Utc;
    use uuid::Uuid;

    fn rated(values: &[u8]) -> Vec<DayEntry> {
        values
            .iter()
            .map(|&v| DayEntry {
                id: Uuid::new_v4(),
                date: Utc::now(),
                rating: Rating::new(v).unwrap(),
                owner: OwnerRef {
                    id: Uuid::nil(),
                    name: None,
                },
                created_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn test_empty_is_signalled() {
        let aggregate = AggregateRating::over(&[]);
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.value(), None);
        assert_eq!(aggregate.to_string(), "no data");
    }

    #[test]
    fn test_mean() {
        let aggregate = AggregateRating::over(&rated(&[1, 2, 4, 5]));
        assert_eq!(aggregate.value(), Some(3.0));
        assert_eq!(aggregate.count(), 4);

        let aggregate = AggregateRating::over(&rated(&[5, 4, 4]));
        assert_eq!(aggregate.to_string(), "4.33");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(AggregateRating::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "empty"}));

        let json = serde_json::to_value(AggregateRating::over(&rated(&[2, 4]))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "mean", "value": 3.0, "count": 2})
        );
    }
}
