//! Core data types for the day log.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DaylogError, Result};

/// A day rating, bounded to `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside `1..=5`.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DaylogError::InvalidArgument(format!(
                "rating must be between {} and {} (got {})",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DaylogError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// The acting user a view is activated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub name: String,
}

impl UserIdentity {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Back reference to the user who logged a day. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Owner identifier
    pub id: Uuid,

    /// Owner display name, when the store knows it
    pub name: Option<String>,
}

impl From<&UserIdentity> for OwnerRef {
    fn from(user: &UserIdentity) -> Self {
        Self {
            id: user.id,
            name: Some(user.name.clone()),
        }
    }
}

/// One logged day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Unique identifier for this day
    pub id: Uuid,

    /// Day being logged; only the UTC calendar date is significant
    pub date: DateTime<Utc>,

    /// How the day went
    pub rating: Rating,

    /// Who logged it
    pub owner: OwnerRef,

    /// When the store recorded it
    pub created_at: DateTime<Utc>,
}

impl DayEntry {
    /// Calendar date used for ordering and display.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// `YYYY-MM-DD` label for display.
    pub fn date_label(&self) -> String {
        self.day().format("%Y-%m-%d").to_string()
    }
}

/// Builder for creating new days.
#[derive(Debug, Clone)]
pub struct NewDay {
    /// Owner the day is logged for
    pub owner_id: Uuid,

    /// Day being logged
    pub date: DateTime<Utc>,

    /// Rating for the day
    pub rating: Rating,
}

impl NewDay {
    pub fn new(owner_id: Uuid, date: DateTime<Utc>, rating: Rating) -> Self {
        Self {
            owner_id,
            date,
            rating,
        }
    }

    pub fn on(owner_id: Uuid, day: NaiveDate, rating: Rating) -> Self {
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
            .unwrap_or_else(Utc::now);
        Self::new(owner_id, midnight, rating)
    }
}
