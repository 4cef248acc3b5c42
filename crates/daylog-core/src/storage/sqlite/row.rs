//! Day row type for database queries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{DaylogError, Result};
use crate::storage::types::{DayEntry, OwnerRef, Rating};

/// Column list matching [`DayRow::from_row`].
pub const DAY_COLUMNS: &str = "d.id, d.date, d.rating, d.created_at, d.owner_id, o.name";

/// Raw row data from the days table, before parsing into domain types.
#[derive(Debug)]
pub struct DayRow {
    pub id: String,
    pub date: String,
    pub rating: i64,
    pub created_at: String,
    pub owner_id: String,
    pub owner_name: Option<String>,
}

impl DayRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            rating: row.get(2)?,
            created_at: row.get(3)?,
            owner_id: row.get(4)?,
            owner_name: row.get(5)?,
        })
    }
}

fn parse_timestamp(value: &str, what: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DaylogError::Storage(format!("Invalid {} timestamp: {}", what, e)))
}

impl TryFrom<DayRow> for DayEntry {
    type Error = DaylogError;

    fn try_from(row: DayRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DaylogError::Storage(format!("Invalid day UUID: {}", e)))?;
        let owner_id = Uuid::parse_str(&row.owner_id)
            .map_err(|e| DaylogError::Storage(format!("Invalid owner UUID: {}", e)))?;
        let date = parse_timestamp(&row.date, "date")?;
        let created_at = parse_timestamp(&row.created_at, "created_at")?;
        let rating = u8::try_from(row.rating)
            .ok()
            .and_then(|value| Rating::new(value).ok())
            .ok_or_else(|| {
                DaylogError::Storage(format!("Invalid rating stored for day {}: {}", id, row.rating))
            })?;

        Ok(DayEntry {
            id,
            date,
            rating,
            owner: OwnerRef {
                id: owner_id,
                name: row.owner_name,
            },
            created_at,
        })
    }
}
