//! SQLite storage backend.
//!
//! Days live in a plain SQLite file. The store only scopes reads by owner;
//! ordering and paging belong to the view engine.

mod row;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{DaylogError, Result};
use crate::storage::traits::{DaySource, DayStore};
use crate::storage::types::{DayEntry, NewDay, OwnerRef, UserIdentity};

use row::{DayRow, DAY_COLUMNS};

const FORMAT_VERSION: &str = "0.1";

const SCHEMA: &str = r#"
    CREATE TABLE meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE owners (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE days (
        id TEXT PRIMARY KEY,
        owner_id TEXT NOT NULL,
        date TEXT NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        created_at TEXT NOT NULL,

        FOREIGN KEY(owner_id) REFERENCES owners(id)
    );

    CREATE INDEX days_owner ON days(owner_id);
"#;

/// SQLite-backed day store.
pub struct SqliteDayStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteDayStore {
    /// Create a new store file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::Storage` if the file already exists or cannot be written.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(DaylogError::Storage(
                "Day log file already exists".to_string(),
            ));
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        tracing::info!(path = %path.display(), "created day log");

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open an existing store file.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::Storage` if the file is missing or was not
    /// created by this store.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DaylogError::Storage("Day log file not found".to_string()));
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let version: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DaylogError::Storage(format!("Not a day log file: {}", e)))?;
        match version.as_deref() {
            Some(FORMAT_VERSION) => {}
            Some(other) => {
                return Err(DaylogError::Storage(format!(
                    "Unsupported day log format version: {}",
                    other
                )))
            }
            None => {
                return Err(DaylogError::Storage(
                    "Day log metadata is missing".to_string(),
                ))
            }
        }
        tracing::info!(path = %path.display(), "opened day log");

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of days stored for `owner`.
    pub fn count_days(&self, owner: &UserIdentity) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM days WHERE owner_id = ?",
            [owner.id.to_string()],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["format_version", FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &created_at],
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DaylogError::Storage("SQLite connection poisoned".to_string()))
    }

    fn select_day(conn: &Connection, id: &Uuid) -> Result<Option<DayEntry>> {
        let sql = format!(
            "SELECT {} FROM days d LEFT JOIN owners o ON o.id = d.owner_id WHERE d.id = ?",
            DAY_COLUMNS
        );
        let row = conn
            .query_row(&sql, [id.to_string()], DayRow::from_row)
            .optional()?;
        row.map(DayEntry::try_from).transpose()
    }
}

impl DaySource for SqliteDayStore {
    fn fetch_all(&self, owner: &UserIdentity) -> Result<Vec<DayEntry>> {
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM days d LEFT JOIN owners o ON o.id = d.owner_id \
             WHERE d.owner_id = ? ORDER BY d.rowid",
            DAY_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([owner.id.to_string()], DayRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let days = rows
            .into_iter()
            .map(DayEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(owner = %owner.id, count = days.len(), "fetched days");
        Ok(days)
    }
}

impl DayStore for SqliteDayStore {
    fn upsert_owner(&mut self, owner: &UserIdentity) -> Result<()> {
        let name = owner.name.trim();
        if name.is_empty() {
            return Err(DaylogError::Validation(
                "Owner name must not be empty".to_string(),
            ));
        }
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO owners (id, name) VALUES (?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name",
            (owner.id.to_string(), name),
        )?;
        Ok(())
    }

    fn insert_day(&mut self, day: &NewDay) -> Result<DayEntry> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let owner_name: Option<String> = tx
            .query_row(
                "SELECT name FROM owners WHERE id = ?",
                [day.owner_id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        let owner_name = owner_name
            .ok_or_else(|| DaylogError::Validation("Owner does not exist".to_string()))?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        tx.execute(
            "INSERT INTO days (id, owner_id, date, rating, created_at) VALUES (?, ?, ?, ?, ?)",
            (
                id.to_string(),
                day.owner_id.to_string(),
                day.date.to_rfc3339(),
                i64::from(day.rating.get()),
                created_at.to_rfc3339(),
            ),
        )?;
        tx.commit()?;
        tracing::debug!(%id, owner = %day.owner_id, "inserted day");

        Ok(DayEntry {
            id,
            date: day.date,
            rating: day.rating,
            owner: OwnerRef {
                id: day.owner_id,
                name: Some(owner_name),
            },
            created_at,
        })
    }

    fn get_day(&self, id: &Uuid) -> Result<Option<DayEntry>> {
        let conn = self.lock()?;
        Self::select_day(&conn, id)
    }

    fn delete_day(&mut self, owner: &UserIdentity, id: &Uuid) -> Result<DayEntry> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let day = match Self::select_day(&tx, id)? {
            Some(day) if day.owner.id == owner.id => day,
            _ => return Err(DaylogError::NotFound(format!("Day {} not found", id))),
        };
        tx.execute("DELETE FROM days WHERE id = ?", [id.to_string()])?;
        tx.commit()?;
        tracing::debug!(%id, owner = %owner.id, "deleted day");

        Ok(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::Rating;
    use chrono::NaiveDate;

    fn user(name: &str) -> UserIdentity {
        UserIdentity::new(Uuid::new_v4(), name)
    }

    fn new_day(owner: &UserIdentity, ymd: (i32, u32, u32), rating: u8) -> NewDay {
        let day = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        NewDay::on(owner.id, day, Rating::new(rating).unwrap())
    }

    #[test]
    fn test_insert_requires_owner() {
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        let ghost = user("ghost");
        let result = store.insert_day(&new_day(&ghost, (2024, 1, 1), 3));
        assert!(matches!(result, Err(DaylogError::Validation(_))));
    }

    #[test]
    fn test_fetch_all_keeps_insertion_order_and_scopes_owner() {
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        let me = user("me");
        let other = user("other");
        store.upsert_owner(&me).unwrap();
        store.upsert_owner(&other).unwrap();

        let first = store.insert_day(&new_day(&me, (2024, 1, 2), 4)).unwrap();
        store.insert_day(&new_day(&other, (2024, 1, 3), 1)).unwrap();
        let second = store.insert_day(&new_day(&me, (2024, 1, 1), 2)).unwrap();

        let days = store.fetch_all(&me).unwrap();
        let ids: Vec<Uuid> = days.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(days[0].owner.name.as_deref(), Some("me"));
        assert_eq!(store.count_days(&me).unwrap(), 2);
    }

    #[test]
    fn test_upsert_owner_renames() {
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        let mut me = user("me");
        store.upsert_owner(&me).unwrap();
        let day = store.insert_day(&new_day(&me, (2024, 2, 1), 5)).unwrap();

        me.name = "renamed".to_string();
        store.upsert_owner(&me).unwrap();

        let fetched = store.get_day(&day.id).unwrap().unwrap();
        assert_eq!(fetched.owner.name.as_deref(), Some("renamed"));
    }

    #[test]
    fn test_upsert_owner_rejects_blank_name() {
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        let blank = user("   ");
        assert!(matches!(
            store.upsert_owner(&blank),
            Err(DaylogError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_day_scoped_to_owner() {
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        let me = user("me");
        let other = user("other");
        store.upsert_owner(&me).unwrap();
        store.upsert_owner(&other).unwrap();
        let day = store.insert_day(&new_day(&me, (2024, 3, 1), 3)).unwrap();

        let result = store.delete_day(&other, &day.id);
        assert!(matches!(result, Err(DaylogError::NotFound(_))));
        assert!(store.get_day(&day.id).unwrap().is_some());

        let deleted = store.delete_day(&me, &day.id).unwrap();
        assert_eq!(deleted.id, day.id);
        assert!(store.get_day(&day.id).unwrap().is_none());
    }

    #[test]
    fn test_get_missing_day() {
        let store = SqliteDayStore::open_in_memory().unwrap();
        assert!(store.get_day(&Uuid::new_v4()).unwrap().is_none());
    }
}
