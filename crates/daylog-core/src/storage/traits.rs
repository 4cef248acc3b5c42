//! Data source and store traits.
//!
//! `DaySource` is the fetch-all capability the view engine consumes.
//! `DayStore` adds the write and lookup operations the front end needs
//! around the list. Keeping them separate lets a view be fed by anything
//! that can hand back a user's complete collection.

use uuid::Uuid;

use super::types::{DayEntry, NewDay, UserIdentity};
use crate::error::Result;

/// Fetch-all capability for a user's days.
pub trait DaySource {
    /// Return the complete, current set of days for `owner`.
    ///
    /// No filtering, ordering, or pagination is applied; the view engine
    /// owns all derivation.
    fn fetch_all(&self, owner: &UserIdentity) -> Result<Vec<DayEntry>>;
}

/// Day storage backend.
pub trait DayStore: DaySource {
    /// Record (or rename) the owner so days can carry a display name.
    fn upsert_owner(&mut self, owner: &UserIdentity) -> Result<()>;

    /// Insert a new day.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::Validation` if the owner is unknown to the store.
    fn insert_day(&mut self, day: &NewDay) -> Result<DayEntry>;

    /// Get a day by ID.
    ///
    /// Returns `Ok(Some(day))` if found, `Ok(None)` if not found.
    fn get_day(&self, id: &Uuid) -> Result<Option<DayEntry>>;

    /// Delete a day owned by `owner`, returning the removed day.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::NotFound` if no such day exists for `owner`.
    fn delete_day(&mut self, owner: &UserIdentity, id: &Uuid) -> Result<DayEntry>;
}

impl<T: DaySource + ?Sized> DaySource for &T {
    fn fetch_all(&self, owner: &UserIdentity) -> Result<Vec<DayEntry>> {
        (**self).fetch_all(owner)
    }
}

impl DaySource for Vec<DayEntry> {
    fn fetch_all(&self, owner: &UserIdentity) -> Result<Vec<DayEntry>> {
        Ok(self
            .iter()
            .filter(|day| day.owner.id == owner.id)
            .cloned()
            .collect())
    }
}
