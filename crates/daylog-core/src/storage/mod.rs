//! Storage layer: the day model, data source traits, and the SQLite store.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteDayStore;
pub use traits::{DaySource, DayStore};
pub use types::{DayEntry, NewDay, OwnerRef, Rating, UserIdentity};
