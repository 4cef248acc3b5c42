//! # Daylog Core
//!
//! Core library for Daylog - a personal day-log tracker where each day gets a
//! date and a rating.
//!
//! This crate provides the domain model, the collection view engine that
//! sorts, aggregates, and pages through a user's days, and the storage
//! abstractions that feed it, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Day model, data source traits, SQLite store
//! - **view**: Sorted/paged collection view, aggregate rating, view session

pub mod error;
pub mod storage;
pub mod view;

pub use error::{DaylogError, Result};
pub use storage::{DaySource, DayStore};
pub use view::{AggregateRating, DayCollectionView, Navigation, PageInfo, ViewSession};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
