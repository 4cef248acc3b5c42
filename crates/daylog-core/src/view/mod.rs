//! Collection view over a user's days.
//!
//! - **window**: pure ordering and window-bounds derivations
//! - **aggregate**: the average rating over the whole collection
//! - **engine**: `DayCollectionView`, the sorted, paged state holder
//! - **session**: activation lifecycle and stale-fetch guarding

pub mod aggregate;
pub mod engine;
pub mod session;
pub mod window;

pub use aggregate::AggregateRating;
pub use engine::{DayCollectionView, PageInfo, DEFAULT_PAGE_SIZE};
pub use session::{AggregateSink, FetchOutcome, FetchTicket, ViewSession};
pub use window::Navigation;
