//! View session: ties a collection view to an acting user.
//!
//! A session is activated for one user at a time. Activation builds a fresh
//! view; deactivation tears it down. Fetches are split into `begin_fetch`
//! and `complete_fetch` so a completion that arrives after the user went
//! away (or a newer activation started) is dropped instead of loading days
//! into the wrong view.

use super::aggregate::AggregateRating;
use super::engine::DayCollectionView;
use super::window::Navigation;
use crate::error::{DaylogError, Result};
use crate::storage::traits::DaySource;
use crate::storage::types::{DayEntry, UserIdentity};

/// Receives the aggregate rating whenever a load is applied.
pub trait AggregateSink {
    fn publish(&mut self, rating: &AggregateRating);
}

impl AggregateSink for Vec<AggregateRating> {
    fn publish(&mut self, rating: &AggregateRating) {
        self.push(*rating);
    }
}

/// Proof that a fetch was started under a given activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FetchOutcome {
    /// Days were loaded; carries the aggregate that was published.
    Applied(AggregateRating),
    /// The activation the fetch belonged to is gone; nothing changed.
    Stale,
}

struct Active {
    user: UserIdentity,
    view: DayCollectionView,
}

/// A collection view bound to the lifetime of a user activation.
pub struct ViewSession<S: AggregateSink> {
    page_size: usize,
    generation: u64,
    active: Option<Active>,
    sink: S,
}

impl<S: AggregateSink> ViewSession<S> {
    /// Create an inactive session.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::InvalidArgument` if `page_size` is zero.
    pub fn new(page_size: usize, sink: S) -> Result<Self> {
        // Validate up front so activation cannot fail later.
        DayCollectionView::new(page_size)?;
        Ok(Self {
            page_size,
            generation: 0,
            active: None,
            sink,
        })
    }

    /// Start a fresh view for `user`, discarding any previous one.
    pub fn activate(&mut self, user: UserIdentity) {
        self.generation += 1;
        let view = DayCollectionView::new(self.page_size).unwrap_or_default();
        tracing::info!(user = %user.id, generation = self.generation, "view activated");
        self.active = Some(Active { user, view });
    }

    /// Tear down the view. Outstanding fetches become stale.
    pub fn deactivate(&mut self) {
        self.generation += 1;
        if let Some(active) = self.active.take() {
            tracing::info!(user = %active.user.id, "view deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.active.as_ref().map(|active| &active.user)
    }

    pub fn view(&self) -> Option<&DayCollectionView> {
        self.active.as_ref().map(|active| &active.view)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mark the start of a fetch. `None` when no user is active.
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        self.active.as_ref().map(|_| FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply fetched days if the ticket still belongs to the live activation.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, entries: Vec<DayEntry>) -> FetchOutcome {
        let current = self.generation;
        match self.active.as_mut() {
            Some(active) if ticket.generation == current => {
                let aggregate = active.view.load(entries);
                self.sink.publish(&aggregate);
                FetchOutcome::Applied(aggregate)
            }
            _ => {
                tracing::warn!(
                    ticket = ticket.generation,
                    current,
                    "ignoring stale fetch completion"
                );
                FetchOutcome::Stale
            }
        }
    }

    /// Fetch the active user's days from `source` and load them.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::Validation` if no user is active, or whatever
    /// the source reports.
    pub fn refresh<D: DaySource + ?Sized>(&mut self, source: &D) -> Result<FetchOutcome> {
        let ticket = self.begin_fetch().ok_or_else(Self::inactive)?;
        let user = self.user().cloned().ok_or_else(Self::inactive)?;
        let entries = source.fetch_all(&user)?;
        Ok(self.complete_fetch(ticket, entries))
    }

    /// Change the page size of the active view.
    ///
    /// The new size is kept for later activations too.
    ///
    /// # Errors
    ///
    /// Returns `DaylogError::InvalidArgument` for zero; nothing changes.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if let Some(active) = self.active.as_mut() {
            active.view.set_page_size(page_size)?;
        } else if page_size == 0 {
            return Err(DaylogError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }

    /// Advance the active view one page. Rejected when inactive.
    pub fn page_forward(&mut self) -> Navigation {
        self.active
            .as_mut()
            .map_or(Navigation::Rejected, |active| active.view.page_forward())
    }

    /// Go back one page on the active view. Rejected when inactive.
    pub fn page_backward(&mut self) -> Navigation {
        self.active
            .as_mut()
            .map_or(Navigation::Rejected, |active| active.view.page_backward())
    }

    /// Days on the current page; empty when inactive.
    pub fn visible_window(&self) -> Vec<&DayEntry> {
        self.view()
            .map(DayCollectionView::visible_window)
            .unwrap_or_default()
    }

    /// Aggregate over the active collection; `Empty` when inactive.
    pub fn aggregate_rating(&self) -> AggregateRating {
        self.view()
            .map_or(AggregateRating::Empty, DayCollectionView::aggregate_rating)
    }

    fn inactive() -> DaylogError {
        DaylogError::Validation("no user is active".to_string())
    }
}
