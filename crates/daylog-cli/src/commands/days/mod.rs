//! Day command handlers.

mod add;
mod browse;
mod delete;
mod list;
mod show;
mod stats;

pub use add::handle_add;
pub use browse::handle_browse;
pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
pub use stats::handle_stats;

use daylog_core::storage::SqliteDayStore;
use daylog_core::view::{AggregateRating, AggregateSink, DayCollectionView, ViewSession};

use crate::app::AppContext;

/// Keeps the most recently published average.
#[derive(Debug, Default)]
pub(crate) struct LatestAverage {
    latest: Option<AggregateRating>,
    loads: usize,
}

impl LatestAverage {
    pub(crate) fn latest(&self) -> Option<AggregateRating> {
        self.latest
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads
    }
}

impl AggregateSink for LatestAverage {
    fn publish(&mut self, rating: &AggregateRating) {
        tracing::debug!(%rating, "average published");
        self.latest = Some(*rating);
        self.loads += 1;
    }
}

/// Open the store and a session activated for the configured user, with
/// every day already loaded.
pub(crate) fn open_session(
    ctx: &AppContext,
    page_size: Option<usize>,
) -> anyhow::Result<(SqliteDayStore, ViewSession<LatestAverage>)> {
    let store = ctx.open_store()?;
    let mut session = ViewSession::new(ctx.page_size(page_size)?, LatestAverage::default())?;
    session.activate(ctx.user()?);
    session.refresh(&store)?;
    Ok((store, session))
}

pub(crate) fn active_view<'s>(
    session: &'s ViewSession<LatestAverage>,
) -> anyhow::Result<&'s DayCollectionView> {
    session
        .view()
        .ok_or_else(|| anyhow::anyhow!("No active day view"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylog_core::storage::{DayStore, NewDay, Rating, UserIdentity};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_latest_average_tracks_reloads() {
        let me = UserIdentity::new(Uuid::new_v4(), "me");
        let mut store = SqliteDayStore::open_in_memory().unwrap();
        store.upsert_owner(&me).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        store
            .insert_day(&NewDay::on(me.id, day, Rating::new(4).unwrap()))
            .unwrap();

        let mut session = ViewSession::new(7, LatestAverage::default()).unwrap();
        assert!(session.sink().latest().is_none());

        session.activate(me);
        session.refresh(&store).unwrap();
        session.refresh(&store).unwrap();

        assert_eq!(session.sink().loads(), 2);
        assert_eq!(session.sink().latest().and_then(|a| a.value()), Some(4.0));
    }
}
