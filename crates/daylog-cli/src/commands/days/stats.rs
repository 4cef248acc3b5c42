use daylog_core::storage::DaySource;
use daylog_core::view::AggregateRating;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::stats_json;
use crate::ui::{badge, header, hint, kv, print, Badge};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let user = ctx.user()?;
    let store = ctx.open_store()?;
    let aggregate = AggregateRating::over(&store.fetch_all(&user)?);

    let ui = ctx.ui_context(args.json, None);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats_json(&aggregate))?);
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "stats", Some(user.name.as_str())));
    }
    print(&ui, &kv(&ui, "Days", &store.count_days(&user)?.to_string()));
    print(&ui, &kv(&ui, "Average rating", &aggregate.to_string()));
    if aggregate.is_empty() {
        print(&ui, &badge(&ui, Badge::Info, "No days rated yet"));
        print(&ui, &hint(&ui, "daylog add --rating 4"));
    }
    Ok(())
}
