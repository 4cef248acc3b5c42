use chrono::Utc;

use daylog_core::storage::{DayStore, NewDay};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_datetime, parse_rating};
use crate::ui::{badge, print, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let rating = parse_rating(args.rating)?;
    let date = match args.date.as_deref() {
        Some(value) => parse_datetime(value)?,
        None => Utc::now(),
    };

    let user = ctx.user()?;
    let mut store = ctx.open_store()?;
    let day = store.insert_day(&NewDay::new(user.id, date, rating))?;

    if ctx.quiet() {
        println!("{}", day.id);
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    print(
        &ui,
        &badge(
            &ui,
            Badge::Ok,
            &format!("Added day {} ({}, {})", day.id, day.date_label(), day.rating),
        ),
    );
    Ok(())
}
