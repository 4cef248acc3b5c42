use daylog_core::storage::DayStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_day_id;
use crate::output::{day_json, print_day};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_day_id(&args.id)?;
    let user = ctx.user()?;
    let store = ctx.open_store()?;

    let day = store
        .get_day(&id)?
        .filter(|day| day.owner.id == user.id)
        .ok_or_else(|| {
            CliError::not_found(
                "Day not found",
                "Hint: Run `daylog list` to find day IDs.",
            )
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&day_json(&day))?);
    } else {
        let ui = ctx.ui_context(false, None);
        print_day(&ui, &day, ctx.quiet());
    }
    Ok(())
}
