use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::output::{page_json, render_page};
use crate::ui::OutputMode;

use super::{active_view, open_session};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    if args.page == 0 {
        return Err(CliError::invalid_input("Page numbers start at 1").into());
    }
    let (_store, mut session) = open_session(ctx, args.page_size)?;

    // Past the last page we stay on the last page.
    for _ in 1..args.page {
        if !session.page_forward().is_moved() {
            break;
        }
    }

    let view = active_view(&session)?;
    let ui = ctx.ui_context(args.json, args.format);
    match ui.mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&page_json(view))?),
        OutputMode::Plain | OutputMode::Pretty => println!("{}", render_page(&ui, "list", view)),
    }
    Ok(())
}
