use daylog_core::storage::DayStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::parse_day_id;
use crate::ui::{badge, print, Badge};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = parse_day_id(&args.id)?;
    let user = ctx.user()?;
    let mut store = ctx.open_store()?;
    let day = store.delete_day(&user, &id)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &badge(
                &ui,
                Badge::Ok,
                &format!("Deleted day {} ({})", day.id, day.date_label()),
            ),
        );
    }
    Ok(())
}
