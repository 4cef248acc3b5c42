//! Interactive paging over the configured user's days.
//!
//! Commands are read one per line from stdin, so the loop can be driven
//! from a terminal or a pipe.

use std::io::{BufRead, IsTerminal, Write};

use daylog_core::view::{Navigation, ViewSession};

use crate::app::AppContext;
use crate::cli::BrowseArgs;
use crate::output::render_page;
use crate::ui::render::divider;
use crate::ui::{badge, blank_line, hint, notice, print, Badge, UiContext};

use super::{active_view, open_session, LatestAverage};

const HELP: &str = "n/next, p/prev, s <N>/size <N>, r/reload, q/quit";

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Previous,
    Size(usize),
    Reload,
    Quit,
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let argument = parts.next();

    match (verb.as_str(), argument) {
        ("n" | "next", None) => Ok(BrowseCommand::Next),
        ("p" | "prev", None) => Ok(BrowseCommand::Previous),
        ("r" | "reload", None) => Ok(BrowseCommand::Reload),
        ("q" | "quit", None) => Ok(BrowseCommand::Quit),
        ("s" | "size", Some(value)) => value
            .parse::<usize>()
            .map(BrowseCommand::Size)
            .map_err(|_| format!("Invalid page size: {}", value)),
        ("s" | "size", None) => Err("size needs a number".to_string()),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn render(ui: &UiContext, session: &ViewSession<LatestAverage>) -> anyhow::Result<()> {
    blank_line(ui);
    print(ui, &render_page(ui, "browse", active_view(session)?));
    if ui.mode.is_pretty() {
        print(ui, &divider(ui));
    }
    Ok(())
}

/// The page stays as it was; the table layout says why.
fn report_unchanged(ui: &UiContext, text: &str) {
    if let Some(line) = notice(ui, text) {
        print(ui, &line);
    }
}

fn report_rejection(ui: &UiContext, navigation: Navigation, text: &str) {
    if navigation == Navigation::Rejected {
        report_unchanged(ui, text);
    }
}

pub fn handle_browse(ctx: &AppContext, args: &BrowseArgs) -> anyhow::Result<()> {
    let (store, mut session) = open_session(ctx, args.page_size)?;
    let ui = ctx.ui_context(false, args.format);
    let interactive = std::io::stdin().is_terminal();

    render(&ui, &session)?;
    if interactive {
        print(&ui, &hint(&ui, HELP));
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Next) => {
                report_rejection(&ui, session.page_forward(), "Already on the last page");
            }
            Ok(BrowseCommand::Previous) => {
                report_rejection(&ui, session.page_backward(), "Already on the first page");
            }
            Ok(BrowseCommand::Size(size)) => {
                if let Err(e) = session.set_page_size(size) {
                    report_unchanged(&ui, &e.to_string());
                }
            }
            Ok(BrowseCommand::Reload) => {
                session.refresh(&store)?;
                tracing::debug!(
                    loads = session.sink().loads(),
                    average = ?session.sink().latest(),
                    "reloaded days"
                );
            }
            Err(message) => {
                print(&ui, &badge(&ui, Badge::Warn, &message));
                print(&ui, &hint(&ui, HELP));
                continue;
            }
        }
        render(&ui, &session)?;
    }

    session.deactivate();
    Ok(())
}
