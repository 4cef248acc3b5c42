//! Daylog CLI - rate your days and page through how they went
//!
//! This is the command-line interface for Daylog. It wires the core
//! collection view to a local store, a config file, and the terminal.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use daylog_core::{DaylogError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{days, init, misc};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    logging::init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);
        let hint = hint.or_else(|| contextual_hint(message));

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + 1..].to_string())),
        None => (error, None),
    }
}

/// Provide hints for common error patterns.
fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("invalid day id") {
        return Some(
            "Hint: Day IDs are UUIDs (e.g., 7a2e3c0b-1234-5678-9abc-def012345678). Run `daylog list` to see them."
                .to_string(),
        );
    }

    if error_lower.contains("rating must be between") {
        return Some("Hint: Rate a day from 1 (rough) to 5 (great).".to_string());
    }

    if error_lower.contains("page size") {
        return Some("Hint: Use a page size of 1 or more.".to_string());
    }

    if error_lower.contains("already exists") {
        return Some(
            "Hint: Pass a different path to `daylog init`, or remove the existing file."
                .to_string(),
        );
    }

    None
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DaylogError>() {
        Some(DaylogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DaylogError::InvalidArgument(_)) => exit_codes::INVALID_INPUT,
        _ => exit_codes::GENERAL,
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            days::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            days::handle_list(ctx, args)?;
        }
        Some(Commands::Browse(args)) => {
            days::handle_browse(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            days::handle_show(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            days::handle_delete(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            days::handle_stats(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Daylog v{}", VERSION);
            println!("\nQuickstart:");
            println!("  daylog init --user me");
            println!("  daylog add --rating 4");
            println!("  daylog list");
            println!("  daylog browse");
            println!("  daylog stats");
            println!("\nRun `daylog --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_hint() {
        let (message, hint) = split_error_hint("Day not found\nHint: Run `daylog list`.");
        assert_eq!(message, "Day not found");
        assert_eq!(hint.as_deref(), Some("Hint: Run `daylog list`."));

        let (message, hint) = split_error_hint("plain failure");
        assert_eq!(message, "plain failure");
        assert!(hint.is_none());
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::new(CliError::not_found("gone", "Hint: look"));
        assert_eq!(exit_code(&err), exit_codes::NOT_FOUND);

        let err = anyhow::Error::new(DaylogError::InvalidArgument("bad".to_string()));
        assert_eq!(exit_code(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&err), exit_codes::GENERAL);
    }
}
