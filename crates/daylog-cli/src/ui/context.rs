//! Where command output goes and how it should look.
//!
//! `Terminal` records what stdout can handle. `UiContext` combines it with
//! the global `--no-color`/`--ascii` flags and a command's `--json` or
//! `--format` choice.

use std::io::IsTerminal;

use crate::cli::{Cli, Format};

const FALLBACK_WIDTH: usize = 80;

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// One record per line, `key=value` summaries
    #[default]
    Plain,
    /// Headers, aligned tables, styled notices
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Capabilities of the stream command output is written to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn stdout() -> Self {
        Self {
            tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(columns_from_tty),
        }
    }

    /// `--json` wins, `--format` picks a text layout, and without either
    /// only a capable tty gets the table layout.
    pub fn output_mode(&self, json: bool, format: Option<Format>) -> OutputMode {
        match (json, format) {
            (true, _) => OutputMode::Json,
            (false, Some(Format::Plain)) => OutputMode::Plain,
            (false, Some(Format::Table)) => OutputMode::Pretty,
            (false, None) if self.tty && !self.dumb => OutputMode::Pretty,
            (false, None) => OutputMode::Plain,
        }
    }

    fn supports_color(&self) -> bool {
        self.tty && !self.dumb && !self.no_color
    }
}

/// Rendering settings for one command invocation.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Columns available for dividers and tables
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn new(terminal: &Terminal, cli: &Cli, json: bool, format: Option<Format>) -> Self {
        Self {
            color: terminal.supports_color() && !cli.no_color,
            unicode: !cli.ascii,
            width: terminal.columns.unwrap_or(FALLBACK_WIDTH),
            mode: terminal.output_mode(json, format),
        }
    }

    /// Rejected moves and ignored page sizes leave the page as it was; only
    /// the table layout mentions them.
    pub fn shows_notices(&self) -> bool {
        self.mode.is_pretty()
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&columns| columns > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a winsize into the pointer and nothing else.
    let rc = unsafe {
        libc::ioctl(
            libc::STDOUT_FILENO,
            libc::TIOCGWINSZ,
            &mut size as *mut libc::winsize,
        )
    };
    (rc == 0 && size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}
