//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::{OutputMode, UiContext};
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Daylog · command (context)"
/// Plain mode: "daylog command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Daylog", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("daylog {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a low-key notice, only in pretty mode.
pub fn notice(ctx: &UiContext, text: &str) -> Option<String> {
    ctx.shows_notices()
        .then(|| styled(text, styles::dim(), ctx.color))
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table (for lists like days).
///
/// Pretty mode: aligned columns with a dim header
/// Plain mode: space-separated values (no header)
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h.trim_start_matches("Hint:").trim()));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h.trim_start_matches("Hint:").trim()));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "list", Some("page 1 of 2"));
        assert!(h.contains("Daylog"));
        assert!(h.contains("list"));
        assert!(h.contains("page 1 of 2"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "list", None), "daylog list");
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain_ctx(), "Average rating", "4.00"), "average_rating=4.00");
        assert_eq!(kv(&pretty_ctx(), "Average", "4.00"), "Average: 4.00");
    }

    #[test]
    fn test_notice_only_pretty() {
        assert!(notice(&plain_ctx(), "no more pages").is_none());
        assert_eq!(
            notice(&pretty_ctx(), "no more pages").as_deref(),
            Some("no more pages")
        );
    }

    #[test]
    fn test_simple_table_plain() {
        let columns = [Column::new("Date"), Column::new("Rating")];
        let rows = vec![
            vec!["2024-01-02".to_string(), "4".to_string()],
            vec!["2024-01-01".to_string(), "2".to_string()],
        ];
        assert_eq!(
            simple_table(&plain_ctx(), &columns, &rows),
            "2024-01-02 4\n2024-01-01 2"
        );
    }

    #[test]
    fn test_error_message_plain_strips_hint_label() {
        let msg = error_message(&plain_ctx(), "Day not found", Some("Hint: Run `daylog list`."));
        assert_eq!(msg, "error=Day not found\nhint=Run `daylog list`.");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "Day not found", None);
        assert!(msg.contains("[\u{2717}]"));
        assert!(msg.contains("Day not found"));
    }

    #[test]
    fn test_divider_ascii() {
        assert_eq!(divider(&plain_ctx()), "---");
    }
}
