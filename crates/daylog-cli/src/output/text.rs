//! Text and table output formatting for days.

use daylog_core::storage::DayEntry;
use daylog_core::view::DayCollectionView;

use crate::ui::format::{format_datetime, rating_bar, short_id};
use crate::ui::{header, hint, kv, simple_table, Column, UiContext};

const DAY_COLUMNS: [Column; 3] = [
    Column::new("Date"),
    Column::new("Rating"),
    Column::new("ID"),
];

fn day_row(ctx: &UiContext, day: &DayEntry) -> Vec<String> {
    if ctx.mode.is_pretty() {
        vec![
            day.date_label(),
            rating_bar(day.rating, ctx.unicode),
            short_id(&day.id),
        ]
    } else {
        vec![
            day.date_label(),
            day.rating.get().to_string(),
            day.id.to_string(),
        ]
    }
}

/// Render the current page of `view`: header, day rows, page line, average.
pub fn render_page(ctx: &UiContext, command: &str, view: &DayCollectionView) -> String {
    let info = view.page_info();
    let position = format!("page {} of {}", info.page_number, info.page_count);

    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(header(ctx, command, Some(position.as_str())));
    }

    let window = view.visible_window();
    if window.is_empty() {
        if ctx.mode.is_pretty() {
            lines.push("No days on this page.".to_string());
        }
    } else {
        let rows: Vec<Vec<String>> = window.iter().map(|day| day_row(ctx, day)).collect();
        lines.push(simple_table(ctx, &DAY_COLUMNS, &rows));
    }

    if ctx.mode.is_pretty() {
        lines.push(format!(
            "{} of {} days \u{00B7} {}",
            info.shown, info.total, position
        ));
    } else {
        lines.push(kv(
            ctx,
            "page",
            &format!("{}/{}", info.page_number, info.page_count),
        ));
        lines.push(kv(ctx, "shown", &info.shown.to_string()));
        lines.push(kv(ctx, "total", &info.total.to_string()));
    }
    lines.push(kv(ctx, "Average rating", &view.aggregate_rating().to_string()));

    if view.is_empty() {
        lines.push(hint(ctx, "daylog add --rating 4"));
    }

    lines.join("\n")
}

/// Print a single day in human-readable format.
pub fn print_day(ctx: &UiContext, day: &DayEntry, quiet: bool) {
    if quiet {
        println!("{} {}", day.date_label(), day.rating.get());
        return;
    }
    let owner = day.owner.name.as_deref().unwrap_or("unknown");
    let pretty = ctx.mode.is_pretty();
    println!("{}", kv(ctx, "ID", &day.id.to_string()));
    println!("{}", kv(ctx, "Date", &day.date_label()));
    println!(
        "{}",
        kv(ctx, "Rating", &format!("{} {}", day.rating, rating_bar(day.rating, ctx.unicode)))
    );
    println!("{}", kv(ctx, "Owner", owner));
    println!(
        "{}",
        kv(ctx, "Created", &format_datetime(&day.created_at, pretty))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use chrono::{TimeZone, Utc};
    use daylog_core::storage::{OwnerRef, Rating};
    use uuid::Uuid;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn day(d: u32, rating: u8) -> DayEntry {
        DayEntry {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(2024, 9, d, 0, 0, 0).unwrap(),
            rating: Rating::new(rating).unwrap(),
            owner: OwnerRef {
                id: Uuid::nil(),
                name: None,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_page_plain() {
        let mut view = DayCollectionView::new(2).unwrap();
        let days = vec![day(1, 2), day(3, 4), day(2, 3)];
        let newest = days[1].id;
        view.load(days);

        let out = render_page(&plain_ctx(), "list", &view);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("2024-09-03 4 {}", newest));
        assert!(lines[1].starts_with("2024-09-02 3 "));
        assert!(out.contains("page=1/2"));
        assert!(out.contains("shown=2"));
        assert!(out.contains("total=3"));
        assert!(out.contains("average_rating=3.00"));
    }

    #[test]
    fn test_render_empty_page_plain() {
        let view = DayCollectionView::default();
        let out = render_page(&plain_ctx(), "list", &view);
        assert!(out.contains("page=1/1"));
        assert!(out.contains("average_rating=no data"));
        assert!(out.contains("hint=daylog add --rating 4"));
    }
}
