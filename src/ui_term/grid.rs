//! Plain-text rendering of the month grid and week strip.

use chrono::Datelike;

use crate::models::calendar_day::{CalendarCell, Granularity};
use crate::services::calendar::{CalendarDateSelector, Clock};

/// Legend printed under every grid.
pub const LEGEND: &str = "(dd) today  [dd] selected  dd~ unavailable";

fn format_cell(cell: &CalendarCell) -> String {
    match cell.day() {
        None => "    ".to_string(),
        Some(day) if day.is_selected => format!("[{:>2}]", day.date.day()),
        Some(day) if day.is_today => format!("({:>2})", day.date.day()),
        Some(day) if day.is_disabled => format!(" {:>2}~", day.date.day()),
        Some(day) => format!(" {:>2} ", day.date.day()),
    }
}

/// Render the selector's current period as rows of seven cells.
pub fn render_period<C: Clock>(selector: &CalendarDateSelector<C>) -> String {
    let anchor = selector.anchor();
    let (title, week_start) = match selector.granularity() {
        Granularity::Month => (
            anchor.format("%B %Y").to_string(),
            selector.layout().month_week_start,
        ),
        Granularity::Week => {
            let first = selector
                .visible_days()
                .find_map(|cell| cell.date())
                .unwrap_or(anchor);
            (
                format!("Week of {}", first.format("%d %b %Y")),
                selector.layout().week_view_start,
            )
        }
    };

    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", title));
    for label in week_start.day_labels() {
        out.push_str(&format!(" {} ", label));
    }
    out.push('\n');

    let cells: Vec<CalendarCell> = selector.visible_days().collect();
    for row in cells.chunks(7) {
        let line: String = row.iter().map(format_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One-line status: selection plus which arrows are live.
pub fn render_summary<C: Clock>(selector: &CalendarDateSelector<C>) -> String {
    let selected = selector
        .selected()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "none".to_string());
    let arrow = |enabled: bool, glyph: &'static str| if enabled { glyph } else { "-" };
    format!(
        "selected: {}   prev: {}   next: {}",
        selected,
        arrow(selector.can_navigate_previous(), "<"),
        arrow(selector.can_navigate_next(), ">"),
    )
}
