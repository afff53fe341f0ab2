//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across the UI components. All widths are in
//! terminal columns, so wide characters are measured correctly.
//!
//! # Example
//!
//! ```rust
//! use jobboard::ui::helpers::{pad_to, truncate};
//!
//! assert_eq!(truncate("Stark Industries", 8), "Stark...");
//! assert_eq!(pad_to("Any", 5), "Any  ");
//! ```

use crate::ui::layout::display_width;
use crate::ui::markup::MarkupLine;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` columns, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return take_columns(text, width);
    }
    format!("{}...", take_columns(text, width - 3))
}

/// Longest prefix of `text` that fits in `width` columns.
fn take_columns(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Truncates or right-pads `text` to exactly `width` columns.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(padding))
}

/// Centers `text` in `width` columns, truncating it if needed.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = display_width(&text);
    let left = width.saturating_sub(len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(width.saturating_sub(left + len)))
}

/// Prints one description line, bold spans included, padded to `width`.
///
/// `base_style` is re-applied after each bold span so the surrounding
/// colors survive the reset.
pub fn render_markup_line(line: &MarkupLine, width: usize, base_style: &str) {
    let prefix = line.prefix.text();
    print!("{base_style}{prefix}");

    let mut remaining = width.saturating_sub(display_width(prefix));
    for span in &line.spans {
        if remaining == 0 {
            break;
        }
        let text: String = span.text.chars().take(remaining).collect();
        remaining -= display_width(&text);
        if span.bold {
            print!("{}{text}{}{base_style}", Theme::bold(), Theme::reset());
        } else {
            print!("{text}");
        }
    }
    print!("{}{}", " ".repeat(remaining), Theme::reset());
}
