//! Detail modal renderer.
//!
//! The modal is drawn over the list as a framed box:
//!
//! ```text
//! ╭─ Job title · Company ─────────────╮
//! │ [1/4 office.jpg] [2/4 team.jpg]   │
//! │             ● ○ ○ ○               │
//! ├───────────────────────────────────┤
//! │ description ...                   │
//! ╰──────────────────── Esc: close ───╯
//! ```

use crate::ui::helpers::{center, position_cursor, render_markup_line, truncate};
use crate::ui::layout::{display_width, ModalLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const CLOSE_HINT: &str = " Esc: close ";

fn render_frame_line(row: usize, col: usize, width: usize, left: &str, right: &str, label: &str, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let label = truncate(label, inner.saturating_sub(2));
    position_cursor(row, col);
    print!("{}{left}", Theme::fg(&theme.colors.modal_border));
    print!("{}", "─".repeat(inner.saturating_sub(display_width(&label))));
    print!("{label}{right}{}", Theme::reset());
}

fn render_side(row: usize, col: usize, theme: &Theme) {
    position_cursor(row, col);
    print!("{}│{}", Theme::fg(&theme.colors.modal_border), Theme::reset());
}

fn render_slides(modal: &ModalInfo, width: usize, theme: &Theme) {
    if modal.slides.is_empty() {
        print!("{}{}", Theme::fg(&theme.colors.text_dim), center("No photos", width));
        return;
    }

    let cell_width = width / modal.slides.len();
    for (position, slide) in modal.slides.iter().enumerate() {
        let caption = format!("[{}/{} {}]", slide.index + 1, modal.slide_count, slide.caption);
        if position == 0 {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}{}", center(&caption, cell_width), Theme::reset());
    }
    print!("{}", " ".repeat(width.saturating_sub(cell_width * modal.slides.len())));
}

/// Renders the modal described by `modal` into `layout`.
pub fn render_modal(modal: &ModalInfo, layout: &ModalLayout, theme: &Theme) {
    let frame = layout.frame;
    let inner = frame.width.saturating_sub(2);
    let right_col = frame.col + frame.width.saturating_sub(1);

    let title = format!(" {} · {} ", modal.job_title, modal.company);
    position_cursor(frame.row, frame.col);
    print!("{}╭─", Theme::fg(&theme.colors.modal_border));
    let title = truncate(&title, inner.saturating_sub(2));
    print!("{}{}{title}{}", Theme::reset(), Theme::bold(), Theme::reset());
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("{}╮{}", "─".repeat(inner.saturating_sub(1 + display_width(&title))), Theme::reset());

    for row in frame.row + 1..frame.bottom() {
        render_side(row, frame.col, theme);
        print!("{}", " ".repeat(inner));
        render_side(row, right_col, theme);
    }

    position_cursor(layout.slides_row, frame.col + 1);
    render_slides(modal, inner, theme);

    for (index, dot) in layout.dots.iter().enumerate() {
        position_cursor(dot.row, dot.col);
        if index == modal.active_dot {
            print!("{}●{}", Theme::fg(&theme.colors.focus_fg), Theme::reset());
        } else {
            print!("{}○{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
    }

    render_frame_line(layout.separator_row, frame.col, frame.width, "├", "┤", "", theme);

    let text = layout.text;
    let base = Theme::fg(&theme.colors.text_normal);
    let visible = modal.description.iter().skip(modal.description_offset).take(text.height);
    for (offset, line) in visible.enumerate() {
        position_cursor(text.row + offset, text.col);
        render_markup_line(line, text.width, &base);
    }

    render_frame_line(frame.bottom(), frame.col, frame.width, "╰", "╯", CLOSE_HINT, theme);

    // Scroll marker on the bottom border.
    let above = modal.description_offset > 0;
    let below = modal.description.len() > modal.description_offset + text.height;
    let marker = match (above, below) {
        (true, true) => Some(" ↑↓ j/k "),
        (true, false) => Some(" ↑ k "),
        (false, true) => Some(" ↓ j "),
        (false, false) => None,
    };
    if let Some(marker) = marker {
        position_cursor(frame.bottom(), frame.col + 2);
        print!("{}{marker}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
}
