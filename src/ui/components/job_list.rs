//! Job card list renderer.
//!
//! Each card takes three rows: title and company, the education and salary
//! labels, then the preview. While the list fades out every card is drawn
//! dimmed.

use crate::ui::helpers::{pad_to, position_cursor, truncate};
use crate::ui::layout::{display_width, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JobCard;

const CARD_INDENT: usize = 3;

/// Renders `cards` into the rectangles computed by the layout.
pub fn render_job_list(cards: &[JobCard], rects: &[(Rect, usize)], dimmed: bool, theme: &Theme, cols: usize) {
    for (card, (rect, _)) in cards.iter().zip(rects) {
        render_card(card, rect, dimmed, theme, cols);
    }
}

fn base_style(card: &JobCard, dimmed: bool, theme: &Theme) -> String {
    if dimmed {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    } else if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

fn render_card(card: &JobCard, rect: &Rect, dimmed: bool, theme: &Theme, cols: usize) {
    let base = base_style(card, dimmed, theme);
    let width = cols.saturating_sub(CARD_INDENT);
    let marker = if card.is_selected { "> " } else { "  " };
    let accent = |color: &str| {
        if dimmed || card.is_selected {
            String::new()
        } else {
            Theme::fg(color)
        }
    };

    position_cursor(rect.row, 1);
    print!("{base}{marker} ");
    let title = truncate(&card.title, width);
    print!("{}{}{title}{}{base}", Theme::bold(), accent(&theme.colors.title_fg), Theme::reset());
    let company = truncate(&format!("  {}", card.company), width.saturating_sub(display_width(&title)));
    print!("{}", pad_to(&company, width.saturating_sub(display_width(&title))));
    print!("{}", Theme::reset());

    position_cursor(rect.row + 1, 1);
    print!("{base}{}", " ".repeat(CARD_INDENT));
    let labels = format!("{}  ·  {}", card.education, card.salary);
    print!("{}{}", accent(&theme.colors.badge_fg), pad_to(&labels, width));
    print!("{}", Theme::reset());

    position_cursor(rect.row + 2, 1);
    print!("{base}{}", " ".repeat(CARD_INDENT));
    if !dimmed && !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad_to(&card.preview, width));
    print!("{}", Theme::reset());
}
