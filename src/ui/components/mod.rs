//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at positions taken from
//! the [`ScreenLayout`], so what is drawn and what a click resolves to always
//! agree.
//!
//! # Components
//!
//! - [`header`]: Title bar with the match count
//! - [`filter_bar`]: Company text box, option selectors and search button
//! - [`job_list`]: Job cards of the current page
//! - [`page_bar`]: Page index with previous/next arrows
//! - [`empty`]: Loading and no-match messages
//! - [`modal`]: Detail overlay with the photo carousel
//! - [`footer`]: Keybinding hints

mod empty;
mod filter_bar;
mod footer;
mod header;
mod job_list;
mod modal;
mod page_bar;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, ScreenLayout, HEADER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use job_list::render_job_list;
use modal::render_modal;
use page_bar::render_page_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter form - 2 lines]
/// [Border]
/// [Job cards or empty state]
/// [Page index]
/// [Border]
/// [Footer]
/// ```
///
/// The modal, when open, is drawn last over the rest.
pub fn render_screen(vm: &UIViewModel, layout: &ScreenLayout, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = HEADER_ROW;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(&vm.filter_bar, layout, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_job_list(&vm.cards, &layout.cards, vm.list_dimmed, theme, cols);
    }

    if let Some(bar) = &vm.page_bar {
        render_page_bar(&layout.page_bar, bar.dimmed, theme);
    }

    let footer_start = layout::footer_row(rows);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let (Some(modal), Some(modal_layout)) = (&vm.modal, &layout.modal) {
        render_modal(modal, modal_layout, theme);
    }
}
