//! Page index renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::PageBarCell;
use crate::ui::theme::Theme;

/// Renders the page index cells. The current page uses the selection colors;
/// disabled arrows and ellipses are dim.
pub fn render_page_bar(cells: &[PageBarCell], dimmed: bool, theme: &Theme) {
    for cell in cells {
        position_cursor(cell.rect.row, cell.rect.col);
        if dimmed {
            print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        } else if cell.current {
            print!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            );
        } else if cell.enabled {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}{}", cell.text, Theme::reset());
    }
}
