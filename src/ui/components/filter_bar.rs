//! Filter form renderer.
//!
//! Draws the company text box with the search button on one row and the two
//! option selectors on the next. The focused element is highlighted; the text
//! box shows a cursor while it has focus.

use crate::app::modes::Focus;
use crate::ui::helpers::{pad_to, position_cursor, truncate};
use crate::ui::layout::{
    company_input_width, display_width, ScreenLayout, COMPANY_LABEL, EDUCATION_LABEL, EDUCATION_WIDTH, SALARY_LABEL,
    SALARY_WIDTH, SEARCH_BUTTON,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

fn label_style(focused: bool, theme: &Theme) -> String {
    if focused {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.focus_fg))
    } else {
        Theme::fg(&theme.colors.text_dim)
    }
}

fn render_selector(label: &str, value: &str, width: usize, focused: bool, theme: &Theme) {
    print!("{}{label}{}", label_style(focused, theme), Theme::reset());
    let arrows = if focused {
        Theme::fg(&theme.colors.focus_fg)
    } else {
        Theme::fg(&theme.colors.border)
    };
    print!("{arrows}‹ {}", Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_normal), pad_to(value, width));
    print!("{arrows} ›{}", Theme::reset());
}

/// Renders both filter rows.
///
/// # Returns
///
/// The row after the option selectors.
pub fn render_filter_bar(info: &FilterBarInfo, layout: &ScreenLayout, theme: &Theme, cols: usize) -> usize {
    let input = layout.company_input;
    let input_width = company_input_width(cols);
    let company_focused = info.focus == Focus::CompanyName;

    position_cursor(input.row, input.col);
    print!("{}{COMPANY_LABEL}{}", label_style(company_focused, theme), Theme::reset());
    let frame = if company_focused {
        Theme::fg(&theme.colors.focus_fg)
    } else {
        Theme::fg(&theme.colors.border)
    };
    print!("{frame}[{}", Theme::reset());

    let text = if company_focused {
        let visible = truncate(&info.company_name, input_width.saturating_sub(1));
        format!("{visible}_")
    } else {
        truncate(&info.company_name, input_width)
    };
    print!("{}{}", Theme::fg(&theme.colors.text_normal), pad_to(&text, input_width));
    print!("{frame}]{}", Theme::reset());

    let button = layout.search_button;
    position_cursor(button.row, button.col);
    if info.focus == Focus::SearchButton {
        print!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
    } else {
        print!("{}{}", Theme::fg(&theme.colors.button_fg), Theme::bg(&theme.colors.button_bg));
    }
    print!("{SEARCH_BUTTON}{}", Theme::reset());

    let education = layout.education_select;
    position_cursor(education.row, education.col);
    render_selector(
        EDUCATION_LABEL,
        &info.education,
        EDUCATION_WIDTH,
        info.focus == Focus::Education,
        theme,
    );

    let salary = layout.salary_select;
    if salary.col + display_width(SALARY_LABEL) <= cols {
        position_cursor(salary.row, salary.col);
        render_selector(SALARY_LABEL, &info.salary, SALARY_WIDTH, info.focus == Focus::Salary, theme);
    }

    salary.row + 1
}
