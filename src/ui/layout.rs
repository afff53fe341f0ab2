//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! Rows and columns are 1-indexed, matching the ANSI cursor addressing used
//! by the components. The screen is laid out top to bottom as:
//!
//! ```text
//! row 2            header
//! row 3            border
//! rows 4-5         filter form
//! row 6            border
//! rows 7..=rows-4  job cards
//! row rows-3       page index
//! row rows-2       border
//! row rows-1       footer
//! ```
//!
//! The detail modal is drawn centered over everything else.

use crate::app::paginator::PageToken;
use crate::ui::viewmodel::UIViewModel;
use unicode_width::UnicodeWidthStr;

pub const HEADER_ROW: usize = 2;
pub const COMPANY_ROW: usize = 4;
pub const OPTIONS_ROW: usize = 5;
pub const LIST_TOP: usize = 7;

/// Three text lines plus a spacer.
pub const CARD_HEIGHT: usize = 4;

pub const LEFT_MARGIN: usize = 3;

pub const COMPANY_LABEL: &str = "Company: ";
pub const EDUCATION_LABEL: &str = "Education: ";
pub const SALARY_LABEL: &str = "Salary: ";
pub const SEARCH_BUTTON: &str = "[ Search ]";

/// Columns reserved for the education option between the arrows.
pub const EDUCATION_WIDTH: usize = 18;
/// Columns reserved for the salary option between the arrows.
pub const SALARY_WIDTH: usize = 12;

/// Width of `‹ ` plus ` ›` around an option label.
const SELECTOR_CHROME: usize = 4;
const FIELD_GAP: usize = 3;

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

#[must_use]
pub const fn footer_row(rows: usize) -> usize {
    rows.saturating_sub(1)
}

#[must_use]
pub const fn page_bar_row(rows: usize) -> usize {
    rows.saturating_sub(3)
}

/// Last row available to job cards.
#[must_use]
pub const fn list_bottom(rows: usize) -> usize {
    rows.saturating_sub(4)
}

/// Number of cards that fit between the filter form and the page index.
#[must_use]
pub const fn list_capacity(rows: usize) -> usize {
    (list_bottom(rows) + 1).saturating_sub(LIST_TOP) / CARD_HEIGHT
}

/// Width of the company text box, brackets excluded.
#[must_use]
pub fn company_input_width(cols: usize) -> usize {
    cols.saturating_sub(32).clamp(10, 40)
}

#[must_use]
pub fn modal_width(cols: usize) -> usize {
    (cols * 4 / 5).clamp(cols.min(30), cols)
}

#[must_use]
pub fn modal_height(rows: usize) -> usize {
    (rows * 4 / 5).clamp(rows.min(10), rows)
}

/// Columns available to the wrapped description inside the modal.
#[must_use]
pub fn modal_text_width(cols: usize) -> usize {
    modal_width(cols).saturating_sub(4).max(1)
}

/// Rows available to the description inside the modal.
#[must_use]
pub fn modal_text_height(rows: usize) -> usize {
    modal_height(rows).saturating_sub(5)
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self { row, col, width, height }
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.height && col >= self.col && col < self.col + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.row + self.height.saturating_sub(1)
    }
}

/// What a page-index cell does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Prev,
    Next,
    Page(u32),
    Ellipsis,
}

/// One cell of the page-index bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBarCell {
    pub rect: Rect,
    pub text: String,
    pub target: PageTarget,
    pub current: bool,
    pub enabled: bool,
}

/// Geometry of the open detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub frame: Rect,
    pub slides_row: usize,
    pub dots_row: usize,
    pub separator_row: usize,
    pub dots: Vec<Rect>,
    /// Area for the description text.
    pub text: Rect,
}

/// Something on screen a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    CompanyInput,
    EducationSelect,
    SalarySelect,
    SearchButton,
    /// Card at this zero-based slot of the current page.
    Card(usize),
    PrevPage,
    NextPage,
    Page(u32),
    Dot(usize),
    ModalContent,
    /// Outside the modal frame while the modal is open.
    ModalBackdrop,
}

/// Positions of every interactive element for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub company_input: Rect,
    pub search_button: Rect,
    pub education_select: Rect,
    pub salary_select: Rect,
    pub cards: Vec<(Rect, usize)>,
    pub page_bar: Vec<PageBarCell>,
    pub modal: Option<ModalLayout>,
}

impl ScreenLayout {
    /// Lays out `vm` on a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute(vm: &UIViewModel, rows: usize, cols: usize) -> Self {
        let input_width = company_input_width(cols);
        let company_input = Rect::new(COMPANY_ROW, LEFT_MARGIN, COMPANY_LABEL.len() + input_width + 2, 1);
        let search_button = Rect::new(
            COMPANY_ROW,
            company_input.col + company_input.width + 2,
            SEARCH_BUTTON.len(),
            1,
        );
        let education_select = Rect::new(
            OPTIONS_ROW,
            LEFT_MARGIN,
            EDUCATION_LABEL.len() + EDUCATION_WIDTH + SELECTOR_CHROME,
            1,
        );
        let salary_select = Rect::new(
            OPTIONS_ROW,
            education_select.col + education_select.width + FIELD_GAP,
            SALARY_LABEL.len() + SALARY_WIDTH + SELECTOR_CHROME,
            1,
        );

        let cards = vm
            .cards
            .iter()
            .enumerate()
            .map(|(position, card)| {
                (
                    Rect::new(LIST_TOP + position * CARD_HEIGHT, 1, cols, CARD_HEIGHT - 1),
                    card.slot,
                )
            })
            .collect();

        let page_bar = vm
            .page_bar
            .as_ref()
            .map(|bar| layout_page_bar(&bar.tokens, bar.can_prev, bar.can_next, page_bar_row(rows), cols))
            .unwrap_or_default();

        let modal = vm.modal.as_ref().map(|modal| {
            let dot_count = if modal.dots_enabled { modal.slide_count } else { 0 };
            layout_modal(dot_count, rows, cols)
        });

        Self {
            company_input,
            search_button,
            education_select,
            salary_select,
            cards,
            page_bar,
            modal,
        }
    }

    /// Resolves a click at `row`/`col`. While the modal is open only the
    /// modal (and its backdrop) can be hit.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<Hit> {
        if let Some(modal) = &self.modal {
            if let Some(index) = modal.dots.iter().position(|dot| dot.contains(row, col)) {
                return Some(Hit::Dot(index));
            }
            if modal.frame.contains(row, col) {
                return Some(Hit::ModalContent);
            }
            return Some(Hit::ModalBackdrop);
        }

        let fields = [
            (self.company_input, Hit::CompanyInput),
            (self.search_button, Hit::SearchButton),
            (self.education_select, Hit::EducationSelect),
            (self.salary_select, Hit::SalarySelect),
        ];
        if let Some((_, hit)) = fields.iter().find(|(rect, _)| rect.contains(row, col)) {
            return Some(*hit);
        }

        if let Some((_, slot)) = self.cards.iter().find(|(rect, _)| rect.contains(row, col)) {
            return Some(Hit::Card(*slot));
        }

        self.page_bar
            .iter()
            .find(|cell| cell.enabled && cell.rect.contains(row, col))
            .and_then(|cell| match cell.target {
                PageTarget::Prev => Some(Hit::PrevPage),
                PageTarget::Next => Some(Hit::NextPage),
                PageTarget::Page(number) => Some(Hit::Page(number)),
                PageTarget::Ellipsis => None,
            })
    }
}

fn layout_page_bar(tokens: &[PageToken], can_prev: bool, can_next: bool, row: usize, cols: usize) -> Vec<PageBarCell> {
    let mut items = vec![("‹".to_string(), PageTarget::Prev, false, can_prev)];
    for token in tokens {
        items.push(match *token {
            PageToken::Page { number, current } => (number.to_string(), PageTarget::Page(number), current, !current),
            PageToken::Ellipsis => ("…".to_string(), PageTarget::Ellipsis, false, false),
        });
    }
    items.push(("›".to_string(), PageTarget::Next, false, can_next));

    let total_width = items.iter().map(|(text, ..)| display_width(text)).sum::<usize>() + items.len().saturating_sub(1);
    let mut col = cols.saturating_sub(total_width) / 2 + 1;

    items
        .into_iter()
        .map(|(text, target, current, enabled)| {
            let width = display_width(&text);
            let cell = PageBarCell {
                rect: Rect::new(row, col, width, 1),
                text,
                target,
                current,
                enabled,
            };
            col += width + 1;
            cell
        })
        .collect()
}

fn layout_modal(dot_count: usize, rows: usize, cols: usize) -> ModalLayout {
    let width = modal_width(cols);
    let height = modal_height(rows);
    let frame = Rect::new(rows.saturating_sub(height) / 2 + 1, cols.saturating_sub(width) / 2 + 1, width, height);

    let dots_row = frame.row + 2;
    let dots_width = (dot_count * 2).saturating_sub(1);
    let dots_start = frame.col + width.saturating_sub(dots_width) / 2;
    let dots = (0..dot_count)
        .map(|index| Rect::new(dots_row, dots_start + index * 2, 1, 1))
        .collect();

    let text_top = frame.row + 4;
    ModalLayout {
        frame,
        slides_row: frame.row + 1,
        dots_row,
        separator_row: frame.row + 3,
        dots,
        text: Rect::new(
            text_top,
            frame.col + 2,
            modal_text_width(cols),
            modal_text_height(rows),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Focus;
    use crate::domain::JobId;
    use crate::ui::viewmodel::{FilterBarInfo, FooterInfo, HeaderInfo, JobCard, ModalInfo, PageBarInfo};

    fn viewmodel() -> UIViewModel {
        UIViewModel {
            header: HeaderInfo { title: String::new() },
            filter_bar: FilterBarInfo {
                company_name: String::new(),
                education: "Any".into(),
                salary: "Any".into(),
                focus: Focus::CompanyName,
            },
            cards: (0..3)
                .map(|slot| JobCard {
                    job_id: JobId::from_position(slot),
                    slot,
                    title: String::new(),
                    company: String::new(),
                    education: String::new(),
                    salary: String::new(),
                    preview: String::new(),
                    is_selected: false,
                })
                .collect(),
            list_dimmed: false,
            empty_state: None,
            page_bar: Some(PageBarInfo {
                tokens: vec![
                    PageToken::Page { number: 1, current: true },
                    PageToken::Page { number: 2, current: false },
                    PageToken::Page { number: 3, current: false },
                ],
                can_prev: false,
                can_next: true,
                dimmed: false,
            }),
            modal: None,
            footer: FooterInfo { keybindings: String::new() },
        }
    }

    fn modal() -> ModalInfo {
        ModalInfo {
            job_title: String::new(),
            company: String::new(),
            slide_count: 3,
            slides: vec![],
            active_dot: 0,
            dots_enabled: true,
            description: vec![],
            description_offset: 0,
        }
    }

    #[test]
    fn capacity_follows_pane_height() {
        assert_eq!(list_capacity(24), 3);
        assert_eq!(list_capacity(34), 6);
        assert_eq!(list_capacity(5), 0);
    }

    #[test]
    fn filter_fields_and_cards_are_hit() {
        let layout = ScreenLayout::compute(&viewmodel(), 30, 120);

        assert_eq!(layout.hit_test(COMPANY_ROW, LEFT_MARGIN), Some(Hit::CompanyInput));
        assert_eq!(
            layout.hit_test(COMPANY_ROW, layout.search_button.col + 1),
            Some(Hit::SearchButton)
        );
        assert_eq!(layout.hit_test(OPTIONS_ROW, layout.salary_select.col), Some(Hit::SalarySelect));
        assert_eq!(layout.hit_test(LIST_TOP + CARD_HEIGHT, 10), Some(Hit::Card(1)));
        assert_eq!(layout.hit_test(LIST_TOP + CARD_HEIGHT - 1, 10), None);
    }

    #[test]
    fn page_bar_cells_are_centered_and_hit() {
        let layout = ScreenLayout::compute(&viewmodel(), 30, 120);
        let texts: Vec<&str> = layout.page_bar.iter().map(|cell| cell.text.as_str()).collect();
        assert_eq!(texts, ["‹", "1", "2", "3", "›"]);

        let total = 9;
        assert_eq!(layout.page_bar[0].rect.col, (120 - total) / 2 + 1);

        let two = &layout.page_bar[2];
        assert_eq!(layout.hit_test(two.rect.row, two.rect.col), Some(Hit::Page(2)));
        let prev = &layout.page_bar[0];
        assert_eq!(layout.hit_test(prev.rect.row, prev.rect.col), None);
        let next = &layout.page_bar[4];
        assert_eq!(layout.hit_test(next.rect.row, next.rect.col), Some(Hit::NextPage));
    }

    #[test]
    fn open_modal_captures_every_click() {
        let mut vm = viewmodel();
        vm.modal = Some(modal());
        let layout = ScreenLayout::compute(&vm, 30, 120);
        let modal = layout.modal.as_ref().unwrap();

        assert_eq!(modal.dots.len(), 3);
        let dot = modal.dots[2];
        assert_eq!(layout.hit_test(dot.row, dot.col), Some(Hit::Dot(2)));
        assert_eq!(
            layout.hit_test(modal.frame.row + 5, modal.frame.col + 3),
            Some(Hit::ModalContent)
        );
        assert_eq!(layout.hit_test(1, 1), Some(Hit::ModalBackdrop));
        assert_eq!(layout.hit_test(COMPANY_ROW, LEFT_MARGIN), Some(Hit::ModalBackdrop));
    }

    #[test]
    fn single_photo_modal_has_no_dots() {
        let mut vm = viewmodel();
        vm.modal = Some(ModalInfo {
            slide_count: 1,
            dots_enabled: false,
            ..modal()
        });
        let layout = ScreenLayout::compute(&vm, 30, 120);

        assert!(layout.modal.unwrap().dots.is_empty());
    }
}
