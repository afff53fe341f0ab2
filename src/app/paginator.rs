//! Filtered-subset derivation and page arithmetic.
//!
//! Everything here is a pure function of the catalog, the committed criteria
//! and the page size, recomputed on every change rather than cached.

use super::filter::FilterCriteria;
use super::modes::ViewportClass;
use crate::domain::{Catalog, JobRecord};

/// Every record satisfying the criteria, in catalog order.
#[must_use]
pub fn derive<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a JobRecord> {
    let _span = tracing::debug_span!("derive_filtered",
        total_jobs = catalog.len(),
        company_name = %criteria.company_name,
        education = %criteria.education,
        salary = %criteria.salary
    ).entered();

    let filtered: Vec<&JobRecord> = catalog
        .jobs()
        .iter()
        .filter(|job| criteria.matches(catalog, job))
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter derived");
    filtered
}

/// `ceil(count / page_size)`; zero for an empty result.
#[must_use]
pub fn page_count(count: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// Page count as displayed: never below one.
#[must_use]
pub fn display_page_count(count: usize, page_size: usize) -> u32 {
    page_count(count, page_size).max(1)
}

/// Slice of the 1-based `page`, empty when the page does not exist.
///
/// ```rust
/// use jobboard::app::paginator::paginate;
///
/// let items: Vec<u32> = (1..=13).collect();
/// assert_eq!(paginate(&items, 6, 3), &[13]);
/// assert!(paginate(&items, 6, 4).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, page: u32) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page number. Always within `[1, display_page_count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl PageState {
    /// State positioned on `page`, unchecked.
    #[must_use]
    pub const fn at(page: u32) -> Self {
        Self { current_page: page }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current_page
    }

    /// Whether `target` is a real change for a list with `page_count` pages.
    #[must_use]
    pub const fn accepts(&self, target: u32, page_count: u32) -> bool {
        target >= 1 && target <= page_count && target != self.current_page
    }

    /// Moves to `target`; out-of-range or unchanged targets are a no-op.
    pub fn change_page(&mut self, target: u32, page_count: u32) -> bool {
        if !self.accepts(target, page_count) {
            tracing::trace!(target, page_count, current = self.current_page, "page change ignored");
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls the page back into range after the page count shrank.
    pub fn clamp(&mut self, page_count: u32) {
        self.current_page = self.current_page.clamp(1, page_count.max(1));
    }
}

/// One entry of the page-index bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page { number: u32, current: bool },
    /// Non-interactive gap marker.
    Ellipsis,
}

/// Columns the page bar needs for `tokens`, arrows and separating spaces included.
#[must_use]
pub fn bar_width(tokens: &[PageToken]) -> usize {
    let token_width: usize = tokens
        .iter()
        .map(|token| match token {
            PageToken::Page { number, .. } => number.to_string().len(),
            PageToken::Ellipsis => 1,
        })
        .sum();
    // `‹` and `›` plus one space between each pair of cells.
    token_width + 2 + tokens.len() + 1
}

/// Page-index tokens for the page bar.
///
/// Wide layouts and compact layouts with at most five pages list every page.
/// Larger compact lists show the first and last page, a one-page window around
/// the current page, and an ellipsis wherever pages are skipped. Whenever a
/// form does not fit in `cols` columns the next shorter one is used, down to
/// the current page alone between ellipses.
#[must_use]
pub fn page_index(current: u32, page_count: u32, class: ViewportClass, cols: usize) -> Vec<PageToken> {
    let token = |number: u32| PageToken::Page {
        number,
        current: number == current,
    };

    if class == ViewportClass::Wide || page_count <= 5 {
        let every: Vec<PageToken> = (1..=page_count).map(token).collect();
        if bar_width(&every) <= cols {
            return every;
        }
    }

    let windowed = window_around(current, page_count, token);
    if bar_width(&windowed) <= cols {
        return windowed;
    }

    let mut minimal = Vec::with_capacity(3);
    if current > 1 {
        minimal.push(PageToken::Ellipsis);
    }
    minimal.push(token(current));
    if current < page_count {
        minimal.push(PageToken::Ellipsis);
    }
    minimal
}

fn window_around(current: u32, page_count: u32, token: impl Fn(u32) -> PageToken) -> Vec<PageToken> {
    let mut numbers: Vec<u32> = vec![1, page_count];
    for number in current.saturating_sub(1)..=current.saturating_add(1) {
        if (1..=page_count).contains(&number) {
            numbers.push(number);
        }
    }
    numbers.sort_unstable();
    numbers.dedup();

    let mut tokens = Vec::with_capacity(numbers.len() + 2);
    let mut previous: Option<u32> = None;
    for number in numbers {
        if previous.is_some_and(|prev| number > prev + 1) {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(token(number));
        previous = Some(number);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobId, LookupTable};

    fn catalog(companies: &[&str]) -> Catalog {
        let jobs = companies
            .iter()
            .enumerate()
            .map(|(position, company)| JobRecord {
                id: JobId::from_position(position),
                company_name: (*company).to_string(),
                job_title: "Engineer".to_string(),
                education_id: 1,
                salary_id: 1,
                preview: String::new(),
                company_photos: vec![],
                description: String::new(),
            })
            .collect();
        Catalog::new(jobs, LookupTable::default(), LookupTable::default())
    }

    fn numbers(tokens: &[PageToken]) -> Vec<Option<u32>> {
        tokens
            .iter()
            .map(|token| match token {
                PageToken::Page { number, .. } => Some(*number),
                PageToken::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn empty_criteria_keep_catalog_order() {
        let catalog = catalog(&["A", "B", "C"]);
        let filtered = derive(&catalog, &FilterCriteria::default());

        let ids: Vec<u32> = filtered.iter().map(|job| job.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn thirteen_records_make_three_pages() {
        let items: Vec<usize> = (0..13).collect();

        assert_eq!(page_count(items.len(), 6), 3);
        assert_eq!(paginate(&items, 6, 1).len(), 6);
        assert_eq!(paginate(&items, 6, 2).len(), 6);
        assert_eq!(paginate(&items, 6, 3).len(), 1);
    }

    #[test]
    fn pages_partition_the_sequence() {
        for count in 0..30usize {
            for size in 1..8usize {
                let items: Vec<usize> = (0..count).collect();
                let pages = page_count(count, size);
                assert_eq!(pages as usize, count.div_ceil(size));

                let joined: Vec<usize> = (1..=pages).flat_map(|page| paginate(&items, size, page).to_vec()).collect();
                assert_eq!(joined, items);

                if pages > 0 {
                    let last = paginate(&items, size, pages).len();
                    assert_eq!(last, count - (pages as usize - 1) * size);
                }
            }
        }
    }

    #[test]
    fn display_page_count_is_at_least_one() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(display_page_count(0, 6), 1);
    }

    #[test]
    fn change_page_rejects_invalid_targets() {
        let mut page = PageState::default();

        assert!(!page.change_page(0, 3));
        assert!(!page.change_page(4, 3));
        assert!(!page.change_page(1, 3));
        assert_eq!(page.current(), 1);

        assert!(page.change_page(3, 3));
        assert_eq!(page.current(), 3);
    }

    #[test]
    fn clamp_pulls_page_into_range() {
        let mut page = PageState::default();
        page.change_page(4, 4);

        page.clamp(2);
        assert_eq!(page.current(), 2);

        page.clamp(0);
        assert_eq!(page.current(), 1);
    }

    #[test]
    fn wide_layout_lists_every_page() {
        let tokens = page_index(5, 9, ViewportClass::Wide, 120);
        assert_eq!(tokens.len(), 9);
        assert!(tokens.contains(&PageToken::Page { number: 5, current: true }));
    }

    #[test]
    fn compact_layout_with_few_pages_lists_every_page() {
        assert_eq!(numbers(&page_index(2, 5, ViewportClass::Compact, 80)), [Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }

    #[test]
    fn compact_layout_places_ellipses_around_window() {
        assert_eq!(
            numbers(&page_index(5, 9, ViewportClass::Compact, 80)),
            [Some(1), None, Some(4), Some(5), Some(6), None, Some(9)]
        );
        assert_eq!(
            numbers(&page_index(1, 9, ViewportClass::Compact, 80)),
            [Some(1), Some(2), None, Some(9)]
        );
        assert_eq!(
            numbers(&page_index(8, 9, ViewportClass::Compact, 80)),
            [Some(1), None, Some(7), Some(8), Some(9)]
        );
        assert_eq!(
            numbers(&page_index(3, 9, ViewportClass::Compact, 80)),
            [Some(1), Some(2), Some(3), Some(4), None, Some(9)]
        );
    }

    #[test]
    fn wide_layout_falls_back_to_window_when_bar_overflows() {
        let every = page_index(30, 60, ViewportClass::Wide, 400);
        assert_eq!(every.len(), 60);
        assert!(bar_width(&every) > 120);

        let tokens = page_index(30, 60, ViewportClass::Wide, 120);
        assert_eq!(
            numbers(&tokens),
            [Some(1), None, Some(29), Some(30), Some(31), None, Some(60)]
        );
        assert!(bar_width(&tokens) <= 120);
    }

    #[test]
    fn narrowest_bar_keeps_only_the_current_page() {
        let tokens = page_index(5000, 9999, ViewportClass::Compact, 12);

        assert_eq!(numbers(&tokens), [None, Some(5000), None]);
        assert!(bar_width(&tokens) <= 12);
        assert_eq!(numbers(&page_index(1, 9999, ViewportClass::Compact, 8)), [Some(1), None]);
    }

    #[test]
    fn bar_width_counts_arrows_and_separators() {
        let tokens = [
            PageToken::Page { number: 1, current: true },
            PageToken::Ellipsis,
            PageToken::Page { number: 10, current: false },
        ];
        // "‹ 1 … 10 ›"
        assert_eq!(bar_width(&tokens), 10);
    }
}
