//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the job board. It owns the
//! catalog store, the filter controller, the page state, both fades, the
//! detail modal and the scroll lock. Derived data (the filtered subset, the
//! current page slice, page counts) is never stored; it is recomputed from
//! the catalog and the committed criteria whenever it is needed.
//!
//! # Deferred changes
//!
//! Commits and page changes do not touch the visible list immediately. They
//! are recorded in a [`PendingChange`] and a fade-out starts; the change is
//! applied when the list fade reaches its swap step. Navigation requested
//! while a change is pending is validated against the pending state, so the
//! latest request wins.

use super::actions::Action;
use super::filter::{CommitTrigger, FilterController, FilterCriteria};
use super::modal::{DetailModal, JumpOutcome};
use super::modes::{Focus, ViewportClass, DEFAULT_COMPACT_BREAKPOINT};
use super::paginator::{self, PageState};
use super::scroll_lock::ScrollLock;
use super::timers::{TimerId, TimerKind, AUTOPLAY_INTERVAL, DOT_COOLDOWN, FADE_DURATION};
use super::transition::{Fade, FadeStep};
use crate::domain::{Catalog, JobId, JobRecord};
use crate::ui::layout;
use crate::ui::markup::{self, DescriptionPolicy};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, JobCard, ModalInfo, PageBarInfo, SlideInfo, UIViewModel,
};

/// Label shown for an empty education or salary selection.
pub const ANY_LABEL: &str = "Any";

/// Largest description offset that still fills the modal's text area.
fn max_description_offset(line_count: usize, rows: usize) -> usize {
    line_count.saturating_sub(layout::modal_text_height(rows))
}

/// Commit and page requests waiting for the list fade to reach its swap step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingChange {
    pub criteria: Option<FilterCriteria>,
    pub page: Option<u32>,
}

impl PendingChange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.criteria.is_none() && self.page.is_none()
    }
}

/// Pane dimensions from the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 120 }
    }
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Read-only catalog store, empty until the worker delivers it.
    pub catalog: Catalog,
    pub catalog_loaded: bool,

    pub filter: FilterController,
    pub page: PageState,
    pub pending: PendingChange,

    /// Focused filter element or the result list.
    pub focus: Focus,

    /// Zero-based card index within the current page.
    pub selected_index: usize,

    pub viewport: Viewport,
    pub compact_breakpoint: usize,

    pub list_fade: Fade,
    pub page_bar_fade: Fade,

    pub modal: DetailModal,
    pub scroll_lock: ScrollLock,

    /// Color scheme for UI rendering.
    pub theme: Theme,
    pub description_policy: DescriptionPolicy,

    /// Fixture the worker is asked to load; the embedded one when `None`.
    pub catalog_file: Option<String>,

    /// Last error reported by the worker, cleared once a catalog loads.
    pub worker_error: Option<String>,
}

impl AppState {
    /// Creates an empty state waiting for the catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobboard::app::AppState;
    /// use jobboard::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert!(!state.catalog_loaded);
    /// assert_eq!(state.page.current(), 1);
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let scroll_lock = ScrollLock::new();
        Self {
            catalog: Catalog::default(),
            catalog_loaded: false,
            filter: FilterController::new(),
            page: PageState::default(),
            pending: PendingChange::default(),
            focus: Focus::default(),
            selected_index: 0,
            viewport: Viewport::default(),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            list_fade: Fade::new(TimerKind::ListFade),
            page_bar_fade: Fade::new(TimerKind::PageBarFade),
            modal: DetailModal::new(scroll_lock.clone()),
            scroll_lock,
            theme,
            description_policy: DescriptionPolicy::default(),
            catalog_file: None,
            worker_error: None,
        }
    }

    /// Installs the catalog delivered by the worker. Later deliveries are ignored.
    pub fn load_catalog(&mut self, catalog: Catalog) -> bool {
        if self.catalog_loaded {
            tracing::debug!("catalog already loaded, ignoring reload");
            return false;
        }
        tracing::debug!(jobs = catalog.len(), "catalog store populated");
        self.catalog = catalog;
        self.catalog_loaded = true;
        self.worker_error = None;
        self.page.clamp(self.page_count());
        self.clamp_selection();
        true
    }

    /// Keeps a worker failure for display. Returns whether the screen changes,
    /// which is only while the catalog is still missing.
    pub fn record_worker_error(&mut self, message: &str) -> bool {
        self.worker_error = Some(message.to_string());
        !self.catalog_loaded
    }

    #[must_use]
    pub const fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_cols(self.viewport.cols, self.compact_breakpoint)
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.viewport_class().page_size()
    }

    /// Records the pane size. The page is only clamped, never reset.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let viewport = Viewport { rows, cols };
        if viewport == self.viewport {
            return false;
        }
        let previous = self.viewport_class();
        self.viewport = viewport;
        if previous != self.viewport_class() {
            tracing::debug!(class = ?self.viewport_class(), page_size = self.page_size(), "viewport class changed");
        }
        self.page.clamp(self.page_count());
        self.clamp_selection();
        true
    }

    /// Records matching the committed criteria, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&JobRecord> {
        paginator::derive(&self.catalog, self.filter.committed())
    }

    /// Page count of the committed result, zero when nothing matches.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        paginator::page_count(self.filtered().len(), self.page_size())
    }

    /// Records on the current page.
    #[must_use]
    pub fn current_page_jobs(&self) -> Vec<&JobRecord> {
        let filtered = self.filtered();
        paginator::paginate(&filtered, self.page_size(), self.page.current()).to_vec()
    }

    #[must_use]
    pub fn selected_job(&self) -> Option<&JobRecord> {
        self.current_page_jobs().get(self.selected_index).copied()
    }

    fn clamp_selection(&mut self) {
        let len = self.current_page_jobs().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Moves the card selection down, wrapping. Suspended while the scroll lock is held.
    pub fn move_selection_down(&mut self) -> bool {
        let len = self.current_page_jobs().len();
        if len == 0 || self.scroll_lock.is_held() {
            return false;
        }
        self.selected_index = (self.selected_index + 1) % len;
        true
    }

    /// Moves the card selection up, wrapping. Suspended while the scroll lock is held.
    pub fn move_selection_up(&mut self) -> bool {
        let len = self.current_page_jobs().len();
        if len == 0 || self.scroll_lock.is_held() {
            return false;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
        true
    }

    /// Criteria the list will show once pending changes are applied.
    #[must_use]
    pub fn effective_criteria(&self) -> &FilterCriteria {
        self.pending.criteria.as_ref().unwrap_or_else(|| self.filter.committed())
    }

    /// Page the list will show once pending changes are applied.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.pending.page.unwrap_or_else(|| self.page.current())
    }

    fn effective_page_count(&self) -> u32 {
        let count = paginator::derive(&self.catalog, self.effective_criteria()).len();
        paginator::page_count(count, self.page_size())
    }

    fn restart_fade(fade: &mut Fade) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if !fade.is_settled() {
            actions.push(Action::CancelTimer(fade.timer()));
        }
        let id = fade.begin();
        actions.push(Action::ScheduleTimer { id, after: FADE_DURATION });
        actions
    }

    /// Snapshots the draft, resets to page 1 and fades both the list and the page bar.
    pub fn commit(&mut self, trigger: CommitTrigger) -> Vec<Action> {
        let snapshot = self.filter.commit_snapshot();
        tracing::debug!(trigger = ?trigger, company_name = %snapshot.company_name, "filter commit requested");

        self.pending.criteria = Some(snapshot);
        self.pending.page = Some(1);

        let mut actions = Self::restart_fade(&mut self.list_fade);
        actions.extend(Self::restart_fade(&mut self.page_bar_fade));
        actions
    }

    /// Requests page `target`; fades only the list.
    ///
    /// Returns `None` when the request is a no-op: out of range, equal to the
    /// page already shown (or pending), or the list is locked behind the modal.
    pub fn change_page(&mut self, target: u32) -> Option<Vec<Action>> {
        if self.scroll_lock.is_held() {
            tracing::debug!(target, "page change ignored while scroll lock is held");
            return None;
        }
        let effective = PageState::at(self.effective_page());
        if !effective.accepts(target, self.effective_page_count()) {
            tracing::trace!(target, current = effective.current(), "page change ignored");
            return None;
        }

        tracing::debug!(from = effective.current(), to = target, "page change requested");
        self.pending.page = Some(target);
        Some(Self::restart_fade(&mut self.list_fade))
    }

    /// Applies pending changes and scrolls the list back to its top.
    fn apply_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);

        if let Some(criteria) = pending.criteria {
            self.filter.apply(criteria);
            self.page.reset();
        }
        if let Some(page) = pending.page {
            let count = self.page_count();
            self.page.change_page(page, count);
        }
        self.page.clamp(self.page_count());
        self.selected_index = 0;

        tracing::debug!(page = self.page.current(), page_count = self.page_count(), "pending list change applied");
    }

    /// Dispatches a fired timer to its owner.
    pub fn on_timer(&mut self, id: TimerId) -> (bool, Vec<Action>) {
        match id.kind {
            TimerKind::ListFade => match self.list_fade.on_timer(id) {
                Some(FadeStep::SwapContent) => {
                    self.apply_pending();
                    (
                        true,
                        vec![Action::ScheduleTimer {
                            id: self.list_fade.timer(),
                            after: FADE_DURATION,
                        }],
                    )
                }
                Some(FadeStep::Settled) => (true, vec![]),
                None => (false, vec![]),
            },
            TimerKind::PageBarFade => match self.page_bar_fade.on_timer(id) {
                Some(FadeStep::SwapContent) => (
                    true,
                    vec![Action::ScheduleTimer {
                        id: self.page_bar_fade.timer(),
                        after: FADE_DURATION,
                    }],
                ),
                Some(FadeStep::Settled) => (true, vec![]),
                None => (false, vec![]),
            },
            TimerKind::CarouselAdvance => {
                if self.modal.on_autoplay(id) {
                    (
                        true,
                        vec![Action::ScheduleTimer {
                            id: self.modal.timer(TimerKind::CarouselAdvance),
                            after: AUTOPLAY_INTERVAL,
                        }],
                    )
                } else {
                    (false, vec![])
                }
            }
            TimerKind::DotCooldown => (self.modal.on_cooldown(id), vec![]),
        }
    }

    /// Opens the detail modal for `job_id` and starts carousel autoplay.
    pub fn open_detail(&mut self, job_id: JobId) -> Option<Vec<Action>> {
        if self.modal.is_open() {
            return None;
        }
        let slide_count = self.catalog.get(job_id)?.company_photos.len();
        if !self.modal.open(job_id, slide_count) {
            return None;
        }

        let mut actions = vec![];
        if self.modal.carousel().is_some_and(super::modal::Carousel::autoplays) {
            actions.push(Action::ScheduleTimer {
                id: self.modal.timer(TimerKind::CarouselAdvance),
                after: AUTOPLAY_INTERVAL,
            });
        }
        Some(actions)
    }

    /// Closes the modal and cancels its outstanding timers.
    pub fn close_detail(&mut self) -> Option<Vec<Action>> {
        if !self.modal.is_open() {
            return None;
        }
        Some(self.modal.close().into_iter().map(Action::CancelTimer).collect())
    }

    /// Wrapped description of the open record at the current pane width.
    fn description_lines(&self, job: &JobRecord, cols: usize) -> Vec<markup::MarkupLine> {
        markup::wrap(
            &markup::parse(&job.description, self.description_policy),
            layout::modal_text_width(cols),
        )
    }

    /// Scrolls the open record's description by one line.
    pub fn scroll_description(&mut self, forward: bool) -> bool {
        let Some(job) = self.modal.job_id().and_then(|id| self.catalog.get(id)) else {
            return false;
        };
        let line_count = self.description_lines(job, self.viewport.cols).len();
        let max_offset = max_description_offset(line_count, self.viewport.rows);
        self.modal.scroll_description(forward, max_offset)
    }

    /// Manual carousel jump; starts the dot cooldown on success.
    pub fn jump_to_slide(&mut self, index: usize) -> Option<Vec<Action>> {
        match self.modal.jump_to(index) {
            JumpOutcome::Jumped => Some(vec![Action::ScheduleTimer {
                id: self.modal.timer(TimerKind::DotCooldown),
                after: DOT_COOLDOWN,
            }]),
            outcome => {
                tracing::debug!(index, outcome = ?outcome, "slide jump rejected");
                None
            }
        }
    }

    /// Computes a renderable view model from current state and pane dimensions.
    ///
    /// The card list is windowed around the selection when the pane is too
    /// short to show a whole page.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let filtered = self.filtered();
        let page_jobs = paginator::paginate(&filtered, self.page_size(), self.page.current());

        let capacity = layout::list_capacity(rows).max(1);
        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(page_jobs.len());
        if visible_end - visible_start < capacity && page_jobs.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let cards = page_jobs[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, job)| self.compute_card(job, visible_start + offset))
            .collect();

        let empty_state = if let (false, Some(error)) = (self.catalog_loaded, &self.worker_error) {
            Some(EmptyState {
                message: "Could not load jobs".to_string(),
                subtitle: error.clone(),
            })
        } else if !self.catalog_loaded {
            Some(EmptyState {
                message: "Loading jobs...".to_string(),
                subtitle: "Reading the catalog".to_string(),
            })
        } else if filtered.is_empty() {
            Some(EmptyState {
                message: "No jobs match".to_string(),
                subtitle: "Adjust the filters and search again".to_string(),
            })
        } else {
            None
        };

        UIViewModel {
            header: HeaderInfo {
                title: format!(" Job Board ({} jobs) ", filtered.len()),
            },
            filter_bar: self.compute_filter_bar(),
            cards,
            list_dimmed: self.list_fade.is_dimmed(),
            empty_state,
            page_bar: self.compute_page_bar(filtered.len(), cols),
            modal: self.compute_modal(rows, cols),
            footer: self.compute_footer(),
        }
    }

    fn compute_card(&self, job: &JobRecord, slot: usize) -> JobCard {
        JobCard {
            job_id: job.id,
            slot,
            title: job.job_title.clone(),
            company: job.company_name.clone(),
            education: self.catalog.education_label(job).to_string(),
            salary: self.catalog.salary_label(job).to_string(),
            preview: job.preview.clone(),
            is_selected: self.focus == Focus::Results && slot == self.selected_index,
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let draft = self.filter.draft();
        let label = |value: &str| {
            if value.is_empty() {
                ANY_LABEL.to_string()
            } else {
                value.to_string()
            }
        };
        FilterBarInfo {
            company_name: draft.company_name.clone(),
            education: label(&draft.education),
            salary: label(&draft.salary),
            focus: self.focus,
        }
    }

    fn compute_page_bar(&self, filtered_count: usize, cols: usize) -> Option<PageBarInfo> {
        let count = paginator::display_page_count(filtered_count, self.page_size());
        if count <= 1 {
            return None;
        }
        let current = self.page.current();
        Some(PageBarInfo {
            tokens: paginator::page_index(current, count, self.viewport_class(), cols),
            can_prev: current > 1,
            can_next: current < count,
            dimmed: self.page_bar_fade.is_dimmed(),
        })
    }

    fn compute_modal(&self, rows: usize, cols: usize) -> Option<ModalInfo> {
        let job = self.catalog.get(self.modal.job_id()?)?;
        let carousel = self.modal.carousel()?;

        let slides = carousel
            .visible(self.viewport_class().slides_to_show())
            .into_iter()
            .map(|index| SlideInfo {
                index,
                caption: job
                    .company_photos
                    .get(index)
                    .map(|url| url.rsplit('/').next().unwrap_or(url).to_string())
                    .unwrap_or_default(),
            })
            .collect();

        let description = self.description_lines(job, cols);
        let description_offset = self
            .modal
            .description_offset()
            .min(max_description_offset(description.len(), rows));

        Some(ModalInfo {
            job_title: job.job_title.clone(),
            company: job.company_name.clone(),
            slide_count: carousel.slide_count(),
            slides,
            active_dot: carousel.current(),
            dots_enabled: carousel.dots_enabled(),
            description,
            description_offset,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal.is_open() {
            "Esc/q: close  1-9: jump to photo  Left/Right: previous/next photo  j/k: scroll"
        } else {
            match self.focus {
                Focus::CompanyName => "Type to edit  Enter: search  Tab: next field  Esc: results",
                Focus::Education | Focus::Salary => "Left/Right: change option  Tab: next field  Esc: results",
                Focus::SearchButton => "Enter: search  Tab: next field  Esc: results",
                Focus::Results => "j/k: select  Enter: details  Left/Right: page  Tab: filters  q: quit",
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
