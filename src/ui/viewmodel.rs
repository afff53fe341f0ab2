//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer and by [`crate::ui::layout`] for hit-testing. They contain no
//! business logic, only display-ready data: labels already resolved, the page
//! index already collapsed, the description already parsed and wrapped.
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::modes::Focus;
//! use jobboard::ui::viewmodel::{FilterBarInfo, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Job Board (0 jobs) ".to_string() },
//!     filter_bar: FilterBarInfo {
//!         company_name: String::new(),
//!         education: "Any".to_string(),
//!         salary: "Any".to_string(),
//!         focus: Focus::CompanyName,
//!     },
//!     cards: vec![],
//!     list_dimmed: false,
//!     empty_state: None,
//!     page_bar: None,
//!     modal: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.cards.is_empty());
//! ```

use crate::app::modes::Focus;
use crate::app::paginator::PageToken;
use crate::domain::JobId;
use crate::ui::markup::MarkupLine;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Draft values and focus of the filter form.
    pub filter_bar: FilterBarInfo,

    /// Cards of the current page that fit on screen.
    pub cards: Vec<JobCard>,

    /// Whether the list is in the fade-out half of a transition.
    pub list_dimmed: bool,

    /// Shown in place of the list while loading or when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Absent when there is at most one page.
    pub page_bar: Option<PageBarInfo>,

    /// Present while the detail modal is open.
    pub modal: Option<ModalInfo>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Filter form display information.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub company_name: String,

    /// Selected education label, `Any` when unset.
    pub education: String,

    /// Selected salary label, `Any` when unset.
    pub salary: String,

    pub focus: Focus,
}

/// One job card in the result list.
#[derive(Debug, Clone)]
pub struct JobCard {
    pub job_id: JobId,

    /// Zero-based index of the card within the current page.
    pub slot: usize,

    pub title: String,
    pub company: String,
    pub education: String,
    pub salary: String,
    pub preview: String,
    pub is_selected: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the focused element.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Page-index bar display information.
#[derive(Debug, Clone)]
pub struct PageBarInfo {
    pub tokens: Vec<PageToken>,
    pub can_prev: bool,
    pub can_next: bool,
    pub dimmed: bool,
}

/// Detail modal display information.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub job_title: String,
    pub company: String,
    pub slide_count: usize,

    /// Slides currently in view, starting with the active one.
    pub slides: Vec<SlideInfo>,

    pub active_dot: usize,
    pub dots_enabled: bool,

    /// Description lines wrapped to the modal width.
    pub description: Vec<MarkupLine>,

    /// First description line in view.
    pub description_offset: usize,
}

/// One visible carousel slide.
#[derive(Debug, Clone)]
pub struct SlideInfo {
    pub index: usize,

    /// File name of the photo URL.
    pub caption: String,
}
