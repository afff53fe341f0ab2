//! Focus and layout state types for the application.
//!
//! [`Focus`] decides which keybindings are active: while one of the filter
//! inputs is focused, typed characters edit the draft; while the result list
//! is focused, arrow keys move the card selection.
//!
//! [`ViewportClass`] is derived from the pane width on every resize and drives
//! both the page size and the number of carousel slides shown at once.
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::modes::{Focus, ViewportClass};
//!
//! let focus = Focus::CompanyName.next();
//! assert_eq!(focus, Focus::Education);
//! assert_eq!(ViewportClass::from_cols(80, 100).page_size(), 4);
//! ```

/// Column breakpoint below which the layout is compact.
pub const DEFAULT_COMPACT_BREAKPOINT: usize = 100;

/// The filter bar element or list that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Company-name text input. `Enter` commits the filter from here.
    #[default]
    CompanyName,

    /// Education option selector, cycled with left/right.
    Education,

    /// Salary option selector, cycled with left/right.
    Salary,

    /// The explicit "Search" button.
    SearchButton,

    /// The result list: up/down select a card, left/right change page.
    Results,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::CompanyName,
        Self::Education,
        Self::Salary,
        Self::SearchButton,
        Self::Results,
    ];

    /// Next focus target in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Previous focus target in tab order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether typed characters edit the draft while this target is focused.
    #[must_use]
    pub const fn accepts_text(self) -> bool {
        matches!(self, Self::CompanyName)
    }
}

/// Width class of the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Narrow pane: 4 cards per page, 1 carousel slide, condensed page index.
    Compact,

    /// Regular pane: 6 cards per page, 3 carousel slides, full page index.
    #[default]
    Wide,
}

impl ViewportClass {
    /// Classifies a pane width against the configured breakpoint.
    #[must_use]
    pub const fn from_cols(cols: usize, breakpoint: usize) -> Self {
        if cols < breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    #[must_use]
    pub const fn page_size(self) -> usize {
        match self {
            Self::Compact => 4,
            Self::Wide => 6,
        }
    }

    #[must_use]
    pub const fn slides_to_show(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Wide => 3,
        }
    }
}
