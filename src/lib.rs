//! Jobboard: a Zellij plugin for browsing a job catalog.
//!
//! The plugin shows a filterable, paginated list of job postings with a
//! detail overlay holding a photo carousel:
//! - Company, education and salary filters applied on an explicit search
//! - Page index with compact ellipsis layout on narrow panes
//! - Crossfade between result pages that swaps content at the midpoint
//! - Detail modal with autoplaying carousel and dot navigation
//! - Catalog read from an embedded or user-supplied JSON fixture in a worker

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filter controller, paginator, detail modal       │
//! │  - Fade transitions, scroll lock, timers            │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Components  │   │ - JSON fixture│   │ - Catalog load│
//! │ - Layout/hits │   │ - Queries     │   │ - IPC bridge  │
//! │ - Markup      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Job records and lookup tables (domain/)          │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry file export (observability/)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/jobboard.wasm" {
//!         catalog_file "~/jobs.json"
//!         theme "catppuccin-mocha"
//!         compact_breakpoint "100"
//!         description_markup "trusted"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Library usage
//!
//! ```rust
//! use jobboard::catalog::{CatalogSource, JsonCatalog};
//! use jobboard::app::filter::{CommitTrigger, FilterUpdate};
//! use jobboard::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let catalog = JsonCatalog::embedded()?.snapshot()?;
//! state.load_catalog(catalog);
//!
//! let update = FilterUpdate::CompanyName("Tech".to_string());
//! handle_event(&mut state, &Event::UpdateDraft(update))?;
//! handle_event(&mut state, &Event::Commit(CommitTrigger::Button))?;
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{JobBoardError, Result};
pub use ui::{DescriptionPolicy, Theme};

use app::modes::DEFAULT_COMPACT_BREAKPOINT;
use std::collections::BTreeMap;

/// Narrowest breakpoint accepted; below this every pane would be compact anyway.
const MIN_COMPACT_BREAKPOINT: usize = 20;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON fixture to read jobs from. The embedded catalog when unset.
    pub catalog_file: Option<String>,

    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe` or `catppuccin-macchiato`.
    pub theme_name: Option<String>,

    /// Custom TOML theme. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Filter directive for spans, e.g. `debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Pane width in columns below which the compact layout is used.
    pub compact_breakpoint: usize,

    /// How job descriptions are rendered.
    pub description_markup: DescriptionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            description_markup: DescriptionPolicy::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Invalid values are logged and replaced by their defaults, so a typo
    /// never prevents the plugin from loading.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jobboard::{Config, DescriptionPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("compact_breakpoint".to_string(), "80".to_string());
    /// map.insert("description_markup".to_string(), "sanitized".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.compact_breakpoint, 80);
    /// assert_eq!(config.description_markup, DescriptionPolicy::Sanitized);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let compact_breakpoint = config.get("compact_breakpoint").map_or(DEFAULT_COMPACT_BREAKPOINT, |raw| {
            parse_breakpoint(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid compact_breakpoint, using default");
                DEFAULT_COMPACT_BREAKPOINT
            })
        });

        let description_markup = config
            .get("description_markup")
            .map_or_else(DescriptionPolicy::default, |raw| {
                parse_markup_policy(raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "invalid description_markup, using default");
                    DescriptionPolicy::default()
                })
            });

        Self {
            catalog_file: non_empty("catalog_file"),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            compact_breakpoint,
            description_markup,
        }
    }
}

fn parse_breakpoint(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| JobBoardError::Config(format!("compact_breakpoint is not a number: {raw:?}")))?;
    if value < MIN_COMPACT_BREAKPOINT {
        return Err(JobBoardError::Config(format!(
            "compact_breakpoint must be at least {MIN_COMPACT_BREAKPOINT}, got {value}"
        )));
    }
    Ok(value)
}

fn parse_markup_policy(raw: &str) -> Result<DescriptionPolicy> {
    DescriptionPolicy::from_name(raw.trim())
        .ok_or_else(|| JobBoardError::Config(format!("unknown description_markup {raw:?}")))
}

/// Builds the initial application state for `config`.
///
/// Theme resolution: `theme_file`, then `theme`, then the default theme.
/// Failures fall through to the default and are logged. The catalog itself
/// arrives later from the worker.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing jobboard plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    state.compact_breakpoint = config.compact_breakpoint;
    state.description_policy = config.description_markup;
    state.catalog_file.clone_from(&config.catalog_file);
    state
}
