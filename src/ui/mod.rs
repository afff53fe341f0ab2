//! User interface rendering layer with component-based architecture.
//!
//! This module transforms view models into ANSI-styled output through
//! composable rendering components. It provides theme support, responsive
//! layout, description markup rendering and mouse hit-testing.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → ScreenLayout → render → ANSI Output
//!                                                    ↓
//!                                              hit_test(click)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry and click resolution
//! - [`markup`]: Description markup parsing and wrapping
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod markup;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Hit, ScreenLayout};
pub use markup::DescriptionPolicy;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, JobCard, ModalInfo, PageBarInfo, UIViewModel};
