//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain,
//! catalog and worker layers. It implements the event-driven architecture
//! that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timers, Worker Responses ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`filter`]: Draft and committed filter criteria
//! - [`paginator`]: Filtered subset derivation, page slicing and the page index
//! - [`modal`]: Detail modal and photo carousel
//! - [`transition`]: Two-phase fades for the list and the page index
//! - [`timers`]: Timer identities and the pending timer queue
//! - [`scroll_lock`]: Exclusive lock on list scrolling while the modal is open
//! - [`modes`]: Focus ring and viewport classes
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modal;
pub mod modes;
pub mod paginator;
pub mod scroll_lock;
pub mod state;
pub mod timers;
pub mod transition;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, ViewportClass};
pub use state::{AppState, PendingChange};
