//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! multiple side effects can be queued atomically. The plugin shell executes
//! them in order.
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::timers::{TimerId, TimerKind, FADE_DURATION};
//! use jobboard::app::Action;
//! use jobboard::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_catalog(None)),
//!     Action::ScheduleTimer { id: TimerId::new(TimerKind::ListFade, 1), after: FADE_DURATION },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::app::timers::TimerId;
use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Requests a `TimerFired(id)` event once `after` has elapsed.
    ScheduleTimer {
        id: TimerId,
        after: Duration,
    },

    /// Drops a pending timer; it will never fire.
    CancelTimer(TimerId),
}
