//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the jobboard library and Zellij: raw
//! Zellij events are mapped to library [`Event`]s, and the returned
//! [`Action`]s are carried out with Zellij API calls.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, timers, event mapping
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  JobBoardWorker  │   │  ← Catalog loading
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Timers
//!
//! Zellij's `set_timeout` delivers a bare `Timer` event. Every scheduled
//! timer is recorded in a [`TimerQueue`] relative to the load instant, and
//! each `Timer` event fires whatever is due.
//!
//! # Keybindings
//!
//! - `Tab` / `Shift+Tab`: Move focus between filter fields and results
//! - `Enter`: Search (filter fields), open detail (results)
//! - `Left`/`Right`: Cycle options, change page, step the carousel
//! - `Up`/`Down`, `Ctrl+p`/`Ctrl+n`: Move selection
//! - `PageUp`/`PageDown`: Previous/next page
//! - `1`-`9`: Jump to slide (detail open)
//! - `Esc`: Close detail, leave field, close plugin
//! - Mouse: click fields, cards, page numbers and carousel dots

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;
#[cfg(target_arch = "wasm32")]
use zellij_tile::shim::post_message_to;

#[cfg(target_arch = "wasm32")]
use jobboard::app::timers::TimerQueue;
#[cfg(target_arch = "wasm32")]
use jobboard::worker::{JobBoardWorker, WorkerMessage, WorkerResponse};
#[cfg(target_arch = "wasm32")]
use jobboard::{handle_event, Action, Config, Event};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);
#[cfg(target_arch = "wasm32")]
register_worker!(JobBoardWorker, jobboard_worker, JOBBOARD_WORKER);

/// Host timers may fire marginally before their deadline.
#[cfg(target_arch = "wasm32")]
const TIMER_SLACK: Duration = Duration::from_millis(5);

/// Plugin state wrapper.
#[cfg(target_arch = "wasm32")]
struct State {
    app: jobboard::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    timers: TimerQueue,

    /// Origin for timer deadlines.
    started: Instant,
}

#[cfg(target_arch = "wasm32")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: jobboard::initialize(&Config::default()),
            worker_name: "jobboard".to_string(),
            timers: TimerQueue::default(),
            started: Instant::now(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ZellijPlugin for State {
    /// Parses config, initializes tracing and state, then requests
    /// permissions. The catalog is requested once permissions are granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        jobboard::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_file = ?config.catalog_file,
            compact_breakpoint = config.compact_breakpoint,
            "parsed configuration"
        );
        self.app = jobboard::initialize(&config);
        self.started = Instant::now();

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard =
            tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name).entered();

        let events: Vec<Event> = match event {
            zellij_tile::prelude::Event::Key(ref key) => Self::map_key_event(key).into_iter().collect(),
            zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse).into_iter().collect(),
            zellij_tile::prelude::Event::Timer(_) => self.due_timers(),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload).into_iter().collect()
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                if !granted {
                    tracing::warn!("permissions denied - custom catalog files cannot be read");
                }
                vec![Event::PermissionsResult { granted }]
            }
            _ => Vec::new(),
        };

        events.iter().fold(false, |should_render, event| self.dispatch(event) || should_render)
    }

    /// Syncs the pane size into the state, then draws.
    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&Event::Resize { rows, cols });
        jobboard::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_arch = "wasm32")]
impl State {
    /// Runs one library event and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keys to library events. Focus-dependent meaning (typing versus
    /// navigation) is resolved by the library.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrev),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab => Event::FocusNext,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Left => Event::Step { forward: false },
            BareKey::Right => Event::Step { forward: true },
            BareKey::Up => Event::SelectPrev,
            BareKey::Down => Event::SelectNext,
            BareKey::PageUp => Event::PrevPage,
            BareKey::PageDown => Event::NextPage,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Zellij reports 0-based positions; the layout is 1-based.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()?;
                Some(Event::Click { row: row + 1, col: col + 1 })
            }
            Mouse::ScrollUp(_) => Some(Event::SelectPrev),
            Mouse::ScrollDown(_) => Some(Event::SelectNext),
            _ => None,
        }
    }

    fn due_timers(&mut self) -> Vec<Event> {
        let now = self.started.elapsed() + TIMER_SLACK;
        let due = self.timers.take_due(now);
        tracing::debug!(due = due.len(), pending = self.timers.len(), "timer tick");
        due.into_iter().map(Event::TimerFired).collect()
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
            }
            Action::ScheduleTimer { id, after } => {
                self.timers.schedule(*id, self.started.elapsed(), *after);
                set_timeout(after.as_secs_f64());
            }
            Action::CancelTimer(id) => {
                self.timers.cancel(*id);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
