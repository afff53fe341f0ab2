//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer expirations, and worker responses, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Form**: `FocusNext`, `FocusPrev`, `Char`, `Backspace`, `CycleOption`, `UpdateDraft`, `Commit`
//! - **List**: `SelectNext`, `SelectPrev`, `OpenSelected`, `OpenJob`, `PrevPage`, `NextPage`, `GoToPage`
//! - **Modal**: `CloseDetail`, `JumpToSlide`, `StepSlide`; `SelectNext`/`SelectPrev`
//!   scroll the description while the modal is open
//! - **Worker**: `CatalogLoaded` installs the catalog and `Error` is shown
//!   while no catalog is loaded. The query responses (`JobsQueried`,
//!   `JobDetailFetched`, `EducationLevelsListed`, `SalaryBandsListed`) exist
//!   for other consumers of the worker protocol; the plugin never requests
//!   them and ignores them if they arrive.
//! - **Contextual keys**: `Submit`, `Step`, `Escape`, resolved against focus and modal
//! - **System**: `Resize`, `Click`, `TimerFired`, `PermissionsResult`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::{handle_event, AppState, Event};
//! use jobboard::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::FocusNext)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::filter::{self, CommitTrigger, FilterUpdate};
use crate::app::modes::Focus;
use crate::app::timers::TimerId;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::JobId;
use crate::ui::layout::{Hit, ScreenLayout};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pane dimensions changed.
    Resize { rows: usize, cols: usize },

    FocusNext,
    FocusPrev,

    /// A typed character; its meaning depends on focus and the modal.
    Char(char),
    /// Removes the last character of the company draft.
    Backspace,
    /// Moves the focused option selector to its next or previous option.
    CycleOption { forward: bool },
    /// Replaces one draft field directly.
    UpdateDraft(FilterUpdate),
    /// Commits the draft criteria.
    Commit(CommitTrigger),

    /// Enter: commit from the form, open from the list.
    Submit,
    /// Left/right arrows: carousel in the modal, options in a selector,
    /// pages in the list.
    Step { forward: bool },
    /// Closes the modal, leaves the form, or hides the plugin.
    Escape,

    /// Moves the card selection down (wraps within the page), or scrolls
    /// the open description down.
    SelectNext,
    /// Moves the card selection up (wraps within the page), or scrolls the
    /// open description up.
    SelectPrev,
    OpenSelected,
    OpenJob(JobId),

    PrevPage,
    NextPage,
    GoToPage(u32),

    CloseDetail,
    /// Jumps the carousel to a zero-based slide.
    JumpToSlide(usize),
    /// Moves the carousel one slide, wrapping.
    StepSlide { forward: bool },

    /// Left click at a 1-indexed screen position.
    Click { row: usize, col: usize },

    TimerFired(TimerId),

    /// Reports whether the requested Zellij permissions were granted.
    PermissionsResult { granted: bool },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

type Outcome = Result<(bool, Vec<Action>)>;

fn unchanged() -> Outcome {
    Ok((false, vec![]))
}

fn rendered(actions: Option<Vec<Action>>) -> Outcome {
    Ok(actions.map_or((false, vec![]), |actions| (true, actions)))
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Returns errors from state mutation methods.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Outcome {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Resize { rows, cols } => Ok((state.resize(*rows, *cols), vec![])),
        Event::FocusNext => {
            let next = state.focus.next();
            set_focus(state, next)
        }
        Event::FocusPrev => {
            let prev = state.focus.prev();
            set_focus(state, prev)
        }
        Event::Char(c) => handle_char(state, *c),
        Event::Backspace => {
            if state.modal.is_open() || !state.focus.accepts_text() {
                return unchanged();
            }
            let mut company_name = state.filter.draft().company_name.clone();
            if company_name.pop().is_none() {
                return unchanged();
            }
            state.filter.update_draft(FilterUpdate::CompanyName(company_name));
            Ok((true, vec![]))
        }
        Event::CycleOption { forward } => cycle_option(state, *forward),
        Event::UpdateDraft(update) => {
            state.filter.update_draft(update.clone());
            Ok((true, vec![]))
        }
        Event::Commit(trigger) => {
            if state.modal.is_open() {
                return unchanged();
            }
            Ok((true, state.commit(*trigger)))
        }
        Event::Submit => {
            if state.modal.is_open() {
                return unchanged();
            }
            match state.focus {
                Focus::CompanyName => Ok((true, state.commit(CommitTrigger::EnterKey))),
                Focus::SearchButton => Ok((true, state.commit(CommitTrigger::Button))),
                Focus::Results => open_selected(state),
                Focus::Education | Focus::Salary => unchanged(),
            }
        }
        Event::Step { forward } => {
            if state.modal.is_open() {
                return step_slide(state, *forward);
            }
            match state.focus {
                Focus::Education | Focus::Salary => cycle_option(state, *forward),
                Focus::Results => step_page(state, *forward),
                Focus::CompanyName | Focus::SearchButton => unchanged(),
            }
        }
        Event::Escape => {
            if state.modal.is_open() {
                rendered(state.close_detail())
            } else if state.focus == Focus::Results {
                Ok((false, vec![Action::CloseFocus]))
            } else {
                set_focus(state, Focus::Results)
            }
        }
        Event::SelectNext if state.modal.is_open() => Ok((state.scroll_description(true), vec![])),
        Event::SelectPrev if state.modal.is_open() => Ok((state.scroll_description(false), vec![])),
        Event::SelectNext => Ok((state.move_selection_down(), vec![])),
        Event::SelectPrev => Ok((state.move_selection_up(), vec![])),
        Event::OpenSelected => open_selected(state),
        Event::OpenJob(id) => rendered(state.open_detail(*id)),
        Event::PrevPage => step_page(state, false),
        Event::NextPage => step_page(state, true),
        Event::GoToPage(page) => rendered(state.change_page(*page)),
        Event::CloseDetail => rendered(state.close_detail()),
        Event::JumpToSlide(index) => rendered(state.jump_to_slide(*index)),
        Event::StepSlide { forward } => step_slide(state, *forward),
        Event::Click { row, col } => handle_click(state, *row, *col),
        Event::TimerFired(id) => Ok(state.on_timer(*id)),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied, custom catalog files may be unreadable");
            }
            if state.catalog_loaded {
                return unchanged();
            }
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_catalog(state.catalog_file.clone()))],
            ))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn set_focus(state: &mut AppState, focus: Focus) -> Outcome {
    if state.modal.is_open() || state.focus == focus {
        return unchanged();
    }
    tracing::trace!(from = ?state.focus, to = ?focus, "focus moved");
    state.focus = focus;
    Ok((true, vec![]))
}

fn handle_char(state: &mut AppState, c: char) -> Outcome {
    if state.modal.is_open() {
        return match c {
            'q' => rendered(state.close_detail()),
            'h' => step_slide(state, false),
            'l' => step_slide(state, true),
            'j' => Ok((state.scroll_description(true), vec![])),
            'k' => Ok((state.scroll_description(false), vec![])),
            '1'..='9' => {
                let index = c.to_digit(10).map_or(0, |digit| digit as usize - 1);
                rendered(state.jump_to_slide(index))
            }
            _ => unchanged(),
        };
    }

    if state.focus.accepts_text() {
        let mut company_name = state.filter.draft().company_name.clone();
        company_name.push(c);
        tracing::trace!(company_name = %company_name, "company draft updated");
        state.filter.update_draft(FilterUpdate::CompanyName(company_name));
        return Ok((true, vec![]));
    }

    match (state.focus, c) {
        (_, 'q') => Ok((false, vec![Action::CloseFocus])),
        (_, '/') => set_focus(state, Focus::CompanyName),
        (Focus::Results, 'j') => Ok((state.move_selection_down(), vec![])),
        (Focus::Results, 'k') => Ok((state.move_selection_up(), vec![])),
        (Focus::Results, 'h') => step_page(state, false),
        (Focus::Results, 'l') => step_page(state, true),
        _ => unchanged(),
    }
}

fn cycle_option(state: &mut AppState, forward: bool) -> Outcome {
    if state.modal.is_open() {
        return unchanged();
    }
    let draft = state.filter.draft();
    let update = match state.focus {
        Focus::Education => FilterUpdate::Education(filter::cycle_option(
            state.catalog.education_levels(),
            &draft.education,
            forward,
        )),
        Focus::Salary => FilterUpdate::Salary(filter::cycle_option(
            state.catalog.salary_bands(),
            &draft.salary,
            forward,
        )),
        _ => return unchanged(),
    };
    state.filter.update_draft(update);
    Ok((true, vec![]))
}

fn step_page(state: &mut AppState, forward: bool) -> Outcome {
    let current = state.effective_page();
    let target = if forward {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    };
    rendered(state.change_page(target))
}

fn step_slide(state: &mut AppState, forward: bool) -> Outcome {
    let Some(carousel) = state.modal.carousel() else {
        return unchanged();
    };
    let count = carousel.slide_count();
    if count < 2 {
        return unchanged();
    }
    let target = if forward {
        (carousel.current() + 1) % count
    } else {
        (carousel.current() + count - 1) % count
    };
    rendered(state.jump_to_slide(target))
}

fn open_selected(state: &mut AppState) -> Outcome {
    let Some(id) = state.selected_job().map(|job| job.id) else {
        tracing::debug!("no job selected");
        return unchanged();
    };
    rendered(state.open_detail(id))
}

fn handle_click(state: &mut AppState, row: usize, col: usize) -> Outcome {
    let (rows, cols) = (state.viewport.rows, state.viewport.cols);
    let layout = ScreenLayout::compute(&state.compute_viewmodel(rows, cols), rows, cols);
    let Some(hit) = layout.hit_test(row, col) else {
        return unchanged();
    };
    tracing::debug!(row, col, hit = ?hit, "click resolved");

    match hit {
        Hit::ModalBackdrop => rendered(state.close_detail()),
        Hit::ModalContent => unchanged(),
        Hit::Dot(index) => rendered(state.jump_to_slide(index)),
        Hit::CompanyInput => set_focus(state, Focus::CompanyName),
        Hit::EducationSelect => set_focus(state, Focus::Education),
        Hit::SalarySelect => set_focus(state, Focus::Salary),
        Hit::SearchButton => {
            state.focus = Focus::SearchButton;
            Ok((true, state.commit(CommitTrigger::Button)))
        }
        Hit::Card(slot) => {
            state.focus = Focus::Results;
            state.selected_index = slot;
            open_selected(state).map(|(_, actions)| (true, actions))
        }
        Hit::PrevPage => step_page(state, false),
        Hit::NextPage => step_page(state, true),
        Hit::Page(page) => rendered(state.change_page(page)),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Outcome {
    match response {
        WorkerResponse::CatalogLoaded { catalog, loaded_at } => {
            tracing::debug!(jobs = catalog.len(), loaded_at, "catalog received from worker");
            Ok((state.load_catalog(catalog.clone()), vec![]))
        }
        // Query answers serve other clients of the worker protocol; the
        // plugin filters its own catalog snapshot and never asks for them.
        WorkerResponse::JobsQueried { .. }
        | WorkerResponse::JobDetailFetched { .. }
        | WorkerResponse::EducationLevelsListed { .. }
        | WorkerResponse::SalaryBandsListed { .. } => {
            tracing::debug!(response = ?response, "unsolicited worker response ignored");
            unchanged()
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            Ok((state.record_worker_error(message), vec![]))
        }
    }
}
