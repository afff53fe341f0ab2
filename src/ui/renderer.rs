//! Top-level rendering coordinator.
//!
//! The renderer follows a three-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Layout**: Place every element with [`ScreenLayout::compute`]
//! 3. **Component Rendering**: Delegate to the component renderers
//!
//! Mouse hit-testing repeats steps 1 and 2 against the same state, so a click
//! always resolves against what was last drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::ScreenLayout;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let layout = ScreenLayout::compute(&viewmodel, rows, cols);

    components::render_screen(&viewmodel, &layout, &state.theme, cols, rows);
}
