//! Timed fade-out / fade-in gating list swaps.
//!
//! A [`Fade`] is a three-state machine advanced only by its own timers:
//!
//! ```text
//!            begin()                 timer                    timer
//! Settled ───────────▶ TransitioningOut ─────▶ TransitioningIn ─────▶ Settled
//!                                       (swap content)
//! ```
//!
//! The data change behind a fade is applied on the Out → In step, so the old
//! content stays on screen while it fades out. Calling [`Fade::begin`] again
//! mid-flight restarts the sequence under a new generation; timers scheduled
//! by the interrupted run no longer match and are ignored.

use super::timers::{TimerId, TimerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Settled,
    TransitioningOut,
    TransitioningIn,
}

/// What the owner must do after a fade timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    /// Fade-out finished: apply the pending change and schedule the fade-in timer.
    SwapContent,
    /// Fade-in finished.
    Settled,
}

#[derive(Debug, Clone)]
pub struct Fade {
    kind: TimerKind,
    phase: FadePhase,
    generation: u64,
}

impl Fade {
    #[must_use]
    pub const fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            phase: FadePhase::Settled,
            generation: 0,
        }
    }

    /// Starts (or restarts) a fade-out and returns the timer to schedule.
    pub fn begin(&mut self) -> TimerId {
        self.generation += 1;
        self.phase = FadePhase::TransitioningOut;
        tracing::trace!(kind = ?self.kind, generation = self.generation, "fade started");
        self.timer()
    }

    /// Advances the fade if `id` belongs to the current run.
    ///
    /// Returns `None` for stale generations, foreign kinds, or a settled fade.
    pub fn on_timer(&mut self, id: TimerId) -> Option<FadeStep> {
        if id.kind != self.kind || id.generation != self.generation {
            tracing::trace!(kind = ?id.kind, generation = id.generation, current = self.generation, "ignoring stale fade timer");
            return None;
        }

        match self.phase {
            FadePhase::TransitioningOut => {
                self.phase = FadePhase::TransitioningIn;
                Some(FadeStep::SwapContent)
            }
            FadePhase::TransitioningIn => {
                self.phase = FadePhase::Settled;
                Some(FadeStep::Settled)
            }
            FadePhase::Settled => None,
        }
    }

    /// Timer id for the current run.
    #[must_use]
    pub const fn timer(&self) -> TimerId {
        TimerId::new(self.kind, self.generation)
    }

    #[must_use]
    pub const fn phase(&self) -> FadePhase {
        self.phase
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, FadePhase::Settled)
    }

    /// Content fading out is drawn dimmed.
    #[must_use]
    pub const fn is_dimmed(&self) -> bool {
        matches!(self.phase, FadePhase::TransitioningOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_swaps_once_then_settles() {
        let mut fade = Fade::new(TimerKind::ListFade);

        let timer = fade.begin();
        assert_eq!(fade.phase(), FadePhase::TransitioningOut);

        assert_eq!(fade.on_timer(timer), Some(FadeStep::SwapContent));
        assert_eq!(fade.phase(), FadePhase::TransitioningIn);

        assert_eq!(fade.on_timer(fade.timer()), Some(FadeStep::Settled));
        assert!(fade.is_settled());

        assert_eq!(fade.on_timer(fade.timer()), None);
    }

    #[test]
    fn restart_invalidates_earlier_timers() {
        let mut fade = Fade::new(TimerKind::ListFade);

        let first = fade.begin();
        let second = fade.begin();

        assert_eq!(fade.on_timer(first), None);
        assert_eq!(fade.phase(), FadePhase::TransitioningOut);
        assert_eq!(fade.on_timer(second), Some(FadeStep::SwapContent));
    }

    #[test]
    fn timers_of_other_kinds_are_ignored() {
        let mut fade = Fade::new(TimerKind::ListFade);
        let timer = fade.begin();

        let foreign = TimerId::new(TimerKind::PageBarFade, timer.generation);
        assert_eq!(fade.on_timer(foreign), None);
        assert!(fade.is_dimmed());
    }
}
