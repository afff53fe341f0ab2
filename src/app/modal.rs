//! Detail modal with an embedded image carousel.
//!
//! At most one record is shown at a time. Opening the modal takes the page
//! scroll lock and resets the carousel; closing it drops the lock guard and
//! bumps the modal generation so that carousel timers scheduled while it was
//! open are recognized as stale.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::timers::{TimerId, TimerKind};
use crate::domain::JobId;

/// Result of a manual jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The carousel moved; a cooldown is now running.
    Jumped,
    /// A previous jump is still cooling down; nothing changed.
    CoolingDown,
    /// No slide with that index.
    OutOfRange,
}

/// Cyclic slide position over a record's photos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    slide_count: usize,
    cooling_down: bool,
}

impl Carousel {
    #[must_use]
    pub const fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count,
            cooling_down: false,
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether manual jumps are currently accepted.
    #[must_use]
    pub const fn dots_enabled(&self) -> bool {
        !self.cooling_down
    }

    /// Whether autoplay has anything to advance to.
    #[must_use]
    pub const fn autoplays(&self) -> bool {
        self.slide_count > 1
    }

    /// Automatic advance; wraps after the last slide and ignores the cooldown.
    pub fn advance(&mut self) {
        if self.slide_count > 0 {
            self.current = (self.current + 1) % self.slide_count;
        }
    }

    /// Manual jump to slide `index`, rejected while cooling down.
    pub fn jump_to(&mut self, index: usize) -> JumpOutcome {
        if self.cooling_down {
            return JumpOutcome::CoolingDown;
        }
        if index >= self.slide_count {
            return JumpOutcome::OutOfRange;
        }
        self.current = index;
        self.cooling_down = true;
        JumpOutcome::Jumped
    }

    pub fn end_cooldown(&mut self) {
        self.cooling_down = false;
    }

    /// Indices of the slides on screen, starting at the current one and wrapping.
    #[must_use]
    pub fn visible(&self, slides_to_show: usize) -> Vec<usize> {
        let shown = slides_to_show.min(self.slide_count);
        (0..shown).map(|offset| (self.current + offset) % self.slide_count).collect()
    }
}

#[derive(Debug)]
struct ActiveDetail {
    job_id: JobId,
    carousel: Carousel,
    /// First description line in view.
    description_offset: usize,
    _lock: ScrollLockGuard,
}

/// The overlay showing one record.
#[derive(Debug)]
pub struct DetailModal {
    lock: ScrollLock,
    active: Option<ActiveDetail>,
    generation: u64,
}

impl DetailModal {
    #[must_use]
    pub const fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            active: None,
            generation: 0,
        }
    }

    /// Shows `job_id` with a fresh carousel over `slide_count` photos.
    ///
    /// Any record already shown is replaced. Returns `false` when the scroll
    /// lock is held elsewhere and the modal stays closed.
    pub fn open(&mut self, job_id: JobId, slide_count: usize) -> bool {
        self.close();

        let Some(guard) = self.lock.try_acquire() else {
            tracing::debug!(job_id = %job_id, "scroll lock busy, modal not opened");
            return false;
        };

        self.active = Some(ActiveDetail {
            job_id,
            carousel: Carousel::new(slide_count),
            description_offset: 0,
            _lock: guard,
        });
        tracing::debug!(job_id = %job_id, slide_count, generation = self.generation, "detail modal opened");
        true
    }

    /// Hides the modal and releases the scroll lock.
    ///
    /// Returns the timers that were outstanding for the closed modal, empty if
    /// nothing was open.
    pub fn close(&mut self) -> Vec<TimerId> {
        let Some(active) = self.active.take() else {
            return Vec::new();
        };
        let outstanding = vec![self.timer(TimerKind::CarouselAdvance), self.timer(TimerKind::DotCooldown)];
        self.generation += 1;
        tracing::debug!(job_id = %active.job_id, "detail modal closed");
        outstanding
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn job_id(&self) -> Option<JobId> {
        self.active.as_ref().map(|active| active.job_id)
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.active.as_ref().map(|active| &active.carousel)
    }

    /// First description line in view, zero when nothing is open.
    #[must_use]
    pub fn description_offset(&self) -> usize {
        self.active.as_ref().map_or(0, |active| active.description_offset)
    }

    /// Scrolls the description one line, staying within `0..=max_offset`.
    /// Returns whether the offset moved.
    pub fn scroll_description(&mut self, forward: bool, max_offset: usize) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let current = active.description_offset.min(max_offset);
        let next = if forward {
            (current + 1).min(max_offset)
        } else {
            current.saturating_sub(1)
        };
        let moved = next != active.description_offset;
        active.description_offset = next;
        moved
    }

    /// Timer of `kind` belonging to the current modal generation.
    #[must_use]
    pub const fn timer(&self, kind: TimerKind) -> TimerId {
        TimerId::new(kind, self.generation)
    }

    fn owns(&self, id: TimerId) -> bool {
        self.active.is_some() && id.generation == self.generation
    }

    /// Advances the carousel on an autoplay tick. Returns whether it moved.
    pub fn on_autoplay(&mut self, id: TimerId) -> bool {
        if !self.owns(id) {
            return false;
        }
        match self.active.as_mut() {
            Some(active) if active.carousel.autoplays() => {
                active.carousel.advance();
                true
            }
            _ => false,
        }
    }

    /// Re-enables manual jumps when the cooldown timer fires.
    pub fn on_cooldown(&mut self, id: TimerId) -> bool {
        if !self.owns(id) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.carousel.end_cooldown();
            return true;
        }
        false
    }

    /// Manual jump; `OutOfRange` when nothing is open.
    pub fn jump_to(&mut self, index: usize) -> JumpOutcome {
        self.active
            .as_mut()
            .map_or(JumpOutcome::OutOfRange, |active| active.carousel.jump_to(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn visible_slides_wrap_and_cap_at_slide_count() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(3);
        assert_eq!(carousel.visible(3), [3, 0, 1]);
        assert_eq!(Carousel::new(2).visible(3), [0, 1]);
        assert!(Carousel::new(0).visible(3).is_empty());
    }

    #[test]
    fn second_jump_within_cooldown_is_ignored() {
        let mut carousel = Carousel::new(4);

        assert_eq!(carousel.jump_to(2), JumpOutcome::Jumped);
        assert_eq!(carousel.jump_to(3), JumpOutcome::CoolingDown);
        assert_eq!(carousel.current(), 2);

        carousel.end_cooldown();
        assert_eq!(carousel.jump_to(3), JumpOutcome::Jumped);
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn autoplay_ignores_cooldown() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(1);
        carousel.advance();
        assert_eq!(carousel.current(), 2);
        assert!(!carousel.dots_enabled());
    }

    #[test]
    fn out_of_range_jump_is_a_no_op() {
        let mut carousel = Carousel::new(2);
        assert_eq!(carousel.jump_to(2), JumpOutcome::OutOfRange);
        assert!(carousel.dots_enabled());
    }

    #[test]
    fn open_then_close_releases_lock_and_resets_slide() {
        let lock = ScrollLock::new();
        let mut modal = DetailModal::new(lock.clone());

        assert!(modal.open(JobId(1), 3));
        assert!(lock.is_held());
        modal.jump_to(2);

        let cancelled = modal.close();
        assert_eq!(cancelled.len(), 2);
        assert!(!lock.is_held());
        assert!(!modal.is_open());

        assert!(modal.open(JobId(1), 3));
        assert_eq!(modal.carousel().map(Carousel::current), Some(0));
    }

    #[test]
    fn timers_from_closed_modal_are_stale() {
        let mut modal = DetailModal::new(ScrollLock::new());
        modal.open(JobId(2), 3);
        let tick = modal.timer(TimerKind::CarouselAdvance);

        modal.close();
        modal.open(JobId(2), 3);

        assert!(!modal.on_autoplay(tick));
        assert_eq!(modal.carousel().map(Carousel::current), Some(0));
        assert!(modal.on_autoplay(modal.timer(TimerKind::CarouselAdvance)));
    }

    #[test]
    fn open_fails_while_lock_held_elsewhere() {
        let lock = ScrollLock::new();
        let _held = lock.try_acquire();
        let mut modal = DetailModal::new(lock);

        assert!(!modal.open(JobId(1), 1));
        assert!(!modal.is_open());
    }

    #[test]
    fn description_scroll_stays_in_range_and_resets_on_open() {
        let mut modal = DetailModal::new(ScrollLock::new());
        assert!(!modal.scroll_description(true, 5));

        modal.open(JobId(1), 0);
        assert!(!modal.scroll_description(false, 2));
        assert!(modal.scroll_description(true, 2));
        assert!(modal.scroll_description(true, 2));
        assert!(!modal.scroll_description(true, 2));
        assert_eq!(modal.description_offset(), 2);

        modal.close();
        modal.open(JobId(1), 0);
        assert_eq!(modal.description_offset(), 0);
    }
}
