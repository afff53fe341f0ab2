//! Timer identities and the pending-timer queue.
//!
//! Zellij timers carry no payload: `set_timeout` eventually delivers a bare
//! `Timer` event. Every timer the application asks for is therefore recorded
//! in a [`TimerQueue`] together with its deadline, and when a `Timer` event
//! arrives all entries that are due fire as [`TimerId`]s.
//!
//! Each [`TimerId`] carries the generation of the component that scheduled it.
//! Components bump their generation on teardown or restart, so a timer that
//! outlives its owner is recognized as stale and ignored.

use std::time::Duration;

/// Duration of one fade step (out or in).
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Interval between automatic carousel advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Slide transition time; also the manual-jump cooldown.
pub const SLIDE_TRANSITION: Duration = Duration::from_millis(600);

/// Cooldown after a manual carousel jump.
pub const DOT_COOLDOWN: Duration = SLIDE_TRANSITION;

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    ListFade,
    PageBarFade,
    CarouselAdvance,
    DotCooldown,
}

/// A scheduled timer: its purpose plus the owner's generation at scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    pub kind: TimerKind,
    pub generation: u64,
}

impl TimerId {
    #[must_use]
    pub const fn new(kind: TimerKind, generation: u64) -> Self {
        Self { kind, generation }
    }
}

/// Pending timers keyed by deadline.
///
/// Deadlines are expressed as offsets from an arbitrary origin chosen by the
/// caller (the plugin uses the instant it was loaded), which keeps the queue
/// independent of the clock.
///
/// # Example
///
/// ```rust
/// use jobboard::app::timers::{TimerId, TimerKind, TimerQueue};
/// use std::time::Duration;
///
/// let mut queue = TimerQueue::default();
/// let id = TimerId::new(TimerKind::ListFade, 1);
/// queue.schedule(id, Duration::ZERO, Duration::from_millis(300));
///
/// assert!(queue.take_due(Duration::from_millis(100)).is_empty());
/// assert_eq!(queue.take_due(Duration::from_millis(300)), vec![id]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<(Duration, TimerId)>,
}

impl TimerQueue {
    /// Records a timer that becomes due `after` the given `now`.
    pub fn schedule(&mut self, id: TimerId, now: Duration, after: Duration) {
        self.pending.push((now + after, id));
    }

    /// Forgets every pending entry with this id.
    pub fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending)| *pending != id);
    }

    /// Removes and returns the timers due at `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerId> {
        let mut due: Vec<(Duration, TimerId)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let mut queue = TimerQueue::default();
        let slow = TimerId::new(TimerKind::CarouselAdvance, 1);
        let fast = TimerId::new(TimerKind::DotCooldown, 1);

        queue.schedule(slow, Duration::ZERO, AUTOPLAY_INTERVAL);
        queue.schedule(fast, Duration::ZERO, DOT_COOLDOWN);

        assert_eq!(queue.take_due(Duration::from_secs(5)), vec![fast, slow]);
        assert!(queue.is_empty());
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut queue = TimerQueue::default();
        let id = TimerId::new(TimerKind::ListFade, 3);
        let other = TimerId::new(TimerKind::ListFade, 4);

        queue.schedule(id, Duration::ZERO, FADE_DURATION);
        queue.schedule(other, Duration::ZERO, FADE_DURATION);
        queue.cancel(id);

        assert_eq!(queue.take_due(FADE_DURATION), vec![other]);
    }

    #[test]
    fn timers_not_yet_due_stay_queued() {
        let mut queue = TimerQueue::default();
        queue.schedule(TimerId::new(TimerKind::PageBarFade, 1), Duration::from_millis(100), FADE_DURATION);

        assert!(queue.take_due(Duration::from_millis(399)).is_empty());
        assert_eq!(queue.len(), 1);
    }
}
