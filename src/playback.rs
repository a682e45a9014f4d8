// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timed reveal of enumerated paths.
//!
//! Playback is deadline-driven: the event loop asks for [`Playback::next_deadline`], sleeps (or
//! polls input) until then, and calls [`Playback::advance`] with the current instant. There are no
//! callbacks to cancel; dropping or [`Playback::cancel`]ling a playback discards its pending
//! deadline, so a stale enumeration can never update the screen after a view change.

use std::f64::consts::PI;
use std::fmt;
use std::time::{Duration, Instant};

/// Ease-in/ease-out delay schedule between successive reveals.
///
/// The delay follows `max - (max - min) * sin(progress * π)`: slow at both ends, fastest in the
/// middle of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RevealTiming {
    pub const fn from_millis(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            min_delay: Duration::from_millis(min_delay_ms),
            max_delay: Duration::from_millis(max_delay_ms),
        }
    }

    /// Delay after showing item `index` of `total`.
    pub fn delay(&self, index: usize, total: usize) -> Duration {
        let progress = if total > 1 { index as f64 / (total - 1) as f64 } else { 1.0 };
        let speed = (progress * PI).sin().clamp(0.0, 1.0);
        let max = self.max_delay.as_nanos() as u64;
        let min = (self.min_delay.as_nanos() as u64).min(max);
        let eased = ((max - min) as f64 * speed).round() as u64;
        Duration::from_nanos(max - eased.min(max - min))
    }
}

/// "Get ready..." followed by `from`, `from - 1`, ..., `1`, one per `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub from: u8,
    pub step: Duration,
}

impl Default for Countdown {
    fn default() -> Self {
        Self { from: 3, step: Duration::from_secs(1) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    GetReady,
    Countdown(u8),
    Counting,
    Done,
}

impl fmt::Display for PlaybackPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetReady => f.write_str("Get ready..."),
            Self::Countdown(value) => write!(f, "{value}"),
            Self::Counting => f.write_str("Counting..."),
            Self::Done => f.write_str("Done!"),
        }
    }
}

/// Countdown then a timed walk over `total` items.
#[derive(Debug, Clone)]
pub struct Playback {
    total: usize,
    timing: RevealTiming,
    countdown: Countdown,
    phase: PlaybackPhase,
    current: Option<usize>,
    next_deadline: Option<Instant>,
}

impl Playback {
    pub fn start(total: usize, timing: RevealTiming, countdown: Countdown, now: Instant) -> Self {
        let mut playback = Self {
            total,
            timing,
            countdown,
            phase: PlaybackPhase::GetReady,
            current: None,
            next_deadline: None,
        };
        playback.restart(now);
        playback
    }

    /// Rewinds to "Get ready..." and schedules the countdown from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.phase = PlaybackPhase::GetReady;
        self.current = None;
        self.next_deadline = Some(now + self.countdown.step);
        tracing::debug!(total = self.total, "playback started");
    }

    /// Drops the pending deadline; the playback stays frozen where it is.
    pub fn cancel(&mut self) {
        if self.next_deadline.take().is_some() {
            tracing::debug!(phase = %self.phase, "playback cancelled");
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of the item currently on screen. After completion the last item stays visible.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of items revealed so far (`current + 1`).
    pub fn counter(&self) -> usize {
        self.current.map_or(0, |idx| idx + 1)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PlaybackPhase::Done
    }

    /// Processes every deadline that has elapsed by `now`. Returns whether anything changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.next_deadline {
            if deadline > now {
                break;
            }
            self.fire(deadline);
            changed = true;
        }
        changed
    }

    fn fire(&mut self, deadline: Instant) {
        match self.phase {
            PlaybackPhase::GetReady => self.enter_countdown(self.countdown.from, deadline),
            PlaybackPhase::Countdown(value) => {
                self.enter_countdown(value.saturating_sub(1), deadline)
            }
            PlaybackPhase::Counting => self.show(self.current.map_or(0, |idx| idx + 1), deadline),
            PlaybackPhase::Done => self.next_deadline = None,
        }
    }

    fn enter_countdown(&mut self, value: u8, deadline: Instant) {
        if value == 0 {
            self.phase = PlaybackPhase::Counting;
            self.show(0, deadline);
        } else {
            self.phase = PlaybackPhase::Countdown(value);
            self.next_deadline = Some(deadline + self.countdown.step);
        }
    }

    fn show(&mut self, index: usize, deadline: Instant) {
        if index >= self.total {
            self.phase = PlaybackPhase::Done;
            self.current = self.total.checked_sub(1);
            self.next_deadline = None;
            tracing::debug!(total = self.total, "playback finished");
            return;
        }
        self.current = Some(index);
        self.next_deadline = Some(deadline + self.timing.delay(index, self.total));
    }
}

/// Reveals items one at a time, `interval` apart, starting with the first item immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredReveal {
    started_at: Instant,
    interval: Duration,
    total: usize,
}

impl StaggeredReveal {
    pub fn new(total: usize, interval: Duration, now: Instant) -> Self {
        Self { started_at: now, interval, total }
    }

    pub fn visible(&self, now: Instant) -> usize {
        if self.interval.is_zero() {
            return self.total;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let steps = (elapsed.as_nanos() / self.interval.as_nanos()) as usize;
        steps.saturating_add(1).min(self.total)
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let visible = self.visible(now);
        if visible >= self.total {
            return None;
        }
        Some(self.started_at + self.interval * visible as u32)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Countdown, Playback, PlaybackPhase, RevealTiming, StaggeredReveal};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn countdown() -> Countdown {
        Countdown { from: 3, step: ms(1000) }
    }

    #[test]
    fn delay_is_slow_at_the_ends_and_fast_in_the_middle() {
        let timing = RevealTiming::from_millis(20, 150);
        assert_eq!(timing.delay(0, 5), ms(150));
        assert_eq!(timing.delay(2, 5), ms(20));
        assert_eq!(timing.delay(4, 5), ms(150));
        let quarter = timing.delay(1, 5);
        assert!(quarter > ms(20) && quarter < ms(150), "{quarter:?}");
    }

    #[test]
    fn single_item_counts_as_finished_progress() {
        let timing = RevealTiming::from_millis(10, 100);
        assert_eq!(timing.delay(0, 1), ms(100));
    }

    #[test]
    fn countdown_precedes_counting() {
        let t0 = Instant::now();
        let mut playback = Playback::start(3, RevealTiming::from_millis(10, 10), countdown(), t0);
        assert_eq!(playback.phase(), PlaybackPhase::GetReady);
        assert_eq!(playback.phase().to_string(), "Get ready...");

        assert!(!playback.advance(t0 + ms(999)));
        assert!(playback.advance(t0 + ms(1000)));
        assert_eq!(playback.phase(), PlaybackPhase::Countdown(3));
        playback.advance(t0 + ms(2000));
        assert_eq!(playback.phase(), PlaybackPhase::Countdown(2));
        playback.advance(t0 + ms(3000));
        assert_eq!(playback.phase(), PlaybackPhase::Countdown(1));
        playback.advance(t0 + ms(4000));
        assert_eq!(playback.phase(), PlaybackPhase::Counting);
        assert_eq!(playback.current(), Some(0));
        assert_eq!(playback.counter(), 1);
    }

    #[test]
    fn late_ticks_catch_up_and_keep_the_last_item() {
        let t0 = Instant::now();
        let mut playback = Playback::start(4, RevealTiming::from_millis(10, 10), countdown(), t0);
        playback.advance(t0 + ms(60_000));
        assert!(playback.is_finished());
        assert_eq!(playback.phase().to_string(), "Done!");
        assert_eq!(playback.current(), Some(3));
        assert_eq!(playback.counter(), 4);
        assert_eq!(playback.next_deadline(), None);
    }

    #[test]
    fn cancel_freezes_and_restart_replays() {
        let t0 = Instant::now();
        let mut playback = Playback::start(4, RevealTiming::from_millis(10, 10), countdown(), t0);
        playback.advance(t0 + ms(4010));
        assert_eq!(playback.current(), Some(1));

        playback.cancel();
        assert_eq!(playback.next_deadline(), None);
        assert!(!playback.advance(t0 + ms(60_000)));
        assert_eq!(playback.current(), Some(1));

        let t1 = t0 + ms(70_000);
        playback.restart(t1);
        assert_eq!(playback.phase(), PlaybackPhase::GetReady);
        assert_eq!(playback.current(), None);
        assert_eq!(playback.next_deadline(), Some(t1 + ms(1000)));
    }

    #[test]
    fn empty_playback_finishes_after_the_countdown() {
        let t0 = Instant::now();
        let mut playback = Playback::start(0, RevealTiming::from_millis(10, 10), countdown(), t0);
        playback.advance(t0 + ms(4000));
        assert!(playback.is_finished());
        assert_eq!(playback.current(), None);
        assert_eq!(playback.counter(), 0);
    }

    #[test]
    fn staggered_reveal_adds_one_item_per_interval() {
        let t0 = Instant::now();
        let reveal = StaggeredReveal::new(5, ms(150), t0);
        assert_eq!(reveal.visible(t0), 1);
        assert_eq!(reveal.visible(t0 + ms(149)), 1);
        assert_eq!(reveal.visible(t0 + ms(150)), 2);
        assert_eq!(reveal.visible(t0 + ms(10_000)), 5);
        assert_eq!(reveal.next_deadline(t0), Some(t0 + ms(150)));
        assert_eq!(reveal.next_deadline(t0 + ms(10_000)), None);
    }
}
