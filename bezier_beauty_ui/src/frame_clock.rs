use std::time::{Duration, Instant};

use log::warn;

/// Gap (in frame intervals) after which the cadence is reported as interrupted.
pub const MAX_FRAME_GAP: u32 = 10;

/// Result of polling the [FrameClock].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePoll {
    /// A tick is due now.
    Tick,
    /// Next tick is due after the duration given.
    Wait(Duration),
}

/// Decides when the animation ticks, at most one tick per poll.
///
/// egui repaints for reasons other than the animation (pointer movement, focus changes, etc.) so
/// the clock gates ticks to the fixed interval instead of ticking on every repaint. Missed ticks
/// are never replayed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn poll(&mut self, now: Instant) -> FramePoll {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return FramePoll::Tick;
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.interval {
            return FramePoll::Wait(self.interval - elapsed);
        }

        if elapsed > self.interval * MAX_FRAME_GAP {
            warn!(
                "frame cadence interrupted for {:?} (interval {:?}), continuing without catching up",
                elapsed, self.interval
            );
        }

        self.last_tick = Some(now);
        FramePoll::Tick
    }

    /// Time from `now` until the next tick is due (zero if already due).
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}
