//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller polls with the current time; nothing here ever waits.
//!
//! Drift correction: a frame that is at most one interval late advances the
//! reference by exactly one interval, which keeps the long-run cadence. If
//! more than one interval was missed the reference is reset to `now` and the
//! backlog is dropped instead of being replayed as a burst.
//!
//! A zero interval is always due.

use embassy_time::{Duration, Instant};

/// Outcome of [`is_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDecision {
    /// Whether a step should run now.
    pub due: bool,
    /// Reference time to pass to the next call.
    pub last_frame: Instant,
}

/// Decide whether a frame is due and compute the next reference time.
pub fn is_due(now: Instant, last_frame: Instant, interval: Duration) -> FrameDecision {
    let elapsed = now.saturating_duration_since(last_frame);
    if elapsed < interval {
        return FrameDecision {
            due: false,
            last_frame,
        };
    }

    let last_frame = if elapsed <= interval * 2 {
        last_frame + interval
    } else {
        now
    };
    FrameDecision {
        due: true,
        last_frame,
    }
}

/// Stateful frame pacing for a single animation.
///
/// Tracks the deadline of the next frame (`last_frame + interval`), so a
/// freshly restarted scheduler is due immediately.
///
/// # Usage
///
/// ```ignore
/// let mut frames = FrameScheduler::new(Duration::from_millis(30));
/// frames.restart(now, Duration::from_millis(30));
///
/// loop {
///     let now = Instant::now();
///     if frames.poll(now) {
///         // draw one step
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    next_frame: Instant,
    interval: Duration,
}

impl FrameScheduler {
    /// Create a scheduler that is due from time zero
    pub const fn new(interval: Duration) -> Self {
        Self {
            next_frame: Instant::from_millis(0),
            interval,
        }
    }

    /// Reset the cadence so that a step is due at `now`
    pub fn restart(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next_frame = now;
    }

    /// Check if a step is due and advance the deadline if so
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }

        // Lateness up to one interval keeps the cadence, anything more
        // drops the backlog.
        let lateness = now.saturating_duration_since(self.next_frame);
        if lateness <= self.interval {
            self.next_frame += self.interval;
        } else {
            self.next_frame = now + self.interval;
        }
        true
    }

    /// Apply the drift rule without stepping.
    ///
    /// Used after the cadence was frozen (pause). If the gap since the last
    /// frame exceeds the allowed drift the reference becomes `now`, so the
    /// next step lands one interval later instead of in a burst.
    pub fn resync(&mut self, now: Instant) {
        if now.saturating_duration_since(self.next_frame) > self.interval {
            self.next_frame = now + self.interval;
        }
    }

    /// How long the caller may sleep before the next step is due.
    ///
    /// Zero when behind schedule.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Deadline of the next step
    pub const fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Step interval
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
