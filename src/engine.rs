//! Animation engine - the main orchestrator
//!
//! Owns the pixel sink, the playlist and the single live progress record.
//! `tick` must be called on every pass of the control loop; it performs at
//! most one animation step and returns immediately.

use embassy_time::{Duration, Instant};
use thiserror::Error;

use crate::animation::{AnimationMode, AnimationSlot, StepOutcome};
use crate::color::Rgb;
use crate::config::AnimatorConfig;
use crate::diag::diag;
use crate::frame_scheduler::FrameScheduler;
use crate::playlist::Playlist;
use crate::sink::PixelSink;

/// Result of a single `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No animation is running
    Idle,
    /// Animation running, next frame not due yet
    Pending,
    /// One frame was drawn and presented
    Stepped,
    /// The frame completed the animation and the playlist moved on
    Advanced,
}

/// Rejected state change. The engine is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no animation is running")]
    NotRunning,
    #[error("no paused animation to resume")]
    NothingToResume,
}

/// Cooperative animation engine
pub struct Animator<S: PixelSink, const PLAYLIST: usize> {
    // External dependencies and configuration
    sink: S,
    playlist: Playlist<PLAYLIST>,

    // Internal state
    mode: AnimationMode,
    previous_mode: Option<AnimationMode>,
    progress: Option<AnimationSlot>,
    cursor: usize,
    frames: FrameScheduler,
}

impl<S: PixelSink, const PLAYLIST: usize> Animator<S, PLAYLIST> {
    /// Create an idle animator and present a dark strip
    pub fn new(mut sink: S, playlist: Playlist<PLAYLIST>, config: &AnimatorConfig) -> Self {
        sink.set_brightness(config.brightness);
        sink.present();
        Self {
            sink,
            playlist,
            mode: AnimationMode::Static,
            previous_mode: None,
            progress: None,
            cursor: 0,
            frames: FrameScheduler::new(config.step_interval),
        }
    }

    /// Start `mode` with `color`, discarding any running or paused animation.
    ///
    /// The first frame is due immediately. Starting `Static` is the same as
    /// [`Self::set_solid_color`].
    pub fn start(&mut self, mode: AnimationMode, color: Rgb, interval: Duration, now: Instant) {
        let Some(slot) = mode.to_slot(color) else {
            self.set_solid_color(color);
            return;
        };
        diag!(
            "[Animator.start] {} color={:?} interval={}ms",
            mode.as_str(),
            color,
            interval.as_millis()
        );
        self.progress = Some(slot);
        self.mode = mode;
        self.previous_mode = None;
        self.frames.restart(now, interval);
    }

    /// Start `mode` from the first playlist color
    pub fn start_playlist(&mut self, mode: AnimationMode, interval: Duration, now: Instant) {
        self.cursor = 0;
        self.start(mode, self.playlist.color_at(0), interval, now);
    }

    /// Advance the running animation by at most one frame
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if !self.mode.is_animated() {
            return TickOutcome::Idle;
        }
        let Some(progress) = self.progress.as_mut() else {
            return TickOutcome::Idle;
        };
        if !self.frames.poll(now) {
            return TickOutcome::Pending;
        }

        let outcome = progress.step(&mut self.sink);
        self.sink.present();

        match outcome {
            StepOutcome::Continue => TickOutcome::Stepped,
            StepOutcome::Complete => {
                self.advance_playlist();
                TickOutcome::Advanced
            }
        }
    }

    /// Freeze the running animation, keeping its progress
    pub fn pause(&mut self) -> Result<(), TransitionError> {
        if !self.mode.is_animated() {
            diag!("[Animator.pause] ignored: nothing running");
            return Err(TransitionError::NotRunning);
        }
        self.previous_mode = Some(self.mode);
        self.mode = AnimationMode::Static;
        Ok(())
    }

    /// Continue the paused animation where it stopped
    pub fn resume(&mut self, now: Instant) -> Result<(), TransitionError> {
        let resumable = !self.mode.is_animated() && self.progress.is_some();
        let Some(previous) = self.previous_mode.filter(|_| resumable) else {
            diag!("[Animator.resume] ignored: nothing paused");
            return Err(TransitionError::NothingToResume);
        };
        self.previous_mode = None;
        self.mode = previous;
        self.frames.resync(now);
        Ok(())
    }

    /// Stop animating and fill both strands with `color` right away
    pub fn set_solid_color(&mut self, color: Rgb) {
        diag!("[Animator.set_solid_color] {:?}", color);
        self.mode = AnimationMode::Static;
        self.previous_mode = None;
        self.progress = None;
        self.sink.fill(color);
        self.sink.present();
    }

    /// Change the global brightness and present it
    pub fn set_brightness(&mut self, level: u8) {
        self.sink.set_brightness(level);
        self.sink.present();
    }

    /// Restart the current mode with the next playlist color.
    ///
    /// The frame cadence carries on, so the first step of the new color
    /// lands one interval after the completing step.
    fn advance_playlist(&mut self) {
        self.cursor = self.playlist.next_cursor(self.cursor);
        let color = self.playlist.color_at(self.cursor);
        diag!("[Animator.advance_playlist] cursor={}", self.cursor);
        self.progress = self.mode.to_slot(color);
    }

    /// Active mode, `Static` while idle or paused
    pub const fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Mode frozen by `pause`
    pub const fn previous_mode(&self) -> Option<AnimationMode> {
        self.previous_mode
    }

    /// Progress marker of the live animation (0 when none)
    pub fn pixel_index(&self) -> usize {
        self.progress.as_ref().map_or(0, AnimationSlot::position)
    }

    /// Color of the live animation
    pub fn active_color(&self) -> Option<Rgb> {
        self.progress.as_ref().map(AnimationSlot::color)
    }

    /// Live progress record, kept while paused
    pub const fn progress(&self) -> Option<&AnimationSlot> {
        self.progress.as_ref()
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn step_interval(&self) -> Duration {
        self.frames.interval()
    }

    /// How long the loop may sleep before the next frame, `None` while idle
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.mode
            .is_animated()
            .then(|| self.frames.time_until_next(now))
    }

    pub const fn playlist(&self) -> &Playlist<PLAYLIST> {
        &self.playlist
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
