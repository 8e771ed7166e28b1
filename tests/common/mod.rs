//! Shared test infrastructure

#![allow(dead_code)] // Each test file uses a different subset

use embassy_time::{Duration, Instant};
use strip_animator::{Animator, AnimatorConfig, DualStrandSink, OutputDriver, Playlist, Rgb};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Output driver that keeps every presented frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn frames(&self) -> &[Vec<Rgb>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub type TestSink<const N: usize> = DualStrandSink<RecordingDriver, RecordingDriver, N>;

pub fn sink<const N: usize>() -> TestSink<N> {
    DualStrandSink::new(RecordingDriver::default(), RecordingDriver::default())
}

/// Animator over a recording sink with a red, green, blue playlist
pub fn animator<const N: usize>() -> Animator<TestSink<N>, 3> {
    let playlist = Playlist::new(&[RED, GREEN, BLUE]).unwrap();
    Animator::new(sink(), playlist, &AnimatorConfig::default())
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
