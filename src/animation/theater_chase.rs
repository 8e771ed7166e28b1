//! Theater-style crawling lights
//!
//! Every third pixel is lit; the lit set shifts by one each frame. After
//! ten full crawls one more frame clears the strip and the chase completes.

use super::{Animation, StepOutcome};
use crate::color::{BLACK, Rgb};
use crate::sink::PixelSink;

const PHASES: u8 = 3;
const CYCLES: u16 = 10;
const LIT_FRAMES: u16 = CYCLES * PHASES as u16;

#[derive(Debug, Clone)]
pub struct TheaterChase {
    color: Rgb,
    phase: u8,
    frames: u16,
    /// Phase lit by the previous frame
    lit: Option<u8>,
}

impl TheaterChase {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            phase: 0,
            frames: 0,
            lit: None,
        }
    }

    /// Frames drawn so far
    pub const fn frames(&self) -> u16 {
        self.frames
    }
}

impl Animation for TheaterChase {
    fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome {
        let count = sink.count();
        if let Some(previous) = self.lit.take() {
            paint_phase(sink, previous, count, BLACK);
        }
        if self.frames >= LIT_FRAMES {
            return StepOutcome::Complete;
        }

        paint_phase(sink, self.phase, count, self.color);
        self.lit = Some(self.phase);
        self.phase = (self.phase + 1) % PHASES;
        self.frames += 1;
        StepOutcome::Continue
    }

    fn position(&self) -> usize {
        usize::from(self.phase)
    }

    fn color(&self) -> Rgb {
        self.color
    }
}

fn paint_phase<S: PixelSink>(sink: &mut S, phase: u8, count: usize, color: Rgb) {
    for index in (usize::from(phase)..count).step_by(usize::from(PHASES)) {
        sink.set_pixel(index, color);
    }
}
