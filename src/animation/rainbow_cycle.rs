//! Rainbow cycle
//!
//! The whole color wheel spread evenly over the strip, rotated by one wheel
//! step per frame. Runs until replaced.

use super::{Animation, StepOutcome};
use crate::color::{BLACK, Rgb, wheel};
use crate::sink::PixelSink;

#[derive(Debug, Clone, Default)]
pub struct RainbowCycle {
    offset: u8,
}

impl RainbowCycle {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }
}

impl Animation for RainbowCycle {
    #[allow(clippy::cast_possible_truncation)]
    fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome {
        let count = sink.count();
        for index in 0..count {
            // index < count, so the spread phase stays below 256
            let spread = (index * 256 / count) as u8;
            sink.set_pixel(index, wheel(spread.wrapping_add(self.offset)));
        }
        self.offset = self.offset.wrapping_add(1);
        StepOutcome::Continue
    }

    fn position(&self) -> usize {
        usize::from(self.offset)
    }

    fn color(&self) -> Rgb {
        BLACK
    }
}
