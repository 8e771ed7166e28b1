//! Color wipes
//!
//! Fill the strip one pixel per frame. The rotating variant runs strand B in
//! the opposite direction, so the two strands meet and cross.

use super::{Animation, StepOutcome};
use crate::color::Rgb;
use crate::sink::{PixelSink, Strand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeVariant {
    /// Both strands fill from index 0
    Straight,
    /// Strand A fills upwards from 0, strand B downwards from the far end
    Rotating,
}

#[derive(Debug, Clone)]
pub struct WipeAnimation {
    color: Rgb,
    /// Next pixel to paint, `0..=count`
    pixel: usize,
    variant: WipeVariant,
}

impl WipeAnimation {
    pub const fn new(color: Rgb, variant: WipeVariant) -> Self {
        Self {
            color,
            pixel: 0,
            variant,
        }
    }

    pub const fn variant(&self) -> WipeVariant {
        self.variant
    }
}

impl Animation for WipeAnimation {
    fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome {
        let count = sink.count();
        if self.pixel >= count {
            return StepOutcome::Complete;
        }

        match self.variant {
            WipeVariant::Straight => sink.set_pixel(self.pixel, self.color),
            WipeVariant::Rotating => {
                sink.set_strand_pixel(Strand::A, self.pixel, self.color);
                // Index `count` on the first step is off the strand and dropped
                sink.set_strand_pixel(Strand::B, count - self.pixel, self.color);
            }
        }
        self.pixel += 1;

        if self.pixel == count {
            StepOutcome::Complete
        } else {
            StepOutcome::Continue
        }
    }

    fn position(&self) -> usize {
        self.pixel
    }

    fn color(&self) -> Rgb {
        self.color
    }
}
