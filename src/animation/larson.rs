//! Larson scanner ("Cylon eye")
//!
//! A five pixel eye bouncing between the strip ends. The eye is a sampled
//! Gaussian: full color at the center, dimmer one and two pixels out.

use super::{Animation, StepOutcome};
use crate::color::{BLACK, Rgb, scale_color};
use crate::sink::PixelSink;

/// Standard deviation of the eye, in pixels
const DEFAULT_SPREAD: f32 = 1.2;

/// Pixels lit on each side of the center
const EYE_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct LarsonScanner {
    color: Rgb,
    position: usize,
    direction: ScanDirection,
    /// Brightness by distance from the center (0, 1, 2)
    falloff: [u8; EYE_RADIUS + 1],
    /// Center of the eye drawn by the previous frame
    drawn: Option<usize>,
}

impl LarsonScanner {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            position: 0,
            direction: ScanDirection::Forward,
            falloff: gaussian_falloff(DEFAULT_SPREAD),
            drawn: None,
        }
    }

    /// Set the eye spread (standard deviation in pixels)
    ///
    /// A non-positive spread lights only the center pixel.
    #[must_use]
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.falloff = gaussian_falloff(spread);
        self
    }

    pub const fn direction(&self) -> ScanDirection {
        self.direction
    }

    pub const fn falloff(&self) -> [u8; EYE_RADIUS + 1] {
        self.falloff
    }

    fn advance(&mut self, count: usize) {
        if count < 2 {
            self.position = 0;
            return;
        }
        let last = count - 1;
        self.position = match self.direction {
            ScanDirection::Forward => (self.position + 1).min(last),
            ScanDirection::Backward => self.position.saturating_sub(1),
        };
        if self.position == 0 {
            self.direction = ScanDirection::Forward;
        } else if self.position == last {
            self.direction = ScanDirection::Backward;
        }
    }
}

impl Animation for LarsonScanner {
    fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome {
        let count = sink.count();
        if count == 0 {
            return StepOutcome::Continue;
        }
        // The strip may have shrunk since the last frame
        self.position = self.position.min(count - 1);

        if let Some(previous) = self.drawn {
            for index in eye_span(previous, count) {
                sink.set_pixel(index, BLACK);
            }
        }

        for index in eye_span(self.position, count) {
            let level = self.falloff[index.abs_diff(self.position)];
            sink.set_pixel(index, scale_color(self.color, level));
        }
        self.drawn = Some(self.position);

        self.advance(count);
        StepOutcome::Continue
    }

    fn position(&self) -> usize {
        self.position
    }

    fn color(&self) -> Rgb {
        self.color
    }
}

/// In-range pixel indices covered by an eye centered at `center`
fn eye_span(center: usize, count: usize) -> impl Iterator<Item = usize> {
    let start = center.saturating_sub(EYE_RADIUS);
    let end = (center + EYE_RADIUS).min(count.saturating_sub(1));
    start..=end
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn gaussian_falloff(spread: f32) -> [u8; EYE_RADIUS + 1] {
    let mut levels = [0; EYE_RADIUS + 1];
    levels[0] = u8::MAX;
    if spread <= 0.0 || spread.is_nan() {
        return levels;
    }
    let denominator = 2.0 * spread * spread;
    for (distance, level) in levels.iter_mut().enumerate().skip(1) {
        let d = distance as f32;
        let weight = libm::expf(-(d * d) / denominator);
        *level = (weight * 255.0).clamp(0.0, 255.0) as u8;
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_decreases_from_center() {
        let [center, medium, dark] = gaussian_falloff(DEFAULT_SPREAD);
        assert_eq!(center, 255);
        assert!(medium < center);
        assert!(dark < medium);
        assert!(dark > 0);
    }

    #[test]
    fn zero_spread_lights_center_only() {
        assert_eq!(gaussian_falloff(0.0), [255, 0, 0]);
    }

    #[test]
    fn eye_span_is_clipped_to_strip() {
        assert!(eye_span(0, 10).eq(0..=2));
        assert!(eye_span(9, 10).eq(7..=9));
        assert!(eye_span(0, 1).eq(0..=0));
    }
}
