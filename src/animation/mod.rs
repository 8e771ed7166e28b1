//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait: one call to
//! [`Animation::step`] draws exactly one frame and returns, so the control
//! loop is never blocked. The struct fields are the continuation.

mod larson;
mod rainbow_cycle;
mod theater_chase;
mod wipe;

pub use larson::{LarsonScanner, ScanDirection};
pub use rainbow_cycle::RainbowCycle;
pub use theater_chase::TheaterChase;
pub use wipe::{WipeAnimation, WipeVariant};

use crate::color::Rgb;
use crate::sink::PixelSink;

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_COLOR_WIPE: &str = "color_wipe";
const MODE_NAME_ROTATING_COLOR_WIPE: &str = "rotating_color_wipe";
const MODE_NAME_LARSON_SCANNER: &str = "larson_scanner";
const MODE_NAME_THEATER_CHASE: &str = "theater_chase";
const MODE_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";

const MODE_ID_STATIC: u8 = 0;
const MODE_ID_COLOR_WIPE: u8 = 1;
const MODE_ID_ROTATING_COLOR_WIPE: u8 = 2;
const MODE_ID_LARSON_SCANNER: u8 = 3;
const MODE_ID_THEATER_CHASE: u8 = 4;
const MODE_ID_RAINBOW_CYCLE: u8 = 5;

/// Result of a single animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More frames follow
    Continue,
    /// The animation drew its last frame
    Complete,
}

pub trait Animation {
    /// Draw one frame into the sink (without presenting it)
    fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome;

    /// Progress marker: pixel index, scanner position or phase
    fn position(&self) -> usize;

    /// Color the animation draws with
    fn color(&self) -> Rgb;
}

/// Known animation modes that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationMode {
    /// No animation running; the strip holds whatever was last drawn
    Static = MODE_ID_STATIC,
    ColorWipe = MODE_ID_COLOR_WIPE,
    RotatingColorWipe = MODE_ID_ROTATING_COLOR_WIPE,
    LarsonScanner = MODE_ID_LARSON_SCANNER,
    TheaterChase = MODE_ID_THEATER_CHASE,
    RainbowCycle = MODE_ID_RAINBOW_CYCLE,
}

impl AnimationMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC => Self::Static,
            MODE_ID_COLOR_WIPE => Self::ColorWipe,
            MODE_ID_ROTATING_COLOR_WIPE => Self::RotatingColorWipe,
            MODE_ID_LARSON_SCANNER => Self::LarsonScanner,
            MODE_ID_THEATER_CHASE => Self::TheaterChase,
            MODE_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            _ => return None,
        })
    }

    /// Fresh progress record for this mode, `None` for `Static`
    pub fn to_slot(self, color: Rgb) -> Option<AnimationSlot> {
        Some(match self {
            Self::Static => return None,
            Self::ColorWipe => {
                AnimationSlot::ColorWipe(WipeAnimation::new(color, WipeVariant::Straight))
            }
            Self::RotatingColorWipe => {
                AnimationSlot::RotatingColorWipe(WipeAnimation::new(color, WipeVariant::Rotating))
            }
            Self::LarsonScanner => AnimationSlot::LarsonScanner(LarsonScanner::new(color)),
            Self::TheaterChase => AnimationSlot::TheaterChase(TheaterChase::new(color)),
            Self::RainbowCycle => AnimationSlot::RainbowCycle(RainbowCycle::new()),
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::ColorWipe => MODE_NAME_COLOR_WIPE,
            Self::RotatingColorWipe => MODE_NAME_ROTATING_COLOR_WIPE,
            Self::LarsonScanner => MODE_NAME_LARSON_SCANNER,
            Self::TheaterChase => MODE_NAME_THEATER_CHASE,
            Self::RainbowCycle => MODE_NAME_RAINBOW_CYCLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            MODE_NAME_ROTATING_COLOR_WIPE => Some(Self::RotatingColorWipe),
            MODE_NAME_LARSON_SCANNER => Some(Self::LarsonScanner),
            MODE_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            MODE_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            _ => None,
        }
    }

    /// Check if the mode is a running animation rather than idle
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// Animation slot - enum containing the live progress of the active mode
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    ColorWipe(WipeAnimation),
    RotatingColorWipe(WipeAnimation),
    LarsonScanner(LarsonScanner),
    TheaterChase(TheaterChase),
    RainbowCycle(RainbowCycle),
}

impl AnimationSlot {
    /// Draw one frame of the current animation
    pub fn step<S: PixelSink>(&mut self, sink: &mut S) -> StepOutcome {
        match self {
            Self::ColorWipe(animation) | Self::RotatingColorWipe(animation) => {
                animation.step(sink)
            }
            Self::LarsonScanner(animation) => animation.step(sink),
            Self::TheaterChase(animation) => animation.step(sink),
            Self::RainbowCycle(animation) => animation.step(sink),
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::ColorWipe(animation) | Self::RotatingColorWipe(animation) => {
                animation.position()
            }
            Self::LarsonScanner(animation) => animation.position(),
            Self::TheaterChase(animation) => animation.position(),
            Self::RainbowCycle(animation) => animation.position(),
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Self::ColorWipe(animation) | Self::RotatingColorWipe(animation) => animation.color(),
            Self::LarsonScanner(animation) => animation.color(),
            Self::TheaterChase(animation) => animation.color(),
            Self::RainbowCycle(animation) => animation.color(),
        }
    }

    /// Get the mode for external observation
    pub const fn mode(&self) -> AnimationMode {
        match self {
            Self::ColorWipe(_) => AnimationMode::ColorWipe,
            Self::RotatingColorWipe(_) => AnimationMode::RotatingColorWipe,
            Self::LarsonScanner(_) => AnimationMode::LarsonScanner,
            Self::TheaterChase(_) => AnimationMode::TheaterChase,
            Self::RainbowCycle(_) => AnimationMode::RainbowCycle,
        }
    }
}
