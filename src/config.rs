//! Animator configuration

use embassy_time::Duration;

use crate::animation::AnimationMode;
use crate::command::{ButtonBinding, DEFAULT_BUTTONS};

/// Frame interval of the wipes and the chase
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(30);
/// Frame interval of the scanner
pub const DEFAULT_SCANNER_INTERVAL: Duration = Duration::from_millis(20);
/// Frame interval of the rainbow cycle
pub const DEFAULT_RAINBOW_INTERVAL: Duration = Duration::from_millis(10);

/// Configuration for the animator and its command dispatcher
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    pub step_interval: Duration,
    pub scanner_interval: Duration,
    pub rainbow_interval: Duration,
    /// Global brightness applied at startup
    pub brightness: u8,
    pub buttons: &'static [ButtonBinding],
}

impl AnimatorConfig {
    /// Frame interval used when a button starts `mode`
    pub const fn interval_for(&self, mode: AnimationMode) -> Duration {
        match mode {
            AnimationMode::LarsonScanner => self.scanner_interval,
            AnimationMode::RainbowCycle => self.rainbow_interval,
            _ => self.step_interval,
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            step_interval: DEFAULT_STEP_INTERVAL,
            scanner_interval: DEFAULT_SCANNER_INTERVAL,
            rainbow_interval: DEFAULT_RAINBOW_INTERVAL,
            brightness: u8::MAX,
            buttons: DEFAULT_BUTTONS,
        }
    }
}
