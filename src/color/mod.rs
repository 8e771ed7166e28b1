mod utils;
mod wheel;

use smart_leds::RGB8;
pub use utils::{rgb_from_u32, scale8, scale_color};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
