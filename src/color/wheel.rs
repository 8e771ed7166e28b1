use crate::color::Rgb;

/// Classic color wheel.
///
/// Maps a phase on a 0-255 circle to a fully saturated color that moves
/// red -> green -> blue -> red. Phase 0 and 255 are both near pure red.
pub const fn wheel(phase: u8) -> Rgb {
    let pos = 255 - phase;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < 170 {
        let pos = pos - 85;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - 170;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_hits_primaries() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn wheel_is_continuous() {
        for phase in 0..255u8 {
            let a = wheel(phase);
            let b = wheel(phase + 1);
            assert!(a.r.abs_diff(b.r) <= 3);
            assert!(a.g.abs_diff(b.g) <= 3);
            assert!(a.b.abs_diff(b.b) <= 3);
        }
    }
}
