//! Blend calculator
//!
//! Derives a new color from a base color by moving its HSL lightness or
//! saturation a fractional `amount` toward an extreme. The intended range
//! for `amount` is [0, 1]; this layer does not clamp the argument (the
//! reconversion in [`hsl_to_rgb`] clamps the resulting channel values), so
//! out-of-range amounts are the caller's responsibility.
//!
//! Hue is never touched, so all four operations preserve it exactly; for
//! true grayscale inputs the hue is meaningless to begin with.

use crate::space::{hsl_to_rgb, rgb_to_hsl, Rgb};

/// Multiply lightness by `1 - amount`.
///
/// Pure black is a fixed point; pure white moves toward black in
/// proportion to `amount`.
pub fn darker(rgb: Rgb, amount: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l *= 1.0 - amount;
    hsl_to_rgb(hsl)
}

/// Move lightness toward 1.0 by `amount` of the remaining headroom.
///
/// Pure white is a fixed point; pure black moves toward white in
/// proportion to `amount`.
pub fn lighter(rgb: Rgb, amount: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.l += (1.0 - hsl.l) * amount;
    hsl_to_rgb(hsl)
}

/// Move saturation toward 1.0 by `amount` of the remaining headroom.
///
/// Fully saturated colors are a fixed point.
pub fn saturate(rgb: Rgb, amount: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.s += (1.0 - hsl.s) * amount;
    hsl_to_rgb(hsl)
}

/// Multiply saturation by `1 - amount`.
///
/// Fully desaturated (gray) colors are a fixed point.
pub fn desaturate(rgb: Rgb, amount: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.s *= 1.0 - amount;
    hsl_to_rgb(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::relative_luminance;

    const SAMPLES: [Rgb; 6] = [
        Rgb::new(139, 92, 246),
        Rgb::new(255, 107, 53),
        Rgb::new(6, 182, 212),
        Rgb::new(255, 255, 255),
        Rgb::new(40, 40, 40),
        Rgb::new(200, 30, 90),
    ];

    #[test]
    fn black_is_a_darker_fixed_point() {
        for amount in [0.0, 0.08, 0.5, 1.0] {
            assert_eq!(darker(Rgb::BLACK, amount), Rgb::BLACK);
        }
    }

    #[test]
    fn white_is_a_lighter_fixed_point() {
        for amount in [0.0, 0.08, 0.5, 1.0] {
            assert_eq!(lighter(Rgb::WHITE, amount), Rgb::WHITE);
        }
    }

    #[test]
    fn fully_saturated_is_a_saturate_fixed_point() {
        let red = Rgb::new(255, 0, 0);
        for amount in [0.0, 0.08, 0.5, 1.0] {
            assert_eq!(saturate(red, amount), red);
        }
    }

    #[test]
    fn gray_is_a_desaturate_fixed_point() {
        for v in [0, 85, 128, 255] {
            let gray = Rgb::new(v, v, v);
            for amount in [0.0, 0.12, 1.0] {
                assert_eq!(desaturate(gray, amount), gray);
            }
        }
    }

    #[test]
    fn darker_reduces_luminance() {
        for rgb in SAMPLES {
            let before = relative_luminance(rgb);
            let after = relative_luminance(darker(rgb, 0.12));
            assert!(after <= before + 1e-9, "darker raised luminance of {rgb:?}");
        }
    }

    #[test]
    fn lighter_raises_luminance() {
        for rgb in SAMPLES {
            let before = relative_luminance(rgb);
            let after = relative_luminance(lighter(rgb, 0.12));
            assert!(after >= before - 1e-9, "lighter lowered luminance of {rgb:?}");
        }
    }

    #[test]
    fn darker_is_monotonic_in_amount() {
        for rgb in SAMPLES {
            let small = relative_luminance(darker(rgb, 0.08));
            let large = relative_luminance(darker(rgb, 0.12));
            assert!(
                large <= small + 1e-9,
                "larger amount produced lighter result for {rgb:?}"
            );
        }
    }

    #[test]
    fn lighter_is_monotonic_in_amount() {
        for rgb in SAMPLES {
            let small = relative_luminance(lighter(rgb, 0.08));
            let large = relative_luminance(lighter(rgb, 0.12));
            assert!(large >= small - 1e-9);
        }
    }

    #[test]
    fn full_amount_hits_the_extremes() {
        for rgb in SAMPLES {
            assert_eq!(darker(rgb, 1.0), Rgb::BLACK);
            assert_eq!(lighter(rgb, 1.0), Rgb::WHITE);
        }
    }

    #[test]
    fn zero_amount_is_identity() {
        for rgb in SAMPLES {
            assert_eq!(darker(rgb, 0.0), rgb);
            assert_eq!(lighter(rgb, 0.0), rgb);
            assert_eq!(saturate(rgb, 0.0), rgb);
            assert_eq!(desaturate(rgb, 0.0), rgb);
        }
    }

    #[test]
    fn saturate_raises_saturation() {
        let muted = Rgb::new(150, 120, 130);
        let before = crate::space::rgb_to_hsl(muted).s;
        let after = crate::space::rgb_to_hsl(saturate(muted, 0.3)).s;
        assert!(after > before);
    }

    #[test]
    fn desaturate_lowers_saturation() {
        let vivid = Rgb::new(139, 92, 246);
        let before = crate::space::rgb_to_hsl(vivid).s;
        let after = crate::space::rgb_to_hsl(desaturate(vivid, 0.3)).s;
        assert!(after < before);
    }

    #[test]
    fn hue_is_preserved() {
        for rgb in [Rgb::new(139, 92, 246), Rgb::new(255, 107, 53)] {
            let base_hue = crate::space::rgb_to_hsl(rgb).h;
            for derived in [
                darker(rgb, 0.12),
                lighter(rgb, 0.12),
                saturate(rgb, 0.12),
                desaturate(rgb, 0.12),
            ] {
                let hue = crate::space::rgb_to_hsl(derived).h;
                assert!(
                    (hue - base_hue).abs() < 1.5,
                    "hue drifted from {base_hue} to {hue} for {rgb:?}"
                );
            }
        }
    }
}
