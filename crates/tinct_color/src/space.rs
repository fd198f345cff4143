//! Hex, RGB and HSL conversions
//!
//! RGB channels are stored as integers (`u8`), so the hex round-trip is
//! lossless for all 16.7M representable colors. HSL is an ephemeral
//! floating-point representation used only while a conversion or blend is
//! in flight.

use thiserror::Error;

/// RGB color with integer components (0-255)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1]
///
/// Grayscale RGB values convert to `s == 0.0` with an arbitrary hue; the
/// hue carries no information in that case and must not be relied on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Failure to interpret a string as a 6-digit hex color
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {len} in {input:?}")]
    WrongLength { input: String, len: usize },

    #[error("invalid hex digit in {input:?}")]
    InvalidDigit { input: String },
}

/// Parse a hex color string into RGB.
///
/// Accepts an optional leading `#` followed by exactly 6 hex digits,
/// case-insensitive. Anything else is an error; this layer never guesses.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ColorParseError::WrongLength {
            input: hex.to_string(),
            len: digits.len(),
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit {
            input: hex.to_string(),
        });
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit {
        input: hex.to_string(),
    })?;

    Ok(Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    })
}

/// Render RGB as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        // Achromatic: hue is undefined, saturation is zero.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    Hsl { h: h * 360.0, s, l }
}

/// Convert HSL back to RGB.
///
/// Saturation and lightness are clamped to [0, 1] and hue is wrapped into
/// [0, 360) before conversion, so callers that push lightness past the
/// representable range (floating-point drift in blend math) land on the
/// nearest representable color instead of wrapping around.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        g: channel(hue_to_rgb(p, q, h)),
        b: channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Relative luminance per WCAG 2.1.
///
/// L = 0.2126·R_lin + 0.7152·G_lin + 0.0722·B_lin, with sRGB
/// linearization. Returns a value in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}
