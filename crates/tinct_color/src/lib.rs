//! Color-space conversions and blend math
//!
//! The foundation of the tinct pipeline: pure numeric conversions between
//! hex strings, RGB triples and HSL triples, plus the four blend operations
//! (darker, lighter, saturate, desaturate) that derive state colors from a
//! base color.
//!
//! # Layering
//!
//! This crate is the *strict* layer: malformed input is a hard
//! [`ColorParseError`], never a silently substituted value. Fail-soft
//! behavior lives one level up, in the state-blend facade of `tinct_tokens`.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::{hex_to_rgb, rgb_to_hex, blend};
//!
//! let rgb = hex_to_rgb("#8B5CF6").unwrap();
//! let hover = blend::darker(rgb, 0.08);
//! assert_ne!(rgb_to_hex(hover), "#8B5CF6");
//! ```

pub mod blend;
pub mod space;

pub use space::{
    hex_to_rgb, hsl_to_rgb, relative_luminance, rgb_to_hex, rgb_to_hsl, ColorParseError, Hsl, Rgb,
};
