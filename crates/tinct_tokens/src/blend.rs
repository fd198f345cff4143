//! State-blend facade
//!
//! Binds the blend calculator to the five named design ratios and wraps
//! everything in a fail-soft boundary: a string that does not parse as a
//! hex color is returned unchanged, never replaced with a default and never
//! an error. The facade sits directly upstream of UI rendering, where a
//! malformed token value should degrade to "no visual change" rather than
//! abort a render.

use tinct_color::{blend, hex_to_rgb, rgb_to_hex, Rgb};

/// The fixed blend ratios of the design system
///
/// These are design constants, not per-call knobs; callers needing other
/// amounts use the explicit-amount passthroughs on [`StateBlender`].
pub mod ratio {
    /// Hover states: 8% darker
    pub const HOVER_DARKER: f64 = 0.08;
    /// Pressed states: 12% darker
    pub const PRESSED_DARKER: f64 = 0.12;
    /// Focus states: 8% more saturated
    pub const FOCUS_SATURATE: f64 = 0.08;
    /// Disabled states: 12% less saturated
    pub const DISABLED_DESATURATE: f64 = 0.12;
    /// Icon optical balance: 8% lighter
    pub const ICON_LIGHTER: f64 = 0.08;
}

/// Fail-soft color derivation for interaction states
///
/// Instances are stateless and fully independent; constructing one per
/// component or per render is free and always yields identical results for
/// identical input.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateBlender;

impl StateBlender {
    pub fn new() -> Self {
        Self
    }

    /// Hover state: [`ratio::HOVER_DARKER`] darker.
    pub fn hover_color(&self, color: &str) -> String {
        self.darker_blend(color, ratio::HOVER_DARKER)
    }

    /// Pressed state: [`ratio::PRESSED_DARKER`] darker.
    pub fn pressed_color(&self, color: &str) -> String {
        self.darker_blend(color, ratio::PRESSED_DARKER)
    }

    /// Focus state: [`ratio::FOCUS_SATURATE`] more saturated.
    pub fn focus_color(&self, color: &str) -> String {
        self.saturate(color, ratio::FOCUS_SATURATE)
    }

    /// Disabled state: [`ratio::DISABLED_DESATURATE`] less saturated.
    pub fn disabled_color(&self, color: &str) -> String {
        self.desaturate(color, ratio::DISABLED_DESATURATE)
    }

    /// Icon optical balance: [`ratio::ICON_LIGHTER`] lighter, compensating
    /// for the perceived visual weight of glyphs next to text.
    pub fn icon_color(&self, color: &str) -> String {
        self.lighter_blend(color, ratio::ICON_LIGHTER)
    }

    /// Explicit-amount darker blend.
    pub fn darker_blend(&self, color: &str, amount: f64) -> String {
        apply(color, |rgb| blend::darker(rgb, amount))
    }

    /// Explicit-amount lighter blend.
    pub fn lighter_blend(&self, color: &str, amount: f64) -> String {
        apply(color, |rgb| blend::lighter(rgb, amount))
    }

    /// Explicit-amount saturation increase.
    pub fn saturate(&self, color: &str, amount: f64) -> String {
        apply(color, |rgb| blend::saturate(rgb, amount))
    }

    /// Explicit-amount saturation decrease.
    pub fn desaturate(&self, color: &str, amount: f64) -> String {
        apply(color, |rgb| blend::desaturate(rgb, amount))
    }
}

/// The fail-soft boundary: parse, blend, re-render — or hand back the
/// input untouched.
fn apply(color: &str, op: impl FnOnce(Rgb) -> Rgb) -> String {
    match hex_to_rgb(color) {
        Ok(rgb) => rgb_to_hex(op(rgb)),
        Err(_) => {
            tracing::trace!(input = color, "unparseable blend input, passing through");
            color.to_string()
        }
    }
}
