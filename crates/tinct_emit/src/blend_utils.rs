//! Runtime blend-utility codegen
//!
//! Components sometimes need state colors for values only known at runtime,
//! so each platform also receives a small source file implementing the
//! blend calculator natively: TypeScript functions for web, a SwiftUI
//! `Color` extension for iOS and a Compose `Color` extension for Android.
//! All three embed the same HSL lightness/saturation formulas as the engine
//! itself, so a color blended on-device matches a color blended at build
//! time exactly.

/// Codegen toggles
#[derive(Clone, Debug)]
pub struct BlendUtilityOptions {
    /// Emit doc comments on the generated functions
    pub include_comments: bool,
    /// Embed the color-space helper types and conversions
    pub include_color_space_utils: bool,
}

impl Default for BlendUtilityOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_color_space_utils: true,
        }
    }
}

/// TypeScript blend utilities for the web platform.
pub fn web(options: &BlendUtilityOptions) -> String {
    let mut out = String::new();

    if options.include_comments {
        out.push_str(
            r"/**
 * Blend Utility Functions
 *
 * Runtime color calculation for state styling. All functions accept
 * hex color strings and blend amounts, returning the calculated
 * color as an uppercase hex string.
 */

",
        );
    }

    if options.include_color_space_utils {
        out.push_str(WEB_COLOR_SPACE_UTILS);
        out.push('\n');
    }

    if options.include_comments {
        out.push_str(
            r"/**
 * Multiply HSL lightness by (1 - blendValue). Used for hover and
 * pressed states.
 */
",
        );
    }
    out.push_str(
        r"export function darkerBlend(color: string, blendValue: number): string {
  const hsl = rgbToHsl(hexToRgb(color));
  hsl.l = Math.max(0.0, Math.min(1.0, hsl.l * (1 - blendValue)));
  return rgbToHex(hslToRgb(hsl));
}

",
    );

    if options.include_comments {
        out.push_str(
            r"/**
 * Move HSL lightness toward 1.0 by blendValue of the remaining
 * headroom. Used for icon optical balance.
 */
",
        );
    }
    out.push_str(
        r"export function lighterBlend(color: string, blendValue: number): string {
  const hsl = rgbToHsl(hexToRgb(color));
  hsl.l = Math.max(0.0, Math.min(1.0, hsl.l + (1 - hsl.l) * blendValue));
  return rgbToHex(hslToRgb(hsl));
}

",
    );

    if options.include_comments {
        out.push_str(
            r"/**
 * Move HSL saturation toward 1.0 by blendValue of the remaining
 * headroom. Used for focus states.
 */
",
        );
    }
    out.push_str(
        r"export function saturate(color: string, blendValue: number): string {
  const hsl = rgbToHsl(hexToRgb(color));
  hsl.s = Math.max(0.0, Math.min(1.0, hsl.s + (1 - hsl.s) * blendValue));
  return rgbToHex(hslToRgb(hsl));
}

",
    );

    if options.include_comments {
        out.push_str(
            r"/**
 * Multiply HSL saturation by (1 - blendValue). Used for disabled
 * states.
 */
",
        );
    }
    out.push_str(
        r"export function desaturate(color: string, blendValue: number): string {
  const hsl = rgbToHsl(hexToRgb(color));
  hsl.s = Math.max(0.0, Math.min(1.0, hsl.s * (1 - blendValue)));
  return rgbToHex(hslToRgb(hsl));
}
",
    );

    out
}

const WEB_COLOR_SPACE_UTILS: &str = r#"// Color Space Utilities
// Internal helpers for color conversion

interface RGB {
  r: number;
  g: number;
  b: number;
}

interface HSL {
  h: number;
  s: number;
  l: number;
}

function hexToRgb(hex: string): RGB {
  const cleanHex = hex.replace(/^#/, "");
  if (!/^[0-9A-Fa-f]{6}$/.test(cleanHex)) {
    throw new Error(`Invalid hex color: ${hex}`);
  }
  return {
    r: parseInt(cleanHex.substring(0, 2), 16),
    g: parseInt(cleanHex.substring(2, 4), 16),
    b: parseInt(cleanHex.substring(4, 6), 16)
  };
}

function rgbToHex(rgb: RGB): string {
  const toHex = (value: number): string => {
    const hex = Math.round(Math.max(0, Math.min(255, value))).toString(16);
    return hex.length === 1 ? "0" + hex : hex;
  };
  return `#${toHex(rgb.r)}${toHex(rgb.g)}${toHex(rgb.b)}`.toUpperCase();
}

function rgbToHsl(rgb: RGB): HSL {
  const r = rgb.r / 255;
  const g = rgb.g / 255;
  const b = rgb.b / 255;
  const max = Math.max(r, g, b);
  const min = Math.min(r, g, b);
  const delta = max - min;
  let h = 0;
  let s = 0;
  const l = (max + min) / 2;
  if (delta !== 0) {
    s = l > 0.5 ? delta / (2 - max - min) : delta / (max + min);
    switch (max) {
      case r:
        h = ((g - b) / delta + (g < b ? 6 : 0)) / 6;
        break;
      case g:
        h = ((b - r) / delta + 2) / 6;
        break;
      case b:
        h = ((r - g) / delta + 4) / 6;
        break;
    }
  }
  return { h: h * 360, s, l };
}

function hslToRgb(hsl: HSL): RGB {
  const h = hsl.h / 360;
  const s = hsl.s;
  const l = hsl.l;
  let r: number, g: number, b: number;
  if (s === 0) {
    r = g = b = l;
  } else {
    const hue2rgb = (p: number, q: number, t: number): number => {
      if (t < 0) t += 1;
      if (t > 1) t -= 1;
      if (t < 1 / 6) return p + (q - p) * 6 * t;
      if (t < 1 / 2) return q;
      if (t < 2 / 3) return p + (q - p) * (2 / 3 - t) * 6;
      return p;
    };
    const q = l < 0.5 ? l * (1 + s) : l + s - l * s;
    const p = 2 * l - q;
    r = hue2rgb(p, q, h + 1 / 3);
    g = hue2rgb(p, q, h);
    b = hue2rgb(p, q, h - 1 / 3);
  }
  return {
    r: Math.round(r * 255),
    g: Math.round(g * 255),
    b: Math.round(b * 255)
  };
}
"#;

/// SwiftUI blend utilities for the iOS platform.
pub fn swift(options: &BlendUtilityOptions) -> String {
    let mut out = String::new();

    if options.include_comments {
        out.push_str(
            r"//
// Blend Utility Functions
//
// Runtime color calculation for state styling. All methods accept
// blend amounts and return the calculated color.
//

",
        );
    }

    out.push_str("import SwiftUI\n\n");

    if options.include_color_space_utils {
        out.push_str(SWIFT_COLOR_SPACE_UTILS);
        out.push('\n');
    }

    out.push_str("extension Color {\n\n");

    if options.include_comments {
        out.push_str("    /// Multiply HSL lightness by (1 - amount); hover and pressed states.\n");
    }
    out.push_str(
        r"    func darkerBlend(_ amount: Double) -> Color {
        var hsl = self.toRGB().toHSL()
        hsl.l = max(0.0, min(1.0, hsl.l * (1 - amount)))
        return Color(rgb: hsl.toRGB())
    }

",
    );

    if options.include_comments {
        out.push_str("    /// Move HSL lightness toward 1.0 by amount; icon optical balance.\n");
    }
    out.push_str(
        r"    func lighterBlend(_ amount: Double) -> Color {
        var hsl = self.toRGB().toHSL()
        hsl.l = max(0.0, min(1.0, hsl.l + (1 - hsl.l) * amount))
        return Color(rgb: hsl.toRGB())
    }

",
    );

    if options.include_comments {
        out.push_str("    /// Move HSL saturation toward 1.0 by amount; focus states.\n");
    }
    out.push_str(
        r"    func saturate(_ amount: Double) -> Color {
        var hsl = self.toRGB().toHSL()
        hsl.s = max(0.0, min(1.0, hsl.s + (1 - hsl.s) * amount))
        return Color(rgb: hsl.toRGB())
    }

",
    );

    if options.include_comments {
        out.push_str("    /// Multiply HSL saturation by (1 - amount); disabled states.\n");
    }
    out.push_str(
        r"    func desaturate(_ amount: Double) -> Color {
        var hsl = self.toRGB().toHSL()
        hsl.s = max(0.0, min(1.0, hsl.s * (1 - amount)))
        return Color(rgb: hsl.toRGB())
    }
}
",
    );

    out
}

const SWIFT_COLOR_SPACE_UTILS: &str = r"// Color Space Utilities
// Internal helpers for color conversion

struct RGB {
    let r: Int
    let g: Int
    let b: Int

    func toHSL() -> HSL {
        let r = Double(self.r) / 255.0
        let g = Double(self.g) / 255.0
        let b = Double(self.b) / 255.0

        let max = Swift.max(r, g, b)
        let min = Swift.min(r, g, b)
        let delta = max - min

        var h: Double = 0
        var s: Double = 0
        let l = (max + min) / 2

        if delta != 0 {
            s = l > 0.5 ? delta / (2 - max - min) : delta / (max + min)

            switch max {
            case r:
                h = ((g - b) / delta + (g < b ? 6 : 0)) / 6
            case g:
                h = ((b - r) / delta + 2) / 6
            case b:
                h = ((r - g) / delta + 4) / 6
            default:
                break
            }
        }

        return HSL(h: h * 360, s: s, l: l)
    }
}

struct HSL {
    var h: Double
    var s: Double
    var l: Double

    func toRGB() -> RGB {
        let h = self.h / 360.0
        let s = self.s
        let l = self.l

        var r: Double, g: Double, b: Double

        if s == 0 {
            r = l
            g = l
            b = l
        } else {
            func hue2rgb(_ p: Double, _ q: Double, _ t: Double) -> Double {
                var t = t
                if t < 0 { t += 1 }
                if t > 1 { t -= 1 }
                if t < 1/6 { return p + (q - p) * 6 * t }
                if t < 1/2 { return q }
                if t < 2/3 { return p + (q - p) * (2/3 - t) * 6 }
                return p
            }

            let q = l < 0.5 ? l * (1 + s) : l + s - l * s
            let p = 2 * l - q
            r = hue2rgb(p, q, h + 1/3)
            g = hue2rgb(p, q, h)
            b = hue2rgb(p, q, h - 1/3)
        }

        return RGB(
            r: Int((r * 255).rounded()),
            g: Int((g * 255).rounded()),
            b: Int((b * 255).rounded())
        )
    }
}

extension Color {
    init(rgb: RGB) {
        self.init(
            red: Double(rgb.r) / 255.0,
            green: Double(rgb.g) / 255.0,
            blue: Double(rgb.b) / 255.0
        )
    }

    func toRGB() -> RGB {
        #if canImport(UIKit)
        var r: CGFloat = 0
        var g: CGFloat = 0
        var b: CGFloat = 0
        var a: CGFloat = 0
        UIColor(self).getRed(&r, green: &g, blue: &b, alpha: &a)
        return RGB(r: Int((r * 255).rounded()), g: Int((g * 255).rounded()), b: Int((b * 255).rounded()))
        #else
        let nsColor = NSColor(self)
        var r: CGFloat = 0
        var g: CGFloat = 0
        var b: CGFloat = 0
        var a: CGFloat = 0
        nsColor.getRed(&r, green: &g, blue: &b, alpha: &a)
        return RGB(r: Int((r * 255).rounded()), g: Int((g * 255).rounded()), b: Int((b * 255).rounded()))
        #endif
    }
}
";

/// Compose blend utilities for the Android platform.
pub fn kotlin(options: &BlendUtilityOptions) -> String {
    let mut out = String::new();

    if options.include_comments {
        out.push_str(
            r"//
// Blend Utility Functions
//
// Runtime color calculation for state styling. All functions accept
// blend amounts and return the calculated color.
//

",
        );
    }

    out.push_str("package com.designsystem.tokens\n\n");
    out.push_str("import androidx.compose.ui.graphics.Color\n");
    out.push_str("import kotlin.math.max\n");
    out.push_str("import kotlin.math.min\n");
    out.push_str("import kotlin.math.roundToInt\n\n");

    if options.include_color_space_utils {
        out.push_str(KOTLIN_COLOR_SPACE_UTILS);
        out.push('\n');
    }

    if options.include_comments {
        out.push_str("/** Multiply HSL lightness by (1 - amount); hover and pressed states. */\n");
    }
    out.push_str(
        r"fun Color.darkerBlend(amount: Float): Color {
    val hsl = this.toRGB().toHSL()
    val blended = hsl.copy(l = max(0.0f, min(1.0f, hsl.l * (1 - amount))))
    return blended.toRGB().toColor()
}

",
    );

    if options.include_comments {
        out.push_str("/** Move HSL lightness toward 1.0 by amount; icon optical balance. */\n");
    }
    out.push_str(
        r"fun Color.lighterBlend(amount: Float): Color {
    val hsl = this.toRGB().toHSL()
    val blended = hsl.copy(l = max(0.0f, min(1.0f, hsl.l + (1 - hsl.l) * amount)))
    return blended.toRGB().toColor()
}

",
    );

    if options.include_comments {
        out.push_str("/** Move HSL saturation toward 1.0 by amount; focus states. */\n");
    }
    out.push_str(
        r"fun Color.saturate(amount: Float): Color {
    val hsl = this.toRGB().toHSL()
    val blended = hsl.copy(s = max(0.0f, min(1.0f, hsl.s + (1 - hsl.s) * amount)))
    return blended.toRGB().toColor()
}

",
    );

    if options.include_comments {
        out.push_str("/** Multiply HSL saturation by (1 - amount); disabled states. */\n");
    }
    out.push_str(
        r"fun Color.desaturate(amount: Float): Color {
    val hsl = this.toRGB().toHSL()
    val blended = hsl.copy(s = max(0.0f, min(1.0f, hsl.s * (1 - amount))))
    return blended.toRGB().toColor()
}
",
    );

    out
}

const KOTLIN_COLOR_SPACE_UTILS: &str = r"// Color Space Utilities
// Internal helpers for color conversion

data class RGB(val r: Int, val g: Int, val b: Int) {
    fun toHSL(): HSL {
        val r = this.r / 255.0f
        val g = this.g / 255.0f
        val b = this.b / 255.0f

        val max = maxOf(r, g, b)
        val min = minOf(r, g, b)
        val delta = max - min

        var h = 0f
        var s = 0f
        val l = (max + min) / 2

        if (delta != 0f) {
            s = if (l > 0.5f) delta / (2 - max - min) else delta / (max + min)

            h = when (max) {
                r -> ((g - b) / delta + (if (g < b) 6 else 0)) / 6
                g -> ((b - r) / delta + 2) / 6
                b -> ((r - g) / delta + 4) / 6
                else -> 0f
            }
        }

        return HSL(h = h * 360, s = s, l = l)
    }

    fun toColor(): Color {
        return Color(
            red = r / 255f,
            green = g / 255f,
            blue = b / 255f
        )
    }
}

data class HSL(val h: Float, val s: Float, val l: Float) {
    fun toRGB(): RGB {
        val h = this.h / 360.0f
        val s = this.s
        val l = this.l

        val r: Float
        val g: Float
        val b: Float

        if (s == 0f) {
            r = l
            g = l
            b = l
        } else {
            fun hue2rgb(p: Float, q: Float, t: Float): Float {
                var t = t
                if (t < 0) t += 1
                if (t > 1) t -= 1
                if (t < 1f / 6) return p + (q - p) * 6 * t
                if (t < 1f / 2) return q
                if (t < 2f / 3) return p + (q - p) * (2f / 3 - t) * 6
                return p
            }

            val q = if (l < 0.5f) l * (1 + s) else l + s - l * s
            val p = 2 * l - q
            r = hue2rgb(p, q, h + 1f / 3)
            g = hue2rgb(p, q, h)
            b = hue2rgb(p, q, h - 1f / 3)
        }

        return RGB(
            r = (r * 255).roundToInt(),
            g = (g * 255).roundToInt(),
            b = (b * 255).roundToInt()
        )
    }
}

fun Color.toRGB(): RGB {
    return RGB(
        r = (red * 255).roundToInt(),
        g = (green * 255).roundToInt(),
        b = (blue * 255).roundToInt()
    )
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_exports_all_four_functions() {
        let ts = web(&BlendUtilityOptions::default());
        for signature in [
            "export function darkerBlend(color: string, blendValue: number): string {",
            "export function lighterBlend(color: string, blendValue: number): string {",
            "export function saturate(color: string, blendValue: number): string {",
            "export function desaturate(color: string, blendValue: number): string {",
        ] {
            assert!(ts.contains(signature), "missing {signature}");
        }
    }

    #[test]
    fn web_embeds_color_space_helpers() {
        let ts = web(&BlendUtilityOptions::default());
        assert!(ts.contains("function hexToRgb(hex: string): RGB {"));
        assert!(ts.contains("function rgbToHex(rgb: RGB): string {"));
        assert!(ts.contains("function rgbToHsl(rgb: RGB): HSL {"));
        assert!(ts.contains("function hslToRgb(hsl: HSL): RGB {"));
        assert!(ts.contains("const max = Math.max(r, g, b)"));
        assert!(ts.contains("hue2rgb"));
    }

    #[test]
    fn web_uses_the_engine_lightness_formulas() {
        let ts = web(&BlendUtilityOptions::default());
        assert!(ts.contains("hsl.l * (1 - blendValue)"));
        assert!(ts.contains("hsl.l + (1 - hsl.l) * blendValue"));
        assert!(ts.contains("hsl.s + (1 - hsl.s) * blendValue"));
        assert!(ts.contains("hsl.s * (1 - blendValue)"));
        assert!(ts.contains("Math.max(0.0, Math.min(1.0"));
    }

    #[test]
    fn comment_toggle_strips_docs() {
        let options = BlendUtilityOptions {
            include_comments: false,
            include_color_space_utils: true,
        };
        let ts = web(&options);
        assert!(!ts.contains("Blend Utility Functions"));
        assert!(ts.contains("export function darkerBlend"));
    }

    #[test]
    fn color_space_toggle_strips_helpers() {
        let options = BlendUtilityOptions {
            include_comments: true,
            include_color_space_utils: false,
        };
        let ts = web(&options);
        assert!(!ts.contains("function hexToRgb"));
        assert!(ts.contains("export function darkerBlend"));
    }

    #[test]
    fn swift_extends_color_with_all_four_methods() {
        let swift_src = swift(&BlendUtilityOptions::default());
        assert!(swift_src.contains("import SwiftUI"));
        assert!(swift_src.contains("extension Color {"));
        for signature in [
            "func darkerBlend(_ amount: Double) -> Color {",
            "func lighterBlend(_ amount: Double) -> Color {",
            "func saturate(_ amount: Double) -> Color {",
            "func desaturate(_ amount: Double) -> Color {",
        ] {
            assert!(swift_src.contains(signature), "missing {signature}");
        }
        assert!(swift_src.contains("hsl.l * (1 - amount)"));
        assert!(swift_src.contains("max(0.0, min(1.0"));
        assert!(swift_src.contains("struct RGB {"));
        assert!(swift_src.contains("struct HSL {"));
        assert!(swift_src.contains("max = Swift.max(r, g, b)"));
    }

    #[test]
    fn kotlin_extends_color_with_all_four_functions() {
        let kt = kotlin(&BlendUtilityOptions::default());
        assert!(kt.contains("package com.designsystem.tokens"));
        assert!(kt.contains("import androidx.compose.ui.graphics.Color"));
        for signature in [
            "fun Color.darkerBlend(amount: Float): Color {",
            "fun Color.lighterBlend(amount: Float): Color {",
            "fun Color.saturate(amount: Float): Color {",
            "fun Color.desaturate(amount: Float): Color {",
        ] {
            assert!(kt.contains(signature), "missing {signature}");
        }
        assert!(kt.contains("hsl.l * (1 - amount)"));
        assert!(kt.contains("max(0.0f, min(1.0f"));
        assert!(kt.contains("data class RGB(val r: Int, val g: Int, val b: Int)"));
        assert!(kt.contains("data class HSL(val h: Float, val s: Float, val l: Float)"));
        assert!(kt.contains("max = maxOf(r, g, b)"));
    }

    #[test]
    fn all_platforms_share_the_hue2rgb_reconstruction() {
        let options = BlendUtilityOptions::default();
        assert!(web(&options).contains("hue2rgb"));
        assert!(swift(&options).contains("hue2rgb"));
        assert!(kotlin(&options).contains("hue2rgb"));
    }
}
