//! Swift projector
//!
//! Emits `UIColor` computed properties that resolve at runtime through
//! `UITraitCollection.userInterfaceStyle` and, when theme switching is
//! enabled, a theme string persisted in `UserDefaults`. Channel values are
//! rendered in [0, 1] with exactly three decimal places so generated files
//! are stable across runs.

use std::fmt::Write as _;

use tinct_color::Rgb;
use tinct_tokens::{ColorToken, SystemMode, TokenSet, UserTheme};

use crate::naming::lower_camel;
use crate::{normalized_hex, Artifact, EmitError, PipelineOptions};

const THEME_DEFAULTS_KEY: &str = "designSystemTheme";
const THEME_NOTIFICATION: &str = "DesignSystemThemeDidChange";

/// Swift generation options
#[derive(Clone, Debug)]
pub struct SwiftOptions {
    /// Name of the nested color namespace (and of the generated file)
    pub extension_name: String,
    /// Emit the four-branch (mode × theme) switch and UserDefaults lookup
    pub include_theme_switching: bool,
    /// Fallback theme when no preference has been persisted
    pub default_theme: UserTheme,
}

impl Default for SwiftOptions {
    fn default() -> Self {
        Self {
            extension_name: "DesignSystemColors".to_string(),
            include_theme_switching: true,
            default_theme: UserTheme::Base,
        }
    }
}

impl SwiftOptions {
    fn from_pipeline(options: &PipelineOptions) -> Self {
        Self {
            extension_name: options.swift_extension_name.clone(),
            include_theme_switching: options.include_theme_switching,
            default_theme: options.default_theme,
        }
    }
}

fn ui_color(rgb: Rgb) -> String {
    format!(
        "UIColor(red: {:.3}, green: {:.3}, blue: {:.3}, alpha: 1.0)",
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

fn cell_color(name: &str, token: &ColorToken, mode: SystemMode, theme: UserTheme) -> Result<String, EmitError> {
    // Normalize first so the error names the token, then reparse; the
    // normalized form is always parseable.
    let hex = normalized_hex(name, token.cell(mode, theme))?;
    let rgb = tinct_color::hex_to_rgb(&hex).map_err(|source| EmitError::InvalidColor {
        token: name.to_string(),
        source,
    })?;
    Ok(ui_color(rgb))
}

/// One dynamic-color computed property, indented for the enum body.
pub fn dynamic_color(
    name: &str,
    token: &ColorToken,
    options: &SwiftOptions,
) -> Result<String, EmitError> {
    dynamic_color_indented(name, token, options, "    ")
}

fn dynamic_color_indented(
    name: &str,
    token: &ColorToken,
    options: &SwiftOptions,
    indent: &str,
) -> Result<String, EmitError> {
    let camel = lower_camel(name);
    let mut out = String::new();

    if options.include_theme_switching {
        let dark_wcag = cell_color(name, token, SystemMode::Dark, UserTheme::Wcag)?;
        let dark_base = cell_color(name, token, SystemMode::Dark, UserTheme::Base)?;
        let light_wcag = cell_color(name, token, SystemMode::Light, UserTheme::Wcag)?;
        let light_base = cell_color(name, token, SystemMode::Light, UserTheme::Base)?;

        let _ = writeln!(out, "{indent}/// {name} color, resolved per system appearance and active theme");
        let _ = writeln!(out, "{indent}static var {camel}: UIColor {{");
        let _ = writeln!(out, "{indent}    return UIColor {{ traitCollection in");
        let _ = writeln!(
            out,
            "{indent}        let theme = UserDefaults.standard.string(forKey: \"{THEME_DEFAULTS_KEY}\") ?? \"{}\"",
            options.default_theme
        );
        let _ = writeln!(
            out,
            "{indent}        switch (traitCollection.userInterfaceStyle, theme) {{"
        );
        let _ = writeln!(out, "{indent}        case (.dark, \"wcag\"):");
        let _ = writeln!(out, "{indent}            return {dark_wcag}");
        let _ = writeln!(out, "{indent}        case (.dark, _):");
        let _ = writeln!(out, "{indent}            return {dark_base}");
        let _ = writeln!(out, "{indent}        case (_, \"wcag\"):");
        let _ = writeln!(out, "{indent}            return {light_wcag}");
        let _ = writeln!(out, "{indent}        default:");
        let _ = writeln!(out, "{indent}            return {light_base}");
        let _ = writeln!(out, "{indent}        }}");
        let _ = writeln!(out, "{indent}    }}");
        let _ = writeln!(out, "{indent}}}");
    } else {
        let dark = cell_color(name, token, SystemMode::Dark, options.default_theme)?;
        let light = cell_color(name, token, SystemMode::Light, options.default_theme)?;

        let _ = writeln!(out, "{indent}/// {name} color, resolved per system appearance");
        let _ = writeln!(out, "{indent}static var {camel}: UIColor {{");
        let _ = writeln!(out, "{indent}    return UIColor {{ traitCollection in");
        let _ = writeln!(out, "{indent}        switch traitCollection.userInterfaceStyle {{");
        let _ = writeln!(out, "{indent}        case .dark:");
        let _ = writeln!(out, "{indent}            return {dark}");
        let _ = writeln!(out, "{indent}        default:");
        let _ = writeln!(out, "{indent}            return {light}");
        let _ = writeln!(out, "{indent}        }}");
        let _ = writeln!(out, "{indent}    }}");
        let _ = writeln!(out, "{indent}}}");
    }

    Ok(out)
}

/// The complete generated Swift file.
pub fn extension_file(tokens: &TokenSet, options: &SwiftOptions) -> Result<String, EmitError> {
    let mut out = String::new();
    let name = &options.extension_name;

    let _ = writeln!(out, "//");
    let _ = writeln!(out, "//  {name}.swift");
    let _ = writeln!(out, "//  Design System Color Tokens");
    let _ = writeln!(out, "//");
    let _ = writeln!(out, "//  Generated with mode-aware and theme-aware support");
    let _ = writeln!(out, "//  Supports native iOS light/dark mode via UITraitCollection");
    let _ = writeln!(out, "//");
    out.push('\n');
    out.push_str("import UIKit\n\n");

    out.push_str("extension UIColor {\n\n");
    let _ = writeln!(out, "    /// Design System color tokens, resolved per appearance and theme");
    let _ = writeln!(out, "    enum {name} {{");
    out.push('\n');
    for (token_name, token) in tokens {
        out.push_str(&dynamic_color_indented(token_name, token, options, "        ")?);
        out.push('\n');
    }
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str("// MARK: - Theme Switching Helper\n\n");
    out.push_str("extension UserDefaults {\n\n");
    let _ = writeln!(out, "    /// The persisted design-system theme (\"base\" or \"wcag\")");
    let _ = writeln!(out, "    var designSystemTheme: String {{");
    let _ = writeln!(
        out,
        "        return string(forKey: \"{THEME_DEFAULTS_KEY}\") ?? \"{}\"",
        options.default_theme
    );
    out.push_str("    }\n\n");
    let _ = writeln!(out, "    func setDesignSystemTheme(_ theme: String) {{");
    let _ = writeln!(out, "        set(theme, forKey: \"{THEME_DEFAULTS_KEY}\")");
    out.push_str("        NotificationCenter.default.post(\n");
    let _ = writeln!(out, "            name: NSNotification.Name(\"{THEME_NOTIFICATION}\"),");
    out.push_str("            object: nil\n");
    out.push_str("        )\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(out)
}

/// Commented usage snippets for the generated extension.
pub fn usage_example(extension_name: &str) -> String {
    let mut out = String::new();

    out.push_str("// MARK: - Basic Usage\n");
    out.push_str("//\n");
    out.push_str("// Colors resolve through the generated extension:\n");
    let _ = writeln!(out, "view.backgroundColor = UIColor.{extension_name}.purple300");
    let _ = writeln!(out, "label.textColor = UIColor.{extension_name}.gray300");
    out.push('\n');

    out.push_str("// MARK: - Theme Switching\n");
    out.push_str("UserDefaults.standard.setDesignSystemTheme(\"wcag\")\n");
    out.push_str("UserDefaults.standard.setDesignSystemTheme(\"base\")\n\n");

    out.push_str("// MARK: - Observing Theme Changes\n");
    out.push_str("NotificationCenter.default.addObserver(\n");
    let _ = writeln!(out, "    forName: NSNotification.Name(\"{THEME_NOTIFICATION}\"),");
    out.push_str("    object: nil,\n");
    out.push_str("    queue: .main\n");
    out.push_str(") { _ in\n");
    out.push_str("    self.updateColors()\n");
    out.push_str("}\n\n");

    out.push_str("// MARK: - Automatic Mode Detection\n");
    out.push_str("// Colors automatically adapt to light/dark mode via\n");
    out.push_str("// UITraitCollection.userInterfaceStyle; no app code is required.\n");

    out
}

/// The full Swift artifact set.
pub fn artifacts(tokens: &TokenSet, options: &PipelineOptions) -> Result<Vec<Artifact>, EmitError> {
    let swift_options = SwiftOptions::from_pipeline(options);

    let mut artifacts = vec![Artifact {
        path: format!("{}.swift", swift_options.extension_name),
        content: extension_file(tokens, &swift_options)?,
    }];

    if options.include_blend_utilities {
        artifacts.push(Artifact {
            path: "BlendUtilities.swift".to_string(),
            content: crate::blend_utils::swift(&crate::blend_utils::BlendUtilityOptions::default()),
        });
    }

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_tokens::ModePair;

    fn purple() -> ColorToken {
        ColorToken {
            light: ModePair {
                base: "#8B5CF6".into(),
                wcag: "#7C3AED".into(),
            },
            dark: ModePair {
                base: "#A78BFA".into(),
                wcag: "#C4B5FD".into(),
            },
        }
    }

    fn purple_set() -> TokenSet {
        let mut tokens = TokenSet::new();
        tokens.insert("purple300".to_string(), purple());
        tokens
    }

    #[test]
    fn renders_channels_to_three_decimals() {
        let swift = dynamic_color("purple300", &purple(), &SwiftOptions::default()).unwrap();
        // #8B5CF6 = RGB(139, 92, 246)
        assert!(swift.contains("UIColor(red: 0.545, green: 0.361, blue: 0.965, alpha: 1.0)"));
        // #A78BFA = RGB(167, 139, 250)
        assert!(swift.contains("UIColor(red: 0.655, green: 0.545, blue: 0.980, alpha: 1.0)"));
        // #7C3AED = RGB(124, 58, 237)
        assert!(swift.contains("UIColor(red: 0.486, green: 0.227, blue: 0.929, alpha: 1.0)"));
        // #C4B5FD = RGB(196, 181, 253)
        assert!(swift.contains("UIColor(red: 0.769, green: 0.710, blue: 0.992, alpha: 1.0)"));
    }

    #[test]
    fn extremes_render_exactly() {
        let token = ColorToken {
            light: ModePair {
                base: "#000000".into(),
                wcag: "#000000".into(),
            },
            dark: ModePair {
                base: "#FFFFFF".into(),
                wcag: "#FFFFFF".into(),
            },
        };
        let swift = dynamic_color("anchor", &token, &SwiftOptions::default()).unwrap();
        assert!(swift.contains("UIColor(red: 0.000, green: 0.000, blue: 0.000, alpha: 1.0)"));
        assert!(swift.contains("UIColor(red: 1.000, green: 1.000, blue: 1.000, alpha: 1.0)"));
    }

    #[test]
    fn theme_switching_emits_four_branches() {
        let swift = dynamic_color("purple300", &purple(), &SwiftOptions::default()).unwrap();
        assert!(swift.contains("static var purple300: UIColor {"));
        assert!(swift.contains("UIColor { traitCollection in"));
        assert!(swift.contains("UserDefaults.standard.string(forKey: \"designSystemTheme\") ?? \"base\""));
        assert!(swift.contains("switch (traitCollection.userInterfaceStyle, theme) {"));
        assert!(swift.contains("case (.dark, \"wcag\"):"));
        assert!(swift.contains("case (.dark, _):"));
        assert!(swift.contains("case (_, \"wcag\"):"));
        assert!(swift.contains("default:"));
    }

    #[test]
    fn disabling_theme_switching_collapses_to_two_branches() {
        let options = SwiftOptions {
            include_theme_switching: false,
            ..SwiftOptions::default()
        };
        let swift = dynamic_color("purple300", &purple(), &options).unwrap();
        assert!(!swift.contains("UserDefaults"));
        assert!(!swift.contains("designSystemTheme"));
        assert!(swift.contains("switch traitCollection.userInterfaceStyle {"));
        assert!(swift.contains("case .dark:"));
        assert!(swift.contains("default:"));
    }

    #[test]
    fn token_name_is_lower_camel() {
        let swift = dynamic_color("Purple300", &purple(), &SwiftOptions::default()).unwrap();
        assert!(swift.contains("static var purple300: UIColor"));
    }

    #[test]
    fn wcag_default_theme_changes_the_fallback() {
        let options = SwiftOptions {
            default_theme: UserTheme::Wcag,
            ..SwiftOptions::default()
        };
        let swift = dynamic_color("purple300", &purple(), &options).unwrap();
        assert!(swift.contains("\"designSystemTheme\") ?? \"wcag\""));
    }

    #[test]
    fn extension_file_wraps_everything() {
        let swift = extension_file(&purple_set(), &SwiftOptions::default()).unwrap();
        assert!(swift.contains("//  DesignSystemColors.swift"));
        assert!(swift.contains("//  Design System Color Tokens"));
        assert!(swift.contains("//  Generated with mode-aware and theme-aware support"));
        assert!(swift.contains("//  Supports native iOS light/dark mode via UITraitCollection"));
        assert!(swift.contains("import UIKit"));
        assert!(swift.contains("extension UIColor {"));
        assert!(swift.contains("enum DesignSystemColors {"));
        assert!(swift.contains("static var purple300: UIColor"));
    }

    #[test]
    fn extension_file_includes_the_theme_helper() {
        let swift = extension_file(&purple_set(), &SwiftOptions::default()).unwrap();
        assert!(swift.contains("// MARK: - Theme Switching Helper"));
        assert!(swift.contains("extension UserDefaults {"));
        assert!(swift.contains("var designSystemTheme: String {"));
        assert!(swift.contains("func setDesignSystemTheme(_ theme: String) {"));
        assert!(swift.contains("NotificationCenter.default.post("));
        assert!(swift.contains("name: NSNotification.Name(\"DesignSystemThemeDidChange\"),"));
    }

    #[test]
    fn extension_helper_survives_disabled_switching_but_colors_do_not_use_it() {
        let options = SwiftOptions {
            include_theme_switching: false,
            ..SwiftOptions::default()
        };
        let swift = extension_file(&purple_set(), &options).unwrap();
        assert!(swift.contains("static var purple300: UIColor"));
        assert!(swift.contains("case .dark:"));
        assert!(!swift.contains("case (.dark, \"wcag\")"));
    }

    #[test]
    fn custom_extension_name_flows_through() {
        let options = SwiftOptions {
            extension_name: "CustomColors".to_string(),
            ..SwiftOptions::default()
        };
        let swift = extension_file(&purple_set(), &options).unwrap();
        assert!(swift.contains("//  CustomColors.swift"));
        assert!(swift.contains("enum CustomColors {"));
    }

    #[test]
    fn empty_token_set_still_produces_a_valid_shell() {
        let swift = extension_file(&TokenSet::new(), &SwiftOptions::default()).unwrap();
        assert!(swift.contains("extension UIColor {"));
        assert!(swift.contains("enum DesignSystemColors {"));
    }

    #[test]
    fn bad_token_aborts_generation() {
        let mut tokens = purple_set();
        tokens.get_mut("purple300").unwrap().light.wcag = "#XYZXYZ".into();
        let err = extension_file(&tokens, &SwiftOptions::default()).unwrap_err();
        assert!(err.to_string().contains("purple300"));
    }

    #[test]
    fn usage_example_covers_all_sections() {
        let example = usage_example("DesignSystemColors");
        assert!(example.contains("// MARK: - Basic Usage"));
        assert!(example.contains("view.backgroundColor = UIColor.DesignSystemColors.purple300"));
        assert!(example.contains("label.textColor = UIColor.DesignSystemColors.gray300"));
        assert!(example.contains("// MARK: - Theme Switching"));
        assert!(example.contains("UserDefaults.standard.setDesignSystemTheme(\"wcag\")"));
        assert!(example.contains("// MARK: - Observing Theme Changes"));
        assert!(example.contains("NotificationCenter.default.addObserver"));
        assert!(example.contains("self.updateColors()"));
        assert!(example.contains("// MARK: - Automatic Mode Detection"));
        assert!(example.contains("UITraitCollection.userInterfaceStyle"));
    }

    #[test]
    fn usage_example_honors_custom_names() {
        let example = usage_example("CustomColors");
        assert!(example.contains("UIColor.CustomColors.purple300"));
    }
}
