//! Android projector
//!
//! Emits two parallel static resource sets, one for the default appearance
//! (`values/`) and one for the night qualifier (`values-night/`), each
//! mapping snake_case token names to normalized uppercase hex. With theme
//! switching enabled, a second `_wcag`-suffixed pair is emitted per token
//! in both sets, and the generated Kotlin accessor object picks between
//! them through a SharedPreferences theme value.

use std::fmt::Write as _;

use indexmap::IndexMap;
use tinct_tokens::{SystemMode, TokenSet, UserTheme};

use crate::naming::{lower_camel, snake_case};
use crate::{normalized_hex, Artifact, EmitError, PipelineOptions};

const PREFS_NAME: &str = "design_system";
const PREFS_THEME_KEY: &str = "theme";

/// Android generation options
#[derive(Clone, Debug)]
pub struct AndroidOptions {
    /// Emit the `_wcag` resource variants and the Kotlin theme plumbing
    pub include_theme_switching: bool,
    /// Theme backing the non-suffixed resource files
    pub default_theme: UserTheme,
    /// Package of the generated Kotlin object
    pub package: String,
}

impl Default for AndroidOptions {
    fn default() -> Self {
        Self {
            include_theme_switching: true,
            default_theme: UserTheme::Base,
            package: "com.designsystem.tokens".to_string(),
        }
    }
}

impl AndroidOptions {
    fn from_pipeline(options: &PipelineOptions) -> Self {
        Self {
            include_theme_switching: options.include_theme_switching,
            default_theme: options.default_theme,
            package: options.android_package.clone(),
        }
    }
}

fn resource_xml(
    tokens: &TokenSet,
    mode: SystemMode,
    theme: UserTheme,
    wcag_suffix: bool,
) -> Result<String, EmitError> {
    let mode_label = match mode {
        SystemMode::Light => "Light Mode",
        SystemMode::Dark => "Dark Mode",
    };

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!--\n");
    if wcag_suffix {
        let _ = writeln!(out, "    Design System Color Tokens - {mode_label} (WCAG Theme)");
        out.push_str("    WCAG 2.2 compliant colors, selected at runtime by theme preference\n");
    } else {
        let _ = writeln!(out, "    Design System Color Tokens - {mode_label}");
        out.push_str("    Resolved through resource qualifiers; generated file\n");
    }
    out.push_str("-->\n");
    out.push_str("<resources>\n");

    for (name, token) in tokens {
        let hex = normalized_hex(name, token.cell(mode, theme))?;
        let snake = snake_case(name);
        if wcag_suffix {
            let _ = writeln!(out, "    <color name=\"{snake}_wcag\">{hex}</color>");
        } else {
            let _ = writeln!(out, "    <color name=\"{snake}\">{hex}</color>");
        }
    }

    out.push_str("</resources>\n");
    Ok(out)
}

/// `values/colors.xml`: default appearance, default theme.
pub fn light_colors_xml(tokens: &TokenSet, options: &AndroidOptions) -> Result<String, EmitError> {
    resource_xml(tokens, SystemMode::Light, options.default_theme, false)
}

/// `values-night/colors.xml`: night qualifier, default theme.
pub fn dark_colors_xml(tokens: &TokenSet, options: &AndroidOptions) -> Result<String, EmitError> {
    resource_xml(tokens, SystemMode::Dark, options.default_theme, false)
}

/// `values/colors_wcag.xml`: default appearance, `_wcag` resource names.
pub fn light_wcag_colors_xml(tokens: &TokenSet) -> Result<String, EmitError> {
    resource_xml(tokens, SystemMode::Light, UserTheme::Wcag, true)
}

/// `values-night/colors_wcag.xml`: night qualifier, `_wcag` resource names.
pub fn dark_wcag_colors_xml(tokens: &TokenSet) -> Result<String, EmitError> {
    resource_xml(tokens, SystemMode::Dark, UserTheme::Wcag, true)
}

/// The generated Kotlin accessor object.
pub fn kotlin_extension(tokens: &TokenSet, options: &AndroidOptions) -> String {
    let mut out = String::new();
    let default_theme = options.default_theme.to_string();

    out.push_str("/**\n");
    out.push_str(" * Design System Color Tokens\n");
    out.push_str(" *\n");
    out.push_str(" * Color accessors resolved through Android resource qualifiers\n");
    out.push_str(" * (values / values-night). Generated file.\n");
    out.push_str(" */\n");
    let _ = writeln!(out, "package {}", options.package);
    out.push('\n');
    out.push_str("import android.content.Context\n");
    out.push_str("import android.content.SharedPreferences\n");
    out.push_str("import androidx.annotation.ColorRes\n");
    out.push_str("import androidx.core.content.ContextCompat\n\n");

    out.push_str("object DesignSystemColors {\n");

    for name in tokens.keys() {
        let camel = lower_camel(name);
        let snake = snake_case(name);
        out.push('\n');
        if options.include_theme_switching {
            let _ = writeln!(out, "    fun {camel}(context: Context): Int {{");
            let _ = writeln!(
                out,
                "        val prefs = context.getSharedPreferences(\"{PREFS_NAME}\", Context.MODE_PRIVATE)"
            );
            let _ = writeln!(
                out,
                "        val theme = prefs.getString(\"{PREFS_THEME_KEY}\", \"{default_theme}\") ?: \"{default_theme}\""
            );
            let _ = writeln!(
                out,
                "        @ColorRes val colorRes = if (theme == \"wcag\") R.color.{snake}_wcag else R.color.{snake}"
            );
            out.push_str("        return ContextCompat.getColor(context, colorRes)\n");
            out.push_str("    }\n");
        } else {
            let _ = writeln!(out, "    fun {camel}(context: Context): Int {{");
            let _ = writeln!(
                out,
                "        return ContextCompat.getColor(context, R.color.{snake})"
            );
            out.push_str("    }\n");
        }
    }

    if options.include_theme_switching {
        out.push('\n');
        out.push_str("    /**\n");
        out.push_str("     * Persist the active theme (\"base\" or \"wcag\").\n");
        out.push_str("     */\n");
        out.push_str("    fun setTheme(context: Context, theme: String) {\n");
        let _ = writeln!(
            out,
            "        val prefs = context.getSharedPreferences(\"{PREFS_NAME}\", Context.MODE_PRIVATE)"
        );
        let _ = writeln!(
            out,
            "        prefs.edit().putString(\"{PREFS_THEME_KEY}\", theme).apply()"
        );
        out.push_str("    }\n\n");
        out.push_str("    fun getTheme(context: Context): String {\n");
        let _ = writeln!(
            out,
            "        val prefs = context.getSharedPreferences(\"{PREFS_NAME}\", Context.MODE_PRIVATE)"
        );
        let _ = writeln!(
            out,
            "        return prefs.getString(\"{PREFS_THEME_KEY}\", \"{default_theme}\") ?: \"{default_theme}\""
        );
        out.push_str("    }\n");
    }

    out.push_str("}\n");
    out
}

/// Commented usage snippets for the generated resources.
pub fn usage_example() -> String {
    let mut out = String::new();

    out.push_str("// MARK: - Basic Usage\n");
    out.push_str("view.setBackgroundColor(DesignSystemColors.purple300(context))\n");
    out.push_str("textView.setTextColor(DesignSystemColors.gray300(context))\n\n");

    out.push_str("// MARK: - Theme Switching\n");
    out.push_str("DesignSystemColors.setTheme(context, \"wcag\")\n");
    out.push_str("DesignSystemColors.setTheme(context, \"base\")\n");
    out.push_str("val currentTheme = DesignSystemColors.getTheme(context)\n\n");

    out.push_str("// MARK: - Automatic Mode Detection\n");
    out.push_str("// Colors automatically adapt to light/dark mode through the\n");
    out.push_str("// values/values-night resource qualifiers; no app code is required.\n");

    out
}

/// The keyed resource collection: XML blobs plus the Kotlin accessor.
pub fn resources(
    tokens: &TokenSet,
    options: &AndroidOptions,
) -> Result<IndexMap<String, String>, EmitError> {
    let mut files = IndexMap::new();

    files.insert(
        "values/colors.xml".to_string(),
        light_colors_xml(tokens, options)?,
    );
    files.insert(
        "values-night/colors.xml".to_string(),
        dark_colors_xml(tokens, options)?,
    );

    if options.include_theme_switching {
        files.insert(
            "values/colors_wcag.xml".to_string(),
            light_wcag_colors_xml(tokens)?,
        );
        files.insert(
            "values-night/colors_wcag.xml".to_string(),
            dark_wcag_colors_xml(tokens)?,
        );
    }

    files.insert(
        "kotlin/DesignSystemColors.kt".to_string(),
        kotlin_extension(tokens, options),
    );

    Ok(files)
}

/// The full Android artifact set, namespaced under `android/`.
pub fn artifacts(tokens: &TokenSet, options: &PipelineOptions) -> Result<Vec<Artifact>, EmitError> {
    let android_options = AndroidOptions::from_pipeline(options);

    let mut artifacts: Vec<Artifact> = resources(tokens, &android_options)?
        .into_iter()
        .map(|(path, content)| Artifact {
            path: format!("android/{path}"),
            content,
        })
        .collect();

    if options.include_blend_utilities {
        artifacts.push(Artifact {
            path: "android/kotlin/BlendUtilities.kt".to_string(),
            content: crate::blend_utils::kotlin(&crate::blend_utils::BlendUtilityOptions::default()),
        });
    }

    Ok(artifacts)
}
