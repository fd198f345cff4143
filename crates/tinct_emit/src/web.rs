//! Web projector
//!
//! Emits a CSS custom-property stylesheet and a companion JS data module.
//! The stylesheet declares each token under `:root` with the light/base
//! value; theme switching adds a `:root[data-theme="wcag"]` override and
//! dark-mode support adds a `prefers-color-scheme` media block (with the
//! theme override nested inside it). The data module carries the full
//! resolved matrix plus runtime helpers for callers that need values in JS.

use std::fmt::Write as _;

use tinct_tokens::{SystemMode, TokenSet, UserTheme};

use crate::{normalized_hex, Artifact, EmitError, PipelineOptions};

/// Stylesheet and data-module options
#[derive(Clone, Debug)]
pub struct WebOptions {
    /// Custom-property prefix; the token name is appended verbatim
    pub prefix: String,
    /// Emit the `[data-theme="wcag"]` override rules
    pub include_theme_switching: bool,
    /// Emit the `prefers-color-scheme: dark` media block
    pub include_dark_mode: bool,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            prefix: "--".to_string(),
            include_theme_switching: true,
            include_dark_mode: true,
        }
    }
}

impl WebOptions {
    fn from_pipeline(options: &PipelineOptions) -> Self {
        Self {
            prefix: options.css_prefix.clone(),
            include_theme_switching: options.include_theme_switching,
            include_dark_mode: options.include_dark_mode,
        }
    }
}

/// Generate the stylesheet.
pub fn stylesheet(tokens: &TokenSet, options: &WebOptions) -> Result<String, EmitError> {
    let mut out = String::new();
    out.push_str("/* Design system color tokens (generated) */\n\n");

    write_rule(&mut out, ":root", tokens, SystemMode::Light, UserTheme::Base, options, "")?;

    if options.include_theme_switching {
        out.push('\n');
        write_rule(
            &mut out,
            ":root[data-theme=\"wcag\"]",
            tokens,
            SystemMode::Light,
            UserTheme::Wcag,
            options,
            "",
        )?;
    }

    if options.include_dark_mode {
        out.push('\n');
        out.push_str("@media (prefers-color-scheme: dark) {\n");
        write_rule(&mut out, ":root", tokens, SystemMode::Dark, UserTheme::Base, options, "  ")?;
        if options.include_theme_switching {
            out.push('\n');
            write_rule(
                &mut out,
                ":root[data-theme=\"wcag\"]",
                tokens,
                SystemMode::Dark,
                UserTheme::Wcag,
                options,
                "  ",
            )?;
        }
        out.push_str("}\n");
    }

    Ok(out)
}

fn write_rule(
    out: &mut String,
    selector: &str,
    tokens: &TokenSet,
    mode: SystemMode,
    theme: UserTheme,
    options: &WebOptions,
    indent: &str,
) -> Result<(), EmitError> {
    let _ = writeln!(out, "{indent}{selector} {{");
    for (name, token) in tokens {
        let hex = normalized_hex(name, token.cell(mode, theme))?;
        let _ = writeln!(out, "{indent}  {}{name}: {hex};", options.prefix);
    }
    let _ = writeln!(out, "{indent}}}");
    Ok(())
}

/// Generate the companion data module: the full resolved matrix, a runtime
/// mode-detection helper, and a lookup that throws on unknown token names.
pub fn data_module(tokens: &TokenSet) -> Result<String, EmitError> {
    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(" * Design system color tokens (generated)\n");
    out.push_str(" *\n");
    out.push_str(" * Full resolved matrix per token plus runtime lookup helpers.\n");
    out.push_str(" */\n\n");

    out.push_str("export const colorTokens = {\n");
    for (name, token) in tokens {
        let light_base = normalized_hex(name, &token.light.base)?;
        let light_wcag = normalized_hex(name, &token.light.wcag)?;
        let dark_base = normalized_hex(name, &token.dark.base)?;
        let dark_wcag = normalized_hex(name, &token.dark.wcag)?;
        let _ = writeln!(out, "  {name}: {{");
        let _ = writeln!(out, "    light: {{ base: \"{light_base}\", wcag: \"{light_wcag}\" }},");
        let _ = writeln!(out, "    dark: {{ base: \"{dark_base}\", wcag: \"{dark_wcag}\" }},");
        out.push_str("  },\n");
    }
    out.push_str("};\n\n");

    out.push_str("/** Current system display mode: \"dark\" or \"light\". */\n");
    out.push_str("export function detectSystemMode() {\n");
    out.push_str("  if (typeof window !== \"undefined\" &&\n");
    out.push_str("      window.matchMedia(\"(prefers-color-scheme: dark)\").matches) {\n");
    out.push_str("    return \"dark\";\n");
    out.push_str("  }\n");
    out.push_str("  return \"light\";\n");
    out.push_str("}\n\n");

    out.push_str("/** Resolve one token value. Throws on unknown token names. */\n");
    out.push_str("export function getColor(name, mode = detectSystemMode(), theme = \"base\") {\n");
    out.push_str("  const token = colorTokens[name];\n");
    out.push_str("  if (!token) {\n");
    out.push_str("    throw new Error(`Unknown color token: ${name}`);\n");
    out.push_str("  }\n");
    out.push_str("  return token[mode][theme];\n");
    out.push_str("}\n");

    Ok(out)
}

/// The full web artifact set.
pub fn artifacts(tokens: &TokenSet, options: &PipelineOptions) -> Result<Vec<Artifact>, EmitError> {
    let web_options = WebOptions::from_pipeline(options);

    let mut artifacts = vec![
        Artifact {
            path: "DesignTokens.web.css".to_string(),
            content: stylesheet(tokens, &web_options)?,
        },
        Artifact {
            path: "designTokens.web.js".to_string(),
            content: data_module(tokens)?,
        },
    ];

    if options.include_blend_utilities {
        artifacts.push(Artifact {
            path: "blendUtilities.web.ts".to_string(),
            content: crate::blend_utils::web(&crate::blend_utils::BlendUtilityOptions::default()),
        });
    }

    Ok(artifacts)
}
