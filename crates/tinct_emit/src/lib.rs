//! Platform projectors
//!
//! Stateless generators that consume resolved token matrices and render
//! platform-specific text artifacts:
//!
//! - [`web`]: a CSS custom-property stylesheet plus a JS data module
//! - [`swift`]: a `UIColor` extension with trait-collection dynamic colors
//! - [`android`]: resource-qualifier XML sets plus a Kotlin accessor object
//! - [`blend_utils`]: runtime blend-utility source per platform
//!
//! All projectors are pure: identical token sets and options produce
//! byte-identical output, so they may run in parallel freely. Failures are
//! strict — a malformed token aborts the artifact with an [`EmitError`]
//! naming the token; nothing is silently substituted.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tinct_color::{hex_to_rgb, rgb_to_hex, ColorParseError};
use tinct_tokens::{TokenSet, UserTheme};

pub mod android;
pub mod blend_utils;
pub mod naming;
pub mod swift;
pub mod web;

/// Why an artifact could not be generated
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("token {token}: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },
}

/// Output target, used as the strategy table for [`generate`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Platform {
    Web,
    Swift,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Web, Platform::Swift, Platform::Android];

    pub fn id(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Swift => "swift",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Platform::Web),
            "swift" | "ios" => Ok(Platform::Swift),
            "android" => Ok(Platform::Android),
            other => Err(format!("unknown platform {other:?}")),
        }
    }
}

/// One generated text artifact and its output-relative path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub content: String,
}

/// Cross-platform generation options
///
/// Per-module option structs ([`web::WebOptions`], [`swift::SwiftOptions`],
/// [`android::AndroidOptions`]) are derived from this by [`generate`];
/// callers driving a single projector directly can construct those
/// themselves.
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Emit the wcag contrast-theme variants and the persistence hooks
    pub include_theme_switching: bool,
    /// Emit the dark-mode media block in the web stylesheet
    pub include_dark_mode: bool,
    /// Theme backing the non-suffixed artifacts and runtime fallbacks
    pub default_theme: UserTheme,
    /// CSS custom-property prefix
    pub css_prefix: String,
    /// Name of the generated Swift color namespace
    pub swift_extension_name: String,
    /// Package of the generated Kotlin accessor object
    pub android_package: String,
    /// Also emit the runtime blend-utility source per platform
    pub include_blend_utilities: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            include_theme_switching: true,
            include_dark_mode: true,
            default_theme: UserTheme::Base,
            css_prefix: "--".to_string(),
            swift_extension_name: "DesignSystemColors".to_string(),
            android_package: "com.designsystem.tokens".to_string(),
            include_blend_utilities: true,
        }
    }
}

/// Generate all artifacts for one platform.
pub fn generate(
    platform: Platform,
    tokens: &TokenSet,
    options: &PipelineOptions,
) -> Result<Vec<Artifact>, EmitError> {
    tracing::debug!(platform = %platform, tokens = tokens.len(), "generating artifacts");
    match platform {
        Platform::Web => web::artifacts(tokens, options),
        Platform::Swift => swift::artifacts(tokens, options),
        Platform::Android => android::artifacts(tokens, options),
    }
}

/// Re-render a token cell as normalized uppercase hex, or fail naming the
/// token. This is where the strict layer surfaces inside projectors.
pub(crate) fn normalized_hex(token: &str, cell: &str) -> Result<String, EmitError> {
    hex_to_rgb(cell)
        .map(rgb_to_hex)
        .map_err(|source| EmitError::InvalidColor {
            token: token.to_string(),
            source,
        })
}
