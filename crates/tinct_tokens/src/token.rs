//! Color-token matrix types

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OS/runtime display mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemMode {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for SystemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemMode::Light => f.write_str("light"),
            SystemMode::Dark => f.write_str("dark"),
        }
    }
}

/// Application-level contrast preference
///
/// `Wcag` selects the higher-contrast variant of every token; `Base` is the
/// standard design palette.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTheme {
    #[default]
    Base,
    Wcag,
}

impl fmt::Display for UserTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserTheme::Base => f.write_str("base"),
            UserTheme::Wcag => f.write_str("wcag"),
        }
    }
}

/// One mode's pair of theme variants
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePair {
    pub base: String,
    pub wcag: String,
}

/// The atomic design-token input: a 2×2 matrix of hex strings
///
/// Cells are *claimed* 6-digit hex colors; the matrix shape is guaranteed
/// by construction (and enforced at the serde boundary for documents), but
/// cell syntax is only checked by [`validate`] or when a consumer converts
/// the value.
///
/// [`validate`]: crate::ModeThemeResolver::validate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    pub light: ModePair,
    pub dark: ModePair,
}

impl ColorToken {
    /// Direct matrix lookup.
    pub fn cell(&self, mode: SystemMode, theme: UserTheme) -> &str {
        let pair = match mode {
            SystemMode::Light => &self.light,
            SystemMode::Dark => &self.dark,
        };
        match theme {
            UserTheme::Base => &pair.base,
            UserTheme::Wcag => &pair.wcag,
        }
    }
}

/// A named token collection, in declaration order
///
/// Insertion order is load-bearing: every projector walks the set in order,
/// which keeps generated artifacts byte-deterministic.
pub type TokenSet = IndexMap<String, ColorToken>;
