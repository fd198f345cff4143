//! Mode/theme resolution
//!
//! A resolver instance carries exactly one piece of state: the default
//! [`UserTheme`] applied when a caller does not pass an explicit theme.
//! Construct one resolver per logical scope; sharing an instance across
//! concurrent callers while calling [`set_default_theme`] is a caller-level
//! hazard this layer does not mitigate.
//!
//! [`set_default_theme`]: ModeThemeResolver::set_default_theme

use tinct_color::hex_to_rgb;

use crate::token::{ColorToken, ModePair, SystemMode, UserTheme};

/// Outcome of a single resolution, produced fresh on every call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The selected hex string, verbatim from the matrix
    pub color: String,
    pub mode: SystemMode,
    pub theme: UserTheme,
    /// True iff the caller did not supply an explicit theme
    pub used_default_theme: bool,
}

/// Resolves a [`ColorToken`] matrix against a (mode, theme) pair
#[derive(Clone, Debug, Default)]
pub struct ModeThemeResolver {
    default_theme: UserTheme,
}

impl ModeThemeResolver {
    /// Resolver with the standard `Base` default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with an explicit default theme (constructor injection).
    pub fn with_default_theme(default_theme: UserTheme) -> Self {
        Self { default_theme }
    }

    /// Select one matrix cell.
    ///
    /// Passing `None` for `theme` uses the resolver's default theme and
    /// marks the result accordingly. This is a direct lookup with no
    /// validation; the cell string is returned verbatim.
    pub fn resolve(
        &self,
        token: &ColorToken,
        mode: SystemMode,
        theme: Option<UserTheme>,
    ) -> ResolutionResult {
        let used_default_theme = theme.is_none();
        let theme = theme.unwrap_or(self.default_theme);

        ResolutionResult {
            color: token.cell(mode, theme).to_string(),
            mode,
            theme,
            used_default_theme,
        }
    }

    /// All four raw hex strings, with no selection logic.
    ///
    /// Built from four explicit [`resolve`] calls so it can never drift
    /// from single-cell resolution.
    ///
    /// [`resolve`]: ModeThemeResolver::resolve
    pub fn resolve_all(&self, token: &ColorToken) -> ColorToken {
        let cell = |mode, theme| self.resolve(token, mode, Some(theme)).color;

        ColorToken {
            light: ModePair {
                base: cell(SystemMode::Light, UserTheme::Base),
                wcag: cell(SystemMode::Light, UserTheme::Wcag),
            },
            dark: ModePair {
                base: cell(SystemMode::Dark, UserTheme::Base),
                wcag: cell(SystemMode::Dark, UserTheme::Wcag),
            },
        }
    }

    /// True iff all four cells parse as 6-digit hex colors. Never panics.
    pub fn validate(&self, token: &ColorToken) -> bool {
        [
            &token.light.base,
            &token.light.wcag,
            &token.dark.base,
            &token.dark.wcag,
        ]
        .into_iter()
        .all(|cell| hex_to_rgb(cell).is_ok())
    }

    pub fn default_theme(&self) -> UserTheme {
        self.default_theme
    }

    /// Affects only subsequent [`resolve`] calls without an explicit theme.
    ///
    /// [`resolve`]: ModeThemeResolver::resolve
    pub fn set_default_theme(&mut self, theme: UserTheme) {
        self.default_theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn resolves_explicit_mode_and_theme() {
        let resolver = ModeThemeResolver::new();
        let token = purple();

        let result = resolver.resolve(&token, SystemMode::Light, Some(UserTheme::Base));
        assert_eq!(result.color, "#8B5CF6");
        assert_eq!(result.mode, SystemMode::Light);
        assert_eq!(result.theme, UserTheme::Base);
        assert!(!result.used_default_theme);

        let result = resolver.resolve(&token, SystemMode::Dark, Some(UserTheme::Wcag));
        assert_eq!(result.color, "#C4B5FD");
    }

    #[test]
    fn default_theme_is_base_until_changed() {
        let mut resolver = ModeThemeResolver::new();
        let token = purple();

        let result = resolver.resolve(&token, SystemMode::Light, None);
        assert_eq!(result.color, "#8B5CF6");
        assert_eq!(result.theme, UserTheme::Base);
        assert!(result.used_default_theme);

        resolver.set_default_theme(UserTheme::Wcag);
        let result = resolver.resolve(&token, SystemMode::Light, None);
        assert_eq!(result.color, "#7C3AED");
        assert_eq!(result.theme, UserTheme::Wcag);
        assert!(result.used_default_theme);
    }

    #[test]
    fn explicit_theme_wins_over_default() {
        let resolver = ModeThemeResolver::with_default_theme(UserTheme::Wcag);
        let token = purple();

        let result = resolver.resolve(&token, SystemMode::Light, Some(UserTheme::Base));
        assert_eq!(result.color, "#8B5CF6");
        assert!(!result.used_default_theme);
    }

    #[test]
    fn resolve_all_matches_four_single_resolutions() {
        let resolver = ModeThemeResolver::new();
        let token = purple();
        let all = resolver.resolve_all(&token);

        assert_eq!(
            all.light.base,
            resolver
                .resolve(&token, SystemMode::Light, Some(UserTheme::Base))
                .color
        );
        assert_eq!(
            all.light.wcag,
            resolver
                .resolve(&token, SystemMode::Light, Some(UserTheme::Wcag))
                .color
        );
        assert_eq!(
            all.dark.base,
            resolver
                .resolve(&token, SystemMode::Dark, Some(UserTheme::Base))
                .color
        );
        assert_eq!(
            all.dark.wcag,
            resolver
                .resolve(&token, SystemMode::Dark, Some(UserTheme::Wcag))
                .color
        );
    }

    #[test]
    fn validate_accepts_well_formed_tokens() {
        let resolver = ModeThemeResolver::new();
        assert!(resolver.validate(&purple()));
    }

    #[test]
    fn validate_rejects_bad_cells_without_panicking() {
        let resolver = ModeThemeResolver::new();

        let mut token = purple();
        token.dark.wcag = "not-a-color".into();
        assert!(!resolver.validate(&token));

        let mut token = purple();
        token.light.base = String::new();
        assert!(!resolver.validate(&token));

        let mut token = purple();
        token.light.wcag = "#FFF".into();
        assert!(!resolver.validate(&token));
    }

    #[test]
    fn results_are_fresh_per_call() {
        let resolver = ModeThemeResolver::new();
        let token = purple();
        let a = resolver.resolve(&token, SystemMode::Light, None);
        let b = resolver.resolve(&token, SystemMode::Light, None);
        assert_eq!(a, b);
    }
}
