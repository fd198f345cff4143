//! Built-in token set
//!
//! The default palette shipped with the pipeline: purple, orange, cyan and
//! gray ramps (100–500) plus black and white. Light-mode `wcag` variants
//! sit one step darker than `base` for contrast on light surfaces;
//! dark-mode variants shift toward the light end of each ramp.

use crate::token::{ColorToken, ModePair, TokenSet};

fn token(light_base: &str, light_wcag: &str, dark_base: &str, dark_wcag: &str) -> ColorToken {
    ColorToken {
        light: ModePair {
            base: light_base.to_string(),
            wcag: light_wcag.to_string(),
        },
        dark: ModePair {
            base: dark_base.to_string(),
            wcag: dark_wcag.to_string(),
        },
    }
}

/// The default token set, in emission order.
pub fn builtin() -> TokenSet {
    let mut tokens = TokenSet::new();

    // Purple ramp (brand)
    tokens.insert("purple100".into(), token("#C4B5FD", "#A78BFA", "#DDD6FE", "#EDE9FE"));
    tokens.insert("purple200".into(), token("#A78BFA", "#8B5CF6", "#C4B5FD", "#DDD6FE"));
    tokens.insert("purple300".into(), token("#8B5CF6", "#7C3AED", "#A78BFA", "#C4B5FD"));
    tokens.insert("purple400".into(), token("#7C3AED", "#6D28D9", "#8B5CF6", "#A78BFA"));
    tokens.insert("purple500".into(), token("#6D28D9", "#5B21B6", "#7C3AED", "#8B5CF6"));

    // Orange ramp (accent)
    tokens.insert("orange100".into(), token("#FFA380", "#FF8A5C", "#FFE8DE", "#FFCDB8"));
    tokens.insert("orange200".into(), token("#FF8A5C", "#FF6B35", "#FFCDB8", "#FFB8A0"));
    tokens.insert("orange300".into(), token("#FF6B35", "#E65A2A", "#FFB8A0", "#FFA380"));
    tokens.insert("orange400".into(), token("#E65A2A", "#CC4A20", "#FFA380", "#FF8A5C"));
    tokens.insert("orange500".into(), token("#CC4A20", "#B23E1A", "#FF8A5C", "#FF6B35"));

    // Cyan ramp (informational)
    tokens.insert("cyan100".into(), token("#67E8F9", "#22D3EE", "#CFFAFE", "#ECFEFF"));
    tokens.insert("cyan200".into(), token("#22D3EE", "#06B6D4", "#A5F3FC", "#CFFAFE"));
    tokens.insert("cyan300".into(), token("#06B6D4", "#0891B2", "#67E8F9", "#A5F3FC"));
    tokens.insert("cyan400".into(), token("#0891B2", "#0E7490", "#22D3EE", "#67E8F9"));
    tokens.insert("cyan500".into(), token("#0E7490", "#155E75", "#06B6D4", "#22D3EE"));

    // Gray ramp (text and borders)
    tokens.insert("gray100".into(), token("#D1D5DB", "#9CA3AF", "#F3F4F6", "#F9FAFB"));
    tokens.insert("gray200".into(), token("#9CA3AF", "#6B7280", "#E5E7EB", "#F3F4F6"));
    tokens.insert("gray300".into(), token("#6B7280", "#4B5563", "#D1D5DB", "#E5E7EB"));
    tokens.insert("gray400".into(), token("#4B5563", "#374151", "#9CA3AF", "#D1D5DB"));
    tokens.insert("gray500".into(), token("#374151", "#1F2937", "#6B7280", "#9CA3AF"));

    // Anchors
    tokens.insert("black".into(), token("#000000", "#000000", "#000000", "#000000"));
    tokens.insert("white".into(), token("#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF"));

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ModeThemeResolver;
    use crate::token::{SystemMode, UserTheme};

    #[test]
    fn every_builtin_token_validates() {
        let resolver = ModeThemeResolver::new();
        for (name, token) in &builtin() {
            assert!(resolver.validate(token), "invalid builtin token {name}");
        }
    }

    #[test]
    fn brand_purple_matches_published_values() {
        let tokens = builtin();
        let purple300 = &tokens["purple300"];
        assert_eq!(purple300.cell(SystemMode::Light, UserTheme::Base), "#8B5CF6");
        assert_eq!(purple300.cell(SystemMode::Light, UserTheme::Wcag), "#7C3AED");
        assert_eq!(purple300.cell(SystemMode::Dark, UserTheme::Base), "#A78BFA");
        assert_eq!(purple300.cell(SystemMode::Dark, UserTheme::Wcag), "#C4B5FD");
    }

    #[test]
    fn emission_order_starts_with_the_purple_ramp() {
        let tokens = builtin();
        let names: Vec<&str> = tokens.keys().take(5).map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["purple100", "purple200", "purple300", "purple400", "purple500"]
        );
    }

    #[test]
    fn ramps_are_complete() {
        let tokens = builtin();
        for family in ["purple", "orange", "cyan", "gray"] {
            for step in ["100", "200", "300", "400", "500"] {
                let name = format!("{family}{step}");
                assert!(tokens.contains_key(&name), "missing {name}");
            }
        }
        assert!(tokens.contains_key("black"));
        assert!(tokens.contains_key("white"));
    }
}
