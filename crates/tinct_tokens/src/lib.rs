//! Token model and resolution
//!
//! The middle layer of the tinct pipeline:
//!
//! - [`ColorToken`]: the 2×2 (light/dark × base/wcag) hex matrix that is
//!   the atomic design-token input
//! - [`ModeThemeResolver`]: selects one matrix cell for a requested
//!   (system mode, user theme) pair, with a per-instance default theme
//! - [`StateBlender`]: fail-soft facade deriving hover / pressed / focus /
//!   disabled / icon colors from a base color at fixed ratios
//! - [`palette::builtin`]: the built-in token set
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_tokens::{ColorToken, ModePair, ModeThemeResolver, SystemMode};
//!
//! let token = ColorToken {
//!     light: ModePair { base: "#8B5CF6".into(), wcag: "#7C3AED".into() },
//!     dark: ModePair { base: "#A78BFA".into(), wcag: "#C4B5FD".into() },
//! };
//!
//! let resolver = ModeThemeResolver::new();
//! let result = resolver.resolve(&token, SystemMode::Light, None);
//! assert_eq!(result.color, "#8B5CF6");
//! assert!(result.used_default_theme);
//! ```

pub mod blend;
pub mod palette;
pub mod resolver;
pub mod token;

pub use blend::{ratio, StateBlender};
pub use resolver::{ModeThemeResolver, ResolutionResult};
pub use token::{ColorToken, ModePair, SystemMode, TokenSet, UserTheme};
