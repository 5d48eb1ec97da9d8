//! Prism Theme Engine
//!
//! Design tokens composed into named themes, flattened into CSS custom
//! properties, and applied to a document root at runtime.
//!
//! # Overview
//!
//! Data flows one way:
//!
//! ```text
//! tokens → create_theme → Theme → generate_css_variables → CssVariableMap
//!                                                   ThemeApplier → surface
//! ```
//!
//! - **Design tokens** ([`tokens`]): compiled-in palettes and scales
//! - **Composition** ([`create_theme`], [`compose`]): shared neutral/semantic
//!   colors plus one accent [`Variant`]
//! - **Flattening** ([`generate_css_variables`]): nested tree to `--a-b-c`
//! - **Registry** ([`ThemeRegistry`]): named catalog with one default
//! - **Runtime** ([`ThemeApplier`], [`ThemeSession`]): attribute writes,
//!   light/dark toggle, persisted choice, system preference
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use prism_theme::{theme_variables, ThemeRegistry, DEFAULT_PREFIX};
//!
//! let registry = ThemeRegistry::global();
//! let dark = registry.get_theme("dark").unwrap();
//! let vars = theme_variables(dark, DEFAULT_PREFIX);
//! assert!(vars.contains_key("--colors-primary-500"));
//! ```
//!
//! # Errors
//!
//! Composition with an unknown variant key is a hard error
//! ([`ThemeError::UnknownVariant`]). Registry lookups and applying an unknown
//! theme name are soft: they return `None`/`false` and log a warning.

pub mod applier;
pub mod composer;
pub mod config;
pub mod css;
mod error;
pub mod platform;
pub mod registry;
pub mod session;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod tokens;
pub mod tree;

// Re-export commonly used types
pub use applier::{toggled_theme_name, AppliedTheme, ApplyOptions, ThemeApplier};
pub use composer::{compose, create_theme, Variant};
pub use config::PrismConfig;
pub use css::{
    generate_css_variables, render_stylesheet, theme_selector, theme_variables, CssVariableMap,
    DEFAULT_PREFIX,
};
pub use error::{Result, ThemeError};
pub use platform::{
    detect_system_color_scheme, ColorSchemeSource, FixedColorScheme, SystemColorScheme,
};
pub use registry::{ThemeDescriptor, ThemeRecipe, ThemeRegistry};
pub use session::{AppliedThemeState, PreferenceSource, ThemeSession};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use surface::{DocumentRoot, RenderSurface, RootSnapshot};
pub use theme::{Category, ColorScheme, Theme, ThemeColors};
pub use tokens::{ColorRole, StepKey, Token, TokenScale};
pub use tree::TokenNode;
