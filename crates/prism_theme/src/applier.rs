//! Runtime theme application
//!
//! [`ThemeApplier`] is the only writer of theme state on a
//! [`RenderSurface`]. The theme attribute (default `data-theme`) is the
//! single source of truth; the `dark` class is a projection of it, derived
//! from the applied theme's color scheme and rewritten on every change.
//!
//! Unknown theme names are a soft failure: a warning is logged and the
//! surface is left untouched.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::registry::ThemeRegistry;
use crate::surface::RenderSurface;
use crate::theme::ColorScheme;

/// Attribute written on the document root
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Class mirrored onto the document root while a dark theme is applied
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Reference theme names for the light/dark toggle axis
pub const LIGHT_THEME: &str = "light";
pub const DARK_THEME: &str = "dark";

/// Where on the surface the theme is written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyOptions {
    pub attribute: String,
}

impl ApplyOptions {
    pub fn attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self::attribute(DEFAULT_ATTRIBUTE)
    }
}

/// Theme state as observed on the surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedTheme {
    Unset,
    Applied(String),
}

impl AppliedTheme {
    /// Applied name, or `light` when unset
    pub fn name_or_default(&self) -> &str {
        match self {
            AppliedTheme::Unset => LIGHT_THEME,
            AppliedTheme::Applied(name) => name,
        }
    }
}

/// Next theme on the light/dark axis.
///
/// `light` goes to `dark`, `dark` goes to `light`, and anything else snaps
/// to `dark`.
pub fn toggled_theme_name(current: &str) -> &'static str {
    match current {
        LIGHT_THEME => DARK_THEME,
        DARK_THEME => LIGHT_THEME,
        _ => DARK_THEME,
    }
}

/// Writes, reads, toggles and removes the active theme on a surface
pub struct ThemeApplier {
    registry: Arc<ThemeRegistry>,
    /// `None` models a context without a rendering surface
    surface: Option<Arc<dyn RenderSurface>>,
    dark_class: String,
}

impl ThemeApplier {
    pub fn new(registry: Arc<ThemeRegistry>, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            registry,
            surface: Some(surface),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }

    /// Applier with no surface; reads return `light`, writes do nothing
    pub fn detached(registry: Arc<ThemeRegistry>) -> Self {
        Self {
            registry,
            surface: None,
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }

    /// Override the class mirrored for dark themes
    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    // ========== Transitions ==========

    /// Apply a registered theme. Returns `false` (and changes nothing) for
    /// unknown names.
    pub fn apply_theme(&self, name: &str, options: &ApplyOptions) -> bool {
        if !self.registry.has_theme(name) {
            warn!(theme = name, "theme not found; surface left unchanged");
            return false;
        }
        let Some(surface) = &self.surface else {
            debug!(theme = name, "no rendering surface; apply skipped");
            return true;
        };

        if surface.attribute(&options.attribute).as_deref() != Some(name) {
            debug!(theme = name, attribute = %options.attribute, "applying theme");
            surface.set_attribute(&options.attribute, name);
        }
        self.sync_dark_class(surface.as_ref(), self.registry.scheme_of(name));
        true
    }

    /// Clear the theme attribute and its class projection
    pub fn remove_theme(&self, options: &ApplyOptions) {
        if let Some(surface) = &self.surface {
            debug!(attribute = %options.attribute, "removing theme");
            surface.remove_attribute(&options.attribute);
            surface.remove_class(&self.dark_class);
        }
    }

    /// Flip between `light` and `dark`. Returns the name now applied.
    pub fn toggle_theme(&self, options: &ApplyOptions) -> String {
        let current = self.current_theme(options);
        let next = toggled_theme_name(&current);
        debug!(from = %current, to = next, "toggling theme");
        self.apply_theme(next, options);
        self.current_theme(options)
    }

    // ========== Reads ==========

    /// Applied theme name; `light` when unset or detached
    pub fn current_theme(&self, options: &ApplyOptions) -> String {
        self.state(options).name_or_default().to_string()
    }

    pub fn state(&self, options: &ApplyOptions) -> AppliedTheme {
        self.surface
            .as_ref()
            .and_then(|surface| surface.attribute(&options.attribute))
            .map_or(AppliedTheme::Unset, AppliedTheme::Applied)
    }

    fn sync_dark_class(&self, surface: &dyn RenderSurface, scheme: Option<ColorScheme>) {
        match scheme {
            Some(ColorScheme::Dark) => surface.add_class(&self.dark_class),
            _ => surface.remove_class(&self.dark_class),
        }
    }
}
