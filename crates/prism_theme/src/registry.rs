//! Theme registry
//!
//! An ordered catalog of [`ThemeDescriptor`]s. Payloads are composed lazily
//! the first time a theme is requested and cached for the life of the
//! registry, so enumerating names never materializes a theme.
//!
//! Lookups are soft: an unknown name is `None`, not an error.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::composer::{compose, Variant};
use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, Theme};

/// Name of the reference theme used when no descriptor is flagged default
pub const REFERENCE_THEME: &str = "light";

static GLOBAL_REGISTRY: OnceLock<Arc<ThemeRegistry>> = OnceLock::new();

/// Registry metadata for one theme
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub default: bool,
}

impl ThemeDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// How to compose a registered theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecipe {
    pub variant: Variant,
    #[serde(default)]
    pub scheme: ColorScheme,
}

impl ThemeRecipe {
    pub fn new(variant: Variant, scheme: ColorScheme) -> Self {
        Self { variant, scheme }
    }
}

struct Entry {
    descriptor: ThemeDescriptor,
    recipe: ThemeRecipe,
    theme: OnceLock<Theme>,
}

impl Entry {
    fn theme(&self) -> &Theme {
        self.theme.get_or_init(|| {
            debug!(theme = %self.descriptor.name, "materializing theme");
            compose(self.recipe.variant, self.recipe.scheme).with_name(&self.descriptor.name)
        })
    }
}

/// Enumerable catalog of theme names with one designated default
#[derive(Default)]
pub struct ThemeRegistry {
    entries: IndexMap<String, Entry>,
    reference: OnceLock<Theme>,
}

impl ThemeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in catalog: `light` (default), `dark`, `purple`, `emerald`, `orange`
    pub fn builtin() -> Self {
        let entries = [
            (
                ThemeDescriptor::new("light", "Light").as_default(),
                ThemeRecipe::new(Variant::Default, ColorScheme::Light),
            ),
            (
                ThemeDescriptor::new("dark", "Dark"),
                ThemeRecipe::new(Variant::Default, ColorScheme::Dark),
            ),
            (
                ThemeDescriptor::new("purple", "Purple"),
                ThemeRecipe::new(Variant::Purple, ColorScheme::Light),
            ),
            (
                ThemeDescriptor::new("emerald", "Emerald"),
                ThemeRecipe::new(Variant::Emerald, ColorScheme::Light),
            ),
            (
                ThemeDescriptor::new("orange", "Orange"),
                ThemeRecipe::new(Variant::Orange, ColorScheme::Light),
            ),
        ];

        let mut registry = Self::new();
        for (descriptor, recipe) in entries {
            registry.insert(descriptor, recipe);
        }
        registry
    }

    /// Build from descriptor/recipe pairs; duplicate names are rejected
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ThemeDescriptor, ThemeRecipe)>,
    {
        let mut registry = Self::new();
        for (descriptor, recipe) in entries {
            registry.register(descriptor, recipe)?;
        }
        Ok(registry)
    }

    /// Shared built-in registry
    pub fn global() -> Arc<ThemeRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(ThemeRegistry::builtin()))
            .clone()
    }

    /// Add a theme. Fails if the name is taken.
    pub fn register(&mut self, descriptor: ThemeDescriptor, recipe: ThemeRecipe) -> Result<()> {
        if self.entries.contains_key(&descriptor.name) {
            return Err(ThemeError::DuplicateTheme(descriptor.name));
        }
        if descriptor.default {
            if let Some(existing) = self.default_descriptor() {
                warn!(
                    theme = %descriptor.name,
                    existing = %existing.name,
                    "multiple themes flagged default; the first one wins"
                );
            }
        }
        self.insert(descriptor, recipe);
        Ok(())
    }

    fn insert(&mut self, descriptor: ThemeDescriptor, recipe: ThemeRecipe) {
        self.entries.insert(
            descriptor.name.clone(),
            Entry {
                descriptor,
                recipe,
                theme: OnceLock::new(),
            },
        );
    }

    // ========== Lookups ==========

    /// Theme names in registration order
    pub fn theme_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Composed theme for a name, `None` if unknown
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.entries.get(name).map(Entry::theme)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ThemeDescriptor> {
        self.entries.values().map(|e| &e.descriptor)
    }

    pub fn descriptor(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.entries.get(name).map(|e| &e.descriptor)
    }

    pub fn recipe(&self, name: &str) -> Option<ThemeRecipe> {
        self.entries.get(name).map(|e| e.recipe)
    }

    /// Color scheme a theme renders in, `None` if unknown
    pub fn scheme_of(&self, name: &str) -> Option<ColorScheme> {
        self.recipe(name).map(|r| r.scheme)
    }

    /// First descriptor flagged default
    pub fn default_descriptor(&self) -> Option<&ThemeDescriptor> {
        self.descriptors().find(|d| d.default)
    }

    /// Name of the default theme, or the reference theme name if none is flagged
    pub fn default_name(&self) -> &str {
        self.default_descriptor()
            .map(|d| d.name.as_str())
            .unwrap_or(REFERENCE_THEME)
    }

    /// Registered theme a fresh surface should start from: the default name
    /// when it is in the catalog, else the first registered theme. `None`
    /// for an empty registry.
    pub fn initial_name(&self) -> Option<&str> {
        let default = self.default_name();
        if self.has_theme(default) {
            return Some(default);
        }
        self.entries.keys().next().map(String::as_str)
    }

    /// The default theme.
    ///
    /// Without a flagged descriptor this logs a warning and returns the
    /// reference theme (default accent, light scheme).
    pub fn get_default_theme(&self) -> &Theme {
        if let Some(entry) = self.entries.values().find(|e| e.descriptor.default) {
            return entry.theme();
        }
        warn!("no theme flagged default; falling back to `{REFERENCE_THEME}`");
        self.reference.get_or_init(|| {
            compose(Variant::Default, ColorScheme::Light).with_name(REFERENCE_THEME)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.theme_names())
            .field("default", &self.default_name())
            .finish()
    }
}
