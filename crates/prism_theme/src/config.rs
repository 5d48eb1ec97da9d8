//! Prism configuration file handling (`prism.toml`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::applier::{ApplyOptions, DEFAULT_ATTRIBUTE, DEFAULT_DARK_CLASS};
use crate::composer::Variant;
use crate::css::DEFAULT_PREFIX;
use crate::error::{Result, ThemeError};
use crate::registry::{ThemeDescriptor, ThemeRecipe, ThemeRegistry};
use crate::storage::DEFAULT_STORAGE_KEY;
use crate::theme::ColorScheme;

/// Default config file name
pub const CONFIG_FILE: &str = "prism.toml";

/// Top-level configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrismConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Theme catalog; empty means the built-in catalog
    #[serde(default)]
    pub themes: Vec<ThemeEntry>,
}

/// How themes are written to the surface and persisted
#[derive(Debug, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_attribute")]
    pub attribute: String,
    #[serde(default = "default_dark_class")]
    pub dark_class: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Prefix for generated CSS variables
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

fn default_dark_class() -> String {
    DEFAULT_DARK_CLASS.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            dark_class: default_dark_class(),
            storage_key: default_storage_key(),
            prefix: default_prefix(),
        }
    }
}

impl RuntimeConfig {
    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions::attribute(&self.attribute)
    }
}

/// One `[[themes]]` table
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ThemeEntry {
    pub name: String,
    /// Display label; defaults to the name
    #[serde(default)]
    pub label: Option<String>,
    pub variant: Variant,
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default)]
    pub default: bool,
}

impl ThemeEntry {
    fn into_parts(self) -> (ThemeDescriptor, ThemeRecipe) {
        let label = self.label.unwrap_or_else(|| self.name.clone());
        let descriptor = ThemeDescriptor {
            name: self.name,
            label,
            default: self.default,
        };
        (descriptor, ThemeRecipe::new(self.variant, self.scheme))
    }
}

impl PrismConfig {
    /// Load configuration from a file, or from `prism.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        let content =
            fs::read_to_string(&config_path).map_err(|e| ThemeError::io(&config_path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Build the theme registry this config describes
    pub fn registry(&self) -> Result<ThemeRegistry> {
        if self.themes.is_empty() {
            return Ok(ThemeRegistry::builtin());
        }
        ThemeRegistry::from_entries(self.themes.iter().cloned().map(ThemeEntry::into_parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PrismConfig::from_toml("").unwrap();
        assert_eq!(config.runtime.attribute, "data-theme");
        assert_eq!(config.runtime.dark_class, "dark");
        assert_eq!(config.runtime.storage_key, "theme");
        assert_eq!(config.runtime.prefix, "--");
        assert_eq!(config.registry().unwrap().len(), 5);
    }

    #[test]
    fn custom_catalog() {
        let config = PrismConfig::from_toml(
            r#"
[runtime]
attribute = "data-mode"

[[themes]]
name = "day"
label = "Day"
variant = "orange"
default = true

[[themes]]
name = "night"
variant = "purple"
scheme = "dark"
"#,
        )
        .unwrap();

        assert_eq!(config.runtime.attribute, "data-mode");
        assert_eq!(config.runtime.storage_key, "theme");

        let registry = config.registry().unwrap();
        assert_eq!(registry.theme_names(), vec!["day", "night"]);
        assert_eq!(registry.get_default_theme().name(), "day");
        assert_eq!(registry.descriptor("night").unwrap().label, "night");
        assert_eq!(registry.scheme_of("night"), Some(ColorScheme::Dark));
    }

    #[test]
    fn unknown_variant_in_config_is_rejected() {
        let err = PrismConfig::from_toml(
            r#"
[[themes]]
name = "x"
variant = "teal"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn duplicate_catalog_names_are_rejected() {
        let config = PrismConfig::from_toml(
            r#"
[[themes]]
name = "x"
variant = "default"

[[themes]]
name = "x"
variant = "orange"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.registry(),
            Err(ThemeError::DuplicateTheme(_))
        ));
    }
}
