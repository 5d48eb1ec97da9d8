//! Theme model
//!
//! A [`Theme`] is a closed record with one entry per design [`Category`].
//! Every theme exposes the same categories and the same color roles; only
//! leaf values differ, which is what makes themes interchangeable when they
//! are flattened into CSS variables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::composer::Variant;
use crate::error::ThemeError;
use crate::tokens::{ColorRole, TokenScale};
use crate::tree::TokenNode;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(ThemeError::UnknownScheme(s.to_string())),
        }
    }
}

/// Top-level design categories, in output order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Category {
    Colors,
    Spacing,
    BorderRadius,
    Shadows,
    ZIndex,
    Breakpoints,
    FontFamily,
    FontSize,
    FontWeight,
    TransitionDuration,
    TransitionTimingFunction,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Colors,
        Category::Spacing,
        Category::BorderRadius,
        Category::Shadows,
        Category::ZIndex,
        Category::Breakpoints,
        Category::FontFamily,
        Category::FontSize,
        Category::FontWeight,
        Category::TransitionDuration,
        Category::TransitionTimingFunction,
    ];

    /// Key used in token trees and variable names
    pub fn key(self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Spacing => "spacing",
            Category::BorderRadius => "border-radius",
            Category::Shadows => "shadows",
            Category::ZIndex => "z-index",
            Category::Breakpoints => "breakpoints",
            Category::FontFamily => "font-family",
            Category::FontSize => "font-size",
            Category::FontWeight => "font-weight",
            Category::TransitionDuration => "transition-duration",
            Category::TransitionTimingFunction => "transition-timing-function",
        }
    }
}

/// One scale per color role
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub neutral: TokenScale,
    pub primary: TokenScale,
    pub secondary: TokenScale,
    pub success: TokenScale,
    pub warning: TokenScale,
    pub error: TokenScale,
    pub info: TokenScale,
}

impl ThemeColors {
    /// Get a role's scale by key
    pub fn get(&self, role: ColorRole) -> &TokenScale {
        match role {
            ColorRole::Neutral => &self.neutral,
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
        }
    }

    pub fn to_node(&self) -> TokenNode {
        TokenNode::group(
            ColorRole::ALL
                .iter()
                .map(|role| (role.key(), self.get(*role).to_node())),
        )
    }
}

/// A fully composed theme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub(crate) name: String,
    pub(crate) variant: Variant,
    pub(crate) scheme: ColorScheme,
    pub(crate) colors: ThemeColors,
    pub(crate) spacing: TokenScale,
    pub(crate) border_radius: TokenScale,
    pub(crate) shadows: TokenScale,
    pub(crate) z_index: TokenScale,
    pub(crate) breakpoints: TokenScale,
    pub(crate) font_family: TokenScale,
    pub(crate) font_size: TokenScale,
    pub(crate) font_weight: TokenScale,
    pub(crate) transition_duration: TokenScale,
    pub(crate) transition_timing_function: TokenScale,
}

impl Theme {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename, keeping every token
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Scale for a non-color category. `Colors` is nested; use [`Theme::colors`].
    pub fn scale(&self, category: Category) -> Option<&TokenScale> {
        match category {
            Category::Colors => None,
            Category::Spacing => Some(&self.spacing),
            Category::BorderRadius => Some(&self.border_radius),
            Category::Shadows => Some(&self.shadows),
            Category::ZIndex => Some(&self.z_index),
            Category::Breakpoints => Some(&self.breakpoints),
            Category::FontFamily => Some(&self.font_family),
            Category::FontSize => Some(&self.font_size),
            Category::FontWeight => Some(&self.font_weight),
            Category::TransitionDuration => Some(&self.transition_duration),
            Category::TransitionTimingFunction => Some(&self.transition_timing_function),
        }
    }

    /// Convert into an open token tree, one group per category
    pub fn to_tree(&self) -> TokenNode {
        TokenNode::group(Category::ALL.iter().map(|category| {
            let node = match self.scale(*category) {
                Some(scale) => scale.to_node(),
                None => self.colors.to_node(),
            };
            (category.key(), node)
        }))
    }

    /// Number of leaf tokens across every category
    pub fn token_count(&self) -> usize {
        let colors: usize = ColorRole::ALL
            .iter()
            .map(|role| self.colors.get(*role).len())
            .sum();
        let rest: usize = Category::ALL
            .iter()
            .filter_map(|category| self.scale(*category))
            .map(TokenScale::len)
            .sum();
        colors + rest
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_tree().serialize(serializer)
    }
}
