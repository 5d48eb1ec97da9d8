//! Theme composition
//!
//! A theme is the shared neutral/semantic colors plus one accent pair
//! (primary/secondary) selected by [`Variant`], plus the shared layout,
//! typography and motion scales.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, Theme, ThemeColors};
use crate::tokens::*;

/// Accent catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Sky primary, indigo secondary.
    Default,
    /// Purple primary, pink secondary.
    Purple,
    /// Emerald primary, teal secondary.
    Emerald,
    /// Orange primary, amber secondary.
    Orange,
}

impl Variant {
    /// Stable key for config/serialization.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Purple => "purple",
            Self::Emerald => "emerald",
            Self::Orange => "orange",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Purple => "Purple",
            Self::Emerald => "Emerald",
            Self::Orange => "Orange",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [Variant] {
        const VARIANTS: [Variant; 4] = [
            Variant::Default,
            Variant::Purple,
            Variant::Emerald,
            Variant::Orange,
        ];
        &VARIANTS
    }

    /// Primary and secondary palettes for this accent
    pub fn accents(self) -> (Palette, Palette) {
        match self {
            Self::Default => (SKY, INDIGO),
            Self::Purple => (PURPLE, PINK),
            Self::Emerald => (EMERALD, TEAL),
            Self::Orange => (ORANGE, AMBER),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::all()
            .iter()
            .copied()
            .find(|v| v.key() == s)
            .ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

/// Compose the light theme for a variant key.
///
/// Fails with [`ThemeError::UnknownVariant`] for keys outside the accent
/// catalog; there is no fallback.
pub fn create_theme(variant_key: &str) -> Result<Theme> {
    let variant: Variant = variant_key.parse()?;
    Ok(compose(variant, ColorScheme::Light))
}

/// Compose a theme from typed inputs.
///
/// The dark scheme mirrors the neutral scale and swaps in the dark shadow
/// set; accents, semantic colors and every non-color scale are shared.
pub fn compose(variant: Variant, scheme: ColorScheme) -> Theme {
    let (primary, secondary) = variant.accents();

    let (neutral, shadows) = match scheme {
        ColorScheme::Light => (semantic::NEUTRAL.scale(), light_shadows()),
        ColorScheme::Dark => (semantic::NEUTRAL.mirrored_scale(), dark_shadows()),
    };

    tracing::debug!(variant = variant.key(), %scheme, "composing theme");

    Theme {
        name: variant.key().to_string(),
        variant,
        scheme,
        colors: ThemeColors {
            neutral,
            primary: primary.scale(),
            secondary: secondary.scale(),
            success: semantic::SUCCESS.scale(),
            warning: semantic::WARNING.scale(),
            error: semantic::ERROR.scale(),
            info: semantic::INFO.scale(),
        },
        spacing: spacing(),
        border_radius: border_radius(),
        shadows,
        z_index: z_index(),
        breakpoints: breakpoints(),
        font_family: font_family(),
        font_size: font_size(),
        font_weight: font_weight(),
        transition_duration: transition_duration(),
        transition_timing_function: transition_timing_function(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_is_a_hard_failure() {
        let err = create_theme("teal").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownVariant(ref k) if k == "teal"));
    }

    #[test]
    fn variant_keys_round_trip() {
        for variant in Variant::all() {
            assert_eq!(variant.key().parse::<Variant>().unwrap(), *variant);
        }
    }

    #[test]
    fn composed_theme_is_named_after_variant() {
        let theme = create_theme("emerald").unwrap();
        assert_eq!(theme.name(), "emerald");
        assert_eq!(theme.variant(), Variant::Emerald);
        assert_eq!(theme.color_scheme(), ColorScheme::Light);
        assert_eq!(
            theme.colors().primary.get(500u16),
            Some(&Token::Color("#10b981"))
        );
    }

    #[test]
    fn dark_scheme_mirrors_neutrals_only() {
        let light = compose(Variant::Default, ColorScheme::Light);
        let dark = compose(Variant::Default, ColorScheme::Dark);

        assert_eq!(dark.colors().neutral.get(50u16), Some(&Token::Color("#030712")));
        assert_eq!(light.colors().primary, dark.colors().primary);
        assert_eq!(light.colors().success, dark.colors().success);
        assert_ne!(light.scale(crate::Category::Shadows), dark.scale(crate::Category::Shadows));
    }
}
