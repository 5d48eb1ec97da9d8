//! Color tokens for theming
//!
//! Every palette exposes the same eleven shade steps so that any
//! `{role}-{shade}` reference resolves in every theme.

use super::scale::{StepKey, Token, TokenScale};

/// Shade steps shared by every color palette
pub const SHADE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Base
    Neutral,

    // Brand colors
    Primary,
    Secondary,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,
}

impl ColorRole {
    /// All roles in output order
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Neutral,
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Info,
    ];

    /// Key used in token trees and variable names
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Neutral => "neutral",
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
        }
    }
}

/// A named eleven-step color palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    shades: [&'static str; 11],
}

impl Palette {
    pub const fn new(name: &'static str, shades: [&'static str; 11]) -> Self {
        Self { name, shades }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hex value of one shade step
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        SHADE_STEPS
            .iter()
            .position(|s| *s == step)
            .map(|idx| self.shades[idx])
    }

    /// Build the token scale for this palette
    pub fn scale(&self) -> TokenScale {
        SHADE_STEPS
            .iter()
            .zip(self.shades.iter())
            .map(|(step, hex)| (StepKey::Shade(*step), Token::Color(*hex)))
            .collect()
    }

    /// Build the token scale with the shade order reversed (`50 ↔ 950`).
    ///
    /// Used for neutrals on dark surfaces so that `neutral-50` stays the
    /// "background-most" shade in both schemes.
    pub fn mirrored_scale(&self) -> TokenScale {
        SHADE_STEPS
            .iter()
            .zip(self.shades.iter().rev())
            .map(|(step, hex)| (StepKey::Shade(*step), Token::Color(*hex)))
            .collect()
    }
}

// ========== Palettes ==========

pub const GRAY: Palette = Palette::new(
    "gray",
    [
        "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
        "#1f2937", "#111827", "#030712",
    ],
);

pub const SKY: Palette = Palette::new(
    "sky",
    [
        "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
        "#075985", "#0c4a6e", "#082f49",
    ],
);

pub const INDIGO: Palette = Palette::new(
    "indigo",
    [
        "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
        "#3730a3", "#312e81", "#1e1b4b",
    ],
);

pub const PURPLE: Palette = Palette::new(
    "purple",
    [
        "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
        "#6b21a8", "#581c87", "#3b0764",
    ],
);

pub const PINK: Palette = Palette::new(
    "pink",
    [
        "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d",
        "#9d174d", "#831843", "#500724",
    ],
);

pub const EMERALD: Palette = Palette::new(
    "emerald",
    [
        "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857",
        "#065f46", "#064e3b", "#022c22",
    ],
);

pub const TEAL: Palette = Palette::new(
    "teal",
    [
        "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e",
        "#115e59", "#134e4a", "#042f2e",
    ],
);

pub const ORANGE: Palette = Palette::new(
    "orange",
    [
        "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
        "#9a3412", "#7c2d12", "#431407",
    ],
);

pub const AMBER: Palette = Palette::new(
    "amber",
    [
        "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
        "#92400e", "#78350f", "#451a03",
    ],
);

pub const GREEN: Palette = Palette::new(
    "green",
    [
        "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
        "#166534", "#14532d", "#052e16",
    ],
);

pub const RED: Palette = Palette::new(
    "red",
    [
        "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
        "#991b1b", "#7f1d1d", "#450a0a",
    ],
);

pub const BLUE: Palette = Palette::new(
    "blue",
    [
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
        "#1e40af", "#1e3a8a", "#172554",
    ],
);

/// Semantic palettes shared by every variant
pub mod semantic {
    use super::Palette;

    pub const NEUTRAL: Palette = super::GRAY;
    pub const SUCCESS: Palette = super::GREEN;
    pub const WARNING: Palette = super::AMBER;
    pub const ERROR: Palette = super::RED;
    pub const INFO: Palette = super::BLUE;
}
