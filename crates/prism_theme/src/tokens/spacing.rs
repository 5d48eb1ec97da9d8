//! Spacing tokens (4px grid, rem based)

use super::scale::{StepKey, Token, TokenScale};

/// Spacing scale: multiplier key to length
static SPACING: [(StepKey, &str); 19] = [
    (StepKey::Shade(0), "0px"),
    (StepKey::Named("px"), "1px"),
    (StepKey::Shade(1), "0.25rem"),
    (StepKey::Shade(2), "0.5rem"),
    (StepKey::Shade(3), "0.75rem"),
    (StepKey::Shade(4), "1rem"),
    (StepKey::Shade(5), "1.25rem"),
    (StepKey::Shade(6), "1.5rem"),
    (StepKey::Shade(8), "2rem"),
    (StepKey::Shade(10), "2.5rem"),
    (StepKey::Shade(12), "3rem"),
    (StepKey::Shade(16), "4rem"),
    (StepKey::Shade(20), "5rem"),
    (StepKey::Shade(24), "6rem"),
    (StepKey::Shade(32), "8rem"),
    (StepKey::Shade(40), "10rem"),
    (StepKey::Shade(48), "12rem"),
    (StepKey::Shade(56), "14rem"),
    (StepKey::Shade(64), "16rem"),
];

/// Spacing scale shared by every theme
pub fn spacing() -> TokenScale {
    SPACING
        .iter()
        .map(|(key, value)| (*key, Token::Dimension(*value)))
        .collect()
}
