//! Border radius tokens

use super::scale::{StepKey, Token, TokenScale};

static RADII: [(StepKey, &str); 9] = [
    (StepKey::Named("none"), "0px"),
    (StepKey::Named("sm"), "0.125rem"),
    (StepKey::Named("DEFAULT"), "0.25rem"),
    (StepKey::Named("md"), "0.375rem"),
    (StepKey::Named("lg"), "0.5rem"),
    (StepKey::Named("xl"), "0.75rem"),
    (StepKey::Named("2xl"), "1rem"),
    (StepKey::Named("3xl"), "1.5rem"),
    (StepKey::Named("full"), "9999px"),
];

/// Border radius scale shared by every theme
pub fn border_radius() -> TokenScale {
    RADII
        .iter()
        .map(|(key, value)| (*key, Token::Dimension(*value)))
        .collect()
}
