//! Layering and breakpoint tokens

use super::scale::{StepKey, Token, TokenScale};

/// Stacking order scale. `auto` is kept as a keyword.
pub fn z_index() -> TokenScale {
    TokenScale::new()
        .with(StepKey::Shade(0), Token::Number(0))
        .with(StepKey::Shade(10), Token::Number(10))
        .with(StepKey::Shade(20), Token::Number(20))
        .with(StepKey::Shade(30), Token::Number(30))
        .with(StepKey::Shade(40), Token::Number(40))
        .with(StepKey::Shade(50), Token::Number(50))
        .with("auto", Token::Keyword("auto"))
}

/// Minimum viewport widths
pub fn breakpoints() -> TokenScale {
    TokenScale::new()
        .with("sm", Token::Dimension("640px"))
        .with("md", Token::Dimension("768px"))
        .with("lg", Token::Dimension("1024px"))
        .with("xl", Token::Dimension("1280px"))
        .with("2xl", Token::Dimension("1536px"))
}
