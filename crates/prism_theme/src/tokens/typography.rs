//! Typography tokens: font families, sizes and weights

use super::scale::{Token, TokenScale};

pub const SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "Apple Color Emoji",
    "Segoe UI Emoji",
    "Segoe UI Symbol",
    "Noto Color Emoji",
];

pub const SERIF: &[&str] = &[
    "ui-serif",
    "Georgia",
    "Cambria",
    "Times New Roman",
    "Times",
    "serif",
];

pub const MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "Liberation Mono",
    "Courier New",
    "monospace",
];

/// Font stacks. Rendered as comma-joined lists when flattened.
pub fn font_family() -> TokenScale {
    TokenScale::new()
        .with("sans", Token::FontStack(SANS))
        .with("serif", Token::FontStack(SERIF))
        .with("mono", Token::FontStack(MONO))
}

/// Type scale in rem
pub fn font_size() -> TokenScale {
    TokenScale::new()
        .with("xs", Token::Dimension("0.75rem"))
        .with("sm", Token::Dimension("0.875rem"))
        .with("base", Token::Dimension("1rem"))
        .with("lg", Token::Dimension("1.125rem"))
        .with("xl", Token::Dimension("1.25rem"))
        .with("2xl", Token::Dimension("1.5rem"))
        .with("3xl", Token::Dimension("1.875rem"))
        .with("4xl", Token::Dimension("2.25rem"))
        .with("5xl", Token::Dimension("3rem"))
        .with("6xl", Token::Dimension("3.75rem"))
        .with("7xl", Token::Dimension("4.5rem"))
        .with("8xl", Token::Dimension("6rem"))
        .with("9xl", Token::Dimension("8rem"))
}

pub fn font_weight() -> TokenScale {
    TokenScale::new()
        .with("thin", Token::Number(100))
        .with("extralight", Token::Number(200))
        .with("light", Token::Number(300))
        .with("normal", Token::Number(400))
        .with("medium", Token::Number(500))
        .with("semibold", Token::Number(600))
        .with("bold", Token::Number(700))
        .with("extrabold", Token::Number(800))
        .with("black", Token::Number(900))
}
