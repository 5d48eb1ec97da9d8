//! Shadow tokens for theming

use std::fmt;

use super::scale::{Token, TokenScale};

/// One layer of a box shadow, black with the given opacity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShadowLayer {
    pub offset_x: i16,
    pub offset_y: i16,
    pub blur: u16,
    pub spread: i16,
    /// Opacity in percent (0–100)
    pub alpha: u8,
    pub inset: bool,
}

impl ShadowLayer {
    pub const fn new(offset_x: i16, offset_y: i16, blur: u16, spread: i16, alpha: u8) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            alpha,
            inset: false,
        }
    }

    pub const fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

fn px(value: i32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

fn opacity(alpha: u8) -> String {
    match alpha {
        0 => "0".to_string(),
        a if a >= 100 => "1".to_string(),
        a if a % 10 == 0 => format!("0.{}", a / 10),
        a => format!("0.{a:02}"),
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {} {} rgb(0 0 0 / {})",
            px(self.offset_x.into()),
            px(self.offset_y.into()),
            px(self.blur.into()),
            px(self.spread.into()),
            opacity(self.alpha)
        )
    }
}

/// Render a layered shadow as CSS. An empty layer list is `none`.
pub fn shadow_css(layers: &[ShadowLayer]) -> String {
    if layers.is_empty() {
        return "none".to_string();
    }
    layers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

mod light {
    use super::ShadowLayer;

    pub static SM: [ShadowLayer; 1] = [ShadowLayer::new(0, 1, 2, 0, 5)];
    pub static DEFAULT: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 1, 3, 0, 10),
        ShadowLayer::new(0, 1, 2, -1, 10),
    ];
    pub static MD: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 4, 6, -1, 10),
        ShadowLayer::new(0, 2, 4, -2, 10),
    ];
    pub static LG: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 10, 15, -3, 10),
        ShadowLayer::new(0, 4, 6, -4, 10),
    ];
    pub static XL: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 20, 25, -5, 10),
        ShadowLayer::new(0, 8, 10, -6, 10),
    ];
    pub static XXL: [ShadowLayer; 1] = [ShadowLayer::new(0, 25, 50, -12, 25)];
    pub static INNER: [ShadowLayer; 1] = [ShadowLayer::new(0, 2, 4, 0, 5).inset()];
}

// Dark surfaces need heavier shadows to read at all
mod dark {
    use super::ShadowLayer;

    pub static SM: [ShadowLayer; 1] = [ShadowLayer::new(0, 1, 2, 0, 20)];
    pub static DEFAULT: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 1, 3, 0, 30),
        ShadowLayer::new(0, 1, 2, -1, 30),
    ];
    pub static MD: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 4, 6, -1, 30),
        ShadowLayer::new(0, 2, 4, -2, 30),
    ];
    pub static LG: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 10, 15, -3, 30),
        ShadowLayer::new(0, 4, 6, -4, 30),
    ];
    pub static XL: [ShadowLayer; 2] = [
        ShadowLayer::new(0, 20, 25, -5, 30),
        ShadowLayer::new(0, 8, 10, -6, 30),
    ];
    pub static XXL: [ShadowLayer; 1] = [ShadowLayer::new(0, 25, 50, -12, 50)];
    pub static INNER: [ShadowLayer; 1] = [ShadowLayer::new(0, 2, 4, 0, 15).inset()];
}

/// Shadow scale for a light color scheme
pub fn light_shadows() -> TokenScale {
    TokenScale::new()
        .with("sm", Token::Shadow(&light::SM))
        .with("DEFAULT", Token::Shadow(&light::DEFAULT))
        .with("md", Token::Shadow(&light::MD))
        .with("lg", Token::Shadow(&light::LG))
        .with("xl", Token::Shadow(&light::XL))
        .with("2xl", Token::Shadow(&light::XXL))
        .with("inner", Token::Shadow(&light::INNER))
        .with("none", Token::Shadow(&[]))
}

/// Shadow scale for a dark color scheme
pub fn dark_shadows() -> TokenScale {
    TokenScale::new()
        .with("sm", Token::Shadow(&dark::SM))
        .with("DEFAULT", Token::Shadow(&dark::DEFAULT))
        .with("md", Token::Shadow(&dark::MD))
        .with("lg", Token::Shadow(&dark::LG))
        .with("xl", Token::Shadow(&dark::XL))
        .with("2xl", Token::Shadow(&dark::XXL))
        .with("inner", Token::Shadow(&dark::INNER))
        .with("none", Token::Shadow(&[]))
}
