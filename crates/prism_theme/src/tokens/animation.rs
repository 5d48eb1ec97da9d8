//! Motion tokens: transition durations and timing functions

use super::scale::{StepKey, Token, TokenScale};

pub const EASE_IN_OUT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const EASE_IN: &str = "cubic-bezier(0.4, 0, 1, 1)";
pub const EASE_OUT: &str = "cubic-bezier(0, 0, 0.2, 1)";

static DURATIONS: [(u16, &str); 8] = [
    (75, "75ms"),
    (100, "100ms"),
    (150, "150ms"),
    (200, "200ms"),
    (300, "300ms"),
    (500, "500ms"),
    (700, "700ms"),
    (1000, "1000ms"),
];

pub fn transition_duration() -> TokenScale {
    let mut scale = TokenScale::new().with("DEFAULT", Token::Duration("150ms"));
    for (ms, value) in DURATIONS.iter() {
        scale.insert(StepKey::Shade(*ms), Token::Duration(*value));
    }
    scale
}

pub fn transition_timing_function() -> TokenScale {
    TokenScale::new()
        .with("DEFAULT", Token::Easing(EASE_IN_OUT))
        .with("linear", Token::Easing("linear"))
        .with("in", Token::Easing(EASE_IN))
        .with("out", Token::Easing(EASE_OUT))
        .with("in-out", Token::Easing(EASE_IN_OUT))
}
