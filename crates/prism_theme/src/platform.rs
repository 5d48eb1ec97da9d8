//! System color scheme detection
//!
//! The ambient light/dark preference is read-only input to session
//! initialization. Detection order:
//! 1. `PRISM_COLOR_SCHEME` (`light`/`dark`), for explicit overrides and CI
//! 2. `GTK_THEME` with a `:dark` suffix (Linux desktops)
//! 3. `AppleInterfaceStyle` from user defaults (macOS)

use crate::theme::ColorScheme;

/// Environment variable that overrides detection
pub const SCHEME_ENV: &str = "PRISM_COLOR_SCHEME";

/// Source of the ambient color scheme preference
pub trait ColorSchemeSource: Send + Sync {
    /// `None` when the platform expresses no preference
    fn preferred_scheme(&self) -> Option<ColorScheme>;
}

/// A fixed answer, for tests and non-interactive contexts
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedColorScheme(pub Option<ColorScheme>);

impl ColorSchemeSource for FixedColorScheme {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self.0
    }
}

/// Queries the host on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        detect_system_color_scheme()
    }
}

/// Detect the host's preferred color scheme
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    if let Ok(value) = std::env::var(SCHEME_ENV) {
        match value.parse() {
            Ok(scheme) => return Some(scheme),
            Err(_) => tracing::warn!("ignoring {SCHEME_ENV}={value:?}"),
        }
    }

    if let Ok(gtk_theme) = std::env::var("GTK_THEME") {
        return Some(scheme_from_gtk_theme(&gtk_theme));
    }

    detect_native()
}

fn scheme_from_gtk_theme(value: &str) -> ColorScheme {
    if value.to_ascii_lowercase().ends_with(":dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

#[cfg(target_os = "macos")]
fn detect_native() -> Option<ColorScheme> {
    // Key is absent in light mode, so a failed read means light
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    let style = String::from_utf8_lossy(&output.stdout);
    if output.status.success() && style.trim().eq_ignore_ascii_case("dark") {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}

#[cfg(not(target_os = "macos"))]
fn detect_native() -> Option<ColorScheme> {
    None
}
