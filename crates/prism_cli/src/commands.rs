//! Output rendering for the read-only commands

use anyhow::{Context, Result};
use prism_theme::{render_stylesheet, theme_selector, theme_variables, ThemeRegistry};
use std::fmt::Write as _;

/// Output format for `prism vars`
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum VarsFormat {
    Css,
    Json,
}

/// One line per theme: name, label, scheme, default marker
pub fn list_themes(registry: &ThemeRegistry) -> String {
    let mut out = String::new();
    for descriptor in registry.descriptors() {
        let scheme = registry
            .scheme_of(&descriptor.name)
            .map(|s| s.as_str())
            .unwrap_or("-");
        let marker = if descriptor.default { " (default)" } else { "" };
        let _ = writeln!(
            out,
            "{:<12} {:<12} {}{}",
            descriptor.name, descriptor.label, scheme, marker
        );
    }
    out
}

/// Full theme payload as pretty JSON
pub fn show_theme(registry: &ThemeRegistry, name: &str) -> Result<String> {
    let theme = registry
        .get_theme(name)
        .with_context(|| format!("Unknown theme `{name}`. Run `prism list` to see themes."))?;
    Ok(serde_json::to_string_pretty(theme)?)
}

/// Variables for one theme, as a CSS rule block or a JSON object
pub fn theme_vars(
    registry: &ThemeRegistry,
    name: &str,
    prefix: &str,
    attribute: &str,
    format: VarsFormat,
) -> Result<String> {
    let theme = registry
        .get_theme(name)
        .with_context(|| format!("Unknown theme `{name}`. Run `prism list` to see themes."))?;
    let vars = theme_variables(theme, prefix);
    match format {
        VarsFormat::Css => Ok(render_stylesheet(&theme_selector(attribute, name), &vars)),
        VarsFormat::Json => Ok(serde_json::to_string_pretty(&vars)?),
    }
}

/// One rule block per registered theme. The default theme also binds to
/// bare `:root` so pages render themed before any attribute is set.
pub fn stylesheet(registry: &ThemeRegistry, prefix: &str, attribute: &str) -> String {
    let default_name = registry.default_name();
    let mut out = String::new();
    for name in registry.theme_names() {
        let Some(theme) = registry.get_theme(name) else {
            continue;
        };
        let mut selector = theme_selector(attribute, name);
        if name == default_name {
            selector = format!(":root, {selector}");
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_stylesheet(&selector, &theme_variables(theme, prefix)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_marks_default() {
        let out = list_themes(&ThemeRegistry::builtin());
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("light"));
        assert!(first.ends_with("light (default)"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn vars_as_css_and_json() {
        let registry = ThemeRegistry::builtin();
        let css = theme_vars(&registry, "dark", "--", "data-theme", VarsFormat::Css).unwrap();
        assert!(css.starts_with(":root[data-theme=\"dark\"] {\n"));
        assert!(css.contains("  --colors-primary-500: #0ea5e9;\n"));

        let json = theme_vars(&registry, "dark", "--", "data-theme", VarsFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["--colors-neutral-50"], "#030712");
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let registry = ThemeRegistry::builtin();
        assert!(show_theme(&registry, "sepia").is_err());
        assert!(theme_vars(&registry, "sepia", "--", "data-theme", VarsFormat::Css).is_err());
    }

    #[test]
    fn stylesheet_has_one_block_per_theme() {
        let css = stylesheet(&ThemeRegistry::builtin(), "--", "data-theme");
        assert!(css.starts_with(":root, :root[data-theme=\"light\"] {"));
        assert_eq!(css.matches("{\n").count(), 5);
    }
}
