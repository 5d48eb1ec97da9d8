//! CSS variable generation
//!
//! Flattens a token tree into `--{path joined with -}` → value pairs and
//! renders them as stylesheet rules.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::theme::Theme;
use crate::tree::TokenNode;

/// Prefix for generated custom property names
pub const DEFAULT_PREFIX: &str = "--";

/// Separator between path segments in a variable name
pub const SEPARATOR: &str = "-";

/// Flat variable name → value map, in traversal order
pub type CssVariableMap = IndexMap<String, String>;

/// Flatten a token tree into CSS custom properties.
///
/// Depth-first, in insertion order. Groups extend the path; every leaf emits
/// one entry named `prefix + path.join("-")`. A leaf at the root has no
/// path and produces nothing.
pub fn generate_css_variables(tree: &TokenNode, prefix: &str) -> CssVariableMap {
    let mut vars = CssVariableMap::new();
    let mut path = Vec::new();
    if let TokenNode::Group(children) = tree {
        for (key, child) in children {
            walk(child, key, &mut path, prefix, &mut vars);
        }
    }
    vars
}

fn walk<'a>(
    node: &'a TokenNode,
    key: &'a str,
    path: &mut Vec<&'a str>,
    prefix: &str,
    vars: &mut CssVariableMap,
) {
    path.push(key);
    match node {
        TokenNode::Group(children) => {
            for (child_key, child) in children {
                walk(child, child_key, path, prefix, vars);
            }
        }
        TokenNode::Leaf(value) => {
            let name = format!("{prefix}{}", path.join(SEPARATOR));
            if let Some(previous) = vars.insert(name.clone(), value.clone()) {
                tracing::warn!(
                    variable = %name,
                    %previous,
                    "CSS variable name collision; later value wins"
                );
            }
        }
    }
    path.pop();
}

/// Flatten a composed theme
pub fn theme_variables(theme: &Theme, prefix: &str) -> CssVariableMap {
    generate_css_variables(&theme.to_tree(), prefix)
}

/// Selector matching a theme attribute on the document root,
/// e.g. `:root[data-theme="dark"]`
pub fn theme_selector(attribute: &str, theme_name: &str) -> String {
    format!(":root[{attribute}=\"{theme_name}\"]")
}

/// Render one rule block declaring every variable
pub fn render_stylesheet(selector: &str, vars: &CssVariableMap) -> String {
    let mut out = String::with_capacity(vars.len() * 32 + selector.len() + 4);
    let _ = writeln!(out, "{selector} {{");
    for (name, value) in vars {
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push_str("}\n");
    out
}
