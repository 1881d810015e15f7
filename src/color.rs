use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
/// Provides the conversions the SVG exporter needs.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

fn palette(color_str: &str) -> Color {
    Color::new(color_str).unwrap_or_default()
}

/// Fill color for a network node, keyed by its display kind.
///
/// Entity kinds come from the extractor (PERSON, ORG, GPE, ...); Case,
/// Evidence and Entity are node types. Unknown kinds fall back to a neutral
/// gray.
pub fn node_color(kind: &str) -> Color {
    match kind {
        "PERSON" => palette("#3b82f6"),
        "ORG" => palette("#a855f7"),
        // Geopolitical entity (location)
        "GPE" => palette("#22c55e"),
        "DATE" => palette("#f59e0b"),
        "EMAIL" => palette("#06b6d4"),
        "PHONE" => palette("#ec4899"),
        "Case" => palette("#ef4444"),
        "Evidence" => palette("#8b5cf6"),
        "Entity" => palette("#64748b"),
        _ => palette("#8b8fa3"),
    }
}

/// Fill color for a mindmap node, cycling through the level palette.
pub fn level_color(level: usize) -> Color {
    const LEVEL_PALETTE: [&str; 6] = [
        "#3b82f6", "#a855f7", "#22c55e", "#f59e0b", "#06b6d4", "#ec4899",
    ];
    palette(LEVEL_PALETTE[level % LEVEL_PALETTE.len()])
}

/// Stroke color for edges and mindmap links.
pub fn edge_color() -> Color {
    palette("#1f2335")
}

/// Border color marking high-risk nodes.
pub fn risk_color() -> Color {
    palette("#ef4444")
}

/// Muted text color for edge labels.
pub fn muted_text_color() -> Color {
    palette("#8b8fa3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_have_distinct_colors() {
        assert_ne!(node_color("PERSON"), node_color("ORG"));
        assert_ne!(node_color("Case"), node_color("Evidence"));
    }

    #[test]
    fn test_unknown_kind_uses_fallback() {
        assert_eq!(node_color("SOMETHING_ELSE"), node_color("UNSEEN"));
    }

    #[test]
    fn test_level_palette_cycles() {
        assert_eq!(level_color(0), level_color(6));
        assert_ne!(level_color(0), level_color(1));
    }

    #[test]
    fn test_invalid_color_string_is_rejected() {
        assert!(Color::new("not-a-color!!").is_err());
    }
}
