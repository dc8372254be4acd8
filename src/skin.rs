//! Snake skin selection
//!
//! Chosen on the home screen before a session starts and fixed for its
//! duration. Purely cosmetic: the simulation only carries it for renderers.

use serde::{Deserialize, Serialize};

/// Default body color (CSS hex token)
pub const DEFAULT_COLOR: &str = "#43e370";

/// Body pattern drawn over the base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Solid,
    Striped,
    Dotted,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Solid => "solid",
            Pattern::Striped => "striped",
            Pattern::Dotted => "dotted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Some(Pattern::Solid),
            "striped" | "stripes" => Some(Pattern::Striped),
            "dotted" | "dots" => Some(Pattern::Dotted),
            _ => None,
        }
    }

    /// Whether segment `index` (0 = head) uses the pattern's accent color
    pub fn is_accent(&self, index: usize) -> bool {
        match self {
            Pattern::Solid => false,
            Pattern::Striped => index % 8 < 4,
            Pattern::Dotted => index % 13 < 2,
        }
    }
}

/// Color + pattern picked by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    pub color: String,
    pub pattern: Pattern,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            pattern: Pattern::Solid,
        }
    }
}

impl Skin {
    pub fn new(color: impl Into<String>, pattern: Pattern) -> Self {
        Self {
            color: color.into(),
            pattern,
        }
    }

    /// Build a skin from raw form values, falling back to defaults
    pub fn from_form(color: &str, pattern: &str) -> Self {
        let pattern = match pattern.trim() {
            "" => Pattern::default(),
            name => Pattern::from_str(name).unwrap_or_else(|| {
                log::warn!("Unknown skin pattern {:?}, using solid", name);
                Pattern::Solid
            }),
        };
        let color = if color.trim().is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            color.trim().to_string()
        };
        Self { color, pattern }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_round_trip_names() {
        for p in [Pattern::Solid, Pattern::Striped, Pattern::Dotted] {
            assert_eq!(Pattern::from_str(p.as_str()), Some(p));
        }
        assert_eq!(Pattern::from_str(" Striped "), Some(Pattern::Striped));
        assert_eq!(Pattern::from_str("plaid"), None);
    }

    #[test]
    fn test_accent_bands() {
        assert!(!Pattern::Solid.is_accent(0));
        assert!(Pattern::Striped.is_accent(3));
        assert!(!Pattern::Striped.is_accent(4));
        assert!(Pattern::Striped.is_accent(8));
        assert!(Pattern::Dotted.is_accent(13));
        assert!(!Pattern::Dotted.is_accent(2));
    }

    #[test]
    fn test_from_form_falls_back() {
        let skin = Skin::from_form("", "zigzag");
        assert_eq!(skin, Skin::default());

        let skin = Skin::from_form("#ff0000", "dotted");
        assert_eq!(skin.color, "#ff0000");
        assert_eq!(skin.pattern, Pattern::Dotted);
    }

    #[test]
    fn test_pattern_serializes_lowercase() {
        let json = serde_json::to_string(&Pattern::Striped).unwrap();
        assert_eq!(json, "\"striped\"");
    }
}
