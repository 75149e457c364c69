//! Theme records attached to templates
//!
//! A theme is opaque to the engine: it is carried from the template
//! descriptor to the renderer untouched. This module only knows how to
//! load one from TOML and look up a color token.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Heading and body font families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Inter".to_string(),
            body: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowStyle {
    None,
    #[default]
    Subtle,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Square,
    Pill,
}

/// Colors, fonts and shape tokens for a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Color token name -> CSS color
    pub colors: BTreeMap<String, String>,
    pub fonts: ThemeFonts,
    pub spacing: Spacing,
    pub border_radius: String,
    pub shadow_style: ShadowStyle,
    pub button_style: ButtonStyle,
}

/// Neutral grays with a blue accent
const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("primary", "#2563eb"),
    ("secondary", "#64748b"),
    ("accent", "#f59e0b"),
    ("background", "#ffffff"),
    ("surface", "#f8fafc"),
    ("text", "#0f172a"),
    ("muted", "#94a3b8"),
];

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fonts: ThemeFonts::default(),
            spacing: Spacing::default(),
            border_radius: "8px".to_string(),
            shadow_style: ShadowStyle::default(),
            button_style: ButtonStyle::default(),
        }
    }
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a theme from a TOML string. Missing fields take default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Start from the default theme with a different palette
    pub fn with_colors<'a>(colors: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_fonts(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.fonts = ThemeFonts {
            heading: heading.into(),
            body: body.into(),
        };
        self
    }

    pub fn with_border_radius(mut self, radius: impl Into<String>) -> Self {
        self.border_radius = radius.into();
        self
    }

    pub fn with_shadow_style(mut self, style: ShadowStyle) -> Self {
        self.shadow_style = style;
        self
    }

    pub fn with_button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = style;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Look up a color token
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.color("primary"), Some("#2563eb"));
        assert_eq!(theme.color("nonexistent"), None);
        assert_eq!(theme.button_style, ButtonStyle::Rounded);
    }

    #[test]
    fn test_from_toml_partial() {
        let theme = Theme::from_toml_str(
            r##"
buttonStyle = "pill"
shadowStyle = "strong"

[colors]
primary = "#b91c1c"

[fonts]
heading = "Playfair Display"
body = "Lato"
"##,
        )
        .unwrap();
        assert_eq!(theme.color("primary"), Some("#b91c1c"));
        assert_eq!(theme.color("accent"), None);
        assert_eq!(theme.fonts.heading, "Playfair Display");
        assert_eq!(theme.button_style, ButtonStyle::Pill);
        assert_eq!(theme.shadow_style, ShadowStyle::Strong);
        assert_eq!(theme.border_radius, "8px");
    }

    #[test]
    fn test_invalid_toml() {
        let result = Theme::from_toml_str("colors = 3");
        assert!(matches!(result, Err(ThemeError::ParseError(_))));
    }

    #[test]
    fn test_with_colors_keeps_other_defaults() {
        let theme = Theme::with_colors([("primary", "#000000")]).with_spacing(Spacing::Relaxed);
        assert_eq!(theme.colors.len(), 1);
        assert_eq!(theme.spacing, Spacing::Relaxed);
        assert_eq!(theme.fonts, ThemeFonts::default());
    }
}
