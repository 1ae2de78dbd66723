//! Theme system for customizing the dashboard appearance
//!
//! Themes define colors and border styling for the whole application.
//! They can be loaded from TOML files or constructed programmatically.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
    /// Border styling
    pub borders: BorderStyle,
}

/// Color palette for the theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    /// Main background color
    #[serde(with = "color_serde")]
    pub background: Color,
    /// Main foreground/text color
    #[serde(with = "color_serde")]
    pub foreground: Color,
    /// Accent color for highlights and the active tab
    #[serde(with = "color_serde")]
    pub accent: Color,
    /// Selection/cursor color
    #[serde(with = "color_serde")]
    pub selection: Color,
    /// Error indicators
    #[serde(with = "color_serde")]
    pub error: Color,
    /// Warning indicators (pending changes)
    #[serde(with = "color_serde")]
    pub warning: Color,
    /// Success indicators (clean tree, completed staging)
    #[serde(with = "color_serde")]
    pub success: Color,
    /// Muted/secondary text
    #[serde(with = "color_serde")]
    pub muted: Color,
    /// Fill color for progress gauges
    #[serde(with = "color_serde")]
    pub gauge: Color,
}

/// Border style for panels and widgets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Rounded corners (default)
    #[default]
    Rounded,
    /// Square corners
    Square,
    /// No borders
    None,
}

/// Custom serde module for ratatui Color
mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match color {
            Color::Reset => "reset".to_string(),
            Color::Black => "black".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Yellow => "yellow".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Magenta => "magenta".to_string(),
            Color::Cyan => "cyan".to_string(),
            Color::Gray => "gray".to_string(),
            Color::DarkGray => "darkgray".to_string(),
            Color::LightRed => "lightred".to_string(),
            Color::LightGreen => "lightgreen".to_string(),
            Color::LightYellow => "lightyellow".to_string(),
            Color::LightBlue => "lightblue".to_string(),
            Color::LightMagenta => "lightmagenta".to_string(),
            Color::LightCyan => "lightcyan".to_string(),
            Color::White => "white".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(i) => format!("indexed:{}", i),
        };
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }

    fn parse_color(s: &str) -> Result<Color, String> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(Color::Reset),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "gray" | "grey" => Ok(Color::Gray),
            "darkgray" | "darkgrey" => Ok(Color::DarkGray),
            "lightred" => Ok(Color::LightRed),
            "lightgreen" => Ok(Color::LightGreen),
            "lightyellow" => Ok(Color::LightYellow),
            "lightblue" => Ok(Color::LightBlue),
            "lightmagenta" => Ok(Color::LightMagenta),
            "lightcyan" => Ok(Color::LightCyan),
            "white" => Ok(Color::White),
            s if s.starts_with('#') => {
                let hex = s.trim_start_matches('#');
                if hex.len() != 6 {
                    return Err(format!("invalid hex color: {}", s));
                }
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                Ok(Color::Rgb(r, g, b))
            }
            s if s.starts_with("indexed:") => {
                let idx = s
                    .trim_start_matches("indexed:")
                    .parse::<u8>()
                    .map_err(|_| format!("invalid indexed color: {}", s))?;
                Ok(Color::Indexed(idx))
            }
            other => Err(format!("unknown color: {}", other)),
        }
    }
}

impl Theme {
    /// The default dark theme
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Reset,
                foreground: Color::White,
                accent: Color::Cyan,
                selection: Color::DarkGray,
                error: Color::Red,
                warning: Color::Yellow,
                success: Color::Green,
                muted: Color::Gray,
                gauge: Color::Cyan,
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// A light theme for bright terminals
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                selection: Color::Gray,
                error: Color::Red,
                warning: Color::Rgb(0xb0, 0x6a, 0x00),
                success: Color::Rgb(0x00, 0x77, 0x33),
                muted: Color::DarkGray,
                gauge: Color::Blue,
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Looks up a built-in theme by name (case-insensitive)
    ///
    /// Returns `None` for unknown names.
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Theme::dark()),
            "light" => Some(Theme::light()),
            _ => None,
        }
    }

    /// Parses a theme from a TOML string
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the TOML is malformed or a
    /// color value cannot be parsed.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to a TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme() {
        let theme = Theme::dark();
        assert_eq!(theme.name, "Dark");
        assert_eq!(theme.colors.accent, Color::Cyan);
        assert_eq!(theme.borders, BorderStyle::Rounded);
    }

    #[test]
    fn test_light_theme() {
        let theme = Theme::light();
        assert_eq!(theme.name, "Light");
        assert_eq!(theme.colors.foreground, Color::Black);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Theme::builtin("dark"), Some(Theme::dark()));
        assert_eq!(Theme::builtin("LIGHT"), Some(Theme::light()));
        assert_eq!(Theme::builtin("nord"), None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let theme = Theme::dark();
        let toml_str = theme.to_toml().expect("serialize");
        let parsed = Theme::from_toml(&toml_str).expect("parse");
        assert_eq!(theme, parsed);
    }

    #[test]
    fn test_from_toml_hex_colors() {
        let toml_str = r##"
name = "Custom"
borders = "square"

[colors]
background = "#1e1e2e"
foreground = "white"
accent = "cyan"
selection = "darkgray"
error = "red"
warning = "yellow"
success = "green"
muted = "gray"
gauge = "#89b4fa"
"##;
        let theme = Theme::from_toml(toml_str).expect("parse");
        assert_eq!(theme.name, "Custom");
        assert_eq!(theme.colors.background, Color::Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(theme.colors.gauge, Color::Rgb(0x89, 0xb4, 0xfa));
        assert_eq!(theme.borders, BorderStyle::Square);
    }

    #[test]
    fn test_from_toml_rejects_bad_color() {
        let toml_str = r#"
name = "Broken"
borders = "rounded"

[colors]
background = "not-a-color"
foreground = "white"
accent = "cyan"
selection = "darkgray"
error = "red"
warning = "yellow"
success = "green"
muted = "gray"
gauge = "cyan"
"#;
        assert!(Theme::from_toml(toml_str).is_err());
    }
}
