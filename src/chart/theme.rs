//! Light/dark themes and the colors derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Report color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Axis tick and grid colors for this theme.
    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette {
                text_color: "#475569",
                grid_color: "rgba(0, 0, 0, 0.08)",
            },
            Self::Dark => ThemePalette {
                text_color: "#94a3b8",
                grid_color: "rgba(255, 255, 255, 0.05)",
            },
        }
    }

    /// Page-level surface colors used by the HTML and SVG page renderers.
    #[must_use]
    pub const fn surface(self) -> SurfaceColors {
        match self {
            Self::Light => SurfaceColors {
                background: "#f8fafc",
                card: "#ffffff",
                border: "#e2e8f0",
                text: "#1e293b",
                text_muted: "#64748b",
            },
            Self::Dark => SurfaceColors {
                background: "#0f172a",
                card: "#1e293b",
                border: "#334155",
                text: "#f8fafc",
                text_muted: "#94a3b8",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {s} (expected light or dark)")),
        }
    }
}

/// Colors a restyle is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub text_color: &'static str,
    pub grid_color: &'static str,
}

/// Non-chart colors of the report surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceColors {
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn palettes_match_theme() {
        assert_eq!(Theme::Light.palette().text_color, "#475569");
        assert_eq!(Theme::Dark.palette().grid_color, "rgba(255, 255, 255, 0.05)");
    }

    #[test]
    fn parses_theme_names() {
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
