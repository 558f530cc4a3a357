//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// A concrete paint: an opaque color plus opacity.
///
/// Chart colors arrive as `#rrggbb` or `rgba(r, g, b, a)` strings. The alpha
/// channel is split out into a separate opacity attribute so the output stays
/// within what static SVG rasterizers accept.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartColor {
    color: String,
    opacity: f64,
}

impl ChartColor {
    /// Parse a CSS color. Anything that is not `rgba(...)` is passed through.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let css = css.trim();
        if let Some(inner) = css
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            if let [r, g, b, a] = parts.as_slice()
                && let Ok(alpha) = a.parse::<f64>()
            {
                return Self {
                    color: format!("rgb({r},{g},{b})"),
                    opacity: alpha.clamp(0.0, 1.0),
                };
            }
        }
        Self {
            color: css.to_string(),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self {
            color: color.to_string(),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Color value without alpha.
    #[must_use]
    pub fn to_css(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    /// `fill="..."` plus `fill-opacity` when translucent.
    #[must_use]
    pub fn fill_attrs(&self) -> String {
        self.attrs("fill")
    }

    /// `stroke="..."` plus `stroke-opacity` when translucent.
    #[must_use]
    pub fn stroke_attrs(&self) -> String {
        self.attrs("stroke")
    }

    fn attrs(&self, name: &str) -> String {
        if self.opacity < 1.0 {
            format!(r#"{name}="{}" {name}-opacity="{}""#, self.color, self.opacity)
        } else {
            format!(r#"{name}="{}""#, self.color)
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
