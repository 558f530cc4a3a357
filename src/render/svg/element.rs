//! Primitive SVG elements: text, bars, lines, points and donut slices.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A positioned text label.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub color: ChartColor,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub bold: bool,
    /// Vertically center on `y` instead of sitting on it.
    pub middle: bool,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>, color: ChartColor) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            color,
            font_size: 11.0,
            anchor: TextAnchor::Start,
            bold: false,
            middle: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn centered_vertically(mut self) -> Self {
        self.middle = true;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let weight = if self.bold { r#" font-weight="600""# } else { "" };
        let baseline = if self.middle {
            r#" dominant-baseline="middle""#
        } else {
            ""
        };
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" {} font-size="{}"{weight}{baseline}>{}</text>"#,
            coord(self.x),
            coord(self.y),
            self.anchor,
            self.color.fill_attrs(),
            self.font_size,
            html_escape(&self.content)
        )
    }
}

/// A single bar with a hover title.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub tooltip: String,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let tooltip = html_escape(&self.tooltip);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {} rx="2">
    <title>{tooltip}</title>
</rect>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width.max(0.0)),
            coord(self.height.max(0.0)),
            self.color.fill_attrs()
        )
    }
}

/// A straight horizontal or vertical rule, used for grid lines and axes.
#[derive(Debug, Clone)]
pub struct Rule {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: ChartColor,
}

impl SvgElement for Rule {
    fn render(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="1"/>"#,
            coord(self.x1),
            coord(self.y1),
            coord(self.x2),
            coord(self.y2),
            self.color.stroke_attrs()
        )
    }
}

/// A polyline series, optionally filled down to a baseline.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub stroke: ChartColor,
    pub stroke_width: f64,
    pub dashed: bool,
    /// Area fill color. Requires `baseline_y`.
    pub fill: Option<ChartColor>,
    /// Y-coordinate of the fill baseline. Higher values are lower on screen.
    pub baseline_y: Option<f64>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, stroke: ChartColor) -> Self {
        Self {
            points,
            stroke,
            stroke_width: 2.0,
            dashed: false,
            fill: None,
            baseline_y: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: ChartColor, baseline_y: f64) -> Self {
        self.fill = Some(fill);
        self.baseline_y = Some(baseline_y);
        self
    }

    #[must_use]
    pub const fn with_dashes(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let op = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{op}{},{}", coord(*x), coord(*y));
        }

        let mut output = String::new();

        if let (Some(fill), Some(baseline_y)) = (&self.fill, self.baseline_y)
            && self.points.len() >= 2
        {
            let first_x = self.points[0].0;
            let last_x = self.points[self.points.len() - 1].0;
            let _ = writeln!(
                output,
                r#"<path d="{path} L{},{} L{},{} Z" {} stroke="none"/>"#,
                coord(last_x),
                coord(baseline_y),
                coord(first_x),
                coord(baseline_y),
                fill.fill_attrs()
            );
        }

        let dash = if self.dashed {
            r#" stroke-dasharray="5,5""#
        } else {
            ""
        };
        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" {} stroke-width="{}"{dash} stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke.stroke_attrs(),
            self.stroke_width
        );

        output
    }
}

/// A data point marker with a hover title.
#[derive(Debug, Clone)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: ChartColor,
    pub tooltip: String,
}

impl SvgElement for Point {
    fn render(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}>
    <title>{}</title>
</circle>"#,
            coord(self.x),
            coord(self.y),
            self.radius,
            self.color.fill_attrs(),
            html_escape(&self.tooltip)
        )
    }
}

/// One slice of a donut, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone)]
pub struct Slice {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub inner_radius: f64,
    pub start: f64,
    pub end: f64,
    pub color: ChartColor,
    pub tooltip: String,
}

impl Slice {
    fn polar(&self, radius: f64, angle: f64) -> (String, String) {
        let theta = angle - FRAC_PI_2;
        (
            coord(radius.mul_add(theta.cos(), self.cx)),
            coord(radius.mul_add(theta.sin(), self.cy)),
        )
    }

    fn arc_path(&self, start: f64, end: f64) -> String {
        let large = i32::from(end - start > std::f64::consts::PI);
        let (ox0, oy0) = self.polar(self.radius, start);
        let (ox1, oy1) = self.polar(self.radius, end);
        let r = coord(self.radius);
        if self.inner_radius <= 0.0 {
            return format!(
                "M{},{} L{ox0},{oy0} A{r},{r} 0 {large} 1 {ox1},{oy1} Z",
                coord(self.cx),
                coord(self.cy)
            );
        }
        let (ix0, iy0) = self.polar(self.inner_radius, start);
        let (ix1, iy1) = self.polar(self.inner_radius, end);
        let ri = coord(self.inner_radius);
        format!(
            "M{ox0},{oy0} A{r},{r} 0 {large} 1 {ox1},{oy1} L{ix1},{iy1} A{ri},{ri} 0 {large} 0 {ix0},{iy0} Z"
        )
    }
}

impl SvgElement for Slice {
    fn render(&self) -> String {
        let sweep = self.end - self.start;
        if sweep <= 0.0 {
            return String::new();
        }
        // A full circle cannot be drawn as one arc; split it in two halves.
        let d = if sweep >= TAU - 1e-9 {
            let mid = self.start + sweep / 2.0;
            format!(
                "{} {}",
                self.arc_path(self.start, mid),
                self.arc_path(mid, self.end)
            )
        } else {
            self.arc_path(self.start, self.end)
        };
        format!(
            r#"<path d="{d}" {}>
    <title>{}</title>
</path>"#,
            self.color.fill_attrs(),
            html_escape(&self.tooltip)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
