//! SVG chart generation primitives.
//!
//! Output is plain static SVG with concrete colors so the same markup can be
//! inlined into the HTML report and rasterized for export:
//! - width/height plus viewBox (renders at any size)
//! - `<title>` elements carry hover text for every data point

mod builder;
mod chart;
mod element;
mod format;
mod scale;
mod style;

pub use builder::SvgBuilder;
pub use chart::ChartRenderer;
pub use element::{Bar, Line, Point, Rule, Slice, SvgElement, Text};
pub use format::{coord, html_escape};
pub use scale::{ValueAxis, nice_step};
pub use style::{ChartColor, TextAnchor};
