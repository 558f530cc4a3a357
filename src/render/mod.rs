//! Turning specs and snapshots into markup.

mod backend;
mod html;
mod html_template;
mod kpi;
mod page;
pub mod svg;
mod tables;

pub use backend::{SvgBackend, SvgHandle};
pub use html::HtmlFormatter;
pub use kpi::{KpiCard, kpi_cards};
pub use page::{PageContext, PresentationMode, render_page};
pub use tables::{GrowthRow, PostRow, TableRenderer, TableSet, thousands_separator};

/// Formats a whole report page.
pub trait PageFormatter {
    fn format(&self, ctx: &PageContext<'_>) -> String;
}

/// Full-page SVG, the document the exporter rasterizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPageFormatter;

impl PageFormatter for SvgPageFormatter {
    fn format(&self, ctx: &PageContext<'_>) -> String {
        render_page(ctx)
    }
}

/// Page output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    Html,
    Svg,
}

impl PageFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn PageFormatter> {
        match self {
            Self::Html => Box::new(HtmlFormatter::new()),
            Self::Svg => Box::new(SvgPageFormatter),
        }
    }
}

impl std::str::FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown page format: {s}")),
        }
    }
}
