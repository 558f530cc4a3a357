//! Chart specifications, their builders and the live chart registry.

mod builders;
mod format;
mod registry;
mod spec;
mod theme;

pub use builders::{
    MENTION_TYPE_LABEL_MAX, build, citation_chart, country_chart, engagement_chart,
    mention_type_chart, reposts_chart, topics_chart, views_chart,
};
pub use format::{format_magnitude, format_percent, format_plain, group_thousands, truncate_label};
pub use registry::{ChartBackend, ChartRegistry};
pub use spec::{
    AxisId, AxisPosition, ChartKey, ChartKind, ChartSpec, Dataset, GridStyle, IndexAxis, Legend,
    Scale, TickFormat, TickStyle, TooltipRule,
};
pub use theme::{SurfaceColors, Theme, ThemePalette};

#[cfg(test)]
pub(crate) mod testing;
