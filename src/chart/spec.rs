//! Declarative chart specifications.
//!
//! A [`ChartSpec`] carries everything a rendering backend needs: labels,
//! series, colors, axis configuration and tooltip rules. Specs are plain data
//! and serialize to JSON for external chart frontends.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::format::{format_magnitude, format_percent, format_plain};
use super::theme::ThemePalette;
use crate::i18n::Text;

/// Stable identifier of one visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKey {
    Citation,
    Topics,
    Reposts,
    Views,
    Engagement,
    Country,
    MentionType,
}

impl ChartKey {
    /// All charts in page order.
    pub const ALL: [Self; 7] = [
        Self::Citation,
        Self::Topics,
        Self::Reposts,
        Self::Views,
        Self::Engagement,
        Self::Country,
        Self::MentionType,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Citation => "citation",
            Self::Topics => "topics",
            Self::Reposts => "reposts",
            Self::Views => "views",
            Self::Engagement => "engagement",
            Self::Country => "country",
            Self::MentionType => "mentionType",
        }
    }

    /// Id of the page element the chart mounts into.
    #[must_use]
    pub const fn mount_id(self) -> &'static str {
        match self {
            Self::Citation => "citationChart",
            Self::Topics => "topicsChart",
            Self::Reposts => "repostsChart",
            Self::Views => "viewsChart",
            Self::Engagement => "engagementChart",
            Self::Country => "countryChart",
            Self::MentionType => "mentionTypeChart",
        }
    }

    /// Card heading, rendered by the page rather than inside the chart.
    #[must_use]
    pub const fn title(self) -> Text {
        match self {
            Self::Citation => Text::CitationIndexTrend,
            Self::Topics => Text::MentionsByTopic,
            Self::Reposts => Text::RepostsAndMentions,
            Self::Views => Text::DailyViews,
            Self::Engagement => Text::EngagementTrend,
            Self::Country => Text::MentionsByCountry,
            Self::MentionType => Text::MentionsByType,
        }
    }

    /// Whether the chart's labels change with the display language.
    ///
    /// The citation chart uses raw date labels and is never rebuilt on a
    /// language switch.
    #[must_use]
    pub const fn is_language_dependent(self) -> bool {
        !matches!(self, Self::Citation)
    }

    /// The six charts rebuilt on a language switch.
    pub fn language_dependent() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|key| key.is_language_dependent())
    }
}

impl fmt::Display for ChartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s) || key.mount_id() == s)
            .ok_or_else(|| format!("Unknown chart: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Axis along which categories are laid out. `Y` means horizontal bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
    Y1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Bottom,
    Left,
    Right,
}

/// How axis tick values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    #[default]
    Plain,
    /// `X.XM` / `X.XK` / literal.
    Magnitude,
    /// Trailing `%`.
    Percent,
}

impl TickFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Plain => format_plain(value),
            Self::Magnitude => format_magnitude(value),
            Self::Percent => format_percent(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickStyle {
    pub color: String,
    pub format: TickFormat,
    pub max_ticks: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStyle {
    pub display: bool,
    pub color: String,
}

/// One axis of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub id: AxisId,
    pub position: AxisPosition,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub begin_at_zero: bool,
    pub ticks: TickStyle,
    pub grid: GridStyle,
}

impl Scale {
    /// An axis with palette colors, visible grid and plain ticks.
    #[must_use]
    pub fn new(id: AxisId, position: AxisPosition, palette: &ThemePalette) -> Self {
        Self {
            id,
            position,
            min: None,
            max: None,
            begin_at_zero: false,
            ticks: TickStyle {
                color: palette.text_color.to_string(),
                format: TickFormat::Plain,
                max_ticks: None,
            },
            grid: GridStyle {
                display: true,
                color: palette.grid_color.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn from_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    #[must_use]
    pub const fn without_grid(mut self) -> Self {
        self.grid.display = false;
        self
    }

    #[must_use]
    pub const fn with_tick_format(mut self, format: TickFormat) -> Self {
        self.ticks.format = format;
        self
    }

    #[must_use]
    pub const fn with_max_ticks(mut self, max: usize) -> Self {
        self.ticks.max_ticks = Some(max);
        self
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One color for the whole series, or one per point (cycled).
    pub colors: Vec<String>,
    pub border_color: Option<String>,
    pub fill: bool,
    pub dashed: bool,
    pub point_radius: f64,
    pub axis: AxisId,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.into(),
            data,
            colors: vec![color.to_string()],
            border_color: None,
            fill: false,
            dashed: false,
            point_radius: 0.0,
            axis: AxisId::Y,
        }
    }

    /// Color for the point at `index`, cycling the color list.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return "currentColor";
        }
        &self.colors[index % self.colors.len()]
    }

    /// Stroke color for line series.
    #[must_use]
    pub fn stroke(&self) -> &str {
        self.border_color
            .as_deref()
            .unwrap_or_else(|| self.color_at(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Legend {
    Hidden,
    Right,
    TopEnd,
}

/// Tooltip text rule for a data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum TooltipRule {
    /// `"<dataset>: <value>"`
    Default,
    /// `"<prefix>: <value with decimals>"`
    Labeled { prefix: String, decimals: usize },
    /// `"<count> (<share>%)"` with one share per point.
    CountShare { shares: Vec<f64> },
    /// `"<magnitude> <unit>"`
    Magnitude { unit: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub key: ChartKey,
    pub kind: ChartKind,
    pub index_axis: IndexAxis,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub scales: Vec<Scale>,
    pub legend: Legend,
    pub tooltip: TooltipRule,
    /// Inner radius of a doughnut as a fraction of the outer radius.
    pub cutout: Option<f64>,
}

impl ChartSpec {
    #[must_use]
    pub fn scale(&self, id: AxisId) -> Option<&Scale> {
        self.scales.iter().find(|scale| scale.id == id)
    }

    /// Total number of data points across all series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|dataset| dataset.data.len()).sum()
    }

    /// Overwrite tick and grid colors of every axis. Nothing else changes.
    pub fn apply_palette(&mut self, palette: &ThemePalette) {
        for scale in &mut self.scales {
            scale.ticks.color = palette.text_color.to_string();
            scale.grid.color = palette.grid_color.to_string();
        }
    }

    /// Tooltip text for point `index` of series `dataset`.
    #[must_use]
    pub fn tooltip_text(&self, dataset: usize, index: usize) -> Option<String> {
        let series = self.datasets.get(dataset)?;
        let value = *series.data.get(index)?;
        let text = match &self.tooltip {
            TooltipRule::Default => {
                if series.label.is_empty() {
                    format_plain(value)
                } else {
                    format!("{}: {}", series.label, format_plain(value))
                }
            }
            TooltipRule::Labeled { prefix, decimals } => {
                format!("{prefix}: {value:.decimals$}")
            }
            TooltipRule::CountShare { shares } => {
                let share = shares.get(index).copied().unwrap_or_default();
                format!("{} ({}%)", format_plain(value), format_plain(share))
            }
            TooltipRule::Magnitude { unit } => format!("{} {unit}", format_magnitude(value)),
        };
        Some(text)
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
