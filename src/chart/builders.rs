//! One pure builder per visualization.
//!
//! Builders read a [`MetricSnapshot`], the display language and the theme
//! palette, and return a fresh [`ChartSpec`]. They never look at live chart
//! state, so the same inputs always produce an equal spec.

use super::format::truncate_label;
use super::spec::{
    AxisId, AxisPosition, ChartKey, ChartKind, ChartSpec, Dataset, IndexAxis, Legend, Scale,
    TickFormat, TooltipRule,
};
use super::theme::ThemePalette;
use crate::data::{Lang, MetricSnapshot};
use crate::i18n::{Text, tr};

/// Longest mention-type label before it is cut.
pub const MENTION_TYPE_LABEL_MAX: usize = 20;

const CITATION_COLOR: &str = "#8b5cf6";
const CITATION_FILL: &str = "rgba(139, 92, 246, 0.2)";
const MENTIONS_BAR_COLOR: &str = "rgba(59, 130, 246, 0.8)";
const REPOSTS_BAR_COLOR: &str = "rgba(20, 184, 166, 0.8)";
const VIEWS_COLOR: &str = "#3b82f6";
const VIEWS_FILL: &str = "rgba(59, 130, 246, 0.1)";
const ER_COLOR: &str = "#ec4899";
const ER_FILL: &str = "rgba(236, 72, 153, 0.1)";
const INTERACTIONS_COLOR: &str = "#8b5cf6";

const COUNTRY_COLORS: [&str; 5] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(249, 115, 22, 0.8)",
    "rgba(100, 116, 139, 0.8)",
];

const MENTION_TYPE_COLORS: [&str; 5] = [
    "rgba(139, 92, 246, 0.8)",
    "rgba(59, 130, 246, 0.8)",
    "rgba(20, 184, 166, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(245, 158, 11, 0.8)",
];

/// Build the spec for `key`.
#[must_use]
pub fn build(
    key: ChartKey,
    snapshot: &MetricSnapshot,
    lang: Lang,
    palette: &ThemePalette,
) -> ChartSpec {
    match key {
        ChartKey::Citation => citation_chart(snapshot, lang, palette),
        ChartKey::Topics => topics_chart(snapshot, lang),
        ChartKey::Reposts => reposts_chart(snapshot, lang, palette),
        ChartKey::Views => views_chart(snapshot, lang, palette),
        ChartKey::Engagement => engagement_chart(snapshot, lang, palette),
        ChartKey::Country => country_chart(snapshot, lang, palette),
        ChartKey::MentionType => mention_type_chart(snapshot, lang, palette),
    }
}

/// Citation index area chart. Labels are raw dates in every language.
#[must_use]
pub fn citation_chart(snapshot: &MetricSnapshot, lang: Lang, palette: &ThemePalette) -> ChartSpec {
    let trend = &snapshot.citation_trend;
    let mut dataset = Dataset::new("Citation Index", trend.values.clone(), CITATION_FILL);
    dataset.border_color = Some(CITATION_COLOR.to_string());
    dataset.fill = true;

    ChartSpec {
        key: ChartKey::Citation,
        kind: ChartKind::Line,
        index_axis: IndexAxis::X,
        title: tr(ChartKey::Citation.title(), lang).to_string(),
        labels: trend.labels.clone(),
        datasets: vec![dataset],
        scales: vec![
            Scale::new(AxisId::X, AxisPosition::Bottom, palette)
                .without_grid()
                .with_max_ticks(10),
            Scale::new(AxisId::Y, AxisPosition::Left, palette).with_range(470.0, 490.0),
        ],
        legend: Legend::Hidden,
        tooltip: TooltipRule::Labeled {
            prefix: "Index".to_string(),
            decimals: 1,
        },
        cutout: None,
    }
}

/// Topics doughnut with per-topic colors from the data.
#[must_use]
pub fn topics_chart(snapshot: &MetricSnapshot, lang: Lang) -> ChartSpec {
    let topics = &snapshot.mentions_by_topic;
    let mut dataset = Dataset::new(
        String::new(),
        topics.iter().map(|t| count_value(t.count)).collect(),
        "",
    );
    dataset.colors = topics.iter().map(|t| t.color.clone()).collect();

    ChartSpec {
        key: ChartKey::Topics,
        kind: ChartKind::Doughnut,
        index_axis: IndexAxis::X,
        title: tr(ChartKey::Topics.title(), lang).to_string(),
        labels: topics
            .iter()
            .map(|t| t.topic.resolve(lang).to_string())
            .collect(),
        datasets: vec![dataset],
        scales: Vec::new(),
        legend: Legend::Right,
        tooltip: TooltipRule::CountShare {
            shares: topics.iter().map(|t| t.percentage).collect(),
        },
        cutout: Some(0.65),
    }
}

/// Grouped mentions/reposts bars.
#[must_use]
pub fn reposts_chart(snapshot: &MetricSnapshot, lang: Lang, palette: &ThemePalette) -> ChartSpec {
    let dynamics = &snapshot.reposts_dynamics;

    ChartSpec {
        key: ChartKey::Reposts,
        kind: ChartKind::Bar,
        index_axis: IndexAxis::X,
        title: tr(ChartKey::Reposts.title(), lang).to_string(),
        labels: dynamics.labels.clone(),
        datasets: vec![
            Dataset::new(
                tr(Text::MentionsColumn, lang),
                dynamics.mentions.clone(),
                MENTIONS_BAR_COLOR,
            ),
            Dataset::new(
                tr(Text::Reposts, lang),
                dynamics.reposts.clone(),
                REPOSTS_BAR_COLOR,
            ),
        ],
        scales: vec![
            Scale::new(AxisId::X, AxisPosition::Bottom, palette)
                .without_grid()
                .with_max_ticks(10),
            Scale::new(AxisId::Y, AxisPosition::Left, palette).from_zero(),
        ],
        legend: Legend::Hidden,
        tooltip: TooltipRule::Default,
        cutout: None,
    }
}

/// Daily views line with magnitude-scaled ticks and tooltips.
#[must_use]
pub fn views_chart(snapshot: &MetricSnapshot, lang: Lang, palette: &ThemePalette) -> ChartSpec {
    let trend = &snapshot.views_trend;
    let mut dataset = Dataset::new(tr(Text::Views, lang), trend.views.clone(), VIEWS_FILL);
    dataset.border_color = Some(VIEWS_COLOR.to_string());
    dataset.fill = true;
    dataset.point_radius = 4.0;

    ChartSpec {
        key: ChartKey::Views,
        kind: ChartKind::Line,
        index_axis: IndexAxis::X,
        title: tr(ChartKey::Views.title(), lang).to_string(),
        labels: trend.labels.clone(),
        datasets: vec![dataset],
        scales: vec![
            Scale::new(AxisId::X, AxisPosition::Bottom, palette).without_grid(),
            Scale::new(AxisId::Y, AxisPosition::Left, palette)
                .with_tick_format(TickFormat::Magnitude),
        ],
        legend: Legend::Hidden,
        tooltip: TooltipRule::Magnitude {
            unit: tr(Text::ViewsUnit, lang).to_string(),
        },
        cutout: None,
    }
}

/// ER% on the left axis, raw interactions on an independent right axis.
#[must_use]
pub fn engagement_chart(
    snapshot: &MetricSnapshot,
    lang: Lang,
    palette: &ThemePalette,
) -> ChartSpec {
    let trend = &snapshot.engagement_trend;

    let mut er = Dataset::new("ER%", trend.er_percent.clone(), ER_FILL);
    er.border_color = Some(ER_COLOR.to_string());
    er.fill = true;
    er.point_radius = 4.0;

    let mut interactions = Dataset::new(
        tr(Text::Interactions, lang),
        trend.avg_interactions.clone(),
        INTERACTIONS_COLOR,
    );
    interactions.dashed = true;
    interactions.axis = AxisId::Y1;

    ChartSpec {
        key: ChartKey::Engagement,
        kind: ChartKind::Line,
        index_axis: IndexAxis::X,
        title: tr(ChartKey::Engagement.title(), lang).to_string(),
        labels: trend.labels.clone(),
        datasets: vec![er, interactions],
        scales: vec![
            Scale::new(AxisId::X, AxisPosition::Bottom, palette).without_grid(),
            Scale::new(AxisId::Y, AxisPosition::Left, palette)
                .with_tick_format(TickFormat::Percent),
            Scale::new(AxisId::Y1, AxisPosition::Right, palette).without_grid(),
        ],
        legend: Legend::TopEnd,
        tooltip: TooltipRule::Default,
        cutout: None,
    }
}

/// Horizontal bars labelled `"<flag> <country>"`.
#[must_use]
pub fn country_chart(snapshot: &MetricSnapshot, lang: Lang, palette: &ThemePalette) -> ChartSpec {
    let countries = &snapshot.mentions_by_country;
    let mut dataset = Dataset::new(
        String::new(),
        countries.iter().map(|c| count_value(c.count)).collect(),
        "",
    );
    dataset.colors = COUNTRY_COLORS.iter().map(ToString::to_string).collect();

    ChartSpec {
        key: ChartKey::Country,
        kind: ChartKind::Bar,
        index_axis: IndexAxis::Y,
        title: tr(ChartKey::Country.title(), lang).to_string(),
        labels: countries
            .iter()
            .map(|c| format!("{} {}", c.flag, c.country.resolve(lang)))
            .collect(),
        datasets: vec![dataset],
        scales: horizontal_scales(palette),
        legend: Legend::Hidden,
        tooltip: TooltipRule::CountShare {
            shares: countries.iter().map(|c| c.percentage).collect(),
        },
        cutout: None,
    }
}

/// Horizontal bars with labels cut to [`MENTION_TYPE_LABEL_MAX`] characters.
#[must_use]
pub fn mention_type_chart(
    snapshot: &MetricSnapshot,
    lang: Lang,
    palette: &ThemePalette,
) -> ChartSpec {
    let types = &snapshot.mentions_by_type;
    let mut dataset = Dataset::new(
        String::new(),
        types.iter().map(|t| count_value(t.count)).collect(),
        "",
    );
    dataset.colors = MENTION_TYPE_COLORS.iter().map(ToString::to_string).collect();

    ChartSpec {
        key: ChartKey::MentionType,
        kind: ChartKind::Bar,
        index_axis: IndexAxis::Y,
        title: tr(ChartKey::MentionType.title(), lang).to_string(),
        labels: types
            .iter()
            .map(|t| truncate_label(t.kind.resolve(lang), MENTION_TYPE_LABEL_MAX))
            .collect(),
        datasets: vec![dataset],
        scales: horizontal_scales(palette),
        legend: Legend::Hidden,
        tooltip: TooltipRule::CountShare {
            shares: types.iter().map(|t| t.percentage).collect(),
        },
        cutout: None,
    }
}

/// Value axis along x from zero, category axis along y without grid.
fn horizontal_scales(palette: &ThemePalette) -> Vec<Scale> {
    vec![
        Scale::new(AxisId::X, AxisPosition::Bottom, palette).from_zero(),
        Scale::new(AxisId::Y, AxisPosition::Left, palette).without_grid(),
    ]
}

#[allow(clippy::cast_precision_loss)] // Mention counts are far below 2^52
fn count_value(count: u64) -> f64 {
    count as f64
}

#[cfg(test)]
#[path = "builders_tests.rs"]
mod tests;
