//! Headline KPI cards shared by the HTML and SVG page renderers.

use super::tables::thousands_separator;
use crate::chart::{format_plain, group_thousands};
use crate::data::{Lang, MetricSnapshot};
use crate::i18n::{Text, tr};

/// One summary card: caption, headline value and a detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub detail: String,
}

/// The six KPI cards in display order.
#[must_use]
pub fn kpi_cards(snapshot: &MetricSnapshot, lang: Lang) -> Vec<KpiCard> {
    let kpi = &snapshot.kpi;
    let sep = thousands_separator(lang);
    let count = |value: u64| group_thousands(i64::try_from(value).unwrap_or(i64::MAX), sep);

    vec![
        KpiCard {
            id: "subscribers",
            label: tr(Text::Subscribers, lang),
            value: count(kpi.subscribers.total),
            detail: format!(
                "{} {:+} · {} {:+} · {} {:+}",
                tr(Text::Today, lang),
                kpi.subscribers.change_today,
                tr(Text::Week, lang),
                kpi.subscribers.change_week,
                tr(Text::Month, lang),
                kpi.subscribers.change_month
            ),
        },
        KpiCard {
            id: "citation",
            label: tr(Text::CitationIndex, lang),
            value: format_plain(kpi.citation_index.value),
            detail: format!(
                "{} {} · {} {}",
                count(kpi.citation_index.channels_citing),
                tr(Text::Channels, lang),
                count(kpi.citation_index.mentions),
                tr(Text::Mentions, lang)
            ),
        },
        KpiCard {
            id: "reach",
            label: tr(Text::AvgReach, lang),
            value: count(kpi.avg_reach.per_post),
            detail: format!(
                "ERR {}% · ERR24 {}%",
                format_plain(kpi.avg_reach.err),
                format_plain(kpi.avg_reach.err24)
            ),
        },
        KpiCard {
            id: "ad-reach",
            label: tr(Text::AdReach, lang),
            value: count(kpi.ad_reach.average),
            detail: format!(
                "12h {} · 24h {} · 48h {}",
                count(kpi.ad_reach.reach_12h),
                count(kpi.ad_reach.reach_24h),
                count(kpi.ad_reach.reach_48h)
            ),
        },
        KpiCard {
            id: "engagement",
            label: tr(Text::Engagement, lang),
            value: format!("{}%", format_plain(kpi.engagement.rate)),
            detail: format!(
                "{}% {} · {}% {}",
                kpi.engagement.read_posts,
                tr(Text::ReadPosts, lang),
                kpi.engagement.read_in_24h,
                tr(Text::Within24h, lang)
            ),
        },
        KpiCard {
            id: "publications",
            label: tr(Text::Posts, lang),
            value: count(kpi.publications.total),
            detail: format!(
                "{} {} · {} {}",
                tr(Text::Week, lang),
                kpi.publications.this_week,
                tr(Text::Month, lang),
                kpi.publications.this_month
            ),
        },
    ]
}
