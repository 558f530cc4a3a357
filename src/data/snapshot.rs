use std::path::Path;

use serde::{Deserialize, Serialize};

use super::BilingualString;
use crate::error::{DashboardError, Result};

const BUILTIN_SNAPSHOT: &str = include_str!("sample_snapshot.toml");

/// Channel identity shown in the report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    pub handle: String,
    pub created_date: String,
    pub age: BilingualString,
    pub report_period: BilingualString,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberKpi {
    pub total: u64,
    pub change_today: i64,
    pub change_week: i64,
    pub change_month: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationKpi {
    pub value: f64,
    pub channels_citing: u64,
    pub mentions: u64,
    pub reposts: u64,
    pub chats_citing: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachKpi {
    pub per_post: u64,
    pub err: f64,
    pub err24: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdReachKpi {
    pub average: u64,
    pub reach_12h: u64,
    pub reach_24h: u64,
    pub reach_48h: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementKpi {
    pub rate: f64,
    pub read_posts: u64,
    pub read_in_24h: u64,
    pub forwards: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationKpi {
    pub total: u64,
    pub yesterday: u64,
    pub this_week: u64,
    pub this_month: u64,
}

/// Scalar headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub subscribers: SubscriberKpi,
    pub citation_index: CitationKpi,
    pub avg_reach: ReachKpi,
    pub ad_reach: AdReachKpi,
    pub engagement: EngagementKpi,
    pub publications: PublicationKpi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSide {
    pub channels: u64,
    pub total_mentions: u64,
}

/// Incoming and outgoing channel mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub incoming: NetworkSide,
    pub outgoing: NetworkSide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationTrend {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionTypeRecord {
    #[serde(rename = "type")]
    pub kind: BilingualString,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub topic: BilingualString,
    pub count: u64,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: BilingualString,
    pub count: u64,
    pub percentage: f64,
    pub flag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepostsDynamics {
    pub labels: Vec<String>,
    pub mentions: Vec<f64>,
    pub reposts: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewsTrend {
    pub labels: Vec<String>,
    pub views: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementTrend {
    pub labels: Vec<String>,
    pub er_percent: Vec<f64>,
    pub avg_interactions: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberGrowthRecord {
    pub month: BilingualString,
    pub mentions: u64,
    pub cumulative_reach: u64,
    pub new_subscribers: i64,
    pub mentions_type: BilingualString,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPost {
    pub id: String,
    pub url: String,
    pub date: String,
    pub views: u64,
}

/// Every metric of one reporting period. Loaded once, then read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub channel: ChannelInfo,
    pub kpi: Kpi,
    pub network: NetworkStats,
    #[serde(default)]
    pub citation_trend: CitationTrend,
    #[serde(default)]
    pub mentions_by_type: Vec<MentionTypeRecord>,
    #[serde(default)]
    pub mentions_by_topic: Vec<TopicRecord>,
    #[serde(default)]
    pub mentions_by_country: Vec<CountryRecord>,
    #[serde(default)]
    pub reposts_dynamics: RepostsDynamics,
    #[serde(default)]
    pub views_trend: ViewsTrend,
    #[serde(default)]
    pub engagement_trend: EngagementTrend,
    #[serde(default)]
    pub subscriber_growth: Vec<SubscriberGrowthRecord>,
    #[serde(default)]
    pub top_posts: Vec<TopPost>,
}

impl MetricSnapshot {
    /// The sample dataset compiled into the binary.
    ///
    /// # Errors
    /// Returns an error only if the embedded sample is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_SNAPSHOT)
    }

    /// Raw TOML of the built-in sample (written by `init`).
    #[must_use]
    pub const fn builtin_source() -> &'static str {
        BUILTIN_SNAPSHOT
    }

    /// Parse and validate a snapshot from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or a trend collection is inconsistent.
    pub fn from_toml(content: &str) -> Result<Self> {
        let snapshot: Self = toml::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check that every trend collection has one value per label.
    ///
    /// # Errors
    /// Returns [`DashboardError::Snapshot`] naming the first inconsistent series.
    pub fn validate(&self) -> Result<()> {
        let series: [(&str, usize, usize); 6] = [
            (
                "citation_trend.values",
                self.citation_trend.labels.len(),
                self.citation_trend.values.len(),
            ),
            (
                "reposts_dynamics.mentions",
                self.reposts_dynamics.labels.len(),
                self.reposts_dynamics.mentions.len(),
            ),
            (
                "reposts_dynamics.reposts",
                self.reposts_dynamics.labels.len(),
                self.reposts_dynamics.reposts.len(),
            ),
            (
                "views_trend.views",
                self.views_trend.labels.len(),
                self.views_trend.views.len(),
            ),
            (
                "engagement_trend.er_percent",
                self.engagement_trend.labels.len(),
                self.engagement_trend.er_percent.len(),
            ),
            (
                "engagement_trend.avg_interactions",
                self.engagement_trend.labels.len(),
                self.engagement_trend.avg_interactions.len(),
            ),
        ];

        for (name, labels, values) in series {
            if labels != values {
                return Err(DashboardError::Snapshot(format!(
                    "{name} has {values} values for {labels} labels"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
