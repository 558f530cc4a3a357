//! Report dataset: one immutable snapshot plus its bilingual label convention.

mod bilingual;
mod snapshot;

pub use bilingual::{BilingualString, DELIMITER, Lang, resolve};
pub use snapshot::{
    AdReachKpi, ChannelInfo, CitationKpi, CitationTrend, CountryRecord, EngagementKpi,
    EngagementTrend, Kpi, MentionTypeRecord, MetricSnapshot, NetworkSide, NetworkStats,
    PublicationKpi, ReachKpi, RepostsDynamics, SubscriberGrowthRecord, SubscriberKpi, TopPost,
    TopicRecord, ViewsTrend,
};
