//! Fixed UI strings for the two report languages.

use crate::data::Lang;

/// Key of a translated UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Posts,
    ExportPdf,
    ReportPeriod,
    Subscribers,
    CitationIndex,
    AvgReach,
    Engagement,
    AdReach,
    Today,
    Week,
    Month,
    Channels,
    Mentions,
    Reposts,
    ReadPosts,
    Within24h,
    CitationIndexTrend,
    MentionsByTopic,
    RepostsAndMentions,
    DailyViews,
    EngagementTrend,
    SubscriberGrowth,
    MostPopular,
    MentionsByCountry,
    MentionsByType,
    NetworkStats,
    MonthColumn,
    MentionsColumn,
    CumulativeReach,
    NewSubscribers,
    IncomingChannels,
    OutgoingChannels,
    TotalMentions,
    Views,
    ViewsUnit,
    Interactions,
    Post,
    DataSource,
    GeneratedOn,
    ThemeToggle,
}

/// Translate `text` into `lang`.
#[must_use]
#[allow(clippy::too_many_lines)] // Flat lookup table
pub const fn tr(text: Text, lang: Lang) -> &'static str {
    let (ru, en) = match text {
        Text::Posts => ("публикаций", "publications"),
        Text::ExportPdf => ("Экспорт PDF", "Export PDF"),
        Text::ReportPeriod => ("Отчетный период", "Report Period"),
        Text::Subscribers => ("Подписчики", "Subscribers"),
        Text::CitationIndex => ("Индекс цитирования", "Citation Index"),
        Text::AvgReach => ("Средний охват", "Average Reach"),
        Text::Engagement => ("Вовлеченность", "Engagement"),
        Text::AdReach => ("Рекламный охват", "Ad Reach"),
        Text::Today => ("сегодня", "today"),
        Text::Week => ("неделя", "week"),
        Text::Month => ("месяц", "month"),
        Text::Channels => ("каналов", "channels"),
        Text::Mentions => ("упоминаний", "mentions"),
        Text::Reposts => ("Репосты", "Reposts"),
        Text::ReadPosts => ("читают посты", "read posts"),
        Text::Within24h => ("за 24ч", "in 24h"),
        Text::CitationIndexTrend => ("Динамика индекса цитирования", "Citation Index Trend"),
        Text::MentionsByTopic => ("Упоминания по тематикам", "Mentions by Topic"),
        Text::RepostsAndMentions => (
            "Динамика репостов и упоминаний",
            "Reposts & Mentions Dynamics",
        ),
        Text::DailyViews => ("Просмотры публикаций по дням", "Daily Publication Views"),
        Text::EngagementTrend => (
            "Динамика вовлеченности (ER%)",
            "Engagement Rate Trend (ER%)",
        ),
        Text::SubscriberGrowth => ("Привлечение подписчиков", "Subscriber Acquisition"),
        Text::MostPopular => ("Самые популярные публикации", "Most Popular Posts"),
        Text::MentionsByCountry => ("Упоминания по странам", "Mentions by Country"),
        Text::MentionsByType => ("Упоминания по типу", "Mentions by Type"),
        Text::NetworkStats => (
            "Входящие и исходящие упоминания",
            "Incoming & Outgoing Mentions",
        ),
        Text::MonthColumn => ("Месяц", "Month"),
        Text::MentionsColumn => ("Упоминания", "Mentions"),
        Text::CumulativeReach => ("Суммарный охват", "Cumulative Reach"),
        Text::NewSubscribers => ("Новые подписчики", "New Subscribers"),
        Text::IncomingChannels => ("Каналов упоминают", "Channels mentioning"),
        Text::OutgoingChannels => ("Упоминает каналов", "Channels mentioned"),
        Text::TotalMentions => ("всего упоминаний", "total mentions"),
        Text::Views => ("Просмотры", "Views"),
        Text::ViewsUnit => ("просмотров", "views"),
        Text::Interactions => ("Взаимодействия", "Interactions"),
        Text::Post => ("Пост", "Post"),
        Text::DataSource => ("Источник данных:", "Data source:"),
        Text::GeneratedOn => ("Сгенерировано:", "Generated:"),
        Text::ThemeToggle => ("Тема", "Theme"),
    };

    match lang {
        Lang::Ru => ru,
        Lang::En => en,
    }
}
