//! Language-dependent table and list markup.
//!
//! The subscriber growth table and the top posts list carry localized text,
//! so they are rebuilt after every language switch.

use std::fmt::Write;

use super::svg::html_escape;
use crate::chart::group_thousands;
use crate::data::{Lang, MetricSnapshot};
use crate::i18n::{Text, tr};

/// Collaborator that re-renders table and list markup for a language.
pub trait TableRenderer {
    fn render_tables(&mut self, snapshot: &MetricSnapshot, lang: Lang);
}

/// One row of the subscriber growth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthRow {
    pub month: String,
    pub mentions: String,
    pub cumulative_reach: String,
    pub new_subscribers: String,
    pub positive: bool,
}

/// One entry of the ranked top posts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub rank: usize,
    pub title: String,
    pub date: String,
    pub views: String,
    pub url: String,
}

/// Rendered table rows for the current language.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    lang: Option<Lang>,
    growth: Vec<GrowthRow>,
    posts: Vec<PostRow>,
    renders: usize,
}

impl TableSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows built once for `lang`.
    #[must_use]
    pub fn build(snapshot: &MetricSnapshot, lang: Lang) -> Self {
        let mut tables = Self::new();
        tables.render_tables(snapshot, lang);
        tables
    }

    /// Language of the last render, if any.
    #[must_use]
    pub const fn lang(&self) -> Option<Lang> {
        self.lang
    }

    #[must_use]
    pub fn growth_rows(&self) -> &[GrowthRow] {
        &self.growth
    }

    #[must_use]
    pub fn post_rows(&self) -> &[PostRow] {
        &self.posts
    }

    /// How many times the rows were rebuilt.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }

    /// `<tr>` rows for the growth table body.
    #[must_use]
    pub fn growth_html(&self) -> String {
        let mut output = String::new();
        for row in &self.growth {
            let class = if row.positive { "positive" } else { "negative" };
            let _ = writeln!(
                output,
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td class="{class}">{}</td></tr>"#,
                html_escape(&row.month),
                html_escape(&row.mentions),
                row.cumulative_reach,
                row.new_subscribers
            );
        }
        output
    }

    /// Items of the top posts list.
    #[must_use]
    pub fn posts_html(&self) -> String {
        let mut output = String::new();
        for post in &self.posts {
            let _ = writeln!(
                output,
                r#"<a class="post-item" href="{}"><span class="post-rank">{}</span><span class="post-info"><span class="post-id">{}</span><span class="post-date">{}</span></span><span class="post-views">{}</span></a>"#,
                html_escape(&post.url),
                post.rank,
                html_escape(&post.title),
                html_escape(&post.date),
                post.views
            );
        }
        output
    }
}

impl TableRenderer for TableSet {
    fn render_tables(&mut self, snapshot: &MetricSnapshot, lang: Lang) {
        let separator = thousands_separator(lang);
        self.growth = snapshot
            .subscriber_growth
            .iter()
            .map(|row| GrowthRow {
                month: row.month.resolve(lang).to_string(),
                mentions: row.mentions_type.resolve(lang).to_string(),
                cumulative_reach: group_thousands(saturating_i64(row.cumulative_reach), separator),
                new_subscribers: signed(row.new_subscribers),
                positive: row.new_subscribers > 0,
            })
            .collect();

        let post_label = tr(Text::Post, lang);
        self.posts = snapshot
            .top_posts
            .iter()
            .enumerate()
            .map(|(i, post)| PostRow {
                rank: i + 1,
                title: format!("{post_label} {}", post.id),
                date: post.date.clone(),
                views: group_thousands(saturating_i64(post.views), separator),
                url: post.url.clone(),
            })
            .collect();

        self.lang = Some(lang);
        self.renders += 1;
    }
}

/// Digit group separator used by each locale.
#[must_use]
pub const fn thousands_separator(lang: Lang) -> &'static str {
    match lang {
        Lang::Ru => " ",
        Lang::En => ",",
    }
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
