//! Full report page as one tall SVG document.
//!
//! This is the element captured by the exporter. In export mode the
//! interactive chrome (language, theme and export buttons) is left out.

use chrono::NaiveDate;

use super::svg::{ChartColor, SvgBuilder, SvgElement, Text, TextAnchor, coord};
use super::kpi;
use super::tables::TableSet;
use crate::chart::{ChartKey, SurfaceColors, Theme};
use crate::data::{Lang, MetricSnapshot};
use crate::i18n::{Text as Label, tr};

const MARGIN: f64 = 40.0;
const GAP: f64 = 24.0;
const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 300.0;
const KPI_HEIGHT: f64 = 120.0;
const ROW_HEIGHT: f64 = 34.0;

/// Whether the page is shown interactively or laid out for capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Interactive,
    Export,
}

/// Everything the page shows.
pub struct PageContext<'a> {
    pub snapshot: &'a MetricSnapshot,
    pub lang: Lang,
    pub theme: Theme,
    pub tables: &'a TableSet,
    /// Rendered chart markup in page order; `None` for charts not mounted.
    pub charts: Vec<(ChartKey, Option<String>)>,
    pub mode: PresentationMode,
    pub generated: NaiveDate,
    pub width: f64,
}

/// Vertical layout cursor over an [`SvgBuilder`].
struct Canvas {
    parts: Vec<String>,
    colors: SurfaceColors,
    width: f64,
    y: f64,
}

impl Canvas {
    fn inner_width(&self) -> f64 {
        MARGIN.mul_add(-2.0, self.width)
    }

    fn add<E: SvgElement>(&mut self, element: &E) {
        self.parts.push(element.render());
    }

    fn raw(&mut self, svg: String) {
        self.parts.push(svg);
    }

    fn text(&self, x: f64, y: f64, content: impl Into<String>, size: f64) -> Text {
        Text::new(x, y, content, ChartColor::hex(self.colors.text)).with_font_size(size)
    }

    fn muted(&self, x: f64, y: f64, content: impl Into<String>, size: f64) -> Text {
        Text::new(x, y, content, ChartColor::hex(self.colors.text_muted)).with_font_size(size)
    }

    fn card(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.raw(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="12" fill="{}" stroke="{}"/>"#,
            coord(x),
            coord(y),
            coord(width),
            coord(height),
            self.colors.card,
            self.colors.border
        ));
    }
}

/// Render the whole page.
#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let colors = ctx.theme.surface();
    let mut canvas = Canvas {
        parts: Vec::new(),
        colors,
        width: ctx.width,
        y: MARGIN,
    };

    header(&mut canvas, ctx);
    kpi_cards(&mut canvas, ctx);
    charts(&mut canvas, ctx);
    network(&mut canvas, ctx);
    growth_table(&mut canvas, ctx);
    top_posts(&mut canvas, ctx);
    footer(&mut canvas, ctx);

    // Height is only known once every section is laid out.
    let mut page = SvgBuilder::new(ctx.width, canvas.y + MARGIN)
        .with_title(ctx.snapshot.channel.name.clone())
        .with_font_family("sans-serif")
        .with_background(colors.background);
    for part in canvas.parts {
        page.add_raw(part);
    }
    page.build()
}

fn header(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let channel = &ctx.snapshot.channel;
    let y = canvas.y;
    let name = canvas.text(MARGIN, y + 28.0, channel.name.clone(), 28.0).bold();
    canvas.add(&name);
    let meta = format!(
        "{} · {} · {}",
        channel.handle,
        channel.created_date,
        channel.age.resolve(ctx.lang)
    );
    let handle = canvas.muted(MARGIN, y + 52.0, meta, 14.0);
    canvas.add(&handle);

    let right = canvas.width - MARGIN;
    let period_label = canvas
        .muted(right, y + 20.0, tr(Label::ReportPeriod, ctx.lang), 12.0)
        .with_anchor(TextAnchor::End);
    canvas.add(&period_label);
    let period = canvas
        .text(right, y + 42.0, channel.report_period.resolve(ctx.lang), 15.0)
        .with_anchor(TextAnchor::End)
        .bold();
    canvas.add(&period);

    if ctx.mode == PresentationMode::Interactive {
        let toggles = format!(
            "RU | EN · {}: {} · {}",
            tr(Label::ThemeToggle, ctx.lang),
            ctx.theme.as_str(),
            tr(Label::ExportPdf, ctx.lang)
        );
        let chrome = canvas
            .muted(right, y + 64.0, toggles, 12.0)
            .with_anchor(TextAnchor::End);
        canvas.add(&chrome);
    }

    canvas.y += 88.0;
}

fn kpi_cards(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let cards = kpi::kpi_cards(ctx.snapshot, ctx.lang);

    #[allow(clippy::cast_precision_loss)] // Six cards
    let count = cards.len() as f64;
    let card_width = GAP.mul_add(-(count - 1.0), canvas.inner_width()) / count;
    let y = canvas.y;
    for (i, card) in cards.into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = (card_width + GAP).mul_add(i as f64, MARGIN);
        canvas.card(x, y, card_width, KPI_HEIGHT);
        let label = canvas.muted(x + 16.0, y + 28.0, card.label, 13.0);
        canvas.add(&label);
        let value = canvas.text(x + 16.0, y + 66.0, card.value, 28.0).bold();
        canvas.add(&value);
        let detail = canvas.muted(x + 16.0, y + 96.0, card.detail, 11.0);
        canvas.add(&detail);
    }
    canvas.y += KPI_HEIGHT + GAP;
}

fn charts(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let column = (canvas.inner_width() - GAP) / 2.0;
    let scale = column / CHART_WIDTH;
    let cell_height = CHART_HEIGHT * scale;

    for (i, (key, markup)) in ctx.charts.iter().enumerate() {
        let row_y = canvas.y;
        let x = if i % 2 == 0 { MARGIN } else { MARGIN + column + GAP };
        canvas.card(x, row_y, column, cell_height);
        match markup {
            Some(svg) => canvas.raw(format!(
                r#"<g id="{}" transform="translate({} {}) scale({})">{}</g>"#,
                key.mount_id(),
                coord(x),
                coord(row_y),
                scale,
                svg.replace('\n', "")
            )),
            None => {
                let note = canvas
                    .muted(x + column / 2.0, row_y + cell_height / 2.0, key.name(), 13.0)
                    .with_anchor(TextAnchor::Middle);
                canvas.add(&note);
            }
        }
        let title = canvas
            .text(x + 16.0 * scale, row_y + 24.0 * scale, tr(key.title(), ctx.lang), 14.0 * scale)
            .bold();
        canvas.add(&title);
        if i % 2 == 1 || i + 1 == ctx.charts.len() {
            canvas.y += cell_height + GAP;
        }
    }
}

fn network(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let lang = ctx.lang;
    let net = &ctx.snapshot.network;
    let y = canvas.y;
    let width = canvas.inner_width();
    canvas.card(MARGIN, y, width, 110.0);
    let title = canvas
        .text(MARGIN + 20.0, y + 32.0, tr(Label::NetworkStats, lang), 16.0)
        .bold();
    canvas.add(&title);

    let sides = [
        ("←", tr(Label::IncomingChannels, lang), &net.incoming),
        ("→", tr(Label::OutgoingChannels, lang), &net.outgoing),
    ];
    for (i, (arrow, label, side)) in sides.into_iter().enumerate() {
        let x = if i == 0 { MARGIN + 20.0 } else { MARGIN + width / 2.0 };
        let value = canvas
            .text(x, y + 72.0, format!("{arrow} {} {label}", side.channels), 20.0)
            .bold();
        canvas.add(&value);
        let total = canvas.muted(
            x,
            y + 94.0,
            format!("{} {}", side.total_mentions, tr(Label::TotalMentions, lang)),
            12.0,
        );
        canvas.add(&total);
    }
    canvas.y += 110.0 + GAP;
}

fn growth_table(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let lang = ctx.lang;
    let rows = ctx.tables.growth_rows();
    let width = canvas.inner_width();
    #[allow(clippy::cast_precision_loss)] // Few rows
    let height = ROW_HEIGHT.mul_add((rows.len() + 1) as f64, 56.0);
    let y = canvas.y;
    canvas.card(MARGIN, y, width, height);
    let title = canvas
        .text(MARGIN + 20.0, y + 32.0, tr(Label::SubscriberGrowth, lang), 16.0)
        .bold();
    canvas.add(&title);

    let columns = [
        tr(Label::MonthColumn, lang),
        tr(Label::MentionsColumn, lang),
        tr(Label::CumulativeReach, lang),
        tr(Label::NewSubscribers, lang),
    ];
    let column_x = |c: usize| {
        #[allow(clippy::cast_precision_loss)]
        let offset = (width - 40.0) / 4.0 * c as f64;
        MARGIN + 20.0 + offset
    };
    for (c, name) in columns.iter().enumerate() {
        let head = canvas.muted(column_x(c), y + 68.0, name.to_uppercase(), 11.0).bold();
        canvas.add(&head);
    }
    for (r, row) in rows.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let row_y = ROW_HEIGHT.mul_add(r as f64 + 1.0, y + 68.0);
        let cells = [&row.month, &row.mentions, &row.cumulative_reach];
        for (c, cell) in cells.into_iter().enumerate() {
            let text = canvas.text(column_x(c), row_y, cell.clone(), 13.0);
            canvas.add(&text);
        }
        let color = if row.positive { "#22c55e" } else { "#ef4444" };
        canvas.add(
            &Text::new(column_x(3), row_y, row.new_subscribers.clone(), ChartColor::hex(color))
                .with_font_size(13.0)
                .bold(),
        );
    }
    canvas.y += height + GAP;
}

fn top_posts(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let posts = ctx.tables.post_rows();
    let width = canvas.inner_width();
    #[allow(clippy::cast_precision_loss)] // Few posts
    let height = (ROW_HEIGHT + 6.0).mul_add(posts.len() as f64, 56.0);
    let y = canvas.y;
    canvas.card(MARGIN, y, width, height);
    let title = canvas
        .text(MARGIN + 20.0, y + 32.0, tr(Label::MostPopular, ctx.lang), 16.0)
        .bold();
    canvas.add(&title);

    for (i, post) in posts.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let row_y = (ROW_HEIGHT + 6.0).mul_add(i as f64, y + 72.0);
        let rank = canvas.text(MARGIN + 28.0, row_y, post.rank.to_string(), 16.0).bold();
        canvas.add(&rank);
        let title = canvas.text(MARGIN + 60.0, row_y, post.title.clone(), 14.0);
        canvas.add(&title);
        let date = canvas.muted(MARGIN + 60.0 + 160.0, row_y, post.date.clone(), 12.0);
        canvas.add(&date);
        let views = canvas
            .text(MARGIN + width - 20.0, row_y, format!("👁 {}", post.views), 14.0)
            .with_anchor(TextAnchor::End);
        canvas.add(&views);
    }
    canvas.y += height + GAP;
}

fn footer(canvas: &mut Canvas, ctx: &PageContext<'_>) {
    let line = format!(
        "{} TGStat · {} {}",
        tr(Label::DataSource, ctx.lang),
        tr(Label::GeneratedOn, ctx.lang),
        ctx.generated.format("%d.%m.%Y")
    );
    let text = canvas
        .muted(canvas.width / 2.0, canvas.y + 12.0, line, 12.0)
        .with_anchor(TextAnchor::Middle);
    canvas.add(&text);
    canvas.y += 20.0;
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
