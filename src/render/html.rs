use std::fmt::Write;

use super::html_template::{HTML_SCRIPT, HTML_STYLES};
use super::kpi::kpi_cards;
use super::page::{PageContext, PresentationMode};
use super::svg::html_escape;
use super::PageFormatter;
use crate::data::Lang;
use crate::i18n::{Text, tr};

/// Standalone HTML dashboard with inline chart SVG.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_head(output: &mut String, ctx: &PageContext<'_>) {
        let _ = writeln!(
            output,
            r#"<!DOCTYPE html>
<html lang="{}" data-theme="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>"#,
            ctx.lang.code(),
            ctx.theme.as_str(),
            html_escape(&ctx.snapshot.channel.name)
        );
        output.push_str(HTML_STYLES);
        output.push_str("</head>\n<body>\n    <div class=\"container\" id=\"dashboard\">\n");
    }

    fn write_header(output: &mut String, ctx: &PageContext<'_>) {
        let channel = &ctx.snapshot.channel;
        let lang = ctx.lang;
        let _ = writeln!(
            output,
            r#"        <div class="header">
            <div>
                <h1>{}</h1>
                <div class="channel-meta">{} · {} · {}</div>
            </div>
            <div class="period">
                <div class="label">{}</div>
                <div class="value">{}</div>"#,
            html_escape(&channel.name),
            html_escape(&channel.handle),
            html_escape(&channel.created_date),
            html_escape(channel.age.resolve(lang)),
            tr(Text::ReportPeriod, lang),
            html_escape(channel.report_period.resolve(lang))
        );

        if ctx.mode == PresentationMode::Interactive {
            let active = |l: Lang| if l == lang { " class=\"active\"" } else { "" };
            let _ = writeln!(
                output,
                r#"                <div class="controls">
                    <button id="lang-ru"{}>RU</button>
                    <button id="lang-en"{}>EN</button>
                    <button id="theme-toggle">{}</button>
                    <button id="export-pdf">{}</button>
                </div>"#,
                active(Lang::Ru),
                active(Lang::En),
                tr(Text::ThemeToggle, lang),
                tr(Text::ExportPdf, lang)
            );
        }
        output.push_str("            </div>\n        </div>\n");
    }

    fn write_kpis(output: &mut String, ctx: &PageContext<'_>) {
        output.push_str("        <div class=\"kpi-grid\">\n");
        for card in kpi_cards(ctx.snapshot, ctx.lang) {
            let _ = writeln!(
                output,
                r#"            <div class="kpi-card" id="kpi-{}">
                <span class="label">{}</span>
                <span class="value">{}</span>
                <span class="detail">{}</span>
            </div>"#,
                card.id,
                card.label,
                html_escape(&card.value),
                html_escape(&card.detail)
            );
        }
        output.push_str("        </div>\n");
    }

    fn write_charts(output: &mut String, ctx: &PageContext<'_>) {
        output.push_str("        <div class=\"chart-grid\">\n");
        for (key, markup) in &ctx.charts {
            let id = key.mount_id();
            let _ = writeln!(output, r#"            <div class="chart-card" id="{id}">"#);
            let title = html_escape(tr(key.title(), ctx.lang));
            let _ = writeln!(output, "                <h3>{title}</h3>");
            match markup {
                Some(svg) => {
                    for line in svg.lines() {
                        let _ = writeln!(output, "                {line}");
                    }
                }
                None => {
                    let name = key.name();
                    let _ = writeln!(output, r#"                <div class="empty">{name}</div>"#);
                }
            }
            output.push_str("            </div>\n");
        }
        output.push_str("        </div>\n");
    }

    fn write_network(output: &mut String, ctx: &PageContext<'_>) {
        let lang = ctx.lang;
        let net = &ctx.snapshot.network;
        let _ = writeln!(
            output,
            r#"        <div class="section-card">
            <h2>{}</h2>
            <div class="network">
                <div><span class="count">← {}</span> {}<br><small>{} {}</small></div>
                <div><span class="count">→ {}</span> {}<br><small>{} {}</small></div>
            </div>
        </div>"#,
            html_escape(tr(Text::NetworkStats, lang)),
            net.incoming.channels,
            tr(Text::IncomingChannels, lang),
            net.incoming.total_mentions,
            tr(Text::TotalMentions, lang),
            net.outgoing.channels,
            tr(Text::OutgoingChannels, lang),
            net.outgoing.total_mentions,
            tr(Text::TotalMentions, lang)
        );
    }

    fn write_tables(output: &mut String, ctx: &PageContext<'_>) {
        let lang = ctx.lang;
        let _ = writeln!(
            output,
            r#"        <div class="section-card">
            <h2>{}</h2>
            <table id="growth-table">
                <thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead>
                <tbody>"#,
            tr(Text::SubscriberGrowth, lang),
            tr(Text::MonthColumn, lang),
            tr(Text::MentionsColumn, lang),
            tr(Text::CumulativeReach, lang),
            tr(Text::NewSubscribers, lang)
        );
        for line in ctx.tables.growth_html().lines() {
            let _ = writeln!(output, "                    {line}");
        }
        output.push_str("                </tbody>\n            </table>\n        </div>\n");

        let _ = writeln!(
            output,
            r#"        <div class="section-card">
            <h2>{}</h2>
            <div id="top-posts">"#,
            tr(Text::MostPopular, lang)
        );
        for line in ctx.tables.posts_html().lines() {
            let _ = writeln!(output, "                {line}");
        }
        output.push_str("            </div>\n        </div>\n");
    }

    fn write_footer(output: &mut String, ctx: &PageContext<'_>) {
        let _ = writeln!(
            output,
            r#"        <div class="footer">
            {} <strong>TGStat</strong> · {} <span id="generated-date">{}</span>
        </div>
    </div>"#,
            tr(Text::DataSource, ctx.lang),
            tr(Text::GeneratedOn, ctx.lang),
            ctx.generated.format("%d.%m.%Y")
        );
        if ctx.mode == PresentationMode::Interactive {
            output.push_str(HTML_SCRIPT);
        }
        output.push_str("</body>\n</html>\n");
    }
}

impl PageFormatter for HtmlFormatter {
    fn format(&self, ctx: &PageContext<'_>) -> String {
        let mut output = String::new();
        Self::write_head(&mut output, ctx);
        Self::write_header(&mut output, ctx);
        Self::write_kpis(&mut output, ctx);
        Self::write_charts(&mut output, ctx);
        Self::write_network(&mut output, ctx);
        Self::write_tables(&mut output, ctx);
        Self::write_footer(&mut output, ctx);
        output
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
