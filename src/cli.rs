use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chart::{ChartKey, Theme};
use crate::data::Lang;
use crate::render::PageFormat;

#[derive(Parser, Debug)]
#[command(name = "tg-report")]
#[command(author, version, about = "Bilingual Telegram channel analytics report")]
#[command(long_about = "Render a themed, bilingual analytics report for a Telegram channel \
    and export it as a paginated PDF.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Export failed\n  \
    2 - Configuration or data error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file to report on (overrides config `report.data`)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the report page as HTML or SVG
    Render(RenderArgs),

    /// Export the report to a paginated PDF
    Export(ExportArgs),

    /// Print chart specifications as JSON
    Specs(SpecsArgs),

    /// Show or change the persisted theme
    Theme(ThemeArgs),

    /// Write the sample snapshot file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Report language [possible values: ru, en]
    #[arg(short, long)]
    pub lang: Option<Lang>,

    /// Theme for this render only, not persisted [possible values: light, dark]
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Output format [possible values: html, svg]
    #[arg(short, long, default_value = "html")]
    pub format: PageFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Report language [possible values: ru, en]
    #[arg(short, long, conflicts_with = "all_languages")]
    pub lang: Option<Lang>,

    /// Export one document per language
    #[arg(long)]
    pub all_languages: bool,

    /// Directory for the exported documents (overrides config `export.output_dir`)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Delay before capture, in milliseconds
    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    /// Pixel density multiplier for the capture
    #[arg(long)]
    pub scale: Option<f32>,
}

#[derive(Parser, Debug)]
pub struct SpecsArgs {
    /// Report language [possible values: ru, en]
    #[arg(short, long)]
    pub lang: Option<Lang>,

    /// Palette used for axis colors [possible values: light, dark]
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Only this chart (name or mount id, e.g. `views` or `viewsChart`)
    #[arg(long)]
    pub chart: Option<ChartKey>,
}

#[derive(Parser, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: ThemeAction,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Print the active theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// Theme name [possible values: light, dark]
        theme: Theme,
    },
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the snapshot file
    #[arg(short, long, default_value = "snapshot.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
