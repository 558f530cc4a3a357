use crate::chart::{ChartKey, ChartSpec, build};
use crate::cli::{Cli, SpecsArgs};
use crate::controller::{ThemeController, system_theme};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{CommandContext, transient_store};

#[must_use]
pub fn run_specs(args: &SpecsArgs, cli: &Cli) -> i32 {
    match run_specs_impl(args, cli) {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Builds chart specs and serializes them as pretty JSON.
///
/// A single `--chart` prints one object; otherwise an array of all seven.
///
/// # Errors
/// Returns an error if the config or snapshot is invalid.
pub fn run_specs_impl(args: &SpecsArgs, cli: &Cli) -> Result<String> {
    let context = CommandContext::load(cli)?;
    let lang = args.lang.unwrap_or(context.config.report.language);
    let fallback = context.config.theme.default.unwrap_or_default();
    let theme = ThemeController::initialize(transient_store(args.theme), system_theme(), fallback);
    let palette = theme.palette();

    let json = match args.chart {
        Some(key) => serde_json::to_string_pretty(&build(key, &context.snapshot, lang, &palette))?,
        None => {
            let specs: Vec<ChartSpec> = ChartKey::ALL
                .into_iter()
                .map(|key| build(key, &context.snapshot, lang, &palette))
                .collect();
            serde_json::to_string_pretty(&specs)?
        }
    };
    Ok(json)
}
