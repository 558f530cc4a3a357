use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::cli::{Cli, ExportArgs};
use crate::config::ExportConfig;
use crate::data::Lang;
use crate::export::{ExportSettings, PaginatedExporter, export_filename, language_filename};
use crate::{EXIT_CONFIG_ERROR, EXIT_EXPORT_FAILED, EXIT_SUCCESS, Result};

use super::context::{CommandContext, preference_store};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli) {
        Ok(written) => {
            if !cli.quiet {
                for path in written {
                    println!("Exported: {}", path.display());
                }
            }
            EXIT_SUCCESS
        }
        Err(e) if e.is_export_error() => {
            eprintln!("{}", e.user_message());
            EXIT_EXPORT_FAILED
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Exports the report to PDF, one document per requested language.
///
/// Every document is produced before any is written, so a failure leaves
/// the output directory untouched. Returns the written paths.
///
/// # Errors
/// Returns an export error if capture or assembly fails, otherwise a
/// config, data or I/O error.
pub fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut context = CommandContext::load(cli)?;
    apply_cli_overrides(&mut context.config.export, args);
    context.config.validate()?;

    let export_config = context.config.export.clone();
    let langs = if args.all_languages {
        Lang::ALL.to_vec()
    } else {
        vec![args.lang.unwrap_or(context.config.report.language)]
    };
    let today = context.today;
    let exporter = PaginatedExporter::with_default_backends(ExportSettings::from(&export_config));
    let mut dashboard = context.dashboard(preference_store(), langs.first().copied())?;

    let mut documents = Vec::with_capacity(langs.len());
    for lang in langs {
        dashboard.set_language(lang)?;
        let bytes = dashboard.export(&exporter)?;
        let filename = if args.all_languages {
            language_filename(lang)
        } else {
            export_filename(today)
        };
        documents.push((filename, bytes));
    }

    fs::create_dir_all(&export_config.output_dir)?;
    let mut written = Vec::with_capacity(documents.len());
    for (filename, bytes) in documents {
        let path = export_config.output_dir.join(filename);
        fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "document written");
        written.push(path);
    }
    Ok(written)
}

fn apply_cli_overrides(config: &mut ExportConfig, args: &ExportArgs) {
    if let Some(dir) = &args.output_dir {
        config.output_dir.clone_from(dir);
    }
    if let Some(delay) = args.settle_delay_ms {
        config.settle_delay_ms = delay;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
