use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tg_report::cli::{Cli, Commands};
use tg_report::commands::{run_export, run_init, run_render, run_specs, run_theme};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Specs(args) => run_specs(args, &cli),
        Commands::Theme(args) => run_theme(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins; otherwise the level follows `-q`/`-v`.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.quiet, cli.verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

const fn default_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
