use crate::cli::{Cli, RenderArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{CommandContext, transient_store, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the report page in the requested format.
///
/// # Errors
/// Returns an error if the config or snapshot is invalid or the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let context = CommandContext::load(cli)?;
    let dashboard = context.dashboard(transient_store(args.theme), args.lang)?;
    let page = dashboard.render(args.format);
    write_output(args.output.as_deref(), &page, cli.quiet)
}
