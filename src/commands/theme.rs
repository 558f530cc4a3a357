use crate::chart::Theme;
use crate::cli::{Cli, ThemeAction, ThemeArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{CommandContext, preference_store};

#[must_use]
pub fn run_theme(args: &ThemeArgs, cli: &Cli) -> i32 {
    match run_theme_impl(args, cli) {
        Ok(theme) => {
            if !cli.quiet {
                println!("{theme}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows or changes the persisted theme, restyling a live session the same
/// way the page toggle does. Returns the theme in effect afterwards.
///
/// # Errors
/// Returns an error if the config or snapshot is invalid.
pub fn run_theme_impl(args: &ThemeArgs, cli: &Cli) -> Result<Theme> {
    let context = CommandContext::load(cli)?;
    let mut dashboard = context.dashboard(preference_store(), None)?;

    let theme = match args.action {
        ThemeAction::Show => dashboard.theme(),
        ThemeAction::Toggle => dashboard.toggle_theme(),
        ThemeAction::Set { theme } => {
            if !dashboard.set_theme(theme) {
                dashboard.remember_theme();
            }
            dashboard.theme()
        }
    };
    Ok(theme)
}
