//! Shared setup for commands: config, snapshot, preferences and the session.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::chart::Theme;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::controller::system_theme;
use crate::dashboard::{Dashboard, DashboardOptions};
use crate::data::{Lang, MetricSnapshot};
use crate::error::Result;
use crate::state::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, THEME_KEY};

/// Preference store chosen at runtime.
pub type SessionStore = Box<dyn PreferenceStore>;

/// Everything a command needs before it builds a session.
pub struct CommandContext {
    pub config: Config,
    pub snapshot: MetricSnapshot,
    pub today: NaiveDate,
}

impl CommandContext {
    /// Load config and snapshot for the global flags in `cli`.
    ///
    /// # Errors
    /// Returns an error if the config or snapshot cannot be loaded.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref(), cli.no_config)?;
        let snapshot = load_snapshot(cli.data.as_deref(), &config)?;
        Ok(Self {
            config,
            snapshot,
            today: Local::now().date_naive(),
        })
    }

    /// Session options, with `lang` overriding the configured language.
    ///
    /// # Errors
    /// Returns an error if the configured chart list is invalid.
    pub fn options(&self, lang: Option<Lang>) -> Result<DashboardOptions> {
        let mut options = DashboardOptions::from_config(&self.config, self.today)?
            .with_system_theme(system_theme());
        if let Some(lang) = lang {
            options.lang = lang;
        }
        Ok(options)
    }

    /// Build the live session.
    ///
    /// # Errors
    /// Returns an error if the options are invalid or a chart cannot be created.
    pub fn dashboard(
        self,
        store: SessionStore,
        lang: Option<Lang>,
    ) -> Result<Dashboard<SessionStore>> {
        let options = self.options(lang)?;
        Dashboard::initialize(self.snapshot, store, options)
    }
}

/// Load configuration unless `no_config` is set.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = &result.source {
        debug!(path = %source.display(), "using config file");
    }
    Ok(result.config)
}

/// Snapshot from `--data`, then `report.data`, then the built-in sample.
///
/// # Errors
/// Returns an error if the chosen snapshot cannot be read or is invalid.
pub fn load_snapshot(data_path: Option<&Path>, config: &Config) -> Result<MetricSnapshot> {
    match data_path.or(config.report.data.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading snapshot");
            MetricSnapshot::load(path)
        }
        None => MetricSnapshot::builtin(),
    }
}

/// Persistent preferences, or a throwaway store if no data directory exists.
#[must_use]
pub fn preference_store() -> SessionStore {
    FilePreferenceStore::open_default().map_or_else(
        || {
            warn!("no data directory available, preferences will not be saved");
            Box::new(MemoryPreferenceStore::new()) as SessionStore
        },
        |store| {
            debug!(path = %store.path().display(), "preferences");
            Box::new(store) as SessionStore
        },
    )
}

/// Store for a one-off theme that must not touch the persisted preference.
#[must_use]
pub fn transient_store(theme: Option<Theme>) -> SessionStore {
    match theme {
        Some(theme) => {
            Box::new(MemoryPreferenceStore::new().with_value(THEME_KEY, theme.as_str()))
        }
        None => preference_store(),
    }
}

/// Write `content` to `path`, or print it unless `quiet`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
