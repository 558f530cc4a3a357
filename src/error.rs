use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot data: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Chart mount point not found: {target}")]
    ChartTargetAbsent { target: String },

    #[error("{0} library not available")]
    ExportDependencyMissing(&'static str),

    #[error("Export failed: {reason}")]
    ExportFailure { reason: String },

    #[error("Capture took {elapsed:?}, exceeding the {limit:?} limit")]
    RenderTimeout { elapsed: Duration, limit: Duration },
}

impl DashboardError {
    /// Shorthand for [`DashboardError::ExportFailure`].
    pub fn export_failure(reason: impl Into<String>) -> Self {
        Self::ExportFailure {
            reason: reason.into(),
        }
    }

    /// Whether the error came out of the export pipeline.
    #[must_use]
    pub const fn is_export_error(&self) -> bool {
        matches!(
            self,
            Self::ExportDependencyMissing(_)
                | Self::ExportFailure { .. }
                | Self::RenderTimeout { .. }
        )
    }

    /// Message shown to the user when an export is aborted.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_export_error() {
            format!("PDF export failed: {self}\n\nPlease re-run the export.")
        } else {
            self.to_string()
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
