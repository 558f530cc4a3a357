use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartKey, Theme};
use crate::data::Lang;
use crate::error::{DashboardError, Result};
use crate::export::PageSize;

/// Report-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Snapshot TOML; the built-in sample is used when unset.
    pub data: Option<PathBuf>,

    /// Initial display language.
    pub language: Lang,

    /// Id of the element captured by the exporter.
    pub target: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data: None,
            language: Lang::Ru,
            target: "dashboard".to_string(),
        }
    }
}

/// Theme fallback used when nothing is persisted and the system gives no hint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: Option<Theme>,
}

/// PDF export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Grace period before capture, in milliseconds.
    pub settle_delay_ms: u64,

    /// Captures slower than this fail with a render timeout.
    pub capture_timeout_ms: u64,

    /// Pixel density of the captured bitmap.
    pub scale: f32,

    pub page: PageSize,

    pub output_dir: PathBuf,

    /// Overrides the theme's page background.
    pub background: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 800,
            capture_timeout_ms: 30_000,
            scale: 2.0,
            page: PageSize::A4,
            output_dir: PathBuf::from("."),
            background: None,
        }
    }
}

/// Page layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page width in CSS pixels.
    pub width: f64,

    /// Mounted chart targets, by chart name or mount id.
    pub charts: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            charts: ChartKey::ALL.iter().map(|key| key.name().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub theme: ThemeConfig,
    pub export: ExportConfig,
    pub layout: LayoutConfig,
}

impl Config {
    /// Check value ranges and chart names.
    ///
    /// # Errors
    /// Returns [`DashboardError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !(self.export.scale > 0.0 && self.export.scale.is_finite()) {
            return Err(DashboardError::Config(format!(
                "export.scale must be positive, got {}",
                self.export.scale
            )));
        }
        if !(self.layout.width > 0.0 && self.layout.width.is_finite()) {
            return Err(DashboardError::Config(format!(
                "layout.width must be positive, got {}",
                self.layout.width
            )));
        }
        if self.report.target.trim().is_empty() {
            return Err(DashboardError::Config(
                "report.target must not be empty".to_string(),
            ));
        }
        self.mounted_charts().map(|_| ())
    }

    /// Charts whose mount targets exist on the page.
    ///
    /// # Errors
    /// Returns [`DashboardError::Config`] for an unknown chart name.
    pub fn mounted_charts(&self) -> Result<Vec<ChartKey>> {
        self.layout
            .charts
            .iter()
            .map(|name| {
                name.parse::<ChartKey>()
                    .map_err(|e| DashboardError::Config(format!("layout.charts: {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
