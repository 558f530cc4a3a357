//! One report session: snapshot, live charts, theme, language and tables.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::chart::{ChartKey, ChartRegistry, Theme, build};
use crate::config::Config;
use crate::controller::{LanguageController, ThemeController};
use crate::data::{Lang, MetricSnapshot};
use crate::error::Result;
use crate::export::{ExportSurface, PaginatedExporter};
use crate::render::{
    PageContext, PageFormat, PresentationMode, SvgBackend, TableRenderer, TableSet, render_page,
};
use crate::state::PreferenceStore;

/// Session parameters that do not come from the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub lang: Lang,
    /// Id of the element the exporter captures.
    pub target: String,
    pub width: f64,
    /// Charts whose mount targets exist.
    pub mounted: Vec<ChartKey>,
    pub generated: NaiveDate,
    /// Theme hint from the environment.
    pub system_theme: Option<Theme>,
    /// Theme used when neither a preference nor a hint exists.
    pub fallback_theme: Theme,
}

impl DashboardOptions {
    /// Options from a validated config.
    ///
    /// # Errors
    /// Returns an error if the configured chart list is invalid.
    pub fn from_config(config: &Config, generated: NaiveDate) -> Result<Self> {
        Ok(Self {
            lang: config.report.language,
            target: config.report.target.clone(),
            width: config.layout.width,
            mounted: config.mounted_charts()?,
            generated,
            system_theme: None,
            fallback_theme: config.theme.default.unwrap_or_default(),
        })
    }

    #[must_use]
    pub const fn with_system_theme(mut self, theme: Option<Theme>) -> Self {
        self.system_theme = theme;
        self
    }
}

/// The report as a live, interactive page.
pub struct Dashboard<S: PreferenceStore> {
    snapshot: MetricSnapshot,
    registry: ChartRegistry<SvgBackend>,
    theme: ThemeController<S>,
    language: LanguageController,
    tables: TableSet,
    mode: PresentationMode,
    scroll: f64,
    trigger_enabled: bool,
    target: String,
    width: f64,
    generated: NaiveDate,
}

impl<S: PreferenceStore> Dashboard<S> {
    /// Build the page: resolve the theme, mount every chart and render tables.
    ///
    /// # Errors
    /// Propagates chart backend failures other than absent targets.
    pub fn initialize(
        snapshot: MetricSnapshot,
        store: S,
        options: DashboardOptions,
    ) -> Result<Self> {
        let theme =
            ThemeController::initialize(store, options.system_theme, options.fallback_theme);
        let backend = SvgBackend::new(
            options
                .mounted
                .iter()
                .map(|key| key.mount_id().to_string()),
        );
        let mut registry = ChartRegistry::new(backend);
        theme.apply_defaults(&mut registry);

        let palette = theme.palette();
        for key in ChartKey::ALL {
            registry.create_or_replace(build(key, &snapshot, options.lang, &palette))?;
        }
        let mut tables = TableSet::new();
        tables.render_tables(&snapshot, options.lang);

        info!(
            lang = %options.lang,
            theme = %theme.theme(),
            charts = registry.len(),
            "dashboard initialized"
        );
        Ok(Self {
            snapshot,
            registry,
            theme,
            language: LanguageController::new(options.lang),
            tables,
            mode: PresentationMode::Interactive,
            scroll: 0.0,
            trigger_enabled: true,
            target: options.target,
            width: options.width,
            generated: options.generated,
        })
    }

    #[must_use]
    pub const fn snapshot(&self) -> &MetricSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn registry(&self) -> &ChartRegistry<SvgBackend> {
        &self.registry
    }

    #[must_use]
    pub const fn tables(&self) -> &TableSet {
        &self.tables
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.language.lang()
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[must_use]
    pub const fn preferences(&self) -> &S {
        self.theme.store()
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Switch language. Returns the number of charts rebuilt.
    ///
    /// # Errors
    /// Propagates chart backend failures.
    pub fn set_language(&mut self, lang: Lang) -> Result<usize> {
        let palette = self.theme.palette();
        self.language.set_language(
            lang,
            &self.snapshot,
            &palette,
            &mut self.registry,
            &mut self.tables,
        )
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.registry)
    }

    /// Switch to `theme`; `false` if it was already active.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.theme.set(theme, &mut self.registry)
    }

    /// Persist the active theme even if it was never switched.
    pub fn remember_theme(&mut self) {
        self.theme.remember();
    }

    pub const fn scroll_to(&mut self, position: f64) {
        self.scroll = position;
    }

    /// Everything the page renderers need, in the current state.
    #[must_use]
    pub fn page_context(&self) -> PageContext<'_> {
        PageContext {
            snapshot: &self.snapshot,
            lang: self.lang(),
            theme: self.theme(),
            tables: &self.tables,
            charts: ChartKey::ALL
                .into_iter()
                .map(|key| (key, self.registry.markup(key)))
                .collect(),
            mode: self.mode,
            generated: self.generated,
            width: self.width,
        }
    }

    /// Render the whole page.
    #[must_use]
    pub fn render(&self, format: PageFormat) -> String {
        format.formatter().format(&self.page_context())
    }

    /// Export the page target to a paginated PDF in the current language.
    ///
    /// # Errors
    /// Returns the exporter's error; presentation state is restored first.
    pub fn export(&mut self, exporter: &PaginatedExporter) -> Result<Vec<u8>> {
        let target = self.target.clone();
        debug!(%target, lang = %self.lang(), "export requested");
        exporter.export(self, &target)
    }
}

impl<S: PreferenceStore> ExportSurface for Dashboard<S> {
    fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn scroll_position(&self) -> f64 {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: f64) {
        self.scroll = position;
    }

    fn presentation_mode(&self) -> PresentationMode {
        self.mode
    }

    fn set_presentation_mode(&mut self, mode: PresentationMode) {
        self.mode = mode;
    }

    fn element_markup(&self, target: &str) -> Option<String> {
        if target == self.target {
            return Some(render_page(&self.page_context()));
        }
        ChartKey::ALL
            .into_iter()
            .find(|key| key.mount_id() == target)
            .and_then(|key| self.registry.markup(key))
    }

    fn background(&self) -> String {
        self.theme().surface().background.to_string()
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
