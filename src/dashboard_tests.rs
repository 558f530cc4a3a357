use std::time::Duration;

use super::*;
use crate::error::DashboardError;
use crate::i18n::tr;
use crate::export::{
    Bitmap, CaptureOptions, DocumentAssembler, ExportSettings, PageDocument, PageSize, Rasterizer,
};
use crate::state::{MemoryPreferenceStore, THEME_KEY};

fn options(mounted: Vec<ChartKey>) -> DashboardOptions {
    DashboardOptions {
        lang: Lang::Ru,
        target: "dashboard".to_string(),
        width: 1600.0,
        mounted,
        generated: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        system_theme: None,
        fallback_theme: Theme::Dark,
    }
}

fn dashboard() -> Dashboard<MemoryPreferenceStore> {
    Dashboard::initialize(
        MetricSnapshot::builtin().unwrap(),
        MemoryPreferenceStore::new(),
        options(ChartKey::ALL.to_vec()),
    )
    .unwrap()
}

/// Observable state that an export must leave untouched.
fn state(dashboard: &Dashboard<MemoryPreferenceStore>) -> (Theme, Lang, Vec<String>, usize, bool) {
    let markup = ChartKey::ALL
        .into_iter()
        .map(|key| dashboard.registry().markup(key).unwrap_or_default())
        .collect();
    (
        dashboard.theme(),
        dashboard.lang(),
        markup,
        dashboard.registry().backend().live_count(),
        dashboard.trigger_enabled(),
    )
}

struct BlankRasterizer;

impl Rasterizer for BlankRasterizer {
    fn capture(&self, _svg: &str, _options: &CaptureOptions) -> crate::error::Result<Bitmap> {
        Ok(Bitmap::filled(800, 1000, [255, 255, 255]))
    }
}

struct CountingAssembler;

struct CountingDocument(usize);

impl DocumentAssembler for CountingAssembler {
    fn new_document(&self, _page: PageSize) -> Box<dyn PageDocument> {
        Box::new(CountingDocument(1))
    }
}

impl PageDocument for CountingDocument {
    fn add_page(&mut self) -> crate::error::Result<()> {
        self.0 += 1;
        Ok(())
    }

    fn place_image(
        &mut self,
        _image: &Bitmap,
        _x: f64,
        _y: f64,
        _width: f64,
        _height: f64,
    ) -> crate::error::Result<()> {
        Ok(())
    }

    fn finish(self: Box<Self>) -> crate::error::Result<Vec<u8>> {
        Ok(vec![u8::try_from(self.0).unwrap()])
    }
}

fn quick() -> ExportSettings {
    ExportSettings {
        settle_delay: Duration::ZERO,
        ..ExportSettings::default()
    }
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn initialize_mounts_every_chart_and_table() {
    let dashboard = dashboard();
    assert_eq!(dashboard.registry().len(), 7);
    assert_eq!(dashboard.tables().lang(), Some(Lang::Ru));
    assert_eq!(dashboard.theme(), Theme::Dark);
    assert_eq!(dashboard.presentation_mode(), PresentationMode::Interactive);
}

#[test]
fn unmounted_chart_is_skipped() {
    let mounted = ChartKey::ALL
        .into_iter()
        .filter(|key| *key != ChartKey::Views)
        .collect();
    let dashboard = Dashboard::initialize(
        MetricSnapshot::builtin().unwrap(),
        MemoryPreferenceStore::new(),
        options(mounted),
    )
    .unwrap();

    assert_eq!(dashboard.registry().len(), 6);
    assert!(dashboard.page_context().charts.contains(&(ChartKey::Views, None)));
}

#[test]
fn persisted_theme_is_used() {
    let store = MemoryPreferenceStore::new().with_value(THEME_KEY, "light");
    let dashboard = Dashboard::initialize(
        MetricSnapshot::builtin().unwrap(),
        store,
        options(ChartKey::ALL.to_vec()),
    )
    .unwrap();
    assert_eq!(dashboard.theme(), Theme::Light);
    assert_eq!(dashboard.background(), "#f8fafc");
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn theme_toggle_restyles_rendered_charts() {
    let mut dashboard = dashboard();
    let before = dashboard.registry().markup(ChartKey::Reposts).unwrap();

    assert_eq!(dashboard.toggle_theme(), Theme::Light);

    let after = dashboard.registry().markup(ChartKey::Reposts).unwrap();
    assert_ne!(before, after);
    assert_eq!(before.matches("<rect").count(), after.matches("<rect").count());
    assert_eq!(dashboard.preferences().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn language_switch_updates_page() {
    let mut dashboard = dashboard();
    assert_eq!(dashboard.set_language(Lang::En).unwrap(), 6);
    assert_eq!(dashboard.set_language(Lang::En).unwrap(), 0);

    let html = dashboard.render(PageFormat::Html);
    assert!(html.contains("Mentions by Topic"));
    assert!(html.contains("<th>Month</th>"));
    for key in ChartKey::ALL {
        let russian = tr(key.title(), Lang::Ru);
        assert!(!html.contains(russian), "{key} heading still reads {russian}");
    }
}

#[test]
fn citation_heading_follows_language_without_rebuild() {
    let mut dashboard = dashboard();
    let citation = dashboard.registry().markup(ChartKey::Citation).unwrap();
    dashboard.set_language(Lang::En).unwrap();

    assert_eq!(dashboard.registry().markup(ChartKey::Citation).unwrap(), citation);
    let page = dashboard.element_markup("dashboard").unwrap();
    assert!(page.contains("Citation Index Trend"));
    assert!(!page.contains("Динамика индекса цитирования"));
}

#[test]
fn element_markup_resolves_page_and_charts() {
    let dashboard = dashboard();
    assert!(dashboard.element_markup("dashboard").unwrap().starts_with("<svg"));
    assert!(dashboard.element_markup("topicsChart").is_some());
    assert!(dashboard.element_markup("nowhere").is_none());
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_runs_in_export_mode_and_restores() {
    let mut dashboard = dashboard();
    dashboard.scroll_to(300.0);
    let before = state(&dashboard);
    let exporter = PaginatedExporter::new(quick())
        .with_rasterizer(Box::new(BlankRasterizer))
        .with_assembler(Box::new(CountingAssembler));

    let bytes = dashboard.export(&exporter).unwrap();

    assert_eq!(bytes, vec![1]);
    assert_eq!(state(&dashboard), before);
    assert!((dashboard.scroll_position() - 300.0).abs() < f64::EPSILON);
    assert_eq!(dashboard.presentation_mode(), PresentationMode::Interactive);
}

#[test]
fn failed_export_leaves_state_untouched() {
    let mut dashboard = dashboard();
    dashboard.toggle_theme();
    dashboard.set_language(Lang::En).unwrap();
    dashboard.scroll_to(125.0);
    let before = state(&dashboard);
    let exporter = PaginatedExporter::new(quick());

    let err = dashboard.export(&exporter).unwrap_err();

    assert!(matches!(err, DashboardError::ExportDependencyMissing(_)));
    assert_eq!(state(&dashboard), before);
    assert!((dashboard.scroll_position() - 125.0).abs() < f64::EPSILON);
    assert_eq!(dashboard.presentation_mode(), PresentationMode::Interactive);
}

#[test]
fn export_refused_while_trigger_disabled() {
    let mut dashboard = dashboard();
    dashboard.set_trigger_enabled(false);
    let exporter = PaginatedExporter::new(quick())
        .with_rasterizer(Box::new(BlankRasterizer))
        .with_assembler(Box::new(CountingAssembler));

    assert!(dashboard.export(&exporter).is_err());
    assert!(!dashboard.trigger_enabled());
}
