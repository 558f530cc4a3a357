use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// ============================================================================
// Fakes
// ============================================================================

struct FakeSurface {
    trigger: bool,
    scroll: f64,
    mode: PresentationMode,
    markup: Option<String>,
    /// Mode observed when the markup was requested.
    captured_in: RefCell<Option<PresentationMode>>,
}

impl FakeSurface {
    fn new() -> Self {
        Self {
            trigger: true,
            scroll: 420.0,
            mode: PresentationMode::Interactive,
            markup: Some("<svg/>".to_string()),
            captured_in: RefCell::new(None),
        }
    }
}

impl ExportSurface for FakeSurface {
    fn trigger_enabled(&self) -> bool {
        self.trigger
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger = enabled;
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

    fn element_markup(&self, _target: &str) -> Option<String> {
        *self.captured_in.borrow_mut() = Some(self.mode);
        assert!(!self.trigger, "trigger must be disabled during capture");
        assert!(self.scroll.abs() < f64::EPSILON, "capture must start at the top");
        self.markup.clone()
    }

    fn background(&self) -> String {
        "#0f172a".to_string()
    }
}

struct FakeRasterizer {
    width: u32,
    height: u32,
    delay: Duration,
    seen: Rc<RefCell<Vec<CaptureOptions>>>,
}

impl FakeRasterizer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            delay: Duration::ZERO,
            seen: Rc::default(),
        }
    }
}

impl Rasterizer for FakeRasterizer {
    fn capture(&self, _svg: &str, options: &CaptureOptions) -> Result<Bitmap> {
        thread::sleep(self.delay);
        self.seen.borrow_mut().push(options.clone());
        Ok(Bitmap::filled(self.width, self.height, [0, 0, 0]))
    }
}

type Placement = (usize, f64, f64, f64, f64);

#[derive(Default)]
struct FakeAssembler {
    placements: Rc<RefCell<Vec<Placement>>>,
}

struct FakeDocument {
    page: usize,
    placements: Rc<RefCell<Vec<Placement>>>,
}

impl DocumentAssembler for FakeAssembler {
    fn new_document(&self, _page: PageSize) -> Box<dyn PageDocument> {
        Box::new(FakeDocument {
            page: 0,
            placements: Rc::clone(&self.placements),
        })
    }
}

impl PageDocument for FakeDocument {
    fn add_page(&mut self) -> Result<()> {
        self.page += 1;
        Ok(())
    }

    fn place_image(
        &mut self,
        _image: &Bitmap,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.placements
            .borrow_mut()
            .push((self.page, x, y, width, height));
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(format!("pages={}", self.page + 1).into_bytes())
    }
}

fn settings() -> ExportSettings {
    ExportSettings {
        settle_delay: Duration::ZERO,
        ..ExportSettings::default()
    }
}

fn assert_restored(surface: &FakeSurface) {
    assert!(surface.trigger);
    assert!((surface.scroll - 420.0).abs() < f64::EPSILON);
    assert_eq!(surface.mode, PresentationMode::Interactive);
}

// ============================================================================
// Successful export
// ============================================================================

#[test]
fn tall_capture_is_sliced_across_pages() {
    let assembler = FakeAssembler::default();
    let placements = Rc::clone(&assembler.placements);
    let exporter = PaginatedExporter::new(settings())
        .with_rasterizer(Box::new(FakeRasterizer::new(3200, 9000)))
        .with_assembler(Box::new(assembler));
    let mut surface = FakeSurface::new();

    let bytes = exporter.export(&mut surface, "dashboard").unwrap();

    assert_eq!(bytes, b"pages=2");
    let placements = placements.borrow();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].0, 0);
    assert!(placements[0].2.abs() < 1e-9);
    assert_eq!(placements[1].0, 1);
    assert!((placements[1].2 + 841.89).abs() < 1e-9);
    assert!((placements[1].3 - 595.28).abs() < 1e-9);
    assert!((placements[1].4 - 1674.225).abs() < 1e-3);
    assert_eq!(
        *surface.captured_in.borrow(),
        Some(PresentationMode::Export)
    );
    assert_restored(&surface);
}

#[test]
fn capture_uses_scale_and_surface_background() {
    let rasterizer = FakeRasterizer::new(100, 100);
    let seen = Rc::clone(&rasterizer.seen);
    let exporter = PaginatedExporter::new(settings())
        .with_rasterizer(Box::new(rasterizer))
        .with_assembler(Box::new(FakeAssembler::default()));

    exporter.export(&mut FakeSurface::new(), "dashboard").unwrap();

    let seen = seen.borrow();
    assert!((seen[0].scale - 2.0).abs() < f32::EPSILON);
    assert_eq!(seen[0].background, "#0f172a");
}

#[test]
fn configured_background_overrides_surface() {
    let rasterizer = FakeRasterizer::new(100, 100);
    let seen = Rc::clone(&rasterizer.seen);
    let exporter = PaginatedExporter::new(ExportSettings {
        background: Some("#ffffff".to_string()),
        ..settings()
    })
    .with_rasterizer(Box::new(rasterizer))
    .with_assembler(Box::new(FakeAssembler::default()));

    exporter.export(&mut FakeSurface::new(), "dashboard").unwrap();
    assert_eq!(seen.borrow()[0].background, "#ffffff");
}

// ============================================================================
// Failures restore presentation
// ============================================================================

#[test]
fn missing_rasterizer_is_reported_and_restored() {
    let exporter =
        PaginatedExporter::new(settings()).with_assembler(Box::new(FakeAssembler::default()));
    let mut surface = FakeSurface::new();

    let err = exporter.export(&mut surface, "dashboard").unwrap_err();

    assert!(matches!(err, DashboardError::ExportDependencyMissing(_)));
    assert!(err.user_message().contains("not available"));
    assert_restored(&surface);
}

#[test]
fn missing_assembler_is_reported() {
    let exporter = PaginatedExporter::new(settings())
        .with_rasterizer(Box::new(FakeRasterizer::new(10, 10)));
    let mut surface = FakeSurface::new();

    let err = exporter.export(&mut surface, "dashboard").unwrap_err();
    assert!(matches!(err, DashboardError::ExportDependencyMissing("PDF")));
    assert_restored(&surface);
}

#[test]
fn missing_target_is_an_export_failure() {
    let exporter = PaginatedExporter::new(settings())
        .with_rasterizer(Box::new(FakeRasterizer::new(10, 10)))
        .with_assembler(Box::new(FakeAssembler::default()));
    let mut surface = FakeSurface::new();
    surface.markup = None;

    let err = exporter.export(&mut surface, "report").unwrap_err();
    assert!(err.to_string().contains("#report"));
    assert_restored(&surface);
}

#[test]
fn slow_capture_times_out() {
    let mut rasterizer = FakeRasterizer::new(10, 10);
    rasterizer.delay = Duration::from_millis(20);
    let assembler = FakeAssembler::default();
    let placements = Rc::clone(&assembler.placements);
    let exporter = PaginatedExporter::new(ExportSettings {
        capture_timeout: Duration::from_millis(1),
        ..settings()
    })
    .with_rasterizer(Box::new(rasterizer))
    .with_assembler(Box::new(assembler));
    let mut surface = FakeSurface::new();

    let err = exporter.export(&mut surface, "dashboard").unwrap_err();

    assert!(matches!(err, DashboardError::RenderTimeout { .. }));
    assert!(placements.borrow().is_empty());
    assert_restored(&surface);
}

#[test]
fn second_export_is_refused_while_trigger_disabled() {
    let exporter = PaginatedExporter::new(settings());
    let mut surface = FakeSurface::new();
    surface.trigger = false;

    let err = exporter.export(&mut surface, "dashboard").unwrap_err();

    assert!(err.to_string().contains("already in progress"));
    assert!(!surface.trigger);
    assert_eq!(surface.mode, PresentationMode::Interactive);
}

#[test]
fn guard_restores_on_drop() {
    let mut surface = FakeSurface::new();
    {
        let guard = PresentationGuard::engage(&mut surface);
        assert_eq!(guard.presentation_mode(), PresentationMode::Export);
        assert!(!guard.trigger_enabled());
    }
    assert_restored(&surface);
}

// ============================================================================
// Filenames
// ============================================================================

#[test]
fn filenames() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(export_filename(date), "telegram-analytics-2025-03-07.pdf");
    assert_eq!(language_filename(Lang::Ru), "dashboard-russian.pdf");
    assert_eq!(language_filename(Lang::En), "dashboard-english.pdf");
}
