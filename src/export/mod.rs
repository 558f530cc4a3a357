//! Paginated PDF export of the report page.
//!
//! The page is rasterized once into a single bitmap, which is then laid
//! across as many pages as its scaled height needs. Presentation state is
//! switched to export mode for the duration and restored on every exit path.

mod pagination;
#[cfg(feature = "pdf")]
mod pdf;
#[cfg(feature = "pdf")]
mod raster;

use std::ops::{Deref, DerefMut};
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::data::Lang;
use crate::error::{DashboardError, Result};
use crate::render::PresentationMode;

pub use pagination::{PageLayout, PageSize};
#[cfg(feature = "pdf")]
pub use pdf::LopdfAssembler;
#[cfg(feature = "pdf")]
pub use raster::ResvgRasterizer;

/// Opaque RGB bitmap, 8 bits per channel, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Bitmap {
    /// Bitmap filled with one color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            rgb: color.repeat(pixels),
        }
    }
}

/// How an element is captured.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Pixel density multiplier.
    pub scale: f32,
    /// CSS color painted behind the element.
    pub background: String,
}

/// Turns page markup into a bitmap.
pub trait Rasterizer {
    /// Rasterize `svg` at `options.scale` over `options.background`.
    ///
    /// # Errors
    /// Returns [`DashboardError::ExportFailure`] if the markup cannot be drawn.
    fn capture(&self, svg: &str, options: &CaptureOptions) -> Result<Bitmap>;
}

/// Multi-page document under construction. Starts with one empty page.
pub trait PageDocument {
    /// Append an empty page and make it current.
    ///
    /// # Errors
    /// Returns an error if the page cannot be created.
    fn add_page(&mut self) -> Result<()>;

    /// Draw `image` on the current page. Coordinates are in points with a
    /// top-left origin and may place the image partly off the page.
    ///
    /// # Errors
    /// Returns an error if the image cannot be embedded.
    fn place_image(
        &mut self,
        image: &Bitmap,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()>;

    /// Serialize the finished document.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn finish(self: Box<Self>) -> Result<Vec<u8>>;
}

/// Creates documents of a fixed page size.
pub trait DocumentAssembler {
    fn new_document(&self, page: PageSize) -> Box<dyn PageDocument>;
}

/// The page being exported, as seen by the exporter.
pub trait ExportSurface {
    /// Whether the export trigger accepts a new export.
    fn trigger_enabled(&self) -> bool;

    fn set_trigger_enabled(&mut self, enabled: bool);

    fn scroll_position(&self) -> f64;

    fn set_scroll_position(&mut self, position: f64);

    fn presentation_mode(&self) -> PresentationMode;

    fn set_presentation_mode(&mut self, mode: PresentationMode);

    /// Standalone SVG of the element `target`, or `None` if it does not exist.
    fn element_markup(&self, target: &str) -> Option<String>;

    /// Page background color.
    fn background(&self) -> String;
}

/// Export-mode presentation held for the lifetime of the guard.
///
/// Engaging disables the trigger, remembers the scroll position and mode,
/// enters [`PresentationMode::Export`] and scrolls to the top. Dropping puts
/// all of it back.
pub struct PresentationGuard<'a, S: ExportSurface> {
    surface: &'a mut S,
    scroll: f64,
    mode: PresentationMode,
}

impl<'a, S: ExportSurface> PresentationGuard<'a, S> {
    pub fn engage(surface: &'a mut S) -> Self {
        let scroll = surface.scroll_position();
        let mode = surface.presentation_mode();
        surface.set_trigger_enabled(false);
        surface.set_presentation_mode(PresentationMode::Export);
        surface.set_scroll_position(0.0);
        Self {
            surface,
            scroll,
            mode,
        }
    }
}

impl<S: ExportSurface> Deref for PresentationGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: ExportSurface> DerefMut for PresentationGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: ExportSurface> Drop for PresentationGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_presentation_mode(self.mode);
        self.surface.set_scroll_position(self.scroll);
        self.surface.set_trigger_enabled(true);
        debug!("presentation restored");
    }
}

/// Timing and output parameters of one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub settle_delay: Duration,
    pub capture_timeout: Duration,
    pub scale: f32,
    pub page: PageSize,
    pub background: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportSettings {
    fn from(config: &ExportConfig) -> Self {
        Self {
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            capture_timeout: Duration::from_millis(config.capture_timeout_ms),
            scale: config.scale,
            page: config.page,
            background: config.background.clone(),
        }
    }
}

/// Captures an element and lays it out over PDF pages.
pub struct PaginatedExporter {
    rasterizer: Option<Box<dyn Rasterizer>>,
    assembler: Option<Box<dyn DocumentAssembler>>,
    settings: ExportSettings,
}

impl PaginatedExporter {
    /// Exporter with no rasterizer or assembler attached.
    #[must_use]
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            rasterizer: None,
            assembler: None,
            settings,
        }
    }

    /// Exporter with the built-in backends, when compiled in.
    #[must_use]
    pub fn with_default_backends(settings: ExportSettings) -> Self {
        #[cfg(feature = "pdf")]
        {
            Self::new(settings)
                .with_rasterizer(Box::new(ResvgRasterizer::new()))
                .with_assembler(Box::new(LopdfAssembler::new()))
        }
        #[cfg(not(feature = "pdf"))]
        {
            Self::new(settings)
        }
    }

    #[must_use]
    pub fn with_rasterizer(mut self, rasterizer: Box<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    #[must_use]
    pub fn with_assembler(mut self, assembler: Box<dyn DocumentAssembler>) -> Self {
        self.assembler = Some(assembler);
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Capture element `target` of `surface` into a paginated PDF.
    ///
    /// # Errors
    /// - [`DashboardError::ExportFailure`] if an export is already running,
    ///   the target is missing, or drawing fails
    /// - [`DashboardError::ExportDependencyMissing`] without a rasterizer or
    ///   assembler
    /// - [`DashboardError::RenderTimeout`] if the capture is too slow
    pub fn export<S: ExportSurface>(&self, surface: &mut S, target: &str) -> Result<Vec<u8>> {
        if !surface.trigger_enabled() {
            return Err(DashboardError::export_failure(
                "an export is already in progress",
            ));
        }
        let guard = PresentationGuard::engage(surface);

        let rasterizer = self
            .rasterizer
            .as_deref()
            .ok_or(DashboardError::ExportDependencyMissing("Rasterizer"))?;
        let assembler = self
            .assembler
            .as_deref()
            .ok_or(DashboardError::ExportDependencyMissing("PDF"))?;

        debug!(delay = ?self.settings.settle_delay, "waiting for layout to settle");
        thread::sleep(self.settings.settle_delay);

        let markup = guard.element_markup(target).ok_or_else(|| {
            DashboardError::export_failure(format!("element #{target} not found"))
        })?;
        let options = CaptureOptions {
            scale: self.settings.scale,
            background: self
                .settings
                .background
                .clone()
                .unwrap_or_else(|| guard.background()),
        };

        let started = Instant::now();
        let bitmap = rasterizer.capture(&markup, &options)?;
        let elapsed = started.elapsed();
        if elapsed > self.settings.capture_timeout {
            return Err(DashboardError::RenderTimeout {
                elapsed,
                limit: self.settings.capture_timeout,
            });
        }
        debug!(width = bitmap.width, height = bitmap.height, ?elapsed, "captured");

        let bytes = self.assemble(assembler, &bitmap)?;
        drop(guard);
        Ok(bytes)
    }

    fn assemble(&self, assembler: &dyn DocumentAssembler, bitmap: &Bitmap) -> Result<Vec<u8>> {
        let layout = PageLayout::new(bitmap.width, bitmap.height, self.settings.page);
        info!(pages = layout.page_count, "assembling document");

        let mut document = assembler.new_document(self.settings.page);
        for (index, offset) in layout.offsets().enumerate() {
            if index > 0 {
                document.add_page()?;
            }
            document.place_image(
                bitmap,
                0.0,
                offset,
                layout.page_width,
                layout.scaled_height,
            )?;
        }

        let bytes = document.finish()?;
        info!(bytes = bytes.len(), "document ready");
        Ok(bytes)
    }
}

/// Default export filename, `telegram-analytics-YYYY-MM-DD.pdf`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("telegram-analytics-{}.pdf", date.format("%Y-%m-%d"))
}

/// Filename used when exporting every language in one run.
#[must_use]
pub fn language_filename(lang: Lang) -> String {
    format!("dashboard-{}.pdf", lang.file_stem())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
