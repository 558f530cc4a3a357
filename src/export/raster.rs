//! Rasterization with resvg.

use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::{debug, warn};

use super::{Bitmap, CaptureOptions, Rasterizer};
use crate::error::{DashboardError, Result};

/// Renders SVG markup with resvg, using the system fonts.
pub struct ResvgRasterizer {
    options: Options<'static>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResvgRasterizer {
    #[must_use]
    pub fn new() -> Self {
        let mut options = Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!(faces = options.fontdb.len(), "loaded system fonts");
        Self { options }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn capture(&self, svg: &str, options: &CaptureOptions) -> Result<Bitmap> {
        let tree = Tree::from_str(svg, &self.options).map_err(|e| {
            DashboardError::export_failure(format!("cannot parse page markup: {e}"))
        })?;

        let size = tree.size();
        let (width, height) = scaled_size(size.width(), size.height(), options.scale);
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            DashboardError::export_failure(format!("cannot allocate a {width}x{height} bitmap"))
        })?;

        pixmap.fill(parse_background(&options.background));
        resvg::render(
            &tree,
            Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );

        // The background is opaque, so premultiplied and straight RGB agree.
        let rgb = pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect();
        Ok(Bitmap { width, height, rgb })
    }
}

fn scaled_size(width: f32, height: f32, scale: f32) -> (u32, u32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Positive, page sized
    let scaled = |v: f32| (v * scale).ceil().max(1.0) as u32;
    (scaled(width), scaled(height))
}

/// Opaque color from `#rgb` or `#rrggbb`; white otherwise.
fn parse_background(css: &str) -> Color {
    let hex = css.trim().trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let rgb = match (hex.is_ascii(), hex.len()) {
        (true, 6) => channel(&hex[0..2]).zip(channel(&hex[2..4])).zip(channel(&hex[4..6])),
        (true, 3) => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            short(0).zip(short(1)).zip(short(2))
        }
        _ => None,
    };
    match rgb {
        Some(((r, g), b)) => Color::from_rgba8(r, g, b, 255),
        None => {
            warn!(background = css, "unsupported background color, using white");
            Color::WHITE
        }
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
