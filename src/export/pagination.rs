//! Slicing one tall bitmap into fixed-size pages.
//!
//! The bitmap is scaled to the page width and placed once per page, shifted
//! up by one page height each time, so every page shows the next vertical
//! slice of the same image.

use serde::{Deserialize, Serialize};

/// Slack for floating point error when counting pages.
const PAGE_EPSILON: f64 = 1e-9;

/// Paper format, dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Portrait `(width, height)` in points.
    #[must_use]
    pub const fn dimensions(self) -> (f64, f64) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "letter" => Ok(Self::Letter),
            _ => Err(format!("Unknown page size: {s} (expected a4 or letter)")),
        }
    }
}

/// Placement of a `W`×`H` bitmap across pages of `Pw`×`Ph` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// `Pw / W`.
    pub ratio: f64,
    /// Bitmap height once scaled to the page width.
    pub scaled_height: f64,
    pub page_count: usize,
}

impl PageLayout {
    #[must_use]
    pub fn new(bitmap_width: u32, bitmap_height: u32, page: PageSize) -> Self {
        let (page_width, page_height) = page.dimensions();
        Self::from_dimensions(
            f64::from(bitmap_width),
            f64::from(bitmap_height),
            page_width,
            page_height,
        )
    }

    /// Layout for arbitrary dimensions. Always at least one page.
    #[must_use]
    pub fn from_dimensions(width: f64, height: f64, page_width: f64, page_height: f64) -> Self {
        let ratio = if width > 0.0 { page_width / width } else { 0.0 };
        let scaled_height = height * ratio;
        let pages = (scaled_height / page_height - PAGE_EPSILON).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to >= 1
        let page_count = pages.max(1.0) as usize;
        Self {
            page_width,
            page_height,
            ratio,
            scaled_height,
            page_count,
        }
    }

    /// Vertical offset of the image on page `index`, top-left origin.
    #[must_use]
    pub fn offset(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)] // Page counts are small
        let index = index as f64;
        -(index * self.page_height)
    }

    /// Offsets of every page in order.
    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.page_count).map(|index| self.offset(index))
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
