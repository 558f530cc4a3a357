//! SVG implementation of the chart rendering backend.

use std::collections::HashSet;

use tracing::debug;

use super::svg::{ChartColor, ChartRenderer};
use crate::chart::{ChartBackend, ChartKey, ChartSpec, ThemePalette};
use crate::error::{DashboardError, Result};

/// Handle to one chart rendered by [`SvgBackend`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SvgHandle {
    id: usize,
    target: String,
}

impl SvgHandle {
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Renders charts into SVG markup held per mount target.
///
/// Only targets registered as mounted accept charts; the rest fail with
/// [`DashboardError::ChartTargetAbsent`].
#[derive(Debug)]
pub struct SvgBackend {
    renderer: ChartRenderer,
    mounted: HashSet<String>,
    slots: Vec<Option<String>>,
}

impl SvgBackend {
    /// Backend with the given mount targets.
    pub fn new(mounted: impl IntoIterator<Item = String>) -> Self {
        Self {
            renderer: ChartRenderer::default(),
            mounted: mounted.into_iter().collect(),
            slots: Vec::new(),
        }
    }

    /// Backend with every report chart mounted.
    #[must_use]
    pub fn with_all_targets() -> Self {
        Self::new(ChartKey::ALL.iter().map(|key| key.mount_id().to_string()))
    }

    #[must_use]
    pub fn is_mounted(&self, target: &str) -> bool {
        self.mounted.contains(target)
    }

    /// Number of charts currently alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl ChartBackend for SvgBackend {
    type Handle = SvgHandle;

    fn set_global_defaults(&mut self, palette: &ThemePalette, font_family: &str) {
        self.renderer.text_color = ChartColor::parse(palette.text_color);
        self.renderer.font_family = font_family.to_string();
    }

    fn create_chart(&mut self, target: &str, spec: &ChartSpec) -> Result<SvgHandle> {
        if !self.is_mounted(target) {
            return Err(DashboardError::ChartTargetAbsent {
                target: target.to_string(),
            });
        }
        let id = self.slots.len();
        self.slots.push(Some(self.renderer.render(spec)));
        debug!(chart = %spec.key, target, id, "Chart created");
        Ok(SvgHandle {
            id,
            target: target.to_string(),
        })
    }

    fn destroy(&mut self, handle: SvgHandle) {
        if let Some(slot) = self.slots.get_mut(handle.id) {
            *slot = None;
        }
    }

    fn update_in_place(&mut self, handle: &SvgHandle, spec: &ChartSpec) {
        let markup = self.renderer.render(spec);
        if let Some(Some(slot)) = self.slots.get_mut(handle.id) {
            *slot = markup;
        }
    }

    fn markup(&self, handle: &SvgHandle) -> Option<String> {
        self.slots.get(handle.id).cloned().flatten()
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
