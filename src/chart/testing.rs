//! Recording chart backend shared by unit tests.

use std::collections::HashSet;

use super::registry::ChartBackend;
use super::spec::ChartSpec;
use super::theme::ThemePalette;
use crate::error::{DashboardError, Result};

/// Backend that records every call and tracks live handles.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u32,
    pub live: HashSet<u32>,
    pub missing_targets: HashSet<&'static str>,
    /// Targets whose next mount fails with a backend error.
    pub failing_once: HashSet<&'static str>,
    /// Mount targets in creation order.
    pub created: Vec<String>,
    pub destroyed: Vec<u32>,
    /// `(handle, series, points, tick color)` per in-place update.
    pub updates: Vec<(u32, usize, usize, String)>,
    /// `(text color, font family)` per defaults call.
    pub defaults: Vec<(String, String)>,
    pub max_live_per_target: usize,
    live_targets: Vec<(u32, String)>,
}

impl RecordingBackend {
    pub fn without(targets: &[&'static str]) -> Self {
        Self {
            missing_targets: targets.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn live_on(&self, target: &str) -> usize {
        self.live_targets
            .iter()
            .filter(|(id, t)| t == target && self.live.contains(id))
            .count()
    }

    /// How often `target` was mounted.
    pub fn creations_of(&self, target: &str) -> usize {
        self.created.iter().filter(|t| *t == target).count()
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = u32;

    fn set_global_defaults(&mut self, palette: &ThemePalette, font_family: &str) {
        self.defaults
            .push((palette.text_color.to_string(), font_family.to_string()));
    }

    fn create_chart(&mut self, target: &str, _spec: &ChartSpec) -> Result<u32> {
        if self.missing_targets.contains(target) {
            return Err(DashboardError::ChartTargetAbsent {
                target: target.to_string(),
            });
        }
        if self.failing_once.remove(target) {
            return Err(std::io::Error::other(format!("{target} failed to mount")).into());
        }
        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id);
        self.live_targets.push((id, target.to_string()));
        self.created.push(target.to_string());
        self.max_live_per_target = self.max_live_per_target.max(self.live_on(target));
        Ok(id)
    }

    fn destroy(&mut self, handle: u32) {
        assert!(self.live.remove(&handle), "double destroy of {handle}");
        self.destroyed.push(handle);
    }

    fn update_in_place(&mut self, handle: &u32, spec: &ChartSpec) {
        let color = spec
            .scales
            .first()
            .map(|s| s.ticks.color.clone())
            .unwrap_or_default();
        self.updates
            .push((*handle, spec.datasets.len(), spec.point_count(), color));
    }

    fn markup(&self, handle: &u32) -> Option<String> {
        Some(format!("<chart {handle}>"))
    }
}
