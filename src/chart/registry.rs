//! Live chart instances keyed by [`ChartKey`].
//!
//! The registry owns the only references to live charts. Every rebuild goes
//! through [`ChartRegistry::create_or_replace`], which tears the old instance
//! down before the new one is mounted, so one key never has two live charts
//! on the same target. A failed mount puts the previous instance back.

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::spec::{ChartKey, ChartSpec};
use super::theme::ThemePalette;
use crate::error::{DashboardError, Result};

/// Rendering backend that turns specs into live charts.
pub trait ChartBackend {
    /// Backend-specific handle to one live chart.
    type Handle;

    /// Default text and grid colors plus the font family for new charts.
    fn set_global_defaults(&mut self, palette: &ThemePalette, font_family: &str);

    /// Mount a chart for `spec` into `target`.
    ///
    /// # Errors
    /// Returns [`DashboardError::ChartTargetAbsent`] when `target` does not
    /// exist. Other errors are backend failures.
    fn create_chart(&mut self, target: &str, spec: &ChartSpec) -> Result<Self::Handle>;

    /// Release a live chart.
    fn destroy(&mut self, handle: Self::Handle);

    /// Redraw an existing chart with new styling, keeping its data.
    fn update_in_place(&mut self, handle: &Self::Handle, spec: &ChartSpec);

    /// Current rendered markup of a live chart, if the backend keeps any.
    fn markup(&self, handle: &Self::Handle) -> Option<String>;
}

struct LiveChart<H> {
    handle: H,
    spec: ChartSpec,
}

/// Map from chart key to its single live instance.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    charts: IndexMap<ChartKey, LiveChart<B::Handle>>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            charts: IndexMap::new(),
        }
    }

    /// Replace the chart for `spec.key`, destroying any previous instance first.
    ///
    /// Returns `Ok(false)` when the chart's mount target is absent. That chart
    /// is skipped and the registry holds no entry for it.
    ///
    /// # Errors
    /// Propagates backend failures other than an absent target. The previous
    /// instance, if any, is re-created from its old spec before returning.
    pub fn create_or_replace(&mut self, spec: ChartSpec) -> Result<bool> {
        let key = spec.key;
        let previous = self.charts.shift_remove(&key).map(|old| {
            debug!(chart = %key, "Destroying previous chart instance");
            self.backend.destroy(old.handle);
            old.spec
        });

        match self.backend.create_chart(key.mount_id(), &spec) {
            Ok(handle) => {
                self.charts.insert(key, LiveChart { handle, spec });
                Ok(true)
            }
            Err(DashboardError::ChartTargetAbsent { target }) => {
                warn!(chart = %key, %target, "Chart target absent, skipping");
                Ok(false)
            }
            Err(e) => {
                if let Some(old) = previous {
                    self.restore(old);
                }
                Err(e)
            }
        }
    }

    fn restore(&mut self, spec: ChartSpec) {
        let key = spec.key;
        match self.backend.create_chart(key.mount_id(), &spec) {
            Ok(handle) => {
                debug!(chart = %key, "Restored previous chart instance");
                self.charts.insert(key, LiveChart { handle, spec });
            }
            Err(e) => warn!(chart = %key, error = %e, "Failed to restore previous chart"),
        }
    }

    /// Restyle every live chart for `palette` without recreating it.
    ///
    /// Returns the number of charts updated.
    pub fn restyle_all(&mut self, palette: &ThemePalette) -> usize {
        for live in self.charts.values_mut() {
            live.spec.apply_palette(palette);
            self.backend.update_in_place(&live.handle, &live.spec);
        }
        self.charts.len()
    }

    /// Destroy every live chart.
    pub fn destroy_all(&mut self) {
        for (_, live) in self.charts.drain(..) {
            self.backend.destroy(live.handle);
        }
    }

    #[must_use]
    pub fn contains(&self, key: ChartKey) -> bool {
        self.charts.contains_key(&key)
    }

    #[must_use]
    pub fn spec(&self, key: ChartKey) -> Option<&ChartSpec> {
        self.charts.get(&key).map(|live| &live.spec)
    }

    #[must_use]
    pub fn markup(&self, key: ChartKey) -> Option<String> {
        self.charts
            .get(&key)
            .and_then(|live| self.backend.markup(&live.handle))
    }

    /// Live chart keys in creation order.
    pub fn keys(&self) -> impl Iterator<Item = ChartKey> + '_ {
        self.charts.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: ChartBackend> Drop for ChartRegistry<B> {
    fn drop(&mut self) {
        self.destroy_all();
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
