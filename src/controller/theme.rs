//! Active theme, its persistence and in-place chart restyling.

use tracing::{debug, info, warn};

use crate::chart::{ChartBackend, ChartRegistry, Theme, ThemePalette};
use crate::state::{PreferenceStore, THEME_KEY};

/// Font family handed to the chart backend.
pub const CHART_FONT_FAMILY: &str = "Inter, sans-serif";

/// Owns the active theme.
///
/// Theme changes never rebuild charts: the registry restyles live instances
/// in place with the new palette.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the starting theme.
    ///
    /// Order: persisted preference, then the system signal, then `fallback`.
    pub fn initialize(store: S, system: Option<Theme>, fallback: Theme) -> Self {
        let persisted = store.get(THEME_KEY).and_then(|value| match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!(%value, "ignoring persisted theme: {e}");
                None
            }
        });
        let theme = persisted.or(system).unwrap_or(fallback);
        debug!(%theme, persisted = persisted.is_some(), "theme initialized");
        Self { theme, store }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn palette(&self) -> ThemePalette {
        self.theme.palette()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Push the current palette into the backend's defaults.
    pub fn apply_defaults<B: ChartBackend>(&self, registry: &mut ChartRegistry<B>) {
        registry
            .backend_mut()
            .set_global_defaults(&self.palette(), CHART_FONT_FAMILY);
    }

    /// Flip light and dark, persist the choice and restyle every live chart.
    pub fn toggle<B: ChartBackend>(&mut self, registry: &mut ChartRegistry<B>) -> Theme {
        self.switch(self.theme.toggled(), registry);
        self.theme
    }

    /// Switch to `theme`. Returns `false` when it is already active.
    pub fn set<B: ChartBackend>(&mut self, theme: Theme, registry: &mut ChartRegistry<B>) -> bool {
        if theme == self.theme {
            return false;
        }
        self.switch(theme, registry);
        true
    }

    /// Persist the active theme. A failed write is logged and otherwise ignored.
    pub fn remember(&mut self) {
        let theme = self.theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!(%theme, "failed to persist theme: {e}");
        }
    }

    fn switch<B: ChartBackend>(&mut self, theme: Theme, registry: &mut ChartRegistry<B>) {
        self.theme = theme;
        // The switch stands even if it cannot be remembered.
        self.remember();
        self.apply_defaults(registry);
        let restyled = registry.restyle_all(&theme.palette());
        info!(%theme, restyled, "theme changed");
    }
}

/// Theme hinted by the terminal's `COLORFGBG` variable, if set.
#[must_use]
pub fn system_theme() -> Option<Theme> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
}

/// Parse a `fg;bg` (or `fg;default;bg`) color pair into a theme.
///
/// Background colors 7 and 15 are light; the other ANSI colors are dark.
#[must_use]
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        7 | 15 => Some(Theme::Light),
        0..=15 => Some(Theme::Dark),
        _ => None,
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
