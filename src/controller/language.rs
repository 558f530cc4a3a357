//! Active report language and the rebuilds a switch triggers.

use tracing::{info, warn};

use crate::chart::{ChartBackend, ChartKey, ChartRegistry, ThemePalette, build};
use crate::data::{Lang, MetricSnapshot};
use crate::error::Result;
use crate::render::TableRenderer;

/// Owns the active language.
///
/// A switch destroys and recreates every language-dependent chart, since
/// their labels and per-point colors differ between languages. The citation
/// chart only shows dates and is left alone. A switch that fails partway
/// puts the rebuilt charts back in the active language and keeps it.
#[derive(Debug, Clone, Copy)]
pub struct LanguageController {
    lang: Lang,
}

impl LanguageController {
    #[must_use]
    pub const fn new(lang: Lang) -> Self {
        Self { lang }
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    /// Switch to `lang`, rebuild the affected charts and re-render tables.
    ///
    /// Returns the number of charts rebuilt; zero when `lang` is already
    /// active.
    ///
    /// # Errors
    /// Propagates backend failures from chart creation. The active language
    /// and tables are unchanged in that case.
    pub fn set_language<B: ChartBackend>(
        &mut self,
        lang: Lang,
        snapshot: &MetricSnapshot,
        palette: &ThemePalette,
        registry: &mut ChartRegistry<B>,
        tables: &mut dyn TableRenderer,
    ) -> Result<usize> {
        if lang == self.lang {
            return Ok(0);
        }

        let mut switched = Vec::new();
        for key in ChartKey::language_dependent() {
            match registry.create_or_replace(build(key, snapshot, lang, palette)) {
                Ok(true) => switched.push(key),
                Ok(false) => {}
                Err(e) => {
                    warn!(chart = %key, %lang, error = %e, "language switch failed, reverting");
                    for key in switched {
                        let spec = build(key, snapshot, self.lang, palette);
                        if let Err(revert) = registry.create_or_replace(spec) {
                            warn!(chart = %key, error = %revert, "failed to revert chart");
                        }
                    }
                    return Err(e);
                }
            }
        }
        let rebuilt = switched.len();
        self.lang = lang;
        tables.render_tables(snapshot, lang);

        info!(%lang, rebuilt, "language changed");
        Ok(rebuilt)
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
