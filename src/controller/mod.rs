//! Theme and language state plus the chart updates each change triggers.

mod language;
mod theme;

pub use language::LanguageController;
pub use theme::{CHART_FONT_FAMILY, ThemeController, system_theme, theme_from_colorfgbg};
