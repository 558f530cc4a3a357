//! Two-locale strings stored as `"<ru> / <en>"` and their resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator between the two language variants of a [`BilingualString`].
pub const DELIMITER: &str = " / ";

/// Display language of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Primary language, segment 0.
    #[default]
    Ru,
    /// Secondary language, segment 1.
    En,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// Segment index inside a bilingual string.
    #[must_use]
    pub const fn segment(self) -> usize {
        match self {
            Self::Ru => 0,
            Self::En => 1,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Name used in exported file names (`dashboard-<name>.pdf`).
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Ru => "russian",
            Self::En => "english",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "russian" => Ok(Self::Ru),
            "en" | "english" => Ok(Self::En),
            _ => Err(format!("Unknown language: {s} (expected ru or en)")),
        }
    }
}

/// A label carrying both language variants joined by [`DELIMITER`].
///
/// A value without the delimiter is used for both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BilingualString(String);

impl BilingualString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build from separate variants.
    #[must_use]
    pub fn from_parts(primary: &str, secondary: &str) -> Self {
        Self(format!("{primary}{DELIMITER}{secondary}"))
    }

    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    /// Variant for `lang`. See [`resolve`].
    #[must_use]
    pub fn resolve(&self, lang: Lang) -> &str {
        resolve(&self.0, lang)
    }
}

impl From<&str> for BilingualString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Pick the segment of `bilingual` for `lang`.
///
/// Falls back to segment 0 when the requested segment is missing or empty,
/// and to the whole input when segment 0 is empty too. Never fails.
#[must_use]
pub fn resolve(bilingual: &str, lang: Lang) -> &str {
    let mut segments = bilingual.split(DELIMITER);
    let primary = segments.next().unwrap_or_default();
    let requested = match lang.segment() {
        0 => Some(primary),
        index => segments.nth(index - 1),
    };

    match requested {
        Some(segment) if !segment.is_empty() => segment,
        _ if !primary.is_empty() => primary,
        _ => bilingual,
    }
}

#[cfg(test)]
#[path = "bilingual_tests.rs"]
mod tests;
