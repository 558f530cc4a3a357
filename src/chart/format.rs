//! Number and label formatting shared by chart specs and renderers.

/// Format a value as `X.XM`, `X.XK` or the literal number.
///
/// Millions and thousands are rounded half away from zero to one decimal.
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", round_to_tenth(value / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{:.1}K", round_to_tenth(value / 1_000.0))
    } else {
        format_plain(value)
    }
}

/// Format a number without trailing `.0` for whole values.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)] // Whole value checked above
        let whole = value as i64;
        whole.to_string()
    } else {
        let rounded = (value * 100.0).round() / 100.0;
        rounded.to_string()
    }
}

/// Format an axis value as a percentage (`0.9` → `0.9%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_plain(value))
}

/// Truncate `label` to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

/// Group digits of an integer in threes with `separator`.
#[must_use]
pub fn group_thousands(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
