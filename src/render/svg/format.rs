//! Text and coordinate formatting for SVG output.

/// Escape text for use in SVG/HTML content and attributes.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Coordinate rounded to two decimals, without trailing zeros.
#[must_use]
pub fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.abs() < f64::EPSILON {
        // avoid "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
