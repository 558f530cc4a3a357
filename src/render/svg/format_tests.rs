//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("News & Media"), "News &amp; Media");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_cyrillic_and_flags_alone() {
        assert_eq!(html_escape("🇺🇿 Узбекистан"), "🇺🇿 Узбекистан");
    }
}

mod coord_tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(coord(12.3456), "12.35");
        assert_eq!(coord(40.0), "40");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(coord(-0.001), "0");
    }
}
