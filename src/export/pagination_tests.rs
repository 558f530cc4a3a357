use super::*;

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

#[test]
fn tall_capture_spans_two_a4_pages() {
    let layout = PageLayout::new(3200, 9000, PageSize::A4);

    assert!(close(layout.ratio, 0.186_025, 1e-6), "{}", layout.ratio);
    assert!(close(layout.scaled_height, 1674.2, 0.1), "{}", layout.scaled_height);
    assert_eq!(layout.page_count, 2);

    let offsets: Vec<f64> = layout.offsets().collect();
    assert_eq!(offsets.len(), 2);
    assert!(close(offsets[0], 0.0, 1e-9));
    assert!(close(offsets[1], -841.89, 1e-9));
}

#[test]
fn exact_fit_is_one_page() {
    let layout = PageLayout::from_dimensions(595.28, 841.89, 595.28, 841.89);
    assert_eq!(layout.page_count, 1);
}

#[test]
fn short_capture_still_gets_a_page() {
    let layout = PageLayout::new(3200, 10, PageSize::A4);
    assert_eq!(layout.page_count, 1);

    let empty = PageLayout::from_dimensions(0.0, 0.0, 595.28, 841.89);
    assert_eq!(empty.page_count, 1);
}

#[test]
fn letter_pages_are_shorter() {
    let a4 = PageLayout::new(3200, 30_000, PageSize::A4);
    let letter = PageLayout::new(3200, 30_000, PageSize::Letter);
    assert!(letter.page_count >= a4.page_count);
    assert!(close(letter.page_width, 612.0, 1e-9));
}

#[test]
fn page_size_parses() {
    assert_eq!("A4".parse::<PageSize>().unwrap(), PageSize::A4);
    assert_eq!("letter".parse::<PageSize>().unwrap(), PageSize::Letter);
    assert!("legal".parse::<PageSize>().is_err());
}
