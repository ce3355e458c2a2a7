#![no_main]

use libfuzzer_sys::fuzz_target;
use tabstrip_text::{
    CachedShaper, CellShaper, ShapeRequest, ShapingFeatures, TextDirection, TextShaper,
    display_width, truncate_with_ellipsis,
};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let max_cols = usize::from(data[0] % 64);
    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    let width = display_width(text);
    if text.is_empty() {
        assert_eq!(width, 0);
    }

    // Elision never widens and always fits.
    let elided = truncate_with_ellipsis(text, max_cols, "…");
    let elided_width = display_width(&elided);
    assert!(elided_width <= width);
    assert!(elided_width <= max_cols || width <= max_cols);

    // The cached shaper agrees with its backend on both the miss and hit path.
    let features = ShapingFeatures::new();
    let request = ShapeRequest::new(text, "", TextDirection::Auto, &features)
        .max_width(i32::try_from(max_cols * 10).unwrap_or(i32::MAX));
    let mut direct = CellShaper::new(10, 16);
    let mut cached = CachedShaper::new(CellShaper::new(10, 16), 8);
    let expected = direct.shape(&request);
    assert_eq!(cached.shape(&request), expected);
    assert_eq!(cached.shape(&request), expected);
    assert!(expected.width <= expected.natural_width);
    assert_eq!(cached.stats().hits, 1);
});
