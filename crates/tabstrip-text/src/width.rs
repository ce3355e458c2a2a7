#![forbid(unsafe_code)]

//! Grapheme-aware display width and truncation.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Calculate the display width of a single grapheme cluster.
///
/// Control characters report 0. Every other cluster is one or two columns,
/// so emoji sequences never vanish or balloon.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(char::is_control) {
        return 0;
    }
    UnicodeWidthStr::width(grapheme).clamp(1, 2)
}

/// Calculate the display width of text in columns.
///
/// Printable ASCII takes a fast path; anything else is segmented into
/// grapheme clusters.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        return text.len();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Truncate text to fit within a width, adding ellipsis if needed.
///
/// Never breaks a grapheme cluster. If the ellipsis alone is wider than
/// `max_width`, the text is truncated without one.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width);
    }

    let mut result = truncate_to_width(text, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Truncate text to exactly fit within a width (no ellipsis).
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let w = grapheme_width(grapheme);
        if current_width + w > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += w;
    }

    result
}
