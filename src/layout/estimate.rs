//! Heuristic row heights used before any real measurement exists

use unicode_segmentation::UnicodeSegmentation;

/// Base height of a single-line row in pixels
pub const ROW_BASE_HEIGHT_PX: f32 = 28.0;

/// Height added for each wrapped line beyond the first
pub const ROW_LINE_HEIGHT_PX: f32 = 16.0;

/// Characters assumed to fit on one line of the description column
pub const ROW_CHARS_PER_LINE: usize = 70;

/// Estimate the rendered height of a row from its description text.
///
/// Counts grapheme clusters (a multi-byte character occupies one column,
/// same as on screen), assumes [`ROW_CHARS_PER_LINE`] columns per wrapped
/// line, and charges [`ROW_LINE_HEIGHT_PX`] for every line after the
/// first. Empty text still yields the single-line height.
pub fn estimate_row_height_px(text: &str) -> f32 {
    let columns = text.graphemes(true).count();
    let lines = ((columns + ROW_CHARS_PER_LINE - 1) / ROW_CHARS_PER_LINE).max(1);
    ROW_BASE_HEIGHT_PX + (lines - 1) as f32 * ROW_LINE_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_single_line() {
        assert_eq!(estimate_row_height_px(""), 28.0);
    }

    #[test]
    fn test_exactly_one_line() {
        let text = "a".repeat(70);
        assert_eq!(estimate_row_height_px(&text), 28.0);
    }

    #[test]
    fn test_one_char_past_the_fold() {
        let text = "a".repeat(71);
        assert_eq!(estimate_row_height_px(&text), 44.0);
    }

    #[test]
    fn test_two_full_lines() {
        let text = "a".repeat(140);
        assert_eq!(estimate_row_height_px(&text), 44.0);
        let text = "a".repeat(141);
        assert_eq!(estimate_row_height_px(&text), 60.0);
    }

    #[test]
    fn test_counts_graphemes_not_bytes() {
        // 70 two-byte characters must still fit on one line
        let text = "ü".repeat(70);
        assert!(text.len() > 70);
        assert_eq!(estimate_row_height_px(&text), 28.0);
    }

    #[test]
    fn test_multi_codepoint_cluster_is_one_column() {
        // family emoji: many codepoints, one rendered column
        let text = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(estimate_row_height_px(text), 28.0);
    }
}
