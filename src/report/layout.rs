//! Report layout constants (mm, A4 portrait).
//!
//! Coordinates in the document model are top-down in mm; the PDF renderer
//! flips them. Font sizes stay in pt.

/// A4 size (mm)
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Side margin (mm)
pub const MARGIN_MM: f64 = 15.0;

/// Header/footer band height (mm)
pub const BAND_HEIGHT_MM: f64 = 15.0;

/// First usable baseline below the header band
pub const CONTENT_TOP_MM: f64 = 20.0;

/// Last usable baseline above the footer band
pub const CONTENT_BOTTOM_MM: f64 = PAGE_HEIGHT_MM - BAND_HEIGHT_MM - 5.0;

pub const USABLE_WIDTH_MM: f64 = PAGE_WIDTH_MM - MARGIN_MM * 2.0;

/// Table rows and wrapped text lines
pub const ROW_HEIGHT_MM: f64 = 8.0;
pub const LINE_HEIGHT_MM: f64 = 5.0;
pub const SECTION_GAP_MM: f64 = 15.0;

/// Label column share of the usable width
pub const LABEL_COLUMN_RATIO: f64 = 0.55;
pub const CELL_PADDING_MM: f64 = 2.5;

/// pt → mm (1 pt = 25.4/72 mm)
pub const PT_TO_MM: f64 = 25.4 / 72.0;

/// Average Helvetica glyph advance as a fraction of the font size. Good
/// enough for centering and wrapping; exact metrics are not worth a font
/// parser here.
pub const GLYPH_WIDTH_RATIO: f64 = 0.5;

// ============================================
// Theme (mirrors the service's web report styling)
// ============================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub const INK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
pub const MUTED: Color = Color { r: 0.392, g: 0.392, b: 0.392 };
pub const ACCENT: Color = Color { r: 1.0, g: 0.549, b: 0.0 };
pub const BAND: Color = Color { r: 0.078, g: 0.078, b: 0.118 };
pub const STRIPE: Color = Color { r: 1.0, g: 0.941, b: 0.863 };
pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
pub const FOOTER_TEXT: Color = Color { r: 0.784, g: 0.784, b: 0.784 };

// ============================================
// Text measurement helpers
// ============================================

/// Approximate rendered width of `text` at `font_size_pt`.
pub fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * GLYPH_WIDTH_RATIO * PT_TO_MM
}

/// Greedy word wrap to a maximum line width. Words longer than the line are
/// emitted as-is rather than split.
pub fn wrap_text(text: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, font_size_pt) <= max_width_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!((USABLE_WIDTH_MM - 180.0).abs() < 0.01);
        assert!(CONTENT_BOTTOM_MM > CONTENT_TOP_MM);
        assert!(CONTENT_BOTTOM_MM < PAGE_HEIGHT_MM - BAND_HEIGHT_MM + 0.01);
    }

    #[test]
    fn test_text_width_scales() {
        let narrow = text_width_mm("car", 10.0);
        let wide = text_width_mm("car analyzer", 10.0);
        assert!(wide > narrow);
        assert!((text_width_mm("ab", 10.0) - 2.0 * 10.0 * GLYPH_WIDTH_RATIO * PT_TO_MM).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "This estimation is based on AI analysis of the provided images";
        let lines = wrap_text(text, 40.0, 9.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 9.0) <= 40.0 + 1e-9, "line too wide: {line}");
        }
        // nothing lost in the wrap
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_single_short_line() {
        let lines = wrap_text("short", 100.0, 9.0);
        assert_eq!(lines, vec!["short"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 100.0, 9.0).is_empty());
    }

    #[test]
    fn test_wrap_text_overlong_word_kept_whole() {
        let lines = wrap_text("supercalifragilistic", 5.0, 12.0);
        assert_eq!(lines.len(), 1);
    }
}
