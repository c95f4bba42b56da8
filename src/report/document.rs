//! Two-pass report document model.
//!
//! Pass one composes content pages through [`Composer`], which opens new
//! pages whenever a block would cross into the footer area. Pass two
//! ([`stamp_chrome`]) adds the header band and the "Page X of Y" footer to
//! every page; it has to run after composition because Y is unknown while
//! page 1 is being laid out.

use super::layout::{
    self, Color, ACCENT, BAND, BAND_HEIGHT_MM, CELL_PADDING_MM, CONTENT_BOTTOM_MM, CONTENT_TOP_MM,
    FOOTER_TEXT, INK, LABEL_COLUMN_RATIO, LINE_HEIGHT_MM, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    ROW_HEIGHT_MM, STRIPE, USABLE_WIDTH_MM, WHITE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone)]
pub struct TextBlock {
    /// Anchor point; interpretation depends on `align`.
    pub x_mm: f64,
    /// Baseline, top-down.
    pub y_mm: f64,
    pub size_pt: f64,
    pub color: Color,
    pub align: Align,
    pub bold: bool,
    pub text: String,
}

/// Filled rectangle; `y_mm` is the top edge, top-down.
#[derive(Debug, Clone)]
pub struct FillBlock {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub color: Color,
}

/// Full-width horizontal rule.
#[derive(Debug, Clone)]
pub struct RuleBlock {
    pub y_mm: f64,
    pub thickness_pt: f64,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub enum Block {
    Text(TextBlock),
    Fill(FillBlock),
    Rule(RuleBlock),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub blocks: Vec<Block>,
}

/// Built once from an analysis outcome; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<Page>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableTheme {
    /// Accent header row, alternating row fills.
    Striped,
    /// Rule under every row, right-aligned values.
    Grid,
    /// No decoration.
    Plain,
}

/// Content-page builder with a top-down cursor.
pub struct Composer {
    pages: Vec<Page>,
    cursor_mm: f64,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor_mm: CONTENT_TOP_MM,
        }
    }

    pub fn cursor_mm(&self) -> f64 {
        self.cursor_mm
    }

    fn current(&mut self) -> &mut Page {
        // pages is never empty
        self.pages.last_mut().expect("composer always has a page")
    }

    /// Opens a new page if `height_mm` would cross the footer boundary.
    pub fn ensure_space(&mut self, height_mm: f64) {
        if self.cursor_mm + height_mm > CONTENT_BOTTOM_MM {
            self.pages.push(Page::default());
            self.cursor_mm = CONTENT_TOP_MM;
        }
    }

    pub fn advance(&mut self, height_mm: f64) {
        self.cursor_mm += height_mm;
    }

    /// Places a single line at the cursor and advances past it.
    pub fn line(&mut self, text: impl Into<String>, size_pt: f64, color: Color, align: Align) {
        self.ensure_space(LINE_HEIGHT_MM);
        let x_mm = match align {
            Align::Left => MARGIN_MM,
            Align::Center => PAGE_WIDTH_MM / 2.0,
            Align::Right => PAGE_WIDTH_MM - MARGIN_MM,
        };
        let y_mm = self.cursor_mm;
        self.current().blocks.push(Block::Text(TextBlock {
            x_mm,
            y_mm,
            size_pt,
            color,
            align,
            bold: false,
            text: text.into(),
        }));
        self.advance(LINE_HEIGHT_MM);
    }

    /// Section heading in the accent color.
    pub fn heading(&mut self, text: impl Into<String>) {
        self.ensure_space(LINE_HEIGHT_MM * 2.0);
        let y_mm = self.cursor_mm;
        self.current().blocks.push(Block::Text(TextBlock {
            x_mm: MARGIN_MM,
            y_mm,
            size_pt: 13.0,
            color: ACCENT,
            align: Align::Left,
            bold: true,
            text: text.into(),
        }));
        self.advance(LINE_HEIGHT_MM * 1.6);
    }

    /// Word-wrapped paragraph spanning the usable width.
    pub fn paragraph(&mut self, text: &str, size_pt: f64, color: Color) {
        for line in layout::wrap_text(text, USABLE_WIDTH_MM, size_pt) {
            self.line(line, size_pt, color, Align::Left);
        }
    }

    /// Two-column table. Each row is paged individually so a long table
    /// continues onto new pages automatically.
    pub fn table(&mut self, head: Option<(&str, &str)>, rows: &[(String, String)], theme: TableTheme) {
        let label_x = MARGIN_MM + CELL_PADDING_MM;
        let value_col_x = MARGIN_MM + USABLE_WIDTH_MM * LABEL_COLUMN_RATIO;

        if let Some((left, right)) = head {
            self.ensure_space(ROW_HEIGHT_MM);
            let top = self.cursor_mm;
            self.current().blocks.push(Block::Fill(FillBlock {
                x_mm: MARGIN_MM,
                y_mm: top,
                width_mm: USABLE_WIDTH_MM,
                height_mm: ROW_HEIGHT_MM,
                color: ACCENT,
            }));
            for (text, x_mm) in [(left, label_x), (right, value_col_x + CELL_PADDING_MM)] {
                self.current().blocks.push(Block::Text(TextBlock {
                    x_mm,
                    y_mm: top + ROW_HEIGHT_MM - CELL_PADDING_MM,
                    size_pt: 11.0,
                    color: WHITE,
                    align: Align::Left,
                    bold: true,
                    text: text.to_string(),
                }));
            }
            self.advance(ROW_HEIGHT_MM);
        }

        for (index, (label, value)) in rows.iter().enumerate() {
            self.ensure_space(ROW_HEIGHT_MM);
            let top = self.cursor_mm;

            if theme == TableTheme::Striped && index % 2 == 1 {
                self.current().blocks.push(Block::Fill(FillBlock {
                    x_mm: MARGIN_MM,
                    y_mm: top,
                    width_mm: USABLE_WIDTH_MM,
                    height_mm: ROW_HEIGHT_MM,
                    color: STRIPE,
                }));
            }

            let baseline = top + ROW_HEIGHT_MM - CELL_PADDING_MM;
            self.current().blocks.push(Block::Text(TextBlock {
                x_mm: label_x,
                y_mm: baseline,
                size_pt: 11.0,
                color: INK,
                align: Align::Left,
                bold: theme != TableTheme::Striped,
                text: label.clone(),
            }));

            let (value_x, value_align) = if theme == TableTheme::Grid {
                (PAGE_WIDTH_MM - MARGIN_MM - CELL_PADDING_MM, Align::Right)
            } else {
                (value_col_x + CELL_PADDING_MM, Align::Left)
            };
            self.current().blocks.push(Block::Text(TextBlock {
                x_mm: value_x,
                y_mm: baseline,
                size_pt: 11.0,
                color: INK,
                align: value_align,
                bold: false,
                text: value.clone(),
            }));

            if theme == TableTheme::Grid {
                self.current().blocks.push(Block::Rule(RuleBlock {
                    y_mm: top + ROW_HEIGHT_MM,
                    thickness_pt: 0.3,
                    color: layout::MUTED,
                }));
            }

            self.advance(ROW_HEIGHT_MM);
        }
    }

    pub fn section_gap(&mut self) {
        self.advance(layout::SECTION_GAP_MM - ROW_HEIGHT_MM / 2.0);
    }

    pub fn finish(self, title: impl Into<String>) -> ReportDocument {
        ReportDocument {
            title: title.into(),
            pages: self.pages,
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Second pass: stamps the product banner and the paginated footer on every
/// page, including pages created by table overflow.
pub fn stamp_chrome(report: &mut ReportDocument, product_name: &str, copyright_year: i32) {
    let total = report.pages.len();

    for (index, page) in report.pages.iter_mut().enumerate() {
        // header band
        page.blocks.push(Block::Fill(FillBlock {
            x_mm: 0.0,
            y_mm: 0.0,
            width_mm: PAGE_WIDTH_MM,
            height_mm: BAND_HEIGHT_MM,
            color: BAND,
        }));
        page.blocks.push(Block::Text(TextBlock {
            x_mm: MARGIN_MM,
            y_mm: 10.0,
            size_pt: 12.0,
            color: WHITE,
            align: Align::Left,
            bold: true,
            text: product_name.to_string(),
        }));
        page.blocks.push(Block::Rule(RuleBlock {
            y_mm: BAND_HEIGHT_MM,
            thickness_pt: 1.4,
            color: ACCENT,
        }));

        // footer band
        let footer_top = PAGE_HEIGHT_MM - BAND_HEIGHT_MM;
        page.blocks.push(Block::Fill(FillBlock {
            x_mm: 0.0,
            y_mm: footer_top,
            width_mm: PAGE_WIDTH_MM,
            height_mm: BAND_HEIGHT_MM,
            color: BAND,
        }));
        page.blocks.push(Block::Rule(RuleBlock {
            y_mm: footer_top,
            thickness_pt: 1.4,
            color: ACCENT,
        }));
        page.blocks.push(Block::Text(TextBlock {
            x_mm: MARGIN_MM,
            y_mm: PAGE_HEIGHT_MM - 7.0,
            size_pt: 9.0,
            color: FOOTER_TEXT,
            align: Align::Left,
            bold: false,
            text: format!("© {copyright_year} {product_name}. All Rights Reserved."),
        }));
        page.blocks.push(Block::Text(TextBlock {
            x_mm: PAGE_WIDTH_MM - MARGIN_MM,
            y_mm: PAGE_HEIGHT_MM - 7.0,
            size_pt: 9.0,
            color: FOOTER_TEXT,
            align: Align::Right,
            bold: false,
            text: format!("Page {} of {}", index + 1, total),
        }));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn page_texts(page: &Page) -> Vec<&str> {
        page.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_composer_starts_with_one_page() {
        let composer = Composer::new();
        let report = composer.finish("t");
        assert_eq!(report.page_count(), 1);
    }

    #[test]
    fn test_long_table_overflows_to_new_pages() {
        let mut composer = Composer::new();
        let rows: Vec<_> = (0..80)
            .map(|i| (format!("Attribute {i}"), format!("Value {i}")))
            .collect();
        composer.table(Some(("Characteristic", "Value")), &rows, TableTheme::Striped);

        let report = composer.finish("t");
        assert!(report.page_count() > 1, "80 rows must not fit one page");

        // every page carries content within the content area
        for page in &report.pages {
            assert!(!page.blocks.is_empty());
        }
    }

    #[test]
    fn test_rows_never_cross_footer_boundary() {
        let mut composer = Composer::new();
        let rows: Vec<_> = (0..40).map(|i| (format!("k{i}"), format!("v{i}"))).collect();
        composer.table(None, &rows, TableTheme::Plain);
        let report = composer.finish("t");

        for page in &report.pages {
            for block in &page.blocks {
                if let Block::Text(t) = block {
                    assert!(t.y_mm <= CONTENT_BOTTOM_MM + 1e-9);
                    assert!(t.y_mm >= CONTENT_TOP_MM - 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_stamp_chrome_numbers_every_page() {
        let mut composer = Composer::new();
        let rows: Vec<_> = (0..80).map(|i| (format!("k{i}"), format!("v{i}"))).collect();
        composer.table(None, &rows, TableTheme::Plain);
        let mut report = composer.finish("t");
        let total = report.page_count();
        assert!(total > 1);

        stamp_chrome(&mut report, "AI Car Analyzer", 2026);

        for (index, page) in report.pages.iter().enumerate() {
            let texts = page_texts(page);
            let marker = format!("Page {} of {}", index + 1, total);
            assert!(texts.contains(&marker.as_str()), "missing footer on page {index}");
            assert!(texts.contains(&"AI Car Analyzer"));
            assert!(texts.iter().any(|t| t.starts_with("© 2026")));
        }
    }

    #[test]
    fn test_striped_table_alternates_fills() {
        let mut composer = Composer::new();
        let rows: Vec<_> = (0..4).map(|i| (format!("k{i}"), format!("v{i}"))).collect();
        composer.table(Some(("Characteristic", "Value")), &rows, TableTheme::Striped);
        let report = composer.finish("t");

        let fills = report.pages[0]
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Fill(f) if f.color == STRIPE))
            .count();
        assert_eq!(fills, 2, "rows 1 and 3 are striped");
    }
}
