//! printpdf rendering of a composed [`ReportDocument`].
//!
//! The document model is top-down mm; PDF space is bottom-up, so every y is
//! flipped here and nowhere else.

use crate::error::{CarAiError, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::document::{Align, Block, ReportDocument};
use super::layout::{self, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

fn pdf_color(color: layout::Color) -> Color {
    Color::Rgb(Rgb::new(color.r as f32, color.g as f32, color.b as f32, None))
}

fn flip(y_mm: f64) -> f64 {
    PAGE_HEIGHT_MM - y_mm
}

/// Renders the report into PDF bytes.
pub fn render(report: &ReportDocument) -> Result<Vec<u8>> {
    let (doc, page1, layer1) = PdfDocument::new(
        report.title.as_str(),
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CarAiError::PdfGeneration(format!("font error: {e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CarAiError::PdfGeneration(format!("font error: {e:?}")))?;

    let mut page_refs = vec![(page1, layer1)];
    for _ in 1..report.pages.len() {
        page_refs.push(doc.add_page(
            Mm(PAGE_WIDTH_MM as f32),
            Mm(PAGE_HEIGHT_MM as f32),
            "Layer 1",
        ));
    }

    for (page, (page_index, layer_index)) in report.pages.iter().zip(&page_refs) {
        let layer = doc.get_page(*page_index).get_layer(*layer_index);

        for block in &page.blocks {
            match block {
                Block::Fill(fill) => {
                    let top = flip(fill.y_mm);
                    let bottom = flip(fill.y_mm + fill.height_mm);
                    let left = fill.x_mm as f32;
                    let right = (fill.x_mm + fill.width_mm) as f32;
                    let ring = vec![
                        (Point::new(Mm(left), Mm(bottom as f32)), false),
                        (Point::new(Mm(right), Mm(bottom as f32)), false),
                        (Point::new(Mm(right), Mm(top as f32)), false),
                        (Point::new(Mm(left), Mm(top as f32)), false),
                    ];
                    layer.set_fill_color(pdf_color(fill.color));
                    layer.add_polygon(Polygon {
                        rings: vec![ring],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    });
                }
                Block::Rule(rule) => {
                    let y = flip(rule.y_mm);
                    layer.set_outline_color(pdf_color(rule.color));
                    layer.set_outline_thickness(rule.thickness_pt as f32);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(0.0), Mm(y as f32)), false),
                            (Point::new(Mm(PAGE_WIDTH_MM as f32), Mm(y as f32)), false),
                        ],
                        is_closed: false,
                    });
                }
                Block::Text(text) => {
                    let width = layout::text_width_mm(&text.text, text.size_pt);
                    let x = match text.align {
                        Align::Left => text.x_mm,
                        Align::Center => text.x_mm - width / 2.0,
                        Align::Right => text.x_mm - width,
                    };
                    let font = if text.bold { &bold } else { &regular };
                    layer.set_fill_color(pdf_color(text.color));
                    layer.use_text(
                        text.text.as_str(),
                        text.size_pt as f32,
                        Mm(x as f32),
                        Mm(flip(text.y_mm) as f32),
                        font,
                    );
                }
            }
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| CarAiError::PdfGeneration(format!("save error: {e:?}")))?;
    writer
        .into_inner()
        .map_err(|e| CarAiError::PdfGeneration(format!("buffer flush error: {e}")))
}

/// Renders and writes the report to `path`.
pub fn save_report(report: &ReportDocument, path: &Path) -> Result<()> {
    let bytes = render(report)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    std::io::Write::write_all(&mut writer, &bytes)?;
    Ok(())
}
