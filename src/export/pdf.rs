//! Document export backend built on `lopdf`.
//!
//! Produces a landscape-letter PDF: a title line, the ledger table with a
//! grey header row and gridlines, and a closing disclaimer. Long ledgers
//! flow onto continuation pages, each repeating the header row.
//!
//! Text is written with the standard Helvetica fonts under WinAnsi
//! encoding, which covers "m²" and the accented Portuguese labels.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use super::{TableExporter, TableSnapshot};
use crate::constants::{DOCUMENT_DISCLAIMER, DOCUMENT_TITLE};

// Landscape US letter, in points
const PAGE_WIDTH: f64 = 792.0;
const PAGE_HEIGHT: f64 = 612.0;
const MARGIN: f64 = 36.0;

// Column widths sum to the printable width, TABLE_WIDTH
const COLUMN_WIDTHS: [f64; 6] = [150.0, 80.0, 150.0, 100.0, 110.0, 130.0];
const TABLE_WIDTH: f64 = 720.0;
const HEADER_ROW_HEIGHT: f64 = 24.0;
const BODY_ROW_HEIGHT: f64 = 20.0;

const TITLE_SIZE: f64 = 16.0;
const TABLE_FONT_SIZE: f64 = 10.0;
const DISCLAIMER_SIZE: f64 = 9.0;
const DISCLAIMER_LEADING: f64 = 12.0;

const GREY: (f64, f64, f64) = (0.5, 0.5, 0.5);
const WHITE: (f64, f64, f64) = (1.0, 1.0, 1.0);
const BLACK: (f64, f64, f64) = (0.0, 0.0, 0.0);
const BEIGE: (f64, f64, f64) = (0.96, 0.96, 0.86);

/// Writes the snapshot as a paginated landscape PDF document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl TableExporter for PdfExporter {
    fn format_name(&self) -> &'static str {
        "document"
    }

    fn export(&self, snapshot: &TableSnapshot, path: &Path) -> Result<()> {
        let pages = layout_pages(snapshot);
        let document = build_document(pages)?;
        save_document(document, path)
    }
}

/// Lays the title, table rows, and disclaimer out into per-page operation
/// lists, breaking to a new page whenever the cursor would cross the
/// bottom margin.
fn layout_pages(snapshot: &TableSnapshot) -> Vec<Vec<Operation>> {
    let mut pages = Vec::new();
    let mut ops = Vec::new();

    // Title, first page only
    let mut y = PAGE_HEIGHT - MARGIN - TITLE_SIZE;
    draw_text(&mut ops, "F2", TITLE_SIZE, MARGIN, y, BLACK, DOCUMENT_TITLE);
    y -= 24.0;

    draw_header_row(&mut ops, y, &snapshot.columns);
    y -= HEADER_ROW_HEIGHT;

    for row in &snapshot.rows {
        if y - BODY_ROW_HEIGHT < MARGIN {
            pages.push(std::mem::take(&mut ops));
            y = PAGE_HEIGHT - MARGIN;
            draw_header_row(&mut ops, y, &snapshot.columns);
            y -= HEADER_ROW_HEIGHT;
        }
        draw_body_row(&mut ops, y, row);
        y -= BODY_ROW_HEIGHT;
    }

    // Disclaimer paragraph, after the table
    let lines = wrap_text(DOCUMENT_DISCLAIMER, 150);
    let needed = 24.0 + DISCLAIMER_LEADING * lines.len() as f64;
    if y - needed < MARGIN {
        pages.push(std::mem::take(&mut ops));
        y = PAGE_HEIGHT - MARGIN;
    }
    y -= 24.0;
    for line in &lines {
        draw_text(&mut ops, "F1", DISCLAIMER_SIZE, MARGIN, y, BLACK, line);
        y -= DISCLAIMER_LEADING;
    }

    pages.push(ops);
    pages
}

fn draw_header_row(ops: &mut Vec<Operation>, top: f64, columns: &[&'static str; 6]) {
    fill_row(ops, top, HEADER_ROW_HEIGHT, GREY);
    stroke_row(ops, top, HEADER_ROW_HEIGHT);

    let mut x = MARGIN;
    for (width, name) in COLUMN_WIDTHS.iter().zip(columns.iter()) {
        draw_cell_text(ops, "F2", x, top, *width, HEADER_ROW_HEIGHT, WHITE, name);
        x += width;
    }
}

fn draw_body_row(ops: &mut Vec<Operation>, top: f64, row: &[String; 6]) {
    fill_row(ops, top, BODY_ROW_HEIGHT, BEIGE);
    stroke_row(ops, top, BODY_ROW_HEIGHT);

    let mut x = MARGIN;
    for (width, cell) in COLUMN_WIDTHS.iter().zip(row.iter()) {
        draw_cell_text(ops, "F1", x, top, *width, BODY_ROW_HEIGHT, BLACK, cell);
        x += width;
    }
}

/// Fills the full row rectangle with `color`.
fn fill_row(ops: &mut Vec<Operation>, top: f64, height: f64, color: (f64, f64, f64)) {
    ops.push(Operation::new(
        "rg",
        vec![color.0.into(), color.1.into(), color.2.into()],
    ));
    ops.push(Operation::new(
        "re",
        vec![
            MARGIN.into(),
            (top - height).into(),
            TABLE_WIDTH.into(),
            height.into(),
        ],
    ));
    ops.push(Operation::new("f", vec![]));
}

/// Strokes the gridlines of one row, cell by cell.
fn stroke_row(ops: &mut Vec<Operation>, top: f64, height: f64) {
    ops.push(Operation::new(
        "RG",
        vec![BLACK.0.into(), BLACK.1.into(), BLACK.2.into()],
    ));
    ops.push(Operation::new("w", vec![0.75.into()]));

    let mut x = MARGIN;
    for width in COLUMN_WIDTHS {
        ops.push(Operation::new(
            "re",
            vec![x.into(), (top - height).into(), width.into(), height.into()],
        ));
        x += width;
    }
    ops.push(Operation::new("S", vec![]));
}

/// Draws one cell's text, horizontally centered by the Helvetica average
/// glyph width. Good enough for table strings; no font metrics needed.
fn draw_cell_text(
    ops: &mut Vec<Operation>,
    font: &str,
    x: f64,
    top: f64,
    width: f64,
    height: f64,
    color: (f64, f64, f64),
    text: &str,
) {
    let approx_width = 0.5 * TABLE_FONT_SIZE * text.chars().count() as f64;
    let text_x = x + ((width - approx_width) / 2.0).max(3.0);
    let baseline = top - height + (height - TABLE_FONT_SIZE) / 2.0 + 1.5;
    draw_text(ops, font, TABLE_FONT_SIZE, text_x, baseline, color, text);
}

fn draw_text(
    ops: &mut Vec<Operation>,
    font: &str,
    size: f64,
    x: f64,
    y: f64,
    color: (f64, f64, f64),
    text: &str,
) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "rg",
        vec![color.0.into(), color.1.into(), color.2.into()],
    ));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Assembles page objects, the page tree, fonts, and the catalog.
fn build_document(pages: Vec<Vec<Operation>>) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content.encode().context("Failed to encode page content")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).context("Too many pages")?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

fn save_document(mut doc: Document, path: &Path) -> Result<()> {
    doc.save(path)
        .with_context(|| format!("Failed to save document to {}", path.display()))?;
    Ok(())
}

/// Maps text to WinAnsi (CP-1252) bytes. Latin-1 covers the Portuguese
/// labels and the superscript two; a handful of typographic characters get
/// their CP-1252 slots and everything else degrades to '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            0x2018 => 0x91, // left single quote
            0x2019 => 0x92, // right single quote
            0x201C => 0x93, // left double quote
            0x201D => 0x94, // right double quote
            0x2013 => 0x96, // en dash
            0x2014 => 0x97, // em dash
            _ => b'?',
        })
        .collect()
}

/// Greedy word wrap by character count (the disclaimer is plain prose).
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
