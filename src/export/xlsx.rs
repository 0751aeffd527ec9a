//! Spreadsheet export backend built on `rust_xlsxwriter`.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use super::{TableExporter, TableSnapshot};

/// Worksheet name shown in the spreadsheet tab.
const SHEET_NAME: &str = "Electrical Sizing";

/// Writes the snapshot as a single-sheet workbook: bold shaded header row,
/// one data row per ledger entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl TableExporter for XlsxExporter {
    fn format_name(&self) -> &'static str {
        "spreadsheet"
    }

    fn export(&self, snapshot: &TableSnapshot, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .context("Failed to name worksheet")?;

        let header_format = Format::new()
            .set_bold()
            .set_font_color("FFFFFF")
            .set_background_color("808080")
            .set_align(FormatAlign::Center);

        for (col, name) in snapshot.columns.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_num(col), *name, &header_format)
                .context("Failed to write header row")?;
        }

        for (row_idx, row) in snapshot.rows.iter().enumerate() {
            let row_num = u32::try_from(row_idx + 1).context("Too many rows for a worksheet")?;
            for (col_idx, cell) in row.iter().enumerate() {
                worksheet
                    .write_string(row_num, col_num(col_idx), cell)
                    .with_context(|| format!("Failed to write row {}", row_idx + 1))?;
            }
        }

        // Wide enough for the Portuguese labels and gauge strings
        for col in 0..snapshot.columns.len() {
            worksheet
                .set_column_width(col_num(col), 22)
                .context("Failed to size columns")?;
        }

        workbook
            .save(path)
            .with_context(|| format!("Failed to save spreadsheet to {}", path.display()))?;

        Ok(())
    }
}

/// Column indices here are always 0..6; the cast cannot truncate.
#[allow(clippy::cast_possible_truncation)]
const fn col_num(col: usize) -> u16 {
    col as u16
}
