use crate::artifacts::diff::alignment::AlignedEntry;
use crate::artifacts::report::cell::{COLUMN_COUNT, Cell, CellValue, Column, Highlight};
use crate::artifacts::report::report_style::ReportStyle;
use anyhow::Context;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Workbook, XlsxError};
use std::io::Write;
use std::path::Path;

pub type ReportRow = [Cell; COLUMN_COUNT];

/// Side-by-side comparison laid out as sheet rows.
///
/// Built once from two aligned sides, then consumed by [`ReportDocument::write`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    rows: Vec<ReportRow>,
    column_widths: [f64; COLUMN_COUNT],
    style: ReportStyle,
}

impl ReportDocument {
    pub fn render(
        new_aligned: &[AlignedEntry],
        old_aligned: &[AlignedEntry],
        style: &ReportStyle,
    ) -> Self {
        let mut document = ReportDocument {
            rows: Vec::with_capacity(new_aligned.len()),
            column_widths: [0.0; COLUMN_COUNT],
            style: style.clone(),
        };

        for (new_entry, old_entry) in new_aligned.iter().zip(old_aligned.iter()) {
            document.push_row(new_entry, old_entry);
        }
        document.size_columns();

        document
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn column_widths(&self) -> &[f64; COLUMN_COUNT] {
        &self.column_widths
    }

    fn push_row(&mut self, new_entry: &AlignedEntry, old_entry: &AlignedEntry) {
        let (new_number, new_content) = new_entry.split();
        let (old_number, old_content) = old_entry.split();

        // decided on the displayed content alone, one row per edit operation
        let new_highlight =
            (!new_content.is_empty() && old_content.is_empty()).then_some(Highlight::Added);
        let old_highlight =
            (!old_content.is_empty() && new_content.is_empty()).then_some(Highlight::Removed);

        let row = Column::ALL.map(|column| {
            let (text, highlight) = match column {
                Column::NewNumber => (&new_number, None),
                Column::NewContent => (&new_content, new_highlight),
                Column::OldNumber => (&old_number, None),
                Column::OldContent => (&old_content, old_highlight),
            };
            Cell::new(text.clone().into(), highlight, column.is_number())
        });

        self.rows.push(row);
    }

    fn size_columns(&mut self) {
        let mut max_lengths = [0usize; COLUMN_COUNT];

        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                if let Some(len) = cell.value.measured_len() {
                    max_lengths[column] = max_lengths[column].max(len);
                }
            }
        }

        self.column_widths = max_lengths.map(|len| len as f64 * self.style.width_padding);
    }

    fn to_workbook(&self) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.style.sheet_name)?;

        let centered = Format::new().set_align(FormatAlign::Center);
        let added = Format::new()
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(self.style.added_fill));
        let removed = Format::new()
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(self.style.removed_fill));

        for (row_index, row) in self.rows.iter().enumerate() {
            let row_num = row_index as u32;

            for (column, cell) in row.iter().enumerate() {
                let col_num = column as u16;
                let format = match (cell.highlight, cell.centered) {
                    (Some(Highlight::Added), _) => Some(&added),
                    (Some(Highlight::Removed), _) => Some(&removed),
                    (None, true) => Some(&centered),
                    (None, false) => None,
                };

                match (&cell.value, format) {
                    (CellValue::Text(text), Some(format)) => {
                        worksheet.write_string_with_format(row_num, col_num, text, format)?;
                    }
                    (CellValue::Text(text), None) => {
                        worksheet.write_string(row_num, col_num, text)?;
                    }
                    (CellValue::Blank, Some(format)) => {
                        worksheet.write_blank(row_num, col_num, format)?;
                    }
                    (CellValue::Blank, None) => {}
                }
            }
        }

        for (column, width) in self.column_widths.iter().enumerate() {
            worksheet.set_column_width(column as u16, *width)?;
        }

        Ok(workbook)
    }

    /// Writes the report as an `.xlsx` file at `destination`.
    ///
    /// The workbook is staged in a temporary file next to the destination and
    /// renamed into place, so a failure leaves no partial file behind. The
    /// staged file is created with the same mode a plain file write would get
    /// under the current umask.
    pub fn write(self, destination: &Path) -> anyhow::Result<()> {
        let buffer = self
            .to_workbook()
            .and_then(|mut workbook| workbook.save_to_buffer())
            .with_context(|| format!("Failed to build workbook for {}", destination.display()))?;

        let directory = destination
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut builder = tempfile::Builder::new();
        builder.prefix(".delta-review");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut staged = builder.tempfile_in(directory).with_context(|| {
            format!("Failed to create output file in {}", directory.display())
        })?;
        staged
            .write_all(&buffer)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
        staged
            .persist(destination)
            .with_context(|| format!("Failed to write {}", destination.display()))?;

        tracing::debug!(
            rows = self.rows.len(),
            bytes = buffer.len(),
            "report written to {}",
            destination.display()
        );

        Ok(())
    }
}
