use crate::areas::review::Review;
use crate::artifacts::diff::alignment::align;
use crate::artifacts::report::report_document::ReportDocument;
use colored::Colorize;
use std::io::Write;

impl Review {
    /// Diffs `old_file` against `new_file` and writes the side-by-side
    /// spreadsheet to `output_file`.
    pub fn compare(&self, new_file: &str, old_file: &str, output_file: &str) -> anyhow::Result<()> {
        let new_path = self.workspace().resolve_input(new_file)?;
        let old_path = self.workspace().resolve_input(old_file)?;
        let output_path = self.workspace().resolve_output(output_file)?;

        let old_lines = self.workspace().read_lines(&old_path)?;
        let new_lines = self.workspace().read_lines(&new_path)?;

        let aligned = align(&old_lines, &new_lines);
        tracing::debug!("aligned {} rows: {}", aligned.len(), aligned.summary());

        ReportDocument::render(aligned.new_side(), aligned.old_side(), self.style())
            .write(&output_path)?;
        tracing::info!("comparison written to {}", output_path.display());

        writeln!(
            self.writer(),
            "{}",
            format!("Comparison Excel file '{output_file}' created successfully.")
                .green()
                .bold()
        )?;

        Ok(())
    }
}
