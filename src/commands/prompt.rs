use derive_new::new;
use std::io::{BufRead, Write};

pub const NEW_FILE_PROMPT: &str = "Enter the path of the new file: ";
pub const OLD_FILE_PROMPT: &str = "Enter the path of the old file: ";
pub const OUTPUT_FILE_PROMPT: &str = "Enter the output Excel file name: ";

/// The three values a comparison needs, as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ComparePaths {
    pub new_file: String,
    pub old_file: String,
    pub output_file: String,
}

impl ComparePaths {
    /// Fills in every value not already given by prompting for it, in the
    /// order new file, old file, output file.
    pub fn collect(
        new_file: Option<String>,
        old_file: Option<String>,
        output_file: Option<String>,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> anyhow::Result<Self> {
        let new_file = match new_file {
            Some(value) => value,
            None => prompt(reader, writer, NEW_FILE_PROMPT)?,
        };
        let old_file = match old_file {
            Some(value) => value,
            None => prompt(reader, writer, OLD_FILE_PROMPT)?,
        };
        let output_file = match output_file {
            Some(value) => value,
            None => prompt(reader, writer, OUTPUT_FILE_PROMPT)?,
        };

        Ok(ComparePaths::new(new_file, old_file, output_file))
    }
}

/// Prints `message` and reads one line, without its line terminator.
pub fn prompt(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    message: &str,
) -> anyhow::Result<String> {
    write!(writer, "{message}")?;
    writer.flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        anyhow::bail!("Input closed before answering: {}", message.trim_end());
    }

    Ok(answer.trim_end_matches(['\n', '\r']).to_string())
}
