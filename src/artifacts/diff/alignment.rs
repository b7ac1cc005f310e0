use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use std::fmt::Display;

/// One side of an aligned row: either a numbered line or a gap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlignedEntry {
    #[default]
    Gap,
    Line {
        number: usize,
        text: String,
    },
}

impl AlignedEntry {
    /// Trailing whitespace is dropped from the displayed text.
    pub fn line(number: usize, text: &str) -> Self {
        AlignedEntry::Line {
            number,
            text: text.trim_end().to_string(),
        }
    }

    /// Display form `(number, content)`; a gap yields two empty strings.
    pub fn split(&self) -> (String, String) {
        match self {
            AlignedEntry::Line { number, text } => (number.to_string(), text.clone()),
            AlignedEntry::Gap => (String::new(), String::new()),
        }
    }
}

/// Counts of each kind of row in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignmentSummary {
    pub unchanged: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl Display for AlignmentSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unchanged, {} deleted, {} inserted",
            self.unchanged, self.deleted, self.inserted
        )
    }
}

/// Two gap-padded sequences of equal length, one per input file.
///
/// Row `i` of the new side and row `i` of the old side belong to the same
/// edit operation, so both sequences can be read side by side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedRows {
    new_side: Vec<AlignedEntry>,
    old_side: Vec<AlignedEntry>,
}

impl AlignedRows {
    pub fn new_side(&self) -> &[AlignedEntry] {
        &self.new_side
    }

    pub fn old_side(&self) -> &[AlignedEntry] {
        &self.old_side
    }

    pub fn len(&self) -> usize {
        self.new_side.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_side.is_empty()
    }

    /// Rows as `(new_entry, old_entry)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&AlignedEntry, &AlignedEntry)> {
        self.new_side.iter().zip(self.old_side.iter())
    }

    pub fn summary(&self) -> AlignmentSummary {
        self.rows()
            .fold(AlignmentSummary::default(), |mut summary, row| {
                match row {
                    (AlignedEntry::Line { .. }, AlignedEntry::Line { .. }) => {
                        summary.unchanged += 1
                    }
                    (AlignedEntry::Gap, AlignedEntry::Line { .. }) => summary.deleted += 1,
                    (AlignedEntry::Line { .. }, AlignedEntry::Gap) => summary.inserted += 1,
                    (AlignedEntry::Gap, AlignedEntry::Gap) => {}
                }
                summary
            })
    }

    fn push(&mut self, new_entry: AlignedEntry, old_entry: AlignedEntry) {
        self.new_side.push(new_entry);
        self.old_side.push(old_entry);
    }
}

/// Diffs `old_lines` against `new_lines` and expands the edit script into
/// one aligned row per edit operation.
///
/// A deletion leaves a gap on the new side and an insertion a gap on the old
/// side; a changed line therefore shows up as a deleted row followed by an
/// inserted row, never as a single paired row.
pub fn align<S: AsRef<str>>(old_lines: &[S], new_lines: &[S]) -> AlignedRows {
    let old_lines = old_lines.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    let new_lines = new_lines.iter().map(AsRef::as_ref).collect::<Vec<&str>>();

    let edits = MyersDiff::new(&old_lines, &new_lines).diff();

    let mut aligned = AlignedRows {
        new_side: Vec::with_capacity(edits.len()),
        old_side: Vec::with_capacity(edits.len()),
    };
    let (mut old_line_number, mut new_line_number) = (1usize, 1usize);

    for edit in edits {
        tracing::trace!("{edit}");

        match edit {
            Edit::Equal { value } => {
                aligned.push(
                    AlignedEntry::line(new_line_number, value),
                    AlignedEntry::line(old_line_number, value),
                );
                new_line_number += 1;
                old_line_number += 1;
            }
            Edit::Delete { value } => {
                aligned.push(
                    AlignedEntry::Gap,
                    AlignedEntry::line(old_line_number, value),
                );
                old_line_number += 1;
            }
            Edit::Insert { value } => {
                aligned.push(
                    AlignedEntry::line(new_line_number, value),
                    AlignedEntry::Gap,
                );
                new_line_number += 1;
            }
        }
    }

    aligned
}
