use derive_new::new;

pub const COLUMN_COUNT: usize = 4;

/// Report columns, in the order they appear in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Column {
    NewNumber,
    NewContent,
    OldNumber,
    OldContent,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::NewNumber,
        Column::NewContent,
        Column::OldNumber,
        Column::OldContent,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_number(self) -> bool {
        matches!(self, Column::NewNumber | Column::OldNumber)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellValue {
    #[default]
    Blank,
    Text(String),
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(value)
        }
    }
}

impl CellValue {
    /// Character count of the value, `None` when there is nothing to measure.
    pub fn measured_len(&self) -> Option<usize> {
        match self {
            CellValue::Text(text) => Some(text.chars().count()),
            CellValue::Blank => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct Cell {
    pub value: CellValue,
    pub highlight: Option<Highlight>,
    pub centered: bool,
}

#[cfg(test)]
mod tests {
    use crate::artifacts::report::cell::{CellValue, Column};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::ascii("let x = 1;", Some(10))]
    #[case::multibyte("héllo wörld", Some(11))]
    #[case::empty("", None)]
    fn test_measured_len_counts_characters(#[case] raw: &str, #[case] expected: Option<usize>) {
        assert_eq!(CellValue::from(raw.to_string()).measured_len(), expected);
    }

    #[test]
    fn test_columns_are_ordered_new_before_old() {
        let indices = Column::ALL.iter().map(|c| c.index()).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(Column::NewNumber.is_number());
        assert!(!Column::OldContent.is_number());
    }
}
