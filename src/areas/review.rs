use crate::areas::workspace::Workspace;
use crate::artifacts::report::report_style::ReportStyle;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One comparison session: where paths resolve from, where user-facing
/// messages go and how the report is styled.
pub struct Review {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    style: ReportStyle,
}

impl Review {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Review {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
            style: ReportStyle::default(),
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn style(&self) -> &ReportStyle {
        &self.style
    }
}
