use std::io::Read;
use std::path::Path;

/// The parts of an `.xlsx` archive a report is judged by.
#[derive(Debug)]
pub struct WorkbookParts {
    pub workbook: String,
    pub styles: String,
    pub sheet: String,
}

pub fn read_workbook(path: &Path) -> WorkbookParts {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Failed to open workbook {:?}: {}", path, e));
    let mut archive = zip::ZipArchive::new(file)
        .unwrap_or_else(|e| panic!("Failed to unzip workbook {:?}: {}", path, e));

    let mut read_part = |name: &str| {
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap_or_else(|e| panic!("Missing part {} in {:?}: {}", name, path, e))
            .read_to_string(&mut content)
            .unwrap_or_else(|e| panic!("Failed to read part {}: {}", name, e));
        content
    };

    WorkbookParts {
        workbook: read_part("xl/workbook.xml"),
        styles: read_part("xl/styles.xml"),
        sheet: read_part("xl/worksheets/sheet1.xml"),
    }
}

/// Value of `name` in the first tag of `fragment`, where `fragment` starts
/// right after the element name.
fn attribute<'x>(fragment: &'x str, name: &str) -> Option<&'x str> {
    let tag = &fragment[..fragment.find('>').unwrap_or(fragment.len())];
    let key = format!("{name}=\"");
    let start = tag
        .match_indices(&key)
        .find(|(pos, _)| *pos == 0 || tag[..*pos].ends_with(' '))
        .map(|(pos, _)| pos + key.len())?;
    let end = start + tag[start..].find('"')?;
    Some(&tag[start..end])
}

fn section<'x>(xml: &'x str, element: &str) -> &'x str {
    let start = xml
        .find(&format!("<{element}"))
        .unwrap_or_else(|| panic!("No <{element}> in {xml}"));
    let end = xml
        .find(&format!("</{element}>"))
        .unwrap_or_else(|| panic!("No </{element}> in {xml}"));
    &xml[start..end]
}

impl WorkbookParts {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook
            .split("<sheet ")
            .skip(1)
            .filter_map(|tag| attribute(tag, "name"))
            .collect()
    }

    /// Style index of a cell such as `B3`, `None` when the cell is unstyled
    /// or not written at all.
    pub fn cell_style(&self, cell: &str) -> Option<usize> {
        let start = self.sheet.find(&format!("<c r=\"{cell}\""))?;
        attribute(&self.sheet[start + "<c ".len()..], "s")?
            .parse()
            .ok()
    }

    /// The cell format at `index` together with the fill it points at.
    pub fn cell_format(&self, index: usize) -> (&str, &str) {
        let format = section(&self.styles, "cellXfs")
            .split("<xf ")
            .nth(index + 1)
            .unwrap_or_else(|| panic!("No cell format {index}"));
        let fill_id = attribute(format, "fillId")
            .and_then(|id| id.parse::<usize>().ok())
            .unwrap_or_else(|| panic!("Cell format {index} has no fill id"));
        let fill = section(&self.styles, "fills")
            .split("<fill>")
            .nth(fill_id + 1)
            .unwrap_or_else(|| panic!("No fill {fill_id}"));

        (format, fill)
    }

    /// `(min, max, width)` of every `<col>` element, in sheet order.
    pub fn column_widths(&self) -> Vec<(u16, u16, f64)> {
        self.sheet
            .split("<col ")
            .skip(1)
            .map(|tag| {
                let number = |name: &str| {
                    attribute(tag, name)
                        .and_then(|value| value.parse::<u16>().ok())
                        .unwrap_or_else(|| panic!("Bad {name} in <col {tag}"))
                };
                let width = attribute(tag, "width")
                    .and_then(|value| value.parse::<f64>().ok())
                    .unwrap_or_else(|| panic!("Bad width in <col {tag}"));
                (number("min"), number("max"), width)
            })
            .collect()
    }
}
