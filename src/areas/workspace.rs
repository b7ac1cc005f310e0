use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory that relative input and output paths are resolved against.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolves a user-typed input path, dropping surrounding double quotes
    /// left over from copy-pasting a path out of a file manager.
    pub fn resolve_input(&self, raw: &str) -> anyhow::Result<PathBuf> {
        let unquoted = raw.trim_matches('"');
        if unquoted.is_empty() {
            anyhow::bail!("No input file path given");
        }

        Ok(self.path.join(unquoted))
    }

    pub fn resolve_output(&self, raw: &str) -> anyhow::Result<PathBuf> {
        if raw.is_empty() {
            anyhow::bail!("No output file name given");
        }

        Ok(self.path.join(raw))
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        Ok(content)
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let lines = split_lines(&self.read_file(file_path)?);
        tracing::debug!(lines = lines.len(), "read {}", file_path.display());

        Ok(lines)
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line boundary: `\n`, `\r\n`, bare `\r`, vertical tab,
/// form feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. A final terminator does not start another line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.char_indices().find(|(_, c)| is_line_boundary(*c)) {
            Some((pos, boundary)) => {
                lines.push(rest[..pos].to_string());
                let terminator_len = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    boundary.len_utf8()
                };
                rest = &rest[pos + terminator_len..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
