use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn generated_lines(lines_count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    (0..lines_count)
        .map(|_| Words(1..6).fake::<Vec<String>>().join(" "))
        .collect()
}

pub fn write_lines(dir: &Path, file_name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    write_file(FileSpec::new(path.clone(), lines.join("\n")));
    path
}

pub fn read_bytes(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}
