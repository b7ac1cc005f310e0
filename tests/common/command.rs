use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn review_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn old_source() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");
}"#
    .to_string()
}

#[fixture]
pub fn new_source() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    if let Err(e) = run() {
        eprintln!("error: {}", e);
    }
}"#
    .to_string()
}

#[fixture]
pub fn populated_review_dir(review_dir: TempDir, old_source: String, new_source: String) -> TempDir {
    write_file(FileSpec::new(review_dir.path().join("old.rs"), old_source));
    write_file(FileSpec::new(review_dir.path().join("new.rs"), new_source));

    review_dir
}

pub fn run_delta_review_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("delta-review").expect("Failed to find delta-review binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("DELTA_REVIEW_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
