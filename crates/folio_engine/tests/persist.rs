use std::fs;

use folio_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_page() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let first = writer.write("index.html", "<p>one</p>").unwrap();
    assert_eq!(first.file_name().unwrap(), "index.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "<p>one</p>");

    let second = writer.write("index.html", "<p>two</p>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "<p>two</p>");
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("index.html", "data").is_err());
    assert!(!file_path.with_file_name("index.html").exists());
}

#[test]
fn read_optional_distinguishes_missing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    assert_eq!(writer.read_optional(".folio_state.ron").unwrap(), None);
    writer.write(".folio_state.ron", "()").unwrap();
    assert_eq!(
        writer.read_optional(".folio_state.ron").unwrap().as_deref(),
        Some("()")
    );
}
