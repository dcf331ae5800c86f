//! Integration tests for error handling and edge cases.

use pdfsplice::io::{InputFile, PdfReader};
use pdfsplice::operation::{Operation, execute};
use pdfsplice::pages::{SelectionPolicy, SplitPlan};
use pdfsplice::PdfSpliceError;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::pdf_with_pages;

#[tokio::test]
async fn test_error_nonexistent_input() {
    let result = PdfReader::new()
        .read_all(&[PathBuf::from("/nonexistent/file.pdf")])
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, PdfSpliceError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_error_corrupt_file_produces_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("corrupt.pdf");
    std::fs::write(&path, b"This is not a valid PDF file").unwrap();

    let files = PdfReader::new().read_all(&[path]).await.unwrap();
    let result = execute(
        &Operation::Split(SplitPlan::Intervals { pages_per_file: 1 }),
        &files,
        SelectionPolicy::Strict,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, PdfSpliceError::DocumentLoad { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_error_out_of_range_strict() {
    let files = vec![InputFile::new("a.pdf", pdf_with_pages(4))];
    let op = Operation::Split(SplitPlan::Ranges("1-3, 5-7".to_string()));

    let err = execute(&op, &files, SelectionPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        PdfSpliceError::OutOfRange { ref token, total_pages: 4 } if token == "5-7"
    ));
    assert!(err.is_selection_error());
}

#[test]
fn test_error_malformed_strict() {
    let files = vec![InputFile::new("a.pdf", pdf_with_pages(4))];

    for expression in ["", "abc", "1-2-3", "-1", "3-1", "1,,2"] {
        let op = Operation::Split(SplitPlan::Ranges(expression.to_string()));
        let err = execute(&op, &files, SelectionPolicy::Strict).unwrap_err();
        assert!(
            matches!(err, PdfSpliceError::MalformedRange { .. }),
            "'{expression}' gave {err:?}"
        );
    }
}

#[test]
fn test_error_empty_selection_lenient() {
    let files = vec![InputFile::new("a.pdf", pdf_with_pages(2))];
    let op = Operation::Split(SplitPlan::Ranges("7-9, zero".to_string()));

    let err = execute(&op, &files, SelectionPolicy::Lenient).unwrap_err();
    assert!(matches!(err, PdfSpliceError::EmptySelection));
}

#[test]
fn test_error_wrong_file_count() {
    let files = vec![
        InputFile::new("a.pdf", pdf_with_pages(1)),
        InputFile::new("b.pdf", pdf_with_pages(1)),
    ];
    let op = Operation::Split(SplitPlan::Intervals { pages_per_file: 1 });

    let err = execute(&op, &files, SelectionPolicy::Strict).unwrap_err();
    assert!(matches!(err, PdfSpliceError::WrongFileCount { found: 2, .. }));
}

#[test]
fn test_error_no_files() {
    let err = execute(&Operation::Merge, &[], SelectionPolicy::Strict).unwrap_err();
    assert!(matches!(err, PdfSpliceError::NoFiles));
}
