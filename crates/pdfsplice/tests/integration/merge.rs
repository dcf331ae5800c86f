//! Integration tests for merging documents.

use pdfsplice::io::{InputFile, PdfReader, load_pdf, save_artifact};
use pdfsplice::operation::{Operation, execute};
use pdfsplice::pages::SelectionPolicy;
use tempfile::TempDir;

use crate::common::{labels, page_labels, pdf_with_pages, write_fixture};

#[tokio::test]
async fn test_merge_three_and_two_pages() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_fixture(temp_dir.path(), "a.pdf", 3);
    let b = write_fixture(temp_dir.path(), "b.pdf", 2);

    let files = PdfReader::new().read_all(&[a, b]).await.unwrap();
    let output = execute(&Operation::Merge, &files, SelectionPolicy::Strict).unwrap();

    let merged_path = temp_dir.path().join("out.pdf");
    save_artifact(&output.artifacts[0], &merged_path).await.unwrap();

    let merged = load_pdf(&merged_path).await.unwrap();
    assert_eq!(merged.page_count(), 5);
    assert_eq!(
        page_labels(&std::fs::read(&merged_path).unwrap()),
        labels(&[1, 2, 3, 1, 2])
    );
}

#[test]
fn test_merge_follows_caller_order() {
    let files = vec![
        InputFile::new("two.pdf", pdf_with_pages(2)),
        InputFile::new("one.pdf", pdf_with_pages(1)),
        InputFile::new("three.pdf", pdf_with_pages(3)),
    ];

    let output = execute(&Operation::Merge, &files, SelectionPolicy::Strict).unwrap();
    assert_eq!(
        page_labels(&output.artifacts[0].bytes),
        labels(&[1, 2, 1, 1, 2, 3])
    );
}

#[test]
fn test_merge_many_files() {
    let files: Vec<InputFile> = (1..=8)
        .map(|n| InputFile::new(format!("{n}.pdf"), pdf_with_pages(n)))
        .collect();

    let output = execute(&Operation::Merge, &files, SelectionPolicy::Strict).unwrap();
    assert_eq!(output.artifacts[0].page_count, (1..=8).sum::<usize>());
}

#[test]
fn test_merge_output_is_loadable_and_flat() {
    let files = vec![
        InputFile::new("a.pdf", pdf_with_pages(2)),
        InputFile::new("b.pdf", pdf_with_pages(2)),
    ];
    let output = execute(&Operation::Merge, &files, SelectionPolicy::Strict).unwrap();

    let doc = lopdf::Document::load_mem(&output.artifacts[0].bytes).unwrap();
    for page_id in doc.get_pages().into_values() {
        let page = doc.get_dictionary(page_id).unwrap();
        assert!(page.has(b"MediaBox"), "inherited MediaBox was not copied");
    }
}
