//! Integration tests for splitting documents.

use pdfsplice::io::{PdfReader, PdfWriter};
use pdfsplice::operation::{Operation, execute};
use pdfsplice::pages::{SelectionPolicy, SplitPlan};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{labels, page_labels, write_fixture};

#[tokio::test]
async fn test_split_by_ranges_writes_each_part() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "report.pdf", 10);
    let out_dir = temp_dir.path().join("parts");
    std::fs::create_dir(&out_dir).unwrap();

    let files = PdfReader::new().read_all(&[input]).await.unwrap();
    let op = Operation::Split(SplitPlan::Ranges("1-3, 5-7, 10".to_string()));
    let output = execute(&op, &files, SelectionPolicy::Strict).unwrap();

    let writer = PdfWriter::new();
    for artifact in &output.artifacts {
        writer.write(artifact, &out_dir.join(&artifact.name)).await.unwrap();
    }

    let part = |name: &str| std::fs::read(out_dir.join(name)).unwrap();
    assert_eq!(page_labels(&part("split_1.pdf")), labels(&[1, 2, 3]));
    assert_eq!(page_labels(&part("split_2.pdf")), labels(&[5, 6, 7]));
    assert_eq!(page_labels(&part("split_3.pdf")), labels(&[10]));
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 3);
}

#[rstest]
#[case(10, 3, vec![3, 3, 3, 1])]
#[case(6, 2, vec![2, 2, 2])]
#[case(4, 10, vec![4])]
#[case(1, 1, vec![1])]
#[tokio::test]
async fn test_split_every_n_pages(
    #[case] total: usize,
    #[case] per_file: usize,
    #[case] expected: Vec<usize>,
) {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "book.pdf", total);

    let files = PdfReader::new().read_all(&[input]).await.unwrap();
    let op = Operation::Split(SplitPlan::Intervals {
        pages_per_file: per_file,
    });
    let output = execute(&op, &files, SelectionPolicy::Strict).unwrap();

    let counts: Vec<usize> = output.artifacts.iter().map(|a| a.page_count).collect();
    assert_eq!(counts, expected);

    let all_labels: Vec<String> = output
        .artifacts
        .iter()
        .flat_map(|a| page_labels(&a.bytes))
        .collect();
    assert_eq!(all_labels, labels(&(1..=total).collect::<Vec<_>>()));

    for (n, artifact) in output.artifacts.iter().enumerate() {
        assert_eq!(artifact.name, format!("split_part_{}.pdf", n + 1));
    }
}

#[test]
fn test_split_preserves_duplicates_and_order() {
    let files = vec![pdfsplice::io::InputFile::new(
        "a.pdf",
        crate::common::pdf_with_pages(5),
    )];
    let op = Operation::Split(SplitPlan::Ranges("4, 2, 4".to_string()));
    let output = execute(&op, &files, SelectionPolicy::Strict).unwrap();

    let per_part: Vec<Vec<String>> = output.artifacts.iter().map(|a| page_labels(&a.bytes)).collect();
    assert_eq!(per_part, vec![labels(&[4]), labels(&[2]), labels(&[4])]);
}

#[test]
fn test_split_whole_document_then_merge() {
    let files = vec![pdfsplice::io::InputFile::new(
        "a.pdf",
        crate::common::pdf_with_pages(7),
    )];
    let split = Operation::Split(SplitPlan::Ranges("1-7".to_string()));
    let parts = execute(&split, &files, SelectionPolicy::Strict).unwrap();
    assert_eq!(parts.artifacts.len(), 1);

    let part = &parts.artifacts[0];
    let merged = execute(
        &Operation::Merge,
        &[pdfsplice::io::InputFile::new(part.name.clone(), part.bytes.clone())],
        SelectionPolicy::Strict,
    )
    .unwrap();

    assert_eq!(
        page_labels(&merged.artifacts[0].bytes),
        labels(&[1, 2, 3, 4, 5, 6, 7])
    );
}

#[test]
fn test_split_lenient_skips_out_of_range() {
    let files = vec![pdfsplice::io::InputFile::new(
        "a.pdf",
        crate::common::pdf_with_pages(4),
    )];
    let op = Operation::Split(SplitPlan::Ranges("1-3, 5-7".to_string()));

    let output = execute(&op, &files, SelectionPolicy::Lenient).unwrap();
    assert_eq!(output.artifacts.len(), 1);
    assert_eq!(output.artifacts[0].name, "split_1.pdf");
    assert_eq!(page_labels(&output.artifacts[0].bytes), labels(&[1, 2, 3]));
}
