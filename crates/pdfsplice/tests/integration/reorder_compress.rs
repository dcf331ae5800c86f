//! Integration tests for reordering and compressing documents.

use pdfsplice::assemble::CompressionLevel;
use pdfsplice::io::InputFile;
use pdfsplice::operation::{Operation, execute};
use pdfsplice::pages::SelectionPolicy;
use rstest::rstest;

use crate::common::{labels, page_labels, pdf_with_pages};

#[rstest]
#[case("3, 1-2", &[3, 1, 2])]
#[case("5-1", &[])]
#[case("2-4, 1, 5", &[2, 3, 4, 1, 5])]
fn test_reorder(#[case] order: &str, #[case] expected: &[usize]) {
    let files = vec![InputFile::new("slides.pdf", pdf_with_pages(5))];
    let op = Operation::Reorder {
        order: order.to_string(),
    };

    let result = execute(&op, &files, SelectionPolicy::Strict);

    if expected.is_empty() {
        assert!(result.is_err());
    } else {
        let output = result.unwrap();
        assert_eq!(output.artifacts[0].name, "slides_reordered.pdf");
        assert_eq!(page_labels(&output.artifacts[0].bytes), labels(expected));
    }
}

#[rstest]
#[case(CompressionLevel::High)]
#[case(CompressionLevel::Balanced)]
#[case(CompressionLevel::Smallest)]
fn test_compress_each_level(#[case] level: CompressionLevel) {
    let files = vec![InputFile::new("scan.PDF", pdf_with_pages(6))];
    let output = execute(&Operation::Compress { level }, &files, SelectionPolicy::Strict).unwrap();

    let artifact = &output.artifacts[0];
    let report = output.compression.as_ref().unwrap();

    assert_eq!(artifact.name, "scan_compressed.pdf");
    assert_eq!(page_labels(&artifact.bytes), labels(&[1, 2, 3, 4, 5, 6]));
    assert_eq!(report.original_size, files[0].size());
    assert_eq!(report.compressed_size, artifact.size());

    let expected = (report.original_size as f64 - report.compressed_size as f64)
        / report.original_size as f64
        * 100.0;
    assert!((report.reduction_percent - expected).abs() < 1e-9);
}
