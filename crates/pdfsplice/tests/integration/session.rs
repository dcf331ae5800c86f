//! Integration tests for the session workflow.

use pdfsplice::io::PdfReader;
use pdfsplice::operation::Operation;
use pdfsplice::pages::{SelectionPolicy, SplitPlan};
use pdfsplice::{PdfSpliceError, Session};
use tempfile::TempDir;

use crate::common::{labels, page_labels, write_fixture};

#[tokio::test]
async fn test_session_add_reorder_merge() {
    let temp_dir = TempDir::new().unwrap();
    let paths = vec![
        write_fixture(temp_dir.path(), "a.pdf", 1),
        write_fixture(temp_dir.path(), "b.pdf", 2),
        write_fixture(temp_dir.path(), "c.pdf", 3),
    ];

    let mut session = Session::new();
    session.add_files(PdfReader::new().read_all(&paths).await.unwrap());

    session.move_file(2, 0).unwrap();
    session.remove_file(2).unwrap();

    let names: Vec<&str> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["c.pdf", "a.pdf"]);

    let output = session.process(&Operation::Merge).unwrap();
    assert_eq!(page_labels(&output.artifacts[0].bytes), labels(&[1, 2, 3, 1]));
}

#[tokio::test]
async fn test_session_runs_operations_one_after_another() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(temp_dir.path(), "doc.pdf", 4);

    let mut session = Session::with_policy(SelectionPolicy::Lenient);
    session.add_files([PdfReader::new().read(&path).await.unwrap()]);

    let split = session
        .process(&Operation::Split(SplitPlan::Ranges("1-2, 3-9".to_string())))
        .unwrap();
    assert_eq!(split.artifacts.len(), 1);

    let reordered = session
        .process(&Operation::Reorder {
            order: "4, 3, 2, 1".to_string(),
        })
        .unwrap();
    assert_eq!(page_labels(&reordered.artifacts[0].bytes), labels(&[4, 3, 2, 1]));
}

#[test]
fn test_session_bad_indices() {
    let mut session = Session::new();

    assert!(matches!(
        session.remove_file(0),
        Err(PdfSpliceError::FileIndexOutOfBounds { index: 0, len: 0 })
    ));
    assert!(matches!(
        session.move_file(0, 0),
        Err(PdfSpliceError::FileIndexOutOfBounds { .. })
    ));
}
