//! Building output documents.
//!
//! This module contains the page copying core:
//! - [`DocumentAssembler`] for split, merge and reorder
//! - [`Compressor`] for rewriting a whole document smaller
//!
//! Assembled documents are [`OutputDocument`]s; they are serialized into
//! [`OutputArtifact`]s before anything is written.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::assemble::DocumentAssembler;
//! use pdfsplice::io::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let a = reader.load(Path::new("a.pdf")).await?;
//! let b = reader.load(Path::new("b.pdf")).await?;
//!
//! let merged = DocumentAssembler::new().merge(&[a, b])?;
//! let artifact = merged.finish()?;
//! println!("{}: {} pages", artifact.name, artifact.page_count);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod compress;

pub use assembler::{DocumentAssembler, MERGED_NAME, PageSelection};
pub use compress::{CompressionLevel, CompressionReport, Compressor};

use lopdf::Document;

use crate::error::Result;
use crate::io::{OutputArtifact, PdfWriter};

/// A newly assembled document and its suggested file name.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    name: String,
    document: Document,
}

impl OutputDocument {
    /// Pair a document with its file name.
    pub fn new(name: impl Into<String>, document: Document) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }

    /// Suggested file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assembled document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Serialize into an artifact.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfSpliceError::AssemblyFailed`] if serialization fails.
    pub fn finish(mut self) -> Result<OutputArtifact> {
        let page_count = self.page_count();
        let bytes = PdfWriter::to_bytes(&mut self.document)?;

        Ok(OutputArtifact {
            name: self.name,
            page_count,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::SourceDocument;
    use crate::testing::{labels_of, source};

    #[test]
    fn test_finish_round_trips() {
        let output = DocumentAssembler::new()
            .merge(&[source("a.pdf", 2), source("b.pdf", 1)])
            .unwrap();
        let artifact = output.finish().unwrap();

        assert_eq!(artifact.name, MERGED_NAME);
        assert_eq!(artifact.page_count, 3);
        assert_eq!(labels_of(&artifact.bytes), vec!["Page 1", "Page 2", "Page 1"]);
    }

    #[test]
    fn test_split_all_then_merge_is_identity() {
        let original = source("doc.pdf", 6);
        let assembler = DocumentAssembler::new();
        let plan = crate::pages::SplitPlan::Ranges("1-6".to_string());
        let groups = plan
            .groups(6, crate::pages::SelectionPolicy::Strict)
            .unwrap();

        let parts = assembler.split(&original, &groups, &plan).unwrap();
        assert_eq!(parts.len(), 1);

        let part = parts.into_iter().next().unwrap().finish().unwrap();
        let reloaded = SourceDocument::from_bytes(&part.name, &part.bytes).unwrap();
        let merged = assembler.merge(&[reloaded]).unwrap().finish().unwrap();

        assert_eq!(merged.page_count, 6);
        assert_eq!(
            labels_of(&merged.bytes),
            (1..=6).map(|n| format!("Page {n}")).collect::<Vec<_>>()
        );
    }
}
