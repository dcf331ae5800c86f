//! I/O operations for pdfsplice.
//!
//! This module handles everything that touches bytes or the filesystem:
//! - Reading input files into memory
//! - Parsing them into [`SourceDocument`]s
//! - Serializing output documents into [`OutputArtifact`]s
//! - Writing artifacts to disk atomically
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::{load_pdf, save_artifact};
//! use std::path::Path;
//!
//! # async fn example(artifact: pdfsplice::io::OutputArtifact) -> Result<(), Box<dyn std::error::Error>> {
//! let source = load_pdf(Path::new("input.pdf")).await?;
//! println!("{} pages", source.page_count());
//!
//! save_artifact(&artifact, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{InputFile, PdfReader, SourceDocument, display_name};
pub use writer::{OutputArtifact, PdfWriter, WriteOptions, WriteStatistics};

use crate::error::Result;
use std::path::Path;

/// Load a PDF document from a file.
///
/// Convenience function for loading a single PDF.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid PDF.
pub async fn load_pdf(path: &Path) -> Result<SourceDocument> {
    PdfReader::new().load(path).await
}

/// Write an artifact to a file using the default (atomic) writer.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn save_artifact(artifact: &OutputArtifact, path: &Path) -> Result<WriteStatistics> {
    PdfWriter::new().write(artifact, path).await
}
