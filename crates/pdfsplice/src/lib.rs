//! pdfsplice - Split, merge, reorder and compress PDF documents.
//!
//! This library copies pages between PDF documents. It supports:
//!
//! - Splitting a document by page range expressions (`"1-3, 5-7, 10"`)
//! - Splitting a document into fixed-size chunks
//! - Merging documents in a caller-chosen order
//! - Reordering the pages of a document
//! - Compressing a document at one of three levels
//!
//! All work happens in memory: inputs are byte buffers, outputs are
//! serialized [`io::OutputArtifact`]s, and an operation either produces all
//! of its outputs or fails with a single [`PdfSpliceError`].
//!
//! # Examples
//!
//! ## Running an operation
//!
//! ```no_run
//! use pdfsplice::io::InputFile;
//! use pdfsplice::operation::{Operation, execute};
//! use pdfsplice::pages::{SelectionPolicy, SplitPlan};
//!
//! # fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let files = vec![InputFile::new("report.pdf", bytes)];
//! let split = Operation::Split(SplitPlan::Ranges("1-3, 5-7".to_string()));
//!
//! let output = execute(&split, &files, SelectionPolicy::Strict)?;
//! assert_eq!(output.artifacts[0].name, "split_1.pdf");
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a session
//!
//! ```no_run
//! use pdfsplice::io::PdfReader;
//! use pdfsplice::operation::Operation;
//! use pdfsplice::session::Session;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let files = reader
//!     .read_all(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])
//!     .await?;
//!
//! let mut session = Session::new();
//! session.add_files(files);
//! session.move_file(1, 0)?;
//!
//! let output = session.process(&Operation::Merge)?;
//! println!("{} pages", output.total_pages());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod io;
pub mod operation;
pub mod output;
pub mod pages;
pub mod session;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfSpliceError, Result};
pub use operation::{Operation, OperationOutput};
pub use session::Session;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
