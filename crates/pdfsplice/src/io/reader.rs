//! Reading inputs and loading documents.
//!
//! Inputs are always held fully in memory: a file is read into an
//! [`InputFile`], and an `InputFile` is parsed into a [`SourceDocument`]
//! for the duration of one operation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let source = reader.load(Path::new("document.pdf")).await?;
//! println!("{} has {} pages", source.name(), source.page_count());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{PdfSpliceError, Result};

/// A named document held in memory, before it is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Display name, usually the file name.
    pub name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Create an input from a name and its bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Parse the bytes into a [`SourceDocument`].
    pub fn load(&self) -> Result<SourceDocument> {
        SourceDocument::from_bytes(&self.name, &self.bytes)
    }
}

/// A parsed PDF with a fixed page count.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    size: u64,
    page_count: usize,
    document: Document,
}

impl SourceDocument {
    /// Parse PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::EncryptedDocument`] for encrypted input and
    /// [`PdfSpliceError::DocumentLoad`] for anything that is not a readable PDF.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();

        let document = Document::load_mem(bytes).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfSpliceError::EncryptedDocument { name: name.clone() }
            } else {
                PdfSpliceError::document_load(name.clone(), err_msg)
            }
        })?;

        if document.is_encrypted() {
            return Err(PdfSpliceError::EncryptedDocument { name });
        }

        let source = Self::from_document(name, document).with_size(bytes.len() as u64);
        log::debug!(
            "Loaded '{}': {} page(s), {} byte(s), PDF {}",
            source.name,
            source.page_count,
            source.size,
            source.document.version
        );

        Ok(source)
    }

    /// Wrap an already parsed document.
    pub fn from_document(name: impl Into<String>, document: Document) -> Self {
        let page_count = document.get_pages().len();
        Self {
            name: name.into(),
            size: 0,
            page_count,
            document,
        }
    }

    fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the bytes the document was loaded from (0 if it was not).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Reads input files from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a file into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist, is not a regular file,
    /// or cannot be read.
    pub async fn read(&self, path: &Path) -> Result<InputFile> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PdfSpliceError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PdfSpliceError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(PdfSpliceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes =
            tokio::fs::read(path)
                .await
                .map_err(|e| PdfSpliceError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                })?;

        Ok(InputFile::new(display_name(path), bytes))
    }

    /// Read several files, in order, stopping at the first failure.
    pub async fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<InputFile>> {
        let mut inputs = Vec::with_capacity(paths.len());

        for path in paths {
            inputs.push(self.read(path).await?);
        }

        Ok(inputs)
    }

    /// Read and parse a single document.
    ///
    /// Parsing runs on a blocking thread so the async runtime is not stalled.
    pub async fn load(&self, path: &Path) -> Result<SourceDocument> {
        let input = self.read(path).await?;

        tokio::task::spawn_blocking(move || input.load())
            .await
            .map_err(|e| PdfSpliceError::assembly_failed(format!("Load task failed: {e}")))?
    }
}

/// File name of `path`, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
