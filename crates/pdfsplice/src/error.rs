//! Error types for pdfsplice.
//!
//! Every fallible operation in the crate returns [`PdfSpliceError`]. An
//! operation fails as a whole: there is no partial success, and the error
//! carries enough context to be shown to a user as a single message.
//!
//! # Error Categories
//!
//! - **Selection Errors**: malformed or out-of-range page range expressions
//! - **Document Errors**: corrupted, encrypted or unreadable PDF data
//! - **Assembly Errors**: empty selections, invalid page indices
//! - **I/O Errors**: missing inputs, output that cannot be written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfsplice operations.
pub type Result<T> = std::result::Result<T, PdfSpliceError>;

/// Main error type for pdfsplice operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfSpliceError {
    /// A page range token is not a number or a `start-end` pair.
    #[error("Malformed page range '{token}': {reason}")]
    MalformedRange {
        /// The offending token, trimmed.
        token: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A page range token references pages the document does not have.
    #[error(
        "Page range '{token}' is out of bounds\n  Document has {total_pages} page(s). \
         Page numbers must be between 1 and {total_pages}"
    )]
    OutOfRange {
        /// The offending token, trimmed.
        token: String,
        /// Page count of the document the token was resolved against.
        total_pages: usize,
    },

    /// A zero-based page index handed to the assembler does not exist.
    #[error("Page index {index} is out of bounds for '{document}' ({total_pages} page(s))")]
    PageIndexOutOfBounds {
        /// Display name of the source document.
        document: String,
        /// The zero-based index that was requested.
        index: usize,
        /// Page count of the source document.
        total_pages: usize,
    },

    /// A selection resolved to zero pages overall.
    #[error("The selection does not contain any pages")]
    EmptySelection,

    /// Source bytes could not be parsed as a PDF document.
    #[error("Failed to load document '{name}'\n  Reason: {reason}")]
    DocumentLoad {
        /// Display name of the source.
        name: String,
        /// Parser message.
        reason: String,
    },

    /// Source document is encrypted.
    #[error(
        "Document '{name}' is encrypted and cannot be processed\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools"
    )]
    EncryptedDocument {
        /// Display name of the source.
        name: String,
    },

    /// No input files were supplied.
    #[error("No input files specified")]
    NoFiles,

    /// The operation needs a different number of input files.
    #[error("{operation} expects {expected} input file(s), got {found}")]
    WrongFileCount {
        /// Operation name.
        operation: &'static str,
        /// Human-readable expectation, e.g. "exactly 1".
        expected: &'static str,
        /// Number of files supplied.
        found: usize,
    },

    /// A file list index is out of bounds.
    #[error("File index {index} is out of bounds (list has {len} file(s))")]
    FileIndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the file list.
        len: usize,
    },

    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Input path is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file cannot be read.
    #[error("Cannot access file: {}\n  Reason: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The PDF structure could not be rebuilt.
    #[error("Page assembly failed: {reason}")]
    AssemblyFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Use --force to overwrite or choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create an output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<lopdf::Error> for PdfSpliceError {
    fn from(err: lopdf::Error) -> Self {
        Self::assembly_failed(err.to_string())
    }
}

impl PdfSpliceError {
    /// Create a MalformedRange error.
    pub fn malformed_range(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error.
    pub fn out_of_range(token: impl Into<String>, total_pages: usize) -> Self {
        Self::OutOfRange {
            token: token.into(),
            total_pages,
        }
    }

    /// Create a DocumentLoad error.
    pub fn document_load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DocumentLoad {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an AssemblyFailed error.
    pub fn assembly_failed(reason: impl Into<String>) -> Self {
        Self::AssemblyFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Check if this error comes from a page range expression.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRange { .. } | Self::OutOfRange { .. } | Self::EmptySelection
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedRange { .. } => 1,
            Self::OutOfRange { .. } => 1,
            Self::EmptySelection => 1,
            Self::NoFiles => 1,
            Self::WrongFileCount { .. } => 1,
            Self::FileIndexOutOfBounds { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::DocumentLoad { .. } => 3,
            Self::EncryptedDocument { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
            Self::PageIndexOutOfBounds { .. } => 6,
            Self::AssemblyFailed { .. } => 6,
            Self::Cancelled => 130, // Standard exit code for SIGINT
        }
    }
}
