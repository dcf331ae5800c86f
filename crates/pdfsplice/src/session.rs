//! A caller-owned working set of input files.
//!
//! A [`Session`] holds an ordered list of [`InputFile`]s and runs operations
//! over it. `process` borrows the session mutably, so a session never runs two
//! operations at once.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::InputFile;
//! use pdfsplice::operation::Operation;
//! use pdfsplice::session::Session;
//!
//! # fn example(a: Vec<u8>, b: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new();
//! session.add_files([InputFile::new("a.pdf", a), InputFile::new("b.pdf", b)]);
//! session.move_file(1, 0)?;
//!
//! let output = session.process(&Operation::Merge)?;
//! assert_eq!(output.artifacts[0].name, "merged.pdf");
//! # Ok(())
//! # }
//! ```

use crate::error::{PdfSpliceError, Result};
use crate::io::InputFile;
use crate::operation::{self, Operation, OperationOutput};
use crate::pages::SelectionPolicy;

/// Ordered input files plus the selection policy to run operations with.
#[derive(Debug, Clone, Default)]
pub struct Session {
    files: Vec<InputFile>,
    policy: SelectionPolicy,
}

impl Session {
    /// Empty session with the strict selection policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session with the given selection policy.
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            files: Vec::new(),
            policy,
        }
    }

    /// Selection policy used by [`Session::process`].
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Change the selection policy.
    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// Append files to the end of the list.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = InputFile>) {
        self.files.extend(files);
    }

    /// Remove and return the file at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::FileIndexOutOfBounds`] if there is no such file.
    pub fn remove_file(&mut self, index: usize) -> Result<InputFile> {
        self.check_index(index)?;
        Ok(self.files.remove(index))
    }

    /// Move the file at `from` so that it ends up at position `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::FileIndexOutOfBounds`] if either index is out
    /// of bounds.
    pub fn move_file(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let file = self.files.remove(from);
        self.files.insert(to, file);
        Ok(())
    }

    /// Remove every file.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// The files, in order.
    pub fn files(&self) -> &[InputFile] {
        &self.files
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if there are no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Run `operation` over the current files.
    ///
    /// The file list is left unchanged whether or not the operation succeeds.
    ///
    /// # Errors
    ///
    /// See [`operation::execute`].
    pub fn process(&mut self, operation: &Operation) -> Result<OperationOutput> {
        operation::execute(operation, &self.files, self.policy)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.files.len() {
            Ok(())
        } else {
            Err(PdfSpliceError::FileIndexOutOfBounds {
                index,
                len: self.files.len(),
            })
        }
    }
}
