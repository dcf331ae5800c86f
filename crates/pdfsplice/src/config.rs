//! Configuration module for pdfsplice.
//!
//! This module holds the validated, normalized configuration that the CLI
//! builds from its arguments. It handles:
//! - Validation of argument combinations
//! - Early syntax checks for page range expressions
//! - Resolution of where each output ends up

use std::path::{Path, PathBuf};

use crate::error::{PdfSpliceError, Result};
use crate::io::OutputArtifact;
use crate::operation::Operation;
use crate::pages::{PageRangeExpression, SelectionPolicy, SplitPlan};

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Where outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// The single output goes to this exact path.
    File(PathBuf),
    /// Every output goes into this directory under its generated name.
    Directory(PathBuf),
}

impl OutputTarget {
    /// The current directory.
    pub fn current_dir() -> Self {
        Self::Directory(PathBuf::from("."))
    }

    /// Destination of `artifact`.
    pub fn path_for(&self, artifact: &OutputArtifact) -> PathBuf {
        match self {
            Self::File(path) => path.clone(),
            Self::Directory(dir) => dir.join(&artifact.name),
        }
    }
}

/// Complete configuration for one pdfsplice invocation.
///
/// This structure contains all settings needed to run an operation,
/// derived and validated from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file paths (in order).
    pub inputs: Vec<PathBuf>,

    /// Where to write the results.
    pub output: OutputTarget,

    /// The operation to run.
    pub operation: Operation,

    /// How unusable page range tokens are treated.
    pub policy: SelectionPolicy,

    /// Dry run mode - run in memory without writing output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Print a JSON summary instead of status lines.
    pub json: bool,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations. Under the
    /// strict policy, page range expressions are parsed here so a typo is
    /// reported before any file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - The operation gets the wrong number of inputs
    /// - Verbose and quiet modes are both enabled
    /// - A page range expression is malformed, or pages per file is zero
    /// - The output file is one of the inputs
    pub fn validate(&self) -> Result<()> {
        self.operation.check_file_count(self.inputs.len())?;

        if self.verbose && self.quiet {
            return Err(PdfSpliceError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        match &self.operation {
            Operation::Split(SplitPlan::Intervals { pages_per_file: 0 }) => {
                return Err(PdfSpliceError::invalid_config(
                    "Pages per file must be at least 1",
                ));
            }
            Operation::Split(SplitPlan::Ranges(expression))
            | Operation::Reorder { order: expression }
                if self.policy == SelectionPolicy::Strict =>
            {
                PageRangeExpression::parse(expression)?;
            }
            _ => {}
        }

        if let OutputTarget::File(output) = &self.output {
            self.check_not_input(output)?;
        }

        Ok(())
    }

    /// Reject `path` if it names one of the inputs.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::InvalidConfig`] if `path` is an input.
    pub fn check_not_input(&self, path: &Path) -> Result<()> {
        let canonical = path.canonicalize().ok();

        for input in &self.inputs {
            let same = input == path
                || (canonical.is_some() && input.canonicalize().ok() == canonical);
            if same {
                return Err(PdfSpliceError::invalid_config(format!(
                    "Output file cannot be the same as an input file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Destination of `artifact`.
    pub fn output_path(&self, artifact: &OutputArtifact) -> PathBuf {
        self.output.path_for(artifact)
    }

    /// Check if output should be displayed.
    ///
    /// Returns false if in quiet mode and not doing a dry run.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
