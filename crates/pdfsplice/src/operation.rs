//! Operations over a list of input files.
//!
//! [`execute`] is the single entry point: it loads the inputs, dispatches on
//! the [`Operation`] and serializes every output before returning, so the
//! caller gets either all artifacts or an error.

use serde::Serialize;
use std::fmt;

use crate::assemble::{CompressionLevel, CompressionReport, Compressor, DocumentAssembler};
use crate::error::{PdfSpliceError, Result};
use crate::io::{InputFile, OutputArtifact, SourceDocument};
use crate::pages::{SelectionPolicy, SplitPlan};

/// What to do with the input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Concatenate all inputs, in order.
    Merge,
    /// Cut one input into several outputs.
    Split(SplitPlan),
    /// Rewrite one input smaller.
    Compress {
        /// Compression level.
        level: CompressionLevel,
    },
    /// Rearrange the pages of one input.
    Reorder {
        /// Page range expression giving the new page order.
        order: String,
    },
}

impl Operation {
    /// Lowercase operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Split(_) => "split",
            Self::Compress { .. } => "compress",
            Self::Reorder { .. } => "reorder",
        }
    }

    /// Check the number of input files this operation receives.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::NoFiles`] for no files and
    /// [`PdfSpliceError::WrongFileCount`] if a single-file operation gets more.
    pub fn check_file_count(&self, found: usize) -> Result<()> {
        match (self, found) {
            (_, 0) => Err(PdfSpliceError::NoFiles),
            (Self::Merge, _) | (_, 1) => Ok(()),
            _ => Err(PdfSpliceError::WrongFileCount {
                operation: self.name(),
                expected: "exactly 1",
                found,
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an operation produced.
#[derive(Debug, Clone)]
pub struct OperationOutput {
    /// Serialized outputs, in emission order.
    pub artifacts: Vec<OutputArtifact>,

    /// Present for [`Operation::Compress`].
    pub compression: Option<CompressionReport>,
}

impl OperationOutput {
    /// Sum of all artifact sizes.
    pub fn total_size(&self) -> u64 {
        self.artifacts.iter().map(OutputArtifact::size).sum()
    }

    /// Sum of all artifact page counts.
    pub fn total_pages(&self) -> usize {
        self.artifacts.iter().map(|a| a.page_count).sum()
    }
}

/// Run `operation` over `files`.
///
/// Inputs are parsed in order; the first one that fails to load aborts the
/// whole operation.
///
/// # Errors
///
/// Returns file count errors, [`PdfSpliceError::DocumentLoad`] for unreadable
/// input, selection errors and assembly errors. Nothing is returned on failure.
///
/// # Examples
///
/// ```no_run
/// use pdfsplice::io::InputFile;
/// use pdfsplice::operation::{Operation, execute};
/// use pdfsplice::pages::{SelectionPolicy, SplitPlan};
///
/// # fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
/// let files = vec![InputFile::new("book.pdf", bytes)];
/// let split = Operation::Split(SplitPlan::Intervals { pages_per_file: 10 });
///
/// let output = execute(&split, &files, SelectionPolicy::Strict)?;
/// for artifact in &output.artifacts {
///     println!("{} ({} pages)", artifact.name, artifact.page_count);
/// }
/// # Ok(())
/// # }
/// ```
pub fn execute(
    operation: &Operation,
    files: &[InputFile],
    policy: SelectionPolicy,
) -> Result<OperationOutput> {
    operation.check_file_count(files.len())?;

    let sources = files
        .iter()
        .map(InputFile::load)
        .collect::<Result<Vec<SourceDocument>>>()?;

    log::debug!(
        "Running {} over {} file(s) with {} selection",
        operation,
        sources.len(),
        policy
    );

    let assembler = DocumentAssembler::new();

    let output = match operation {
        Operation::Merge => OperationOutput {
            artifacts: vec![assembler.merge(&sources)?.finish()?],
            compression: None,
        },
        Operation::Split(plan) => {
            let source = &sources[0];
            let groups = plan.groups(source.page_count(), policy)?;
            let artifacts = assembler
                .split(source, &groups, plan)?
                .into_iter()
                .map(|output| output.finish())
                .collect::<Result<Vec<_>>>()?;

            OperationOutput {
                artifacts,
                compression: None,
            }
        }
        Operation::Compress { level } => {
            let (artifact, report) = Compressor::new(*level).compress(&sources[0])?;
            OperationOutput {
                artifacts: vec![artifact],
                compression: Some(report),
            }
        }
        Operation::Reorder { order } => OperationOutput {
            artifacts: vec![assembler.reorder(&sources[0], order, policy)?.finish()?],
            compression: None,
        },
    };

    Ok(output)
}

/// Machine-readable summary of a finished operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSummary {
    /// Operation name.
    pub operation: &'static str,

    /// Selection policy in effect.
    pub policy: SelectionPolicy,

    /// Whether the artifacts were written.
    pub dry_run: bool,

    /// One entry per artifact.
    pub artifacts: Vec<ArtifactSummary>,

    /// Present for compress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<CompressionReport>,
}

/// One artifact in an [`OperationSummary`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSummary {
    /// Artifact name.
    pub name: String,

    /// Where it was (or would be) written.
    pub path: String,

    /// Page count.
    pub pages: usize,

    /// Size in bytes.
    pub bytes: u64,
}

impl OperationSummary {
    /// Summarize `output`; `path_of` maps each artifact to its destination.
    pub fn new(
        operation: &Operation,
        policy: SelectionPolicy,
        dry_run: bool,
        output: &OperationOutput,
        path_of: impl Fn(&OutputArtifact) -> String,
    ) -> Self {
        Self {
            operation: operation.name(),
            policy,
            dry_run,
            artifacts: output
                .artifacts
                .iter()
                .map(|artifact| ArtifactSummary {
                    name: artifact.name.clone(),
                    path: path_of(artifact),
                    pages: artifact.page_count,
                    bytes: artifact.size(),
                })
                .collect(),
            compression: output.compression.clone(),
        }
    }
}
