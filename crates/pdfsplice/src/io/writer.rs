//! Serializing and saving output documents.
//!
//! Outputs are serialized to bytes first and written afterwards, so an
//! operation either produces all of its files or none of them. Each file is
//! written atomically: to a sibling temp file, then renamed into place.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::{OutputArtifact, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example(artifact: OutputArtifact) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.write(&artifact, Path::new("out").join(&artifact.name).as_path()).await?;
//! println!("Wrote {} in {:?}", stats.format_file_size(), stats.write_time);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;

use crate::error::{PdfSpliceError, Result};
use crate::utils::format_file_size;

/// A serialized output document, ready to be handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputArtifact {
    /// Suggested file name.
    pub name: String,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Serialized PDF.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl OutputArtifact {
    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self::with_options(WriteOptions { atomic: false })
    }

    /// Serialize a document to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::AssemblyFailed`] if the document cannot be
    /// serialized.
    pub fn to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfSpliceError::assembly_failed(format!("Failed to serialize PDF: {e}")))?;
        Ok(buffer)
    }

    /// Write an artifact to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or moved into
    /// place. A failed atomic write leaves no file at `path`.
    pub async fn write(&self, artifact: &OutputArtifact, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let write_path = if self.options.atomic {
            temp_path(path)
        } else {
            path.to_path_buf()
        };

        let result = write_bytes(&write_path, &artifact.bytes).await;

        if self.options.atomic {
            if result.is_err() {
                tokio::fs::remove_file(&write_path).await.ok();
            }
            result?;

            tokio::fs::rename(&write_path, path)
                .await
                .map_err(|e| PdfSpliceError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        } else {
            result?;
        }

        let file_size = tokio::fs::metadata(path)
            .await
            .map(|m| m.len())
            .unwrap_or(0);

        log::debug!("Wrote {} ({} bytes)", path.display(), file_size);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    /// Write several artifacts as one unit: either every destination ends up
    /// holding its artifact or none of them is created.
    ///
    /// All artifacts are staged to temp files first and only renamed into
    /// place once every one of them was written. If staging or a rename
    /// fails, the temp files and the destinations already renamed in this
    /// call are removed.
    ///
    /// # Errors
    ///
    /// Returns the first create, write or rename error.
    pub async fn write_all(
        &self,
        outputs: &[(&OutputArtifact, PathBuf)],
    ) -> Result<Vec<WriteStatistics>> {
        let start = Instant::now();
        let mut staged: Vec<PathBuf> = Vec::with_capacity(outputs.len());

        for (artifact, path) in outputs {
            let temp = temp_path(path);
            let result = write_bytes(&temp, &artifact.bytes).await;
            staged.push(temp);

            if let Err(err) = result {
                remove_all(&staged).await;
                return Err(err);
            }
        }

        let mut placed: Vec<&Path> = Vec::with_capacity(outputs.len());
        for ((_, path), temp) in outputs.iter().zip(&staged) {
            if let Err(e) = tokio::fs::rename(temp, path).await {
                log::debug!("Rolling back {} written file(s)", placed.len());
                remove_all(&staged).await;
                remove_all(&placed).await;
                return Err(PdfSpliceError::FailedToWrite {
                    path: path.clone(),
                    source: e,
                });
            }
            placed.push(path);
        }

        let write_time = start.elapsed();
        let stats = outputs
            .iter()
            .map(|(artifact, path)| WriteStatistics {
                write_time,
                file_size: artifact.size(),
                output_path: path.clone(),
            })
            .collect();

        Ok(stats)
    }

    /// Check if a file can be written to the given path.
    ///
    /// Performs pre-flight checks without actually writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory doesn't exist or is read-only.
    pub async fn can_write(&self, path: &Path) -> Result<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        let metadata = tokio::fs::metadata(parent).await.map_err(|_| {
            PdfSpliceError::invalid_config(format!(
                "Output directory does not exist: {}",
                parent.display()
            ))
        })?;

        if !metadata.is_dir() {
            return Err(PdfSpliceError::invalid_config(format!(
                "Output location is not a directory: {}",
                parent.display()
            )));
        }

        if metadata.permissions().readonly() {
            return Err(PdfSpliceError::invalid_config(format!(
                "Output directory is not writable: {}",
                parent.display()
            )));
        }

        Ok(())
    }

    /// Check if output file exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file =
        tokio::fs::File::create(path)
            .await
            .map_err(|e| PdfSpliceError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;

    let to_write_error = |e| PdfSpliceError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    };

    file.write_all(bytes).await.map_err(to_write_error)?;
    file.flush().await.map_err(to_write_error)?;
    file.sync_all().await.map_err(to_write_error)?;

    Ok(())
}

async fn remove_all<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        tokio::fs::remove_file(path).await.ok();
    }
}

/// `out.pdf` -> `out.pdf.tmp`, next to the destination so the rename stays on
/// one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
