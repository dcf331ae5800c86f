//! Document compression.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{PdfSpliceError, Result};
use crate::io::{OutputArtifact, PdfWriter, SourceDocument};
use crate::utils::{compressed_name, format_file_size};

/// How hard to try to shrink a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    /// Rewrite with renumbered objects; stream data is left as it is.
    High,
    /// Flate-compress every uncompressed stream.
    #[default]
    Balanced,
    /// Drop empty streams and unreferenced objects, then compress.
    Smallest,
}

impl CompressionLevel {
    /// All levels, from least to most aggressive.
    pub const ALL: [CompressionLevel; 3] = [Self::High, Self::Balanced, Self::Smallest];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Balanced => "balanced",
            Self::Smallest => "smallest",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionLevel {
    type Err = PdfSpliceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PdfSpliceError::invalid_config(format!(
                    "Unknown compression level '{s}' (expected high, balanced or smallest)"
                ))
            })
    }
}

/// Sizes before and after compression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionReport {
    /// Level that was applied.
    pub level: CompressionLevel,

    /// Size of the source in bytes.
    pub original_size: u64,

    /// Size of the compressed output in bytes.
    pub compressed_size: u64,

    /// Percentage saved; negative if the output grew.
    pub reduction_percent: f64,
}

impl CompressionReport {
    /// Build a report and compute the reduction.
    pub fn new(level: CompressionLevel, original_size: u64, compressed_size: u64) -> Self {
        let reduction_percent = if original_size == 0 {
            0.0
        } else {
            (original_size as f64 - compressed_size as f64) / original_size as f64 * 100.0
        };

        Self {
            level,
            original_size,
            compressed_size,
            reduction_percent,
        }
    }

    /// Bytes saved; negative if the output grew.
    pub fn saved_bytes(&self) -> i64 {
        self.original_size as i64 - self.compressed_size as i64
    }

    /// One-line human-readable summary.
    pub fn describe(&self) -> String {
        format!(
            "{} -> {} ({:.1}% smaller)",
            format_file_size(self.original_size),
            format_file_size(self.compressed_size),
            self.reduction_percent
        )
    }
}

/// Rewrites a document at a given [`CompressionLevel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compressor {
    level: CompressionLevel,
}

impl Compressor {
    /// Create a compressor for `level`.
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    /// The level in effect.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Compress `source` into a new artifact named `<stem>_compressed.pdf`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::AssemblyFailed`] if the result cannot be
    /// serialized.
    pub fn compress(&self, source: &SourceDocument) -> Result<(OutputArtifact, CompressionReport)> {
        let mut doc = source.document().clone();

        match self.level {
            CompressionLevel::High => {
                doc.renumber_objects();
            }
            CompressionLevel::Balanced => {
                doc.compress();
            }
            CompressionLevel::Smallest => {
                doc.delete_zero_length_streams();
                doc.prune_objects();
                doc.renumber_objects();
                doc.compress();
            }
        }

        let artifact = OutputArtifact {
            name: compressed_name(source.name()),
            page_count: doc.get_pages().len(),
            bytes: PdfWriter::to_bytes(&mut doc)?,
        };
        let report = CompressionReport::new(self.level, source.size(), artifact.size());

        log::debug!(
            "Compressed '{}' at level {}: {}",
            source.name(),
            self.level,
            report.describe()
        );

        Ok((artifact, report))
    }
}
