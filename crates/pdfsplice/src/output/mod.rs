//! Output formatting and display for pdfsplice.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Input listings in verbose mode
//! - Summaries of written (or would-be written) files
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::output::OutputFormatter;
//! use pdfsplice::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Splitting report.pdf");
//! formatter.success("Wrote 3 file(s)");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::assemble::CompressionReport;
use crate::config::Config;
use crate::io::{InputFile, OutputArtifact};
use crate::operation::OperationOutput;
use crate::utils::format_file_size;

/// Create an output formatter from configuration.
pub fn create_formatter(config: &Config) -> OutputFormatter {
    OutputFormatter::from_config(config)
}

/// Show the inputs that were read, in verbose mode.
pub fn display_inputs(formatter: &OutputFormatter, inputs: &[InputFile]) {
    if !formatter.is_verbose() {
        return;
    }

    formatter.section("Inputs:");
    for (index, input) in inputs.iter().enumerate() {
        formatter.list_item(
            index + 1,
            &format!("{} ({})", input.name, format_file_size(input.size())),
        );
    }
}

/// One-line description of an artifact and its destination.
pub fn describe_artifact(config: &Config, artifact: &OutputArtifact) -> String {
    format!(
        "{} ({} page(s), {})",
        config.output_path(artifact).display(),
        artifact.page_count,
        format_file_size(artifact.size())
    )
}

/// Show what an operation produced.
///
/// In dry-run mode the artifacts are listed as files that would be written.
pub fn display_output(formatter: &OutputFormatter, config: &Config, output: &OperationOutput) {
    let heading = if config.dry_run {
        "Would write:"
    } else {
        "Wrote:"
    };

    formatter.section(heading);
    for (index, artifact) in output.artifacts.iter().enumerate() {
        formatter.list_item(index + 1, &describe_artifact(config, artifact));
    }

    if let Some(report) = &output.compression {
        display_compression(formatter, report);
    }

    formatter.blank_line();
    formatter.success(&format!(
        "{} {} file(s), {} page(s), {}",
        if config.dry_run { "Planned" } else { "Created" },
        output.artifacts.len(),
        output.total_pages(),
        format_file_size(output.total_size())
    ));
}

/// Show a compression report.
pub fn display_compression(formatter: &OutputFormatter, report: &CompressionReport) {
    formatter.info(&format!("Compression ({}): {}", report.level, report.describe()));

    if report.reduction_percent < 0.0 {
        formatter.warning("Compressed file is larger than the original");
    }
}
