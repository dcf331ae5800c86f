//! CLI argument parsing for pdfsplice.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, conversion into a [`Config`] and help text
//! generation.
//!
//! # Examples
//!
//! ```text
//! pdfsplice merge intro.pdf chapters/*.pdf -o book.pdf
//! pdfsplice split book.pdf --ranges "1-3, 5-7, 10" -d parts/
//! pdfsplice split book.pdf --every 10 -d parts/
//! pdfsplice compress scan.pdf --level smallest
//! pdfsplice reorder slides.pdf --order "3, 1-2"
//! ```

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use pdfsplice::assemble::CompressionLevel;
use pdfsplice::config::{Config, OutputTarget, OverwriteMode};
use pdfsplice::error::Result;
use pdfsplice::operation::Operation;
use pdfsplice::pages::{SelectionPolicy, SplitPlan};
use pdfsplice::utils::collect_paths_for_patterns;

/// Split, merge, reorder and compress PDF documents.
///
/// pdfsplice copies pages between PDF files: cut one document into several
/// by page ranges or fixed-size chunks, concatenate several into one,
/// rearrange pages, or rewrite a document smaller.
#[derive(Parser, Debug)]
#[command(name = "pdfsplice")]
#[command(version)]
#[command(about = "Split, merge, reorder and compress PDF documents", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Dry run - run the operation in memory and list what would be written
    ///
    /// Every input is read and processed, so errors are reported exactly as
    /// in a real run, but no file is created or overwritten.
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Verbose output - list inputs and per-step details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force overwrite of existing output files without confirmation
    ///
    /// By default, pdfsplice will prompt before overwriting an existing file.
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Never overwrite existing output files
    ///
    /// If an output file already exists, exit with an error
    /// instead of prompting or overwriting.
    #[arg(long, global = true, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Skip page range tokens that are malformed or out of range
    ///
    /// By default such a token is an error. With this flag it is skipped
    /// (and logged as a warning); the run still fails if nothing is left.
    #[arg(long, global = true, env = "PDFSPLICE_LENIENT")]
    #[arg(action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub lenient: bool,

    /// Print a JSON summary of the outputs instead of status lines
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Concatenate PDF files into one document, in the order given
    ///
    /// Examples:
    ///   pdfsplice merge a.pdf b.pdf -o combined.pdf
    ///   pdfsplice merge "chapter*.pdf" -o book.pdf
    Merge {
        /// Input PDF files or glob patterns (in order)
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<String>,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Split one PDF into several
    ///
    /// With --ranges, every comma-separated token becomes one output file
    /// (split_1.pdf, split_2.pdf, ...). With --every, the document is cut
    /// into chunks of N pages (split_part_1.pdf, ...).
    Split {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page ranges, one output per token (e.g. "1-3, 5-7, 10")
        #[arg(long, value_name = "EXPR", conflicts_with = "every")]
        #[arg(required_unless_present = "every")]
        ranges: Option<String>,

        /// Pages per output file
        #[arg(long, value_name = "N")]
        every: Option<usize>,

        /// Directory to write the parts into
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// Rewrite a PDF to make it smaller
    ///
    /// - high: renumber objects, leave stream data as it is
    /// - balanced: compress uncompressed streams (default)
    /// - smallest: also drop empty streams and unreferenced objects
    Compress {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Compression level
        #[arg(short, long, value_name = "LEVEL", default_value = "balanced")]
        #[arg(value_parser = ["high", "balanced", "smallest"])]
        level: String,

        /// Output PDF file path [default: <name>_compressed.pdf]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Rearrange the pages of a PDF
    ///
    /// Pages appear in the order the expression lists them; a page may be
    /// listed more than once.
    Reorder {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// New page order (e.g. "3, 1-2")
        #[arg(long, value_name = "EXPR")]
        order: String,

        /// Output PDF file path [default: <name>_reordered.pdf]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// This method performs the following:
    /// - Expands glob patterns of merge inputs
    /// - Resolves overwrite mode and selection policy
    /// - Builds the operation and output target
    /// - Validates the resulting configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input pattern is invalid
    /// - The compression level is unknown
    /// - A page range expression is malformed (strict mode)
    /// - Configuration validation fails
    pub fn to_config(&self) -> Result<Config> {
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let policy = if self.lenient {
            SelectionPolicy::Lenient
        } else {
            SelectionPolicy::Strict
        };

        let (inputs, output, operation) = match &self.command {
            Command::Merge { inputs, output } => (
                collect_paths_for_patterns(inputs)?,
                OutputTarget::File(output.clone()),
                Operation::Merge,
            ),
            Command::Split {
                input,
                ranges,
                every,
                output_dir,
            } => {
                let plan = match (ranges, every) {
                    (Some(expression), _) => SplitPlan::Ranges(expression.clone()),
                    (None, Some(pages_per_file)) => SplitPlan::Intervals {
                        pages_per_file: *pages_per_file,
                    },
                    (None, None) => {
                        return Err(pdfsplice::PdfSpliceError::invalid_config(
                            "Split needs --ranges or --every",
                        ));
                    }
                };

                (
                    vec![input.clone()],
                    OutputTarget::Directory(output_dir.clone()),
                    Operation::Split(plan),
                )
            }
            Command::Compress {
                input,
                level,
                output,
            } => (
                vec![input.clone()],
                file_or_current_dir(output.as_ref()),
                Operation::Compress {
                    level: level.parse::<CompressionLevel>()?,
                },
            ),
            Command::Reorder {
                input,
                order,
                output,
            } => (
                vec![input.clone()],
                file_or_current_dir(output.as_ref()),
                Operation::Reorder {
                    order: order.clone(),
                },
            ),
        };

        let config = Config {
            inputs,
            output,
            operation,
            policy,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            overwrite_mode,
            json: self.json,
        };

        config.validate()?;

        Ok(config)
    }
}

fn file_or_current_dir(output: Option<&PathBuf>) -> OutputTarget {
    output
        .cloned()
        .map_or_else(OutputTarget::current_dir, OutputTarget::File)
}
