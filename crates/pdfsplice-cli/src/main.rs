//! pdfsplice - Split, merge, reorder and compress PDF documents.
//!
//! Reads every input into memory, runs one operation over them and writes
//! the resulting files. Nothing is written unless the whole operation
//! succeeds.

mod cli;

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use crate::cli::Cli;
use pdfsplice::config::{Config, OutputTarget, OverwriteMode};
use pdfsplice::error::PdfSpliceError;
use pdfsplice::io::{PdfReader, PdfWriter};
use pdfsplice::operation::{OperationOutput, OperationSummary};
use pdfsplice::output::{OutputFormatter, display_inputs, display_output};
use pdfsplice::session::Session;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfSpliceError> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::from_config(&config);

    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfsplice::NAME, pdfsplice::VERSION));
        formatter.blank_line();
    }

    formatter.info(&format!("Reading {} file(s)...", config.inputs().len()));
    let reader = PdfReader::new();
    let files = reader.read_all(config.inputs()).await?;
    display_inputs(&formatter, &files);

    formatter.info(&format!("Running {}...", config.operation));
    let output = process_files(&config, files).await?;

    let paths: Vec<PathBuf> = output
        .artifacts
        .iter()
        .map(|artifact| config.output_path(artifact))
        .collect();

    for path in &paths {
        config.check_not_input(path)?;
    }

    if !config.dry_run {
        prepare_output(&config, &paths, &formatter).await?;

        let outputs: Vec<_> = output.artifacts.iter().zip(paths.iter().cloned()).collect();
        let stats = PdfWriter::new().write_all(&outputs).await?;
        for stat in &stats {
            formatter.debug(&format!(
                "{} ({})",
                stat.output_path.display(),
                stat.format_file_size()
            ));
        }
    }

    if config.json {
        let summary = OperationSummary::new(
            &config.operation,
            config.policy,
            config.dry_run,
            &output,
            |artifact| config.output_path(artifact).display().to_string(),
        );
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| PdfSpliceError::Io(e.into()))?;
        println!("{json}");
    } else if formatter.should_print() {
        formatter.blank_line();
        display_output(&formatter, &config, &output);

        if config.dry_run {
            formatter.info("Run without --dry-run to write the files");
        }
    }

    Ok(())
}

/// Run the operation through a session on a blocking thread.
async fn process_files(
    config: &Config,
    files: Vec<pdfsplice::io::InputFile>,
) -> Result<OperationOutput, PdfSpliceError> {
    let operation = config.operation.clone();
    let mut session = Session::with_policy(config.policy);
    session.add_files(files);

    tokio::task::spawn_blocking(move || session.process(&operation))
        .await
        .map_err(|e| PdfSpliceError::assembly_failed(format!("Processing task failed: {e}")))?
}

/// Check every destination before the first file is written.
async fn prepare_output(
    config: &Config,
    paths: &[PathBuf],
    formatter: &OutputFormatter,
) -> Result<(), PdfSpliceError> {
    if let OutputTarget::Directory(dir) = &config.output {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| PdfSpliceError::FailedToCreateOutput {
                path: dir.clone(),
                source: e,
            })?;
    }

    let writer = PdfWriter::new();
    let interactive = io::stdin().is_terminal();
    for path in paths {
        writer.can_write(path).await?;
        handle_output_overwrite(path, config.overwrite_mode, formatter, interactive).await?;
    }

    Ok(())
}

/// Handle output file overwrite scenarios.
///
/// `Prompt` only asks when `interactive` is set (stdin is a terminal);
/// otherwise it behaves like `NoClobber`.
async fn handle_output_overwrite(
    path: &Path,
    mode: OverwriteMode,
    formatter: &OutputFormatter,
    interactive: bool,
) -> Result<(), PdfSpliceError> {
    if !PdfWriter::new().exists(path).await {
        return Ok(());
    }

    match mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PdfSpliceError::output_exists(path.to_path_buf())),
        OverwriteMode::Prompt => {
            // Nobody to ask
            if formatter.is_quiet() || !interactive {
                return Err(PdfSpliceError::output_exists(path.to_path_buf()));
            }

            formatter.warning(&format!("Output file already exists: {}", path.display()));

            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin().read_line(&mut response)?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PdfSpliceError::Cancelled)
            }
        }
    }
}
