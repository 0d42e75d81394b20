//! Command-line front end for the reporting core.
//!
//! Wires file inputs into the pipeline: a directory of per-run metric
//! documents, an optional identifier document, an optional gzip TSV
//! provenance report, and an optional dependency configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gantry_core::config::ReportConfig;
use gantry_core::export::{append_metrics_csv, append_run_ids};
use gantry_core::extraction::extract_run_ids;
use gantry_core::models::{DependencySpec, StepRecord};
use gantry_core::pipeline::{run_report, PipelineOutcome, ReportInputs};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Workflow run-time aggregation and dependency-ordered reporting",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract run identifiers from a nested JSON document
    ExtractIds {
        /// Identifier-bearing JSON document
        document: PathBuf,
        /// Destination list file (header written on creation)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Aggregate step metrics into the run report
    Report {
        /// Directory of per-run JSON metric documents
        #[arg(long)]
        metrics_dir: PathBuf,
        /// Identifier-bearing JSON document scoping identity resolution
        #[arg(long)]
        ids_from: Option<PathBuf>,
        /// Gzip TSV provenance report
        #[arg(long)]
        provenance: Option<PathBuf>,
        /// Run order and dependency configuration JSON
        #[arg(long)]
        dependencies: Option<PathBuf>,
        /// Flat CSV destination (appends across invocations)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    gantry_core::logging::init_structured_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::ExtractIds { document, output } => extract_ids(&document, output),
        Command::Report {
            metrics_dir,
            ids_from,
            provenance,
            dependencies,
            csv,
        } => report(&metrics_dir, ids_from, provenance, dependencies, csv),
    }
}

fn extract_ids(document_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = ReportConfig::from_env()?;
    let document = load_json(document_path)?;
    let run_ids = extract_run_ids(&document, &config.run_id_key);

    if run_ids.is_empty() {
        println!("No run identifiers found.");
        return Ok(());
    }

    let destination = output.unwrap_or(config.run_id_list_path);
    append_run_ids(&destination, &run_ids)?;
    println!(
        "Wrote {} run identifier(s) to {}",
        run_ids.len(),
        destination.display()
    );
    Ok(())
}

fn report(
    metrics_dir: &Path,
    ids_from: Option<PathBuf>,
    provenance: Option<PathBuf>,
    dependencies: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let config = ReportConfig::from_env()?;

    let step_records = load_step_records(metrics_dir)?;
    let identifier_document = ids_from.as_deref().map(load_json).transpose()?;
    let provenance_reader = provenance
        .as_deref()
        .map(|path| {
            File::open(path).with_context(|| format!("opening provenance report {}", path.display()))
        })
        .transpose()?;
    let dependency_spec = dependencies
        .as_deref()
        .map(DependencySpec::from_path)
        .transpose()?;

    let inputs = ReportInputs {
        identifier_document,
        step_records,
        provenance: provenance_reader,
        dependency_spec,
    };

    match run_report(&config, inputs)? {
        PipelineOutcome::Empty(reason) => {
            println!("Nothing to report: {reason}.");
        }
        PipelineOutcome::Complete(bundle) => {
            let destination = csv.unwrap_or(config.metrics_csv_path);
            append_metrics_csv(&destination, &bundle.runs)?;
            println!(
                "Reported {} run(s), {} dependency edge(s); metrics saved to {}",
                bundle.runs.len(),
                bundle.grouping.edges.len(),
                destination.display()
            );
        }
    }
    Ok(())
}

fn load_json(path: &Path) -> Result<serde_json::Value> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

/// Read every `.json` document in the directory as a list of step records.
/// Directory entries are processed in name order so repeated invocations
/// see the same record order.
fn load_step_records(metrics_dir: &Path) -> Result<Vec<StepRecord>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(metrics_dir)
        .with_context(|| format!("reading metrics directory {}", metrics_dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in &paths {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut batch: Vec<StepRecord> = serde_json::from_reader(file)
            .with_context(|| format!("parsing step records from {}", path.display()))?;
        records.append(&mut batch);
    }

    info!(
        documents = paths.len(),
        records = records.len(),
        metrics_dir = %metrics_dir.display(),
        "loaded step records"
    );
    Ok(records)
}
