//! Command implementations.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use tabmap_model::ChainConfig;
use tabmap_transform::{Transformer, TransformerChain};

/// One configured step, as reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub transformer: &'static str,
    pub source_columns: Vec<String>,
    pub adjust_column: Option<String>,
}

/// Inputs for [`run_apply`].
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub infer_schema: bool,
    pub preview_rows: usize,
}

/// Outcome of [`run_apply`].
#[derive(Debug)]
pub struct ApplyResult {
    pub rows: usize,
    pub steps: Vec<StepSummary>,
    pub output: Option<PathBuf>,
    pub preview: DataFrame,
}

/// Reads and parses a chain configuration file.
pub fn load_config(path: &Path) -> Result<ChainConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ChainConfig::from_json_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Builds and validates the chain described by `path`.
pub fn load_chain(path: &Path) -> Result<TransformerChain> {
    let config = load_config(path)?;
    Ok(TransformerChain::from_config(&config)?)
}

/// Reads a CSV file; without `infer_schema` every column is read as text.
pub fn read_table(path: &Path, infer_schema: bool) -> Result<DataFrame> {
    let infer_length = if infer_schema { Some(100) } else { Some(0) };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_length)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("failed to read CSV {}", path.display()))
}

/// Writes `df` as CSV to `path`, or to stdout when `path` is None.
pub fn write_table(df: &mut DataFrame, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("failed to write CSV {}", path.display()))
        }
        None => CsvWriter::new(io::stdout().lock())
            .include_header(true)
            .finish(df)
            .context("failed to write CSV to stdout"),
    }
}

/// Summaries of every step in the chain.
pub fn step_summaries(chain: &TransformerChain) -> Vec<StepSummary> {
    chain
        .steps()
        .iter()
        .map(|step| StepSummary {
            transformer: step.name(),
            source_columns: step.columns().into_iter().map(String::from).collect(),
            adjust_column: step.spec().adjust_column().map(String::from),
        })
        .collect()
}

/// Validates a configuration file.
pub fn run_check(config: &Path) -> Result<Vec<StepSummary>> {
    let chain = load_chain(config)?;
    tracing::info!(steps = chain.len(), "Configuration is valid");
    Ok(step_summaries(&chain))
}

/// Applies a configuration to a CSV file and writes the result.
pub fn run_apply(options: &ApplyOptions) -> Result<ApplyResult> {
    let mut chain = load_chain(&options.config)?;
    let input = read_table(&options.input, options.infer_schema)?;
    tracing::info!(
        input = %options.input.display(),
        rows = input.height(),
        columns = input.width(),
        steps = chain.len(),
        "Applying mappings"
    );

    let mut output = chain.fit_transform(&input, None)?;
    write_table(&mut output, options.output.as_deref())?;

    Ok(ApplyResult {
        rows: output.height(),
        steps: step_summaries(&chain),
        output: options.output.clone(),
        preview: output.head(Some(options.preview_rows)),
    })
}
