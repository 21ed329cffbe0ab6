//! Command implementations for the Ensimpl CLI

pub mod config;
pub mod exons;
pub mod gene;
pub mod genes;
pub mod history;
pub mod ids;
pub mod info;
pub mod random_ids;
pub mod releases;
pub mod search;

use anyhow::{Context, Result};
use clap::Args;
use ensimpl_core::{Gene, Registry};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::Tabled;

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output::cell;

/// Species used when none is given on the command line
pub const DEFAULT_SPECIES: &str = "Mm";

/// Selects one database from the registry
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Ensembl release (latest available for the species when omitted)
    #[arg(short, long)]
    pub release: Option<String>,

    /// Species code, e.g. Mm or Hs
    #[arg(short, long, default_value = DEFAULT_SPECIES)]
    pub species: String,

    /// Follow the latest release sharing the selected assembly
    #[arg(long)]
    pub greedy: bool,
}

/// Scan the database directory chosen by the command line, config file or `ENSIMPL_DIR`
pub fn open_registry(config: &Config, directory: Option<&Path>) -> Result<Registry> {
    Ok(Registry::from_directory(config.directory(directory))?)
}

/// Resolve the selected database to its file
pub fn select_db(registry: &Registry, db: &DbArgs) -> Result<PathBuf> {
    let path = match &db.release {
        Some(release) => registry.resolve(release, &db.species, db.greedy)?.to_path_buf(),
        None => registry.latest(&db.species)?.path.clone(),
    };
    log::info!("Using database: {}", path.display());
    Ok(path)
}

/// Read identifiers from a file: first whitespace-separated token of every non-blank line
pub fn read_ids_file(path: &Path) -> CliResult<Vec<String>> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_ids(&content))
}

fn parse_ids(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Identifiers from `--ids FILE`, or `None` for every gene in the database
pub fn load_ids(ids_file: Option<&Path>) -> Result<Option<Vec<String>>> {
    match ids_file {
        Some(path) => {
            let ids = read_ids_file(path)
                .with_context(|| format!("Failed to read identifiers from {}", path.display()))?;
            log::info!("Read {} identifiers from {}", ids.len(), path.display());
            Ok(Some(ids))
        }
        None => Ok(None),
    }
}

/// Summary row shared by the gene lookup commands
#[derive(Tabled, Serialize)]
pub struct GeneRow {
    #[tabled(rename = "Query")]
    pub query: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Position")]
    pub position: String,
    #[tabled(rename = "Strand")]
    pub strand: String,
    #[tabled(rename = "Synonyms")]
    pub synonyms: String,
}

impl GeneRow {
    pub fn new(query: &str, gene: &Gene) -> Self {
        Self {
            query: query.to_string(),
            id: gene.id.clone(),
            version: cell(&gene.version),
            symbol: cell(&gene.symbol),
            name: cell(&gene.name),
            position: gene.position(),
            strand: gene.strand.to_string(),
            synonyms: gene.synonyms.join(","),
        }
    }
}
