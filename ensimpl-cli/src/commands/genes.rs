//! Genes command implementation - many genes by ID file or the whole database

use anyhow::{Context, Result};
use ensimpl_core::genes;
use ensimpl_core::GeneOrder;
use std::path::Path;

use super::{load_ids, GeneRow};
use crate::output::{emit, OutputFormat};

pub fn execute(
    db: &Path,
    ids_file: Option<&Path>,
    order: GeneOrder,
    details: bool,
    format: OutputFormat,
) -> Result<()> {
    let ids = load_ids(ids_file)?;
    let result = genes::get(db, ids.as_deref(), order, details).context("Failed to look up genes")?;

    let mut rows = Vec::with_capacity(result.len());
    for (query, gene) in &result {
        match gene {
            Some(gene) => rows.push(GeneRow::new(query, gene)),
            None => log::warn!("No gene found for {}", query),
        }
    }
    log::info!("Found {} of {} genes", rows.len(), result.len());

    emit(rows, &result, format)
}
