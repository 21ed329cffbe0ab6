//! Ids command implementation - cross-reference identifiers between source databases

use anyhow::{Context, Result};
use ensimpl_core::genes;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use super::load_ids;
use crate::output::{emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct IdRow {
    #[tabled(rename = "Query")]
    query: String,
    #[tabled(rename = "Source DB")]
    external_db: String,
    #[tabled(rename = "IDs")]
    ids: String,
}

pub fn execute(db: &Path, ids_file: Option<&Path>, source_db: &str, format: OutputFormat) -> Result<()> {
    let ids = load_ids(ids_file)?;
    let result = genes::get_ids(db, ids.as_deref(), source_db)
        .with_context(|| format!("Failed to look up {} identifiers", source_db))?;

    let rows = result
        .iter()
        .flat_map(|(query, by_db)| {
            by_db.iter().map(move |(external_db, ids)| IdRow {
                query: query.clone(),
                external_db: external_db.clone(),
                ids: ids.join(","),
            })
        })
        .collect();

    emit::<IdRow, _>(rows, &result, format)
}
