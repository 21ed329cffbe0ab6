//! Random-ids command implementation - sample identifiers from a source database

use anyhow::{Context, Result};
use ensimpl_core::genes;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::output::{emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct IdRow {
    #[tabled(rename = "ID")]
    id: String,
}

pub fn execute(db: &Path, source_db: &str, limit: usize, format: OutputFormat) -> Result<()> {
    let ids = genes::random_ids(db, source_db, limit)
        .with_context(|| format!("Failed to sample {} identifiers", source_db))?;
    let rows = ids.iter().map(|id| IdRow { id: id.clone() }).collect();
    emit::<IdRow, _>(rows, &ids, format)
}
