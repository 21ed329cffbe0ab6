//! Releases command implementation - list every database in the registry

use anyhow::Result;
use ensimpl_core::{DatabaseEntry, Registry};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct ReleaseRow {
    #[tabled(rename = "Release")]
    release: String,
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Assembly")]
    assembly: String,
    #[tabled(rename = "Patch")]
    assembly_patch: String,
    #[tabled(rename = "Greedy Release")]
    greedy_release: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&DatabaseEntry> for ReleaseRow {
    fn from(entry: &DatabaseEntry) -> Self {
        Self {
            release: entry.release.clone(),
            species: entry.species.clone(),
            assembly: entry.assembly.clone(),
            assembly_patch: entry.assembly_patch.clone(),
            greedy_release: entry.greedy_release.clone(),
            url: cell(&entry.url),
        }
    }
}

pub fn execute(registry: &Registry, format: OutputFormat) -> Result<()> {
    if registry.is_empty() {
        log::warn!("No databases found in {}", registry.directory().display());
    }
    let rows: Vec<ReleaseRow> = registry.entries().iter().map(ReleaseRow::from).collect();
    emit(rows, registry.entries(), format)
}
