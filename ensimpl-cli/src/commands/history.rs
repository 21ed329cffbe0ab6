//! History command implementation - one gene across a range of releases

use anyhow::{bail, Result};
use ensimpl_core::{genes, Registry};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct HistoryRow {
    #[tabled(rename = "Release")]
    release: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Position")]
    position: String,
}

pub fn execute(
    registry: &Registry,
    id: &str,
    species: &str,
    release_start: &str,
    release_end: &str,
    details: bool,
    format: OutputFormat,
) -> Result<()> {
    let databases = registry.history_databases(species, release_start, release_end);
    if databases.is_empty() {
        bail!(
            "No {} databases between releases {} and {} in {}",
            species,
            release_start,
            release_end,
            registry.directory().display()
        );
    }
    log::info!("Looking up {} in {} releases", id, databases.len());

    let history = genes::get_history(&databases, id, details);

    let rows = history
        .iter()
        .flat_map(|(release, result)| {
            result.values().map(move |gene| match gene {
                Some(gene) => HistoryRow {
                    release: release.clone(),
                    id: gene.id.clone(),
                    version: cell(&gene.version),
                    symbol: cell(&gene.symbol),
                    position: gene.position(),
                },
                None => HistoryRow {
                    release: release.clone(),
                    id: id.to_string(),
                    version: String::new(),
                    symbol: String::new(),
                    position: "not present".to_string(),
                },
            })
        })
        .collect();

    emit::<HistoryRow, _>(rows, &history, format)
}
