//! Info command implementation - identity, statistics and layout of one database

use anyhow::{Context, Result};
use ensimpl_core::{genes, meta};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct ChromosomeRow {
    #[tabled(rename = "Chromosome")]
    chromosome: String,
    #[tabled(rename = "Length")]
    length: i64,
    #[tabled(rename = "Order")]
    order: i64,
    #[tabled(rename = "Bands")]
    bands: usize,
}

#[derive(Tabled, Serialize)]
struct ExternalDbRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ranking")]
    ranking_id: String,
}

#[derive(Tabled, Serialize)]
struct SourceDbRow {
    #[tabled(rename = "Source DB")]
    source_db: String,
}

/// Which part of the database to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoView {
    Summary,
    Chromosomes,
    ExternalDbs,
    SourceDbs,
}

fn field<S: Into<String>>(field: S, value: String) -> FieldRow {
    FieldRow { field: field.into(), value }
}

/// Resolve the mutually exclusive view flags
pub fn view(chromosomes: bool, external_dbs: bool, source_dbs: bool) -> InfoView {
    if chromosomes {
        InfoView::Chromosomes
    } else if external_dbs {
        InfoView::ExternalDbs
    } else if source_dbs {
        InfoView::SourceDbs
    } else {
        InfoView::Summary
    }
}

pub fn execute(db: &Path, view: InfoView, format: OutputFormat) -> Result<()> {
    match view {
        InfoView::Summary => show_summary(db, format),
        InfoView::Chromosomes => show_chromosomes(db, format),
        InfoView::ExternalDbs => {
            let dbs = meta::external_dbs(db).context("Failed to read external databases")?;
            let rows = dbs
                .iter()
                .map(|d| ExternalDbRow {
                    id: d.id.clone(),
                    name: d.name.clone(),
                    ranking_id: d.ranking_id.clone(),
                })
                .collect();
            emit::<ExternalDbRow, _>(rows, &dbs, format)
        }
        InfoView::SourceDbs => {
            let source_dbs = genes::valid_source_dbs(db).context("Failed to read source databases")?;
            let rows = source_dbs
                .iter()
                .map(|source_db| SourceDbRow {
                    source_db: source_db.clone(),
                })
                .collect();
            emit::<SourceDbRow, _>(rows, &source_dbs, format)
        }
    }
}

fn show_summary(db: &Path, format: OutputFormat) -> Result<()> {

    let db_meta = meta::meta(db).context("Failed to read database metadata")?;
    let stats = meta::stats(db).context("Failed to read database statistics")?;

    let mut rows = vec![
        field("Species", db_meta.species.clone()),
        field("Release", db_meta.release.clone()),
        field("Assembly", db_meta.assembly.clone()),
        field("Assembly Patch", db_meta.assembly_patch.clone()),
        field("URL", cell(&db_meta.url)),
    ];
    rows.extend(stats.iter().map(|(category, count)| field(category.as_str(), count.to_string())));

    let json = serde_json::json!({ "meta": db_meta, "stats": stats });
    emit(rows, &json, format)
}

fn show_chromosomes(db: &Path, format: OutputFormat) -> Result<()> {
    let chromosomes = meta::chromosomes(db).context("Failed to read chromosomes")?;
    let karyotypes = meta::karyotypes(db).context("Failed to read karyotypes")?;

    let rows = chromosomes
        .iter()
        .map(|c| ChromosomeRow {
            chromosome: c.chromosome.clone(),
            length: c.length,
            order: c.order,
            bands: karyotypes
                .iter()
                .find(|k| k.chromosome == c.chromosome)
                .map_or(0, |k| k.bands.len()),
        })
        .collect();

    let json = serde_json::json!({ "chromosomes": chromosomes, "karyotypes": karyotypes });
    emit::<ChromosomeRow, _>(rows, &json, format)
}
