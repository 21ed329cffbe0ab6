//! Exons command implementation - run-length exon layout per gene

use anyhow::{Context, Result};
use ensimpl_core::genes;
use ensimpl_core::ExonInfoRecord;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct ExonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Chr")]
    chr: String,
    #[tabled(rename = "Start")]
    start: i64,
    #[tabled(rename = "Length")]
    length: i64,
    #[tabled(rename = "Strand")]
    strand: String,
    #[tabled(rename = "Exons")]
    exons: String,
}

impl From<&ExonInfoRecord> for ExonRow {
    fn from(record: &ExonInfoRecord) -> Self {
        match record {
            ExonInfoRecord::Labeled(info) => Self {
                id: info.id.clone(),
                symbol: cell(&info.symbol),
                chr: info.chr.clone(),
                start: info.start,
                length: info.length,
                strand: info.strand.to_string(),
                exons: info.exons.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(","),
            },
            ExonInfoRecord::Compressed(c) => Self {
                id: c.0.clone(),
                symbol: cell(&c.1),
                chr: c.2.clone(),
                start: c.3,
                length: c.4,
                strand: c.5.to_string(),
                exons: c.6.clone(),
            },
        }
    }
}

pub fn execute(db: &Path, chromosome: Option<&str>, compressed: bool, format: OutputFormat) -> Result<()> {
    let records = genes::exon_info(db, chromosome, compressed).context("Failed to read exon layout")?;
    log::info!("Exon layout for {} genes", records.len());

    let rows = records.iter().map(ExonRow::from).collect();
    emit::<ExonRow, _>(rows, &records, format)
}
