//! Gene command implementation - one gene with optional transcripts and homologs

use anyhow::{bail, Context, Result};
use ensimpl_core::genes;
use ensimpl_core::{Gene, GeneOrder};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use super::GeneRow;
use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct TranscriptRow {
    #[tabled(rename = "Transcript")]
    id: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Start")]
    start: i64,
    #[tabled(rename = "End")]
    end: i64,
    #[tabled(rename = "Exons")]
    exons: usize,
    #[tabled(rename = "Protein")]
    protein: String,
}

#[derive(Tabled, Serialize)]
struct HomologRow {
    #[tabled(rename = "Homolog")]
    homolog_id: String,
    #[tabled(rename = "Symbol")]
    homolog_symbol: String,
    #[tabled(rename = "Identity %")]
    target_id_perc: String,
    #[tabled(rename = "High Confidence")]
    high_confidence: bool,
}

pub fn execute(db: &Path, id: &str, details: bool, format: OutputFormat) -> Result<()> {
    let ids = vec![id.to_string()];
    let mut result = genes::get(db, Some(ids.as_slice()), GeneOrder::Id, details)
        .with_context(|| format!("Failed to look up gene {}", id))?;

    let Some(gene) = result.swap_remove(id).flatten() else {
        bail!("No gene found for {}", id);
    };

    if format == OutputFormat::Json {
        return emit(Vec::<GeneRow>::new(), &gene, format);
    }

    emit(vec![GeneRow::new(id, &gene)], &gene, format)?;
    if details {
        println!();
        emit(transcript_rows(&gene), &gene, format)?;
        if gene.homologs.as_ref().is_some_and(|h| !h.is_empty()) {
            println!();
            emit(homolog_rows(&gene), &gene, format)?;
        }
    }
    Ok(())
}

fn transcript_rows(gene: &Gene) -> Vec<TranscriptRow> {
    gene.transcripts
        .iter()
        .flatten()
        .map(|t| TranscriptRow {
            id: t.id.clone(),
            symbol: cell(&t.symbol),
            start: t.start,
            end: t.end,
            exons: t.exons.len(),
            protein: t.protein.as_ref().map(|p| p.id.clone()).unwrap_or_default(),
        })
        .collect()
}

fn homolog_rows(gene: &Gene) -> Vec<HomologRow> {
    gene.homologs
        .iter()
        .flatten()
        .map(|h| HomologRow {
            homolog_id: h.homolog_id.clone(),
            homolog_symbol: cell(&h.homolog_symbol),
            target_id_perc: cell(&h.target_id_perc),
            high_confidence: h.high_confidence,
        })
        .collect()
}
