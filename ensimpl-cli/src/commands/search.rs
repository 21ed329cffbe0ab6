//! Search command implementation - classify a term and rank the matching genes

use anyhow::{Context, Result};
use ensimpl_core::{Match, SearchEngine};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::config::Config;
use crate::output::{cell, emit, OutputFormat};

#[derive(Tabled, Serialize)]
struct MatchRow {
    #[tabled(rename = "ID")]
    ensembl_gene_id: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Strand")]
    strand: String,
    #[tabled(rename = "Match Reason")]
    match_reason: String,
    #[tabled(rename = "Match Value")]
    match_value: String,
    #[tabled(rename = "Score")]
    score: String,
}

impl From<&Match> for MatchRow {
    fn from(m: &Match) -> Self {
        Self {
            ensembl_gene_id: m.ensembl_gene_id.clone(),
            symbol: cell(&m.symbol),
            name: cell(&m.name),
            position: m.position(),
            strand: m.strand.to_string(),
            match_reason: m.match_reason.clone(),
            match_value: m.match_value.clone(),
            score: cell(&m.score),
        }
    }
}

pub fn execute(
    config: &Config,
    db: &Path,
    term: &str,
    exact: bool,
    max: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    let engine = SearchEngine::new(config.units()).with_swallow_errors(config.search.swallow_errors);
    let limit = max.unwrap_or(config.search.default_limit);

    let result = engine
        .search(db, term, exact, Some(limit))
        .with_context(|| format!("Failed to search for '{}'", term))?;

    log::info!(
        "'{}' matched {} genes, showing {}",
        term,
        result.total_matches,
        result.matches.len()
    );

    let rows = result.matches.iter().map(MatchRow::from).collect();
    emit::<MatchRow, _>(rows, &result, format)
}
