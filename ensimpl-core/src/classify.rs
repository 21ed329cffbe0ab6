//! Search term classification.
//!
//! A raw term is inspected in a fixed order: Ensembl stable IDs first, then MGI
//! IDs, then region expressions, and finally free text. The result names the
//! query template to run and the parameters to bind; nothing here touches storage.

use crate::error::{EnsimplError, Result};
use crate::region::{Region, UnitMultipliers};
use crate::store::GENE_COLUMNS;
use regex::Regex;
use rusqlite::types::Value;
use serde::Serialize;
use std::sync::OnceLock;

fn ensembl_mouse_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^ENSMUS[EGTP][0-9]{11}").expect("mouse id regex is valid"))
}

fn ensembl_human_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^ENS[EGTP][0-9]{11}").expect("human id regex is valid"))
}

fn mgi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^MGI:[0-9]+").expect("mgi regex is valid"))
}

/// Wildcard marker understood by the full-text index
pub const WILDCARD: char = '*';

/// Ranking categories that identify a gene by identifier rather than by name
pub const ID_RANKING_IDS: [&str; 8] = ["EG", "ET", "EE", "EP", "ZG", "MI", "UG", "HG"];

/// Sort expression putting X after the autosomes and Y/MT last
pub const CHROMOSOME_ORDER: &str =
    "cast(replace(replace(replace({col},'X','50'),'Y','51'),'MT','51') AS int)";

pub fn chromosome_order(column: &str) -> String {
    CHROMOSOME_ORDER.replace("{col}", column)
}

pub fn sql_term_exact() -> String {
    format!(
        "SELECT s.score, s.description, l.lookup_value, {}
           FROM ensembl_genes g
           JOIN ensembl_genes_lookup l ON g.ensembl_id = l.ensembl_gene_id
           JOIN search_ranking s ON l.ranking_id = s.ranking_id
          WHERE l.lookup_value = :term",
        GENE_COLUMNS
    )
}

pub fn sql_term_like() -> String {
    format!(
        "SELECT s.score, s.description, l.lookup_value, {}
           FROM ensembl_genes g
           JOIN ensembl_genes_lookup l ON g.ensembl_id = l.ensembl_gene_id
           JOIN ensembl_search es ON es.ensembl_genes_lookup_key = l.ensembl_genes_lookup_key
           JOIN search_ranking s ON l.ranking_id = s.ranking_id
          WHERE es.lookup_value MATCH :term",
        GENE_COLUMNS
    )
}

pub fn sql_id() -> String {
    let ranking_ids = ID_RANKING_IDS
        .iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} AND l.ranking_id IN ({})", sql_term_like(), ranking_ids)
}

pub fn sql_region() -> String {
    format!(
        "SELECT {}
           FROM ensembl_genes g
          WHERE g.chromosome = :chromosome
            AND g.start_position <= :end_position
            AND g.end_position >= :start_position
          ORDER BY {}, g.start_position, g.end_position",
        GENE_COLUMNS,
        chromosome_order("g.chromosome")
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IdFormat {
    EnsemblMouse,
    Ensembl,
    Mgi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchMode {
    Exact,
    Prefix,
}

/// Retrieval strategy chosen for a term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuerySpec {
    StableIdLookup { term: String, format: IdFormat },
    RegionLookup { region: Region },
    FreeTextLookup { term: String, mode: MatchMode },
}

impl QuerySpec {
    pub fn is_region(&self) -> bool {
        matches!(self, QuerySpec::RegionLookup { .. })
    }

    pub fn sql(&self) -> String {
        match self {
            QuerySpec::StableIdLookup { .. } => sql_id(),
            QuerySpec::RegionLookup { .. } => sql_region(),
            QuerySpec::FreeTextLookup { mode: MatchMode::Exact, .. } => sql_term_exact(),
            QuerySpec::FreeTextLookup { mode: MatchMode::Prefix, .. } => sql_term_like(),
        }
    }

    /// Named parameters for [`QuerySpec::sql`]
    pub fn params(&self) -> Vec<(&'static str, Value)> {
        match self {
            QuerySpec::StableIdLookup { term, .. } => {
                vec![(":term", Value::Text(quote_phrase(term)))]
            }
            QuerySpec::RegionLookup { region } => vec![
                (":chromosome", Value::Text(region.chromosome.clone())),
                (":start_position", Value::Integer(region.start)),
                (":end_position", Value::Integer(region.end)),
            ],
            QuerySpec::FreeTextLookup { term, .. } => vec![(":term", Value::Text(term.clone()))],
        }
    }
}

impl std::fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuerySpec::StableIdLookup { term, format } => write!(f, "id lookup ({:?}) \"{}\"", format, term),
            QuerySpec::RegionLookup { region } => write!(f, "region lookup {}", region),
            QuerySpec::FreeTextLookup { term, mode } => write!(f, "{:?} lookup \"{}\"", mode, term),
        }
    }
}

/// Wrap a term as a full-text phrase so `:` and other punctuation are not query syntax
fn quote_phrase(term: &str) -> String {
    format!("\"{}\"", term.replace('"', "\"\""))
}

#[derive(Debug, Clone, Default)]
pub struct TermClassifier {
    units: UnitMultipliers,
}

impl TermClassifier {
    pub fn new(units: UnitMultipliers) -> Self {
        Self { units }
    }

    pub fn classify(&self, term: &str, exact: bool) -> Result<QuerySpec> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(EnsimplError::invalid_term("empty term"));
        }

        if let Some(format) = id_format(trimmed) {
            return Ok(QuerySpec::StableIdLookup {
                term: trimmed.to_string(),
                format,
            });
        }

        if let Ok(region) = Region::parse_with(trimmed, &self.units) {
            return Ok(QuerySpec::RegionLookup { region });
        }

        if exact {
            Ok(QuerySpec::FreeTextLookup {
                term: term.to_string(),
                mode: MatchMode::Exact,
            })
        } else {
            let mut prefix = trimmed.to_string();
            if !prefix.ends_with(WILDCARD) {
                prefix.push(WILDCARD);
            }
            Ok(QuerySpec::FreeTextLookup {
                term: prefix,
                mode: MatchMode::Prefix,
            })
        }
    }
}

/// Classify with the default unit multipliers
pub fn classify(term: &str, exact: bool) -> Result<QuerySpec> {
    TermClassifier::default().classify(term, exact)
}

/// Identifier format of `term`, if it is an Ensembl stable ID or an MGI ID
pub fn id_format(term: &str) -> Option<IdFormat> {
    if ensembl_mouse_re().is_match(term) {
        Some(IdFormat::EnsemblMouse)
    } else if ensembl_human_re().is_match(term) {
        Some(IdFormat::Ensembl)
    } else if mgi_re().is_match(term) {
        Some(IdFormat::Mgi)
    } else {
        None
    }
}
