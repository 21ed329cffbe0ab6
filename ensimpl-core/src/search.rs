//! Term search against a single annotation store.
//!
//! Free-text and identifier queries return every matching lookup row; rows are
//! grouped per gene here, keeping the best match, and ranked by base score
//! (descending), then by the length of the matched description (ascending), then
//! by symbol. Region queries are returned in genomic order without a score.

use crate::classify::{QuerySpec, TermClassifier};
use crate::error::{EnsimplError, Result};
use crate::region::UnitMultipliers;
use crate::store::{gene_from_row, EnsimplStore};
use crate::types::{ExternalId, Gene, GenomicPos, HomologRef, Strand, LIST_SEPARATOR};
use indexmap::IndexMap;
use rusqlite::types::Value;
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// `match_reason` reported for region hits
pub const REGION_REASON: &str = "Region";

/// One gene matched by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub ensembl_gene_id: String,
    pub ensembl_version: Option<i64>,
    pub species: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub synonyms: Vec<String>,
    pub external_ids: Vec<ExternalId>,
    pub homolog_ids: Vec<HomologRef>,
    pub chromosome: String,
    pub position_start: GenomicPos,
    pub position_end: GenomicPos,
    pub strand: Strand,
    pub match_reason: String,
    pub match_value: String,
    pub score: Option<i64>,
}

impl Match {
    fn from_gene(gene: Gene, match_reason: String, match_value: String, score: Option<i64>) -> Self {
        Self {
            ensembl_gene_id: gene.id,
            ensembl_version: gene.version,
            species: gene.species_id,
            symbol: gene.symbol,
            name: gene.name,
            synonyms: gene.synonyms,
            external_ids: gene.external_ids,
            homolog_ids: gene.homolog_ids,
            chromosome: gene.chromosome,
            position_start: gene.start,
            position_end: gene.end,
            strand: gene.strand,
            match_reason,
            match_value,
            score,
        }
    }

    pub fn position(&self) -> String {
        format!("{}:{}-{}", self.chromosome, self.position_start, self.position_end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub query: QuerySpec,
    pub matches: Vec<Match>,
    /// Number of matches before the limit was applied
    pub total_matches: usize,
}

impl SearchResult {
    fn empty(query: QuerySpec) -> Self {
        Self {
            query,
            matches: Vec::new(),
            total_matches: 0,
        }
    }
}

/// A lookup row that matched: the ranking category, its base score and the matched value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHit {
    pub score: i64,
    pub description: String,
    pub value: String,
}

impl RankedHit {
    pub fn new<S: Into<String>>(score: i64, description: S, value: S) -> Self {
        Self {
            score,
            description: description.into(),
            value: value.into(),
        }
    }

    /// Length of `score||description||value`, in characters
    pub fn description_len(&self) -> i64 {
        let composite = format!(
            "{}{}{}{}{}",
            self.score, LIST_SEPARATOR, self.description, LIST_SEPARATOR, self.value
        );
        composite.chars().count() as i64
    }

    /// Score reported on the match: base score less the description length
    pub fn effective_score(&self) -> i64 {
        self.score - self.description_len()
    }

    /// Ranking order: higher score first, then the shorter description
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.description_len().cmp(&other.description_len()))
    }
}

/// Search settings that vary between deployments
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    classifier: TermClassifier,
    swallow_errors: bool,
}

impl SearchEngine {
    pub fn new(units: UnitMultipliers) -> Self {
        Self {
            classifier: TermClassifier::new(units),
            swallow_errors: false,
        }
    }

    /// Convert storage failures into an empty result instead of an error
    pub fn with_swallow_errors(mut self, swallow_errors: bool) -> Self {
        self.swallow_errors = swallow_errors;
        self
    }

    /// Search `db` for `term`.
    ///
    /// A `limit` of `None` or less than one returns every match.
    pub fn search(&self, db: &Path, term: &str, exact: bool, limit: Option<i64>) -> Result<SearchResult> {
        let query = self.classifier.classify(term, exact)?;
        log::debug!("Search {} in {}", query, db.display());

        match execute(db, &query) {
            Ok(mut matches) => {
                let total_matches = matches.len();
                if let Some(limit) = limit.filter(|&l| l > 0) {
                    matches.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
                }
                log::debug!("{} match(es), returning {}", total_matches, matches.len());
                Ok(SearchResult {
                    query,
                    matches,
                    total_matches,
                })
            }
            Err(e @ EnsimplError::SearchFailure { .. }) if self.swallow_errors => {
                log::error!("{}", e);
                Ok(SearchResult::empty(query))
            }
            Err(e) => Err(e),
        }
    }
}

/// Search with default settings
pub fn search(db: &Path, term: &str, exact: bool, limit: Option<i64>) -> Result<SearchResult> {
    SearchEngine::default().search(db, term, exact, limit)
}

fn execute(db: &Path, query: &QuerySpec) -> Result<Vec<Match>> {
    let store = EnsimplStore::open(db)?;
    let result = if query.is_region() {
        region_matches(&store, query)
    } else {
        ranked_matches(&store, query)
    };

    result.map_err(|e| {
        log::error!("Database error: {}", e);
        EnsimplError::search_failure(e.to_string())
    })
}

fn as_named<'a>(params: &'a [(&'static str, Value)]) -> Vec<(&'static str, &'a dyn ToSql)> {
    params.iter().map(|(name, value)| (*name, value as &dyn ToSql)).collect()
}

fn region_matches(store: &EnsimplStore, query: &QuerySpec) -> rusqlite::Result<Vec<Match>> {
    let params = query.params();
    let named = as_named(&params);

    let mut stmt = store.connection().prepare(&query.sql())?;
    let rows = stmt.query_map(named.as_slice(), |row| gene_from_row(row, 0))?;

    let mut matches = Vec::new();
    for gene in rows {
        let gene = gene?;
        let value = gene.position();
        matches.push(Match::from_gene(gene, REGION_REASON.to_string(), value, None));
    }
    Ok(matches)
}

fn ranked_matches(store: &EnsimplStore, query: &QuerySpec) -> rusqlite::Result<Vec<Match>> {
    let params = query.params();
    let named = as_named(&params);

    let mut stmt = store.connection().prepare(&query.sql())?;
    let mut rows = stmt.query(named.as_slice())?;

    let mut best: IndexMap<String, (RankedHit, Gene)> = IndexMap::new();
    let mut row_count = 0usize;
    while let Some(row) = rows.next()? {
        row_count += 1;
        let hit = RankedHit {
            score: row.get(0)?,
            description: row.get(1)?,
            value: row.get(2)?,
        };
        let gene_id: String = row.get(3)?;

        let replace = match best.get(&gene_id) {
            Some((current, _)) => better_within_gene(&hit, current),
            None => true,
        };
        if replace {
            best.insert(gene_id, (hit, gene_from_row(row, 3)?));
        }
    }
    log::debug!("{} lookup row(s) for {} gene(s)", row_count, best.len());

    let mut ranked: Vec<(RankedHit, Gene)> = best.into_values().collect();
    ranked.sort_by(|(a_hit, a_gene), (b_hit, b_gene)| {
        a_hit.rank_cmp(b_hit).then_with(|| a_gene.symbol.cmp(&b_gene.symbol))
    });

    Ok(ranked
        .into_iter()
        .map(|(hit, gene)| {
            let score = hit.effective_score();
            Match::from_gene(gene, hit.description, hit.value, Some(score))
        })
        .collect())
}

/// Best of two hits on the same gene; at equal rank the smaller value wins
fn better_within_gene(candidate: &RankedHit, current: &RankedHit) -> bool {
    match candidate.rank_cmp(current) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => candidate.value < current.value,
    }
}
