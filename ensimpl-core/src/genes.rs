//! Gene assembly: genes with their transcripts, exons, proteins and homologs.
//!
//! Detailed lookups stream one row per gene, transcript, exon and protein from
//! `ensembl_gtpe`, tagged by `type_key`, and fold them into nested [`Gene`]s.

use crate::classify::chromosome_order;
use crate::error::{EnsimplError, Result};
use crate::exons::{ExonInfo, ExonInfoRecord};
use crate::meta::read_external_dbs;
use crate::store::{gene_from_row, EnsimplStore, TempIdTable, GENE_COLUMNS};
use crate::types::{Exon, Gene, GenomicPos, Homolog, Protein, Strand, Transcript};
use indexmap::IndexMap;
use rusqlite::{named_params, Row};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source db for native Ensembl gene identifiers
pub const ENSEMBL_SOURCE_DB: &str = "Ensembl";

/// Source db for identifiers taken from the homolog table
pub const ENSEMBL_HOMOLOG_SOURCE_DB: &str = "Ensembl_homolog";

/// Genes keyed by the requested (or gene) ID; `None` when the ID is unknown
pub type GeneMap = IndexMap<String, Option<Gene>>;

/// Identifiers per match ID, grouped by source db
pub type IdMap = IndexMap<String, IndexMap<String, Vec<String>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneOrder {
    #[default]
    Id,
    Position,
}

impl GeneOrder {
    fn order_by(self) -> String {
        match self {
            GeneOrder::Id => "ORDER BY g.ensembl_id".to_string(),
            GeneOrder::Position => format!(
                "ORDER BY {}, g.start_position, g.end_position",
                chromosome_order("g.chromosome")
            ),
        }
    }
}

const GTPE_COLUMNS: &str = "r.type_key, r.gene_id, r.transcript_id, r.ensembl_id, r.ensembl_id_version, \
r.ensembl_symbol, r.\"start\", r.\"end\", r.exon_number";

/// Column index where [`GTPE_COLUMNS`] begin in the detailed query
const GTPE_OFFSET: usize = 13;

fn sql_genes(filter: Option<&str>, details: bool, order: GeneOrder) -> String {
    let matches = |table: &str| {
        format!(
            "(SELECT DISTINCT eg.gene_id, eg.ensembl_id
                FROM ensembl_gtpe eg
               WHERE eg.ensembl_id IN (SELECT ensembl_id FROM {})) t",
            table
        )
    };

    let body = match (filter, details) {
        (None, false) => format!("SELECT g.ensembl_id match_id, {} FROM ensembl_genes g", GENE_COLUMNS),
        (Some(table), false) => format!(
            "SELECT t.ensembl_id match_id, {}
               FROM ensembl_genes g
               JOIN {} ON g.ensembl_id = t.gene_id",
            GENE_COLUMNS,
            matches(table)
        ),
        (None, true) => format!(
            "SELECT g.ensembl_id match_id, {}, {}
               FROM ensembl_genes g
               JOIN ensembl_gtpe r ON g.ensembl_id = r.gene_id",
            GENE_COLUMNS, GTPE_COLUMNS
        ),
        (Some(table), true) => format!(
            "SELECT t.ensembl_id match_id, {}, {}
               FROM ensembl_genes g
               JOIN ensembl_gtpe r ON g.ensembl_id = r.gene_id
               JOIN {} ON r.gene_id = t.gene_id",
            GENE_COLUMNS,
            GTPE_COLUMNS,
            matches(table)
        ),
    };

    format!("{} {}", body, order.order_by())
}

fn sql_homologs(table: &str) -> String {
    format!(
        "SELECT eh.ensembl_id, eh.ensembl_version, eh.ensembl_symbol, eh.perc_id,
                eh.homolog_id, eh.homolog_version, eh.homolog_symbol, eh.homolog_perc_id,
                eh.dn, eh.ds, eh.goc_score, eh.wga_coverage, eh.is_high_confidence
           FROM ensembl_homologs eh
          WHERE eh.ensembl_id IN (SELECT ensembl_id FROM {})
          ORDER BY eh.ensembl_id, eh.homolog_id",
        table
    )
}

const SQL_ALL_IDS: &str = "SELECT ensembl_id, external_id, external_db FROM ensembl_gene_ids
  UNION
 SELECT ensembl_id, homolog_id, 'Ensembl_homolog' FROM ensembl_homologs";

enum IdMatch<'a> {
    All,
    Ensembl(&'a str),
    External(&'a str),
}

fn sql_ids(matching: IdMatch<'_>) -> String {
    let matches = match matching {
        IdMatch::All => "SELECT ensembl_id, ensembl_id match_id FROM ensembl_genes".to_string(),
        IdMatch::Ensembl(table) => format!(
            "SELECT ensembl_id, ensembl_id match_id FROM ensembl_genes
              WHERE ensembl_id IN (SELECT ensembl_id FROM {})",
            table
        ),
        IdMatch::External(table) => format!(
            "SELECT DISTINCT ensembl_id, external_id match_id FROM ({})
              WHERE external_id IN (SELECT ensembl_id FROM {})
                AND external_db = :source_db",
            SQL_ALL_IDS, table
        ),
    };

    format!(
        "SELECT m.ensembl_id, a.external_id, a.external_db, m.match_id
           FROM ({}) m
           LEFT JOIN ({}) a ON a.ensembl_id = m.ensembl_id
          ORDER BY m.ensembl_id, a.external_db, a.external_id",
        matches, SQL_ALL_IDS
    )
}

fn sql_random_ids() -> String {
    format!(
        "SELECT r.random_id
           FROM (SELECT external_id random_id, external_db source_db FROM ensembl_gene_ids
                  UNION
                 SELECT homolog_id, '{}' FROM ensembl_homologs
                  UNION
                 SELECT ensembl_id, '{}' FROM ensembl_genes) r
          WHERE r.source_db = :source_db
          ORDER BY RANDOM()
          LIMIT :limit",
        ENSEMBL_HOMOLOG_SOURCE_DB, ENSEMBL_SOURCE_DB
    )
}

fn sql_exon_info() -> &'static str {
    "SELECT r.gene_id, r.type_key, r.ensembl_symbol, r.seqid, r.\"start\", r.\"end\", g.strand
       FROM ensembl_genes g
       JOIN ensembl_gtpe r ON g.ensembl_id = r.gene_id
       JOIN chromosomes c ON r.seqid = c.chromosome
      WHERE r.type_key IN ('EG', 'EE')
        AND (:chromosome IS NULL OR r.seqid = :chromosome)
      ORDER BY c.chromosome_num, g.start_position, r.gene_id, ifnull(r.exon_number, 0)"
}

/// One `ensembl_gtpe` row, discriminated by `type_key`
#[derive(Debug, Clone, PartialEq)]
enum GtpeRow {
    Gene,
    Transcript {
        transcript_id: String,
        version: Option<i64>,
        symbol: Option<String>,
        start: GenomicPos,
        end: GenomicPos,
    },
    Exon {
        transcript_id: String,
        exon: Exon,
    },
    Protein {
        transcript_id: String,
        protein: Protein,
    },
    Unknown(String),
}

impl GtpeRow {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        let type_key: String = row.get(offset)?;
        let transcript_id = || -> rusqlite::Result<String> {
            Ok(row.get::<_, Option<String>>(offset + 2)?.unwrap_or_default())
        };

        let parsed = match type_key.as_str() {
            "EG" => GtpeRow::Gene,
            "ET" => GtpeRow::Transcript {
                transcript_id: transcript_id()?,
                version: row.get(offset + 4)?,
                symbol: row.get(offset + 5)?,
                start: row.get(offset + 6)?,
                end: row.get(offset + 7)?,
            },
            "EE" => GtpeRow::Exon {
                transcript_id: transcript_id()?,
                exon: Exon {
                    id: row.get(offset + 3)?,
                    version: row.get(offset + 4)?,
                    start: row.get(offset + 6)?,
                    end: row.get(offset + 7)?,
                    number: row.get::<_, Option<i64>>(offset + 8)?.unwrap_or(0),
                },
            },
            "EP" => GtpeRow::Protein {
                transcript_id: transcript_id()?,
                protein: Protein {
                    id: row.get(offset + 3)?,
                    version: row.get(offset + 4)?,
                    start: row.get(offset + 6)?,
                    end: row.get(offset + 7)?,
                },
            },
            _ => GtpeRow::Unknown(type_key),
        };
        Ok(parsed)
    }
}

/// Transcript under construction; exons keyed by ID until the scan finishes
struct TranscriptBuilder {
    transcript: Transcript,
    exons: IndexMap<String, Exon>,
}

impl TranscriptBuilder {
    fn new(id: &str) -> Self {
        Self {
            transcript: Transcript::new(id.to_string()),
            exons: IndexMap::new(),
        }
    }

    fn finish(self) -> Transcript {
        let mut transcript = self.transcript;
        transcript.exons = self.exons.into_values().collect();
        transcript.exons.sort_by_key(|exon| exon.number);
        transcript
    }
}

struct GeneBuilder {
    gene: Gene,
    transcripts: IndexMap<String, TranscriptBuilder>,
}

impl GeneBuilder {
    fn transcript(&mut self, id: &str) -> &mut TranscriptBuilder {
        self.transcripts
            .entry(id.to_string())
            .or_insert_with(|| TranscriptBuilder::new(id))
    }

    fn apply(&mut self, row: GtpeRow, gene_row: impl FnOnce() -> rusqlite::Result<Gene>) -> rusqlite::Result<()> {
        match row {
            GtpeRow::Gene => self.gene = gene_row()?,
            GtpeRow::Transcript {
                transcript_id,
                version,
                symbol,
                start,
                end,
            } => {
                let transcript = &mut self.transcript(&transcript_id).transcript;
                transcript.version = version;
                transcript.symbol = symbol;
                transcript.start = start;
                transcript.end = end;
            }
            GtpeRow::Exon { transcript_id, exon } => {
                self.transcript(&transcript_id).exons.insert(exon.id.clone(), exon);
            }
            GtpeRow::Protein { transcript_id, protein } => {
                self.transcript(&transcript_id).transcript.protein = Some(protein);
            }
            GtpeRow::Unknown(type_key) => {
                log::warn!("Skipping row with unknown type '{}' for gene {}", type_key, self.gene.id);
            }
        }
        Ok(())
    }

    fn finish(self, details: bool) -> Gene {
        let mut gene = self.gene;
        if details {
            let mut transcripts: Vec<Transcript> = self
                .transcripts
                .into_values()
                .map(TranscriptBuilder::finish)
                .collect();
            transcripts.sort_by_key(|t| t.start);
            gene.transcripts = Some(transcripts);
        }
        gene
    }
}

/// Storage errors surface as `AssemblyFailure`; anything else passes through
fn assembly<T, E: Into<EnsimplError>>(result: std::result::Result<T, E>) -> Result<T> {
    result.map_err(|e| match e.into() {
        EnsimplError::Storage(inner) => {
            log::error!("Database error: {}", inner);
            EnsimplError::assembly_failure(inner.to_string())
        }
        other => other,
    })
}

/// Fetch genes from `db`.
///
/// With `ids`, any gene, transcript, exon or protein ID may be given; the result
/// follows the request order and maps unknown IDs to `None`. Without `ids` every
/// gene is returned in `order`. `details` adds transcripts, exons, proteins and
/// homologs.
pub fn get(db: &Path, ids: Option<&[String]>, order: GeneOrder, details: bool) -> Result<GeneMap> {
    let store = EnsimplStore::open(db)?;
    let ids = ids.filter(|ids| !ids.is_empty());

    let mut assembled = match ids {
        Some(ids) => {
            let table = assembly(store.temp_ids(ids.iter()))?;
            assembly(fold_genes(&store, Some(&table), order, details))?
        }
        None => assembly(fold_genes(&store, None, order, details))?,
    };
    log::debug!("Assembled {} gene(s) from {}", assembled.len(), db.display());

    if details {
        let gene_ids: Vec<String> = assembled.values().map(|gene| gene.id.clone()).collect();
        let homologs = fetch_homologs(&store, &gene_ids)?;
        for gene in assembled.values_mut() {
            gene.homologs = homologs.get(&gene.id).filter(|h| !h.is_empty()).cloned();
        }
    }

    Ok(match ids {
        Some(ids) => ids
            .iter()
            .map(|id| (id.clone(), assembled.get(id).cloned()))
            .collect(),
        None => assembled.into_iter().map(|(id, gene)| (id, Some(gene))).collect(),
    })
}

fn fold_genes(
    store: &EnsimplStore,
    filter: Option<&TempIdTable<'_>>,
    order: GeneOrder,
    details: bool,
) -> rusqlite::Result<IndexMap<String, Gene>> {
    let sql = sql_genes(filter.map(TempIdTable::name), details, order);
    let mut stmt = store.connection().prepare(&sql)?;
    let mut rows = stmt.query([])?;

    let mut builders: IndexMap<String, GeneBuilder> = IndexMap::new();
    while let Some(row) = rows.next()? {
        let match_id: String = row.get(0)?;

        if !details {
            let gene = gene_from_row(row, 1)?;
            builders.entry(match_id).or_insert_with(|| GeneBuilder {
                gene,
                transcripts: IndexMap::new(),
            });
            continue;
        }

        let gene_id: String = row.get(1)?;
        let gtpe = GtpeRow::from_row(row, GTPE_OFFSET)?;
        builders
            .entry(match_id)
            .or_insert_with(|| GeneBuilder {
                gene: Gene::new(gene_id),
                transcripts: IndexMap::new(),
            })
            .apply(gtpe, || gene_from_row(row, 1))?;
    }

    Ok(builders
        .into_iter()
        .map(|(match_id, builder)| (match_id, builder.finish(details)))
        .collect())
}

fn fetch_homologs(store: &EnsimplStore, gene_ids: &[String]) -> Result<IndexMap<String, Vec<Homolog>>> {
    if gene_ids.is_empty() {
        return Ok(IndexMap::new());
    }

    let table = assembly(store.temp_ids(gene_ids.iter()))?;
    assembly(query_homologs(store, &table))
}

fn query_homologs(store: &EnsimplStore, table: &TempIdTable<'_>) -> rusqlite::Result<IndexMap<String, Vec<Homolog>>> {
    let mut homologs: IndexMap<String, Vec<Homolog>> = IndexMap::new();
    let mut stmt = store.connection().prepare(&sql_homologs(table.name()))?;
    let rows = stmt.query_map([], |row| {
        Ok(Homolog {
            ensembl_id: row.get(0)?,
            ensembl_version: row.get(1)?,
            ensembl_symbol: row.get(2)?,
            query_id_perc: row.get(3)?,
            homolog_id: row.get(4)?,
            homolog_version: row.get(5)?,
            homolog_symbol: row.get(6)?,
            target_id_perc: row.get(7)?,
            dn: row.get(8)?,
            ds: row.get(9)?,
            goc_score: row.get(10)?,
            wga_coverage: row.get(11)?,
            high_confidence: row.get::<_, Option<i64>>(12)?.unwrap_or(0) != 0,
        })
    })?;

    for homolog in rows {
        let homolog = homolog?;
        homologs.entry(homolog.ensembl_id.clone()).or_default().push(homolog);
    }
    Ok(homologs)
}

/// Source dbs accepted by [`get_ids`] and [`random_ids`] for this store
pub fn valid_source_dbs(db: &Path) -> Result<Vec<String>> {
    let store = EnsimplStore::open(db)?;
    source_dbs_of(&store)
}

fn source_dbs_of(store: &EnsimplStore) -> Result<Vec<String>> {
    let mut valid = vec![ENSEMBL_SOURCE_DB.to_string(), ENSEMBL_HOMOLOG_SOURCE_DB.to_string()];
    valid.extend(read_external_dbs(store)?.into_iter().map(|ext| ext.id));
    Ok(valid)
}

fn check_source_db(store: &EnsimplStore, source_db: &str) -> Result<()> {
    let valid = source_dbs_of(store)?;
    if valid.iter().any(|v| v == source_db) {
        Ok(())
    } else {
        Err(EnsimplError::invalid_source_db(source_db, valid))
    }
}

/// All identifiers known for each gene, keyed by match ID.
///
/// With `source_db = Ensembl` the `ids` are gene IDs; otherwise they are
/// identifiers of `source_db`, matched against external and homolog IDs.
pub fn get_ids(db: &Path, ids: Option<&[String]>, source_db: &str) -> Result<IdMap> {
    let store = EnsimplStore::open(db)?;
    check_source_db(&store, source_db)?;

    let ids = ids.filter(|ids| !ids.is_empty());
    let table = match ids {
        Some(ids) => Some(assembly(store.temp_ids(ids.iter()))?),
        None => None,
    };

    let matching = match &table {
        None => IdMatch::All,
        Some(table) if source_db.eq_ignore_ascii_case(ENSEMBL_SOURCE_DB) => IdMatch::Ensembl(table.name()),
        Some(table) => IdMatch::External(table.name()),
    };
    let uses_source_db = matches!(matching, IdMatch::External(_));

    assembly(collect_ids(&store, &sql_ids(matching), uses_source_db.then_some(source_db)))
}

fn collect_ids(store: &EnsimplStore, sql: &str, source_db: Option<&str>) -> rusqlite::Result<IdMap> {
    let mut stmt = store.connection().prepare(sql)?;
    let mut rows = match source_db {
        Some(source_db) => stmt.query(named_params! { ":source_db": source_db })?,
        None => stmt.query([])?,
    };

    let mut results: IdMap = IndexMap::new();
    while let Some(row) = rows.next()? {
        let ensembl_id: String = row.get(0)?;
        let external_id: Option<String> = row.get(1)?;
        let external_db: Option<String> = row.get(2)?;
        let match_id: String = row.get(3)?;

        let entry = results.entry(match_id).or_insert_with(|| {
            let mut seeded = IndexMap::new();
            seeded.insert(ENSEMBL_SOURCE_DB.to_string(), vec![ensembl_id.clone()]);
            seeded
        });
        if let (Some(external_id), Some(external_db)) = (external_id, external_db) {
            entry.entry(external_db).or_default().push(external_id);
        }
    }
    Ok(results)
}

/// `get` of one ID across several releases, keyed by release.
///
/// Databases that cannot be read are skipped.
pub fn get_history(databases: &[(String, PathBuf)], ensembl_id: &str, details: bool) -> IndexMap<String, GeneMap> {
    let ids = vec![ensembl_id.to_string()];
    let mut history = IndexMap::new();

    for (release, path) in databases {
        match get(path, Some(ids.as_slice()), GeneOrder::Id, details) {
            Ok(genes) => {
                history.insert(release.clone(), genes);
            }
            Err(e) => log::debug!("Skipping release {} ({}): {}", release, path.display(), e),
        }
    }

    history
}

/// `limit` identifiers sampled at random from `source_db`
pub fn random_ids(db: &Path, source_db: &str, limit: usize) -> Result<Vec<String>> {
    let store = EnsimplStore::open(db)?;
    check_source_db(&store, source_db)?;

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    assembly(query_random_ids(&store, source_db, limit))
}

fn query_random_ids(store: &EnsimplStore, source_db: &str, limit: i64) -> rusqlite::Result<Vec<String>> {
    let mut stmt = store.connection().prepare(&sql_random_ids())?;
    let ids = stmt
        .query_map(named_params! { ":source_db": source_db, ":limit": limit }, |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(ids)
}

/// Raw exon coordinates of one gene, collected before encoding
struct GeneExons {
    symbol: Option<String>,
    chr: String,
    span: (GenomicPos, GenomicPos),
    strand: Strand,
    exon_starts: Vec<GenomicPos>,
    exon_ends: Vec<GenomicPos>,
}

/// Exon layout of every gene, optionally on one chromosome only
pub fn exon_info(db: &Path, chromosome: Option<&str>, compressed: bool) -> Result<Vec<ExonInfoRecord>> {
    let store = EnsimplStore::open(db)?;
    let genes = assembly(scan_exons(&store, chromosome))?;
    log::debug!("Exon info for {} gene(s)", genes.len());

    Ok(genes
        .into_iter()
        .map(|(id, gene)| {
            let info = ExonInfo::from_exons(
                id,
                gene.symbol,
                gene.chr,
                gene.span,
                gene.strand,
                &gene.exon_starts,
                &gene.exon_ends,
            );
            if compressed {
                ExonInfoRecord::Compressed(info.compress())
            } else {
                ExonInfoRecord::Labeled(info)
            }
        })
        .collect())
}

fn scan_exons(store: &EnsimplStore, chromosome: Option<&str>) -> rusqlite::Result<IndexMap<String, GeneExons>> {
    let mut stmt = store.connection().prepare(sql_exon_info())?;
    let mut rows = stmt.query(named_params! { ":chromosome": chromosome })?;

    let mut genes: IndexMap<String, GeneExons> = IndexMap::new();
    while let Some(row) = rows.next()? {
        let gene_id: String = row.get(0)?;
        let type_key: String = row.get(1)?;
        let chr: String = row.get(3)?;
        let start: GenomicPos = row.get(4)?;
        let end: GenomicPos = row.get(5)?;
        let strand = Strand::from(row.get::<_, i64>(6)?);

        let gene = genes.entry(gene_id).or_insert_with(|| GeneExons {
            symbol: None,
            chr,
            span: (start, end),
            strand,
            exon_starts: Vec::new(),
            exon_ends: Vec::new(),
        });

        if type_key == "EG" {
            gene.symbol = row.get(2)?;
            gene.span = (start, end);
        } else {
            gene.exon_starts.push(start);
            gene.exon_ends.push(end);
        }
    }
    Ok(genes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by() {
        assert_eq!(GeneOrder::Id.order_by(), "ORDER BY g.ensembl_id");
        assert!(GeneOrder::Position.order_by().contains("'MT','51'"));
    }

    #[test]
    fn test_filtered_sql_uses_temp_table() {
        let sql = sql_genes(Some("lookup_ids_ABC123"), true, GeneOrder::Id);
        assert!(sql.contains("FROM lookup_ids_ABC123"));
        assert!(sql.contains("JOIN ensembl_gtpe r"));

        let sql = sql_genes(None, false, GeneOrder::Position);
        assert!(!sql.contains("lookup_ids_"));
        assert!(!sql.contains("ensembl_gtpe"));
    }

    #[test]
    fn test_id_sql_variants() {
        assert!(sql_ids(IdMatch::External("t")).contains(":source_db"));
        assert!(!sql_ids(IdMatch::Ensembl("t")).contains(":source_db"));
        assert!(sql_ids(IdMatch::All).contains("'Ensembl_homolog'"));
    }

    #[test]
    fn test_unknown_row_is_skipped() {
        let mut builder = GeneBuilder {
            gene: Gene::new("ENSMUSG00000000001".to_string()),
            transcripts: IndexMap::new(),
        };
        builder
            .apply(GtpeRow::Unknown("XX".to_string()), || unreachable!())
            .unwrap();
        let gene = builder.finish(true);
        assert_eq!(gene.transcripts, Some(Vec::new()));
    }

    #[test]
    fn test_fold_sorts_transcripts_and_exons() {
        let mut builder = GeneBuilder {
            gene: Gene::new("G".to_string()),
            transcripts: IndexMap::new(),
        };
        let exon = |id: &str, number: i64| Exon {
            id: id.to_string(),
            version: None,
            start: number * 10,
            end: number * 10 + 5,
            number,
        };

        for (tid, start) in [("T2", 500), ("T1", 100)] {
            builder
                .apply(
                    GtpeRow::Transcript {
                        transcript_id: tid.to_string(),
                        version: Some(1),
                        symbol: None,
                        start,
                        end: start + 100,
                    },
                    || unreachable!(),
                )
                .unwrap();
        }
        for (tid, number) in [("T1", 3), ("T1", 1), ("T1", 2), ("T2", 2), ("T2", 3), ("T2", 1)] {
            builder
                .apply(
                    GtpeRow::Exon {
                        transcript_id: tid.to_string(),
                        exon: exon(&format!("{}E{}", tid, number), number),
                    },
                    || unreachable!(),
                )
                .unwrap();
        }

        let gene = builder.finish(true);
        let transcripts = gene.transcripts.unwrap();
        assert_eq!(transcripts[0].id, "T1");
        assert_eq!(transcripts[1].id, "T2");
        for transcript in &transcripts {
            let numbers: Vec<i64> = transcript.exons.iter().map(|e| e.number).collect();
            assert_eq!(numbers, vec![1, 2, 3]);
        }
    }
}
