//! Summary information read from a single annotation store

use crate::error::Result;
use crate::store::EnsimplStore;
use crate::types::GenomicPos;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity of a store as recorded in its `meta_info` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbMeta {
    pub species: String,
    pub release: String,
    pub assembly: String,
    pub assembly_patch: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    pub chromosome: String,
    pub length: GenomicPos,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KaryotypeBand {
    pub start: GenomicPos,
    pub end: GenomicPos,
    pub name: String,
    pub stain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Karyotype {
    pub chromosome: String,
    pub length: GenomicPos,
    pub order: i64,
    pub bands: Vec<KaryotypeBand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDb {
    pub id: String,
    pub name: String,
    pub ranking_id: String,
}

const SQL_META: &str = "SELECT DISTINCT meta_key, meta_value, species_id FROM meta_info ORDER BY meta_key";

const SQL_STATS: &str = "SELECT count(l.lookup_value) num, s.description
   FROM ensembl_genes_lookup l
   JOIN search_ranking s ON l.ranking_id = s.ranking_id
  GROUP BY s.description, l.species_id
  ORDER BY s.score DESC";

const SQL_CHROMOSOMES: &str =
    "SELECT chromosome, chromosome_length, chromosome_num FROM chromosomes ORDER BY chromosome_num";

const SQL_KARYOTYPES: &str = "SELECT c.chromosome, c.chromosome_length, c.chromosome_num,
        k.seq_region_start, k.seq_region_end, k.band, k.stain
   FROM karyotypes k
   JOIN chromosomes c ON k.chromosome = c.chromosome
  ORDER BY c.chromosome_num, k.seq_region_start";

const SQL_EXTERNAL_DBS: &str =
    "SELECT external_db_id, external_db_name, ranking_id FROM external_dbs ORDER BY external_db_key";

/// Release, species, assembly and provenance of the store at `db`
pub fn meta(db: &Path) -> Result<DbMeta> {
    let store = EnsimplStore::open(db)?;
    read_meta(&store)
}

pub(crate) fn read_meta(store: &EnsimplStore) -> Result<DbMeta> {
    let mut stmt = store.connection().prepare(SQL_META)?;
    let mut rows = stmt.query([])?;

    let mut meta = DbMeta::default();
    while let Some(row) = rows.next()? {
        let key: String = row.get(0)?;
        let value: Option<String> = row.get(1)?;
        if let Some(species) = row.get::<_, Option<String>>(2)? {
            meta.species = species;
        }

        let value = value.unwrap_or_default();
        match key.as_str() {
            "release" => meta.release = value,
            "assembly" => meta.assembly = value,
            "assembly_patch" => meta.assembly_patch = value,
            "url" => meta.url = Some(value),
            _ => {}
        }
    }

    Ok(meta)
}

/// Number of lookup terms per ranking category, highest scoring category first
pub fn stats(db: &Path) -> Result<IndexMap<String, i64>> {
    let store = EnsimplStore::open(db)?;
    let mut stmt = store.connection().prepare(SQL_STATS)?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, i64>(0)?)))?;

    let mut stats = IndexMap::new();
    for row in rows {
        let (description, count) = row?;
        stats.insert(description, count);
    }
    Ok(stats)
}

pub fn chromosomes(db: &Path) -> Result<Vec<Chromosome>> {
    let store = EnsimplStore::open(db)?;
    let mut stmt = store.connection().prepare(SQL_CHROMOSOMES)?;
    let chromosomes = stmt
        .query_map([], |row| {
            Ok(Chromosome {
                chromosome: row.get(0)?,
                length: row.get(1)?,
                order: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(chromosomes)
}

/// Chromosomes with their cytogenetic bands, in chromosome then band order
pub fn karyotypes(db: &Path) -> Result<Vec<Karyotype>> {
    let store = EnsimplStore::open(db)?;
    let mut stmt = store.connection().prepare(SQL_KARYOTYPES)?;
    let mut rows = stmt.query([])?;

    let mut karyotypes: IndexMap<String, Karyotype> = IndexMap::new();
    while let Some(row) = rows.next()? {
        let chromosome: String = row.get(0)?;
        let band = KaryotypeBand {
            start: row.get(3)?,
            end: row.get(4)?,
            name: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            stain: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        };

        match karyotypes.get_mut(&chromosome) {
            Some(karyotype) => karyotype.bands.push(band),
            None => {
                let karyotype = Karyotype {
                    chromosome: chromosome.clone(),
                    length: row.get(1)?,
                    order: row.get(2)?,
                    bands: vec![band],
                };
                karyotypes.insert(chromosome, karyotype);
            }
        }
    }

    Ok(karyotypes.into_values().collect())
}

/// External databases cross-referenced by this store.
///
/// Human stores never list `MI` (MGI) and mouse stores never list `HG` (HGNC).
pub fn external_dbs(db: &Path) -> Result<Vec<ExternalDb>> {
    let store = EnsimplStore::open(db)?;
    read_external_dbs(&store)
}

pub(crate) fn read_external_dbs(store: &EnsimplStore) -> Result<Vec<ExternalDb>> {
    let species = read_meta(store)?.species;
    let excluded = excluded_ranking_id(&species);

    let mut stmt = store.connection().prepare(SQL_EXTERNAL_DBS)?;
    let all = stmt
        .query_map([], |row| {
            Ok(ExternalDb {
                id: row.get(0)?,
                name: row.get(1)?,
                ranking_id: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(all
        .into_iter()
        .filter(|db| Some(db.ranking_id.as_str()) != excluded)
        .collect())
}

fn excluded_ranking_id(species: &str) -> Option<&'static str> {
    match species.to_ascii_lowercase().as_str() {
        "hs" => Some("MI"),
        "mm" => Some("HG"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnsimplError;

    #[test]
    fn test_excluded_ranking_id() {
        assert_eq!(excluded_ranking_id("Hs"), Some("MI"));
        assert_eq!(excluded_ranking_id("mm"), Some("HG"));
        assert_eq!(excluded_ranking_id("Rn"), None);
    }

    #[test]
    fn test_missing_database_is_reported_before_querying() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ensimpl.1.Hs.db3");
        assert!(matches!(meta(&path), Err(EnsimplError::DatabaseNotFound { .. })));
        assert!(matches!(stats(&path), Err(EnsimplError::DatabaseNotFound { .. })));
        assert!(matches!(chromosomes(&path), Err(EnsimplError::DatabaseNotFound { .. })));
        assert!(matches!(karyotypes(&path), Err(EnsimplError::DatabaseNotFound { .. })));
        assert!(matches!(external_dbs(&path), Err(EnsimplError::DatabaseNotFound { .. })));
        assert!(!path.exists());
    }
}
