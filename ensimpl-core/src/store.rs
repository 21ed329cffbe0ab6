//! Read-only access to a single Ensimpl SQLite store.
//!
//! Each store is an immutable `ensimpl.{release}.{species}.db3` file. Handles are
//! opened per call; the existence check runs before SQLite sees the path so a
//! typo can never create an empty database.

use crate::error::{EnsimplError, Result};
use crate::types::{ExternalId, Gene, HomologRef, Strand, split_list};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};

/// Prefix shared by all store files
pub const DB_PREFIX: &str = "ensimpl";

/// Extension shared by all store files
pub const DB_EXTENSION: &str = "db3";

/// Gene projection shared by the search and gene queries; see [`gene_from_row`]
pub const GENE_COLUMNS: &str = "g.ensembl_id, g.ensembl_version, g.species_id, g.symbol, g.name, \
g.synonyms, g.external_ids, g.chromosome, g.start_position, g.end_position, g.strand, g.homolog_ids";

/// Decode the [`GENE_COLUMNS`] projection starting at column `offset`
pub fn gene_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Gene> {
    let mut gene = Gene::new(row.get(offset)?);
    gene.version = row.get(offset + 1)?;
    gene.species_id = row.get::<_, Option<String>>(offset + 2)?.unwrap_or_default();
    gene.symbol = row.get(offset + 3)?;
    gene.name = row.get(offset + 4)?;
    gene.synonyms = split_list(row.get::<_, Option<String>>(offset + 5)?.as_deref());
    gene.external_ids = ExternalId::parse_list(row.get::<_, Option<String>>(offset + 6)?.as_deref());
    gene.chromosome = row.get(offset + 7)?;
    gene.start = row.get(offset + 8)?;
    gene.end = row.get(offset + 9)?;
    gene.strand = Strand::from(row.get::<_, i64>(offset + 10)?);
    gene.homolog_ids = HomologRef::parse_list(row.get::<_, Option<String>>(offset + 11)?.as_deref());
    Ok(gene)
}

/// An open, read-only annotation store
pub struct EnsimplStore {
    path: PathBuf,
    connection: Connection,
}

impl EnsimplStore {
    /// Open the store at `path`, failing with `DatabaseNotFound` if it is absent
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(EnsimplError::missing_file(&path));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection = Connection::open_with_flags(&path, flags)?;
        log::debug!("Opened {}", path.display());

        Ok(Self { path, connection })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Load `ids` into a temporary table that lives until the guard is dropped
    pub fn temp_ids<I, S>(&self, ids: I) -> Result<TempIdTable<'_>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TempIdTable::create(&self.connection, ids)
    }
}

/// File name for a (release, species) store, e.g. `ensimpl.102.Mm.db3`
pub fn db_file_name(release: &str, species: &str) -> String {
    format!("{}.{}.{}.{}", DB_PREFIX, release, species, DB_EXTENSION)
}

/// Split a store file name into (release, species)
pub fn parse_db_file_name(path: &Path) -> Option<(String, String)> {
    let name = path.file_name()?.to_str()?;
    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        [prefix, release, species, ext]
            if *prefix == DB_PREFIX && *ext == DB_EXTENSION && !release.is_empty() && !species.is_empty() =>
        {
            Some((release.to_string(), species.to_string()))
        }
        _ => None,
    }
}

/// Temporary `lookup_ids_XXXXXX` table holding the IDs a query is bounded by.
///
/// The table is dropped when the guard goes out of scope, on success and error paths alike.
pub struct TempIdTable<'a> {
    connection: &'a Connection,
    name: String,
}

impl<'a> TempIdTable<'a> {
    fn create<I, S>(connection: &'a Connection, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(|c| char::from(c).to_ascii_uppercase())
            .collect();
        let name = format!("lookup_ids_{}", suffix);

        connection.execute_batch(&format!(
            "CREATE TEMPORARY TABLE {} (ensembl_id TEXT, PRIMARY KEY (ensembl_id));",
            name
        ))?;
        // From here on Drop owns the cleanup
        let table = Self { connection, name };

        {
            let mut insert = connection.prepare(&format!("INSERT OR IGNORE INTO {} VALUES (?1)", table.name))?;
            for id in ids {
                insert.execute([id.as_ref()])?;
            }
        }

        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TempIdTable<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.connection.execute_batch(&format!("DROP TABLE IF EXISTS temp.{};", self.name)) {
            log::warn!("Unable to drop temporary table {}: {}", self.name, e);
        }
    }
}
