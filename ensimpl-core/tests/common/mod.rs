//! Builds small but complete annotation stores for integration tests
#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PAX6: &str = "ENSMUSG00000027168";
pub const PAX6OS1: &str = "ENSMUSG00000027169";
pub const GNAI3: &str = "ENSMUSG00000000001";
pub const XGENE: &str = "ENSMUSG00000000002";
pub const TENTH: &str = "ENSMUSG00000000003";

pub const PAX6_T1: &str = "ENSMUST00000111111";
pub const PAX6_T2: &str = "ENSMUST00000111112";
pub const PAX6_P1: &str = "ENSMUSP00000111111";
pub const PAX6_HUMAN: &str = "ENSG00000007372";

const SCHEMA: &str = r#"
CREATE TABLE meta_info (meta_key TEXT, meta_value TEXT, species_id TEXT);
CREATE TABLE search_ranking (ranking_id TEXT PRIMARY KEY, score INTEGER, description TEXT);
CREATE TABLE ensembl_genes (
    ensembl_id TEXT PRIMARY KEY, ensembl_version INTEGER, species_id TEXT,
    symbol TEXT, name TEXT, synonyms TEXT, external_ids TEXT,
    chromosome TEXT, start_position INTEGER, end_position INTEGER,
    strand INTEGER, homolog_ids TEXT);
CREATE TABLE ensembl_gtpe (
    gene_id TEXT, transcript_id TEXT, protein_id TEXT, ensembl_id TEXT,
    ensembl_id_version INTEGER, ensembl_symbol TEXT, type_key TEXT, seqid TEXT,
    "start" INTEGER, "end" INTEGER, strand INTEGER, exon_number INTEGER);
CREATE TABLE ensembl_genes_lookup (
    ensembl_genes_lookup_key INTEGER PRIMARY KEY, ensembl_gene_id TEXT,
    lookup_value TEXT, ranking_id TEXT, species_id TEXT);
CREATE VIRTUAL TABLE ensembl_search USING fts4(lookup_value, ensembl_genes_lookup_key);
CREATE TABLE ensembl_gene_ids (ensembl_id TEXT, external_id TEXT, external_db TEXT);
CREATE TABLE ensembl_homologs (
    ensembl_id TEXT, ensembl_version INTEGER, ensembl_symbol TEXT, perc_id REAL,
    homolog_id TEXT, homolog_version INTEGER, homolog_symbol TEXT, homolog_perc_id REAL,
    dn REAL, ds REAL, goc_score REAL, wga_coverage REAL, is_high_confidence INTEGER);
CREATE TABLE chromosomes (chromosome TEXT, chromosome_num INTEGER, chromosome_length INTEGER);
CREATE TABLE karyotypes (chromosome TEXT, seq_region_start INTEGER, seq_region_end INTEGER, band TEXT, stain TEXT);
CREATE TABLE external_dbs (external_db_key INTEGER PRIMARY KEY, external_db_id TEXT, external_db_name TEXT, ranking_id TEXT);
"#;

const RANKINGS: [(&str, i64, &str); 6] = [
    ("EG", 10000, "Ensembl Gene ID"),
    ("ET", 9500, "Ensembl Transcript ID"),
    ("MI", 9000, "MGI ID"),
    ("GS", 8000, "Gene Symbol"),
    ("GY", 7000, "Gene Synonym"),
    ("GN", 6000, "Gene Name"),
];

/// A temporary directory holding any number of fixture stores
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create fixture dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `ensimpl.{release}.{species}.db3` populated with the standard gene set
    pub fn add_db(&self, release: &str, species: &str, assembly: &str) -> PathBuf {
        let path = self.dir.path().join(format!("ensimpl.{}.{}.db3", release, species));
        let conn = Connection::open(&path).expect("create fixture db");
        populate(&conn, release, species, assembly).expect("populate fixture db");
        path
    }
}

/// A single mouse store, release 102
pub fn mouse_db() -> (Fixture, PathBuf) {
    let fixture = Fixture::new();
    let path = fixture.add_db("102", "Mm", "GRCm38");
    (fixture, path)
}

fn populate(conn: &Connection, release: &str, species: &str, assembly: &str) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;

    for (key, value) in [
        ("release", release),
        ("assembly", assembly),
        ("assembly_patch", "p6"),
        ("url", "ftp://ftp.ensembl.org/pub"),
    ] {
        conn.execute(
            "INSERT INTO meta_info VALUES (?1, ?2, ?3)",
            params![key, value, species],
        )?;
    }

    for (id, score, description) in RANKINGS {
        conn.execute(
            "INSERT INTO search_ranking VALUES (?1, ?2, ?3)",
            params![id, score, description],
        )?;
    }

    let genes: [(&str, &str, &str, &str, &str, i64, i64, i64, &str, &str); 5] = [
        (
            PAX6, "Pax6", "paired box 6", "Dey||Pax-6", "2", 105668900, 105697364, 1,
            "MGI/MGI:97490||EntrezGene/18508", "ENSG00000007372/PAX6",
        ),
        (PAX6OS1, "Pax6os1", "Pax6 opposite strand 1", "", "2", 105690000, 105700000, -1, "MGI/MGI:1916998", ""),
        (
            GNAI3, "Gnai3", "guanine nucleotide binding protein", "Gnai-3", "3", 108107280, 108146146, -1,
            "MGI/MGI:95773", "ENSG00000065135/GNAI3",
        ),
        (XGENE, "Xgene", "x linked gene", "Zfp1", "X", 10000, 20000, 1, "", ""),
        (TENTH, "Tenth", "tenth gene", "Gn||Zfp2", "10", 3000000, 3500000, 1, "", ""),
    ];
    for (id, symbol, name, synonyms, chr, start, end, strand, external_ids, homolog_ids) in genes {
        conn.execute(
            "INSERT INTO ensembl_genes VALUES (?1, 1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![id, species, symbol, name, synonyms, external_ids, chr, start, end, strand, homolog_ids],
        )?;
        gtpe(conn, id, None, None, id, Some(symbol), "EG", chr, start, end, strand, None)?;
    }

    // Pax6: two transcripts with exons stored out of numeric order
    gtpe(conn, PAX6, Some(PAX6_T2), None, PAX6_T2, Some("Pax6-202"), "ET", "2", 105670000, 105690000, 1, None)?;
    gtpe(conn, PAX6, Some(PAX6_T2), None, "ENSMUSE00000000023", None, "EE", "2", 105689000, 105690000, 1, Some(3))?;
    gtpe(conn, PAX6, Some(PAX6_T2), None, "ENSMUSE00000000021", None, "EE", "2", 105670200, 105670800, 1, Some(1))?;
    gtpe(conn, PAX6, Some(PAX6_T2), None, "ENSMUSE00000000022", None, "EE", "2", 105680000, 105681000, 1, Some(2))?;
    gtpe(conn, PAX6, Some(PAX6_T1), None, PAX6_T1, Some("Pax6-201"), "ET", "2", 105668900, 105697364, 1, None)?;
    gtpe(conn, PAX6, Some(PAX6_T1), None, "ENSMUSE00000000012", None, "EE", "2", 105670000, 105670500, 1, Some(2))?;
    gtpe(conn, PAX6, Some(PAX6_T1), None, "ENSMUSE00000000013", None, "EE", "2", 105697000, 105697364, 1, Some(3))?;
    gtpe(conn, PAX6, Some(PAX6_T1), None, "ENSMUSE00000000011", None, "EE", "2", 105668900, 105669000, 1, Some(1))?;
    gtpe(conn, PAX6, Some(PAX6_T1), Some(PAX6_P1), PAX6_P1, None, "EP", "2", 105668950, 105697000, 1, None)?;
    // Unknown discriminator, skipped during assembly
    gtpe(conn, PAX6, Some(PAX6_T1), None, "ENSMUSU00000000001", None, "EU", "2", 1, 2, 1, None)?;

    gtpe(conn, GNAI3, Some("ENSMUST00000000001"), None, "ENSMUST00000000001", Some("Gnai3-201"), "ET", "3", 108107280, 108146146, -1, None)?;
    gtpe(conn, GNAI3, Some("ENSMUST00000000001"), None, "ENSMUSE00000000001", None, "EE", "3", 108107280, 108109000, -1, Some(1))?;
    gtpe(conn, GNAI3, Some("ENSMUST00000000001"), None, "ENSMUSE00000000002", None, "EE", "3", 108145000, 108146146, -1, Some(2))?;

    let lookups = [
        (PAX6, PAX6, "EG"),
        (PAX6, PAX6_T1, "ET"),
        (PAX6, "Pax6", "GS"),
        (PAX6, "Dey", "GY"),
        (PAX6, "Pax-6", "GY"),
        (PAX6, "MGI:97490", "MI"),
        (PAX6, "paired box 6", "GN"),
        (PAX6OS1, PAX6OS1, "EG"),
        (PAX6OS1, "Pax6os1", "GS"),
        (PAX6OS1, "MGI:1916998", "MI"),
        (GNAI3, GNAI3, "EG"),
        (GNAI3, "Gnai3", "GS"),
        (GNAI3, "Gnai-3", "GY"),
        (GNAI3, "MGI:95773", "MI"),
        (XGENE, XGENE, "EG"),
        (XGENE, "Xgene", "GS"),
        (XGENE, "Zfp1", "GY"),
        (TENTH, TENTH, "EG"),
        (TENTH, "Tenth", "GS"),
        (TENTH, "Gn", "GY"),
        (TENTH, "Zfp2", "GY"),
    ];
    for (key, (gene_id, value, ranking_id)) in lookups.into_iter().enumerate() {
        let key = key as i64 + 1;
        conn.execute(
            "INSERT INTO ensembl_genes_lookup VALUES (?1, ?2, ?3, ?4, ?5)",
            params![key, gene_id, value, ranking_id, species],
        )?;
        conn.execute(
            "INSERT INTO ensembl_search (lookup_value, ensembl_genes_lookup_key) VALUES (?1, ?2)",
            params![value, key],
        )?;
    }

    for (id, external_id, external_db) in [
        (PAX6, "MGI:97490", "MGI"),
        (PAX6, "18508", "EntrezGene"),
        (PAX6OS1, "MGI:1916998", "MGI"),
        (GNAI3, "MGI:95773", "MGI"),
    ] {
        conn.execute(
            "INSERT INTO ensembl_gene_ids VALUES (?1, ?2, ?3)",
            params![id, external_id, external_db],
        )?;
    }

    conn.execute(
        "INSERT INTO ensembl_homologs VALUES (?1, 1, 'Pax6', 95.5, ?2, 3, 'PAX6', 94.0, 0.01, 0.2, 100.0, 1.0, 1)",
        params![PAX6, PAX6_HUMAN],
    )?;
    conn.execute(
        "INSERT INTO ensembl_homologs VALUES (?1, 1, 'Gnai3', 98.0, 'ENSG00000065135', 2, 'GNAI3', 97.0, NULL, NULL, NULL, NULL, 0)",
        params![GNAI3],
    )?;

    for (chr, num, length) in [
        ("2", 2, 182113224i64),
        ("3", 3, 160039680),
        ("10", 10, 130694993),
        ("X", 20, 171031299),
    ] {
        conn.execute(
            "INSERT INTO chromosomes VALUES (?1, ?2, ?3)",
            params![chr, num, length],
        )?;
    }

    for (chr, start, end, band, stain) in [
        ("2", 3000001, 8000000, "qA2", "gneg"),
        ("2", 1, 3000000, "qA1", "gpos100"),
        ("X", 1, 5000000, "qA1.1", "gpos100"),
    ] {
        conn.execute(
            "INSERT INTO karyotypes VALUES (?1, ?2, ?3, ?4, ?5)",
            params![chr, start, end, band, stain],
        )?;
    }

    for (key, id, name, ranking_id) in [
        (1, "MGI", "Mouse Genome Informatics", "MI"),
        (2, "EntrezGene", "NCBI Gene", "ZG"),
        (3, "HGNC", "HUGO Gene Nomenclature Committee", "HG"),
    ] {
        conn.execute(
            "INSERT INTO external_dbs VALUES (?1, ?2, ?3, ?4)",
            params![key, id, name, ranking_id],
        )?;
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn gtpe(
    conn: &Connection,
    gene_id: &str,
    transcript_id: Option<&str>,
    protein_id: Option<&str>,
    ensembl_id: &str,
    symbol: Option<&str>,
    type_key: &str,
    seqid: &str,
    start: i64,
    end: i64,
    strand: i64,
    exon_number: Option<i64>,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO ensembl_gtpe VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![gene_id, transcript_id, protein_id, ensembl_id, symbol, type_key, seqid, start, end, strand, exon_number],
    )?;
    Ok(())
}

/// Path of a store file that does not exist
pub fn missing_db(fixture: &Fixture) -> PathBuf {
    fixture.path().join("ensimpl.1.Mm.db3")
}
