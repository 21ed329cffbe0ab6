mod common;

use common::*;
use ensimpl_core::genes::{self, ENSEMBL_HOMOLOG_SOURCE_DB};
use ensimpl_core::registry::Registry;
use ensimpl_core::{EnsimplError, ExonInfoRecord, GeneOrder, Strand};

fn request(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn detailed_gene_is_fully_assembled_and_sorted() {
    let (_fixture, db) = mouse_db();
    let ids = request(&[PAX6]);
    let result = genes::get(&db, Some(ids.as_slice()), GeneOrder::Id, true).unwrap();

    let gene = result[PAX6].as_ref().expect("Pax6 assembled");
    assert_eq!(gene.symbol.as_deref(), Some("Pax6"));
    assert_eq!(gene.chromosome, "2");
    assert_eq!(gene.strand, Strand::Forward);
    assert_eq!(gene.homolog_ids[0].homolog_symbol, "PAX6");

    let transcripts = gene.transcripts.as_ref().unwrap();
    let transcript_ids: Vec<&str> = transcripts.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(transcript_ids, vec![PAX6_T1, PAX6_T2]);

    for transcript in transcripts {
        let numbers: Vec<i64> = transcript.exons.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3], "exons of {}", transcript.id);
    }
    assert_eq!(transcripts[0].symbol.as_deref(), Some("Pax6-201"));
    assert_eq!(transcripts[0].protein.as_ref().map(|p| p.id.as_str()), Some(PAX6_P1));
    assert!(transcripts[1].protein.is_none());

    let homologs = gene.homologs.as_ref().unwrap();
    assert_eq!(homologs.len(), 1);
    assert_eq!(homologs[0].homolog_id, PAX6_HUMAN);
    assert!(homologs[0].high_confidence);
}

#[test]
fn summary_lookup_has_no_transcripts() {
    let (_fixture, db) = mouse_db();
    let ids = request(&[GNAI3]);
    let result = genes::get(&db, Some(ids.as_slice()), GeneOrder::Id, false).unwrap();

    let gene = result[GNAI3].as_ref().unwrap();
    assert_eq!(gene.strand, Strand::Reverse);
    assert!(gene.transcripts.is_none());
    assert!(gene.homologs.is_none());
}

#[test]
fn results_follow_request_order_and_accept_any_stable_id() {
    let (_fixture, db) = mouse_db();
    let ids = request(&[PAX6_T2, "ENSMUSG99999999999", GNAI3, "ENSMUSE00000000012"]);
    let result = genes::get(&db, Some(ids.as_slice()), GeneOrder::Id, false).unwrap();

    let keys: Vec<&str> = result.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![PAX6_T2, "ENSMUSG99999999999", GNAI3, "ENSMUSE00000000012"]);

    assert_eq!(result[PAX6_T2].as_ref().unwrap().id, PAX6);
    assert!(result["ENSMUSG99999999999"].is_none());
    assert_eq!(result["ENSMUSE00000000012"].as_ref().unwrap().id, PAX6);
}

#[test]
fn all_genes_by_id_or_position() {
    let (_fixture, db) = mouse_db();

    let by_id = genes::get(&db, None, GeneOrder::Id, false).unwrap();
    let keys: Vec<&str> = by_id.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![GNAI3, XGENE, TENTH, PAX6, PAX6OS1]);

    let by_position = genes::get(&db, None, GeneOrder::Position, true).unwrap();
    let keys: Vec<&str> = by_position.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![PAX6, PAX6OS1, GNAI3, TENTH, XGENE]);
    assert!(by_position.values().all(|g| g.as_ref().unwrap().transcripts.is_some()));
}

#[test]
fn ids_for_ensembl_gene() {
    let (_fixture, db) = mouse_db();
    let ids = request(&[PAX6]);
    let result = genes::get_ids(&db, Some(ids.as_slice()), "Ensembl").unwrap();

    let entry = &result[PAX6];
    assert_eq!(entry["Ensembl"], vec![PAX6]);
    assert_eq!(entry["MGI"], vec!["MGI:97490"]);
    assert_eq!(entry["EntrezGene"], vec!["18508"]);
    assert_eq!(entry[ENSEMBL_HOMOLOG_SOURCE_DB], vec![PAX6_HUMAN]);
}

#[test]
fn ids_for_homolog_come_from_homolog_table() {
    let (_fixture, db) = mouse_db();
    let ids = request(&[PAX6_HUMAN]);
    let result = genes::get_ids(&db, Some(ids.as_slice()), ENSEMBL_HOMOLOG_SOURCE_DB).unwrap();

    assert_eq!(result.len(), 1);
    let entry = &result[PAX6_HUMAN];
    assert_eq!(entry["Ensembl"], vec![PAX6]);
    assert_eq!(entry[ENSEMBL_HOMOLOG_SOURCE_DB], vec![PAX6_HUMAN]);
}

#[test]
fn ids_by_external_db_and_for_all_genes() {
    let (_fixture, db) = mouse_db();
    let ids = request(&["MGI:95773"]);
    let result = genes::get_ids(&db, Some(ids.as_slice()), "MGI").unwrap();
    assert_eq!(result["MGI:95773"]["Ensembl"], vec![GNAI3]);

    let all = genes::get_ids(&db, None, "Ensembl").unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[XGENE].len(), 1);
    assert_eq!(all[XGENE]["Ensembl"], vec![XGENE]);
}

#[test]
fn invalid_source_db_lists_valid_values() {
    let (_fixture, db) = mouse_db();

    match genes::get_ids(&db, None, "HGNC") {
        Err(EnsimplError::InvalidSourceDb { source_db, valid }) => {
            assert_eq!(source_db, "HGNC");
            assert_eq!(valid, vec!["Ensembl", "Ensembl_homolog", "MGI", "EntrezGene"]);
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert!(matches!(
        genes::random_ids(&db, "Bogus", 3),
        Err(EnsimplError::InvalidSourceDb { .. })
    ));
}

#[test]
fn valid_source_dbs_lead_with_ensembl_namespaces() {
    let (_fixture, db) = mouse_db();
    assert_eq!(
        genes::valid_source_dbs(&db).unwrap(),
        vec!["Ensembl", "Ensembl_homolog", "MGI", "EntrezGene"]
    );
}

#[test]
fn random_ids_are_drawn_from_source_db() {
    let (_fixture, db) = mouse_db();

    let ensembl = genes::random_ids(&db, "Ensembl", 3).unwrap();
    assert_eq!(ensembl.len(), 3);
    let all = [PAX6, PAX6OS1, GNAI3, XGENE, TENTH];
    assert!(ensembl.iter().all(|id| all.contains(&id.as_str())));

    let mut mgi = genes::random_ids(&db, "MGI", 10).unwrap();
    mgi.sort();
    assert_eq!(mgi, vec!["MGI:1916998", "MGI:95773", "MGI:97490"]);
}

#[test]
fn history_across_releases() {
    let fixture = Fixture::new();
    for release in ["99", "100", "102"] {
        fixture.add_db(release, "Mm", "GRCm38");
    }
    let registry = Registry::discover(fixture.path()).unwrap();
    let mut databases = registry.history_databases("Mm", "99", "102");
    // an unreadable store is skipped
    databases.push(("101".to_string(), missing_db(&fixture)));

    let history = genes::get_history(&databases, PAX6, false);
    let releases: Vec<&str> = history.keys().map(String::as_str).collect();
    assert_eq!(releases, vec!["102", "100", "99"]);
    assert!(history["100"][PAX6].is_some());
}

#[test]
fn exon_info_labeled_and_compressed() {
    let (_fixture, db) = mouse_db();

    let labeled = genes::exon_info(&db, Some("2"), false).unwrap();
    assert_eq!(labeled.len(), 2);
    match &labeled[0] {
        ExonInfoRecord::Labeled(info) => {
            assert_eq!(info.id, PAX6);
            assert_eq!(info.symbol.as_deref(), Some("Pax6"));
            assert_eq!(info.start, 105668900);
            assert_eq!(info.length, 28464);
            assert_eq!(info.strand, Strand::Forward);
            assert_eq!(info.exons, vec![0, 100, 1000, 800, 9200, 1000, 8000, 1000, 7000, 364]);
        }
        other => panic!("expected labeled form, got {:?}", other),
    }

    let compressed = genes::exon_info(&db, None, true).unwrap();
    assert_eq!(compressed.len(), 5);
    let json = serde_json::to_value(&compressed[0]).unwrap();
    assert_eq!(json[0], PAX6);
    assert_eq!(json[5], "+");
    assert_eq!(json[6], "0,100,1000,800,9200,1000,8000,1000,7000,364");
}

#[test]
fn missing_store_is_not_created() {
    let fixture = Fixture::new();
    let db = missing_db(&fixture);
    assert!(matches!(
        genes::get(&db, None, GeneOrder::Id, false),
        Err(EnsimplError::DatabaseNotFound { .. })
    ));
    assert!(!db.exists());
}
