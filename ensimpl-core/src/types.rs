use serde::{Deserialize, Serialize};

/// Base-pair coordinate as stored in the annotation databases (1-based, inclusive)
pub type GenomicPos = i64;

/// Separator between tokens of a multi-valued text column
pub const LIST_SEPARATOR: &str = "||";

/// Separator between the sub-fields of a single token
pub const FIELD_SEPARATOR: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", from = "char")]
pub enum Strand {
    Forward,
    Reverse,
}

impl From<bool> for Strand {
    fn from(forward: bool) -> Self {
        if forward {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

impl From<Strand> for bool {
    fn from(strand: Strand) -> Self {
        matches!(strand, Strand::Forward)
    }
}

/// Storage encodes strand as a signed integer; anything positive is forward
impl From<i64> for Strand {
    fn from(value: i64) -> Self {
        Strand::from(value > 0)
    }
}

impl From<char> for Strand {
    fn from(c: char) -> Self {
        match c {
            '-' => Strand::Reverse,
            _ => Strand::Forward,
        }
    }
}

impl From<Strand> for char {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Cross-reference into an external database, e.g. `MGI/MGI:87853`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    pub db: String,
    pub db_id: String,
}

impl ExternalId {
    pub fn parse_list(value: Option<&str>) -> Vec<Self> {
        split_pairs(value)
            .into_iter()
            .map(|(db, db_id)| Self { db, db_id })
            .collect()
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.db, FIELD_SEPARATOR, self.db_id)
    }
}

/// Homolog gene reference carried on the gene row itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomologRef {
    pub homolog_id: String,
    pub homolog_symbol: String,
}

impl HomologRef {
    pub fn parse_list(value: Option<&str>) -> Vec<Self> {
        split_pairs(value)
            .into_iter()
            .map(|(homolog_id, homolog_symbol)| Self {
                homolog_id,
                homolog_symbol,
            })
            .collect()
    }
}

/// Split a `||`-joined column into its tokens. Empty or missing values yield an empty list.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v
            .split(LIST_SEPARATOR)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn split_pairs(value: Option<&str>) -> Vec<(String, String)> {
    split_list(value)
        .into_iter()
        .map(|token| match token.split_once(FIELD_SEPARATOR) {
            Some((first, second)) => (first.to_string(), second.to_string()),
            None => {
                log::warn!("Malformed list token without '{}': {}", FIELD_SEPARATOR, token);
                (token, String::new())
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exon {
    pub id: String,
    pub version: Option<i64>,
    pub start: GenomicPos,
    pub end: GenomicPos,
    pub number: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    pub id: String,
    pub version: Option<i64>,
    pub start: GenomicPos,
    pub end: GenomicPos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: String,
    pub version: Option<i64>,
    pub symbol: Option<String>,
    pub start: GenomicPos,
    pub end: GenomicPos,
    pub exons: Vec<Exon>,
    pub protein: Option<Protein>,
}

impl Transcript {
    pub fn new(id: String) -> Self {
        Self {
            id,
            version: None,
            symbol: None,
            start: 0,
            end: 0,
            exons: Vec::new(),
            protein: None,
        }
    }
}

/// Homology record from the homolog table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homolog {
    pub ensembl_id: String,
    pub ensembl_version: Option<i64>,
    pub ensembl_symbol: Option<String>,
    pub query_id_perc: Option<f64>,
    pub homolog_id: String,
    pub homolog_version: Option<i64>,
    pub homolog_symbol: Option<String>,
    pub target_id_perc: Option<f64>,
    pub dn: Option<f64>,
    pub ds: Option<f64>,
    pub goc_score: Option<f64>,
    pub wga_coverage: Option<f64>,
    pub high_confidence: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub id: String,
    pub version: Option<i64>,
    pub species_id: String,
    pub chromosome: String,
    pub start: GenomicPos,
    pub end: GenomicPos,
    pub strand: Strand,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub synonyms: Vec<String>,
    pub external_ids: Vec<ExternalId>,
    pub homolog_ids: Vec<HomologRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<Transcript>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homologs: Option<Vec<Homolog>>,
}

impl Gene {
    pub fn new(id: String) -> Self {
        Self {
            id,
            version: None,
            species_id: String::new(),
            chromosome: String::new(),
            start: 0,
            end: 0,
            strand: Strand::Forward,
            symbol: None,
            name: None,
            synonyms: Vec::new(),
            external_ids: Vec::new(),
            homolog_ids: Vec::new(),
            transcripts: None,
            homologs: None,
        }
    }

    pub fn position(&self) -> String {
        format!("{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_conversions() {
        assert_eq!(Strand::from(1i64), Strand::Forward);
        assert_eq!(Strand::from(-1i64), Strand::Reverse);
        assert_eq!(Strand::from(0i64), Strand::Reverse);
        assert_eq!(char::from(Strand::Reverse), '-');
        assert_eq!(serde_json::to_string(&Strand::Forward).unwrap(), "\"+\"");
    }

    #[test]
    fn test_split_list_tolerates_empty() {
        assert!(split_list(None).is_empty());
        assert!(split_list(Some("")).is_empty());
        assert_eq!(split_list(Some("Pax6||Dey")), vec!["Pax6", "Dey"]);
    }

    #[test]
    fn test_external_id_decoding() {
        let ids = ExternalId::parse_list(Some("MGI/12345||HGNC/6789"));
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].db, "MGI");
        assert_eq!(ids[0].db_id, "12345");
        assert_eq!(ids[1].to_string(), "HGNC/6789");

        let nested = ExternalId::parse_list(Some("MGI/MGI:97490"));
        assert_eq!(nested[0].db_id, "MGI:97490");
    }

    #[test]
    fn test_homolog_ref_decoding() {
        let refs = HomologRef::parse_list(Some("ENSG00000007372/PAX6"));
        assert_eq!(refs[0].homolog_id, "ENSG00000007372");
        assert_eq!(refs[0].homolog_symbol, "PAX6");
    }
}
