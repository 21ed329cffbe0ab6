//! Ensimpl Core Library
//!
//! Registry, metadata, search and gene assembly over versioned Ensembl annotation stores.

pub mod error;
pub mod types;
pub mod region;
pub mod classify;
pub mod store;
pub mod meta;
pub mod registry;
pub mod search;
pub mod exons;
pub mod genes;

// Re-export commonly used types and functions
pub use error::{EnsimplError, Result};
pub use types::{Exon, ExternalId, Gene, GenomicPos, Homolog, HomologRef, Protein, Strand, Transcript};
pub use region::{Region, UnitMultipliers};
pub use classify::{classify, QuerySpec, TermClassifier};
pub use registry::{DatabaseEntry, Registry};
pub use search::{search, Match, SearchEngine, SearchResult};
pub use exons::{compute_union, run_length_encode, union_of, ExonInfo, ExonInfoRecord};
pub use genes::{GeneMap, GeneOrder, IdMap};

/// Version information for the Ensimpl core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
