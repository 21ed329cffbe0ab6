//! Exon interval union and run-length encoding for genome browser tracks

use crate::types::{GenomicPos, Strand};
use serde::{Deserialize, Serialize};

/// Merge overlapping `(start, end)` intervals with a +1/-1 sweep.
///
/// At equal coordinates starts are processed before ends, so exactly abutting
/// intervals merge into one.
pub fn union_of(intervals: &[(GenomicPos, GenomicPos)]) -> Vec<(GenomicPos, GenomicPos)> {
    // (coordinate, 0 = start / 1 = end)
    let mut edges: Vec<(GenomicPos, u8)> = intervals
        .iter()
        .flat_map(|&(start, end)| [(start, 0), (end, 1)])
        .collect();
    edges.sort_unstable();

    let mut merged = Vec::new();
    let mut depth: i64 = 0;
    let mut open = 0;

    for (pos, kind) in edges {
        if depth == 0 {
            open = pos;
        }
        depth += if kind == 0 { 1 } else { -1 };
        if depth == 0 {
            merged.push((open, pos));
        }
    }

    merged
}

/// Union of exons given as parallel start and end columns; unpaired entries are ignored
pub fn compute_union(starts: &[GenomicPos], ends: &[GenomicPos]) -> Vec<(GenomicPos, GenomicPos)> {
    let intervals: Vec<_> = starts.iter().copied().zip(ends.iter().copied()).collect();
    union_of(&intervals)
}

/// Alternating gap and exon lengths, each measured from the end of the previous one
pub fn run_length_encode(reference: GenomicPos, intervals: &[(GenomicPos, GenomicPos)]) -> Vec<GenomicPos> {
    let mut reference = reference;
    let mut deltas = Vec::with_capacity(intervals.len() * 2);

    for &(start, end) in intervals {
        deltas.push(start - reference);
        reference = start;
        deltas.push(end - reference);
        reference = end;
    }

    deltas
}

/// Inverse of [`run_length_encode`]; a trailing odd delta is ignored
pub fn run_length_decode(reference: GenomicPos, deltas: &[GenomicPos]) -> Vec<(GenomicPos, GenomicPos)> {
    let mut reference = reference;
    deltas
        .chunks_exact(2)
        .map(|pair| {
            let start = reference + pair[0];
            let end = start + pair[1];
            reference = end;
            (start, end)
        })
        .collect()
}

/// Per-gene exon layout relative to the transcription start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonInfo {
    pub id: String,
    pub symbol: Option<String>,
    pub chr: String,
    pub start: GenomicPos,
    pub length: GenomicPos,
    pub strand: Strand,
    pub exons: Vec<GenomicPos>,
}

/// Positional form: `[id, symbol, chr, start, length, strand, "d1,d2,..."]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedExonInfo(
    pub String,
    pub Option<String>,
    pub String,
    pub GenomicPos,
    pub GenomicPos,
    pub Strand,
    pub String,
);

impl ExonInfo {
    /// Build from the gene span and its raw exon coordinates
    pub fn from_exons(
        id: String,
        symbol: Option<String>,
        chr: String,
        (start, end): (GenomicPos, GenomicPos),
        strand: Strand,
        exon_starts: &[GenomicPos],
        exon_ends: &[GenomicPos],
    ) -> Self {
        let exons = run_length_encode(start, &compute_union(exon_starts, exon_ends));
        Self {
            id,
            symbol,
            chr,
            start,
            length: end - start,
            strand,
            exons,
        }
    }

    pub fn compress(self) -> CompressedExonInfo {
        let exons = self
            .exons
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        CompressedExonInfo(self.id, self.symbol, self.chr, self.start, self.length, self.strand, exons)
    }
}

/// Either form, as requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExonInfoRecord {
    Labeled(ExonInfo),
    Compressed(CompressedExonInfo),
}
