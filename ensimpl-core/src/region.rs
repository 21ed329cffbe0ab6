//! Genomic region expressions such as `chr7:3000000-4000000`, `7:3M-4M` or `X 10k-20k`

use crate::error::{EnsimplError, Result};
use crate::types::GenomicPos;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn region_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(?:chr)?\s*([0-9]{1,2}|X|Y|MT)\s*[-:]?\s*(\d+)\s*(MB|M|K)?\s*[-:]?\s*(\d*)\s*(MB|M|K)?\s*$",
        )
        .expect("region regex is valid")
    })
}

/// Multipliers applied to the unit suffix of a start or end coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMultipliers {
    pub k: GenomicPos,
    pub m: GenomicPos,
    pub mb: GenomicPos,
}

impl Default for UnitMultipliers {
    fn default() -> Self {
        Self {
            k: 1_000,
            m: 1_000_000,
            mb: 1_000_000,
        }
    }
}

impl UnitMultipliers {
    fn for_suffix(&self, suffix: Option<&str>) -> GenomicPos {
        match suffix.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("k") => self.k,
            Some("m") => self.m,
            Some("mb") => self.mb,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub chromosome: String,
    pub start: GenomicPos,
    pub end: GenomicPos,
}

impl Region {
    pub fn new<S: Into<String>>(chromosome: S, start: GenomicPos, end: GenomicPos) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
        }
    }

    /// Parse with the default unit multipliers
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &UnitMultipliers::default())
    }

    /// Parse a region expression. Start and end are not checked against each other.
    pub fn parse_with(text: &str, units: &UnitMultipliers) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EnsimplError::invalid_region("empty location"));
        }
        if !has_separator(trimmed) {
            return Err(EnsimplError::invalid_region(format!(
                "incorrect location format: {}",
                text
            )));
        }

        let caps = region_re()
            .captures(trimmed)
            .ok_or_else(|| EnsimplError::invalid_region(format!("invalid location string: {}", text)))?;

        let chromosome = caps
            .get(1)
            .map(|m| m.as_str().to_ascii_uppercase())
            .ok_or_else(|| EnsimplError::invalid_region(format!("no chromosome in: {}", text)))?;

        let start = parse_coordinate(caps.get(2).map(|m| m.as_str()), text)?
            .saturating_mul(units.for_suffix(caps.get(3).map(|m| m.as_str())));
        let end = parse_coordinate(caps.get(4).map(|m| m.as_str()), text)?
            .saturating_mul(units.for_suffix(caps.get(5).map(|m| m.as_str())));

        Ok(Self {
            chromosome,
            start,
            end,
        })
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

fn has_separator(text: &str) -> bool {
    text.contains(['-', ' ', ':'])
}

fn parse_coordinate(value: Option<&str>, text: &str) -> Result<GenomicPos> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EnsimplError::invalid_region(format!("missing coordinate in: {}", text)))?
        .parse::<GenomicPos>()
        .map_err(|e| EnsimplError::invalid_region(format!("bad coordinate in {}: {}", text, e)))
}
