//! Discovery and resolution of the versioned annotation stores in a directory

use crate::error::{EnsimplError, Result};
use crate::meta;
use crate::store::parse_db_file_name;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the database directory
pub const ENSIMPL_DIR_ENV: &str = "ENSIMPL_DIR";

/// One immutable store, identified by release and species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    pub release: String,
    pub species: String,
    pub assembly: String,
    pub assembly_patch: String,
    pub url: Option<String>,
    pub path: PathBuf,
    /// Highest release sharing this entry's (assembly, species)
    pub greedy_release: String,
}

impl DatabaseEntry {
    pub fn key(&self) -> String {
        registry_key(&self.release, &self.species)
    }
}

fn registry_key(release: &str, species: &str) -> String {
    format!("{}:{}", release, species)
}

/// In-memory index of every store found in one directory.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    directory: PathBuf,
    entries: Vec<DatabaseEntry>,
    by_key: HashMap<String, usize>,
}

impl Registry {
    /// Resolve the directory (argument, then `ENSIMPL_DIR`) and scan it
    pub fn from_directory(directory: Option<&Path>) -> Result<Self> {
        let directory = resolve_directory(directory)?;
        Self::discover(&directory)
    }

    /// Scan `directory` for `ensimpl.{release}.{species}.db3` files
    pub fn discover(directory: &Path) -> Result<Self> {
        let mut entries = Vec::new();

        for dir_entry in std::fs::read_dir(directory)? {
            let path = dir_entry?.path();
            let Some((file_release, file_species)) = parse_db_file_name(&path) else {
                continue;
            };
            if !path.is_file() {
                continue;
            }

            let db_meta = match meta::meta(&path) {
                Ok(db_meta) => db_meta,
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            entries.push(DatabaseEntry {
                release: non_empty_or(db_meta.release, file_release),
                species: non_empty_or(db_meta.species, file_species),
                assembly: db_meta.assembly,
                assembly_patch: db_meta.assembly_patch,
                url: db_meta.url,
                path,
                greedy_release: String::new(),
            });
        }

        stamp_greedy_releases(&mut entries);
        entries.sort_by(|a, b| natural_cmp(&b.release, &a.release).then_with(|| a.species.cmp(&b.species)));

        let by_key = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.key(), idx))
            .collect();

        log::info!("Found {} database(s) in {}", entries.len(), directory.display());

        Ok(Self {
            directory: directory.to_path_buf(),
            entries,
            by_key,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All entries, newest release first
    pub fn entries(&self) -> &[DatabaseEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for `release:species`, following the greedy release if asked
    pub fn entry(&self, release: &str, species: &str, greedy: bool) -> Result<&DatabaseEntry> {
        let mut key = registry_key(release, species);

        if greedy {
            if let Some(entry) = self.by_key.get(&key).map(|&idx| &self.entries[idx]) {
                key = registry_key(&entry.greedy_release, species);
            }
        }

        self.by_key
            .get(&key)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| EnsimplError::database_not_found(key, self.directory.display().to_string()))
    }

    /// Path of the store for `release:species`
    pub fn resolve(&self, release: &str, species: &str, greedy: bool) -> Result<&Path> {
        self.entry(release, species, greedy).map(|entry| entry.path.as_path())
    }

    /// Newest entry for `species`
    pub fn latest(&self, species: &str) -> Result<&DatabaseEntry> {
        self.entries
            .iter()
            .find(|entry| entry.species == species)
            .ok_or_else(|| {
                EnsimplError::database_not_found(format!("latest:{}", species), self.directory.display().to_string())
            })
    }

    /// Stores of `species` whose release lies in the inclusive range, newest first
    pub fn history_databases(&self, species: &str, release_start: &str, release_end: &str) -> Vec<(String, PathBuf)> {
        let (low, high) = match natural_cmp(release_start, release_end) {
            Ordering::Greater => (release_end, release_start),
            _ => (release_start, release_end),
        };

        self.entries
            .iter()
            .filter(|entry| entry.species == species)
            .filter(|entry| natural_cmp(&entry.release, low) != Ordering::Less)
            .filter(|entry| natural_cmp(&entry.release, high) != Ordering::Greater)
            .map(|entry| (entry.release.clone(), entry.path.clone()))
            .collect()
    }
}

/// Pick the database directory: explicit argument first, then `ENSIMPL_DIR`
pub fn resolve_directory(directory: Option<&Path>) -> Result<PathBuf> {
    let from_env = std::env::var_os(ENSIMPL_DIR_ENV).map(PathBuf::from);
    resolve_directory_from(directory, from_env)
}

fn resolve_directory_from(directory: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    let directory = directory
        .map(Path::to_path_buf)
        .or(from_env.filter(|p| !p.as_os_str().is_empty()))
        .ok_or_else(|| {
            EnsimplError::configuration(format!(
                "{} not configured in environment or directory was not supplied as an option",
                ENSIMPL_DIR_ENV
            ))
        })?;

    let directory = if directory.is_absolute() {
        directory
    } else {
        std::env::current_dir()?.join(directory)
    };

    if !directory.exists() {
        return Err(EnsimplError::configuration(format!(
            "specified directory does not exist: {}",
            directory.display()
        )));
    }
    if !directory.is_dir() {
        return Err(EnsimplError::configuration(format!(
            "specified path is not a directory: {}",
            directory.display()
        )));
    }

    Ok(directory)
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn stamp_greedy_releases(entries: &mut [DatabaseEntry]) {
    let mut greedy: HashMap<(String, String), String> = HashMap::new();

    for entry in entries.iter() {
        let group = (entry.assembly.clone(), entry.species.clone());
        match greedy.get(&group) {
            Some(best) if natural_cmp(best, &entry.release) != Ordering::Less => {}
            _ => {
                greedy.insert(group, entry.release.clone());
            }
        }
    }

    for entry in entries.iter_mut() {
        if let Some(release) = greedy.get(&(entry.assembly.clone(), entry.species.clone())) {
            entry.greedy_release = release.clone();
        }
    }
}

/// Compare strings treating runs of digits as numbers, so "9" < "10"
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chunks = chunks(a);
    let mut b_chunks = chunks(b);

    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x_num), Ok(y_num)) => x_num.cmp(&y_num).then_with(|| x.len().cmp(&y.len())),
                    _ => x.to_lowercase().cmp(&y.to_lowercase()).then_with(|| x.cmp(y)),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Split into alternating digit / non-digit runs
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != numeric)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}
