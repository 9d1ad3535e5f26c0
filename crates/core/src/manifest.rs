//! Manifest reading and candidate-directory probing.
//!
//! The manifest is plain text, one record per line, whitespace-tokenised:
//! the first token is an image filename, the remaining columns are the
//! binary label flags in class-table order. Filenames are resolved against
//! the numbered shard directories; records whose image exists in none of
//! them are skipped with a warning rather than failing the run.

use crate::config::SortConfig;
use crate::labels::LabelVector;
use crate::{SortError, SortResult};
use std::fs;
use std::path::PathBuf;

/// One resolved manifest record: where the image currently lives and which
/// disease classes it belongs to.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    /// Resolved source path of the image, inside one of the shards.
    pub path: PathBuf,

    /// Multi-hot disease labels for the image.
    pub labels: LabelVector,
}

/// A parsed manifest: resolved entries in file order, plus the count of
/// records whose image was not found under any candidate directory.
#[derive(Debug)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    unresolved: usize,
}

impl Manifest {
    /// Loads the manifest named by `config` and resolves every record.
    ///
    /// Blank lines are skipped. For each record the shard directories are
    /// probed in increasing numeric order and the first existing path wins;
    /// records that resolve nowhere are logged and counted, not fatal.
    ///
    /// # Errors
    ///
    /// Returns `SortError` if:
    /// - the manifest file cannot be read
    /// - a record has a wrong label column count or a non-binary flag
    pub fn load(config: &SortConfig) -> SortResult<Self> {
        let contents = fs::read_to_string(config.manifest_path()).map_err(SortError::ManifestRead)?;

        let mut entries = Vec::new();
        let mut unresolved = 0;

        for (index, line) in contents.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let filename = match tokens.next() {
                Some(name) => name,
                None => continue,
            };

            let label_tokens: Vec<&str> = tokens.collect();
            let labels = LabelVector::parse(&label_tokens).map_err(|source| {
                SortError::MalformedRecord {
                    line: index + 1,
                    source,
                }
            })?;

            match resolve_image(config, filename) {
                Some(path) => entries.push(ManifestEntry { path, labels }),
                None => {
                    tracing::warn!("image {} not found in any candidate directory", filename);
                    unresolved += 1;
                }
            }
        }

        Ok(Self {
            entries,
            unresolved,
        })
    }

    /// Resolved entries, in manifest order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of records whose image was not found in any shard.
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Probes the shard directories in increasing numeric order and returns the
/// first existing path for `filename`.
fn resolve_image(config: &SortConfig, filename: &str) -> Option<PathBuf> {
    config.candidate_paths(filename).find(|path| path.exists())
}
