//! Runtime configuration resolved once at startup.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into each stage of the sorting pass. The intent is
//! to avoid ambient process-wide constants: the class table stays fixed, but
//! every path and the shard probing range arrive through [`SortConfig`].

use crate::constants::{SHARD_DIR_PREFIX, SHARD_IMAGES_SUBDIR};
use crate::{SortError, SortResult};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Sorter configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct SortConfig {
    data_dir: PathBuf,
    manifest_path: PathBuf,
    output_dir: PathBuf,
    shard_range: RangeInclusive<u32>,
}

impl SortConfig {
    /// Create a new `SortConfig`.
    ///
    /// `shard_range` selects the numbered shard directories probed when
    /// resolving an image filename, in increasing order.
    ///
    /// # Errors
    ///
    /// Returns `SortError` if:
    /// - `data_dir` does not exist or is not a directory
    /// - `shard_range` selects no shard directories
    pub fn new(
        data_dir: PathBuf,
        manifest_path: PathBuf,
        output_dir: PathBuf,
        shard_range: RangeInclusive<u32>,
    ) -> SortResult<Self> {
        if shard_range.is_empty() {
            return Err(SortError::InvalidShardRange(format!(
                "{}..={} selects no shard directories",
                shard_range.start(),
                shard_range.end()
            )));
        }

        if !data_dir.exists() {
            return Err(SortError::InvalidDataDir(format!(
                "directory does not exist: {}",
                data_dir.display()
            )));
        }

        if !data_dir.is_dir() {
            return Err(SortError::InvalidDataDir(format!(
                "path is not a directory: {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            data_dir,
            manifest_path,
            output_dir,
            shard_range,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn shard_range(&self) -> RangeInclusive<u32> {
        self.shard_range.clone()
    }

    /// Path of the image directory inside shard `index`, e.g.
    /// `<data_dir>/images_003/images` for index 3.
    pub fn shard_dir(&self, index: u32) -> PathBuf {
        self.data_dir
            .join(format!("{}{:03}", SHARD_DIR_PREFIX, index))
            .join(SHARD_IMAGES_SUBDIR)
    }

    /// Candidate paths for `filename`, one per shard, in probing order.
    pub fn candidate_paths<'a>(&'a self, filename: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.shard_range
            .clone()
            .map(move |index| self.shard_dir(index).join(filename))
    }

    /// Destination directory for a disease class.
    pub fn class_dir(&self, class_name: &str) -> PathBuf {
        self.output_dir.join(class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn valid_config(temp: &TempDir) -> SortConfig {
        let data_dir = temp.path().join("images");
        fs::create_dir_all(&data_dir).unwrap();

        SortConfig::new(
            data_dir,
            temp.path().join("val_list.txt"),
            temp.path().join("sorted"),
            1..=12,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_data_dir_rejected() {
        let temp = TempDir::new().unwrap();

        let result = SortConfig::new(
            temp.path().join("nowhere"),
            temp.path().join("val_list.txt"),
            temp.path().join("sorted"),
            1..=12,
        );

        assert!(matches!(result, Err(SortError::InvalidDataDir(_))));
    }

    #[test]
    fn test_file_as_data_dir_rejected() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("images");
        fs::write(&file, "not a directory").unwrap();

        let result = SortConfig::new(
            file,
            temp.path().join("val_list.txt"),
            temp.path().join("sorted"),
            1..=12,
        );

        assert!(matches!(result, Err(SortError::InvalidDataDir(_))));
    }

    #[test]
    fn test_empty_shard_range_rejected() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("images");
        fs::create_dir_all(&data_dir).unwrap();

        let result = SortConfig::new(
            data_dir,
            temp.path().join("val_list.txt"),
            temp.path().join("sorted"),
            5..=4,
        );

        assert!(matches!(result, Err(SortError::InvalidShardRange(_))));
    }

    #[test]
    fn test_shard_dir_is_zero_padded() {
        let temp = TempDir::new().unwrap();
        let config = valid_config(&temp);

        assert!(config.shard_dir(7).ends_with("images_007/images"));
        assert!(config.shard_dir(12).ends_with("images_012/images"));
    }

    #[test]
    fn test_candidate_paths_in_probing_order() {
        let temp = TempDir::new().unwrap();
        let config = valid_config(&temp);

        let candidates: Vec<_> = config.candidate_paths("img.png").collect();

        assert_eq!(config.shard_range(), 1..=12);
        assert_eq!(candidates.len(), 12);
        assert!(candidates[0].ends_with("images_001/images/img.png"));
        assert!(candidates[11].ends_with("images_012/images/img.png"));
    }

    #[test]
    fn test_class_dir_under_output_root() {
        let temp = TempDir::new().unwrap();
        let config = valid_config(&temp);

        let dir = config.class_dir("Effusion");

        assert!(dir.starts_with(config.output_dir()));
        assert!(dir.ends_with("Effusion"));
    }
}
