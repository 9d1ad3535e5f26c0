//! Destination folder initialisation.

use crate::labels::CLASS_NAMES;
use crate::{SortError, SortResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Creates one destination directory per disease class under `output_dir`.
///
/// Idempotent: directories that already exist are left untouched, so the
/// initialiser can run before every pass. Returns the class directory paths
/// in class-table order.
///
/// # Errors
///
/// Returns `SortError::ClassDirCreation` if a directory cannot be created.
pub fn create_class_dirs(output_dir: &Path) -> SortResult<Vec<PathBuf>> {
    let mut dirs = Vec::with_capacity(CLASS_NAMES.len());

    for class_name in CLASS_NAMES {
        let dir = output_dir.join(class_name);
        fs::create_dir_all(&dir).map_err(SortError::ClassDirCreation)?;
        dirs.push(dir);
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::N_CLASSES;
    use tempfile::TempDir;

    #[test]
    fn test_creates_one_dir_per_class() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("sorted");

        let dirs = create_class_dirs(&output_dir).unwrap();

        assert_eq!(dirs.len(), N_CLASSES);
        for dir in &dirs {
            assert!(dir.is_dir());
        }
        assert!(output_dir.join("Atelectasis").is_dir());
        assert!(output_dir.join("Hernia").is_dir());
    }

    #[test]
    fn test_initialiser_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("sorted");

        let first = create_class_dirs(&output_dir).unwrap();
        let second = create_class_dirs(&output_dir).unwrap();

        assert_eq!(first, second);
    }
}
