//! # cxr-core
//!
//! Dataset-sorting logic for the cxr chest-radiograph organiser.
//!
//! A labelled chest-radiograph dataset arrives as a flat manifest plus a tree
//! of numbered shard directories. This crate reads the manifest, resolves each
//! image filename to the shard that actually holds it, and moves every image
//! into one destination folder per disease class it is labelled with.
//!
//! ## Pipeline
//!
//! A single forward pass, entry by entry, with no retry and no rollback:
//!
//! 1. [`Manifest::load`] parses the manifest and resolves each filename by
//!    probing the numbered shard directories in increasing order.
//! 2. [`create_class_dirs`] creates one destination folder per disease class,
//!    idempotently.
//! 3. [`sort_dataset`] moves each resolved image into the folder of every
//!    active class, logging per-move outcomes and returning a [`MoveReport`].
//!
//! ## On-disk layout
//!
//! ```text
//! <data_dir>/
//! ├── images_001/
//! │   └── images/          # flat set of image files
//! ├── images_002/
//! │   └── images/
//! └── …
//!
//! <output_dir>/
//! ├── Atelectasis/
//! ├── Cardiomegaly/
//! └── …                    # one folder per disease class
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use cxr_core::{sort_dataset, SortConfig};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SortConfig::new(
//!     PathBuf::from("images"),
//!     PathBuf::from("val_list.txt"),
//!     PathBuf::from("DataSetDoencasPulmonares"),
//!     1..=12,
//! )?;
//! let report = sort_dataset(&config)?;
//! println!("moved {} files", report.moved);
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod labels;
mod layout;
mod manifest;
mod mover;

pub use config::SortConfig;
pub use constants::{
    DEFAULT_DATA_DIR, DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIR, DEFAULT_SHARD_MAX, DEFAULT_SHARD_MIN,
};
pub use labels::{LabelError, LabelVector, CLASS_NAMES, N_CLASSES};
pub use layout::create_class_dirs;
pub use manifest::{Manifest, ManifestEntry};
pub use mover::{sort_dataset, MoveReport};

/// Errors that can occur while sorting the dataset.
///
/// Only setup failures are fatal. Per-entry conditions (an image missing from
/// every shard, a move that fails) are logged and tallied in [`MoveReport`]
/// instead of being raised here.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// Data directory does not exist or is not a directory
    #[error("invalid data directory: {0}")]
    InvalidDataDir(String),

    /// Shard range selects no candidate directories
    #[error("invalid shard range: {0}")]
    InvalidShardRange(String),

    /// Manifest file could not be read
    #[error("failed to read manifest: {0}")]
    ManifestRead(std::io::Error),

    /// A manifest record could not be parsed
    #[error("malformed manifest record at line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: LabelError,
    },

    /// A class destination directory could not be created
    #[error("failed to create class directory: {0}")]
    ClassDirCreation(std::io::Error),
}

pub type SortResult<T> = std::result::Result<T, SortError>;
