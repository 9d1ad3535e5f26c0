//! Path and naming constants used throughout the crate.
//!
//! Defaults reproduce the dataset convention the organiser was written for:
//! a `val_list.txt` manifest next to an `images/` tree of twelve numbered
//! shards.

/// Default root of the numbered image shard tree.
pub const DEFAULT_DATA_DIR: &str = "images";

/// Default manifest file listing image filenames and their label flags.
pub const DEFAULT_MANIFEST: &str = "val_list.txt";

/// Default destination root for the per-disease folders.
pub const DEFAULT_OUTPUT_DIR: &str = "DataSetDoencasPulmonares";

/// Prefix of a numbered shard directory (`images_001` … `images_012`).
pub const SHARD_DIR_PREFIX: &str = "images_";

/// Leaf directory inside each shard that holds the image files.
pub const SHARD_IMAGES_SUBDIR: &str = "images";

/// First shard index probed by default.
pub const DEFAULT_SHARD_MIN: u32 = 1;

/// Last shard index probed by default.
pub const DEFAULT_SHARD_MAX: u32 = 12;
