//! File moves and the end-to-end sorting pass.
//!
//! Images are moved, not copied. For an entry labelled with more than one
//! class only the first move in class-table order can succeed; every later
//! attempt finds the source gone and fails. That failure is caught, logged
//! and tallied like any other move failure, and the pass continues — the
//! first-class-wins outcome is the documented behaviour of the organiser.
//!
//! Moves try an atomic rename first and fall back to copy-then-remove when
//! source and destination live on different filesystems.

use crate::config::SortConfig;
use crate::layout::create_class_dirs;
use crate::manifest::{Manifest, ManifestEntry};
use crate::SortResult;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Tally of one sorting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Successful moves.
    pub moved: usize,

    /// Attempted moves that failed (source already moved, permissions, …).
    pub failed: usize,

    /// Manifest records whose image was not found in any shard.
    pub unresolved: usize,
}

/// Runs the full sorting pass over the dataset described by `config`.
///
/// Loads the manifest, creates the class folders, then moves every resolved
/// image into the folder of each of its active classes. Per-move failures
/// are logged and tallied, never propagated: once setup succeeds the pass
/// always runs to completion and emits a final summary line.
///
/// # Errors
///
/// Returns `SortError` only for setup failures: an unreadable or malformed
/// manifest, or a class directory that cannot be created.
pub fn sort_dataset(config: &SortConfig) -> SortResult<MoveReport> {
    let manifest = Manifest::load(config)?;
    create_class_dirs(config.output_dir())?;

    let mut report = MoveReport {
        unresolved: manifest.unresolved(),
        ..MoveReport::default()
    };

    for entry in manifest.entries() {
        move_entry(config, entry, &mut report);
    }

    tracing::info!(
        "dataset reorganisation complete: {} moved, {} failed, {} unresolved",
        report.moved,
        report.failed,
        report.unresolved
    );

    Ok(report)
}

/// Moves one entry into the destination folder of each of its active classes.
fn move_entry(config: &SortConfig, entry: &ManifestEntry, report: &mut MoveReport) {
    let basename = entry
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");

    if let Some(media_type) = sniff_media_type(&entry.path) {
        tracing::debug!("{}: detected media type {}", entry.path.display(), media_type);
    }

    for class_name in entry.labels.active_classes() {
        let dest = config.class_dir(class_name).join(basename);

        match move_file(&entry.path, &dest) {
            Ok(()) => {
                tracing::info!("moved {} to {}", entry.path.display(), dest.display());
                report.moved += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "failed to move {} to {}: {}",
                    entry.path.display(),
                    dest.display(),
                    e
                );
                report.failed += 1;
            }
        }
    }
}

/// Moves `source` to `dest`, falling back to copy-then-remove when the two
/// paths are on different filesystems and a rename is not possible.
fn move_file(source: &Path, dest: &Path) -> std::io::Result<()> {
    match fs::rename(source, dest) {
        Err(e) if e.kind() == ErrorKind::CrossesDevices => copy_then_remove(source, dest),
        other => other,
    }
}

fn copy_then_remove(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(source, dest)?;
    fs::remove_file(source)
}

/// Best-effort media type detection from the file header.
///
/// Detection only: the result is logged and never gates the move.
fn sniff_media_type(path: &Path) -> Option<&'static str> {
    let mut file = fs::File::open(path).ok()?;
    let mut header = [0u8; 64];
    let read = file.read(&mut header).ok()?;

    infer::get(&header[..read]).map(|kind| kind.mime_type())
}
