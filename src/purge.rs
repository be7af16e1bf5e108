//! Traversal-and-purge: walk a directory tree and delete `node_modules`.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, SweepError};

/// Directory name targeted for deletion.
pub const TARGET_DIR_NAME: &str = "node_modules";

/// Outcome of a single deletion attempt.
#[derive(Debug, Clone)]
pub enum PurgeOutcome {
    /// The directory and its entire subtree were removed.
    Removed { path: PathBuf, freed_bytes: u64 },
    /// The removal attempt failed; whatever is left of the subtree stays.
    Failed { path: PathBuf, error: String },
}

/// Totals accumulated over one walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeSummary {
    /// Directories successfully removed.
    pub removed: usize,
    /// Removal attempts that failed.
    pub failed: usize,
    /// Apparent size of all removed subtrees, in bytes.
    pub freed_bytes: u64,
}

/// Walk the tree under `root` and delete every directory named
/// `node_modules`, without descending into matches.
///
/// Directories are visited top-down. A matched directory is excluded from
/// descent before the removal attempt, so its contents are never listed
/// even when deletion fails partway through. The root itself is never a
/// match. Symbolic links are not followed and are never matched.
///
/// The observer fires once per attempt, as it completes, so the caller can
/// narrate outcomes while the walk is still running. Returns the
/// accumulated totals.
///
/// Fails fast if `root` does not exist or is not a directory. A directory
/// that cannot be read mid-walk is logged and skipped.
pub fn purge_tree<F>(root: &Path, observer: F) -> Result<PurgeSummary>
where
    F: FnMut(&PurgeOutcome),
{
    purge_tree_with(root, |path: &Path| fs::remove_dir_all(path), observer)
}

// Removal is injected so the failure branch stays testable without
// depending on filesystem permissions.
fn purge_tree_with<R, F>(root: &Path, mut remove: R, mut observer: F) -> Result<PurgeSummary>
where
    R: FnMut(&Path) -> std::io::Result<()>,
    F: FnMut(&PurgeOutcome),
{
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SweepError::PathNotFound(root.to_path_buf()),
        _ => SweepError::Io {
            path: root.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(SweepError::NotADirectory(root.to_path_buf()));
    }

    let mut summary = PurgeSummary::default();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // Handle permission errors gracefully
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name() != TARGET_DIR_NAME {
            continue;
        }

        // Matched: never descend, whatever the removal attempt does.
        walker.skip_current_dir();

        let path = entry.path().to_path_buf();
        let size = dir_size(&path);

        let outcome = match remove(&path) {
            Ok(()) => {
                summary.removed += 1;
                summary.freed_bytes += size;
                tracing::debug!(path = %path.display(), freed_bytes = size, "Removed");
                PurgeOutcome::Removed {
                    path,
                    freed_bytes: size,
                }
            }
            Err(e) => {
                summary.failed += 1;
                tracing::debug!(path = %path.display(), error = %e, "Removal failed");
                PurgeOutcome::Failed {
                    path,
                    error: e.to_string(),
                }
            }
        };

        observer(&outcome);
    }

    tracing::info!(
        removed = summary.removed,
        failed = summary.failed,
        freed_bytes = summary.freed_bytes,
        "Sweep complete"
    );

    Ok(summary)
}

/// Apparent size of all files under `path`.
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
