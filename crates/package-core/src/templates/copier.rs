//! Dependency artifact copying into the app's bin folder

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Summary of a completed dependency copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files copied, as paths relative to the source directory
    pub files: Vec<String>,
}

/// Recursively copy the contents of `source` into `dest`
///
/// `dest` may already exist; existing files with the same name are overwritten.
/// When `dest` lies inside `source`, the directories leading to it are skipped so
/// the copy never descends into its own output.
/// Stops at the first failure and reports it as `CopyDependencies`.
pub fn copy_dependencies(source: &Path, dest: &Path) -> Result<CopyReport> {
    let copy_error = |message: String| ScaffoldError::CopyDependencies {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        message,
    };

    if !source.is_dir() {
        return Err(copy_error("source is not a directory".to_string()));
    }

    std::fs::create_dir_all(dest).map_err(|e| copy_error(e.to_string()))?;
    let dest_canonical = dest.canonicalize().map_err(|e| copy_error(e.to_string()))?;

    let mut report = CopyReport::default();

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !leads_to(e, &dest_canonical));

    for entry in walker {
        let entry = entry.map_err(|e| copy_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| copy_error(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| {
                copy_error(format!("failed to create {}: {}", target.display(), e))
            })?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| {
                copy_error(format!("failed to copy {}: {}", entry.path().display(), e))
            })?;
            report
                .files
                .push(relative.to_string_lossy().replace('\\', "/"));
        }
    }

    Ok(report)
}

/// True for a directory that is `dest` or one of its ancestors
fn leads_to(entry: &DirEntry, dest: &Path) -> bool {
    entry.file_type().is_dir()
        && entry
            .path()
            .canonicalize()
            .is_ok_and(|path| dest.starts_with(path))
}
