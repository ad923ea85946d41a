//! Workflow file discovery.
//!
//! Walks a directory tree (all depths) and collects files carrying one of
//! the workflow extensions. Entries are visited sorted by file name so the
//! order is the same on every run.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions recognised as workflow files, compared case-insensitively
pub const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// True if `path` ends in `.yml` or `.yaml` (any case)
pub fn has_workflow_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKFLOW_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Collect every workflow file below `dir`.
///
/// Any traversal error (unreadable subdirectory, entry vanished mid-walk)
/// aborts discovery.
pub fn find_workflow_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if has_workflow_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} workflow file(s) in {}", files.len(), dir.display());
    Ok(files)
}
