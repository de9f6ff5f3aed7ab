//! Definition file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect files under `root` whose extension is one of `extensions`
/// (without the dot, case-insensitive), in file-name-sorted walk order.
///
/// Unreadable directory entries are skipped.
pub fn collect_files_with_extension(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
