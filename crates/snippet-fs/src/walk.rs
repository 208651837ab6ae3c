//! Recursive file discovery by extension

use walkdir::{DirEntry, WalkDir};

use crate::{Error, NormalizedPath, Result};

/// Selects which files a directory walk yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// File extensions to keep, compared case-insensitively.
    pub extensions: Vec<String>,
    /// Directory names pruned from the walk wherever they occur.
    pub exclude: Vec<String>,
}

impl FileFilter {
    /// Create a filter matching the given extensions with no exclusions.
    pub fn new<S: Into<String>>(extensions: impl IntoIterator<Item = S>) -> Self {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            exclude: Vec::new(),
        }
    }

    /// Prune directories with any of these names.
    pub fn excluding<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // Never prune the walk root itself
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .exclude
                .iter()
                .any(|name| entry.file_name().to_string_lossy() == name.as_str())
    }
}

/// Recursively list every file under `root` matching `filter`.
///
/// Entries are visited in file-name order so runs are reproducible. Any
/// unreadable directory aborts the walk.
pub fn find_files(root: &NormalizedPath, filter: &FileFilter) -> Result<Vec<NormalizedPath>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root.to_native())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !filter.is_excluded(entry));

    for entry in walker {
        let entry = entry.map_err(|e| Error::Walk {
            path: e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| root.to_native()),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = NormalizedPath::new(entry.path());
        if path.has_extension(&filter.extensions) {
            files.push(path);
        }
    }

    tracing::debug!(
        root = %root,
        extensions = ?filter.extensions,
        count = files.len(),
        "Enumerated files"
    );

    Ok(files)
}
