use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};

/// List a directory's entries, sorted by path (non-recursive).
///
/// A missing directory is an empty category, not an error; a build may
/// simply not ship that category. Entries of every kind are returned.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    // read_dir order is filesystem-dependent; sort for reproducible manifests
    entries.sort();
    Ok(entries)
}

/// True when the path's extension matches `ext` (ASCII case-insensitive).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Convert `path` into a forward-slash string relative to `root`.
pub fn relative_posix(path: &Path, root: &Path) -> Result<String, ManifestError> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut segments = Vec::new();
    for component in relative.components() {
        let segment =
            component
                .as_os_str()
                .to_str()
                .ok_or_else(|| ManifestError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?;
        segments.push(segment);
    }
    Ok(segments.join("/"))
}

/// Non-recursive listing of one category directory as manifest paths.
///
/// With `json_only` the listing is restricted to `.json` entries; otherwise
/// every entry is included, whatever its kind.
pub fn list_category(
    root: &Path,
    dir: &str,
    json_only: bool,
) -> Result<Vec<String>, ManifestError> {
    let mut paths = Vec::new();
    for entry in list_dir(&root.join(dir))? {
        if json_only && !has_extension(&entry, "json") {
            continue;
        }
        paths.push(relative_posix(&entry, root)?);
    }
    Ok(paths)
}
