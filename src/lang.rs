use crate::error::ManifestError;
use crate::listing::relative_posix;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

const LANG_DIR: &str = "lang";

/// File name of a locale's content bundle.
pub const BUNDLE_FILE: &str = "game.json";

/// Discover language bundles as a locale-code-to-path mapping.
///
/// The language root is searched recursively for files named `game.json`;
/// the locale code is the first path segment under the root. A bundle
/// sitting directly at the root belongs to no locale and is ignored. When a
/// locale yields several matches the lexicographically last one wins.
pub fn discover_bundles(root: &Path) -> Result<BTreeMap<String, String>, ManifestError> {
    let lang_root = root.join(LANG_DIR);
    let mut bundles = BTreeMap::new();
    if !lang_root.is_dir() {
        return Ok(bundles);
    }

    for entry in WalkDir::new(&lang_root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() || entry.file_name() != BUNDLE_FILE {
            continue;
        }

        let relative = entry.path().strip_prefix(&lang_root).unwrap_or(entry.path());
        let mut components = relative.components();
        let code = match (components.next(), components.next()) {
            (Some(first), Some(_)) => {
                first
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| ManifestError::NonUtf8Path {
                        path: entry.path().to_path_buf(),
                    })?
            }
            _ => continue,
        };

        bundles.insert(code.to_string(), relative_posix(entry.path(), root)?);
    }
    Ok(bundles)
}

/// Merge discovered bundles into a locale configuration.
///
/// The configuration file is the authoritative list of supported locales:
/// each discovered locale must already have a descriptor there, which gains
/// a `"list"` field pointing at its bundle. Configuration locales without a
/// discovered bundle pass through unchanged. The loaded configuration is
/// never mutated; a new mapping is returned.
pub fn merge_locale_config(
    config_path: &Path,
    bundles: &BTreeMap<String, String>,
) -> Result<Map<String, Value>, ManifestError> {
    let text = fs::read_to_string(config_path).map_err(|e| ManifestError::LangConfig {
        path: config_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config: Map<String, Value> =
        serde_json::from_str(&text).map_err(|e| ManifestError::LangConfig {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })?;

    for code in bundles.keys() {
        if !config.contains_key(code) {
            return Err(ManifestError::UnknownLocale {
                code: code.clone(),
                config: config_path.to_path_buf(),
            });
        }
    }

    let mut merged = Map::new();
    for (code, descriptor) in &config {
        let mut fields = match descriptor {
            Value::Object(fields) => fields.clone(),
            _ => {
                return Err(ManifestError::LangConfig {
                    path: config_path.to_path_buf(),
                    message: format!("descriptor for locale '{}' is not an object", code),
                })
            }
        };
        if let Some(path) = bundles.get(code) {
            fields.insert("list".to_string(), Value::String(path.clone()));
        }
        merged.insert(code.clone(), Value::Object(fields));
    }
    Ok(merged)
}
