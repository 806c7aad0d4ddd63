/// Error types for manifest generation.
pub mod error;

/// Schema variants, category table, and run configuration.
pub mod types;

/// Shared directory listing and path normalization helpers.
pub mod listing;

/// Image / texture-atlas classification.
pub mod images;

/// Spine skeleton discovery.
pub mod spine;

/// Font listing with family-name extraction.
pub mod fonts;

/// Language bundle discovery and locale-configuration merge.
pub mod lang;

/// Manifest serialization and output.
pub mod output;

pub use error::ManifestError;
pub use types::{BuildConfig, FontEntry, Variant};

use serde_json::{Map, Value};
use std::path::PathBuf;
use types::Handler;

/// Build the manifest mapping for `config` without writing it.
///
/// Categories are independent and produce disjoint keys; each missing
/// category directory contributes an empty payload. Keys appear in the
/// variant's documented order.
pub fn build_manifest(config: &BuildConfig) -> Result<Map<String, Value>, ManifestError> {
    let root = &config.assets_root;
    let mut manifest = Map::new();

    let (images, atlases) = images::classify_images(root)?;
    log::info!("img: {} images, {} atlases", images.len(), atlases.len());
    manifest.insert(config.variant.img_key().to_string(), paths_value(images));
    manifest.insert(config.variant.atlas_key().to_string(), paths_value(atlases));

    for category in config.variant.categories() {
        let value = match category.handler {
            Handler::Flat { dir, json_only } => {
                paths_value(listing::list_category(root, dir, json_only)?)
            }
            Handler::Spine => paths_value(spine::list_skeletons(root)?),
            Handler::Fonts => serde_json::to_value(fonts::list_fonts(root)?)?,
            Handler::Lang => lang_value(config)?,
        };
        log::info!("{}: {} entries", category.key, payload_len(&value));
        manifest.insert(category.key.to_string(), value);
    }

    Ok(manifest)
}

/// Build the manifest for `config` and write it to the configured output.
///
/// Returns the path written. Any handler failure aborts before the write,
/// leaving a previous manifest untouched.
pub fn generate(config: &BuildConfig) -> Result<PathBuf, ManifestError> {
    let manifest = build_manifest(config)?;
    let path = config.output_path();
    output::write_manifest(&manifest, &path, config.variant)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Language payload: plain locale-to-path mapping, or the merged locale
/// configuration when one is configured.
fn lang_value(config: &BuildConfig) -> Result<Value, ManifestError> {
    let bundles = lang::discover_bundles(&config.assets_root)?;
    match config.lang_config_path() {
        Some(path) => Ok(Value::Object(lang::merge_locale_config(&path, &bundles)?)),
        None => Ok(Value::Object(
            bundles
                .into_iter()
                .map(|(code, path)| (code, Value::String(path)))
                .collect(),
        )),
    }
}

fn paths_value(paths: Vec<String>) -> Value {
    Value::Array(paths.into_iter().map(Value::String).collect())
}

fn payload_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        _ => 0,
    }
}
