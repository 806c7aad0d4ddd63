use crate::error::ManifestError;
use crate::types::Variant;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Serialize `manifest` pretty-printed with the variant's indentation and
/// write it to `path`, replacing any previous manifest.
///
/// Writing is the last step of a run; nothing here is reached if a category
/// handler failed.
pub fn write_manifest<T: Serialize>(
    manifest: &T,
    path: &Path,
    variant: Variant,
) -> Result<(), ManifestError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(variant.indent());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_variant_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets-list.json");
        write_manifest(&json!({"img": ["img/icon.png"]}), &path, Variant::Full).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"img\""));
        assert!(text.contains("\n    \"img/icon.png\""));
    }

    #[test]
    fn test_compact_variant_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        write_manifest(&json!({"img": []}), &path, Variant::Compact).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"img\""));
    }

    #[test]
    fn test_overwrites_previous_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets-list.json");
        fs::write(&path, "stale contents that are much longer than the new ones").unwrap();

        write_manifest(&json!({}), &path, Variant::Full).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
