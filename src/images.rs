use crate::error::ManifestError;
use crate::listing::{has_extension, list_dir, relative_posix};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

const IMG_DIR: &str = "img";

/// Split the image directory into plain images and texture-atlas descriptors.
///
/// An atlas `.json` is accompanied by a packed sheet of the same stem; the
/// sheet belongs to the atlas and must not also be listed as a standalone
/// image. A descriptor without a same-stem sheet is still listed (it may be
/// authored by hand, with the sheet baked later).
///
/// Returns `(images, atlases)`.
pub fn classify_images(root: &Path) -> Result<(Vec<String>, Vec<String>), ManifestError> {
    let entries = list_dir(&root.join(IMG_DIR))?;

    // Pass 1: every .json is an atlas descriptor; remember its stem.
    let mut atlas_stems: HashSet<OsString> = HashSet::new();
    let mut atlases = Vec::new();
    for entry in &entries {
        if has_extension(entry, "json") {
            if let Some(stem) = entry.file_stem() {
                atlas_stems.insert(stem.to_os_string());
            }
            atlases.push(relative_posix(entry, root)?);
        }
    }

    // Pass 2: everything else is a plain image, unless its stem names an
    // atlas sheet.
    let mut images = Vec::new();
    for entry in &entries {
        if has_extension(entry, "json") {
            continue;
        }
        if entry
            .file_stem()
            .is_some_and(|stem| atlas_stems.contains(stem))
        {
            continue;
        }
        images.push(relative_posix(entry, root)?);
    }

    Ok((images, atlases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn img_tree(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let img = dir.path().join(IMG_DIR);
        fs::create_dir(&img).unwrap();
        for name in names {
            File::create(img.join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_atlas_sheet_excluded_from_images() {
        let dir = img_tree(&["sheet.png", "sheet.json", "icon.png"]);
        let (images, atlases) = classify_images(dir.path()).unwrap();
        assert_eq!(images, ["img/icon.png"]);
        assert_eq!(atlases, ["img/sheet.json"]);
    }

    #[test]
    fn test_atlas_without_sheet_still_listed() {
        let dir = img_tree(&["lonely.json", "icon.png"]);
        let (images, atlases) = classify_images(dir.path()).unwrap();
        assert_eq!(images, ["img/icon.png"]);
        assert_eq!(atlases, ["img/lonely.json"]);
    }

    #[test]
    fn test_counts_and_disjointness() {
        // 2 json files, 5 non-json files, 2 stem collisions
        let dir = img_tree(&[
            "a.json", "a.png", "b.json", "b.jpg", "c.png", "d.webp", "e.png",
        ]);
        let (images, atlases) = classify_images(dir.path()).unwrap();
        assert_eq!(atlases.len(), 2);
        assert_eq!(images.len(), 5 - 2);

        let image_set: std::collections::HashSet<&String> = images.iter().collect();
        assert!(atlases.iter().all(|a| !image_set.contains(a)));
    }

    #[test]
    fn test_results_sorted() {
        let dir = img_tree(&["z.png", "a.png", "m.json", "b.json"]);
        let (images, atlases) = classify_images(dir.path()).unwrap();
        assert_eq!(images, ["img/a.png", "img/z.png"]);
        assert_eq!(atlases, ["img/b.json", "img/m.json"]);
    }

    #[test]
    fn test_missing_img_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (images, atlases) = classify_images(dir.path()).unwrap();
        assert!(images.is_empty());
        assert!(atlases.is_empty());
    }

    #[test]
    fn test_extensionless_entry_listed_as_image() {
        let dir = img_tree(&["README", "sheet.json", "sheet.png"]);
        let (images, _) = classify_images(dir.path()).unwrap();
        assert_eq!(images, ["img/README"]);
    }
}
