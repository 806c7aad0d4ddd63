use crate::error::ManifestError;
use crate::listing::{has_extension, list_dir, relative_posix};
use std::path::Path;

const SPINE_DIR: &str = "spine";

/// List spine skeleton descriptors, one level of sub-directories deep.
///
/// Each sub-directory under the spine root holds one skeleton; every `.json`
/// file inside it is a skeleton description. Plain files at the spine root
/// are silently skipped.
pub fn list_skeletons(root: &Path) -> Result<Vec<String>, ManifestError> {
    let mut skeletons = Vec::new();
    for entry in list_dir(&root.join(SPINE_DIR))? {
        if !entry.is_dir() {
            continue;
        }
        for inner in list_dir(&entry)? {
            if has_extension(&inner, "json") {
                skeletons.push(relative_posix(&inner, root)?);
            }
        }
    }
    Ok(skeletons)
}
