use std::path::PathBuf;

/// Default locale configuration location, relative to the assets root.
pub const DEFAULT_LANG_CONFIG: &str = "backup/langconfig.json";

/// A font file paired with the family name read from its name table.
///
/// Serializes as a two-element array, the shape the runtime loader expects.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FontEntry(pub String, pub String);

/// Manifest schema variant.
///
/// The asset pipeline historically shipped near-duplicate generators with
/// different key sets and output filenames; the variant selects which schema
/// a run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Every category, atlas-style keys, written to `assets-list.json`.
    #[default]
    Full,
    /// Images and animations only, written to `list.json`.
    Compact,
}

/// How a category payload is produced.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Handler {
    /// Shared non-recursive listing of `dir`, optionally restricted to `.json`.
    Flat {
        dir: &'static str,
        json_only: bool,
    },
    /// Spine skeleton discovery, one level of sub-directories deep.
    Spine,
    /// Font listing with family-name extraction.
    Fonts,
    /// Language bundle discovery, with optional locale-configuration merge.
    Lang,
}

/// One manifest category: the output key plus the handler that fills it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Category {
    pub key: &'static str,
    pub handler: Handler,
}

const FULL_CATEGORIES: &[Category] = &[
    Category {
        key: "anim_atlas",
        handler: Handler::Flat {
            dir: "animation",
            json_only: true,
        },
    },
    Category {
        key: "spine_json",
        handler: Handler::Spine,
    },
    Category {
        key: "style",
        handler: Handler::Flat {
            dir: "style",
            json_only: false,
        },
    },
    Category {
        key: "sound",
        handler: Handler::Flat {
            dir: "sound",
            json_only: false,
        },
    },
    Category {
        key: "font",
        handler: Handler::Fonts,
    },
    Category {
        key: "lang",
        handler: Handler::Lang,
    },
];

const COMPACT_CATEGORIES: &[Category] = &[Category {
    key: "anim_json",
    handler: Handler::Flat {
        dir: "animation",
        json_only: true,
    },
}];

impl Variant {
    /// Default output filename, relative to the assets root.
    pub fn output_file(self) -> &'static str {
        match self {
            Variant::Full => "assets-list.json",
            Variant::Compact => "list.json",
        }
    }

    /// Indentation unit used by the pretty printer.
    pub fn indent(self) -> &'static [u8] {
        match self {
            Variant::Full => b"  ",
            Variant::Compact => b"    ",
        }
    }

    /// Manifest key for the plain-image list.
    pub fn img_key(self) -> &'static str {
        "img"
    }

    /// Manifest key for texture-atlas descriptors.
    pub fn atlas_key(self) -> &'static str {
        match self {
            Variant::Full => "img_atlas",
            Variant::Compact => "img_json",
        }
    }

    /// The categories emitted after the image pair, in manifest key order.
    pub(crate) fn categories(self) -> &'static [Category] {
        match self {
            Variant::Full => FULL_CATEGORIES,
            Variant::Compact => COMPACT_CATEGORIES,
        }
    }
}

/// Configuration for one manifest run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Assets root directory; all manifest paths are relative to it.
    pub assets_root: PathBuf,
    /// Output schema variant.
    pub variant: Variant,
    /// Output file override. Relative values resolve against the assets root.
    pub output: Option<PathBuf>,
    /// Locale configuration to merge bundle paths into. `None` keeps the
    /// plain locale-to-path mapping. Relative values resolve against the
    /// assets root.
    pub lang_config: Option<PathBuf>,
}

impl BuildConfig {
    /// Configuration for the default (full, unmerged) run over `assets_root`.
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
            variant: Variant::default(),
            output: None,
            lang_config: None,
        }
    }

    /// Resolved output path for this run.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.assets_root.join(path),
            None => self.assets_root.join(self.variant.output_file()),
        }
    }

    /// Resolved locale configuration path, when merging is requested.
    pub fn lang_config_path(&self) -> Option<PathBuf> {
        self.lang_config.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.assets_root.join(path)
            }
        })
    }
}
