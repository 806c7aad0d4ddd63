use std::path::PathBuf;

/// Errors that can abort a manifest run.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// I/O error listing a directory or writing the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the manifest.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file in the font directory is not a readable font face.
    #[error("Font parse error for {}: {message}", path.display())]
    FontParse { path: PathBuf, message: String },

    /// The locale configuration file is missing, unreadable, or malformed.
    #[error("Locale configuration error for {}: {message}", path.display())]
    LangConfig { path: PathBuf, message: String },

    /// A discovered language bundle has no entry in the locale configuration.
    #[error("Locale '{code}' has a bundle but no entry in {}", config.display())]
    UnknownLocale { code: String, config: PathBuf },

    /// A scanned path cannot be represented as UTF-8 in the manifest.
    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
}
