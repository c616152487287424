use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GeoresistError {
    #[error("unknown language code '{0}'. Supported: ru, en, uz")]
    UnknownLanguage(String),

    #[error("failed to load band table from {path}: {reason}")]
    BandTableLoad { path: PathBuf, reason: String },

    #[error("invalid band table: {0}")]
    BandTableInvalid(String),

    #[error("built-in locale '{language}' is broken: {reason}")]
    LocaleInvalid { language: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
