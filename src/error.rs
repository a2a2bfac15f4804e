use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON5 error: {0}")]
    Json5(#[from] json5::Error),
    #[error("locale table has no entry for the fallback locale `{0}`")]
    MissingFallbackLocale(String),
    #[error("fallback locale has no text for `{0}`")]
    MissingFallbackText(&'static str),
    #[error("icon catalog has no icon for `{0}`")]
    MissingIcon(&'static str),
}
