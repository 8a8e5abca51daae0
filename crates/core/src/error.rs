use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("required element not found: {0}")]
    MissingElement(String),
    #[error("no section with id `{0}`")]
    UnknownSection(String),
    #[error("no shortcut bound to `{0}`")]
    UnknownShortcut(char),
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
