use thiserror::Error;

pub type Result<T> = std::result::Result<T, GsumError>;

#[derive(Error, Debug)]
pub enum GsumError {
    #[error("Git error: {0}")]
    Git(String),
    #[error("No commits found in repository")]
    EmptyHistory,
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
