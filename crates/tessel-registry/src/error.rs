use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate shard name `{0}`")]
    DuplicateShard(String),

    #[error("shard `{0}` has no patterns")]
    EmptyPatterns(String),

    #[error("pattern `{pattern}` names a source file; single-file patterns must end with `{suffix}`")]
    SourceFilePattern { pattern: String, suffix: String },

    #[error("failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse registry file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
