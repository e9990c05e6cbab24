use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("runner capacity must be positive")]
    InvalidCapacity,

    #[error("unknown platform `{0}`; valid platforms: linux, macos, windows")]
    UnknownPlatform(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
