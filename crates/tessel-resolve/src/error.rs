use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown shard `{name}`; valid shards: {}", .known.join(", "))]
    UnknownShard { name: String, known: Vec<String> },

    #[error("malformed changed-file list: {0}")]
    MalformedChangedFiles(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
