use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Malformed {field} entry {entry:?}: expected a ':' separator")]
    MalformedEntry { field: String, entry: String },

    #[error("Environment variable {name} is not valid unicode")]
    InvalidEnvironment { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ManifestError {
    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            ManifestError::MalformedEntry { .. } | ManifestError::InvalidEnvironment { .. } => 1,
            ManifestError::SerializationError(_) | ManifestError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
