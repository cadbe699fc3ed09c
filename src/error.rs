use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Relationship not found: {entity} has no relationship '{relationship}' (while resolving '{path}')")]
    RelationshipNotFound { entity: String, relationship: String, path: String },

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Invalid load strategy: {0}")]
    InvalidStrategy(String),

    #[error("Invalid load specification: {0}")]
    InvalidSpec(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by a directive that does not match the mapped model.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::RelationshipNotFound { .. } | Self::UnknownEntity(_))
    }

    /// Report a missing relationship against the full directive `path`.
    pub fn in_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::RelationshipNotFound { entity, relationship, .. } => {
                Self::RelationshipNotFound { entity, relationship, path: path.into() }
            }
            other => other,
        }
    }
}
