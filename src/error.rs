use thiserror::Error;

/// Errors raised while building or extending the diagnostic database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("diagnostic key cannot be empty")]
    EmptyKey,

    #[error("duplicate diagnostic key '{0}'")]
    DuplicateKey(String),

    #[error("diagnostic '{0}' has no keywords")]
    NoKeywords(String),

    #[error("invalid diagnostic '{key}': {source}")]
    InvalidRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed diagnostic database: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised by session operations that mutate state
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("no unanswered question with id '{0}'")]
    UnknownQuestion(String),
}
