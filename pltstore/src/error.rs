//! Types d'erreurs pour pltstore

/// Erreurs du magasin de playlists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid record name: {0:?}")]
    InvalidName(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour pltstore
pub type Result<T> = std::result::Result<T, Error>;
