//! Types d'erreurs pour plttabs

/// A persisted record name that does not follow `order<N>.<tag>.<name>`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("{0:?} did not match valid playlist file")]
    Malformed(String),

    #[error("{0:?} has an empty tab name")]
    EmptyName(String),

    #[error("{0:?} has a tab index out of range")]
    IndexOverflow(String),
}

/// Erreurs de gestion des onglets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] pltstore::Error),

    #[error("No tab at position {0}")]
    NoSuchTab(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour plttabs
pub type Result<T> = std::result::Result<T, Error>;
