//! Extension de pltconfig pour le magasin de playlists

use crate::{Result, SqliteStore};

/// Trait d'extension pour pltconfig::Config
pub trait PlaylistStoreConfigExt {
    /// Ouvre le magasin SQLite configuré (`playlist.store.*`)
    fn open_playlist_store(&self) -> Result<SqliteStore>;
}

impl PlaylistStoreConfigExt for pltconfig::Config {
    fn open_playlist_store(&self) -> Result<SqliteStore> {
        let db_path = self.get_playlist_store_path()?;
        let namespace = self.get_playlist_store_namespace()?;
        tracing::info!(path=%db_path.display(), %namespace, "Opening playlist store");
        SqliteStore::open(db_path, &namespace)
    }
}
