//! Trait commun des magasins de playlists nommées

use crate::{Playlist, Result};

/// Magasin clé/valeur de playlists
///
/// Chaque enregistrement est identifié par un nom libre. Les appels sont
/// synchrones : ils sont faits depuis le thread de l'interface et vont au
/// bout avant de rendre la main.
pub trait RecordStore {
    /// Noms de tous les enregistrements, sans ordre garanti
    fn list_names(&self) -> Result<Vec<String>>;

    /// Charge un enregistrement ; `Error::NotFound` s'il n'existe pas
    fn load(&self, name: &str) -> Result<Playlist>;

    /// Sauvegarde `playlist` sous `name`
    ///
    /// Sans `overwrite`, un enregistrement existant provoque
    /// `Error::AlreadyExists`.
    fn save(&self, name: &str, playlist: &Playlist, overwrite: bool) -> Result<()>;

    /// Supprime un enregistrement ; `Error::NotFound` s'il n'existe pas
    fn remove(&self, name: &str) -> Result<()>;

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.list_names()?.iter().any(|n| n == name))
    }
}

pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(crate::Error::InvalidName(name.to_string()));
    }
    Ok(())
}
