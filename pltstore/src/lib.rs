//! # pltstore - Stockage nommé de playlists
//!
//! Cette crate fournit le modèle de playlist et le magasin d'enregistrements
//! nommés utilisé pour sauvegarder les onglets ouverts :
//! - `Playlist` / `Track` : contenu ordonné d'une playlist
//! - `RecordStore` : trait du magasin (lister, charger, sauver, supprimer)
//! - `SqliteStore` : implémentation persistante (SQLite)
//! - `MemoryStore` : implémentation en mémoire
//!
//! Un magasin est un espace de noms : plusieurs magasins peuvent partager
//! le même fichier SQLite sans se voir.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use pltstore::{Playlist, RecordStore, SqliteStore, Track};
//!
//! # fn main() -> pltstore::Result<()> {
//! let store = SqliteStore::open("/tmp/playlists.db", "saved_tabs")?;
//!
//! let mut playlist = Playlist::new("Morning");
//! playlist.push(Track::new("file:///music/a.flac"));
//! store.save("order0..Morning", &playlist, true)?;
//!
//! for name in store.list_names()? {
//!     let pl = store.load(&name)?;
//!     println!("{}: {} tracks", name, pl.len());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
mod persistence;
mod playlist;
mod store;

#[cfg(feature = "pltconfig")]
mod config_ext;

// Réexports publics
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use persistence::SqliteStore;
pub use playlist::{Playlist, Track};
pub use store::RecordStore;

#[cfg(feature = "pltconfig")]
pub use config_ext::PlaylistStoreConfigExt;
