//! # plttabs - Onglets de playlists et sauvegarde de session
//!
//! - [`notebook`] : onglets ouverts, sélection, onglet en lecture, marqueur
//!   de modifications non sauvegardées
//! - [`order`] : codec des noms d'enregistrements `order<N>.<tag>.<name>`
//! - [`session`] : sauvegarde/restauration des onglets dans un
//!   [`pltstore::RecordStore`]
//! - [`stop_after`] : arrêt de la lecture après une piste choisie
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use pltstore::PlaylistStoreConfigExt;
//! use plttabs::Session;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = pltconfig::get_config();
//! let mut session = Session::new(config.open_playlist_store()?);
//!
//! session.restore(&config)?;
//! session.notebook_mut().add_playlist(None, true);
//!
//! // À la fermeture de la fenêtre
//! let report = session.save();
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod notebook;
pub mod order;
pub mod session;
pub mod stop_after;

// Réexports publics
pub use error::{Error, OrderError, Result};
pub use notebook::{Notebook, Tab, TabId, DEFAULT_PLAYLIST_NAME};
pub use order::{decode, encode, RecordName, RestorePlan, TabTag};
pub use session::{
    load_saved_tabs, remove_custom, save_changes_to_custom, save_current_tabs,
    save_tab_as_custom, RestoreOutcome, SaveReport, Session,
};
pub use stop_after::StopAfter;
