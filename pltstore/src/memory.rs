//! Magasin en mémoire, sans persistance

use crate::store::{check_name, RecordStore};
use crate::{Error, Playlist, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Magasin de playlists volatil
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, Playlist>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.records.lock().unwrap().keys().cloned().collect())
    }

    fn load(&self, name: &str) -> Result<Playlist> {
        self.records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn save(&self, name: &str, playlist: &Playlist, overwrite: bool) -> Result<()> {
        check_name(name)?;
        let mut records = self.records.lock().unwrap();
        if !overwrite && records.contains_key(name) {
            return Err(Error::AlreadyExists(name.to_string()));
        }
        records.insert(name.to_string(), playlist.clone());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.records.lock().unwrap().contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Track;

    #[test]
    fn test_save_without_overwrite_rejects_existing() {
        let store = MemoryStore::new();
        let pl = Playlist::with_tracks("a", vec![Track::new("1.flac")]);
        store.save("a", &pl, false).unwrap();

        let err = store.save("a", &pl, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(name) if name == "a"));
        store.save("a", &Playlist::new("a"), true).unwrap();
        assert!(store.load("a").unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_record() {
        let store = MemoryStore::new();
        assert!(matches!(store.remove("ghost"), Err(Error::NotFound(_))));
        assert!(matches!(store.load("ghost"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.save("", &Playlist::new("x"), true),
            Err(Error::InvalidName(_))
        ));
        assert!(store.is_empty());
    }
}
