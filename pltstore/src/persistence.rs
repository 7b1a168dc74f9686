//! Gestion de la persistance SQLite des playlists nommées

use crate::store::{check_name, RecordStore};
use crate::{Error, Playlist, Result, Track};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Magasin SQLite
///
/// Une base peut contenir plusieurs espaces de noms ; chaque `SqliteStore`
/// ne voit que le sien.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    namespace: String,
}

fn db_err(context: &str) -> impl Fn(rusqlite::Error) -> Error + '_ {
    move |e| Error::PersistenceError(format!("{}: {}", context, e))
}

fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as i64
}

impl SqliteStore {
    /// Ouvre (ou crée) la base et l'espace de noms `namespace`
    pub fn open(db_path: impl AsRef<Path>, namespace: &str) -> Result<Self> {
        let db_path = db_path.as_ref();

        // Créer le répertoire parent si nécessaire
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::PersistenceError(format!("Failed to create directory: {}", e))
            })?;
        }

        let conn = Connection::open(db_path).map_err(db_err("Failed to open database"))?;
        Self::with_connection(conn, namespace)
    }

    /// Base volatile, utile pour les tests
    pub fn open_in_memory(namespace: &str) -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(db_err("Failed to open database"))?;
        Self::with_connection(conn, namespace)
    }

    /// Autre espace de noms sur la même connexion
    pub fn namespaced(&self, namespace: &str) -> Self {
        Self {
            conn: self.conn.clone(),
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn with_connection(conn: Connection, namespace: &str) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS records (
                namespace TEXT NOT NULL,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                is_custom INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                last_modified INTEGER NOT NULL,
                PRIMARY KEY (namespace, name)
            );
            CREATE TABLE IF NOT EXISTS tracks (
                namespace TEXT NOT NULL,
                record_name TEXT NOT NULL,
                position INTEGER NOT NULL,
                location TEXT NOT NULL,
                title TEXT,
                length_secs REAL,
                PRIMARY KEY (namespace, record_name, position)
            );",
        )
        .map_err(db_err("Failed to create tables"))?;

        tracing::debug!(namespace, "Playlist store ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            namespace: namespace.to_string(),
        })
    }
}

impl RecordStore for SqliteStore {
    fn list_names(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM records WHERE namespace = ?1")
            .map_err(db_err("Failed to prepare statement"))?;

        let rows = stmt
            .query_map(params![self.namespace], |row| row.get(0))
            .map_err(db_err("Failed to query records"))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row.map_err(db_err("Failed to read name"))?);
        }
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<Playlist> {
        let conn = self.conn.lock().unwrap();

        let meta = conn
            .query_row(
                "SELECT title, is_custom FROM records WHERE namespace = ?1 AND name = ?2",
                params![self.namespace, name],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?)),
            )
            .optional()
            .map_err(db_err("Failed to load record"))?;

        let Some((title, is_custom)) = meta else {
            return Err(Error::NotFound(name.to_string()));
        };

        let mut stmt = conn
            .prepare(
                "SELECT location, title, length_secs FROM tracks
                 WHERE namespace = ?1 AND record_name = ?2 ORDER BY position ASC",
            )
            .map_err(db_err("Failed to prepare statement"))?;

        let rows = stmt
            .query_map(params![self.namespace, name], |row| {
                Ok(Track {
                    location: row.get(0)?,
                    title: row.get(1)?,
                    length_secs: row.get(2)?,
                })
            })
            .map_err(db_err("Failed to query tracks"))?;

        let mut tracks = Vec::new();
        for row in rows {
            tracks.push(row.map_err(db_err("Failed to read track"))?);
        }

        Ok(Playlist {
            name: title,
            tracks,
            is_custom,
            needs_save: false,
        })
    }

    fn save(&self, name: &str, playlist: &Playlist, overwrite: bool) -> Result<()> {
        check_name(name)?;
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(db_err("Failed to start transaction"))?;

        let exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM records WHERE namespace = ?1 AND name = ?2)",
                params![self.namespace, name],
                |row| row.get(0),
            )
            .map_err(db_err("Failed to check record"))?;
        if exists && !overwrite {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        let now = now_nanos();
        tx.execute(
            "INSERT OR REPLACE INTO records (namespace, name, title, is_custom, created_at, last_modified)
             VALUES (?1, ?2, ?3, ?4,
                     COALESCE((SELECT created_at FROM records WHERE namespace = ?1 AND name = ?2), ?5),
                     ?5)",
            params![self.namespace, name, playlist.name, playlist.is_custom, now],
        )
        .map_err(db_err("Failed to save record"))?;

        // Supprimer les anciens tracks
        tx.execute(
            "DELETE FROM tracks WHERE namespace = ?1 AND record_name = ?2",
            params![self.namespace, name],
        )
        .map_err(db_err("Failed to delete old tracks"))?;

        for (position, track) in playlist.tracks.iter().enumerate() {
            tx.execute(
                "INSERT INTO tracks (namespace, record_name, position, location, title, length_secs)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    self.namespace,
                    name,
                    position as i64,
                    track.location,
                    track.title,
                    track.length_secs,
                ],
            )
            .map_err(db_err("Failed to insert track"))?;
        }

        tx.commit().map_err(db_err("Failed to commit record"))?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(db_err("Failed to start transaction"))?;

        let deleted = tx
            .execute(
                "DELETE FROM records WHERE namespace = ?1 AND name = ?2",
                params![self.namespace, name],
            )
            .map_err(db_err("Failed to delete record"))?;
        if deleted == 0 {
            return Err(Error::NotFound(name.to_string()));
        }

        tx.execute(
            "DELETE FROM tracks WHERE namespace = ?1 AND record_name = ?2",
            params![self.namespace, name],
        )
        .map_err(db_err("Failed to delete tracks"))?;

        tx.commit().map_err(db_err("Failed to commit removal"))?;
        Ok(())
    }
}
