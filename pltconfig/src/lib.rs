//! # PLTabs Configuration Module
//!
//! This module provides configuration management for PLTabs, including:
//! - Loading configuration from YAML files
//! - Merging with embedded default configuration
//! - Environment variable overrides
//! - Type-safe getters and setters for configuration values
//! - Lazily loaded process-wide instance
//!
//! ## Usage
//!
//! ```no_run
//! use pltconfig::get_config;
//!
//! let config = get_config();
//!
//! if config.get_open_last()? {
//!     let store_dir = config.get_playlist_store_dir()?;
//!     println!("Restoring tabs from {}", store_dir);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{anyhow, Result};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Number, Value};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing::info;

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("pltabs.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> =
        Arc::new(Config::load_config("").expect("Failed to load PLTabs configuration"));
}

const ENV_CONFIG_DIR: &str = "PLTABS_CONFIG";
const ENV_PREFIX: &str = "PLTABS_CONFIG__";
const LOCAL_CONFIG_DIR: &str = ".pltabs";

// Default values for configuration
const DEFAULT_OPEN_LAST: bool = false;
const DEFAULT_SHOW_TABBAR: bool = true;
const DEFAULT_PROGRESS_UPDATE_MILLISECS: u64 = 1000;
const DEFAULT_SEARCH_TIMEOUT_MILLISECS: u64 = 500;
const DEFAULT_LOG_MIN_LEVEL: &str = "INFO";
const DEFAULT_LOG_ENABLE_CONSOLE: bool = true;
const DEFAULT_STORE_DIRECTORY: &str = "playlists";
const DEFAULT_STORE_DATABASE: &str = "playlists.db";
const DEFAULT_STORE_NAMESPACE: &str = "saved_tabs";
const DEFAULT_SHUFFLE: bool = false;
const DEFAULT_REPEAT: bool = false;
const DEFAULT_DYNAMIC: bool = false;
const DEFAULT_MAINW_WIDTH: i64 = 500;
const DEFAULT_MAINW_HEIGHT: i64 = 475;
const DEFAULT_MAINW_X: i64 = 10;
const DEFAULT_MAINW_Y: i64 = 10;
const DEFAULT_MAINW_MAXIMIZED: bool = false;
const DEFAULT_MAINW_SASH_POS: i64 = 200;

/// Macro to generate getter/setter for u64 values with default
macro_rules! impl_u64_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<u64> {
            match self.get_value($path) {
                Ok(Value::Number(n)) => Ok(n.as_u64().unwrap_or($default)),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: u64) -> Result<()> {
            self.set_value($path, Value::Number(Number::from(value)))
        }
    };
}

/// Macro to generate getter/setter for signed integer values with default
macro_rules! impl_i64_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<i64> {
            match self.get_value($path) {
                Ok(Value::Number(n)) => Ok(n.as_i64().unwrap_or($default)),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: i64) -> Result<()> {
            self.set_value($path, Value::Number(Number::from(value)))
        }
    };
}

/// Macro to generate getter/setter for bool values with default
macro_rules! impl_bool_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<bool> {
            match self.get_value($path) {
                Ok(Value::Bool(b)) => Ok(b),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: bool) -> Result<()> {
            self.set_value($path, Value::Bool(value))
        }
    };
}

/// Macro to generate getter/setter for string values with default
macro_rules! impl_string_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<String> {
            match self.get_value($path) {
                Ok(Value::String(s)) => Ok(s),
                _ => Ok($default.to_string()),
            }
        }

        pub fn $setter(&self, value: String) -> Result<()> {
            self.set_value($path, Value::String(value))
        }
    };
}

/// Where the tab bar of the playlist notebook is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TabPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabPlacement::Top => "top",
            TabPlacement::Bottom => "bottom",
            TabPlacement::Left => "left",
            TabPlacement::Right => "right",
        }
    }
}

impl fmt::Display for TabPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabPlacement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TabPlacement::Top),
            "bottom" => Ok(TabPlacement::Bottom),
            "left" => Ok(TabPlacement::Left),
            "right" => Ok(TabPlacement::Right),
            other => Err(anyhow!("Unknown tab placement: {}", other)),
        }
    }
}

/// Order used when shuffle is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    #[default]
    Track,
    Album,
}

impl ShuffleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShuffleMode::Track => "track",
            ShuffleMode::Album => "album",
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuffleMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(ShuffleMode::Track),
            "album" => Ok(ShuffleMode::Album),
            other => Err(anyhow!("Unknown shuffle mode: {}", other)),
        }
    }
}

/// What repeats when repeat is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Playlist,
    Track,
}

impl RepeatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Playlist => "playlist",
            RepeatMode::Track => "track",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playlist" => Ok(RepeatMode::Playlist),
            "track" => Ok(RepeatMode::Track),
            other => Err(anyhow!("Unknown repeat mode: {}", other)),
        }
    }
}

/// Configuration manager for PLTabs
///
/// The configuration lives in `<config_dir>/config.yaml`. Every setter
/// writes the whole document back to disk.
///
/// # Examples
///
/// ```no_run
/// use pltconfig::Config;
///
/// let config = Config::load_config("/tmp/pltabs")?;
/// config.set_open_last(true)?;
/// assert!(config.get_open_last()?);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

// Implémentation manuelle de Clone
impl Clone for Config {
    fn clone(&self) -> Self {
        let data = self.data.lock().unwrap().clone();
        Self {
            config_dir: self.config_dir.clone(),
            path: self.path.clone(),
            data: Mutex::new(data),
        }
    }
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        // 1. Try provided directory
        if !directory.is_empty() {
            return directory.to_string();
        }

        // 2. Try environment variable
        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var=ENV_CONFIG_DIR, path=%env_path, "Trying to load config from env");
            return env_path;
        }

        // 3. Try current directory
        if Path::new(LOCAL_CONFIG_DIR).exists() {
            return LOCAL_CONFIG_DIR.to_string();
        }

        // 4. Try home directory
        if let Some(home) = home_dir() {
            let home_config = home.join(LOCAL_CONFIG_DIR);
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        LOCAL_CONFIG_DIR.to_string()
    }

    /// Validates and prepares a config directory
    fn validate_config_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(anyhow!("{} is not a directory", path.display()));
        }

        // Test write permission
        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        // Test read permission
        fs::read_dir(path)?;

        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `PLTABS_CONFIG` environment variable
    /// 3. `.pltabs` in the current directory
    /// 4. `.pltabs` in the user's home directory
    ///
    /// The directory is created if it doesn't exist, and validated for
    /// read/write permissions.
    pub fn config_dir(directory: &str) -> Result<String> {
        let dir_path = Self::find_config_dir(directory);
        Self::validate_config_dir(Path::new(&dir_path))?;
        Ok(dir_path)
    }

    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external config.yaml file if present
    /// 4. Applies environment variable overrides
    /// 5. Saves the merged configuration
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::config_dir(directory)?;
        info!(config_dir=%config_dir, "Using config directory");

        let config_file_path = Path::new(&config_dir).join("config.yaml");
        let path = config_file_path.to_string_lossy().to_string();

        let mut default_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        let yaml_data = if let Ok(data) = fs::read(&path) {
            info!(config_file=%path, "Loaded config file");
            data
        } else {
            info!(config_file=%path, "Config file not found, using default embedded config");
            DEFAULT_CONFIG.as_bytes().to_vec()
        };

        // Un fichier vide se lit comme Null : on garde les défauts
        let external_value: Value = serde_yaml::from_slice(&yaml_data)?;
        merge_yaml(&mut default_value, &external_value);
        let mut config_value = lower_keys_value(default_value);

        apply_env_overrides(&mut config_value);

        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        config.save()?;
        Ok(config)
    }

    /// Directory holding `config.yaml`
    pub fn dir(&self) -> &str {
        &self.config_dir
    }

    /// Saves the current configuration to the config.yaml file
    pub fn save(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        let yaml = serde_yaml::to_string(&*data)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["playlist", "open_last"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        set_value_internal(&mut data, path, value)?;
        drop(data);
        self.save()
    }

    /// Gets a configuration value at the specified path
    ///
    /// Returns an error if the path doesn't exist.
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.data.lock().unwrap();
        get_value_internal(&data, path)
    }

    /// Résout un chemin relatif ou absolu et crée le répertoire si nécessaire
    fn resolve_and_create_dir(&self, dir_path: &str) -> Result<String> {
        let path = Path::new(dir_path);

        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.config_dir).join(path)
        };

        if !absolute_path.exists() {
            fs::create_dir_all(&absolute_path)?;
            info!(directory=%absolute_path.display(), "Created managed directory");
        }

        Ok(absolute_path.to_string_lossy().to_string())
    }

    /// Récupère un répertoire géré par la configuration
    ///
    /// Le répertoire peut être absolu ou relatif au répertoire de
    /// configuration. Il est créé s'il n'existe pas, et la valeur par défaut
    /// est persistée si la clé manquait.
    pub fn get_managed_dir(&self, path: &[&str], default: &str) -> Result<String> {
        let dir_path = match self.get_value(path) {
            Ok(Value::String(s)) => s,
            _ => {
                self.set_managed_dir(path, default.to_string())?;
                default.to_string()
            }
        };
        self.resolve_and_create_dir(&dir_path)
    }

    /// Définit un répertoire géré par la configuration
    pub fn set_managed_dir(&self, path: &[&str], directory: String) -> Result<()> {
        self.set_value(path, Value::String(directory))
    }

    /// Directory holding the playlist store database
    pub fn get_playlist_store_dir(&self) -> Result<String> {
        self.get_managed_dir(&["playlist", "store", "directory"], DEFAULT_STORE_DIRECTORY)
    }

    /// Full path of the playlist store database
    pub fn get_playlist_store_path(&self) -> Result<PathBuf> {
        let dir = self.get_playlist_store_dir()?;
        let file = self.get_playlist_store_database()?;
        Ok(PathBuf::from(dir).join(file))
    }

    /// Reads a keyword setting, falling back to the default on unknown values
    fn get_keyword<T>(&self, path: &[&str]) -> Result<T>
    where
        T: FromStr<Err = anyhow::Error> + Default + fmt::Display,
    {
        match self.get_value(path) {
            Ok(Value::String(s)) => Ok(s.parse().unwrap_or_else(|err| {
                tracing::warn!("{}, using default {}", err, T::default());
                T::default()
            })),
            _ => Ok(T::default()),
        }
    }

    /// Placement of the tab bar, falling back to `top` on unknown values
    pub fn get_tab_placement(&self) -> Result<TabPlacement> {
        self.get_keyword(&["gui", "tab_placement"])
    }

    pub fn set_tab_placement(&self, placement: TabPlacement) -> Result<()> {
        self.set_value(
            &["gui", "tab_placement"],
            Value::String(placement.as_str().to_string()),
        )
    }

    pub fn get_shuffle_mode(&self) -> Result<ShuffleMode> {
        self.get_keyword(&["playback", "shuffle_mode"])
    }

    pub fn set_shuffle_mode(&self, mode: ShuffleMode) -> Result<()> {
        self.set_value(
            &["playback", "shuffle_mode"],
            Value::String(mode.as_str().to_string()),
        )
    }

    pub fn get_repeat_mode(&self) -> Result<RepeatMode> {
        self.get_keyword(&["playback", "repeat_mode"])
    }

    pub fn set_repeat_mode(&self, mode: RepeatMode) -> Result<()> {
        self.set_value(
            &["playback", "repeat_mode"],
            Value::String(mode.as_str().to_string()),
        )
    }

    /// Progress bar refresh period
    pub fn get_progress_update_interval(&self) -> Result<Duration> {
        Ok(Duration::from_millis(self.get_progress_update_millisecs()?))
    }

    /// Delay between the last keystroke and a search activation
    pub fn get_search_timeout(&self) -> Result<Duration> {
        Ok(Duration::from_millis(self.get_search_timeout_millisecs()?))
    }

    impl_bool_config!(
        get_open_last,
        set_open_last,
        &["playlist", "open_last"],
        DEFAULT_OPEN_LAST
    );

    impl_string_config!(
        get_playlist_store_database,
        set_playlist_store_database,
        &["playlist", "store", "database"],
        DEFAULT_STORE_DATABASE
    );

    impl_string_config!(
        get_playlist_store_namespace,
        set_playlist_store_namespace,
        &["playlist", "store", "namespace"],
        DEFAULT_STORE_NAMESPACE
    );

    impl_bool_config!(
        get_show_tabbar,
        set_show_tabbar,
        &["gui", "show_tabbar"],
        DEFAULT_SHOW_TABBAR
    );

    impl_u64_config!(
        get_progress_update_millisecs,
        set_progress_update_millisecs,
        &["gui", "progress_update_millisecs"],
        DEFAULT_PROGRESS_UPDATE_MILLISECS
    );

    impl_u64_config!(
        get_search_timeout_millisecs,
        set_search_timeout_millisecs,
        &["gui", "search_timeout_millisecs"],
        DEFAULT_SEARCH_TIMEOUT_MILLISECS
    );

    impl_bool_config!(
        get_shuffle,
        set_shuffle,
        &["playback", "shuffle"],
        DEFAULT_SHUFFLE
    );

    impl_bool_config!(
        get_repeat,
        set_repeat,
        &["playback", "repeat"],
        DEFAULT_REPEAT
    );

    impl_bool_config!(
        get_dynamic,
        set_dynamic,
        &["playback", "dynamic"],
        DEFAULT_DYNAMIC
    );

    impl_i64_config!(
        get_mainw_width,
        set_mainw_width,
        &["gui", "mainw_width"],
        DEFAULT_MAINW_WIDTH
    );

    impl_i64_config!(
        get_mainw_height,
        set_mainw_height,
        &["gui", "mainw_height"],
        DEFAULT_MAINW_HEIGHT
    );

    impl_i64_config!(get_mainw_x, set_mainw_x, &["gui", "mainw_x"], DEFAULT_MAINW_X);

    impl_i64_config!(get_mainw_y, set_mainw_y, &["gui", "mainw_y"], DEFAULT_MAINW_Y);

    impl_bool_config!(
        get_mainw_maximized,
        set_mainw_maximized,
        &["gui", "mainw_maximized"],
        DEFAULT_MAINW_MAXIMIZED
    );

    impl_i64_config!(
        get_mainw_sash_pos,
        set_mainw_sash_pos,
        &["gui", "mainw_sash_pos"],
        DEFAULT_MAINW_SASH_POS
    );

    impl_bool_config!(
        get_log_enable_console,
        set_log_enable_console,
        &["host", "logger", "enable_console"],
        DEFAULT_LOG_ENABLE_CONSOLE
    );

    impl_string_config!(
        get_log_min_level,
        set_log_min_level,
        &["host", "logger", "min_level"],
        DEFAULT_LOG_MIN_LEVEL
    );
}

/// Returns the global configuration instance
///
/// Lazily loaded on first access. Components that need configuration take
/// a `&Config` argument; only entry points should call this.
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
    if path.is_empty() {
        *data = value;
        return Ok(());
    }
    if data.is_null() {
        *data = Value::Mapping(Mapping::new());
    }
    if let Value::Mapping(map) = data {
        let key_value = Value::String(path[0].to_lowercase());
        if path.len() == 1 {
            map.insert(key_value, value);
        } else {
            let entry = map
                .entry(key_value)
                .or_insert(Value::Mapping(Mapping::new()));
            set_value_internal(entry, &path[1..], value)?;
        }
        Ok(())
    } else {
        Err(anyhow!("Current node is not a map"))
    }
}

fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
    let mut current = data;
    for (i, key) in path.iter().enumerate() {
        if let Value::Mapping(map) = current {
            if let Some(next) = map.get(Value::String(key.to_lowercase())) {
                current = next;
            } else {
                return Err(anyhow!("Path {} does not exist", path[..=i].join(".")));
            }
        } else {
            return Err(anyhow!("Path {} is not a Config", path[..i].join(".")));
        }
    }
    Ok(current.clone())
}

fn apply_env_overrides(config: &mut Value) {
    for (key, value) in env::vars() {
        if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
            let key_path = stripped.split("__").collect::<Vec<_>>();
            let yaml_value = convert_env_value(&value);
            if let Err(err) = set_value_internal(config, &key_path, yaml_value) {
                tracing::warn!(env_var=%key, "Ignoring config override: {}", err);
            }
        }
    }
}

fn convert_env_value(value: &str) -> Value {
    serde_yaml::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

fn lower_keys_value(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut new_map = Mapping::new();
            for (k, v) in map {
                let key = match k {
                    Value::String(s) => Value::String(s.to_lowercase()),
                    other => other,
                };
                new_map.insert(key, lower_keys_value(v));
            }
            Value::Mapping(new_map)
        }
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(lower_keys_value).collect()),
        _ => value,
    }
}

/// Merges external YAML configuration into default configuration
///
/// - For mappings, keys from `external` are merged recursively into `default`
/// - For scalars and sequences, external values replace default values
/// - A null external document leaves the defaults untouched
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (_, Value::Null) => {}
        (Value::Mapping(dmap), Value::Mapping(emap)) => {
            for (k, v) in emap {
                match dmap.get_mut(k) {
                    Some(dv) => merge_yaml(dv, v),
                    None => {
                        dmap.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (d, e) => *d = e.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        (dir, config)
    }

    #[test]
    fn test_defaults_from_embedded_yaml() {
        let (_dir, config) = temp_config();
        assert!(!config.get_open_last().unwrap());
        assert!(config.get_show_tabbar().unwrap());
        assert_eq!(config.get_tab_placement().unwrap(), TabPlacement::Top);
        assert_eq!(config.get_progress_update_millisecs().unwrap(), 1000);
        assert_eq!(
            config.get_search_timeout().unwrap(),
            Duration::from_millis(500)
        );
        assert_eq!(config.get_playlist_store_namespace().unwrap(), "saved_tabs");
    }

    #[test]
    fn test_setter_persists_to_disk() {
        let (dir, config) = temp_config();
        config.set_open_last(true).unwrap();

        let reloaded = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert!(reloaded.get_open_last().unwrap());
    }

    #[test]
    fn test_user_file_merged_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "GUI:\n  Tab_Placement: left\n",
        )
        .unwrap();

        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.get_tab_placement().unwrap(), TabPlacement::Left);
        // Les autres clés gardent leur valeur par défaut
        assert!(config.get_show_tabbar().unwrap());
    }

    #[test]
    fn test_unknown_tab_placement_falls_back() {
        let (_dir, config) = temp_config();
        config
            .set_value(&["gui", "tab_placement"], Value::String("diagonal".into()))
            .unwrap();
        assert_eq!(config.get_tab_placement().unwrap(), TabPlacement::Top);
    }

    #[test]
    fn test_playback_and_window_defaults() {
        let (_dir, config) = temp_config();
        assert!(!config.get_shuffle().unwrap());
        assert_eq!(config.get_shuffle_mode().unwrap(), ShuffleMode::Track);
        assert!(!config.get_repeat().unwrap());
        assert_eq!(config.get_repeat_mode().unwrap(), RepeatMode::Playlist);
        assert!(!config.get_dynamic().unwrap());

        assert_eq!(config.get_mainw_width().unwrap(), 500);
        assert_eq!(config.get_mainw_height().unwrap(), 475);
        assert_eq!(config.get_mainw_x().unwrap(), 10);
        assert_eq!(config.get_mainw_y().unwrap(), 10);
        assert!(!config.get_mainw_maximized().unwrap());
        assert_eq!(config.get_mainw_sash_pos().unwrap(), 200);
    }

    #[test]
    fn test_window_position_may_be_negative() {
        let (dir, config) = temp_config();
        config.set_mainw_x(-1280).unwrap();
        config.set_repeat_mode(RepeatMode::Track).unwrap();

        let reloaded = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(reloaded.get_mainw_x().unwrap(), -1280);
        assert_eq!(reloaded.get_repeat_mode().unwrap(), RepeatMode::Track);
    }

    #[test]
    fn test_unknown_shuffle_mode_falls_back() {
        let (_dir, config) = temp_config();
        config
            .set_value(&["playback", "shuffle_mode"], Value::String("Album".into()))
            .unwrap();
        assert_eq!(config.get_shuffle_mode().unwrap(), ShuffleMode::Album);

        config
            .set_value(&["playback", "shuffle_mode"], Value::String("artist".into()))
            .unwrap();
        assert_eq!(config.get_shuffle_mode().unwrap(), ShuffleMode::Track);
    }

    #[test]
    fn test_managed_dir_is_created_relative_to_config_dir() {
        let (dir, config) = temp_config();
        let store_dir = config.get_playlist_store_dir().unwrap();
        assert!(Path::new(&store_dir).is_dir());
        assert!(Path::new(&store_dir).starts_with(dir.path()));
        assert_eq!(
            config.get_playlist_store_path().unwrap(),
            Path::new(&store_dir).join("playlists.db")
        );
    }

    #[test]
    fn test_env_value_conversion() {
        assert_eq!(convert_env_value("true"), Value::Bool(true));
        assert_eq!(convert_env_value("250"), Value::Number(Number::from(250)));
        assert_eq!(convert_env_value("bottom"), Value::String("bottom".into()));
    }

    #[test]
    fn test_merge_replaces_scalars_and_keeps_missing_keys() {
        let mut default: Value = serde_yaml::from_str("a: 1\nb:\n  c: 2\n  d: 3\n").unwrap();
        let external: Value = serde_yaml::from_str("b:\n  c: 20\n").unwrap();
        merge_yaml(&mut default, &external);

        assert_eq!(get_value_internal(&default, &["b", "c"]).unwrap(), Value::from(20));
        assert_eq!(get_value_internal(&default, &["b", "d"]).unwrap(), Value::from(3));
        assert_eq!(get_value_internal(&default, &["a"]).unwrap(), Value::from(1));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let (_dir, config) = temp_config();
        assert!(config.get_value(&["nope", "missing"]).is_err());
    }
}
