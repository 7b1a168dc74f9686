//! Shuffle, repeat and dynamic playback modes
//!
//! The mode menus and toggle buttons only write settings; whoever plays the
//! selected playlist reads them back through [`PlaybackModes::from_config`].

use anyhow::Result;
use pltconfig::{Config, RepeatMode, ShuffleMode};
use tracing::debug;

/// Modes as stored under `playback`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackModes {
    /// `None` when shuffle is off
    pub shuffle: Option<ShuffleMode>,
    /// `None` when repeat is off
    pub repeat: Option<RepeatMode>,
    pub dynamic: bool,
}

impl PlaybackModes {
    pub fn from_config(config: &Config) -> Result<Self> {
        let shuffle = if config.get_shuffle()? {
            Some(config.get_shuffle_mode()?)
        } else {
            None
        };
        let repeat = if config.get_repeat()? {
            Some(config.get_repeat_mode()?)
        } else {
            None
        };
        Ok(Self {
            shuffle,
            repeat,
            dynamic: config.get_dynamic()?,
        })
    }
}

/// Shuffle menu entry picked; turning shuffle off keeps the last mode.
pub fn select_shuffle(config: &Config, mode: Option<ShuffleMode>) -> Result<()> {
    debug!("Shuffle mode selected: {:?}", mode);
    match mode {
        None => config.set_shuffle(false),
        Some(mode) => {
            config.set_shuffle(true)?;
            config.set_shuffle_mode(mode)
        }
    }
}

/// Repeat menu entry picked; turning repeat off keeps the last mode.
pub fn select_repeat(config: &Config, mode: Option<RepeatMode>) -> Result<()> {
    debug!("Repeat mode selected: {:?}", mode);
    match mode {
        None => config.set_repeat(false),
        Some(mode) => {
            config.set_repeat(true)?;
            config.set_repeat_mode(mode)
        }
    }
}

/// Repeat and dynamic toggle buttons
pub fn set_mode_toggles(config: &Config, repeat: bool, dynamic: bool) -> Result<()> {
    config.set_repeat(repeat)?;
    config.set_dynamic(dynamic)
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
    fn test_all_modes_off_by_default() {
        let (_dir, config) = temp_config();
        assert_eq!(
            PlaybackModes::from_config(&config).unwrap(),
            PlaybackModes::default()
        );
    }

    #[test]
    fn test_shuffle_off_keeps_mode() {
        let (_dir, config) = temp_config();
        select_shuffle(&config, Some(ShuffleMode::Album)).unwrap();
        assert_eq!(
            PlaybackModes::from_config(&config).unwrap().shuffle,
            Some(ShuffleMode::Album)
        );

        select_shuffle(&config, None).unwrap();
        assert!(!config.get_shuffle().unwrap());
        assert_eq!(config.get_shuffle_mode().unwrap(), ShuffleMode::Album);
        assert_eq!(PlaybackModes::from_config(&config).unwrap().shuffle, None);
    }

    #[test]
    fn test_repeat_menu_and_toggle() {
        let (_dir, config) = temp_config();
        select_repeat(&config, Some(RepeatMode::Track)).unwrap();
        assert_eq!(
            PlaybackModes::from_config(&config).unwrap().repeat,
            Some(RepeatMode::Track)
        );

        set_mode_toggles(&config, false, true).unwrap();
        let modes = PlaybackModes::from_config(&config).unwrap();
        assert_eq!(modes.repeat, None);
        assert!(modes.dynamic);

        // Le bouton réactive le dernier mode choisi
        set_mode_toggles(&config, true, true).unwrap();
        assert_eq!(
            PlaybackModes::from_config(&config).unwrap().repeat,
            Some(RepeatMode::Track)
        );
    }
}
