//! Main window title and geometry
//!
//! Size, position and sash position are saved whenever the window is moved
//! or resized, except while it is maximized or fullscreen, and restored at
//! startup.

use anyhow::Result;
use pltconfig::Config;
use tracing::debug;

pub const APP_NAME: &str = "PLTabs";

/// Sash positions this close to the edge mean a collapsed panel.
const MIN_SASH_POS: i64 = 10;

/// `"<title> (by <artist>) - PLTabs"`, or without the artist part when
/// there is none.
pub fn window_title(title: &str, artist: Option<&str>) -> String {
    match artist.filter(|a| !a.is_empty()) {
        Some(artist) => format!("{} (by {}) - {}", title, artist, APP_NAME),
        None => format!("{} - {}", title, APP_NAME),
    }
}

/// Saved window placement, as read at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i64,
    pub height: i64,
    pub x: i64,
    pub y: i64,
    pub maximized: bool,
    pub sash_pos: i64,
}

impl WindowGeometry {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            width: config.get_mainw_width()?,
            height: config.get_mainw_height()?,
            x: config.get_mainw_x()?,
            y: config.get_mainw_y()?,
            maximized: config.get_mainw_maximized()?,
            sash_pos: config.get_mainw_sash_pos()?,
        })
    }
}

/// Follows window state changes and records the geometry worth keeping
#[derive(Debug, Clone, Default)]
pub struct GeometryTracker {
    fullscreen: bool,
}

impl GeometryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Window state event; `None` means that flag did not change.
    pub fn state_changed(
        &mut self,
        config: &Config,
        maximized: Option<bool>,
        fullscreen: Option<bool>,
    ) -> Result<()> {
        if let Some(maximized) = maximized {
            config.set_mainw_maximized(maximized)?;
        }
        if let Some(fullscreen) = fullscreen {
            self.fullscreen = fullscreen;
        }
        Ok(())
    }

    /// Window moved or resized. Only changed values are written.
    pub fn configured(
        &self,
        config: &Config,
        sash_pos: i64,
        size: (i64, i64),
        position: (i64, i64),
    ) -> Result<()> {
        if sash_pos > MIN_SASH_POS && sash_pos != config.get_mainw_sash_pos()? {
            config.set_mainw_sash_pos(sash_pos)?;
        }

        if config.get_mainw_maximized()? || self.fullscreen {
            return Ok(());
        }

        if size != (config.get_mainw_width()?, config.get_mainw_height()?) {
            debug!("Saving window size {}x{}", size.0, size.1);
            config.set_mainw_width(size.0)?;
            config.set_mainw_height(size.1)?;
        }
        if position != (config.get_mainw_x()?, config.get_mainw_y()?) {
            config.set_mainw_x(position.0)?;
            config.set_mainw_y(position.1)?;
        }
        Ok(())
    }
}
