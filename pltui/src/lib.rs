//! # pltui - Widget helpers without a toolkit
//!
//! State and formatting logic behind the main window widgets, kept apart
//! from any GUI toolkit so it can be driven by whatever front-end draws it:
//!
//! - [`css`] : theme colors and fonts as CSS strings
//! - [`cover`] : cover art scaled to a box
//! - [`menu`] : popup menu placement
//! - [`modes`] : shuffle, repeat and dynamic playback settings
//! - [`progress`] : progress bar with drag-to-seek
//! - [`search`] : search entry debouncing
//! - [`window`] : window title and saved geometry

pub mod cover;
pub mod css;
pub mod menu;
pub mod modes;
pub mod progress;
pub mod search;
pub mod window;

pub use cover::ScalableImage;
pub use css::{
    css_from_font_description, css_from_rgba, css_from_rgba_without_alpha, FontDescription, Rgba,
};
pub use modes::PlaybackModes;
pub use progress::{SeekBar, TrackInfo};
pub use search::SearchDebouncer;
pub use window::{window_title, GeometryTracker, WindowGeometry};
