//! Playback progress bar with drag-to-seek
//!
//! The bar is idle while a timer refreshes it from the player. Pressing
//! the button starts a seek: timer refreshes are ignored and pointer motion
//! previews the target position. Releasing returns the position to seek to.

use pltconfig::Config;
use std::time::Duration;
use tracing::debug;

pub const NOT_PLAYING: &str = "Not Playing";
pub const STREAMING: &str = "Streaming...";

/// What the bar needs to know about the current track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackInfo {
    /// `None` for streams of unknown length, which cannot be seeked
    pub length_secs: Option<f64>,
}

impl TrackInfo {
    pub fn with_length(secs: f64) -> Self {
        Self {
            length_secs: Some(secs),
        }
    }

    pub fn stream() -> Self {
        Self { length_secs: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekState {
    #[default]
    Idle,
    Seeking,
}

/// How the refresh timer should be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Whole seconds, cheaper to schedule
    Seconds(u64),
    Millis(u64),
}

impl Cadence {
    pub fn from_interval(interval: Duration) -> Self {
        let millis = interval.as_millis() as u64;
        if millis % 1000 == 0 {
            Cadence::Seconds(millis / 1000)
        } else {
            Cadence::Millis(millis)
        }
    }
}

/// `M:SS`, or `H:MM:SS` past an hour
pub fn format_time(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

pub fn format_progress(elapsed: f64, total: f64) -> String {
    format!("{} / {}", format_time(elapsed), format_time(total))
}

/// Pointer position as a fraction of the bar width, clamped to `[0, 1]`.
pub fn fraction_at(x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct SeekBar {
    state: SeekState,
    fraction: f64,
    text: String,
    timer_running: bool,
    cadence: Cadence,
}

impl SeekBar {
    pub fn new(update_interval: Duration) -> Self {
        Self {
            state: SeekState::Idle,
            fraction: 0.0,
            text: NOT_PLAYING.to_string(),
            timer_running: false,
            cadence: Cadence::from_interval(update_interval),
        }
    }

    /// Uses `gui.progress_update_millisecs`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.get_progress_update_interval()?))
    }

    pub fn state(&self) -> SeekState {
        self.state
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn seek_begin(&mut self) {
        self.state = SeekState::Seeking;
    }

    /// Previews the drag target. Ignored when idle or on unseekable tracks.
    pub fn seek_motion(&mut self, x: f64, width: f64, track: Option<&TrackInfo>) {
        if self.state != SeekState::Seeking {
            return;
        }
        let Some(length) = track.and_then(|t| t.length_secs) else {
            return;
        };
        let value = fraction_at(x, width);
        self.fraction = value;
        self.text = format_progress(value * length, length);
    }

    /// Ends the drag and returns the position to seek to, in seconds.
    pub fn seek_end(&mut self, x: f64, width: f64, track: Option<&TrackInfo>) -> Option<f64> {
        self.state = SeekState::Idle;
        let length = track.and_then(|t| t.length_secs)?;

        let value = fraction_at(x, width);
        let seconds = value * length;
        self.fraction = value;
        self.text = format_progress(seconds, length);
        debug!(seconds, "Seek requested");
        Some(seconds)
    }

    pub fn playback_start(&mut self) {
        self.timer_running = true;
    }

    pub fn playback_toggle_pause(&mut self, paused: bool) {
        self.timer_running = !paused;
    }

    pub fn playback_end(&mut self) {
        self.timer_running = false;
        self.state = SeekState::Idle;
        self.text = NOT_PLAYING.to_string();
        self.fraction = 0.0;
    }

    /// Timer tick. Returns `false` when the timer should stop.
    pub fn update(&mut self, track: Option<&TrackInfo>, position_secs: f64) -> bool {
        let Some(track) = track else {
            self.timer_running = false;
            return false;
        };
        if self.state == SeekState::Seeking {
            return true;
        }

        match track.length_secs {
            None => {
                self.fraction = 0.0;
                self.text = STREAMING.to_string();
            }
            Some(length) => {
                self.fraction = if length > 0.0 {
                    (position_secs / length).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.text = format_progress(position_secs, length);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> SeekBar {
        SeekBar::new(Duration::from_secs(1))
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3725.0), "1:02:05");
        assert_eq!(format_progress(30.0, 240.0), "0:30 / 4:00");
    }

    #[test]
    fn test_cadence() {
        assert_eq!(
            Cadence::from_interval(Duration::from_millis(2000)),
            Cadence::Seconds(2)
        );
        assert_eq!(
            Cadence::from_interval(Duration::from_millis(250)),
            Cadence::Millis(250)
        );
    }

    #[test]
    fn test_drag_seek() {
        let mut bar = bar();
        let track = TrackInfo::with_length(200.0);
        bar.playback_start();

        bar.seek_begin();
        bar.seek_motion(50.0, 100.0, Some(&track));
        assert_eq!(bar.fraction(), 0.5);
        assert_eq!(bar.text(), "1:40 / 3:20");

        // Le timer ne touche pas la barre pendant le glissement
        assert!(bar.update(Some(&track), 10.0));
        assert_eq!(bar.fraction(), 0.5);

        let target = bar.seek_end(150.0, 100.0, Some(&track));
        assert_eq!(target, Some(200.0));
        assert_eq!(bar.state(), SeekState::Idle);
        assert_eq!(bar.fraction(), 1.0);
    }

    #[test]
    fn test_seek_clamps_below_zero() {
        let mut bar = bar();
        bar.seek_begin();
        let target = bar.seek_end(-20.0, 100.0, Some(&TrackInfo::with_length(60.0)));
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn test_streams_are_not_seekable() {
        let mut bar = bar();
        let stream = TrackInfo::stream();
        bar.seek_begin();
        bar.seek_motion(10.0, 100.0, Some(&stream));
        assert_eq!(bar.text(), NOT_PLAYING);
        assert_eq!(bar.seek_end(10.0, 100.0, Some(&stream)), None);
        assert_eq!(bar.state(), SeekState::Idle);

        assert!(bar.update(Some(&stream), 42.0));
        assert_eq!(bar.text(), STREAMING);
        assert_eq!(bar.fraction(), 0.0);
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut bar = bar();
        bar.seek_motion(10.0, 100.0, Some(&TrackInfo::with_length(60.0)));
        assert_eq!(bar.fraction(), 0.0);
    }

    #[test]
    fn test_timer_lifecycle() {
        let mut bar = bar();
        let track = TrackInfo::with_length(120.0);
        bar.playback_start();
        assert!(bar.update(Some(&track), 30.0));
        assert_eq!(bar.fraction(), 0.25);
        assert_eq!(bar.text(), "0:30 / 2:00");

        bar.playback_toggle_pause(true);
        assert!(!bar.timer_running());
        bar.playback_toggle_pause(false);
        assert!(bar.timer_running());

        bar.playback_end();
        assert_eq!(bar.text(), NOT_PLAYING);
        assert_eq!(bar.fraction(), 0.0);

        bar.playback_start();
        assert!(!bar.update(None, 0.0));
        assert!(!bar.timer_running());
    }
}
