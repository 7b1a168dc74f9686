//! "Stop after this track" marker
//!
//! At most one track carries the marker. Playback stops once that track
//! finishes, which also clears the marker.

use pltstore::Track;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct StopAfter {
    track: Option<Track>,
}

impl StopAfter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn is_marked(&self, track: &Track) -> bool {
        self.track.as_ref() == Some(track)
    }

    /// Toggles the marker on the first selected track.
    ///
    /// Returns `false` when nothing is selected, in which case the marker is
    /// left alone.
    pub fn toggle(&mut self, selected: &[Track]) -> bool {
        let Some(first) = selected.first() else {
            return false;
        };
        if self.is_marked(first) {
            debug!("Stop marker removed from {}", first.location);
            self.track = None;
        } else {
            debug!("Stop marker set on {}", first.location);
            self.track = Some(first.clone());
        }
        true
    }

    pub fn clear(&mut self) {
        self.track = None;
    }

    /// Called when `finished` ends; `true` means playback should stop.
    pub fn track_finished(&mut self, finished: &Track) -> bool {
        if self.is_marked(finished) {
            self.track = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_first_selected() {
        let a = Track::new("a.flac");
        let b = Track::new("b.flac");
        let mut stop = StopAfter::new();

        assert!(stop.toggle(&[a.clone(), b.clone()]));
        assert!(stop.is_marked(&a));
        assert!(!stop.is_marked(&b));

        // Une autre piste déplace le marqueur
        stop.toggle(&[b.clone()]);
        assert_eq!(stop.track(), Some(&b));

        stop.toggle(&[b]);
        assert_eq!(stop.track(), None);
    }

    #[test]
    fn test_empty_selection_is_ignored() {
        let a = Track::new("a.flac");
        let mut stop = StopAfter::new();
        stop.toggle(&[a.clone()]);

        assert!(!stop.toggle(&[]));
        assert!(stop.is_marked(&a));
    }

    #[test]
    fn test_finishing_marked_track_stops_once() {
        let a = Track::new("a.flac");
        let b = Track::new("b.flac");
        let mut stop = StopAfter::new();
        stop.toggle(&[b.clone()]);

        assert!(!stop.track_finished(&a));
        assert!(stop.track_finished(&b));
        assert!(!stop.track_finished(&b));
        assert_eq!(stop.track(), None);
    }
}
