//! Playlist : séquence ordonnée de morceaux

use serde::{Deserialize, Serialize};

/// Un morceau de playlist
///
/// Seule la localisation est obligatoire ; le titre et la durée sont des
/// métadonnées facultatives conservées telles quelles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_secs: Option<f64>,
}

impl Track {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            title: None,
            length_secs: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_length(mut self, secs: f64) -> Self {
        self.length_secs = Some(secs);
        self
    }
}

/// Une playlist
///
/// `is_custom` marque une playlist sauvegardée explicitement par
/// l'utilisateur dans sa bibliothèque ; `needs_save` indique que son contenu
/// a changé depuis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub needs_save: bool,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tracks(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
            ..Default::default()
        }
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
        if self.is_custom {
            self.needs_save = true;
        }
    }

    pub fn clear(&mut self) {
        if !self.tracks.is_empty() && self.is_custom {
            self.needs_save = true;
        }
        self.tracks.clear();
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Same tracks in the same order, whatever the name or flags
    pub fn same_content(&self, other: &Playlist) -> bool {
        self.tracks == other.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_marks_custom_playlist_dirty() {
        let mut pl = Playlist::new("Mix");
        pl.push(Track::new("a.ogg"));
        assert!(!pl.needs_save);

        pl.is_custom = true;
        pl.push(Track::new("b.ogg"));
        assert!(pl.needs_save);
        assert_eq!(pl.len(), 2);
    }

    #[test]
    fn test_clear_empty_custom_playlist_stays_clean() {
        let mut pl = Playlist::new("Mix");
        pl.is_custom = true;
        pl.clear();
        assert!(!pl.needs_save);
    }

    #[test]
    fn test_same_content_ignores_name() {
        let a = Playlist::with_tracks("A", vec![Track::new("x.mp3").with_title("X")]);
        let b = Playlist::with_tracks("B", vec![Track::new("x.mp3").with_title("X")]);
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }
}
