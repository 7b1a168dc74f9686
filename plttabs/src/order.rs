//! Saved tab order codec
//!
//! Open tabs are persisted as one record per tab, named
//! `order<N>.<tag>.<name>`:
//!
//! - `N` is the tab position when the session was saved,
//! - `tag` is empty, `current` (selected tab) or `playing` (tab whose
//!   playlist feeds playback),
//! - `name` is the playlist name, verbatim. It may contain dots: the tag
//!   never does, so everything after the second dot is the name.
//!
//! Decoding sorts the names lexicographically and rebuilds the tabs in
//! ascending numeric `N` order, compacting gaps. Records are grouped by
//! `N` as written: `order01` and `order1` are two different tabs, the
//! shorter spelling first. Encoding never writes leading zeros.

use crate::error::OrderError;
use crate::notebook::{Tab, TabId};
use once_cell::sync::Lazy;
use pltstore::Playlist;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, warn};

static RECORD_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^order(?P<tab>\d+)\.(?P<tag>[^.]*)\.(?P<name>.*)$")
        .expect("record name pattern is valid")
});

/// Role of a tab in a saved session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabTag {
    #[default]
    None,
    Current,
    Playing,
}

impl TabTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabTag::None => "",
            TabTag::Current => "current",
            TabTag::Playing => "playing",
        }
    }
}

impl fmt::Display for TabTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TabTag {
    type Err = std::convert::Infallible;

    /// Unknown tags carry no role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "current" => TabTag::Current,
            "playing" => TabTag::Playing,
            _ => TabTag::None,
        })
    }
}

/// Parsed form of a persisted record name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName {
    pub index: usize,
    pub tag: TabTag,
    pub name: String,
}

impl RecordName {
    pub fn new(index: usize, tag: TabTag, name: impl Into<String>) -> Self {
        Self {
            index,
            tag,
            name: name.into(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        let caps = RECORD_NAME_RE
            .captures(raw)
            .ok_or_else(|| OrderError::Malformed(raw.to_string()))?;

        let name = &caps["name"];
        if name.is_empty() {
            return Err(OrderError::EmptyName(raw.to_string()));
        }

        let index = caps["tab"]
            .parse::<usize>()
            .map_err(|_| OrderError::IndexOverflow(raw.to_string()))?;

        let tag = caps["tag"].parse().unwrap_or_default();

        Ok(Self {
            index,
            tag,
            name: name.to_string(),
        })
    }
}

impl FromStr for RecordName {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order{}.{}.{}", self.index, self.tag, self.name)
    }
}

/// Picks the tag of the tab at `index`; `playing` wins over `current`.
pub fn tag_for(index: usize, is_playing: bool, current: Option<usize>) -> TabTag {
    if is_playing {
        TabTag::Playing
    } else if current == Some(index) {
        TabTag::Current
    } else {
        TabTag::None
    }
}

/// Builds one record per open tab, in tab order.
///
/// `playing` is compared by identity with each tab: only the tab holding
/// the playing playlist gets the `playing` tag.
pub fn encode<'a>(
    tabs: &'a [Tab],
    current: Option<usize>,
    playing: Option<TabId>,
) -> Vec<(RecordName, &'a Playlist)> {
    tabs.iter()
        .enumerate()
        .map(|(i, tab)| {
            let tag = tag_for(i, playing == Some(tab.id()), current);
            let record = RecordName::new(i, tag, tab.playlist().name.clone());
            (record, tab.playlist())
        })
        .collect()
}

/// Tabs rebuilt from a saved session
#[derive(Debug, Clone, Default)]
pub struct RestorePlan {
    /// Restored playlists, in saved tab order
    pub tabs: Vec<Playlist>,
    /// Position of the tab to select
    pub current: Option<usize>,
    /// Position of the tab tagged `playing`
    pub playing: Option<usize>,
    /// Position of the tab playback should point to
    pub active: Option<usize>,
}

impl RestorePlan {
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tabs.iter().map(|pl| pl.name.as_str()).collect()
    }
}

/// Rebuilds the tabs from persisted record names.
///
/// Malformed names and records `load` fails on are logged and skipped.
/// Records sharing a tab index are merged onto the first one loaded. An
/// empty result means there was nothing to restore; the caller decides
/// what to show instead.
pub fn decode<I, S, F, E>(names: I, mut load: F) -> RestorePlan
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Result<Playlist, E>,
    E: fmt::Display,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort();

    // (index, digit count): leading zeros make a distinct tab
    let mut restored: BTreeMap<(usize, usize), Playlist> = BTreeMap::new();
    let mut current = None;
    let mut playing = None;
    let mut active = None;

    for (i, raw) in names.iter().enumerate() {
        let record = match RecordName::parse(raw) {
            Ok(record) => record,
            Err(err) => {
                error!("{}", err);
                continue;
            }
        };

        debug!("Adding playlist {}: {}", i, raw);
        debug!(
            "Tab:{}; Tag:{}; Name:{}",
            record.index, record.tag, record.name
        );

        let key = (record.index, index_digits(raw));
        if !restored.contains_key(&key) {
            match load(raw) {
                Ok(mut playlist) => {
                    playlist.name = record.name.clone();
                    restored.insert(key, playlist);
                }
                Err(err) => {
                    warn!("Failed to load saved tab {}: {}", raw, err);
                    continue;
                }
            }
        }

        match record.tag {
            TabTag::Current => {
                current = Some(key);
                if active.is_none() {
                    active = Some(key);
                }
            }
            TabTag::Playing => {
                playing = Some(key);
                active = Some(key);
            }
            TabTag::None => {}
        }
    }

    let position_of = |key: (usize, usize)| restored.keys().position(|&k| k == key);
    let current = current.and_then(position_of);
    let playing = playing.and_then(position_of);
    let active = active.and_then(position_of);

    RestorePlan {
        current: current.or(playing),
        playing,
        active,
        tabs: restored.into_values().collect(),
    }
}

/// Length of the `N` part of an already parsed `order<N>.` name
fn index_digits(raw: &str) -> usize {
    raw["order".len()..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count()
}
