//! Playlist notebook: the ordered set of open tabs
//!
//! Toolkit-free model of the main window's tab strip. It tracks tab order,
//! the selected tab and which tab feeds playback. Drawing is left to
//! whatever front-end renders [`Tab::label`].

use pltstore::{Playlist, Track};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Name given to new empty tabs; `%d` is replaced by the first free number.
pub const DEFAULT_PLAYLIST_NAME: &str = "Playlist %d";

const DIRTY_MARKER: char = '*';

static NEXT_TAB_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an open tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    fn next() -> Self {
        TabId(NEXT_TAB_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One open playlist tab
#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    title: String,
    playlist: Playlist,
    marked_dirty: bool,
}

impl Tab {
    fn new(title: String, playlist: Playlist) -> Self {
        let marked_dirty = playlist.is_custom && playlist.needs_save;
        Self {
            id: TabId::next(),
            title,
            playlist,
            marked_dirty,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Title without the unsaved-changes marker
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text shown on the tab: `*` prefixes a custom playlist with unsaved changes
    pub fn label(&self) -> String {
        if self.marked_dirty {
            format!("{}{}", DIRTY_MARKER, self.title)
        } else {
            self.title.clone()
        }
    }

    pub fn is_marked_dirty(&self) -> bool {
        self.marked_dirty
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.playlist.name = self.title.clone();
    }

    /// Content changed (or was saved); only custom playlists get the marker.
    pub fn set_dirty(&mut self, dirty: bool) {
        if !self.playlist.is_custom {
            return;
        }
        if dirty && !self.marked_dirty {
            self.marked_dirty = true;
        } else if !dirty && self.marked_dirty {
            self.marked_dirty = false;
        }
    }

    pub fn set_custom(&mut self, custom: bool) {
        self.playlist.is_custom = custom;
        if !custom {
            self.marked_dirty = false;
        }
    }

    /// The custom playlist `name` was deleted from the library.
    ///
    /// The tab keeps its tracks but becomes an ordinary playlist.
    pub fn mark_custom_removed(&mut self, name: &str) {
        if name == self.playlist.name && self.playlist.is_custom {
            self.playlist.needs_save = false;
            self.set_dirty(false);
            self.set_custom(false);
        }
    }

    /// Saved to the library: clears the pending-changes state.
    pub fn mark_saved(&mut self) {
        self.playlist.needs_save = false;
        self.set_dirty(false);
    }

    pub fn append_tracks(&mut self, tracks: impl IntoIterator<Item = Track>) {
        for track in tracks {
            self.playlist.push(track);
        }
        let dirty = self.playlist.needs_save;
        self.set_dirty(dirty);
    }

    pub fn clear(&mut self) {
        self.playlist.clear();
        let dirty = self.playlist.needs_save;
        self.set_dirty(dirty);
    }
}

/// Ordered open tabs with selection and playback markers
#[derive(Debug, Default)]
pub struct Notebook {
    tabs: Vec<Tab>,
    current: Option<usize>,
    playing: Option<TabId>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.tabs.iter_mut()
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    pub fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        let index = self.current?;
        self.tabs.get_mut(index)
    }

    /// Tab whose playlist playback points to
    pub fn playing(&self) -> Option<TabId> {
        self.playing
    }

    pub fn playing_index(&self) -> Option<usize> {
        self.playing.and_then(|id| self.position(id))
    }

    pub fn set_playing(&mut self, id: Option<TabId>) {
        self.playing = id;
    }

    /// Adds a playlist as a new tab and makes it the playback target.
    ///
    /// - `None` opens an empty playlist named after [`DEFAULT_PLAYLIST_NAME`].
    /// - A custom playlist already open unchanged under the same name is
    ///   selected instead of opened twice.
    /// - A `%d` in the name becomes the first number not used by an open tab.
    /// - When `erase_empty` is set and the selected tab is empty, a non-empty
    ///   playlist takes its place.
    pub fn add_playlist(&mut self, playlist: Option<Playlist>, erase_empty: bool) -> TabId {
        let mut playlist = playlist.unwrap_or_else(|| Playlist::new(DEFAULT_PLAYLIST_NAME));
        let new_empty = playlist.is_empty();

        if playlist.is_custom {
            let already_open = self.tabs.iter().position(|tab| {
                tab.playlist.is_custom
                    && !tab.playlist.needs_save
                    && tab.playlist.name == playlist.name
            });
            if let Some(n) = already_open {
                self.select(n);
                return self.tabs[n].id;
            }
        }

        let title = self.free_title(&playlist.name);
        playlist.name = title.clone();
        let tab = Tab::new(title, playlist);
        let id = tab.id;

        let replaced = self
            .current
            .filter(|&cur| erase_empty && !new_empty && self.tabs[cur].playlist.is_empty());

        match replaced {
            Some(cur) => {
                debug!(title = %tab.title, position = cur, "Replacing empty tab");
                self.tabs[cur] = tab;
            }
            None => {
                debug!(title = %tab.title, position = self.tabs.len(), "Adding tab");
                self.tabs.push(tab);
                self.current = Some(self.tabs.len() - 1);
            }
        }

        self.playing = Some(id);
        id
    }

    /// Appends a tab restored from a saved session, keeping its name as is.
    pub fn push_restored(&mut self, playlist: Playlist) -> TabId {
        let tab = Tab::new(playlist.name.clone(), playlist);
        let id = tab.id;
        self.tabs.push(tab);
        if self.current.is_none() {
            self.current = Some(self.tabs.len() - 1);
        }
        id
    }

    fn free_title(&self, name: &str) -> String {
        if !name.contains("%d") {
            return name.to_string();
        }
        (1..)
            .map(|i: usize| name.replacen("%d", &i.to_string(), 1))
            .find(|candidate| self.tabs.iter().all(|tab| &tab.title != candidate))
            .unwrap_or_else(|| name.to_string())
    }

    /// Selects a tab without touching the playback target.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.current = Some(index);
        true
    }

    /// User switched to a tab: it becomes both selected and playback target.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.set_current(index) {
            return false;
        }
        self.playing = Some(self.tabs[index].id);
        true
    }

    /// Closes `index` (or the selected tab) and returns it.
    ///
    /// Closing the playing tab leaves playback without a target. Closing the
    /// last tab opens a fresh empty one.
    pub fn close_tab(&mut self, index: Option<usize>) -> Option<Tab> {
        let index = index.or(self.current)?;
        if index >= self.tabs.len() {
            return None;
        }

        let closed = self.tabs.remove(index);
        debug!(title = %closed.title, position = index, "Closing tab");
        if self.playing == Some(closed.id) {
            self.playing = None;
        }

        self.current = match self.current {
            _ if self.tabs.is_empty() => None,
            Some(cur) if cur > index => Some(cur - 1),
            Some(cur) if cur == index => Some(index.min(self.tabs.len() - 1)),
            other => other,
        };

        if self.tabs.is_empty() {
            self.add_playlist(None, true);
        }
        Some(closed)
    }

    /// Moves a tab, the selection follows the tab it was on.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() {
            return false;
        }
        let selected = self.current_tab().map(Tab::id);
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.current = selected.and_then(|id| self.position(id));
        true
    }

    /// Empties the selected tab's playlist.
    pub fn clear_current(&mut self) {
        if let Some(tab) = self.current_tab_mut() {
            tab.clear();
        }
    }

    /// More than one tab always shows the bar, otherwise the setting decides.
    pub fn tab_bar_visible(&self, show_tabbar: bool) -> bool {
        self.tabs.len() > 1 || show_tabbar
    }
}
