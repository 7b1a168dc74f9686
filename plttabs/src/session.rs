//! Saving and restoring the open tabs across restarts
//!
//! A save replaces the whole snapshot: every record of the tab store is
//! removed, then one record per open tab is written. A restore reads every
//! record back through [`decode`](crate::order::decode).

use crate::notebook::{Notebook, TabId};
use crate::order::{decode, encode, RestorePlan};
use crate::{Error, Result};
use pltconfig::Config;
use pltstore::RecordStore;
use tracing::{debug, info, warn};

/// Outcome of a best-effort save
#[derive(Debug, Default)]
pub struct SaveReport {
    pub saved: Vec<String>,
    pub failed: Vec<(String, pltstore::Error)>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// What a restore put in the notebook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Number of tabs rebuilt from the store; 0 means a default tab was opened
    pub restored: usize,
    pub current: Option<usize>,
    pub playing: Option<usize>,
}

/// Replaces the saved snapshot with the notebook's open tabs.
///
/// Individual failures are logged and reported; they never stop the
/// remaining tabs from being written.
pub fn save_current_tabs<S>(store: &S, notebook: &Notebook) -> SaveReport
where
    S: RecordStore + ?Sized,
{
    let mut report = SaveReport::default();

    match store.list_names() {
        Ok(names) => {
            for name in names {
                debug!("Removing tab {}", name);
                if let Err(err) = store.remove(&name) {
                    warn!("Failed to remove saved tab {}: {}", name, err);
                }
            }
        }
        Err(err) => warn!("Failed to list saved tabs: {}", err),
    }

    let records = encode(
        notebook.tabs(),
        notebook.current_index(),
        notebook.playing(),
    );
    for (record, playlist) in records {
        let name = record.to_string();
        debug!("Saving tab {}: {}", record.index, name);
        match store.save(&name, playlist, true) {
            Ok(()) => report.saved.push(name),
            Err(err) => {
                warn!("Failed to save tab {}: {}", name, err);
                report.failed.push((name, err));
            }
        }
    }

    info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        "Saved open tabs"
    );
    report
}

/// Rebuilds the saved tabs into `notebook`.
///
/// With `open_last` unset, or nothing to restore, a single empty tab is
/// opened instead.
pub fn load_saved_tabs<S>(store: &S, notebook: &mut Notebook, open_last: bool) -> RestoreOutcome
where
    S: RecordStore + ?Sized,
{
    if !open_last {
        return open_default_tab(notebook);
    }

    let names = match store.list_names() {
        Ok(names) => names,
        Err(err) => {
            warn!("Failed to list saved tabs: {}", err);
            Vec::new()
        }
    };
    if names.is_empty() {
        return open_default_tab(notebook);
    }

    let plan = decode(names, |name| store.load(name));
    apply_plan(notebook, plan)
}

/// Appends the tabs of `plan`, selects the saved current tab and points
/// playback at the saved active tab.
pub fn apply_plan(notebook: &mut Notebook, plan: RestorePlan) -> RestoreOutcome {
    if plan.is_empty() {
        return open_default_tab(notebook);
    }

    let base = notebook.len();
    let RestorePlan {
        tabs,
        current,
        active,
        ..
    } = plan;

    let ids: Vec<TabId> = tabs
        .into_iter()
        .map(|playlist| notebook.push_restored(playlist))
        .collect();

    let current = base + current.unwrap_or(0);
    notebook.set_current(current);

    // Sans marqueur, la lecture suit l'onglet sélectionné
    let playing = active.map(|i| base + i).unwrap_or(current);
    notebook.set_playing(Some(ids[playing - base]));

    info!(restored = ids.len(), current, playing, "Restored saved tabs");
    RestoreOutcome {
        restored: ids.len(),
        current: Some(current),
        playing: Some(playing),
    }
}

fn open_default_tab(notebook: &mut Notebook) -> RestoreOutcome {
    notebook.add_playlist(None, true);
    RestoreOutcome {
        restored: 0,
        current: notebook.current_index(),
        playing: notebook.playing_index(),
    }
}

/// Saves the tab's playlist to the library under `title` and makes it custom.
pub fn save_tab_as_custom<L>(
    library: &L,
    notebook: &mut Notebook,
    index: usize,
    title: &str,
) -> Result<()>
where
    L: RecordStore + ?Sized,
{
    let tab = notebook.tab_mut(index).ok_or(Error::NoSuchTab(index))?;
    tab.rename(title);

    let mut playlist = tab.playlist().clone();
    playlist.is_custom = true;
    playlist.needs_save = false;
    library.save(title, &playlist, true)?;

    tab.set_custom(true);
    tab.mark_saved();
    info!(title, "Saved custom playlist");
    Ok(())
}

/// Writes pending changes of a custom tab back to the library.
pub fn save_changes_to_custom<L>(library: &L, notebook: &mut Notebook, index: usize) -> Result<()>
where
    L: RecordStore + ?Sized,
{
    let tab = notebook.tab_mut(index).ok_or(Error::NoSuchTab(index))?;
    let mut playlist = tab.playlist().clone();
    playlist.needs_save = false;
    library.save(&playlist.name, &playlist, true)?;
    tab.mark_saved();
    Ok(())
}

/// Deletes a custom playlist from the library; open tabs keep its tracks.
pub fn remove_custom<L>(library: &L, notebook: &mut Notebook, name: &str) -> Result<()>
where
    L: RecordStore + ?Sized,
{
    library.remove(name)?;
    for tab in notebook.tabs_mut() {
        tab.mark_custom_removed(name);
    }
    Ok(())
}

/// Open tabs bound to the store they are saved in
pub struct Session<S: RecordStore> {
    store: S,
    notebook: Notebook,
}

impl<S: RecordStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notebook: Notebook::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    /// Restores the previous session if `playlist.open_last` is set.
    pub fn restore(&mut self, config: &Config) -> Result<RestoreOutcome> {
        let open_last = config.get_open_last()?;
        Ok(load_saved_tabs(&self.store, &mut self.notebook, open_last))
    }

    pub fn save(&self) -> SaveReport {
        save_current_tabs(&self.store, &self.notebook)
    }

    pub fn into_parts(self) -> (S, Notebook) {
        (self.store, self.notebook)
    }
}
