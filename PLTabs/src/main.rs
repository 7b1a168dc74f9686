//! Inspecteur de session d'onglets
//!
//! ```text
//! PLTabs [--config DIR] [--json] [--resave]
//! ```
//!
//! Restaure les onglets sauvegardés comme le ferait la fenêtre principale,
//! les affiche, puis les réécrit avec `--resave`.

use anyhow::{bail, Result};
use pltconfig::Config;
use pltstore::PlaylistStoreConfigExt;
use plttabs::{order::tag_for, Session, TabTag};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Default)]
struct Args {
    config_dir: String,
    json: bool,
    resave: bool,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args::default();
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--config" => match it.next() {
                    Some(dir) => args.config_dir = dir,
                    None => bail!("--config needs a directory"),
                },
                "--json" => args.json = true,
                "--resave" => args.resave = true,
                other => bail!("Unknown argument: {}", other),
            }
        }
        Ok(args)
    }
}

#[derive(Debug, Serialize)]
struct TabView {
    position: usize,
    title: String,
    tag: TabTag,
    tracks: usize,
}

fn init_logging(config: &Config) {
    // RUST_LOG prend le pas sur la configuration
    let level = config
        .get_log_min_level()
        .unwrap_or_else(|_| "INFO".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));

    let registry = tracing_subscriber::registry().with(filter);
    if config.get_log_enable_console().unwrap_or(true) {
        registry
            .with(fmt::layer().with_target(true).with_level(true))
            .init();
    } else {
        registry.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse()?;
    let config = Config::load_config(&args.config_dir)?;
    init_logging(&config);

    if !config.get_open_last()? {
        warn!("playlist.open_last is disabled, the window would start with an empty tab");
    }

    let store = config.open_playlist_store()?;
    let mut session = Session::new(store);
    let outcome = session.restore(&config)?;
    info!(restored = outcome.restored, "Session loaded");

    let notebook = session.notebook();
    let views: Vec<TabView> = notebook
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| TabView {
            position: i,
            title: tab.label(),
            tag: tag_for(
                i,
                notebook.playing() == Some(tab.id()),
                notebook.current_index(),
            ),
            tracks: tab.playlist().len(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for view in &views {
            println!(
                "{:>3}  {:<8} {} ({} tracks)",
                view.position, view.tag, view.title, view.tracks
            );
        }
    }

    if args.resave {
        let report = session.save();
        for (name, err) in &report.failed {
            warn!("{}: {}", name, err);
        }
        if !report.is_complete() {
            bail!("{} tab(s) could not be saved", report.failed.len());
        }
    }

    Ok(())
}
