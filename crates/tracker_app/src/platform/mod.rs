mod app;
mod config;
mod dom;
mod effects;
mod events;
mod logging;
mod persistence;
mod router;
mod shell;
mod ui;

use std::io;
use std::path::Path;

use chrono::Local;
use tracker_engine::{ensure_storage_dir, FileStore, PersistenceAdapter};
use tracker_logging::tracker_warn;

use app::App;
use config::{AppConfig, CONFIG_FILENAME};
use dom::HeadlessDom;
use persistence::{load_catalog, PreferenceStore, SavedJobStore, Storage};
use ui::render::RenderContext;

pub fn run_app() -> anyhow::Result<()> {
    let (config, warning) = AppConfig::load(Path::new(CONFIG_FILENAME));
    logging::initialize(config.log_destination, config.log_level);
    config.log_summary(warning.as_deref());

    let catalog = load_catalog(config.catalog_path.as_deref())?;

    // An unusable directory only costs durability; the session still runs.
    if let Err(err) = ensure_storage_dir(&config.storage_dir) {
        tracker_warn!(
            "Storage unavailable at {:?}: {}; changes stay in memory",
            config.storage_dir,
            err
        );
    }
    let mut store = FileStore::new(config.storage_dir.clone());
    if let Some(limit) = config.storage_quota_bytes {
        store = store.with_quota(limit);
    }
    let storage = Storage::new(
        PersistenceAdapter::new(store),
        PreferenceStore::new(config.preferences_key.clone()),
        SavedJobStore::new(config.saved_jobs_key.clone()),
    );

    let ctx = RenderContext {
        today: Local::now().date_naive(),
    };
    let mut app = App::start(catalog, storage, HeadlessDom::new(&config.initial_path), ctx);

    shell::run(&mut app, io::stdin().lock(), io::stdout().lock())
}
