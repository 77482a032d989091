use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::repository::BookRepository;
use crate::store::fs::FileStore;
use crate::store::Persistence;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
}

/// Where the library and its config live: `$SHELF_HOME` if set, otherwise
/// the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<ShelfContext> {
    initialize_at(data_dir()?)
}

pub fn initialize_at(data_dir: PathBuf) -> Result<ShelfContext> {
    let config = match ShelfConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable config, using defaults");
            ShelfConfig::default()
        }
    };

    let repo = BookRepository::open(Persistence::new(FileStore::new(&data_dir)));
    let api = ShelfApi::new(repo, config.render_options()).with_config_dir(&data_dir);
    tracing::debug!(dir = %data_dir.display(), "initialized");

    Ok(ShelfContext { api })
}
