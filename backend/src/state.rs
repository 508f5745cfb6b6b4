//! Shared application state injected into every handler as `web::Data<AppState>`.

use crate::config::Config;
use crate::file_store::FileStore;
use crate::store::Database;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub files: FileStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db = Database::new(config.database_path.clone());
        let files = FileStore::new(config.data_dir.clone());
        Self { config, db, files }
    }
}
