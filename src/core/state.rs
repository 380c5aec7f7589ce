//! Application state
//!
//! `AppState` holds the shared references every request handler needs. The
//! persistence gateway is constructed here, once, during the explicit
//! initialization phase and handed to repositories by dependency injection;
//! nothing connects to storage as a side effect of being referenced.

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DbService,
}

impl AppState {
    /// Initialize the shared state: open the database and define its indexes.
    /// Must complete before the server accepts any request.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.data_dir, &config.db_namespace, &config.db_name).await?;

        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
