//! RH Server - backend de registro de recursos humanos
//!
//! CRUD backend for employee records (`funcionarios`) and their family-group
//! members (`grupo_familiar`), persisted in an embedded document store.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, application state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Persistence gateway, models, repositories
//! └── utils/         # Error taxonomy, response envelopes, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{AppState, Config, Server};
pub use db::DbService;
pub use utils::{AppError, AppResponse, AppResult};
