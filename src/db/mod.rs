//! Database module
//!
//! Persistence gateway over an embedded SurrealDB store. Tables play the role
//! of collections: `funcionarios` (unique index on the identification number)
//! and `grupo_familiar` (indexes on the owning funcionario, the relationship
//! label and a full-text index over the name fields).

pub mod models;
pub mod repository;

use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

use crate::utils::AppError;

/// Index and analyzer definitions, applied idempotently at startup
const SCHEMA: &[&str] = &[
    "DEFINE INDEX IF NOT EXISTS funcionarios_numero ON TABLE funcionarios FIELDS numero_identificacion UNIQUE",
    "DEFINE INDEX IF NOT EXISTS grupo_familiar_funcionario ON TABLE grupo_familiar FIELDS funcionario_id",
    "DEFINE INDEX IF NOT EXISTS grupo_familiar_parentesco ON TABLE grupo_familiar FIELDS parentesco",
    "DEFINE ANALYZER IF NOT EXISTS nombres_analyzer TOKENIZERS class FILTERS lowercase, ascii",
    "DEFINE INDEX IF NOT EXISTS grupo_familiar_nombres ON TABLE grupo_familiar FIELDS nombres SEARCH ANALYZER nombres_analyzer BM25",
    "DEFINE INDEX IF NOT EXISTS grupo_familiar_apellidos ON TABLE grupo_familiar FIELDS apellidos SEARCH ANALYZER nombres_analyzer BM25",
];

/// Persistence gateway - owns the embedded database handle
///
/// Constructed once during the initialization phase and shared by every
/// repository. The driver manages its own concurrency, so the handle is a
/// cheap clone and no locking happens at this layer.
#[derive(Clone, Debug)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store at `data_dir`, select the namespace and
    /// logical database, and define the indexes
    pub async fn new(data_dir: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| AppError::database(format!("No se pudo crear el directorio de datos: {e}")))?;

        let db: Surreal<Db> = Surreal::new::<RocksDb>(data_dir)
            .await
            .map_err(|e| AppError::database(format!("Error al abrir la base de datos: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Error al seleccionar la base de datos: {e}")))?;

        for sentencia in SCHEMA {
            db.query(*sentencia)
                .await
                .map_err(|e| AppError::database(format!("Error al definir índices: {e}")))?;
        }

        tracing::info!("Base de datos abierta en {data_dir} ({namespace}/{database})");

        Ok(Self { db })
    }

    /// Shared database handle for repositories
    pub fn db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Lightweight probe used by the health endpoint
    pub async fn ping(&self) -> bool {
        self.db.query("RETURN true").await.is_ok()
    }
}
