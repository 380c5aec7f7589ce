//! Repository module
//!
//! Data-access components mediating between the models and the persistence
//! gateway. Every failure is one of the four classified kinds; anything the
//! driver raises that is not attributable to caller input is wrapped as
//! `Database`.

pub mod funcionario;
pub mod grupo_familiar;

pub use funcionario::FuncionarioRepository;
pub use grupo_familiar::GrupoFamiliarRepository;

use std::future::Future;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;
use surrealdb::Surreal;
use thiserror::Error;

/// Repository error taxonomy: a closed set of four kinds, checked by pattern
/// matching at the boundary
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("No encontrado: {0}")]
    NotFound(String),

    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("Error de base de datos: {0}")]
    Database(String),

    // Reserved, no current operation produces it
    #[error("No autorizado: {0}")]
    Unauthorized(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Bounded per-operation timeout; expiry surfaces as a `Database` failure
pub const OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Run a repository operation under [`OP_TIMEOUT`]
pub(crate) async fn bounded<T>(fut: impl Future<Output = RepoResult<T>>) -> RepoResult<T> {
    match tokio::time::timeout(OP_TIMEOUT, fut).await {
        Ok(res) => res,
        Err(_) => Err(RepoError::Database(
            "La operación excedió el tiempo límite".to_string(),
        )),
    }
}

/// Parse a `YYYY-MM-DD` calendar date into a stored instant (midnight UTC)
pub(crate) fn parse_fecha(valor: &str) -> RepoResult<Datetime> {
    let fecha = NaiveDate::parse_from_str(valor.trim(), "%Y-%m-%d").map_err(|_| {
        RepoError::Validation("Formato de fecha inválido (use YYYY-MM-DD)".to_string())
    })?;

    Ok(Datetime::from(fecha.and_time(NaiveTime::MIN).and_utc()))
}

/// Base repository with the shared database handle
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fecha_accepts_calendar_dates() {
        let fecha = parse_fecha("1990-05-17").unwrap();
        let esperado = NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        assert_eq!(*fecha, esperado);
    }

    #[test]
    fn parse_fecha_rejects_garbage() {
        for invalido in ["17/05/1990", "1990-13-01", "ayer", ""] {
            let err = parse_fecha(invalido).unwrap_err();
            assert!(matches!(err, RepoError::Validation(_)), "{invalido}");
        }
    }
}
