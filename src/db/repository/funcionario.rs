//! Funcionario repository

use chrono::Utc;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;
use surrealdb::{RecordId, Surreal};

use super::{bounded, parse_fecha, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Funcionario, FuncionarioCreate, FuncionarioUpdate};

const TABLE: &str = "funcionarios";

/// Merge document for partial updates
#[derive(Debug, Serialize)]
struct FuncionarioDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    tipo_identificacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numero_identificacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estado_civil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sexo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fecha_nacimiento: Option<Datetime>,
    updated_at: Datetime,
}

#[derive(Clone)]
pub struct FuncionarioRepository {
    base: BaseRepository,
}

impl FuncionarioRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a funcionario. Validation aggregates every missing mandatory
    /// field; a duplicate identification number is reported as a validation
    /// failure, not a storage one.
    pub async fn create(&self, data: FuncionarioCreate) -> RepoResult<Funcionario> {
        bounded(async {
            let errores = data.validar();
            if !errores.is_empty() {
                return Err(RepoError::Validation(errores.join(", ")));
            }

            let fecha_nacimiento = data.fecha_nacimiento.as_deref().map(parse_fecha).transpose()?;
            let ahora = Datetime::from(Utc::now());

            let funcionario = Funcionario {
                id: None,
                tipo_identificacion: data.tipo_identificacion.unwrap_or_default(),
                numero_identificacion: data.numero_identificacion.unwrap_or_default(),
                nombres: data.nombres.unwrap_or_default(),
                apellidos: data.apellidos.unwrap_or_default(),
                estado_civil: data.estado_civil,
                sexo: data.sexo,
                direccion: data.direccion,
                telefono: data.telefono,
                fecha_nacimiento,
                created_at: ahora.clone(),
                updated_at: ahora,
            };

            let creado: Option<Funcionario> = self
                .base
                .db()
                .create(TABLE)
                .content(funcionario)
                .await
                .map_err(clasificar_unicidad)?;

            creado.ok_or_else(|| RepoError::Database("No se pudo crear el funcionario".to_string()))
        })
        .await
    }

    /// All funcionarios ordered by surname, then given names
    pub async fn find_all(&self) -> RepoResult<Vec<Funcionario>> {
        bounded(async {
            let funcionarios: Vec<Funcionario> = self
                .base
                .db()
                .query("SELECT * FROM funcionarios ORDER BY apellidos, nombres")
                .await?
                .take(0)?;
            Ok(funcionarios)
        })
        .await
    }

    /// Get a funcionario by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Funcionario> {
        bounded(async {
            let registro_id = parse_id(id)?;
            let funcionario: Option<Funcionario> = self.base.db().select(registro_id).await?;
            funcionario.ok_or_else(|| {
                RepoError::NotFound(format!("Funcionario con ID {} no encontrado", id))
            })
        })
        .await
    }

    /// Merge the provided fields over the stored record
    pub async fn update(&self, id: &str, datos: FuncionarioUpdate) -> RepoResult<Funcionario> {
        bounded(async {
            let registro_id = parse_id(id)?;
            let fecha_nacimiento = datos.fecha_nacimiento.as_deref().map(parse_fecha).transpose()?;

            let delta = FuncionarioDelta {
                tipo_identificacion: datos.tipo_identificacion,
                numero_identificacion: datos.numero_identificacion,
                nombres: datos.nombres,
                apellidos: datos.apellidos,
                estado_civil: datos.estado_civil,
                sexo: datos.sexo,
                direccion: datos.direccion,
                telefono: datos.telefono,
                fecha_nacimiento,
                updated_at: Datetime::from(Utc::now()),
            };

            let mut resultado = self
                .base
                .db()
                .query("UPDATE $registro MERGE $delta RETURN AFTER")
                .bind(("registro", registro_id))
                .bind(("delta", delta))
                .await
                .map_err(clasificar_unicidad)?;

            let actualizado: Option<Funcionario> =
                resultado.take(0).map_err(clasificar_unicidad)?;
            actualizado.ok_or_else(|| {
                RepoError::NotFound(format!("Funcionario con ID {} no encontrado", id))
            })
        })
        .await
    }

    /// Delete a funcionario by id. Dependent grupo_familiar records are kept;
    /// there is no cascading delete.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        bounded(async {
            let registro_id = parse_id(id)?;
            let eliminado: Option<Funcionario> = self.base.db().delete(registro_id).await?;
            if eliminado.is_none() {
                return Err(RepoError::NotFound(format!(
                    "Funcionario con ID {} no encontrado",
                    id
                )));
            }
            Ok(true)
        })
        .await
    }
}

fn parse_id(id: &str) -> RepoResult<RecordId> {
    let registro_id: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("ID no válido: {}", id)))?;
    if registro_id.table() != TABLE {
        return Err(RepoError::Validation(format!("ID no válido: {}", id)));
    }
    Ok(registro_id)
}

/// Translate a unique-index violation on the identification number into a
/// validation failure; anything else stays a storage failure
fn clasificar_unicidad(err: surrealdb::Error) -> RepoError {
    let mensaje = err.to_string();
    if mensaje.contains("already contains") {
        RepoError::Validation(
            "Ya existe un funcionario con este número de identificación".to_string(),
        )
    } else {
        RepoError::Database(mensaje)
    }
}
