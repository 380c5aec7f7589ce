//! Grupo Familiar repository
//!
//! The structurally significant data-access component: create/read/search
//! plus a guarded partial update with field-level filtering, change detection
//! before writing, and calendar-date normalization.

use chrono::Utc;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;
use surrealdb::{RecordId, Surreal};

use super::{bounded, parse_fecha, BaseRepository, RepoError, RepoResult};
use crate::db::models::grupo_familiar::ROL_FAMILIAR;
use crate::db::models::{
    Funcionario, GrupoFamiliar, GrupoFamiliarActualizado, GrupoFamiliarCreate,
    GrupoFamiliarCriterios, GrupoFamiliarEliminado, GrupoFamiliarUpdate,
};

const TABLE: &str = "grupo_familiar";
const FUNCIONARIOS: &str = "funcionarios";

/// Results of [`GrupoFamiliarRepository::search`] are capped at this many
/// records unless the caller asks for fewer
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Merge document for the conditional update: only the fields whose value
/// actually changed, plus the refreshed update timestamp
#[derive(Debug, Serialize)]
struct GrupoFamiliarDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parentesco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fecha_nacimiento: Option<Datetime>,
    updated_at: Datetime,
}

#[derive(Clone)]
pub struct GrupoFamiliarRepository {
    base: BaseRepository,
}

impl GrupoFamiliarRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a family-group member. The owning funcionario must exist; the
    /// role defaults to "Familiar" and the creation timestamp is assigned
    /// here, never by the caller.
    pub async fn create(&self, data: GrupoFamiliarCreate) -> RepoResult<GrupoFamiliar> {
        bounded(async {
            let errores = data.validar();
            if !errores.is_empty() {
                return Err(RepoError::Validation(format!(
                    "Datos del grupo familiar no válidos: {}",
                    errores.join(", ")
                )));
            }

            let fecha_nacimiento = data.fecha_nacimiento.as_deref().map(parse_fecha).transpose()?;

            // Mandatory fields are present after validar()
            let funcionario_id = data.funcionario_id.unwrap_or_default();

            let clave = funcionario_key(&funcionario_id);
            let funcionario: Option<Funcionario> =
                self.base.db().select((FUNCIONARIOS, clave.as_str())).await?;
            if funcionario.is_none() {
                return Err(RepoError::NotFound(format!(
                    "No se encontró el funcionario con ID: {}",
                    funcionario_id
                )));
            }

            let registro = GrupoFamiliar {
                id: None,
                funcionario_id,
                nombres: data.nombres.unwrap_or_default(),
                apellidos: data.apellidos.unwrap_or_default(),
                rol: data.rol.filter(|r| !r.trim().is_empty()).unwrap_or_else(|| ROL_FAMILIAR.to_string()),
                parentesco: data.parentesco.unwrap_or_default(),
                fecha_nacimiento,
                created_at: Datetime::from(Utc::now()),
                updated_at: None,
            };

            let creado: Option<GrupoFamiliar> =
                self.base.db().create(TABLE).content(registro).await?;
            creado.ok_or_else(|| {
                RepoError::Database("No se pudo crear el miembro del grupo familiar".to_string())
            })
        })
        .await
    }

    /// Get a family member by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<GrupoFamiliar> {
        bounded(async {
            let registro_id = parse_id(id)?;
            let registro: Option<GrupoFamiliar> = self.base.db().select(registro_id).await?;
            registro.ok_or_else(|| {
                RepoError::NotFound("Miembro del grupo familiar no encontrado".to_string())
            })
        })
        .await
    }

    /// All family members of one funcionario, most recently created first
    pub async fn find_by_funcionario(&self, funcionario_id: &str) -> RepoResult<Vec<GrupoFamiliar>> {
        bounded(async {
            if funcionario_id.trim().is_empty() {
                return Err(RepoError::Validation(
                    "El ID del funcionario es requerido".to_string(),
                ));
            }

            let registros: Vec<GrupoFamiliar> = self
                .base
                .db()
                .query("SELECT * FROM grupo_familiar WHERE funcionario_id = $funcionario_id ORDER BY created_at DESC")
                .bind(("funcionario_id", funcionario_id.to_string()))
                .await?
                .take(0)?;

            Ok(registros)
        })
        .await
    }

    /// Guarded partial update.
    ///
    /// The patch carries only mutable fields, so the record id, the owning
    /// funcionario and the creation timestamp can never be rewritten. A patch
    /// whose surviving fields all equal the stored values is rejected: no-op
    /// updates fail with `Validation` instead of silently succeeding.
    ///
    /// The existence check and the merge below are two round-trips without a
    /// transaction. A concurrent writer in between can lose an update or turn
    /// it into a stale "no changes" rejection; this is accepted weak
    /// consistency, kept on purpose.
    pub async fn update(
        &self,
        id: &str,
        cambios: GrupoFamiliarUpdate,
    ) -> RepoResult<GrupoFamiliarActualizado> {
        bounded(async {
            let registro_id = parse_id(id)?;

            let existente: Option<GrupoFamiliar> =
                self.base.db().select(registro_id.clone()).await?;
            let existente =
                existente.ok_or_else(|| RepoError::NotFound("El registro no existe".to_string()))?;

            // The date must parse before anything is written
            let fecha_nueva = cambios.fecha_nacimiento.as_deref().map(parse_fecha).transpose()?;

            // Keep only the fields whose value actually differs; dates are
            // compared by instant, everything else by value
            let mut delta = GrupoFamiliarDelta {
                nombres: None,
                apellidos: None,
                parentesco: None,
                rol: None,
                fecha_nacimiento: None,
                updated_at: Datetime::from(Utc::now()),
            };
            let mut hay_cambios = false;

            if let Some(v) = cambios.nombres {
                if v != existente.nombres {
                    delta.nombres = Some(v);
                    hay_cambios = true;
                }
            }
            if let Some(v) = cambios.apellidos {
                if v != existente.apellidos {
                    delta.apellidos = Some(v);
                    hay_cambios = true;
                }
            }
            if let Some(v) = cambios.parentesco {
                if v != existente.parentesco {
                    delta.parentesco = Some(v);
                    hay_cambios = true;
                }
            }
            if let Some(v) = cambios.rol {
                if v != existente.rol {
                    delta.rol = Some(v);
                    hay_cambios = true;
               }
            }
            if let Some(f) = fecha_nueva {
                if existente.fecha_nacimiento.as_ref() != Some(&f) {
                    delta.fecha_nacimiento = Some(f);
                    hay_cambios = true;
                }
            }

            if !hay_cambios {
                return Err(RepoError::Validation(
                    "No se detectaron cambios válidos".to_string(),
                ));
            }

            let actualizado: Option<GrupoFamiliar> = self
                .base
                .db()
                .query("UPDATE $registro MERGE $delta RETURN AFTER")
                .bind(("registro", registro_id))
                .bind(("delta", delta))
                .await?
                .take(0)?;

            // The record existed moments ago; a miss here means a concurrent
            // delete won the race
            let actualizado = actualizado.ok_or_else(|| {
                RepoError::Database("Error de persistencia de datos".to_string())
            })?;

            Ok(GrupoFamiliarActualizado::from(actualizado))
        })
        .await
    }

    /// Delete a family member by id
    pub async fn delete(&self, id: &str) -> RepoResult<GrupoFamiliarEliminado> {
        bounded(async {
            let registro_id = parse_id(id)?;

            let existente: Option<GrupoFamiliar> =
                self.base.db().select(registro_id.clone()).await?;
            if existente.is_none() {
                return Err(RepoError::NotFound("El miembro no existe".to_string()));
            }

            let eliminado: Option<GrupoFamiliar> = self.base.db().delete(registro_id).await?;
            if eliminado.is_none() {
                // Existence was just checked; zero affected records means a
                // concurrent delete won the race
                return Err(RepoError::Database(
                    "No se pudo eliminar el registro".to_string(),
                ));
            }

            Ok(GrupoFamiliarEliminado {
                deleted: true,
                id: id.to_string(),
            })
        })
        .await
    }

    /// Search by criteria: exact owning funcionario, case-insensitive partial
    /// relationship label, full text over the name fields. Most recent first,
    /// capped at `limite`.
    pub async fn search(
        &self,
        criterios: GrupoFamiliarCriterios,
        limite: usize,
    ) -> RepoResult<Vec<GrupoFamiliar>> {
        bounded(async {
            let mut condiciones: Vec<&str> = Vec::new();
            if criterios.funcionario_id.is_some() {
                condiciones.push("funcionario_id = $funcionario_id");
            }
            if criterios.parentesco.is_some() {
                condiciones.push(
                    "string::contains(string::lowercase(parentesco), string::lowercase($parentesco))",
                );
            }
            if criterios.texto.is_some() {
                condiciones.push("(nombres @@ $texto OR apellidos @@ $texto)");
            }

            let mut sql = String::from("SELECT * FROM grupo_familiar");
            if !condiciones.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&condiciones.join(" AND "));
            }
            sql.push_str(" ORDER BY created_at DESC");

            let mut consulta = self.base.db().query(sql);
            if let Some(fid) = criterios.funcionario_id {
                consulta = consulta.bind(("funcionario_id", fid));
            }
            if let Some(parentesco) = criterios.parentesco {
                consulta = consulta.bind(("parentesco", parentesco));
            }
            if let Some(texto) = criterios.texto {
                consulta = consulta.bind(("texto", texto));
            }

            let mut registros: Vec<GrupoFamiliar> = consulta.await?.take(0)?;
            // The embedded driver misorders rows when WHERE and LIMIT are
            // combined with ORDER BY, so the cap is applied here instead
            registros.truncate(limite);
            Ok(registros)
        })
        .await
    }
}

/// Parse and check a caller-supplied id; anything that is not a well-formed
/// `grupo_familiar:<clave>` id is a validation failure, never a storage error
fn parse_id(id: &str) -> RepoResult<RecordId> {
    let registro_id: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("ID no válido: {}", id)))?;
    if registro_id.table() != TABLE {
        return Err(RepoError::Validation(format!("ID no válido: {}", id)));
    }
    Ok(registro_id)
}

/// The owning reference may arrive as a bare key or as a full
/// `funcionarios:<clave>` id; both resolve to the same record key
fn funcionario_key(referencia: &str) -> String {
    match referencia.parse::<RecordId>() {
        Ok(id) if id.table() == FUNCIONARIOS => id.key().to_string(),
        _ => referencia.to_string(),
    }
}
