//! Grupo Familiar model (family-group member record)

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

use super::serde_helpers;

/// Grupo familiar record id
pub type GrupoFamiliarId = RecordId;

/// Default role for a family member
pub const ROL_FAMILIAR: &str = "Familiar";

/// Family-group member as stored in the `grupo_familiar` table
///
/// `funcionario_id` references the owning employee and is set at creation;
/// no update operation can mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrupoFamiliar {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<GrupoFamiliarId>,
    pub funcionario_id: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default = "rol_por_defecto")]
    pub rol: String,
    pub parentesco: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<Datetime>,
    pub created_at: Datetime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Datetime>,
}

fn rol_por_defecto() -> String {
    ROL_FAMILIAR.to_string()
}

/// Create payload. Mandatory fields are optional at the type level so that
/// validation can aggregate every missing field into one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrupoFamiliarCreate {
    pub funcionario_id: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub parentesco: Option<String>,
    pub rol: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub fecha_nacimiento: Option<String>,
}

impl GrupoFamiliarCreate {
    /// Collect every missing mandatory field
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();

        if es_vacio(&self.funcionario_id) {
            errores.push("El ID del funcionario es requerido".to_string());
        }
        if es_vacio(&self.nombres) {
            errores.push("Nombres son requeridos".to_string());
        }
        if es_vacio(&self.apellidos) {
            errores.push("Apellidos son requeridos".to_string());
        }
        if es_vacio(&self.parentesco) {
            errores.push("Parentesco es requerido".to_string());
        }

        errores
    }
}

/// Update payload. Only mutable fields appear here: the record id, the owning
/// funcionario and the creation timestamp are stripped structurally, whatever
/// the caller sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrupoFamiliarUpdate {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub parentesco: Option<String>,
    pub rol: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub fecha_nacimiento: Option<String>,
}

/// Update response projection: omits the raw id and the owning funcionario,
/// with every date serialized to ISO-8601 text. Reads return the full record;
/// this asymmetry is deliberate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrupoFamiliarActualizado {
    pub nombres: String,
    pub apellidos: String,
    pub rol: String,
    pub parentesco: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<GrupoFamiliar> for GrupoFamiliarActualizado {
    fn from(registro: GrupoFamiliar) -> Self {
        let updated_at = registro
            .updated_at
            .unwrap_or_else(|| registro.created_at.clone());

        Self {
            nombres: registro.nombres,
            apellidos: registro.apellidos,
            rol: registro.rol,
            parentesco: registro.parentesco,
            fecha_nacimiento: registro.fecha_nacimiento.map(|f| iso(&f)),
            created_at: iso(&registro.created_at),
            updated_at: iso(&updated_at),
        }
    }
}

fn iso(instante: &Datetime) -> String {
    instante.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Search criteria: exact match on the owning funcionario, case-insensitive
/// partial match on the relationship label, free text over the name fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrupoFamiliarCriterios {
    pub funcionario_id: Option<String>,
    pub parentesco: Option<String>,
    pub texto: Option<String>,
}

/// Delete confirmation returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrupoFamiliarEliminado {
    pub deleted: bool,
    pub id: String,
}

fn es_vacio(campo: &Option<String>) -> bool {
    campo.as_deref().map_or(true, |v| v.trim().is_empty())
}
