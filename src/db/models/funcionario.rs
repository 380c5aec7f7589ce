//! Funcionario model (employee record)

use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

use super::serde_helpers;

/// Funcionario record id
pub type FuncionarioId = RecordId;

/// Employee record as stored in the `funcionarios` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funcionario {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<FuncionarioId>,
    pub tipo_identificacion: String,
    /// Unique across all employee records
    pub numero_identificacion: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_civil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<Datetime>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

/// Create payload. Mandatory fields are optional at the type level so that
/// validation can aggregate every missing field into one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuncionarioCreate {
    pub tipo_identificacion: Option<String>,
    pub numero_identificacion: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub estado_civil: Option<String>,
    pub sexo: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub fecha_nacimiento: Option<String>,
}

impl FuncionarioCreate {
    /// Collect every missing mandatory field
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();

        if es_vacio(&self.tipo_identificacion) {
            errores.push("Tipo de identificación es requerido".to_string());
        }
        if es_vacio(&self.numero_identificacion) {
            errores.push("Número de identificación es requerido".to_string());
        }
        if es_vacio(&self.nombres) {
            errores.push("Nombres son requeridos".to_string());
        }
        if es_vacio(&self.apellidos) {
            errores.push("Apellidos son requeridos".to_string());
        }

        errores
    }
}

/// Update payload: provided fields are merged over the stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuncionarioUpdate {
    pub tipo_identificacion: Option<String>,
    pub numero_identificacion: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub estado_civil: Option<String>,
    pub sexo: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub fecha_nacimiento: Option<String>,
}

fn es_vacio(campo: &Option<String>) -> bool {
    campo.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validar_aggregates_every_missing_field() {
        let payload = FuncionarioCreate {
            tipo_identificacion: None,
            numero_identificacion: Some("  ".into()),
            nombres: Some("Ana".into()),
            apellidos: None,
            estado_civil: None,
            sexo: None,
            direccion: None,
            telefono: None,
            fecha_nacimiento: None,
        };

        let errores = payload.validar();
        assert_eq!(errores.len(), 3);
        assert!(errores.iter().any(|e| e.contains("Tipo de identificación")));
        assert!(errores.iter().any(|e| e.contains("Número de identificación")));
        assert!(errores.iter().any(|e| e.contains("Apellidos")));
    }

    #[test]
    fn validar_passes_with_all_mandatory_fields() {
        let payload = FuncionarioCreate {
            tipo_identificacion: Some("CC".into()),
            numero_identificacion: Some("123".into()),
            nombres: Some("Ana".into()),
            apellidos: Some("Ruiz".into()),
            estado_civil: None,
            sexo: None,
            direccion: None,
            telefono: None,
            fecha_nacimiento: None,
        };

        assert!(payload.validar().is_empty());
    }
}
