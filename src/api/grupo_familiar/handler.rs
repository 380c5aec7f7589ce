//! Grupo Familiar API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::core::AppState;
use crate::db::models::{
    GrupoFamiliar, GrupoFamiliarActualizado, GrupoFamiliarCreate, GrupoFamiliarCriterios,
    GrupoFamiliarEliminado, GrupoFamiliarUpdate,
};
use crate::db::repository::grupo_familiar::DEFAULT_SEARCH_LIMIT;
use crate::db::repository::GrupoFamiliarRepository;
use crate::utils::{AppResponse, AppResult};

/// Create a new family-group member
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GrupoFamiliarCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<GrupoFamiliar>>)> {
    let repo = GrupoFamiliarRepository::new(state.db.db());
    let miembro = repo.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        AppResponse::success(miembro, "Miembro del grupo familiar creado exitosamente"),
    ))
}

/// Get a family member by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<GrupoFamiliar>>> {
    let repo = GrupoFamiliarRepository::new(state.db.db());
    let miembro = repo.find_by_id(&id).await?;

    Ok(AppResponse::success(
        miembro,
        "Miembro del grupo familiar obtenido exitosamente",
    ))
}

/// All family members of one funcionario, most recent first
pub async fn get_by_funcionario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<GrupoFamiliar>>>> {
    let repo = GrupoFamiliarRepository::new(state.db.db());
    let miembros = repo.find_by_funcionario(&id).await?;

    Ok(AppResponse::success(
        miembros,
        "Grupo familiar obtenido exitosamente",
    ))
}

/// Apply a guarded partial update to a family member
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GrupoFamiliarUpdate>,
) -> AppResult<Json<AppResponse<GrupoFamiliarActualizado>>> {
    let repo = GrupoFamiliarRepository::new(state.db.db());
    let actualizado = repo.update(&id, payload).await?;

    Ok(AppResponse::success(
        actualizado,
        "Miembro del grupo familiar actualizado exitosamente",
    ))
}

/// Delete a family member
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<GrupoFamiliarEliminado>>> {
    let repo = GrupoFamiliarRepository::new(state.db.db());
    let resultado = repo.delete(&id).await?;

    Ok(AppResponse::success(
        resultado,
        "Miembro del grupo familiar eliminado exitosamente",
    ))
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct BusquedaParams {
    pub funcionario_id: Option<String>,
    pub parentesco: Option<String>,
    pub texto: Option<String>,
    pub limite: Option<usize>,
}

/// Search family members by criteria
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<BusquedaParams>,
) -> AppResult<Json<AppResponse<Vec<GrupoFamiliar>>>> {
    let repo = GrupoFamiliarRepository::new(state.db.db());

    let criterios = GrupoFamiliarCriterios {
        funcionario_id: params.funcionario_id,
        parentesco: params.parentesco,
        texto: params.texto,
    };
    let limite = params.limite.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let miembros = repo.search(criterios, limite).await?;

    Ok(AppResponse::success(miembros, "Búsqueda completada"))
}
