//! Funcionario API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::AppState;
use crate::db::models::{Funcionario, FuncionarioCreate, FuncionarioUpdate};
use crate::db::repository::FuncionarioRepository;
use crate::utils::{AppResponse, AppResult};

/// Create a new funcionario
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<FuncionarioCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<Funcionario>>)> {
    let repo = FuncionarioRepository::new(state.db.db());
    let funcionario = repo.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        AppResponse::success(funcionario, "Funcionario creado exitosamente"),
    ))
}

/// List all funcionarios, ordered by surname then given names
pub async fn list(State(state): State<AppState>) -> AppResult<Json<AppResponse<Vec<Funcionario>>>> {
    let repo = FuncionarioRepository::new(state.db.db());
    let funcionarios = repo.find_all().await?;

    Ok(AppResponse::success(
        funcionarios,
        "Funcionarios obtenidos exitosamente",
    ))
}

/// Get a funcionario by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Funcionario>>> {
    let repo = FuncionarioRepository::new(state.db.db());
    let funcionario = repo.find_by_id(&id).await?;

    Ok(AppResponse::success(
        funcionario,
        "Funcionario obtenido exitosamente",
    ))
}

/// Merge the provided fields over a funcionario
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<FuncionarioUpdate>,
) -> AppResult<Json<AppResponse<Funcionario>>> {
    let repo = FuncionarioRepository::new(state.db.db());
    let funcionario = repo.update(&id, payload).await?;

    Ok(AppResponse::success(
        funcionario,
        "Funcionario actualizado exitosamente",
    ))
}

/// Delete a funcionario
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = FuncionarioRepository::new(state.db.db());
    repo.delete(&id).await?;

    Ok(AppResponse::message("Funcionario eliminado exitosamente"))
}
