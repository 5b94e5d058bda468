//! Student CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::StudentPayload;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.students.list().await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.students.read(id).await?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let row = state.students.create(payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Json(payload) = body?;
    let row = state.students.update(id, payload).await?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.students.delete(id).await?;
    Ok(StatusCode::OK)
}
