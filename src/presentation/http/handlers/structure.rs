//! Structure Assembly Handlers
//!
//! Medium and low voltage assemblies share these handlers; the level is
//! bound when the routes are built.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{CreateStructureAssemblyRequest, MessageResponse};
use crate::application::services::structure_service::DELETED_MESSAGE;
use crate::application::services::{StructureAssemblyService, StructureAssemblyServiceImpl};
use crate::domain::{StructureAssembly, VoltageLevel};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn service(state: &AppState) -> StructureAssemblyServiceImpl {
    StructureAssemblyServiceImpl::new(state.repositories.structure_assemblies.clone())
}

async fn create_structure(
    level: VoltageLevel,
    state: AppState,
    body: CreateStructureAssemblyRequest,
) -> Result<(StatusCode, Json<StructureAssembly>), AppError> {
    body.validate().map_err(validation_error)?;

    let assembly = service(&state).create(level, body.into()).await?;
    Ok((StatusCode::CREATED, Json(assembly)))
}

async fn list_structures(
    level: VoltageLevel,
    state: AppState,
) -> Result<Json<Vec<StructureAssembly>>, AppError> {
    let assemblies = service(&state).list(level).await?;
    Ok(Json(assemblies))
}

async fn delete_structure(
    level: VoltageLevel,
    state: AppState,
    id: String,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete(level, &id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

pub async fn create_medium(
    State(state): State<AppState>,
    Json(body): Json<CreateStructureAssemblyRequest>,
) -> Result<(StatusCode, Json<StructureAssembly>), AppError> {
    create_structure(VoltageLevel::Medium, state, body).await
}

pub async fn list_medium(
    State(state): State<AppState>,
) -> Result<Json<Vec<StructureAssembly>>, AppError> {
    list_structures(VoltageLevel::Medium, state).await
}

pub async fn delete_medium(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_structure(VoltageLevel::Medium, state, id).await
}

pub async fn create_low(
    State(state): State<AppState>,
    Json(body): Json<CreateStructureAssemblyRequest>,
) -> Result<(StatusCode, Json<StructureAssembly>), AppError> {
    create_structure(VoltageLevel::Low, state, body).await
}

pub async fn list_low(
    State(state): State<AppState>,
) -> Result<Json<Vec<StructureAssembly>>, AppError> {
    list_structures(VoltageLevel::Low, state).await
}

pub async fn delete_low(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_structure(VoltageLevel::Low, state, id).await
}
