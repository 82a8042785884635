//! Dropdown Option Handlers
//!
//! `GET /dropdown-options/{category}` and `DELETE /dropdown-options/{id}`
//! share one path pattern; the segment means a category for GET and an
//! option id for DELETE.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{CreateDropdownOptionRequest, MessageResponse};
use crate::application::services::dropdown_service::DELETED_MESSAGE;
use crate::application::services::{DropdownOptionService, DropdownOptionServiceImpl};
use crate::domain::DropdownOption;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn service(state: &AppState) -> DropdownOptionServiceImpl {
    DropdownOptionServiceImpl::new(state.repositories.dropdown_options.clone())
}

pub async fn create_option(
    State(state): State<AppState>,
    Json(body): Json<CreateDropdownOptionRequest>,
) -> Result<(StatusCode, Json<DropdownOption>), AppError> {
    body.validate().map_err(validation_error)?;

    let option = service(&state).create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(option)))
}

pub async fn list_options(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<DropdownOption>>, AppError> {
    let options = service(&state).list(&category).await?;
    Ok(Json(options))
}

pub async fn delete_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete(&id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
