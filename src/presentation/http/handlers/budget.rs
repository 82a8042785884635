//! Budget Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{CreateBudgetRequest, MessageResponse};
use crate::application::services::budget_service::DELETED_MESSAGE;
use crate::application::services::{BudgetService, BudgetServiceImpl};
use crate::domain::Budget;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn service(state: &AppState) -> BudgetServiceImpl {
    BudgetServiceImpl::new(state.repositories.budgets.clone())
}

/// Create a budget
pub async fn create_budget(
    State(state): State<AppState>,
    Json(body): Json<CreateBudgetRequest>,
) -> Result<(StatusCode, Json<Budget>), AppError> {
    body.validate().map_err(validation_error)?;

    let budget = service(&state).create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

/// List budgets
pub async fn list_budgets(State(state): State<AppState>) -> Result<Json<Vec<Budget>>, AppError> {
    let budgets = service(&state).list().await?;
    Ok(Json(budgets))
}

/// Get budget by ID
pub async fn get_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
) -> Result<Json<Budget>, AppError> {
    let budget = service(&state).get(&budget_id).await?;
    Ok(Json(budget))
}

/// Delete budget
pub async fn delete_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    service(&state).delete(&budget_id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
