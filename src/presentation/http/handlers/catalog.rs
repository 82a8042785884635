//! Catalog Handlers
//!
//! One set of handlers serves all six catalog collections; the collection
//! is picked by the type parameter when the routes are built.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::MessageResponse;
use crate::application::services::{CatalogService, CatalogServiceImpl};
use crate::domain::CatalogItem;
use crate::infrastructure::repositories::{CatalogSource, Repositories};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn service<T>(state: &AppState) -> CatalogServiceImpl<T>
where
    T: CatalogItem,
    Repositories: CatalogSource<T>,
{
    CatalogServiceImpl::new(<Repositories as CatalogSource<T>>::catalog(
        &state.repositories,
    ))
}

/// Create a catalog record
pub async fn create_item<T>(
    State(state): State<AppState>,
    Json(draft): Json<T::Draft>,
) -> Result<(StatusCode, Json<T>), AppError>
where
    T: CatalogItem,
    Repositories: CatalogSource<T>,
{
    let item = service::<T>(&state).create(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List catalog records
pub async fn list_items<T>(State(state): State<AppState>) -> Result<Json<Vec<T>>, AppError>
where
    T: CatalogItem,
    Repositories: CatalogSource<T>,
{
    let items = service::<T>(&state).list().await?;
    Ok(Json(items))
}

/// Delete a catalog record
pub async fn delete_item<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    T: CatalogItem,
    Repositories: CatalogSource<T>,
{
    service::<T>(&state).delete(&id).await?;
    Ok(Json(MessageResponse::new(T::KIND.deleted_message())))
}
