//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::domain::{
    CatalogItem, Conductor, Equipment, Hardware, Pole, PrimaryStructure, SecondaryStructure,
};
use crate::infrastructure::metrics;
use crate::infrastructure::repositories::{CatalogSource, Repositories};
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(handlers::root::root))
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// `/api` routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::root))
        .merge(catalog_routes::<Pole>())
        .merge(catalog_routes::<PrimaryStructure>())
        .merge(catalog_routes::<SecondaryStructure>())
        .merge(catalog_routes::<Conductor>())
        .merge(catalog_routes::<Equipment>())
        .merge(catalog_routes::<Hardware>())
        .nest("/budgets", budget_routes())
        .nest("/medium-voltage-structures", medium_voltage_routes())
        .nest("/low-voltage-structures", low_voltage_routes())
        .nest("/dropdown-options", dropdown_routes())
}

/// Create/list/delete routes for one catalog collection, mounted at its
/// own segment (`/poles`, `/conductors`, ...).
fn catalog_routes<T>() -> Router<AppState>
where
    T: CatalogItem,
    Repositories: CatalogSource<T>,
{
    let base = T::KIND.route();
    Router::new()
        .route(
            base,
            post(handlers::catalog::create_item::<T>).get(handlers::catalog::list_items::<T>),
        )
        .route(
            &format!("{}/{{id}}", base),
            delete(handlers::catalog::delete_item::<T>),
        )
}

fn budget_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::budget::create_budget).get(handlers::budget::list_budgets),
        )
        .route(
            "/{budget_id}",
            get(handlers::budget::get_budget).delete(handlers::budget::delete_budget),
        )
}

fn medium_voltage_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::structure::create_medium).get(handlers::structure::list_medium),
        )
        .route("/{id}", delete(handlers::structure::delete_medium))
}

fn low_voltage_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::structure::create_low).get(handlers::structure::list_low),
        )
        .route("/{id}", delete(handlers::structure::delete_low))
}

/// The `{key}` segment is a category for GET and an option id for DELETE.
fn dropdown_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::dropdown::create_option))
        .route(
            "/{key}",
            get(handlers::dropdown::list_options).delete(handlers::dropdown::delete_option),
        )
}
