//! Catalog item contract and repository trait.
//!
//! All six catalog collections share the same lifecycle: a record is
//! created from a caller-supplied draft (the server assigns `id` and
//! `created_at`), listed, and deleted by id. Records are never updated.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::value_objects::CatalogKind;
use crate::shared::error::AppError;

/// Upper bound on the number of records returned by a list query.
pub const LIST_LIMIT: i64 = 1000;

/// Current time at the microsecond precision `TIMESTAMPTZ` keeps, so a
/// record reads back with the same `created_at` it was created with.
pub fn created_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A priced catalog record.
pub trait CatalogItem: Clone + Serialize + Send + Sync + 'static {
    /// Caller-supplied fields; everything except `id` and `created_at`.
    type Draft: DeserializeOwned + Send + 'static;

    /// Collection this record belongs to.
    const KIND: CatalogKind;

    /// Materialize a record from its draft.
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn id(&self) -> &str;

    fn unit_price(&self) -> f64;
}

/// Repository trait for a catalog collection.
#[async_trait]
pub trait CatalogRepository<T: CatalogItem>: Send + Sync {
    /// Insert a new record.
    async fn create(&self, item: &T) -> Result<T, AppError>;

    /// List records in insertion order, at most `limit` of them.
    async fn list(&self, limit: i64) -> Result<Vec<T>, AppError>;

    /// Delete a record by id. Returns `false` when nothing was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
