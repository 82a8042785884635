//! Catalog Service
//!
//! Create, list and delete operations shared by the six catalog
//! collections (poles, primary/secondary structures, conductors,
//! equipment, hardware).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{created_now, CatalogItem, CatalogKind, CatalogRepository, LIST_LIMIT};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Catalog service trait
#[async_trait]
pub trait CatalogService<T: CatalogItem>: Send + Sync {
    /// Register a new record; assigns `id` and `created_at`.
    async fn create(&self, draft: T::Draft) -> Result<T, CatalogError>;

    /// List records in insertion order, capped at `LIST_LIMIT`.
    async fn list(&self) -> Result<Vec<T>, CatalogError>;

    /// Delete a record by id.
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;
}

/// Catalog service errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{}", .0.not_found_message())]
    NotFound(CatalogKind),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(kind) => AppError::NotFound(kind.not_found_message().into()),
            CatalogError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CatalogService implementation
pub struct CatalogServiceImpl<T: CatalogItem> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogItem> CatalogServiceImpl<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogService<T> for CatalogServiceImpl<T> {
    async fn create(&self, draft: T::Draft) -> Result<T, CatalogError> {
        let item = T::from_draft(Uuid::new_v4().to_string(), created_now(), draft);

        let created = self
            .repo
            .create(&item)
            .await
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        let kind = T::KIND;
        metrics::record_catalog_created(kind);
        tracing::info!(
            kind = kind.as_str(),
            id = %created.id(),
            unit_price = created.unit_price(),
            "Catalog item created"
        );

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<T>, CatalogError> {
        self.repo
            .list(LIST_LIMIT)
            .await
            .map_err(|e| CatalogError::Internal(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        if !deleted {
            return Err(CatalogError::NotFound(T::KIND));
        }

        tracing::info!(kind = T::KIND.as_str(), id = %id, "Catalog item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Conductor, NewConductor};
    use crate::infrastructure::repositories::InMemoryCatalogRepository;

    fn service() -> CatalogServiceImpl<Conductor> {
        CatalogServiceImpl::new(Arc::new(InMemoryCatalogRepository::<Conductor>::new()))
    }

    fn draft(code: &str) -> NewConductor {
        NewConductor {
            conductor_type: "Alumínio".into(),
            insulation: "Nu".into(),
            section: "4 AWG".into(),
            code: code.into(),
            configuration: "CA".into(),
            unit_price: 3.2,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let service = service();
        let a = service.create(draft("CA-4")).await.unwrap();
        let b = service.create(draft("CA-4")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_created_at_has_microsecond_precision() {
        let created = service().create(draft("CA-1/0")).await.unwrap();

        assert_eq!(created.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let err = service().delete("missing").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(CatalogKind::Conductor)));
        assert_eq!(err.to_string(), "Condutor não encontrado");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service();
        let created = service.create(draft("CA-2")).await.unwrap();

        service.delete(&created.id).await.unwrap();
        assert!(service.delete(&created.id).await.is_err());
        assert!(service.list().await.unwrap().is_empty());
    }
}
