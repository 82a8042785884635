//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer, in two flavors:
//!
//! - **PostgreSQL** (`Pg*Repository`) - the production backend
//! - **In-memory** (`InMemory*Repository`) - process-local, for development and tests
//!
//! `Repositories` bundles one instance of every trait object so the HTTP
//! layer does not care which backend was selected at startup.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use distribution_budget::infrastructure::repositories::Repositories;
//!
//! let repositories = Repositories::postgres(pool);
//! let poles = repositories.poles.list(1000).await?;
//! ```

pub mod catalog_repository;
pub mod budget_repository;
pub mod structure_repository;
pub mod dropdown_repository;
pub mod memory;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    BudgetRepository, CatalogItem, CatalogRepository, Conductor, DropdownOptionRepository,
    Equipment, Hardware, Pole, PrimaryStructure, SecondaryStructure, StructureAssemblyRepository,
};

pub use budget_repository::PgBudgetRepository;
pub use catalog_repository::{CatalogTable, PgCatalogRepository};
pub use dropdown_repository::PgDropdownOptionRepository;
pub use memory::{
    InMemoryBudgetRepository, InMemoryCatalogRepository, InMemoryDropdownOptionRepository,
    InMemoryStructureAssemblyRepository,
};
pub use structure_repository::PgStructureAssemblyRepository;

/// One handle per collection, shared across request handlers.
#[derive(Clone)]
pub struct Repositories {
    pub poles: Arc<dyn CatalogRepository<Pole>>,
    pub primary_structures: Arc<dyn CatalogRepository<PrimaryStructure>>,
    pub secondary_structures: Arc<dyn CatalogRepository<SecondaryStructure>>,
    pub conductors: Arc<dyn CatalogRepository<Conductor>>,
    pub equipment: Arc<dyn CatalogRepository<Equipment>>,
    pub hardware: Arc<dyn CatalogRepository<Hardware>>,
    pub budgets: Arc<dyn BudgetRepository>,
    pub structure_assemblies: Arc<dyn StructureAssemblyRepository>,
    pub dropdown_options: Arc<dyn DropdownOptionRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            poles: Arc::new(PgCatalogRepository::<Pole>::new(pool.clone())),
            primary_structures: Arc::new(PgCatalogRepository::<PrimaryStructure>::new(pool.clone())),
            secondary_structures: Arc::new(PgCatalogRepository::<SecondaryStructure>::new(pool.clone())),
            conductors: Arc::new(PgCatalogRepository::<Conductor>::new(pool.clone())),
            equipment: Arc::new(PgCatalogRepository::<Equipment>::new(pool.clone())),
            hardware: Arc::new(PgCatalogRepository::<Hardware>::new(pool.clone())),
            budgets: Arc::new(PgBudgetRepository::new(pool.clone())),
            structure_assemblies: Arc::new(PgStructureAssemblyRepository::new(pool.clone())),
            dropdown_options: Arc::new(PgDropdownOptionRepository::new(pool)),
        }
    }

    /// Empty process-local repositories.
    pub fn in_memory() -> Self {
        Self {
            poles: Arc::new(InMemoryCatalogRepository::<Pole>::new()),
            primary_structures: Arc::new(InMemoryCatalogRepository::<PrimaryStructure>::new()),
            secondary_structures: Arc::new(InMemoryCatalogRepository::<SecondaryStructure>::new()),
            conductors: Arc::new(InMemoryCatalogRepository::<Conductor>::new()),
            equipment: Arc::new(InMemoryCatalogRepository::<Equipment>::new()),
            hardware: Arc::new(InMemoryCatalogRepository::<Hardware>::new()),
            budgets: Arc::new(InMemoryBudgetRepository::new()),
            structure_assemblies: Arc::new(InMemoryStructureAssemblyRepository::new()),
            dropdown_options: Arc::new(InMemoryDropdownOptionRepository::new()),
        }
    }
}

/// Type-directed lookup of a catalog repository, so generic handlers can
/// reach the collection for `T`.
pub trait CatalogSource<T: CatalogItem> {
    fn catalog(&self) -> Arc<dyn CatalogRepository<T>>;
}

macro_rules! catalog_source {
    ($($entity:ty => $field:ident),* $(,)?) => {
        $(
            impl CatalogSource<$entity> for Repositories {
                fn catalog(&self) -> Arc<dyn CatalogRepository<$entity>> {
                    self.$field.clone()
                }
            }
        )*
    };
}

catalog_source! {
    Pole => poles,
    PrimaryStructure => primary_structures,
    SecondaryStructure => secondary_structures,
    Conductor => conductors,
    Equipment => equipment,
    Hardware => hardware,
}
