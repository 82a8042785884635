//! In-Memory Repositories
//!
//! Process-local implementations of every repository trait, used by the
//! `memory` storage backend and by the HTTP tests. Records are kept in
//! insertion order behind a `parking_lot::RwLock`; nothing survives a restart.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    Budget, BudgetRepository, CatalogItem, CatalogRepository, DropdownOption,
    DropdownOptionRepository, StructureAssembly, StructureAssemblyRepository, VoltageLevel,
};
use crate::shared::error::AppError;

fn take<T: Clone>(records: impl Iterator<Item = T>, limit: i64) -> Vec<T> {
    records.take(usize::try_from(limit).unwrap_or(0)).collect()
}

/// Removes the first record matching `pred`. Returns whether one was found.
fn remove_first<T>(records: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match records.iter().position(pred) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// In-memory catalog collection.
pub struct InMemoryCatalogRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryCatalogRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryCatalogRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogRepository<T> for InMemoryCatalogRepository<T> {
    async fn create(&self, item: &T) -> Result<T, AppError> {
        self.records.write().push(item.clone());
        Ok(item.clone())
    }

    async fn list(&self, limit: i64) -> Result<Vec<T>, AppError> {
        Ok(take(self.records.read().iter().cloned(), limit))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(remove_first(&mut self.records.write(), |r| r.id() == id))
    }
}

#[derive(Default)]
pub struct InMemoryBudgetRepository {
    budgets: RwLock<Vec<Budget>>,
}

impl InMemoryBudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BudgetRepository for InMemoryBudgetRepository {
    async fn create(&self, budget: &Budget) -> Result<Budget, AppError> {
        self.budgets.write().push(budget.clone());
        Ok(budget.clone())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Budget>, AppError> {
        Ok(take(self.budgets.read().iter().cloned(), limit))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Budget>, AppError> {
        Ok(self.budgets.read().iter().find(|b| b.id == id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(remove_first(&mut self.budgets.write(), |b| b.id == id))
    }
}

#[derive(Default)]
pub struct InMemoryStructureAssemblyRepository {
    assemblies: RwLock<Vec<StructureAssembly>>,
}

impl InMemoryStructureAssemblyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StructureAssemblyRepository for InMemoryStructureAssemblyRepository {
    async fn create(&self, assembly: &StructureAssembly) -> Result<StructureAssembly, AppError> {
        self.assemblies.write().push(assembly.clone());
        Ok(assembly.clone())
    }

    async fn list(
        &self,
        level: VoltageLevel,
        limit: i64,
    ) -> Result<Vec<StructureAssembly>, AppError> {
        let assemblies = self.assemblies.read();
        Ok(take(
            assemblies
                .iter()
                .filter(|a| a.voltage_level == level)
                .cloned(),
            limit,
        ))
    }

    async fn delete(&self, level: VoltageLevel, id: &str) -> Result<bool, AppError> {
        Ok(remove_first(&mut self.assemblies.write(), |a| {
            a.voltage_level == level && a.id == id
        }))
    }
}

#[derive(Default)]
pub struct InMemoryDropdownOptionRepository {
    options: RwLock<Vec<DropdownOption>>,
}

impl InMemoryDropdownOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DropdownOptionRepository for InMemoryDropdownOptionRepository {
    async fn create(&self, option: &DropdownOption) -> Result<DropdownOption, AppError> {
        self.options.write().push(option.clone());
        Ok(option.clone())
    }

    async fn list_by_category(
        &self,
        category: &str,
        limit: i64,
    ) -> Result<Vec<DropdownOption>, AppError> {
        let options = self.options.read();
        Ok(take(
            options.iter().filter(|o| o.category == category).cloned(),
            limit,
        ))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(remove_first(&mut self.options.write(), |o| o.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogItem, NewPole, Pole};
    use chrono::Utc;

    fn pole(id: &str) -> Pole {
        Pole::from_draft(
            id.into(),
            Utc::now(),
            NewPole {
                pole_type: "Concreto DT".into(),
                height: 11.0,
                capacity: 1000,
                code: "DT-11-1000".into(),
                unit_price: 1850.0,
            },
        )
    }

    #[tokio::test]
    async fn test_catalog_keeps_insertion_order_and_limit() {
        let repo = InMemoryCatalogRepository::<Pole>::new();
        for id in ["a", "b", "c"] {
            repo.create(&pole(id)).await.unwrap();
        }

        let ids: Vec<_> = repo
            .list(2)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_catalog_delete_reports_missing() {
        let repo = InMemoryCatalogRepository::<Pole>::new();
        repo.create(&pole("a")).await.unwrap();

        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
        assert!(repo.list(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_structure_delete_respects_level() {
        let repo = InMemoryStructureAssemblyRepository::new();
        repo.create(&StructureAssembly {
            id: "ce1".into(),
            voltage_level: VoltageLevel::Medium,
            code: "CE1".into(),
            description: "Estrutura CE1".into(),
            voltage_class: "13.8kV".into(),
            materials: vec![],
            total_price: 0.0,
            created_at: Utc::now(),
        })
        .await
        .unwrap();

        assert!(!repo.delete(VoltageLevel::Low, "ce1").await.unwrap());
        assert!(repo.list(VoltageLevel::Low, 10).await.unwrap().is_empty());
        assert!(repo.delete(VoltageLevel::Medium, "ce1").await.unwrap());
    }
}
