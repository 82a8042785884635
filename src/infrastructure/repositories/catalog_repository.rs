//! Catalog Repository Implementation
//!
//! PostgreSQL implementation of `CatalogRepository<T>` shared by the six
//! catalog tables. Each entity describes its table through `CatalogTable`:
//! the column list (in bind order), a row type and how to bind its values.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres};

use crate::domain::{
    CatalogItem, CatalogRepository, Conductor, Equipment, Hardware, Pole, PrimaryStructure,
    SecondaryStructure,
};
use crate::shared::error::AppError;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Table mapping for a catalog entity.
pub trait CatalogTable: CatalogItem {
    /// Database row representation.
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    /// Column names, in the order `bind_values` binds them.
    const COLUMNS: &'static [&'static str];

    /// Bind every column value onto an INSERT statement.
    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// PostgreSQL catalog repository implementation.
pub struct PgCatalogRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgCatalogRepository<T> {
    /// Create a new PgCatalogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for PgCatalogRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    )
}

fn select_sql(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY created_at ASC, id ASC LIMIT $1",
        columns.join(", "),
        table
    )
}

#[async_trait]
impl<T: CatalogTable> CatalogRepository<T> for PgCatalogRepository<T> {
    async fn create(&self, item: &T) -> Result<T, AppError> {
        let sql = insert_sql(T::KIND.table(), T::COLUMNS);

        item.bind_values(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;

        Ok(item.clone())
    }

    async fn list(&self, limit: i64) -> Result<Vec<T>, AppError> {
        let sql = select_sql(T::KIND.table(), T::COLUMNS);

        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::KIND.table());

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Table mappings
// ---------------------------------------------------------------------------

#[derive(Debug, sqlx::FromRow)]
pub struct PoleRow {
    id: String,
    pole_type: String,
    height: f64,
    capacity: i32,
    code: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<PoleRow> for Pole {
    fn from(row: PoleRow) -> Self {
        Self {
            id: row.id,
            pole_type: row.pole_type,
            height: row.height,
            capacity: row.capacity,
            code: row.code,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for Pole {
    type Row = PoleRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "pole_type",
        "height",
        "capacity",
        "code",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.pole_type)
            .bind(self.height)
            .bind(self.capacity)
            .bind(&self.code)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct PrimaryStructureRow {
    id: String,
    code: String,
    description: String,
    phases: i32,
    voltage_class: String,
    network_type: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<PrimaryStructureRow> for PrimaryStructure {
    fn from(row: PrimaryStructureRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            description: row.description,
            phases: row.phases,
            voltage_class: row.voltage_class,
            network_type: row.network_type,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for PrimaryStructure {
    type Row = PrimaryStructureRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "code",
        "description",
        "phases",
        "voltage_class",
        "network_type",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.code)
            .bind(&self.description)
            .bind(self.phases)
            .bind(&self.voltage_class)
            .bind(&self.network_type)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct SecondaryStructureRow {
    id: String,
    code: String,
    description: String,
    conductor_count: i32,
    network_type: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<SecondaryStructureRow> for SecondaryStructure {
    fn from(row: SecondaryStructureRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            description: row.description,
            conductor_count: row.conductor_count,
            network_type: row.network_type,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for SecondaryStructure {
    type Row = SecondaryStructureRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "code",
        "description",
        "conductor_count",
        "network_type",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.code)
            .bind(&self.description)
            .bind(self.conductor_count)
            .bind(&self.network_type)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ConductorRow {
    id: String,
    conductor_type: String,
    insulation: String,
    section: String,
    code: String,
    configuration: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<ConductorRow> for Conductor {
    fn from(row: ConductorRow) -> Self {
        Self {
            id: row.id,
            conductor_type: row.conductor_type,
            insulation: row.insulation,
            section: row.section,
            code: row.code,
            configuration: row.configuration,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for Conductor {
    type Row = ConductorRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "conductor_type",
        "insulation",
        "section",
        "code",
        "configuration",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.conductor_type)
            .bind(&self.insulation)
            .bind(&self.section)
            .bind(&self.code)
            .bind(&self.configuration)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct EquipmentRow {
    id: String,
    category: String,
    equipment_type: String,
    code: String,
    description: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Self {
            id: row.id,
            category: row.category,
            equipment_type: row.equipment_type,
            code: row.code,
            description: row.description,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for Equipment {
    type Row = EquipmentRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "category",
        "equipment_type",
        "code",
        "description",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.category)
            .bind(&self.equipment_type)
            .bind(&self.code)
            .bind(&self.description)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct HardwareRow {
    id: String,
    category: String,
    description: String,
    code: String,
    unit_price: f64,
    created_at: DateTime<Utc>,
}

impl From<HardwareRow> for Hardware {
    fn from(row: HardwareRow) -> Self {
        Self {
            id: row.id,
            category: row.category,
            description: row.description,
            code: row.code,
            unit_price: row.unit_price,
            created_at: row.created_at,
        }
    }
}

impl CatalogTable for Hardware {
    type Row = HardwareRow;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "category",
        "description",
        "code",
        "unit_price",
        "created_at",
    ];

    fn bind_values<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.id)
            .bind(&self.category)
            .bind(&self.description)
            .bind(&self.code)
            .bind(self.unit_price)
            .bind(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sql_placeholders_match_columns() {
        assert_eq!(
            insert_sql("hardware", Hardware::COLUMNS),
            "INSERT INTO hardware (id, category, description, code, unit_price, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)"
        );
    }

    #[test]
    fn test_select_sql_is_capped() {
        let sql = select_sql("poles", Pole::COLUMNS);
        assert!(sql.starts_with("SELECT id, pole_type, height"));
        assert!(sql.ends_with("LIMIT $1"));
    }

    #[test]
    fn test_every_table_binds_created_at_last() {
        for columns in [
            Pole::COLUMNS,
            PrimaryStructure::COLUMNS,
            SecondaryStructure::COLUMNS,
            Conductor::COLUMNS,
            Equipment::COLUMNS,
            Hardware::COLUMNS,
        ] {
            assert_eq!(columns.first(), Some(&"id"));
            assert_eq!(columns.last(), Some(&"created_at"));
        }
    }
}
