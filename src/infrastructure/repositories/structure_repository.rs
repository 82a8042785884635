//! Structure Assembly Repository Implementation
//!
//! PostgreSQL implementation of the StructureAssemblyRepository trait.
//! Both voltage levels share the `structure_assemblies` table and are
//! told apart by the `voltage_level` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::{
    StructureAssembly, StructureAssemblyRepository, StructureMaterial, VoltageLevel,
};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct StructureAssemblyRow {
    id: String,
    code: String,
    description: String,
    voltage_class: String,
    materials: Json<Vec<StructureMaterial>>,
    total_price: f64,
    created_at: DateTime<Utc>,
}

impl StructureAssemblyRow {
    /// Rows are always selected by level, so the level is known by the caller.
    fn into_assembly(self, voltage_level: VoltageLevel) -> StructureAssembly {
        StructureAssembly {
            id: self.id,
            voltage_level,
            code: self.code,
            description: self.description,
            voltage_class: self.voltage_class,
            materials: self.materials.0,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL structure assembly repository implementation.
#[derive(Clone)]
pub struct PgStructureAssemblyRepository {
    pool: PgPool,
}

impl PgStructureAssemblyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StructureAssemblyRepository for PgStructureAssemblyRepository {
    async fn create(&self, assembly: &StructureAssembly) -> Result<StructureAssembly, AppError> {
        sqlx::query(
            r#"
            INSERT INTO structure_assemblies (id, voltage_level, code, description,
                                              voltage_class, materials, total_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&assembly.id)
        .bind(assembly.voltage_level.as_str())
        .bind(&assembly.code)
        .bind(&assembly.description)
        .bind(&assembly.voltage_class)
        .bind(Json(&assembly.materials))
        .bind(assembly.total_price)
        .bind(assembly.created_at)
        .execute(&self.pool)
        .await?;

        Ok(assembly.clone())
    }

    async fn list(
        &self,
        level: VoltageLevel,
        limit: i64,
    ) -> Result<Vec<StructureAssembly>, AppError> {
        let rows = sqlx::query_as::<_, StructureAssemblyRow>(
            r#"
            SELECT id, code, description, voltage_class, materials, total_price, created_at
            FROM structure_assemblies
            WHERE voltage_level = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2
            "#,
        )
        .bind(level.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_assembly(level)).collect())
    }

    async fn delete(&self, level: VoltageLevel, id: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM structure_assemblies WHERE id = $1 AND voltage_level = $2")
                .bind(id)
                .bind(level.as_str())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
