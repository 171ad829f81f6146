//! # Supplier Repository
//!
//! Database operations for suppliers. Deleting a supplier detaches
//! its items (`ON DELETE SET NULL`) instead of cascading: supplier
//! records are shared reference data, not owners of the items.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockpile_core::Supplier;

const SUPPLIER_COLUMNS: &str = "id, name, contact_person, email, phone, \
     category, rating, status, location, created_at, updated_at";

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Lists all suppliers, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }

    /// Gets a supplier by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    /// Inserts a new supplier.
    pub async fn insert(&self, supplier: &Supplier) -> DbResult<()> {
        debug!(name = %supplier.name, "Inserting supplier");

        sqlx::query(
            r#"
            INSERT INTO suppliers (
                id, name, contact_person, email, phone,
                category, rating, status, location,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.contact_person)
        .bind(&supplier.email)
        .bind(&supplier.phone)
        .bind(&supplier.category)
        .bind(supplier.rating)
        .bind(supplier.status)
        .bind(&supplier.location)
        .bind(supplier.created_at)
        .bind(supplier.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing supplier. `updated_at` is re-stamped here.
    pub async fn update(&self, supplier: &Supplier) -> DbResult<()> {
        debug!(id = %supplier.id, "Updating supplier");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE suppliers SET
                name = ?2,
                contact_person = ?3,
                email = ?4,
                phone = ?5,
                category = ?6,
                rating = ?7,
                status = ?8,
                location = ?9,
                updated_at = ?10
            WHERE id = ?1
            "#,
        )
        .bind(&supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.contact_person)
        .bind(&supplier.email)
        .bind(&supplier.phone)
        .bind(&supplier.category)
        .bind(supplier.rating)
        .bind(supplier.status)
        .bind(&supplier.location)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", &supplier.id));
        }

        Ok(())
    }

    /// Deletes a supplier. Items that referenced it keep existing with
    /// a null supplier.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting supplier");

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", id));
        }

        Ok(())
    }

    /// Counts all suppliers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
