//! # Inventory Item Repository
//!
//! Database operations for inventory items: CRUD plus the filtered
//! listing used by the inventory screen (substring search, stock
//! status, category).

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::query::ItemQuery;
use stockpile_core::InventoryItem;

const ITEM_COLUMNS: &str = "id, name, sku, category, quantity, unit, \
     min_stock_level, supplier_id, price_cents, created_at, updated_at";

/// Repository for inventory item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists items matching the given specification.
    pub async fn list(&self, query: &ItemQuery) -> DbResult<Vec<InventoryItem>> {
        debug!(?query, "Listing inventory items");

        let mut qb = QueryBuilder::new(format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items"
        ));
        query.push_filters(&mut qb);
        query.push_paging(&mut qb);

        let items = qb
            .build_query_as::<InventoryItem>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = items.len(), "Listing returned items");
        Ok(items)
    }

    /// Gets an item by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its SKU (the business key).
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE sku = ?1"
        ))
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item.
    ///
    /// A duplicate SKU surfaces as `DbError::UniqueViolation`; a
    /// supplier_id pointing nowhere as `DbError::ForeignKeyViolation`.
    pub async fn insert(&self, item: &InventoryItem) -> DbResult<()> {
        debug!(sku = %item.sku, "Inserting inventory item");

        sqlx::query(
            r#"
            INSERT INTO inventory_items (
                id, name, sku, category, quantity, unit,
                min_stock_level, supplier_id, price_cents,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.sku)
        .bind(item.category)
        .bind(item.quantity)
        .bind(&item.unit)
        .bind(item.min_stock_level)
        .bind(&item.supplier_id)
        .bind(item.price_cents)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing item. `updated_at` is re-stamped here.
    pub async fn update(&self, item: &InventoryItem) -> DbResult<()> {
        debug!(id = %item.id, "Updating inventory item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE inventory_items SET
                name = ?2,
                sku = ?3,
                category = ?4,
                quantity = ?5,
                unit = ?6,
                min_stock_level = ?7,
                supplier_id = ?8,
                price_cents = ?9,
                updated_at = ?10
            WHERE id = ?1
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.sku)
        .bind(item.category)
        .bind(item.quantity)
        .bind(&item.unit)
        .bind(item.min_stock_level)
        .bind(&item.supplier_id)
        .bind(item.price_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("InventoryItem", &item.id));
        }

        Ok(())
    }

    /// Deletes an item. Its sales go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting inventory item");

        let result = sqlx::query("DELETE FROM inventory_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("InventoryItem", id));
        }

        Ok(())
    }

    /// Counts all items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockpile_core::{ItemCategory, StockStatus};
    use uuid::Uuid;

    fn item(name: &str, sku: &str, category: ItemCategory, quantity: i64, min: i64) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category,
            quantity,
            unit: "unit".to_string(),
            min_stock_level: min,
            supplier_id: None,
            price_cents: 500,
            created_at: now,
            updated_at: now,
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = db().await;
        let repo = db.items();

        let it = item("Basmati Rice", "RICE-5", ItemCategory::Food, 10, 3);
        repo.insert(&it).await.unwrap();

        let fetched = repo.get_by_id(&it.id).await.unwrap().unwrap();
        assert_eq!(fetched.sku, "RICE-5");
        assert_eq!(fetched.category, ItemCategory::Food);
        assert_eq!(fetched.quantity, 10);

        let by_sku = repo.get_by_sku("RICE-5").await.unwrap().unwrap();
        assert_eq!(by_sku.id, it.id);
    }

    #[tokio::test]
    async fn test_duplicate_sku_rejected() {
        let db = db().await;
        let repo = db.items();

        repo.insert(&item("A", "DUP-1", ItemCategory::General, 1, 0))
            .await
            .unwrap();
        let err = repo
            .insert(&item("B", "DUP-1", ItemCategory::General, 1, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let db = db().await;
        let repo = db.items();

        let ghost = item("Ghost", "GHOST-1", ItemCategory::General, 1, 0);
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let db = db().await;
        let repo = db.items();

        repo.insert(&item("Basmati Rice", "RICE-5", ItemCategory::Food, 2, 5))
            .await
            .unwrap();
        repo.insert(&item("Cola 330ml", "COLA-330", ItemCategory::Beverage, 50, 10))
            .await
            .unwrap();
        repo.insert(&item("Napkins", "NAP-100", ItemCategory::General, 7, 7))
            .await
            .unwrap();

        // Low stock is quantity <= min_stock_level (boundary included).
        let low = repo
            .list(&ItemQuery::default().status(StockStatus::Low))
            .await
            .unwrap();
        let skus: Vec<_> = low.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["RICE-5", "NAP-100"]);

        let in_stock = repo
            .list(&ItemQuery::default().status(StockStatus::InStock))
            .await
            .unwrap();
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].sku, "COLA-330");

        // Search matches name or sku, case-insensitively.
        let hits = repo.list(&ItemQuery::default().search("rice")).await.unwrap();
        assert_eq!(hits.len(), 1);
        let hits = repo.list(&ItemQuery::default().search("cola")).await.unwrap();
        assert_eq!(hits.len(), 1);
        let hits = repo.list(&ItemQuery::default().search("NAP-")).await.unwrap();
        assert_eq!(hits.len(), 1);

        let beverages = repo
            .list(&ItemQuery::default().category(ItemCategory::Beverage))
            .await
            .unwrap();
        assert_eq!(beverages.len(), 1);

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = db().await;
        let repo = db.items();

        let it = item("Gone Soon", "GONE-1", ItemCategory::General, 1, 0);
        repo.insert(&it).await.unwrap();
        repo.delete(&it.id).await.unwrap();

        assert!(repo.get_by_id(&it.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&it.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
