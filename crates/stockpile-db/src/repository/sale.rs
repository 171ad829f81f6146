//! # Sale Repository
//!
//! The Sale Recorder and read queries for the sales log.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    record() transaction                             │
//! │                                                                     │
//! │  BEGIN                                                              │
//! │    1. SELECT item      ── absent id → NotFound, nothing written     │
//! │    2. UPDATE item      ── quantity = quantity - requested           │
//! │    3. INSERT sale      ── server-assigned date_sold                 │
//! │  COMMIT                                                             │
//! │                                                                     │
//! │  Any failure between BEGIN and COMMIT rolls everything back:        │
//! │  the stock decrement and the sale row land together or not at all.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The decrement has no floor: stock may go negative. Oversell
//! prevention is out of scope here; see DESIGN.md.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use stockpile_core::{InventoryItem, ItemCategory, Sale};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

/// Flattened join row used by the listing queries.
#[derive(Debug, sqlx::FromRow)]
struct SaleWithItemRow {
    id: String,
    inventory_item_id: String,
    quantity: i64,
    total_price_cents: i64,
    date_sold: DateTime<Utc>,
    item_name: String,
    item_sku: String,
    item_category: ItemCategory,
    item_quantity: i64,
    item_unit: String,
    item_min_stock_level: i64,
    item_supplier_id: Option<String>,
    item_price_cents: i64,
    item_created_at: DateTime<Utc>,
    item_updated_at: DateTime<Utc>,
}

impl SaleWithItemRow {
    fn split(self) -> (Sale, InventoryItem) {
        let item = InventoryItem {
            id: self.inventory_item_id.clone(),
            name: self.item_name,
            sku: self.item_sku,
            category: self.item_category,
            quantity: self.item_quantity,
            unit: self.item_unit,
            min_stock_level: self.item_min_stock_level,
            supplier_id: self.item_supplier_id,
            price_cents: self.item_price_cents,
            created_at: self.item_created_at,
            updated_at: self.item_updated_at,
        };
        let sale = Sale {
            id: self.id,
            inventory_item_id: self.inventory_item_id,
            quantity: self.quantity,
            total_price_cents: self.total_price_cents,
            date_sold: self.date_sold,
        };
        (sale, item)
    }
}

const SALE_WITH_ITEM_SELECT: &str = r#"
    SELECT
        s.id, s.inventory_item_id, s.quantity, s.total_price_cents, s.date_sold,
        i.name            AS item_name,
        i.sku             AS item_sku,
        i.category        AS item_category,
        i.quantity        AS item_quantity,
        i.unit            AS item_unit,
        i.min_stock_level AS item_min_stock_level,
        i.supplier_id     AS item_supplier_id,
        i.price_cents     AS item_price_cents,
        i.created_at      AS item_created_at,
        i.updated_at      AS item_updated_at
    FROM sales s
    INNER JOIN inventory_items i ON i.id = s.inventory_item_id
"#;

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale: decrements the item's stock and appends the
    /// sale row in a single transaction.
    ///
    /// Returns the persisted sale together with the post-decrement
    /// item, so callers can serialize nested item details and the
    /// derived category without a second round trip.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - the item id does not exist; no sale is
    ///   created and no stock changes
    /// * any persistence failure rolls the whole operation back
    pub async fn record(
        &self,
        item_id: &str,
        quantity: i64,
        total_price_cents: i64,
    ) -> DbResult<(Sale, InventoryItem)> {
        debug!(item_id = %item_id, quantity = %quantity, "Recording sale");

        let mut tx = self.pool.begin().await?;

        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, sku, category, quantity, unit,
                   min_stock_level, supplier_id, price_cents,
                   created_at, updated_at
            FROM inventory_items
            WHERE id = ?1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("InventoryItem", item_id))?;

        let now = Utc::now();

        // Delta update; no floor check, stock may go negative.
        sqlx::query(
            "UPDATE inventory_items SET quantity = quantity - ?1, updated_at = ?2 WHERE id = ?3",
        )
        .bind(quantity)
        .bind(now)
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            inventory_item_id: item_id.to_string(),
            quantity,
            total_price_cents,
            date_sold: now,
        };

        sqlx::query(
            r#"
            INSERT INTO sales (id, inventory_item_id, quantity, total_price_cents, date_sold)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&sale.id)
        .bind(&sale.inventory_item_id)
        .bind(sale.quantity)
        .bind(sale.total_price_cents)
        .bind(sale.date_sold)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            sale_id = %sale.id,
            item_id = %item_id,
            quantity = %quantity,
            total_cents = %total_price_cents,
            "Sale recorded"
        );

        let updated_item = InventoryItem {
            quantity: item.quantity - quantity,
            updated_at: now,
            ..item
        };

        Ok((sale, updated_item))
    }

    /// Gets a sale with its item details.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<(Sale, InventoryItem)>> {
        let row = sqlx::query_as::<_, SaleWithItemRow>(&format!(
            "{SALE_WITH_ITEM_SELECT} WHERE s.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SaleWithItemRow::split))
    }

    /// Lists all sales with item details, most recent first.
    pub async fn list(&self) -> DbResult<Vec<(Sale, InventoryItem)>> {
        let rows = sqlx::query_as::<_, SaleWithItemRow>(&format!(
            "{SALE_WITH_ITEM_SELECT} ORDER BY s.date_sold DESC, s.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SaleWithItemRow::split).collect())
    }

    /// Counts all sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
