//! # Report Repository
//!
//! The aggregation engine: dashboard statistics and period-bucketed
//! sales reports, computed fresh on every call directly against the
//! live tables. No caching layer sits in front of these queries; each
//! call sees whatever the store's isolation level makes visible.
//!
//! ## Report Windows and Buckets
//! ```text
//! period    window start          bucket key            label
//! ───────   ───────────────────   ───────────────────   ───────────
//! daily     today, UTC midnight   hour of date_sold     "0".."23"
//! weekly    now - 7 days          date of date_sold     YYYY-MM-DD
//! monthly   now - 30 days         date of date_sold     YYYY-MM-DD
//! ```
//!
//! Buckets are sparse: hours/dates with zero sales produce no chart
//! point. Consumers rely on this, so a zero-filled series would be a
//! contract break.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockpile_core::{
    ChartPoint, DailySummary, DashboardStats, InventoryItem, ReportPeriod, SalesReport,
    SalesSummary,
};

/// Repository for report aggregation queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

/// Start of the reporting window for a period, relative to `now`.
fn window_start(period: ReportPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    match period {
        ReportPeriod::Daily => now.date_naive().and_time(NaiveTime::MIN).and_utc(),
        ReportPeriod::Weekly => now - Duration::days(7),
        ReportPeriod::Monthly => now - Duration::days(30),
    }
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Computes the dashboard summary over the full live data set.
    pub async fn dashboard_stats(&self) -> DbResult<DashboardStats> {
        debug!("Computing dashboard stats");

        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&self.pool)
            .await?;

        let low_stock_items: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_items WHERE quantity <= min_stock_level",
        )
        .fetch_one(&self.pool)
        .await?;

        let total_suppliers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        let inventory_value_cents: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity * price_cents), 0) FROM inventory_items",
        )
        .fetch_one(&self.pool)
        .await?;

        let low_stock_list = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, sku, category, quantity, unit,
                   min_stock_level, supplier_id, price_cents,
                   created_at, updated_at
            FROM inventory_items
            WHERE quantity <= min_stock_level
            ORDER BY name, sku
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardStats {
            total_items,
            low_stock_items,
            total_suppliers,
            inventory_value_cents,
            low_stock_list,
        })
    }

    /// Computes the sales report for a period, windowed at the current
    /// server time.
    pub async fn sales_report(&self, period: ReportPeriod) -> DbResult<SalesReport> {
        let start = window_start(period, Utc::now());
        debug!(period = %period, start = %start, "Computing sales report");

        let chart = match period {
            ReportPeriod::Daily => {
                // One point per hour that actually has sales.
                let rows: Vec<(i64, i64)> = sqlx::query_as(
                    r#"
                    SELECT CAST(strftime('%H', date_sold) AS INTEGER) AS hour,
                           SUM(total_price_cents) AS total_cents
                    FROM sales
                    WHERE date_sold >= ?1
                    GROUP BY hour
                    ORDER BY hour
                    "#,
                )
                .bind(start)
                .fetch_all(&self.pool)
                .await?;

                rows.into_iter()
                    .map(|(hour, value_cents)| ChartPoint {
                        label: hour.to_string(),
                        value_cents,
                    })
                    .collect()
            }
            ReportPeriod::Weekly | ReportPeriod::Monthly => {
                // One point per calendar date that actually has sales.
                let rows: Vec<(String, i64)> = sqlx::query_as(
                    r#"
                    SELECT date(date_sold) AS day,
                           SUM(total_price_cents) AS total_cents
                    FROM sales
                    WHERE date_sold >= ?1
                    GROUP BY day
                    ORDER BY day
                    "#,
                )
                .bind(start)
                .fetch_all(&self.pool)
                .await?;

                rows.into_iter()
                    .map(|(day, value_cents)| ChartPoint {
                        label: day,
                        value_cents,
                    })
                    .collect()
            }
        };

        let (total_sales_cents, total_items, order_count): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_price_cents), 0),
                   COALESCE(SUM(quantity), 0),
                   COUNT(*)
            FROM sales
            WHERE date_sold >= ?1
            "#,
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        Ok(SalesReport {
            period,
            summary: SalesSummary {
                total_sales_cents,
                total_items,
                order_count,
            },
            chart,
        })
    }

    /// Today's quantities for the food and beverage categories plus
    /// total revenue across all categories.
    pub async fn daily_summary(&self) -> DbResult<DailySummary> {
        let start = window_start(ReportPeriod::Daily, Utc::now());
        debug!(start = %start, "Computing daily summary");

        let food_quantity: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(s.quantity), 0)
            FROM sales s
            INNER JOIN inventory_items i ON i.id = s.inventory_item_id
            WHERE s.date_sold >= ?1 AND i.category = 'food'
            "#,
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        let beverage_quantity: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(s.quantity), 0)
            FROM sales s
            INNER JOIN inventory_items i ON i.id = s.inventory_item_id
            WHERE s.date_sold >= ?1 AND i.category = 'beverage'
            "#,
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        let total_revenue_cents: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_price_cents), 0) FROM sales WHERE date_sold >= ?1",
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        Ok(DailySummary {
            food_quantity,
            beverage_quantity,
            total_revenue_cents,
        })
    }
}
