//! # Domain Types
//!
//! Core domain types used throughout Stockpile.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │ InventoryItem │   │   Supplier    │   │     Sale      │         │
//! │  │ ───────────── │   │ ───────────── │   │ ───────────── │         │
//! │  │ id (UUID)     │   │ id (UUID)     │   │ id (UUID)     │         │
//! │  │ sku (unique)  │◄──│ referenced by │   │ item (FK)     │         │
//! │  │ quantity      │   │ zero+ items   │   │ quantity      │         │
//! │  │ price_cents   │   │ status        │   │ total_price   │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │ ItemCategory  │   │ ReportPeriod  │   │  StockStatus  │         │
//! │  │  Food         │   │  Daily        │   │  All          │         │
//! │  │  Beverage     │   │  Weekly       │   │  Low          │         │
//! │  │  General      │   │  Monthly      │   │  InStock      │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Inventory items carry two identifiers:
//! - `id`: UUID v4 - immutable, used for database relations
//! - `sku`: business key - human-readable, unique across all items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Item Category
// =============================================================================

/// Category of an inventory item.
///
/// Stored lowercase in the database and transported lowercase in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Food,
    Beverage,
    General,
}

impl Default for ItemCategory {
    fn default() -> Self {
        ItemCategory::General
    }
}

impl ItemCategory {
    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Food => "food",
            ItemCategory::Beverage => "beverage",
            ItemCategory::General => "general",
        }
    }
}

impl FromStr for ItemCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(ItemCategory::Food),
            "beverage" => Ok(ItemCategory::Beverage),
            "general" => Ok(ItemCategory::General),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Supplier Status
// =============================================================================

/// Whether a supplier is currently in use.
///
/// JSON uses the capitalized form ("Active") that existing clients
/// expect; the database stores lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl Default for SupplierStatus {
    fn default() -> Self {
        SupplierStatus::Active
    }
}

// =============================================================================
// Report Period
// =============================================================================

/// Reporting window selector for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Start of the current calendar day (UTC midnight) to now.
    Daily,
    /// Now minus 7 days to now.
    Weekly,
    /// Now minus 30 days to now.
    Monthly,
}

impl ReportPeriod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = CoreError;

    /// Any value outside {daily, weekly, monthly} is an invalid argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(ReportPeriod::Daily),
            "weekly" => Ok(ReportPeriod::Weekly),
            "monthly" => Ok(ReportPeriod::Monthly),
            other => Err(CoreError::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stock Status Filter
// =============================================================================

/// Stock-level filter for inventory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// No filtering.
    All,
    /// Items at or below their minimum stock level.
    Low,
    /// Items above their minimum stock level.
    InStock,
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::All
    }
}

impl FromStr for StockStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StockStatus::All),
            "low" => Ok(StockStatus::Low),
            "in-stock" => Ok(StockStatus::InStock),
            other => Err(CoreError::InvalidStockStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// An item tracked in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit - business identifier, unique across all items.
    pub sku: String,

    /// Category used for sales grouping.
    pub category: ItemCategory,

    /// Current stock count. Expected non-negative but not enforced;
    /// recording a sale may drive it negative.
    pub quantity: i64,

    /// Unit of measure ("kg", "bottle", ...).
    pub unit: String,

    /// Threshold at or below which the item counts as low stock.
    pub min_stock_level: i64,

    /// Owning supplier; nulled when the supplier is deleted.
    pub supplier_id: Option<String>,

    /// Unit price in cents.
    pub price_cents: i64,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Low stock: quantity at or below the configured minimum.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_level
    }

    /// Value of the stock on hand (quantity × unit price).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price() * self.quantity
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier of inventory items.
///
/// Suppliers are shared: deleting one nulls out item references
/// rather than cascading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub rating: f64,
    pub status: SupplierStatus,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Append-only: never updated after creation.
///
/// `category` is NOT stored here; it is derived at read time from the
/// referenced item's current category, which may drift from the
/// category at the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: String,

    /// Sold item; deleting the item deletes its sales.
    pub inventory_item_id: String,

    /// Units sold. Positive.
    pub quantity: i64,

    /// Total charged for the sale, in cents.
    pub total_price_cents: i64,

    /// Server-assigned at creation, immutable.
    pub date_sold: DateTime<Utc>,
}

impl Sale {
    /// Returns the sale total as a Money type.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

// =============================================================================
// Report Aggregates
// =============================================================================

/// Dashboard summary, computed fresh per call over the live data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Count of all inventory items.
    pub total_items: i64,
    /// Count of items at or below their minimum stock level.
    pub low_stock_items: i64,
    /// Count of all suppliers.
    pub total_suppliers: i64,
    /// Sum over all items of quantity × price, in cents. 0 if no items.
    pub inventory_value_cents: i64,
    /// The full low-stock item rows, for the dashboard list.
    pub low_stock_list: Vec<InventoryItem>,
}

impl DashboardStats {
    #[inline]
    pub fn inventory_value(&self) -> Money {
        Money::from_cents(self.inventory_value_cents)
    }
}

/// One bucket of the sales chart.
///
/// Buckets are sparse: a period with zero sales produces no point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Hour of day ("0".."23") for daily reports, calendar date
    /// ("YYYY-MM-DD") for weekly/monthly reports.
    pub label: String,
    /// Sum of sale totals in the bucket, in cents.
    pub value_cents: i64,
}

/// Totals over the filtered sales window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of total_price over the window, in cents. 0 when empty.
    pub total_sales_cents: i64,
    /// Sum of quantities sold over the window.
    pub total_items: i64,
    /// Number of sales in the window.
    pub order_count: i64,
}

/// A period-bucketed sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub period: ReportPeriod,
    pub summary: SalesSummary,
    pub chart: Vec<ChartPoint>,
}

/// Today's sales broken down by the categories the storefront cares
/// about, plus total revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Units of food items sold today.
    pub food_quantity: i64,
    /// Units of beverage items sold today.
    pub beverage_quantity: i64,
    /// Revenue across all categories today, in cents.
    pub total_revenue_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, min_stock_level: i64) -> InventoryItem {
        InventoryItem {
            id: "itm-1".to_string(),
            name: "Rice 5kg".to_string(),
            sku: "RICE-5".to_string(),
            category: ItemCategory::Food,
            quantity,
            unit: "bag".to_string(),
            min_stock_level,
            supplier_id: None,
            price_cents: 1000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_boundary() {
        // At the minimum counts as low; one above does not.
        assert!(item(5, 5).is_low_stock());
        assert!(item(2, 5).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(item(2, 5).stock_value().cents(), 2000);
        assert_eq!(item(0, 5).stock_value().cents(), 0);
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!("daily".parse::<ReportPeriod>().unwrap(), ReportPeriod::Daily);
        assert_eq!("weekly".parse::<ReportPeriod>().unwrap(), ReportPeriod::Weekly);
        assert_eq!("monthly".parse::<ReportPeriod>().unwrap(), ReportPeriod::Monthly);
        assert!("yearly".parse::<ReportPeriod>().is_err());
        // Case sensitive.
        assert!("Daily".parse::<ReportPeriod>().is_err());
    }

    #[test]
    fn test_stock_status_parse() {
        assert_eq!("all".parse::<StockStatus>().unwrap(), StockStatus::All);
        assert_eq!("low".parse::<StockStatus>().unwrap(), StockStatus::Low);
        assert_eq!("in-stock".parse::<StockStatus>().unwrap(), StockStatus::InStock);
        assert!("backorder".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_category_json_is_lowercase() {
        let json = serde_json::to_string(&ItemCategory::Beverage).unwrap();
        assert_eq!(json, "\"beverage\"");
    }

    #[test]
    fn test_supplier_status_json_is_capitalized() {
        let json = serde_json::to_string(&SupplierStatus::Active).unwrap();
        assert_eq!(json, "\"Active\"");
    }
}
