//! Wire-format DTOs and their mapping functions.
//!
//! Every field that crosses the HTTP boundary is an explicit struct
//! field here; nothing is derived from the storage schema. This is
//! also the only place cents become floats: [`Money::to_major_units`]
//! is called at serialization time and nowhere else.
//!
//! Casing is per surface: entity payloads are snake_case, the
//! dashboard payload and the report's `chartData` are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpile_core::{
    ChartPoint, DailySummary, DashboardStats, InventoryItem, ItemCategory, Money, Sale,
    SalesReport, Supplier, SupplierStatus,
};

/// Converts a float price from a request into cents.
pub fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

// =============================================================================
// Inventory Items
// =============================================================================

/// Inventory item response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: ItemCategory,
    pub quantity: i64,
    pub unit: String,
    pub min_stock_level: i64,
    pub supplier: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItem> for ItemDto {
    fn from(item: InventoryItem) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            sku: item.sku,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
            min_stock_level: item.min_stock_level,
            supplier: item.supplier_id,
            price: Money::from_cents(item.price_cents).to_major_units(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Inventory item create/update request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: ItemCategory,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub min_stock_level: i64,
    #[serde(default)]
    pub supplier: Option<String>,
    pub price: f64,
}

// =============================================================================
// Suppliers
// =============================================================================

/// Supplier response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierDto {
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

impl From<Supplier> for SupplierDto {
    fn from(s: Supplier) -> Self {
        SupplierDto {
            id: s.id,
            name: s.name,
            contact_person: s.contact_person,
            email: s.email,
            phone: s.phone,
            category: s.category,
            rating: s.rating,
            status: s.status,
            location: s.location,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Supplier create/update request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub status: SupplierStatus,
    #[serde(default)]
    pub location: String,
}

// =============================================================================
// Sales
// =============================================================================

/// Sale creation request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRequest {
    /// Item id being sold.
    pub inventory_item: String,
    pub quantity: i64,
    pub total_price: f64,
}

/// Sale response payload, with the item nested and the category
/// derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDto {
    pub id: String,
    pub inventory_item: String,
    pub item_details: ItemDto,
    pub quantity: i64,
    pub total_price: f64,
    pub category: ItemCategory,
    pub date_sold: DateTime<Utc>,
}

impl SaleDto {
    pub fn from_parts(sale: Sale, item: InventoryItem) -> Self {
        SaleDto {
            id: sale.id,
            inventory_item: sale.inventory_item_id,
            category: item.category,
            item_details: ItemDto::from(item),
            quantity: sale.quantity,
            total_price: Money::from_cents(sale.total_price_cents).to_major_units(),
            date_sold: sale.date_sold,
        }
    }
}

/// Daily summary payload: today's unit counts for the storefront
/// categories plus total revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryDto {
    pub food: i64,
    pub beverage: i64,
    pub total_revenue: f64,
}

impl From<DailySummary> for DailySummaryDto {
    fn from(s: DailySummary) -> Self {
        DailySummaryDto {
            food: s.food_quantity,
            beverage: s.beverage_quantity,
            total_revenue: Money::from_cents(s.total_revenue_cents).to_major_units(),
        }
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Dashboard payload. This surface is camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_items: i64,
    pub low_stock_items: i64,
    pub total_suppliers: i64,
    pub total_inventory_value: f64,
    pub low_stock_items_list: Vec<LowStockItemDto>,
}

/// One row of the dashboard's low-stock list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItemDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: ItemCategory,
    pub quantity: i64,
    pub min_stock_level: i64,
    pub unit: String,
    pub price: f64,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(stats: DashboardStats) -> Self {
        DashboardStatsDto {
            total_items: stats.total_items,
            low_stock_items: stats.low_stock_items,
            total_suppliers: stats.total_suppliers,
            total_inventory_value: Money::from_cents(stats.inventory_value_cents).to_major_units(),
            low_stock_items_list: stats
                .low_stock_list
                .into_iter()
                .map(|item| LowStockItemDto {
                    id: item.id,
                    name: item.name,
                    sku: item.sku,
                    category: item.category,
                    quantity: item.quantity,
                    min_stock_level: item.min_stock_level,
                    unit: item.unit,
                    price: Money::from_cents(item.price_cents).to_major_units(),
                })
                .collect(),
        }
    }
}

/// Sales report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportDto {
    pub period: String,
    pub summary: SalesSummaryDto,
    #[serde(rename = "chartData")]
    pub chart_data: Vec<ChartPointDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummaryDto {
    pub total_sales: f64,
    pub total_items: i64,
    pub order_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPointDto {
    pub label: String,
    pub value: f64,
}

impl From<SalesReport> for SalesReportDto {
    fn from(report: SalesReport) -> Self {
        SalesReportDto {
            period: report.period.as_str().to_string(),
            summary: SalesSummaryDto {
                total_sales: Money::from_cents(report.summary.total_sales_cents).to_major_units(),
                total_items: report.summary.total_items,
                order_count: report.summary.order_count,
            },
            chart_data: report
                .chart
                .into_iter()
                .map(|ChartPoint { label, value_cents }| ChartPointDto {
                    label,
                    value: Money::from_cents(value_cents).to_major_units(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Auth
// =============================================================================

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response payload: access/refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}
