//! # Query Specifications
//!
//! Explicit, composable query-specification objects passed to the
//! repositories. Filters are plain data; the repository turns them
//! into SQL with bound parameters via `sqlx::QueryBuilder`. No
//! ORM-style chained mutation of a global queryset.

use sqlx::{QueryBuilder, Sqlite};

use stockpile_core::{ItemCategory, StockStatus};

/// Filter/paging specification for inventory item listings.
///
/// ## Example
/// ```rust,ignore
/// let query = ItemQuery::default()
///     .search("rice")
///     .status(StockStatus::Low)
///     .limit(50);
/// let items = db.items().list(&query).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring match on name or sku.
    pub search: Option<String>,

    /// Stock-level filter (all / low / in-stock).
    pub status: StockStatus,

    /// Restrict to a single category.
    pub category: Option<ItemCategory>,

    /// Maximum rows to return.
    pub limit: Option<i64>,

    /// Rows to skip before returning.
    pub offset: Option<i64>,
}

impl ItemQuery {
    /// Sets the substring search term. Blank terms are ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Sets the stock-level filter.
    pub fn status(mut self, status: StockStatus) -> Self {
        self.status = status;
        self
    }

    /// Restricts to a single category.
    pub fn category(mut self, category: ItemCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the row limit.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the row offset.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Appends the WHERE clauses for this specification.
    ///
    /// The builder must already contain a statement ending in a
    /// position where `WHERE` is valid.
    pub(crate) fn push_filters<'a>(&'a self, qb: &mut QueryBuilder<'a, Sqlite>) {
        qb.push(" WHERE 1 = 1");

        if let Some(ref term) = self.search {
            let pattern = format!("%{}%", term.trim().to_lowercase());
            qb.push(" AND (LOWER(name) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(sku) LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        match self.status {
            StockStatus::All => {}
            StockStatus::Low => {
                qb.push(" AND quantity <= min_stock_level");
            }
            StockStatus::InStock => {
                qb.push(" AND quantity > min_stock_level");
            }
        }

        if let Some(category) = self.category {
            qb.push(" AND category = ").push_bind(category.as_str());
        }
    }

    /// Appends ORDER BY / LIMIT / OFFSET.
    pub(crate) fn push_paging(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(" ORDER BY name, sku");

        if let Some(limit) = self.limit {
            qb.push(" LIMIT ").push_bind(limit);

            if let Some(offset) = self.offset {
                qb.push(" OFFSET ").push_bind(offset);
            }
        }
    }
}
