//! # stockpile-core: Pure Business Logic for Stockpile
//!
//! This crate is the heart of the Stockpile inventory/sales backend. It
//! contains the domain model and business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockpile Architecture                         │
//! │                                                                     │
//! │  HTTP client ──► apps/api (axum routes, DTO mapping)                │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  ★ stockpile-core (THIS CRATE) ★                                    │
//! │      types: InventoryItem, Supplier, Sale, report aggregates        │
//! │      money: integer-cent Money                                      │
//! │      validation: business rule checks                               │
//! │      NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS             │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  stockpile-db (SQLite queries, migrations, repositories)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, Supplier, Sale, reports)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: monetary values are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

/// Maximum quantity accepted for a single sale.
///
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_SALE_QUANTITY: i64 = 9_999;

/// Maximum length accepted for free-text fields (name, location, unit).
pub const MAX_TEXT_LEN: usize = 255;
