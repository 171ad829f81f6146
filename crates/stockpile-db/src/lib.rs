//! # stockpile-db: Database Layer for Stockpile
//!
//! SQLite access for the Stockpile backend, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockpile Data Flow                            │
//! │                                                                     │
//! │  HTTP handler (apps/api)                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 stockpile-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │  ┌────────────┐   ┌────────────────┐   ┌──────────────────┐  │  │
//! │  │  │  Database  │   │  Repositories  │   │    Migrations    │  │  │
//! │  │  │ (pool.rs)  │◄──│ item, supplier │   │ (embedded .sql)  │  │  │
//! │  │  │            │   │ sale, reports  │   │                  │  │  │
//! │  │  └────────────┘   │ user           │   └──────────────────┘  │  │
//! │  │                   └────────────────┘                         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (WAL mode, foreign keys ON)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`query`] - Explicit query-specification objects
//! - [`repository`] - Repository implementations

pub mod error;
pub mod migrations;
pub mod pool;
pub mod query;
pub mod repository;

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use query::ItemQuery;

// Repository re-exports for convenience
pub use repository::item::ItemRepository;
pub use repository::reports::ReportRepository;
pub use repository::sale::SaleRepository;
pub use repository::supplier::SupplierRepository;
pub use repository::user::{UserRecord, UserRepository};
