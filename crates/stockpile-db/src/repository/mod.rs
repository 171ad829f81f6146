//! # Repository Module
//!
//! Database repository implementations for Stockpile.
//!
//! Each repository wraps the pool and isolates the SQL for one slice
//! of the schema. Handlers never see raw SQL.
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - inventory item CRUD and filtered listing
//! - [`supplier::SupplierRepository`] - supplier CRUD
//! - [`sale::SaleRepository`] - the Sale Recorder and sale queries
//! - [`reports::ReportRepository`] - dashboard and sales-report aggregation
//! - [`user::UserRepository`] - login accounts

pub mod item;
pub mod reports;
pub mod sale;
pub mod supplier;
pub mod user;
