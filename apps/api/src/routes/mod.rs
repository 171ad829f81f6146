//! HTTP route handlers.
//!
//! One module per resource. Handlers validate input, call into the
//! repositories, and map rows through [`crate::dto`]; they contain no
//! SQL and no business arithmetic.

pub mod items;
pub mod login;
pub mod reports;
pub mod sales;
pub mod suppliers;
