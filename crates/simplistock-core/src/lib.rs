//! SimpliStock Core Library
//!
//! Domain models and shared error types for SimpliStock.

pub mod analysis;
pub mod error;

pub use error::{StockError, StockResult};
