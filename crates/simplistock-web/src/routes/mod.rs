//! Route handlers.

pub mod analyze;
pub mod dashboard;
pub mod health;
