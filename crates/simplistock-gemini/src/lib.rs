//! Gemini client for SimpliStock.
//!
//! Builds the fixed analysis prompt plus a structured-output schema, calls
//! the Gemini generateContent endpoint, and parses the JSON text response
//! into a [`simplistock_core::analysis::StockAnalysis`].

pub mod client;
pub mod prompt;
pub mod schema;

pub use client::{GeminiClient, DEFAULT_GEMINI_URL, DEFAULT_MODEL};
