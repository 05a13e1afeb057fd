//! Stock analysis domain (summary, scorecard, checklist, support, news).

pub mod model;

pub use model::{BuyNowChecklist, NewsItem, PostBuySupport, Scorecard, StockAnalysis};
