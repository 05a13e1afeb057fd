//! Structured-output schema sent with every analysis request.
//!
//! Gemini's responseSchema uses an OpenAPI-style subset with uppercase type
//! names. Every field is marked required so a conforming response always
//! carries the full analysis.

use serde_json::{json, Value};

/// The response schema for a [`StockAnalysis`](simplistock_core::analysis::StockAnalysis).
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "companySummary": {
                "type": "STRING",
                "description": "Plain language description of what the company does and how it makes money.",
            },
            "scorecard": {
                "type": "OBJECT",
                "properties": {
                    "financialHealth": { "type": "STRING", "description": "e.g., 'Strong - They have more cash than debt.'" },
                    "growth": { "type": "STRING", "description": "e.g., 'Growing fast - Sales are up 20% this year.'" },
                    "valuation": { "type": "STRING", "description": "e.g., 'Expensive - People are paying a premium for it right now.'" },
                },
                "required": ["financialHealth", "growth", "valuation"],
            },
            "buyNowChecklist": {
                "type": "OBJECT",
                "properties": {
                    "priceContext": { "type": "STRING", "description": "e.g., 'It is currently priced lower than its 3-month average.'" },
                    "expertOpinion": { "type": "STRING", "description": "e.g., 'Most analysts think it will continue to grow.'" },
                    "historicalPattern": { "type": "STRING", "description": "e.g., 'It usually dips in the summer but recovers by winter.'" },
                },
                "required": ["priceContext", "expertOpinion", "historicalPattern"],
            },
            "postBuySupport": {
                "type": "OBJECT",
                "properties": {
                    "whatToWatch": { "type": "STRING", "description": "e.g., 'Keep an eye on their next earnings report in October.'" },
                    "exitLogic": { "type": "STRING", "description": "e.g., 'Consider selling if their core delivery business starts losing money.'" },
                },
                "required": ["whatToWatch", "exitLogic"],
            },
            "news": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "Headline of the news article" },
                        "summary": { "type": "STRING", "description": "Plain language summary of the news" },
                        "date": { "type": "STRING", "description": "Approximate date or time of the news (e.g., '2 days ago')" },
                    },
                    "required": ["title", "summary", "date"],
                },
                "description": "Recent news articles related to the stock, summarized in plain language.",
            },
        },
        "required": ["companySummary", "scorecard", "buyNowChecklist", "postBuySupport", "news"],
    })
}
