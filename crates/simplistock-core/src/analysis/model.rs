//! Analysis domain models.
//!
//! These mirror the structured-output schema sent to Gemini. Every field is
//! required: a response missing any of them fails deserialization instead of
//! producing a half-empty analysis.

use serde::{Deserialize, Serialize};

/// A complete beginner-friendly analysis for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysis {
    /// Plain language description of what the company does and how it makes money.
    pub company_summary: String,
    pub scorecard: Scorecard,
    pub buy_now_checklist: BuyNowChecklist,
    pub post_buy_support: PostBuySupport,
    /// Recent news, possibly empty.
    pub news: Vec<NewsItem>,
}

/// Three-metric health scorecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub financial_health: String,
    pub growth: String,
    pub valuation: String,
}

/// Quick three-point checklist for the "should I buy now?" question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyNowChecklist {
    pub price_context: String,
    pub expert_opinion: String,
    pub historical_pattern: String,
}

/// Guidance for after a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBuySupport {
    pub what_to_watch: String,
    pub exit_logic: String,
}

/// One summarized news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    /// Approximate date, free text (e.g. "2 days ago").
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> &'static str {
        r#"{
            "companySummary": "Acme makes rockets and sells them to coyotes.",
            "scorecard": {
                "financialHealth": "Strong - more cash than debt.",
                "growth": "Sales are up 20% this year.",
                "valuation": "Expensive right now."
            },
            "buyNowChecklist": {
                "priceContext": "Below its 3-month average.",
                "expertOpinion": "Most analysts expect growth.",
                "historicalPattern": "Usually dips in summer."
            },
            "postBuySupport": {
                "whatToWatch": "Earnings report in October.",
                "exitLogic": "Reconsider if rocket sales stall."
            },
            "news": [
                {"title": "Acme opens new factory", "summary": "More rockets.", "date": "2 days ago"}
            ]
        }"#
    }

    #[test]
    fn test_full_analysis_parses() {
        let analysis: StockAnalysis = serde_json::from_str(full_body()).unwrap();
        assert_eq!(
            analysis.company_summary,
            "Acme makes rockets and sells them to coyotes."
        );
        assert_eq!(analysis.scorecard.growth, "Sales are up 20% this year.");
        assert_eq!(
            analysis.buy_now_checklist.historical_pattern,
            "Usually dips in summer."
        );
        assert_eq!(
            analysis.post_buy_support.exit_logic,
            "Reconsider if rocket sales stall."
        );
        assert_eq!(analysis.news.len(), 1);
        assert_eq!(analysis.news[0].title, "Acme opens new factory");
    }

    #[test]
    fn test_empty_news_is_valid() {
        let body = full_body().replace(
            r#"[
                {"title": "Acme opens new factory", "summary": "More rockets.", "date": "2 days ago"}
            ]"#,
            "[]",
        );
        let analysis: StockAnalysis = serde_json::from_str(&body).unwrap();
        assert!(analysis.news.is_empty());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        // Drop postBuySupport: the strict model must refuse the document.
        let body = r#"{
            "companySummary": "x",
            "scorecard": {"financialHealth": "a", "growth": "b", "valuation": "c"},
            "buyNowChecklist": {"priceContext": "a", "expertOpinion": "b", "historicalPattern": "c"},
            "news": []
        }"#;
        assert!(serde_json::from_str::<StockAnalysis>(body).is_err());
    }

    #[test]
    fn test_wire_format_round_trips_camel_case() {
        let analysis: StockAnalysis = serde_json::from_str(full_body()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("companySummary").is_some());
        assert!(json["postBuySupport"].get("whatToWatch").is_some());
        assert!(json["buyNowChecklist"].get("priceContext").is_some());
    }
}
