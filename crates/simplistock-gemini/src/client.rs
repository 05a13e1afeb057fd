//! Gemini HTTP client.
//!
//! Calls the generateContent endpoint with the analysis prompt and response
//! schema, then parses the candidate text into a `StockAnalysis`. An empty
//! or malformed response body is an explicit error, never a blank analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use simplistock_core::analysis::StockAnalysis;
use simplistock_core::{StockError, StockResult};

use crate::prompt::build_prompt;
use crate::schema::analysis_schema;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini analysis client.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: &str, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            client,
        }
    }

    /// Build a client from the environment.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL` overrides the default model.
    pub fn from_env() -> StockResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| StockError::MissingApiKey)?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(&api_key, &model))
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The model this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze one company by name.
    ///
    /// Rejects empty/whitespace names before any network traffic. No retries
    /// and no rate limiting: one request per call, the caller resubmits.
    pub async fn analyze(&self, stock_name: &str) -> StockResult<StockAnalysis> {
        let name = stock_name.trim();
        if name.is_empty() {
            return Err(StockError::invalid_query("Company name must not be empty"));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: build_prompt(name),
                }],
            }],
            tools: vec![Tool {
                google_search: serde_json::json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
        };

        debug!(model = %self.model, stock = name, "Calling Gemini generateContent");
        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StockError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = first_candidate_text(&body).ok_or(StockError::EmptyResponse)?;

        debug!(len = text.len(), "Received analysis text");
        parse_analysis(text)
    }
}

/// Extract the first non-empty text part from the response, if any.
fn first_candidate_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .map(str::trim)
        .find(|text| !text.is_empty())
}

/// Parse analysis JSON, tolerating a markdown code fence around the object.
fn parse_analysis(text: &str) -> StockResult<StockAnalysis> {
    let json_str = strip_code_fence(text);
    Ok(serde_json::from_str(json_str)?)
}

/// Strip a surrounding ```json / ``` fence if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    for marker in ["```json", "```"] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            if let Some(end) = rest.find("```") {
                return rest[..end].trim();
            }
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYSIS_JSON: &str = r#"{
        "companySummary": "Makes widgets.",
        "scorecard": {"financialHealth": "Strong", "growth": "Fast", "valuation": "Fair"},
        "buyNowChecklist": {"priceContext": "Low", "expertOpinion": "Positive", "historicalPattern": "Stable"},
        "postBuySupport": {"whatToWatch": "Earnings", "exitLogic": "Widget demand"},
        "news": []
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let analysis = parse_analysis(ANALYSIS_JSON).unwrap();
        assert_eq!(analysis.company_summary, "Makes widgets.");
        assert!(analysis.news.is_empty());
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{ANALYSIS_JSON}\n```");
        let analysis = parse_analysis(&fenced).unwrap();
        assert_eq!(analysis.scorecard.valuation, "Fair");
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(matches!(parse_analysis(""), Err(StockError::Json(_))));
        assert!(matches!(parse_analysis("{}"), Err(StockError::Json(_))));
        assert!(matches!(
            parse_analysis("not json at all"),
            Err(StockError::Json(_))
        ));
    }

    #[test]
    fn test_first_candidate_text_skips_empty_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  "}, {"text": "hello"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_candidate_text(&response), Some("hello"));
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(first_candidate_text(&response), None);
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: build_prompt("Acme Corp"),
                }],
            }],
            tools: vec![Tool {
                google_search: serde_json::json!({}),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(value["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Acme Corp"));
        assert!(value["tools"][0].get("google_search").is_some());
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_names() {
        let client = GeminiClient::new("test-key", DEFAULT_MODEL);
        assert!(matches!(
            client.analyze("   ").await,
            Err(StockError::InvalidQuery(_))
        ));
        assert!(matches!(
            client.analyze("").await,
            Err(StockError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            GeminiClient::new("k", DEFAULT_MODEL).with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
