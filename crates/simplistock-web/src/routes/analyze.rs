//! Analysis route handler.
//!
//! Single failure boundary for the page: an invalid query surfaces as a 400
//! with its own message, everything else (transport, API errors, malformed
//! responses) is logged and collapsed into one fixed user-facing string.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use simplistock_core::analysis::StockAnalysis;
use simplistock_core::StockError;

use crate::state::AppState;

/// The only error text the page ever shows for a failed analysis.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Could not analyze this stock. Please try another one.";

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// POST /api/analyze - Run one analysis for the submitted company name.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<StockAnalysis>, (StatusCode, Json<ErrorBody>)> {
    let analysis = state
        .gemini
        .analyze(&req.query)
        .await
        .map_err(error_response)?;

    Ok(Json(analysis))
}

/// Map a client error onto the wire, logging the detail the user never sees.
fn error_response(err: StockError) -> (StatusCode, Json<ErrorBody>) {
    match err {
        StockError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })),
        other => {
            error!(error = %other, "Analysis failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: ANALYSIS_FAILED_MESSAGE.to_string(),
                }),
            )
        }
    }
}
