//! Query execution endpoint.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use fc_protocol::FunctionCallResponse;

/// Query string for `/execute`.
#[derive(Debug, Deserialize)]
pub struct ExecuteParams {
    /// Free-text query to resolve.
    pub q: Option<String>,
}

/// GET /execute?q=... — resolve a free-text query to a function call.
pub async fn execute_query(
    State(state): State<AppState>,
    params: Result<Query<ExecuteParams>, QueryRejection>,
) -> ApiResult<Json<FunctionCallResponse>> {
    let Query(params) = params.inspect_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed query string");
    })?;

    let Some(query) = params.q else {
        tracing::warn!("execute called without 'q'");
        return Err(ApiError::BadRequest("missing query parameter 'q'".into()));
    };

    let call = state.parser.parse(&query);
    let response = FunctionCallResponse::try_from(&call)?;

    tracing::info!(function = %response.name, "query resolved");
    Ok(Json(response))
}
