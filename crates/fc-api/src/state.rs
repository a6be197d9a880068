//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::inference::QueryParser;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Query parser (immutable, shared across requests).
    pub parser: Arc<QueryParser>,
    /// Startup configuration (CORS, response headers).
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create state with the default recognizer set.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_parser(config, QueryParser::with_defaults())
    }

    /// Create state around a caller-supplied parser.
    pub fn with_parser(config: ApiConfig, parser: QueryParser) -> Self {
        Self {
            parser: Arc::new(parser),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}
