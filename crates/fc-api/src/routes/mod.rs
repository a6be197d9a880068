//! API route definitions and router builder.

pub mod execute;
pub mod health;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Tells tunnelling proxies (ngrok) to skip their browser interstitial.
pub const SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let mut router: Router<AppState> = Router::new()
        .route("/", get(health::root))
        .route("/execute", get(execute::execute_query))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors);

    // Outermost, so preflight and error responses carry it too.
    if state.config.skip_browser_warning {
        router = router.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(SKIP_BROWSER_WARNING),
            HeaderValue::from_static("true"),
        ));
    }

    router.with_state(state)
}

/// Any origin when `origins` is empty or contains `*`, otherwise exactly
/// the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}
