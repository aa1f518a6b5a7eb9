//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Route table loaded
/// - **503 Service Unavailable**: Route table is empty
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "routes": { "status": "ok", "message": "4 routes" },
///     "history": { "status": "ok", "message": "Base: /app" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let routes_check = check_routes(&state);
    let history_check = check_history(&state);

    let all_healthy = routes_check.status == "ok" && history_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            routes: routes_check,
            history: history_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// A server without routes can only answer 404.
fn check_routes(state: &AppState) -> CheckStatus {
    let routes = state.router.routes();
    if routes.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Route table is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} routes", routes.len())),
        }
    }
}

fn check_history(state: &AppState) -> CheckStatus {
    let base = match state.router.history().base() {
        "" => "/",
        base => base,
    };
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Base: {base}")),
    }
}
