//! Liveness and store-connectivity probes.
//!
//! | Path | Healthy | Unhealthy |
//! |------|---------|-----------|
//! | `/_health` | 200 | n/a |
//! | `/_db_health` | 200 | 502 |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rsvp_core::store::RsvpStore;
use serde_json::json;

use crate::AppState;

/// `GET /_health`: answers as long as the process can serve HTTP.
pub async fn liveness() -> &'static str { "OK" }

/// `GET /_db_health`
pub async fn database<S>(State(state): State<AppState<S>>) -> Response
where
  S: RsvpStore + 'static,
{
  match state.store.health().await {
    Ok(()) => (StatusCode::OK, "OK").into_response(),
    Err(e) => {
      tracing::error!(error = %e, "database health check failed");
      (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "message": "database unavailable" })),
      )
        .into_response()
    }
  }
}
