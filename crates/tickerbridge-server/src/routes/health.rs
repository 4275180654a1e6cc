use axum::Json;

use crate::dto::HealthResponse;

/// Liveness probe. Independent of provider configuration.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
