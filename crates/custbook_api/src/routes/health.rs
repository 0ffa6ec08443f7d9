use crate::response::DataResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

/// Liveness probe. Does not touch storage.
pub(super) async fn health() -> Json<DataResponse<HealthStatus>> {
    Json(DataResponse::new(HealthStatus {
        status: "ok",
        version: custbook_core::core_version(),
    }))
}
