use serde::Serialize;
use utoipa::ToSchema;

/// Body of the `/healthcheck` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` when the roster store answers its probe, `"degraded"` otherwise.
    pub status: String,
}

impl HealthResponse {
    /// Roster store probe succeeded.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// Roster store probe failed; the API stays up but reads may be stale.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
