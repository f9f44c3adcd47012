use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the health payload, probing the roster store on the way.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.roster_store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "roster store health check failed");
            HealthResponse::degraded()
        }
    }
}
