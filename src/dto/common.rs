use serde::Serialize;
use utoipa::ToSchema;

/// Minimal acknowledgement body returned by roster mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    /// Always `true`; failures travel as error responses instead.
    pub success: bool,
}

impl AckResponse {
    /// Build a positive acknowledgement.
    pub fn ack() -> Self {
        Self { success: true }
    }
}
