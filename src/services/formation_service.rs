use tracing::info;

use crate::{dto::formation::DrawResponse, engine, error::ServiceError, state::SharedState};

/// Run the formation engine over a fresh roster snapshot.
///
/// Engine rejections are part of the draw contract and come back as a
/// successful service call carrying a rejected body; only storage failures
/// surface as errors.
pub async fn draw_teams(state: &SharedState) -> Result<DrawResponse, ServiceError> {
    let snapshot = state.roster_store().list().await?;

    match engine::form_teams(&snapshot) {
        Ok(teams) => {
            info!(teams = teams.len(), "team draw succeeded");
            Ok(teams.into())
        }
        Err(reason) => {
            info!(%reason, "team draw rejected");
            Ok(reason.into())
        }
    }
}
