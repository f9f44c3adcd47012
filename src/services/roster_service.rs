use tracing::{debug, info};

use crate::{
    dao::storage::SlotUpdate,
    dto::roster::{ParticipantDto, UpdateParticipantRequest},
    error::ServiceError,
    state::SharedState,
};

/// Full roster snapshot ordered by slot id, projected to wire DTOs.
pub async fn list_roster(state: &SharedState) -> Result<Vec<ParticipantDto>, ServiceError> {
    let roster = state.roster_store().list().await?;
    Ok(roster.into_iter().map(Into::into).collect())
}

/// Write one roster slot. The name is stored trimmed; an unknown slot id is a
/// not-found error.
pub async fn update_slot(
    state: &SharedState,
    id: u32,
    request: UpdateParticipantRequest,
) -> Result<ParticipantDto, ServiceError> {
    let update = SlotUpdate {
        name: request.name,
        role: request.role,
        confirmed: request.confirmed,
    };

    let Some(stored) = state.roster_store().update(id, update).await? else {
        return Err(ServiceError::NotFound(format!(
            "roster slot `{id}` not found"
        )));
    };

    debug!(slot = id, confirmed = stored.confirmed, "roster slot updated");
    Ok(stored.into())
}

/// Return every slot to its unclaimed default.
pub async fn reset_roster(state: &SharedState) -> Result<(), ServiceError> {
    state.roster_store().reset().await?;
    info!("roster reset to unclaimed slots");
    Ok(())
}
