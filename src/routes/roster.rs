use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use axum_valid::Valid;

use crate::{
    dto::{
        common::AckResponse,
        roster::{ParticipantDto, UpdateParticipantRequest},
    },
    error::AppError,
    services::roster_service,
    state::SharedState,
};

/// Routes handling roster slot reads and writes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", get(list_players))
        .route("/players/{id}", put(update_player))
        .route("/players/reset", post(reset_players))
}

/// Return the full roster ordered by slot id.
#[utoipa::path(
    get,
    path = "/players",
    tag = "roster",
    responses(
        (status = 200, description = "Full roster", body = Vec<ParticipantDto>)
    )
)]
pub async fn list_players(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ParticipantDto>>, AppError> {
    let roster = roster_service::list_roster(&state).await?;
    Ok(Json(roster))
}

/// Write one roster slot's name, role, and confirmation flag.
#[utoipa::path(
    put,
    path = "/players/{id}",
    tag = "roster",
    params(("id" = u32, Path, description = "Slot number of the player to update")),
    request_body = UpdateParticipantRequest,
    responses(
        (status = 200, description = "Slot updated", body = AckResponse),
        (status = 404, description = "Unknown slot id")
    )
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Valid(Json(payload)): Valid<Json<UpdateParticipantRequest>>,
) -> Result<Json<AckResponse>, AppError> {
    roster_service::update_slot(&state, id, payload).await?;
    Ok(Json(AckResponse::ack()))
}

/// Release every slot back to its unclaimed default.
#[utoipa::path(
    post,
    path = "/players/reset",
    tag = "roster",
    responses(
        (status = 200, description = "Roster cleared", body = AckResponse)
    )
)]
pub async fn reset_players(
    State(state): State<SharedState>,
) -> Result<Json<AckResponse>, AppError> {
    roster_service::reset_roster(&state).await?;
    Ok(Json(AckResponse::ack()))
}
