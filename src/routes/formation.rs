use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::formation::DrawResponse,
    error::AppError,
    services::formation_service,
    state::SharedState,
};

/// Routes triggering a team draw.
pub fn router() -> Router<SharedState> {
    Router::new().route("/teams/draw", post(draw_teams))
}

/// Partition the confirmed players into balanced teams.
///
/// Business rejections (too few players, not enough goalkeepers) come back
/// with HTTP 200 and `success: false`.
#[utoipa::path(
    post,
    path = "/teams/draw",
    tag = "teams",
    responses(
        (status = 200, description = "Draw outcome", body = DrawResponse)
    )
)]
pub async fn draw_teams(
    State(state): State<SharedState>,
) -> Result<Json<DrawResponse>, AppError> {
    let response = formation_service::draw_teams(&state).await?;
    Ok(Json(response))
}
