use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Matchday Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::roster::list_players,
        crate::routes::roster::update_player,
        crate::routes::roster::reset_players,
        crate::routes::formation::draw_teams,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::AckResponse,
            crate::dto::roster::ParticipantDto,
            crate::dto::roster::UpdateParticipantRequest,
            crate::dto::formation::DrawResponse,
            crate::state::roster::Role,
        )
    ),
    tags(
        (name = "roster", description = "Roster slot management"),
        (name = "teams", description = "Team draw operations"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
