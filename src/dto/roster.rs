use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, serde_as};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::validation::validate_player_name,
    state::roster::{Participant, Role},
};

/// Roster slot as exposed to clients. The confirmed flag crosses the wire as
/// `0 | 1`.
#[serde_as]
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantDto {
    /// Stable slot number.
    pub id: u32,
    /// Display name; empty for unclaimed slots.
    pub name: String,
    /// Declared position (`"gol"` or `"linha"`).
    pub role: Role,
    /// Attendance confirmation as `0 | 1`.
    #[serde_as(as = "BoolFromInt")]
    #[schema(value_type = u8)]
    pub confirmed: bool,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name,
            role: participant.role,
            confirmed: participant.confirmed,
        }
    }
}

/// Payload writing one roster slot: name, role, and confirmation.
///
/// Unknown role strings are rejected during deserialization, so only the two
/// recognized positions ever reach the store.
#[serde_as]
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParticipantRequest {
    /// New display name; empty releases the slot.
    pub name: String,
    /// New declared position.
    #[serde(default)]
    pub role: Role,
    /// Attendance confirmation as `0 | 1`.
    #[serde_as(as = "BoolFromInt")]
    #[serde(default)]
    #[schema(value_type = u8)]
    pub confirmed: bool,
}

impl Validate for UpdateParticipantRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.name) {
            errors.add("name", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
