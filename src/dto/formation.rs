use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::roster::ParticipantDto,
    engine::{FormationError, Teams},
};

/// Outcome of a team draw as serialized to clients.
///
/// Business rejections travel in this body with HTTP 200; the three reason
/// strings are fixed. The team mapping keeps the palette order and uses the
/// wire contract key `times`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DrawResponse {
    /// Successful draw keyed by team label; the goalkeeper is the first
    /// member of every list.
    Formed {
        /// Always `true` for this variant.
        success: bool,
        /// Team label to ordered members.
        times: IndexMap<String, Vec<ParticipantDto>>,
    },
    /// Rejected draw carrying one of the fixed reasons.
    Rejected {
        /// Always `false` for this variant.
        success: bool,
        /// Human readable rejection reason.
        msg: String,
    },
}

impl From<Teams> for DrawResponse {
    fn from(teams: Teams) -> Self {
        let times = teams
            .into_iter()
            .map(|(label, members)| (label, members.into_iter().map(Into::into).collect()))
            .collect();
        DrawResponse::Formed {
            success: true,
            times,
        }
    }
}

impl From<FormationError> for DrawResponse {
    fn from(err: FormationError) -> Self {
        DrawResponse::Rejected {
            success: false,
            msg: err.to_string(),
        }
    }
}
