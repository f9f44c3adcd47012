//! Team formation engine: partitions confirmed participants into balanced
//! teams, each anchored by a goalkeeper.
//!
//! The engine is a pure function over a roster snapshot. It owns no storage
//! and produces a fresh, independently random draw on every call.

use indexmap::IndexMap;
use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::state::roster::{Participant, Role};

/// Confirmed players required before a draw is attempted.
pub const MIN_CONFIRMED: usize = 14;
/// Goalkeepers needed for the minimum viable draw of two teams.
pub const MIN_GOALKEEPERS: usize = 2;
/// Field players needed for the minimum viable draw of two teams.
pub const MIN_FIELD_PLAYERS: usize = 12;
/// Field players each team receives besides its goalkeeper.
pub const FIELD_PLAYERS_PER_TEAM: usize = 6;
/// Team label palette, consumed in order; also the hard cap on team count.
pub const TEAM_LABELS: [&str; 4] = ["Team Blue", "Team Red", "Team Yellow", "Team Green"];

/// Ordered mapping from team label to its members. The goalkeeper is always
/// the first member of every team.
pub type Teams = IndexMap<String, Vec<Participant>>;

/// Reasons a draw is rejected. The messages are part of the wire contract and
/// are reported to callers verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormationError {
    /// Fewer than [`MIN_CONFIRMED`] eligible participants.
    #[error("insufficient confirmed participants to form two teams of seven.")]
    InsufficientConfirmed,
    /// Goalkeeper backfill left fewer than two goalkeepers or fewer than
    /// twelve field players.
    #[error(
        "not enough participants to form two complete teams (2 goalkeepers and 12 field players)."
    )]
    IncompleteTeams,
    /// The goalkeeper/field split supports no team at all.
    #[error("cannot form teams with the current goalkeeper/field-player distribution.")]
    NoViableSplit,
}

/// Draw teams from a roster snapshot using the thread-local RNG.
pub fn form_teams(roster: &[Participant]) -> Result<Teams, FormationError> {
    form_teams_with(roster, &mut rand::rng())
}

/// Draw teams from a roster snapshot with a caller-supplied RNG.
pub fn form_teams_with<R: Rng + ?Sized>(
    roster: &[Participant],
    rng: &mut R,
) -> Result<Teams, FormationError> {
    let confirmed: Vec<&Participant> = roster.iter().filter(|p| p.is_eligible()).collect();
    if confirmed.len() < MIN_CONFIRMED {
        return Err(FormationError::InsufficientConfirmed);
    }

    let mut keepers: Vec<Participant> = confirmed
        .iter()
        .filter(|p| p.role == Role::Goalkeeper)
        .map(|p| (*p).clone())
        .collect();
    let mut field: Vec<Participant> = confirmed
        .iter()
        .filter(|p| p.role == Role::Field)
        .map(|p| (*p).clone())
        .collect();

    // Promote field players into goal until two goalkeepers are available,
    // each draw taken uniformly from the shrinking remainder of the pool.
    while keepers.len() < MIN_GOALKEEPERS && !field.is_empty() {
        let picked = rng.random_range(0..field.len());
        keepers.push(field.remove(picked));
    }

    if keepers.len() < MIN_GOALKEEPERS || field.len() < MIN_FIELD_PLAYERS {
        return Err(FormationError::IncompleteTeams);
    }

    keepers.shuffle(rng);
    field.shuffle(rng);

    let max_teams = keepers
        .len()
        .min(field.len() / FIELD_PLAYERS_PER_TEAM)
        .min(TEAM_LABELS.len());
    if max_teams == 0 {
        return Err(FormationError::NoViableSplit);
    }

    let mut teams: Teams = TEAM_LABELS[..max_teams]
        .iter()
        .map(|label| ((*label).to_string(), Vec::new()))
        .collect();

    // One goalkeeper per team; surplus goalkeepers sit this one out.
    for (slot, keeper) in keepers.into_iter().take(max_teams).enumerate() {
        if let Some((_, members)) = teams.get_index_mut(slot) {
            members.push(keeper);
        }
    }

    // Remaining field players go round-robin over the shuffled order, so team
    // sizes differ by at most one.
    for (idx, player) in field.into_iter().enumerate() {
        if let Some((_, members)) = teams.get_index_mut(idx % max_teams) {
            members.push(player);
        }
    }

    Ok(teams)
}
