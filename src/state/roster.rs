use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Position a participant intends to play on match day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Goalkeeper ("gol" on the wire).
    #[serde(rename = "gol")]
    Goalkeeper,
    /// Field player ("linha" on the wire).
    #[default]
    #[serde(rename = "linha")]
    Field,
}

/// One roster slot tracked for a match day.
///
/// Slots exist for the whole roster capacity; an empty name marks an
/// unclaimed slot, which is never eligible for a team draw regardless of the
/// confirmed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Stable slot number, `1..=capacity`.
    pub id: u32,
    /// Display name; empty means the slot is unclaimed.
    pub name: String,
    /// Declared position.
    pub role: Role,
    /// Whether the player confirmed attendance.
    pub confirmed: bool,
}

impl Participant {
    /// Build a fresh unclaimed slot with default role and no confirmation.
    pub fn unclaimed(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            role: Role::default(),
            confirmed: false,
        }
    }

    /// Whether this slot counts towards a team draw: confirmed and carrying a
    /// non-blank name.
    pub fn is_eligible(&self) -> bool {
        self.confirmed && !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclaimed_slots_are_never_eligible() {
        let mut slot = Participant::unclaimed(3);
        assert!(!slot.is_eligible());

        slot.confirmed = true;
        assert!(!slot.is_eligible());

        slot.name = "   ".into();
        assert!(!slot.is_eligible());
    }

    #[test]
    fn named_confirmed_slot_is_eligible() {
        let slot = Participant {
            id: 1,
            name: "Ana".into(),
            role: Role::Goalkeeper,
            confirmed: true,
        };
        assert!(slot.is_eligible());
    }
}
