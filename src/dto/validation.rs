//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Validates a player name coming from the roster form.
///
/// Empty names are accepted: writing an empty name releases the slot. Names
/// over [`MAX_NAME_LENGTH`] characters or containing control characters are
/// rejected.
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        let mut err = ValidationError::new("player_name_length");
        err.message =
            Some(format!("Player name must be at most {MAX_NAME_LENGTH} characters").into());
        return Err(err);
    }

    if name.chars().any(char::is_control) {
        let mut err = ValidationError::new("player_name_format");
        err.message = Some("Player name must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_name_valid() {
        assert!(validate_player_name("Ana").is_ok());
        assert!(validate_player_name("José da Silva").is_ok());
        assert!(validate_player_name("").is_ok()); // releases the slot
        assert!(validate_player_name("   ").is_ok());
    }

    #[test]
    fn test_validate_player_name_too_long() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_player_name(&long).is_err());
        let exact = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_player_name(&exact).is_ok());
    }

    #[test]
    fn test_validate_player_name_control_characters() {
        assert!(validate_player_name("Ana\n").is_err());
        assert!(validate_player_name("A\tna").is_err());
        assert!(validate_player_name("\u{7f}").is_err());
    }
}
