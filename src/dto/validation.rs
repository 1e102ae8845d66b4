//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest participant id accepted from clients.
const MAX_PARTICIPANT_ID_LEN: usize = 64;

/// Validates that a participant id is non-empty, at most 64 characters and
/// free of whitespace or control characters.
///
/// # Examples
///
/// ```ignore
/// validate_participant_id("team-0f4c2a9e") // Ok
/// validate_participant_id("")              // Err - empty
/// validate_participant_id("team 1")        // Err - whitespace
/// ```
pub fn validate_participant_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.chars().count() > MAX_PARTICIPANT_ID_LEN {
        let mut err = ValidationError::new("participant_id_length");
        err.message = Some(
            format!(
                "Participant ID must be 1 to {MAX_PARTICIPANT_ID_LEN} characters (got {})",
                id.chars().count()
            )
            .into(),
        );
        return Err(err);
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        let mut err = ValidationError::new("participant_id_format");
        err.message = Some("Participant ID must not contain whitespace".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a display name is not blank.
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("display_name_blank");
        err.message = Some("Display name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_participant_id_valid() {
        assert!(validate_participant_id("team-0f4c2a9e").is_ok());
        assert!(validate_participant_id("a").is_ok());
        assert!(validate_participant_id(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_participant_id_invalid_length() {
        assert!(validate_participant_id("").is_err());
        assert!(validate_participant_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_participant_id_invalid_format() {
        assert!(validate_participant_id("team 1").is_err()); // space
        assert!(validate_participant_id("team\t1").is_err()); // tab
        assert!(validate_participant_id("team\u{0}").is_err()); // control
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Net Ninjas").is_ok());
        assert!(validate_display_name("   ").is_err());
    }
}
