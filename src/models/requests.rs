use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Pointer or touch event carrying the horizontal client coordinate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_coordinate"))]
pub struct GestureRequest {
    pub x: f64,
}

/// Coordinates must be finite and within any plausible screen
fn validate_coordinate(req: &GestureRequest) -> Result<(), ValidationError> {
    if req.x.is_finite() && req.x.abs() <= 100_000.0 {
        Ok(())
    } else {
        Err(ValidationError::new("coordinate_out_of_range"))
    }
}

/// Replacement text for the message draft
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DraftRequest {
    #[validate(length(max = 2000))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(GestureRequest { x: -240.5 }.validate().is_ok());
        assert!(GestureRequest { x: f64::NAN }.validate().is_err());
        assert!(GestureRequest { x: 1.0e9 }.validate().is_err());
    }

    #[test]
    fn test_draft_length_validation() {
        assert!(DraftRequest { text: "Hello".to_string() }.validate().is_ok());
        assert!(DraftRequest { text: "x".repeat(2001) }.validate().is_err());
    }
}
