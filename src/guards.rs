use thiserror::Error;

use crate::types::PurchaseInput;

/// Boundary rejection reasons; the only real error class in the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("price must be a finite, non-negative value")]
    InvalidPrice,
    #[error("weight must be a finite, non-negative value")]
    InvalidWeight,
    #[error("distance must be a finite, non-negative value")]
    InvalidDistance,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// InputGuard: first line of defense against malformed form payloads.
/// Everything past this point can assume sane numeric fields.
pub struct InputGuard;

impl InputGuard {
    pub fn validate_purchase(input: &PurchaseInput) -> Result<(), ValidationError> {
        if !input.price_usd.is_finite() || input.price_usd < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        if !input.weight_kg.is_finite() || input.weight_kg < 0.0 {
            return Err(ValidationError::InvalidWeight);
        }
        if !input.distance_km.is_finite() || input.distance_km < 0.0 {
            return Err(ValidationError::InvalidDistance);
        }
        if input.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(())
    }
}
