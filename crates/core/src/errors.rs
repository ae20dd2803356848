use thiserror::Error;

use crate::models::driver_tier::DriverTier;

/// Shown when the server gives no usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Local form checks that abort a save before anything is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please select a location")]
    MissingLocation,

    #[error("Please select a hotspot")]
    MissingHotspot,

    #[error("Please add at least one time slot")]
    NoTimeSlots,

    #[error("Time range is required for all slots")]
    MissingTimeRange { tier: DriverTier, id: u32 },

    #[error("Price must be a non-negative number")]
    InvalidPrice { tier: DriverTier, id: u32 },
}

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API request failed with status {status}")]
    Api { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(#[from] eyre::Report),
}

impl PricingError {
    /// The text an operator should see for this failure.
    ///
    /// Server-provided messages are passed through verbatim; anything without a
    /// meaningful message of its own falls back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            PricingError::Validation(err) => err.to_string(),
            PricingError::InvalidTime(_) | PricingError::NotFound(_) => self.to_string(),
            PricingError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            PricingError::Api { message: None, .. } | PricingError::Network(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
