//! Human-readable training report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Statistics computed for one training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training kind display name
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometres
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories spent
    pub calories: f64,
}

impl InfoMessage {
    /// Render the one-line summary. Every number is fixed to three decimals.
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Reject reports whose metrics overflowed, so every field can be shown
    /// fixed-point and serialized as a JSON number.
    pub fn ensure_finite(self) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("duration", self.duration),
            ("distance", self.distance),
            ("speed", self.speed),
            ("calories", self.calories),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::invalid(
                    field,
                    format!("{value} is out of range for a {} report", self.training_type),
                ));
            }
        }
        Ok(self)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
