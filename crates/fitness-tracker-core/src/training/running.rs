use serde::Serialize;

use super::{Session, Training, M_IN_KM};
use crate::error::ValidationError;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running: distance from steps, calories from mean speed and weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            session: Session::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight_kg()
            / M_IN_KM
            * self.session.duration_min()
    }
}
