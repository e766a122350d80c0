use serde::Serialize;

use super::{ensure_positive, Session, Training};
use crate::error::ValidationError;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Sports walking. Calories depend on speed in m/s and the walker's height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsWalking {
    session: Session,
    /// Height in centimetres.
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            session: Session::new(action, duration_h, weight_kg)?,
            height_cm: ensure_positive("height_cm", height_cm)?,
        })
    }

    /// Height in centimetres.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    fn height_m(&self) -> f64 {
        self.height_cm / CM_IN_M
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg();
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_ms.powi(2) / self.height_m() * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_min()
    }
}
