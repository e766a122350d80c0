use serde::Serialize;

use super::{ensure_positive, Session, Training, M_IN_KM};
use crate::error::ValidationError;

/// Distance covered by one stroke, in metres.
pub const LEN_STROKE_M: f64 = 1.38;
const CALORIES_SPEED_OFFSET: f64 = 1.1;
const CALORIES_SPEED_MULTIPLIER: f64 = 2.0;

/// Swimming. Mean speed comes from the pool laps, not from strokes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swimming {
    session: Session,
    /// Pool length in metres.
    length_pool_m: u32,
    /// Number of pool lengths swum.
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: u32,
        count_pool: u32,
    ) -> Result<Self, ValidationError> {
        let session = Session::new(action, duration_h, weight_kg)?;
        ensure_positive("length_pool_m", f64::from(length_pool_m))?;
        Ok(Self {
            session,
            length_pool_m,
            count_pool,
        })
    }

    /// Pool length in metres.
    pub fn length_pool_m(&self) -> u32 {
        self.length_pool_m
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }

    /// Total distance swum according to the lap count, in kilometres.
    pub fn pool_distance_km(&self) -> f64 {
        f64::from(self.length_pool_m) * f64::from(self.count_pool) / M_IN_KM
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_distance_km() / self.session.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_OFFSET)
            * CALORIES_SPEED_MULTIPLIER
            * self.session.weight_kg()
            * self.session.duration_h()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_uses_stroke_length() {
        let swim = Swimming::new(720, 1.0, 80.0, 25, 40).unwrap();
        assert!((swim.distance_km() - 0.9936).abs() < EPS);
    }

    #[test]
    fn speed_is_pool_based() {
        let swim = Swimming::new(720, 1.0, 80.0, 25, 40).unwrap();
        assert!((swim.mean_speed_kmh() - 1.0).abs() < EPS);
        // stroke count does not affect speed
        let other = Swimming::new(10, 1.0, 80.0, 25, 40).unwrap();
        assert_eq!(swim.mean_speed_kmh(), other.mean_speed_kmh());
    }

    #[test]
    fn calories_follow_formula() {
        let swim = Swimming::new(720, 1.0, 80.0, 25, 40).unwrap();
        assert!((swim.spent_calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn zero_laps_is_allowed() {
        let swim = Swimming::new(0, 0.5, 80.0, 25, 0).unwrap();
        assert_eq!(swim.mean_speed_kmh(), 0.0);
        assert!((swim.spent_calories() - 1.1 * 2.0 * 80.0 * 0.5).abs() < EPS);
    }

    #[test]
    fn rejects_zero_pool_length() {
        let err = Swimming::new(720, 1.0, 80.0, 0, 40).unwrap_err();
        assert_eq!(err.field(), "length_pool_m");
        assert!(err.to_string().contains("0 must be greater than zero"));
    }

    #[test]
    fn session_is_validated_before_pool() {
        let err = Swimming::new(720, 0.0, 80.0, 0, 40).unwrap_err();
        assert_eq!(err.field(), "duration_h");
    }
}
