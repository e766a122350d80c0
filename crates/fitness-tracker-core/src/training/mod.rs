//! Training records and the formulas shared between them.
//!
//! Every workout kind implements [`Training`]. Distance and mean speed have
//! default implementations derived from the step length and the session
//! duration; calorie expenditure has no default and must be provided by
//! each kind. [`Workout`] is the closed set of kinds the package factory
//! can produce.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::Serialize;

use crate::error::ValidationError;
use crate::report::InfoMessage;

/// Default distance covered by one action (a step), in metres.
pub const LEN_STEP_M: f64 = 0.65;
/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Fields reported by the sensor for every workout kind.
///
/// Only [`Session::new`] builds one, so duration and weight are always
/// finite and positive:
///
/// ```compile_fail
/// use fitness_tracker_core::Session;
///
/// let session = Session { action: 15000, duration_h: 0.0, weight_kg: -75.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Session {
    /// Build a session, rejecting non-finite or non-positive duration and weight.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            action,
            duration_h: ensure_positive("duration_h", duration_h)?,
            weight_kg: ensure_positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes.
    pub fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours.
    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    /// Body weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Duration in minutes.
    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, format!("{value} is not a finite number")));
    }
    if value <= 0.0 {
        return Err(ValidationError::invalid(field, format!("{value} must be greater than zero")));
    }
    Ok(value)
}

/// A completed workout that can report its statistics.
pub trait Training {
    /// Display name used in reports.
    fn training_type(&self) -> &'static str;

    /// Common sensor fields.
    fn session(&self) -> &Session;

    /// Distance covered by one action, in metres.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometres.
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_h()
    }

    /// Calories spent during the session.
    fn spent_calories(&self) -> f64;

    /// Snapshot of the computed statistics.
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.session().duration_h(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Any supported workout.
///
/// Workouts are serialized for JSON output but never deserialized; the
/// validated constructors are the only way in:
///
/// ```compile_fail
/// use fitness_tracker_core::Workout;
///
/// let workout: Workout = serde_json::from_str(
///     r#"{"kind":"running","session":{"action":15000,"duration_h":0.0,"weight_kg":-75.0}}"#,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
