//! Sensor packages and the factory that turns them into training records.
//!
//! A package is a workout code plus a positional list of numbers. The code
//! selects the workout kind, which fixes how many numbers are expected and
//! what each one means:
//!
//! | Code  | Kind            | Fields                                            |
//! |-------|-----------------|---------------------------------------------------|
//! | `SWM` | `Swimming`      | action, duration_h, weight_kg, length_pool_m, count_pool |
//! | `RUN` | `Running`       | action, duration_h, weight_kg                     |
//! | `WLK` | `SportsWalking` | action, duration_h, weight_kg, height_cm          |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result, ValidationError};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Workout code as reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Names of the positional fields, in order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "length_pool_m",
                "count_pool",
            ],
            WorkoutCode::Running => &["action", "duration_h", "weight_kg"],
            WorkoutCode::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
        }
    }

    /// Number of values a package with this code must carry.
    pub fn arity(&self) -> usize {
        self.fields().len()
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        WorkoutCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| CoreError::UnknownWorkoutType { code: s.to_string() })
    }
}

/// Raw data received from a sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    /// Build the training record this package describes.
    pub fn read(&self) -> Result<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build a training record from a workout code and its positional data.
///
/// # Errors
///
/// - [`CoreError::UnknownWorkoutType`] if `code` is not `SWM`, `RUN` or `WLK`
/// - [`CoreError::ArityMismatch`] if `data` has the wrong number of values
/// - [`CoreError::Validation`] if any value is out of range for its field
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutCode = code.parse()?;
    if data.len() != kind.arity() {
        return Err(CoreError::ArityMismatch {
            code: code.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = to_count("action", data[0])?;
    let (duration_h, weight_kg) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutCode::Swimming => Swimming::new(
            action,
            duration_h,
            weight_kg,
            to_count("length_pool_m", data[3])?,
            to_count("count_pool", data[4])?,
        )?
        .into(),
        WorkoutCode::Running => Running::new(action, duration_h, weight_kg)?.into(),
        WorkoutCode::SportsWalking => {
            SportsWalking::new(action, duration_h, weight_kg, data[3])?.into()
        }
    };

    tracing::debug!(code = %kind, ?workout, "built training record");
    Ok(workout)
}

/// Convert a sensor number to a whole, non-negative count.
fn to_count(field: &str, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, format!("{value} is not a finite number")));
    }
    if value < 0.0 {
        return Err(ValidationError::invalid(field, format!("{value} must not be negative")));
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::invalid(field, format!("{value} must be a whole number")));
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::invalid(field, format!("{value} is too large")));
    }
    Ok(value as u32)
}
