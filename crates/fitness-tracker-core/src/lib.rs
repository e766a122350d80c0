//! # fitness-tracker core library
//!
//! Computes workout statistics (distance, mean speed, calories burned) from
//! sensor packages for running, sports walking and swimming. The CLI binary
//! is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Training**: the [`Training`] trait with shared distance/speed
//!   formulas and one implementer per workout kind
//! - **Package**: workout codes and the [`read_package`] factory
//! - **Report**: [`InfoMessage`] and its one-line summary
//! - **Driver**: ordered batch processing with a per-run error policy
//! - **Config**: TOML-based user preferences
//!
//! ## Example
//!
//! ```
//! use fitness_tracker_core::{read_package, Training};
//!
//! let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
//! let info = workout.show_training_info();
//! assert_eq!(info.calories, 336.0);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod package;
pub mod report;
pub mod training;

pub use config::Config;
pub use driver::{
    process_package, render, run, sample_packages, ErrorPolicy, OutputFormat, RunOptions,
    RunSummary,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use package::{read_package, SensorPackage, WorkoutCode};
pub use report::InfoMessage;
pub use training::{Running, Session, SportsWalking, Swimming, Training, Workout};
