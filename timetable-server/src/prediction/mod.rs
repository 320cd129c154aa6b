//! Arrival predictions.
//!
//! Given a request time, derives "minutes until next arrival" values per
//! stop and route from the synthetic schedule. Only the minute past the hour
//! matters: the schedule repeats every hour.

mod engine;
mod service;
mod types;

pub use engine::PredictionEngine;
pub use service::{PredictionError, TimetableService};
pub use types::{ArrivalPrediction, StopPrediction};
