//! Prediction result types.

use crate::domain::{Route, Stop};

/// Upcoming arrivals of one route at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalPrediction {
    pub route: Route,

    /// Minutes until each upcoming arrival, ascending.
    pub minutes: Vec<u32>,
}

impl ArrivalPrediction {
    pub fn new(route: Route, minutes: Vec<u32>) -> Self {
        Self { route, minutes }
    }

    /// Minutes until the next arrival, if any were requested.
    pub fn next(&self) -> Option<u32> {
        self.minutes.first().copied()
    }
}

/// Predictions for every route at one stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPrediction {
    pub stop: Stop,
    pub arrivals: Vec<ArrivalPrediction>,
}

impl StopPrediction {
    pub fn new(stop: Stop, arrivals: Vec<ArrivalPrediction>) -> Self {
        Self { stop, arrivals }
    }
}
