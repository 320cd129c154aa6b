//! Serializable views of stops and predictions.

use serde::Serialize;

use crate::domain::Stop;
use crate::prediction::{ArrivalPrediction, StopPrediction};

/// A stop.
#[derive(Debug, Serialize)]
pub struct StopDto {
    /// Stop identifier
    pub id: u32,

    /// Stop name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,
}

impl StopDto {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.get(),
            name: stop.name.clone(),
            latitude: stop.location.latitude,
            longitude: stop.location.longitude,
        }
    }
}

/// Upcoming arrivals of one route.
#[derive(Debug, Serialize)]
pub struct ArrivalPredictionDto {
    /// Route identifier
    pub route_id: u32,

    /// Route name
    pub route_name: String,

    /// Minutes until each upcoming arrival, soonest first
    pub minutes: Vec<u32>,
}

impl ArrivalPredictionDto {
    pub fn from_prediction(prediction: &ArrivalPrediction) -> Self {
        Self {
            route_id: prediction.route.id.get(),
            route_name: prediction.route.name.clone(),
            minutes: prediction.minutes.clone(),
        }
    }
}

/// Predictions at one stop.
#[derive(Debug, Serialize)]
pub struct StopPredictionDto {
    pub stop: StopDto,
    pub arrivals: Vec<ArrivalPredictionDto>,
}

impl StopPredictionDto {
    pub fn from_prediction(prediction: &StopPrediction) -> Self {
        Self {
            stop: StopDto::from_stop(&prediction.stop),
            arrivals: prediction
                .arrivals
                .iter()
                .map(ArrivalPredictionDto::from_prediction)
                .collect(),
        }
    }
}
