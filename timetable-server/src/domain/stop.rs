//! Stops served by the bus system.

use serde::{Deserialize, Serialize};

use super::StopId;

/// Geographic position of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A stop where buses call.
///
/// The name and location are descriptive only; the timetable depends solely
/// on the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub location: Location,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: StopId, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}
