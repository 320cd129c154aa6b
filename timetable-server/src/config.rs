//! Configuration for the timetable binary.

use std::str::FromStr;

use crate::domain::StopId;

/// Environment variable for the number of synthetic stops.
pub const STOPS_VAR: &str = "TIMETABLE_STOPS";

/// Environment variable for the number of synthetic routes.
pub const ROUTES_VAR: &str = "TIMETABLE_ROUTES";

/// Environment variable for the number of predictions per route.
pub const PREDICTIONS_VAR: &str = "TIMETABLE_PREDICTIONS_PER_ROUTE";

/// Environment variable restricting output to a single stop.
pub const STOP_ID_VAR: &str = "TIMETABLE_STOP_ID";

/// Error from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// Prediction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionConfig {
    /// Upcoming arrivals reported per route.
    /// Zero or negative reports none.
    pub predictions_per_route: i32,
}

impl PredictionConfig {
    pub fn new(predictions_per_route: i32) -> Self {
        Self {
            predictions_per_route,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            predictions_per_route: 2,
        }
    }
}

/// Shape of the synthetic bus system and what to report on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Number of stops, identified `1..=stop_count`.
    pub stop_count: u32,

    /// Number of routes, identified `1..=route_count`.
    pub route_count: u32,

    /// Report only this stop, instead of every stop.
    pub stop: Option<StopId>,

    pub prediction: PredictionConfig,
}

impl SystemConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        stop_count: u32,
        route_count: u32,
        stop: Option<StopId>,
        prediction: PredictionConfig,
    ) -> Self {
        Self {
            stop_count,
            route_count,
            stop,
            prediction,
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults for
    /// variables that are not set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let stop_count = parse_var(&lookup, STOPS_VAR)?.unwrap_or(defaults.stop_count);
        let route_count = parse_var(&lookup, ROUTES_VAR)?.unwrap_or(defaults.route_count);
        let predictions_per_route = parse_var(&lookup, PREDICTIONS_VAR)?
            .unwrap_or(defaults.prediction.predictions_per_route);

        let stop = parse_var::<u32>(&lookup, STOP_ID_VAR)?
            .map(|raw| {
                StopId::new(raw).map_err(|_| ConfigError {
                    key: STOP_ID_VAR,
                    value: raw.to_string(),
                })
            })
            .transpose()?;

        Ok(Self::new(
            stop_count,
            route_count,
            stop,
            PredictionConfig::new(predictions_per_route),
        ))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stop_count: 10,
            route_count: 3,
            stop: None,
            prediction: PredictionConfig::default(),
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError { key, value }),
    }
}
