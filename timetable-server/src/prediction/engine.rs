//! Arrival prediction over the schedule table.

use tracing::trace;

use crate::domain::{MinuteOfHour, Route, Stop};
use crate::schedule::{ScheduleError, ScheduleTable};

use super::types::{ArrivalPrediction, StopPrediction};

/// Derives minutes-until-arrival values from an immutable schedule.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    schedule: ScheduleTable,
}

impl PredictionEngine {
    /// Create an engine over a built schedule.
    pub fn new(schedule: ScheduleTable) -> Self {
        Self { schedule }
    }

    /// The schedule predictions are drawn from.
    pub fn schedule(&self) -> &ScheduleTable {
        &self.schedule
    }

    /// Predict the next `count` arrivals of each route at a stop.
    ///
    /// Predictions are returned in the order `routes` are given. Each
    /// prediction holds at most four values, ascending.
    pub fn predict_for_stop(
        &self,
        stop: &Stop,
        routes: &[Route],
        now: MinuteOfHour,
        count: usize,
    ) -> Result<Vec<ArrivalPrediction>, ScheduleError> {
        routes
            .iter()
            .map(|route| -> Result<ArrivalPrediction, ScheduleError> {
                let arrivals = self.schedule.arrivals(stop.id, route.id)?;

                let mut minutes: Vec<u32> =
                    arrivals.iter().map(|&t| now.minutes_until(t)).collect();
                minutes.sort_unstable();
                minutes.truncate(count);

                trace!(stop = %stop.id, route = %route.id, ?minutes, "predicted arrivals");
                Ok(ArrivalPrediction::new(route.clone(), minutes))
            })
            .collect()
    }

    /// Predict arrivals of every route at every stop.
    ///
    /// One entry per stop, in the order `stops` are given.
    pub fn predict_for_all_stops(
        &self,
        stops: &[Stop],
        routes: &[Route],
        now: MinuteOfHour,
        count: usize,
    ) -> Result<Vec<StopPrediction>, ScheduleError> {
        stops
            .iter()
            .map(|stop| -> Result<StopPrediction, ScheduleError> {
                let arrivals = self.predict_for_stop(stop, routes, now, count)?;
                Ok(StopPrediction::new(stop.clone(), arrivals))
            })
            .collect()
    }
}
