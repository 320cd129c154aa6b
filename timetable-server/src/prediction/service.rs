//! Prediction API over a bus system repository.

use chrono::Timelike;
use tracing::{debug, info};

use crate::domain::{MinuteOfHour, PlanId, Stop, StopId};
use crate::repository::{BusSystemRepository, RepositoryError};
use crate::schedule::{ScheduleError, ScheduleTable};

use super::engine::PredictionEngine;
use super::types::{ArrivalPrediction, StopPrediction};

/// Error from the prediction API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// Catalog lookup failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Catalog could not be scheduled, or a stop/route is missing from it
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Answers "when will each route next arrive at this stop".
///
/// The schedule is built once, from the full catalog, when the service is
/// created and is never modified afterwards. The service can be shared
/// between threads behind an `Arc` whenever the repository can.
#[derive(Debug)]
pub struct TimetableService<R> {
    repository: R,
    engine: PredictionEngine,
}

impl<R: BusSystemRepository> TimetableService<R> {
    /// Create the service, building the schedule from the repository's
    /// full stop and route catalogs.
    pub fn new(repository: R) -> Result<Self, PredictionError> {
        let stops = repository.get_stops(None);
        let routes = repository.get_routes();
        let schedule = ScheduleTable::build(&stops, &routes)?;

        info!(
            stops = schedule.stop_count(),
            routes = schedule.route_count(),
            "timetable ready"
        );

        Ok(Self {
            repository,
            engine: PredictionEngine::new(schedule),
        })
    }

    /// The schedule predictions are drawn from.
    pub fn schedule(&self) -> &ScheduleTable {
        self.engine.schedule()
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get all stops, optionally only those in a bus plan.
    pub fn get_all_stops_info(&self, plan: Option<PlanId>) -> Vec<Stop> {
        self.repository.get_stops(plan)
    }

    /// Get a single stop.
    pub fn get_stop_info(&self, stop_id: StopId) -> Result<Stop, PredictionError> {
        Ok(self.repository.get_stop(stop_id)?)
    }

    /// Predict upcoming arrivals of every route at one stop.
    ///
    /// At most `predictions_per_route` values (and never more than four) are
    /// returned per route; zero or a negative count yields empty sequences.
    pub fn get_stop_predictions<T: Timelike>(
        &self,
        stop_id: StopId,
        predictions_per_route: i32,
        request_time: &T,
    ) -> Result<Vec<ArrivalPrediction>, PredictionError> {
        let stop = self.get_stop_info(stop_id)?;
        let routes = self.repository.get_routes();
        let now = MinuteOfHour::of(request_time);

        debug!(stop = %stop_id, %now, predictions_per_route, "predicting stop");
        Ok(self
            .engine
            .predict_for_stop(&stop, &routes, now, take_count(predictions_per_route))?)
    }

    /// Predict upcoming arrivals of every route at every stop.
    ///
    /// One entry per stop, in the repository's stop order.
    pub fn get_all_stop_predictions<T: Timelike>(
        &self,
        predictions_per_route: i32,
        request_time: &T,
    ) -> Result<Vec<StopPrediction>, PredictionError> {
        let stops = self.get_all_stops_info(None);
        let routes = self.repository.get_routes();
        let now = MinuteOfHour::of(request_time);

        debug!(stops = stops.len(), %now, predictions_per_route, "predicting all stops");
        Ok(self.engine.predict_for_all_stops(
            &stops,
            &routes,
            now,
            take_count(predictions_per_route),
        )?)
    }
}

/// Non-positive counts take nothing.
fn take_count(predictions_per_route: i32) -> usize {
    usize::try_from(predictions_per_route).unwrap_or(0)
}
