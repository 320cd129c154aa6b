//! In-memory bus system catalog.

use std::collections::{HashMap, HashSet};

use crate::domain::{Location, PlanId, Route, RouteId, Stop, StopId};

use super::{BusSystemRepository, RepositoryError};

/// Origin of the synthetic stop grid.
const GRID_ORIGIN: Location = Location {
    latitude: 47.3769,
    longitude: 8.5417,
};

/// Spacing between synthetic stops, in degrees.
const GRID_STEP: f64 = 0.005;

/// Stops per row of the synthetic grid.
const GRID_WIDTH: u32 = 10;

/// A catalog held entirely in memory.
///
/// Stops and routes are returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    stops: Vec<Stop>,
    routes: Vec<Route>,

    /// Map from plan -> member stops.
    plans: HashMap<PlanId, HashSet<StopId>>,
}

impl InMemoryRepository {
    /// Create a repository from stop and route catalogs.
    pub fn new(stops: Vec<Stop>, routes: Vec<Route>) -> Self {
        Self {
            stops,
            routes,
            plans: HashMap::new(),
        }
    }

    /// Generate a bus system with stops `1..=stop_count` and routes
    /// `1..=route_count`.
    ///
    /// Stops sit on a small grid, every route visits every stop in order,
    /// and all stops belong to plan 1.
    pub fn synthetic(stop_count: u32, route_count: u32) -> Self {
        let stops: Vec<Stop> = (1..=stop_count)
            .filter_map(|n| StopId::new(n).ok())
            .map(|id| Stop::new(id, format!("Stop {id}"), grid_location(id)))
            .collect();

        let path: Vec<StopId> = stops.iter().map(|s| s.id).collect();
        let routes = (1..=route_count)
            .filter_map(|n| RouteId::new(n).ok())
            .map(|id| Route::new(id, format!("Route {id}"), path.clone()))
            .collect();

        Self::new(stops, routes).with_plan(PlanId::FIRST, path)
    }

    /// Add stops to a bus plan, creating the plan if needed.
    pub fn with_plan(mut self, plan: PlanId, stops: impl IntoIterator<Item = StopId>) -> Self {
        self.plans.entry(plan).or_default().extend(stops);
        self
    }

    /// Number of stops in the catalog.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of routes in the catalog.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl BusSystemRepository for InMemoryRepository {
    fn get_stops(&self, plan: Option<PlanId>) -> Vec<Stop> {
        match plan {
            None => self.stops.clone(),
            Some(plan) => match self.plans.get(&plan) {
                Some(members) => self
                    .stops
                    .iter()
                    .filter(|s| members.contains(&s.id))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    fn get_stop(&self, id: StopId) -> Result<Stop, RepositoryError> {
        self.stops
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepositoryError::StopNotFound(id))
    }

    fn get_routes(&self) -> Vec<Route> {
        self.routes.clone()
    }
}

fn grid_location(id: StopId) -> Location {
    let n = id.get() - 1;
    Location::new(
        GRID_ORIGIN.latitude + f64::from(n / GRID_WIDTH) * GRID_STEP,
        GRID_ORIGIN.longitude + f64::from(n % GRID_WIDTH) * GRID_STEP,
    )
}
