//! Offset-based schedule table.
//!
//! Every route arrives at every stop four times an hour. Each route starts
//! two minutes after the previous one, and each stop is two minutes further
//! along than the previous one, so the pair at sorted positions `(i, j)`
//! arrives at `{0, 15, 30, 45} + 2i + 2j`.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Route, RouteId, Stop, StopId};

use super::error::ScheduleError;

/// Base arrival slots within the hour, before staggering.
pub const BASE_SLOTS: [u32; 4] = [0, 15, 30, 45];

/// Minutes added per stop position and per route position.
pub const STAGGER_MINS: u32 = 2;

/// The four scheduled arrival offsets of one (stop, route) pair.
pub type Arrivals = [u32; 4];

/// Precomputed arrivals for every (stop, route) pair.
///
/// Built once from the full stop and route catalogs and read-only afterwards.
/// Identifiers are mapped to dense positions explicitly, so a lookup for an
/// identifier outside the catalog is an error rather than a bad index.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    /// Map from stop -> sorted position.
    stop_index: HashMap<StopId, usize>,

    /// Map from route -> sorted position.
    route_index: HashMap<RouteId, usize>,

    /// Row-major by stop position, one row of `route_index.len()` entries.
    arrivals: Vec<Arrivals>,
}

impl ScheduleTable {
    /// Build the table from the full stop and route catalogs.
    ///
    /// Input order is irrelevant: both catalogs are sorted by identifier
    /// before positions are assigned. Identifiers must form the contiguous
    /// sequence `1..=count` for each catalog.
    pub fn build(stops: &[Stop], routes: &[Route]) -> Result<Self, ScheduleError> {
        let stop_ids = sorted_stop_ids(stops)?;
        let route_ids = sorted_route_ids(routes)?;

        let mut arrivals = Vec::with_capacity(stop_ids.len() * route_ids.len());
        for i in 0..stop_ids.len() {
            for j in 0..route_ids.len() {
                arrivals.push(staggered_arrivals(i, j));
            }
        }

        let stop_index = stop_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let route_index = route_ids.iter().enumerate().map(|(j, id)| (*id, j)).collect();

        debug!(
            stops = stop_ids.len(),
            routes = route_ids.len(),
            "built schedule table"
        );

        Ok(Self {
            stop_index,
            route_index,
            arrivals,
        })
    }

    /// Get the scheduled arrivals of a route at a stop.
    pub fn arrivals(&self, stop: StopId, route: RouteId) -> Result<&Arrivals, ScheduleError> {
        let i = *self
            .stop_index
            .get(&stop)
            .ok_or(ScheduleError::UnknownStop(stop))?;
        let j = *self
            .route_index
            .get(&route)
            .ok_or(ScheduleError::UnknownRoute(route))?;

        Ok(&self.arrivals[i * self.route_count() + j])
    }

    /// Number of stops in the table.
    pub fn stop_count(&self) -> usize {
        self.stop_index.len()
    }

    /// Number of routes in the table.
    pub fn route_count(&self) -> usize {
        self.route_index.len()
    }

    /// Total number of (stop, route) entries.
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}

/// Arrivals for the pair at stop position `i` and route position `j`.
fn staggered_arrivals(i: usize, j: usize) -> Arrivals {
    let offset = STAGGER_MINS * (i + j) as u32;
    BASE_SLOTS.map(|slot| slot + offset)
}

fn sorted_stop_ids(stops: &[Stop]) -> Result<Vec<StopId>, ScheduleError> {
    let mut ids: Vec<StopId> = stops.iter().map(|s| s.id).collect();
    ids.sort_unstable();

    if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
        return Err(ScheduleError::DuplicateStopId(pair[0]));
    }
    for (expected, id) in (1u32..).zip(&ids) {
        if id.get() != expected {
            return Err(ScheduleError::NonContiguousStopIds {
                expected,
                found: *id,
            });
        }
    }

    Ok(ids)
}

fn sorted_route_ids(routes: &[Route]) -> Result<Vec<RouteId>, ScheduleError> {
    let mut ids: Vec<RouteId> = routes.iter().map(|r| r.id).collect();
    ids.sort_unstable();

    if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
        return Err(ScheduleError::DuplicateRouteId(pair[0]));
    }
    for (expected, id) in (1u32..).zip(&ids) {
        if id.get() != expected {
            return Err(ScheduleError::NonContiguousRouteIds {
                expected,
                found: *id,
            });
        }
    }

    Ok(ids)
}
