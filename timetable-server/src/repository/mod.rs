//! Read-only access to the bus system catalog.
//!
//! The timetable never owns stop or route data. It reads them through the
//! [`BusSystemRepository`] capability, which lets tests and the demo binary
//! supply an in-memory catalog.

mod error;
mod memory;

pub use error::RepositoryError;
pub use memory::InMemoryRepository;

use crate::domain::{PlanId, Route, Stop, StopId};

/// Source of stop and route data.
///
/// Identifiers returned must be stable and form a contiguous sequence
/// starting at 1 for the schedule to be built from them.
pub trait BusSystemRepository {
    /// Get all stops, optionally only those belonging to a bus plan.
    ///
    /// Stops are returned in the repository's own order, which need not be
    /// sorted by identifier.
    fn get_stops(&self, plan: Option<PlanId>) -> Vec<Stop>;

    /// Get a single stop by identifier.
    fn get_stop(&self, id: StopId) -> Result<Stop, RepositoryError>;

    /// Get all routes.
    fn get_routes(&self) -> Vec<Route>;
}

impl<R: BusSystemRepository + ?Sized> BusSystemRepository for &R {
    fn get_stops(&self, plan: Option<PlanId>) -> Vec<Stop> {
        (**self).get_stops(plan)
    }

    fn get_stop(&self, id: StopId) -> Result<Stop, RepositoryError> {
        (**self).get_stop(id)
    }

    fn get_routes(&self) -> Vec<Route> {
        (**self).get_routes()
    }
}
