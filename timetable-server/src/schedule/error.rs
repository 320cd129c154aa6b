//! Schedule table error types.

use crate::domain::{RouteId, StopId};

/// Errors from building or querying the schedule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Two stops in the catalog share an identifier
    #[error("invalid catalog: duplicate stop id {0}")]
    DuplicateStopId(StopId),

    /// Two routes in the catalog share an identifier
    #[error("invalid catalog: duplicate route id {0}")]
    DuplicateRouteId(RouteId),

    /// Stop identifiers are not exactly 1..=count
    #[error("invalid catalog: stop id {found} found where {expected} was expected")]
    NonContiguousStopIds { expected: u32, found: StopId },

    /// Route identifiers are not exactly 1..=count
    #[error("invalid catalog: route id {found} found where {expected} was expected")]
    NonContiguousRouteIds { expected: u32, found: RouteId },

    /// Stop was not part of the catalog the table was built from
    #[error("stop {0} is not in the schedule")]
    UnknownStop(StopId),

    /// Route was not part of the catalog the table was built from
    #[error("route {0} is not in the schedule")]
    UnknownRoute(RouteId),
}
