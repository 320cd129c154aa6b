//! Bus routes.

use serde::{Deserialize, Serialize};

use super::{RouteId, StopId};

/// A fixed bus route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,

    /// Stops visited by the route, in travel order.
    pub path: Vec<StopId>,
}

impl Route {
    /// Create a new route.
    pub fn new(id: RouteId, name: impl Into<String>, path: Vec<StopId>) -> Self {
        Self {
            id,
            name: name.into(),
            path,
        }
    }

    /// Check if the route calls at a stop.
    pub fn serves(&self, stop: StopId) -> bool {
        self.path.contains(&stop)
    }
}
