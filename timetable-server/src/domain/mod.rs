//! Domain types for the bus timetable.
//!
//! Identifiers enforce their invariants at construction time, so code that
//! receives a `StopId` or `RouteId` can trust it is a positive integer.

mod id;
mod route;
mod stop;
mod time;

pub use id::{InvalidId, PlanId, RouteId, StopId};
pub use route::Route;
pub use stop::{Location, Stop};
pub use time::{InvalidMinute, MINUTES_PER_HOUR, MinuteOfHour};
