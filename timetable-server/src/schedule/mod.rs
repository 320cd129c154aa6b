//! Synthetic bus schedule.
//!
//! Generates a deterministic timetable for every stop/route combination
//! from nothing but the catalogs' identifiers.

mod error;
mod table;

pub use error::ScheduleError;
pub use table::{Arrivals, BASE_SLOTS, STAGGER_MINS, ScheduleTable};
