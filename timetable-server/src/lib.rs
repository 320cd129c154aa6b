//! Synthetic bus timetable and arrival predictions.
//!
//! Answers: "how many minutes until each route next arrives at this stop?"
//! from an idealised, hour-periodic schedule generated from the stop and
//! route catalogs.

pub mod config;
pub mod domain;
pub mod dto;
pub mod prediction;
pub mod repository;
pub mod schedule;
