//! Scheduling services

pub mod cycle;
pub mod hos;
pub mod trip_segments;
