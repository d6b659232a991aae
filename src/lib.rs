//! HOS Scheduler - Hours-of-Service duty planning for property-carrying drivers
//!
//! Lays a trip's segments out on a clock, inserting the breaks, rests and
//! restarts the federal limits require, and groups the result into daily
//! logs.

pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use error::ScheduleError;
pub use services::cycle::cycle_hours_from_history;
pub use services::hos::{audit, parse_start_time, schedule, schedule_with_config, SchedulerConfig};
pub use services::trip_segments::{plan_trip_segments, TripPlanOptions};
