//! Regulatory limits and trip-planning defaults (FMCSA, property-carrying).

/// Maximum driving hours between 10-hour rests.
pub const MAX_DRIVING_HOURS: f64 = 11.0;
/// Maximum driving + on-duty hours between 10-hour rests.
pub const DUTY_WINDOW_HOURS: f64 = 14.0;
/// Driving hours allowed before a 30-minute break is required.
pub const BREAK_AFTER_DRIVING_HOURS: f64 = 8.0;
pub const BREAK_HOURS: f64 = 0.5;
pub const REST_HOURS: f64 = 10.0;
pub const RESTART_HOURS: f64 = 34.0;

pub const CYCLE_LIMIT_HOURS: f64 = 70.0;
pub const CYCLE_DAYS: u32 = 8;
pub const SHORT_CYCLE_LIMIT_HOURS: f64 = 60.0;
pub const SHORT_CYCLE_DAYS: u32 = 7;

pub const PICKUP_HOURS: f64 = 1.0;
pub const DROPOFF_HOURS: f64 = 1.0;
pub const FUEL_INTERVAL_MILES: f64 = 1000.0;
pub const FUEL_STOP_HOURS: f64 = 0.5;

pub const BREAK_LABEL: &str = "Break";
pub const REST_LABEL: &str = "Rest Stop";
pub const RESTART_LABEL: &str = "34-hour Restart";
pub const OFF_DUTY_LABEL: &str = "Off Duty";

pub const ROUTE_TO_PICKUP_LABEL: &str = "Route to Pickup";
pub const ROUTE_TO_DROPOFF_LABEL: &str = "Route to Dropoff";
pub const PICKUP_LABEL: &str = "Pickup Location";
pub const DROPOFF_LABEL: &str = "Dropoff Location";
pub const FUEL_LABEL: &str = "Fueling Stop";
