//! Trip segment planner
//!
//! Turns a routed trip (current location → pickup → dropoff) into the
//! ordered segments the duty scheduler consumes. Fuel stops are placed by
//! cumulative distance across both legs.

use tracing::debug;

use crate::defaults;
use crate::error::ScheduleError;
use crate::types::{RouteLeg, RouteSegment, TripRoute};

/// Stationary times and fueling cadence used when planning a trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlanOptions {
    pub pickup_hours: f64,
    pub dropoff_hours: f64,
    /// Miles between fueling stops
    pub fuel_interval_miles: f64,
    pub fuel_stop_hours: f64,
}

impl Default for TripPlanOptions {
    fn default() -> Self {
        Self {
            pickup_hours: defaults::PICKUP_HOURS,
            dropoff_hours: defaults::DROPOFF_HOURS,
            fuel_interval_miles: defaults::FUEL_INTERVAL_MILES,
            fuel_stop_hours: defaults::FUEL_STOP_HOURS,
        }
    }
}

impl TripPlanOptions {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let hours = [
            ("pickup hours", self.pickup_hours),
            ("dropoff hours", self.dropoff_hours),
            ("fuel stop hours", self.fuel_stop_hours),
        ];
        for (name, value) in hours {
            if !value.is_finite() || value < 0.0 {
                return Err(ScheduleError::invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }
        if !self.fuel_interval_miles.is_finite() || self.fuel_interval_miles <= 0.0 {
            return Err(ScheduleError::invalid(format!(
                "fuel interval must be positive, got {}",
                self.fuel_interval_miles
            )));
        }
        Ok(())
    }
}

/// Plan the segments for `route`.
pub fn plan_trip_segments(
    route: &TripRoute,
    options: &TripPlanOptions,
) -> Result<Vec<RouteSegment>, ScheduleError> {
    route.validate()?;
    options.validate()?;

    let mut planner = LegPlanner {
        options,
        segments: Vec::new(),
        travelled: 0.0,
    };

    planner.drive(defaults::ROUTE_TO_PICKUP_LABEL, &route.to_pickup);
    planner.stationary(defaults::PICKUP_LABEL, options.pickup_hours);
    planner.drive(defaults::ROUTE_TO_DROPOFF_LABEL, &route.to_dropoff);
    planner.stationary(defaults::DROPOFF_LABEL, options.dropoff_hours);

    debug!(
        "Planned {} segments for {:.1} miles / {:.2}h of driving",
        planner.segments.len(),
        route.total_distance(),
        route.total_duration()
    );
    Ok(planner.segments)
}

struct LegPlanner<'a> {
    options: &'a TripPlanOptions,
    segments: Vec<RouteSegment>,
    /// Miles driven so far across all legs
    travelled: f64,
}

impl LegPlanner<'_> {
    fn stationary(&mut self, label: &str, hours: f64) {
        if hours > 0.0 {
            self.segments.push(RouteSegment::on_duty(label, hours));
        }
    }

    /// Emit `leg`, cut at every fuel-interval boundary that falls strictly
    /// inside it. Each piece gets the leg's time in proportion to its miles.
    fn drive(&mut self, label: &str, leg: &RouteLeg) {
        if leg.distance <= 0.0 {
            if leg.duration > 0.0 {
                self.segments.push(RouteSegment::driving(label, 0.0, leg.duration));
            }
            return;
        }

        let interval = self.options.fuel_interval_miles;
        let mut remaining_miles = leg.distance;
        let mut remaining_hours = leg.duration;

        loop {
            let next_fuel = ((self.travelled / interval).floor() + 1.0) * interval;
            let to_fuel = next_fuel - self.travelled;
            if to_fuel >= remaining_miles - 1e-9 {
                self.segments.push(RouteSegment::driving(label, remaining_miles, remaining_hours));
                self.travelled += remaining_miles;
                return;
            }

            let hours = leg.duration * to_fuel / leg.distance;
            self.segments.push(RouteSegment::driving(label, to_fuel, hours));
            self.stationary(defaults::FUEL_LABEL, self.options.fuel_stop_hours);

            remaining_miles -= to_fuel;
            remaining_hours -= hours;
            self.travelled = next_fuel;
        }
    }
}
