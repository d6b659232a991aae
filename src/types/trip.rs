//! Trip route types (supplied by the routing collaborator)

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One routed leg: distance in miles, duration in hours
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub distance: f64,
    pub duration: f64,
}

impl RouteLeg {
    pub fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration }
    }

    fn validate(&self, name: &str) -> Result<(), ScheduleError> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(ScheduleError::invalid(format!(
                "{} leg has invalid distance {}",
                name, self.distance
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScheduleError::invalid(format!(
                "{} leg has invalid duration {}",
                name, self.duration
            )));
        }
        if self.distance > 0.0 && self.duration == 0.0 {
            return Err(ScheduleError::invalid(format!(
                "{} leg covers {} miles in zero time",
                name, self.distance
            )));
        }
        Ok(())
    }
}

/// Current location → pickup → dropoff
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRoute {
    /// Zero when the driver is already at the pickup
    #[serde(default)]
    pub to_pickup: RouteLeg,
    pub to_dropoff: RouteLeg,
}

impl TripRoute {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.to_pickup.validate("pickup")?;
        self.to_dropoff.validate("dropoff")?;
        Ok(())
    }

    pub fn total_distance(&self) -> f64 {
        self.to_pickup.distance + self.to_dropoff.distance
    }

    pub fn total_duration(&self) -> f64 {
        self.to_pickup.duration + self.to_dropoff.duration
    }
}
