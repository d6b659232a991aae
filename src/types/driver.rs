//! Driver duty-cycle types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScheduleError;

/// Driver's duty history entering a trip.
///
/// A completed 34-hour restart is represented as `cycle_used_hours = 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCycleState {
    #[serde(default)]
    pub driver_id: Option<Uuid>,
    /// Hours already used in the current rolling cycle window
    #[serde(default)]
    pub cycle_used_hours: f64,
}

impl DriverCycleState {
    pub fn with_cycle_hours(cycle_used_hours: f64) -> Self {
        Self {
            driver_id: None,
            cycle_used_hours,
        }
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.cycle_used_hours.is_finite() || self.cycle_used_hours < 0.0 {
            return Err(ScheduleError::invalid(format!(
                "cycle used hours must be a non-negative number, got {}",
                self.cycle_used_hours
            )));
        }
        Ok(())
    }
}

/// One day of a driver's record of duty status, as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDutyRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub driving_hours: f64,
    #[serde(default)]
    pub on_duty_hours: f64,
    #[serde(default)]
    pub off_duty_hours: f64,
}

impl DailyDutyRecord {
    /// Hours counted against the rolling cycle (driving + on duty).
    pub fn duty_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_hours
    }
}
