//! Route segment types

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// What the driver is doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentActivity {
    Driving,
    /// Stationary work (pickup, dropoff, fueling).
    OnDutyNotDriving,
    /// Caller-planned rest.
    OffDuty,
}

impl SegmentActivity {
    pub const fn as_str(self) -> &'static str {
        match self {
            SegmentActivity::Driving => "driving",
            SegmentActivity::OnDutyNotDriving => "on_duty_not_driving",
            SegmentActivity::OffDuty => "off_duty",
        }
    }
}

/// A contiguous unit of travel or stationary work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    /// Distance in miles (zero for stationary segments)
    #[serde(default)]
    pub distance: f64,
    /// Duration in hours
    pub duration: f64,
    pub label: String,
    pub activity: SegmentActivity,
}

impl RouteSegment {
    pub fn driving(label: impl Into<String>, distance: f64, duration: f64) -> Self {
        Self {
            distance,
            duration,
            label: label.into(),
            activity: SegmentActivity::Driving,
        }
    }

    pub fn on_duty(label: impl Into<String>, duration: f64) -> Self {
        Self {
            distance: 0.0,
            duration,
            label: label.into(),
            activity: SegmentActivity::OnDutyNotDriving,
        }
    }

    pub fn off_duty(label: impl Into<String>, duration: f64) -> Self {
        Self {
            distance: 0.0,
            duration,
            label: label.into(),
            activity: SegmentActivity::OffDuty,
        }
    }

    /// Reject negative or non-finite distance/duration.
    pub fn validate(&self, index: usize) -> Result<(), ScheduleError> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(ScheduleError::invalid(format!(
                "segment {} ('{}') has invalid distance {}",
                index, self.label, self.distance
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScheduleError::invalid(format!(
                "segment {} ('{}') has invalid duration {}",
                index, self.label, self.duration
            )));
        }
        Ok(())
    }
}
