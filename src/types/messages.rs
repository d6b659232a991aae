//! Request/response envelopes for the CLI boundary

use serde::{Deserialize, Serialize};

use super::{DailyDutyRecord, DriverCycleState, RouteSegment, ScheduleResult, TripRoute};
use crate::error::ScheduleError;
use crate::services::hos::HosViolation;

/// Schedule an explicit list of segments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub segments: Vec<RouteSegment>,
    #[serde(default)]
    pub driver: DriverCycleState,
    /// "2026-03-02T08:00", "2026-03-02 08:00:00" or RFC 3339
    pub start_time: String,
}

/// Build segments from a route summary, then schedule them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanRequest {
    pub route: TripRoute,
    #[serde(default)]
    pub driver: DriverCycleState,
    /// Recent daily records; when present they replace `driver.cycleUsedHours`
    #[serde(default)]
    pub history: Vec<DailyDutyRecord>,
    pub start_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanResponse {
    pub segments: Vec<RouteSegment>,
    pub cycle_used_hours: f64,
    pub schedule: ScheduleResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub schedule: ScheduleResult,
    #[serde(default)]
    pub driver: DriverCycleState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub compliant: bool,
    pub violations: Vec<HosViolation>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl From<&ScheduleError> for ErrorResponse {
    fn from(err: &ScheduleError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentActivity;

    #[test]
    fn test_schedule_request_deserializes_from_camel_case() {
        let json = r#"{
            "segments": [
                {"duration": 1.0, "label": "Pickup Location", "activity": "on_duty_not_driving"},
                {"distance": 60.0, "duration": 1.2, "label": "Route to Dropoff", "activity": "driving"}
            ],
            "driver": {"cycleUsedHours": 12.5},
            "startTime": "2026-03-02T08:00"
        }"#;
        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.segments.len(), 2);
        assert_eq!(request.segments[1].activity, SegmentActivity::Driving);
        assert_eq!(request.driver.cycle_used_hours, 12.5);
        assert_eq!(request.start_time, "2026-03-02T08:00");
    }

    #[test]
    fn test_trip_plan_request_history_defaults_empty() {
        let json = r#"{
            "route": {"toDropoff": {"distance": 300.0, "duration": 5.0}},
            "startTime": "2026-03-02T06:00"
        }"#;
        let request: TripPlanRequest = serde_json::from_str(json).unwrap();
        assert!(request.history.is_empty());
        assert_eq!(request.driver, DriverCycleState::default());
    }

    #[test]
    fn test_error_response_from_schedule_error() {
        let err = ScheduleError::invalid("route has no segments");
        let response = ErrorResponse::from(&err);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":\"INVALID_INPUT\""));
        assert!(json.contains("route has no segments"));
    }
}
