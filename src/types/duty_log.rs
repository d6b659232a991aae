//! Duty log types (record of duty status)

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Convert fractional hours into a millisecond-precision duration.
pub fn duration_from_hours(hours: f64) -> Duration {
    Duration::milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
}

pub fn hours_from_duration(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Duty status of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDuty,
    OffDuty,
    SleeperBerth,
}

impl DutyStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
        }
    }

    /// Driving and on-duty time count against the duty window and the cycle.
    pub const fn is_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

/// One period within a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyEntry {
    pub start: NaiveDateTime,
    /// At most the following midnight
    pub end: NaiveDateTime,
    pub status: DutyStatus,
    pub location: String,
    pub duration_hours: f64,
}

impl DutyEntry {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: DutyStatus,
        location: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            status,
            location: location.into(),
            duration_hours: hours_from_duration(end - start),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Start as "HH:MM"
    pub fn start_label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    /// End as "HH:MM"; an entry ending at the next midnight reads "24:00".
    pub fn end_label(&self) -> String {
        if self.end.date() > self.start.date() && self.end.num_seconds_from_midnight() == 0 {
            "24:00".to_string()
        } else {
            self.end.format("%H:%M").to_string()
        }
    }
}

/// Per-day totals by status category.
///
/// `on_duty_hours` counts on-duty-not-driving time only; sleeper berth
/// time is reported as off duty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
}

impl DayTotals {
    pub fn from_entries(entries: &[DutyEntry]) -> Self {
        let mut driving = Duration::zero();
        let mut on_duty = Duration::zero();
        let mut off_duty = Duration::zero();

        for entry in entries {
            match entry.status {
                DutyStatus::Driving => driving = driving + entry.duration(),
                DutyStatus::OnDuty => on_duty = on_duty + entry.duration(),
                DutyStatus::OffDuty | DutyStatus::SleeperBerth => {
                    off_duty = off_duty + entry.duration()
                }
            }
        }

        Self {
            driving_hours: hours_from_duration(driving),
            on_duty_hours: hours_from_duration(on_duty),
            off_duty_hours: hours_from_duration(off_duty),
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_hours + self.off_duty_hours
    }
}

/// All entries for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    pub entries: Vec<DutyEntry>,
    pub totals: DayTotals,
}

impl DailyLog {
    pub fn new(date: NaiveDate, entries: Vec<DutyEntry>) -> Self {
        let totals = DayTotals::from_entries(&entries);
        Self {
            date,
            entries,
            totals,
        }
    }
}

/// Result of scheduling one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    pub days: Vec<DailyLog>,
    /// Sum of segment distances (miles)
    pub total_distance: f64,
    /// Elapsed hours from trip start to finish, rests included
    pub total_duration: f64,
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub total_off_duty_hours: f64,
    /// Rolling cycle hours used once the trip is complete
    pub cycle_hours_used: f64,
    pub started_at: NaiveDateTime,
    pub finished_at: NaiveDateTime,
}

impl ScheduleResult {
    /// Every entry of every day, in time order.
    pub fn entries(&self) -> impl Iterator<Item = &DutyEntry> {
        self.days.iter().flat_map(|day| day.entries.iter())
    }
}
