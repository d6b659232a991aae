//! Compliance audit of a produced duty log.
//!
//! Replays every entry through the same counters the scheduler uses and
//! reports each point where a limit is exceeded. A schedule produced by
//! [`schedule`](super::schedule) audits clean; the audit exists for logs
//! that were edited or produced elsewhere.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::SchedulerConfig;
use super::state::DutyState;
use crate::types::{
    duration_from_hours, hours_from_duration, DriverCycleState, DutyStatus, ScheduleResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Driving past the break threshold without a qualifying break
    BreakRequired,
    /// Driving past the limit between rests
    DrivingLimit,
    /// Driving + on duty past the window between rests
    DutyWindow,
    /// Rolling cycle exceeded without a restart
    CycleLimit,
    DailyDriving,
    DailyDuty,
    /// Entries overlap or leave a gap
    NotContiguous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HosViolation {
    pub kind: ViolationKind,
    pub at: chrono::NaiveDateTime,
    pub hours: f64,
    pub limit: f64,
    pub message: String,
}

/// Audit `result` against `config`, starting from `driver`'s cycle usage.
pub fn audit(
    result: &ScheduleResult,
    driver: &DriverCycleState,
    config: &SchedulerConfig,
) -> Vec<HosViolation> {
    let limits = config.limits();
    let mut violations = Vec::new();
    let mut state = DutyState::new(result.started_at, duration_from_hours(driver.cycle_used_hours));
    let mut previous_end = None;

    for entry in result.entries() {
        if let Some(end) = previous_end {
            if end != entry.start {
                violations.push(HosViolation {
                    kind: ViolationKind::NotContiguous,
                    at: entry.start,
                    hours: hours_from_duration(entry.start - end),
                    limit: 0.0,
                    message: format!("entry at {} does not start where the previous one ended ({})", entry.start, end),
                });
            }
        }
        previous_end = Some(entry.end);

        state.seek(entry.start);
        state.apply(entry.status, entry.duration(), &limits);
        if !entry.status.is_duty() {
            continue;
        }

        let mut check = |kind: ViolationKind, value: Duration, limit: Duration, what: &str| {
            if value > limit {
                violations.push(HosViolation {
                    kind,
                    at: entry.end,
                    hours: hours_from_duration(value),
                    limit: hours_from_duration(limit),
                    message: format!(
                        "{} reached {:.2}h (limit {:.2}h) at {}",
                        what,
                        hours_from_duration(value),
                        hours_from_duration(limit),
                        entry.end
                    ),
                });
            }
        };

        if entry.status == DutyStatus::Driving {
            check(ViolationKind::BreakRequired, state.since_break, limits.break_after, "driving since break");
            check(ViolationKind::DrivingLimit, state.window_driving, limits.max_driving, "driving since rest");
        }
        check(ViolationKind::DutyWindow, state.window_duty, limits.duty_window, "duty since rest");
        check(ViolationKind::CycleLimit, state.cycle, limits.cycle_limit, "cycle hours");
    }

    for day in &result.days {
        let driving = duration_from_hours(day.totals.driving_hours);
        let duty = duration_from_hours(day.totals.driving_hours + day.totals.on_duty_hours);
        let at = day.date.and_time(chrono::NaiveTime::MIN);
        if driving > limits.max_driving {
            violations.push(HosViolation {
                kind: ViolationKind::DailyDriving,
                at,
                hours: day.totals.driving_hours,
                limit: config.max_driving_hours,
                message: format!("{} has {:.2}h of driving", day.date, day.totals.driving_hours),
            });
        }
        if duty > limits.duty_window {
            violations.push(HosViolation {
                kind: ViolationKind::DailyDuty,
                at,
                hours: hours_from_duration(duty),
                limit: config.duty_window_hours,
                message: format!("{} has {:.2}h of driving and on-duty time", day.date, hours_from_duration(duty)),
            });
        }
    }

    for violation in &violations {
        warn!("HOS violation ({:?}): {}", violation.kind, violation.message);
    }
    violations
}
