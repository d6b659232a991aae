//! Hours-of-Service duty scheduler.
//!
//! Walks an ordered list of route segments and lays them out on a clock,
//! inserting the breaks, rests and restarts the FMCSA property-carrying
//! rules require. The walk is greedy: duty time is consumed as soon as every
//! limit allows it, and when a limit is hit exactly one stop is inserted,
//! sized to the longest requirement due at that moment
//! (34-hour restart > 10-hour rest > off until midnight > 30-minute break).
//!
//! Calendar days are capped the same way as duty windows, so every
//! [`DailyLog`](crate::types::DailyLog) stays within 11 hours of driving and
//! 14 hours of driving plus on-duty time.

mod audit;
mod config;
mod day_book;
mod state;

pub use audit::{audit, HosViolation, ViolationKind};
pub use config::SchedulerConfig;

use chrono::{DateTime, Duration, NaiveDateTime};
use tracing::{debug, info};

use self::config::Limits;
use self::day_book::DayBook;
use self::state::DutyState;
use crate::defaults::{BREAK_LABEL, OFF_DUTY_LABEL, RESTART_LABEL, REST_LABEL};
use crate::error::ScheduleError;
use crate::types::{
    duration_from_hours, hours_from_duration, DayTotals, DriverCycleState, DutyEntry, DutyStatus,
    RouteSegment, ScheduleResult, SegmentActivity,
};

/// Parse a trip start timestamp.
///
/// Accepts RFC 3339 (the offset is dropped, the local wall time kept) and
/// naive `YYYY-MM-DD[T ]HH:MM[:SS]`.
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime, ScheduleError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ScheduleError::invalid(format!("malformed start time '{}'", value)))
}

/// Schedule `segments` under the default property-carrying rules.
pub fn schedule(
    segments: &[RouteSegment],
    driver: &DriverCycleState,
    start_time: NaiveDateTime,
) -> Result<ScheduleResult, ScheduleError> {
    schedule_with_config(segments, driver, start_time, &SchedulerConfig::default())
}

/// Schedule `segments` under the limits and log options in `config`.
pub fn schedule_with_config(
    segments: &[RouteSegment],
    driver: &DriverCycleState,
    start_time: NaiveDateTime,
    config: &SchedulerConfig,
) -> Result<ScheduleResult, ScheduleError> {
    config.validate()?;
    driver.validate()?;
    validate_segments(segments, config)?;

    let mut sim = Simulation::new(start_time, driver, config);

    for segment in segments {
        let duration = duration_from_hours(segment.duration);
        if duration <= Duration::zero() {
            debug!("Skipping zero-duration segment '{}'", segment.label);
            continue;
        }
        match segment.activity {
            SegmentActivity::Driving => sim.drive(&segment.label, duration),
            SegmentActivity::OnDutyNotDriving => sim.work(&segment.label, duration),
            SegmentActivity::OffDuty => sim.advance(DutyStatus::OffDuty, &segment.label, duration),
        }
    }

    let total_distance: f64 = segments.iter().map(|s| s.distance).sum();
    let result = sim.finish(total_distance);

    info!(
        "HOS schedule: {} day(s), {:.2}h driving, {:.2}h on duty, {:.2}h elapsed, cycle {:.2}h",
        result.days.len(),
        result.total_driving_hours,
        result.total_on_duty_hours,
        result.total_duration,
        result.cycle_hours_used
    );

    Ok(result)
}

fn validate_segments(segments: &[RouteSegment], config: &SchedulerConfig) -> Result<(), ScheduleError> {
    if segments.is_empty() {
        return Err(ScheduleError::invalid("route has no segments"));
    }
    let window = duration_from_hours(config.duty_window_hours);
    for (i, segment) in segments.iter().enumerate() {
        segment.validate(i)?;
        if segment.activity == SegmentActivity::OnDutyNotDriving
            && duration_from_hours(segment.duration) > window
        {
            return Err(ScheduleError::ConstraintUnsatisfiable {
                label: segment.label.clone(),
                hours: segment.duration,
                limit: config.duty_window_hours,
            });
        }
    }
    Ok(())
}

/// Kinds of inserted stop, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum StopKind {
    Break,
    DayEnd,
    Rest,
    Restart,
}

#[derive(Debug, Clone, Copy)]
struct Stop {
    kind: StopKind,
    length: Duration,
}

impl Stop {
    /// Fold another requirement into this stop: the dominant kind labels
    /// it, the longest requirement sizes it.
    fn merge(self, kind: StopKind, length: Duration) -> Self {
        Self {
            kind: self.kind.max(kind),
            length: self.length.max(length),
        }
    }
}

/// Add a requirement to the stop being planned, if any.
fn require(stop: Option<Stop>, kind: StopKind, length: Duration) -> Stop {
    match stop {
        Some(s) => s.merge(kind, length),
        None => Stop { kind, length },
    }
}

struct Simulation<'a> {
    config: &'a SchedulerConfig,
    limits: Limits,
    state: DutyState,
    book: DayBook,
    started_at: NaiveDateTime,
}

impl<'a> Simulation<'a> {
    fn new(start: NaiveDateTime, driver: &DriverCycleState, config: &'a SchedulerConfig) -> Self {
        let mut book = DayBook::new();
        if config.pad_to_full_days {
            book.pad_before(start);
        }
        Self {
            config,
            limits: config.limits(),
            state: DutyState::new(start, duration_from_hours(driver.cycle_used_hours)),
            book,
            started_at: start,
        }
    }

    /// Driving is divisible: it runs in chunks up to the tightest allowance.
    fn drive(&mut self, label: &str, duration: Duration) {
        let mut remaining = duration;
        while remaining > Duration::zero() {
            let chunk = self.state.driving_allowance(&self.limits).min(remaining);
            if chunk <= Duration::zero() {
                let stop = self.stop_before_driving(remaining);
                self.take_stop(stop);
                continue;
            }
            if self.state.cycle_allowance(&self.limits) < chunk {
                let stop = self.restart();
                self.take_stop(stop);
                continue;
            }
            self.advance(DutyStatus::Driving, label, chunk);
            remaining = remaining - chunk;
        }
    }

    /// On-duty work is atomic: stops are taken until the whole segment fits.
    fn work(&mut self, label: &str, duration: Duration) {
        while let Some(stop) = self.stop_before_work(duration) {
            self.take_stop(stop);
        }
        self.advance(DutyStatus::OnDuty, label, duration);
    }

    fn stop_before_driving(&self, remaining: Duration) -> Stop {
        let limits = &self.limits;
        let state = &self.state;

        let mut stop = None;
        if state.window_exhausted(limits) {
            stop = Some(require(stop, StopKind::Rest, state.top_up(limits.rest_len)));
        }
        if state.day_exhausted(limits) {
            stop = Some(require(stop, StopKind::DayEnd, state.until_midnight()));
        }
        let break_length = if state.break_due(limits) || stop.is_none() {
            state.top_up(limits.break_len)
        } else {
            Duration::zero()
        };
        let stop = require(stop, StopKind::Break, break_length);

        // Upgrade to a restart when the stop would leave too little cycle
        // time for the next chunk of driving.
        let mut probe = *state;
        probe.pass(DutyStatus::OffDuty, stop.length, limits, |_, _| {});
        let next_chunk = probe.driving_allowance(limits).min(remaining);
        if probe.cycle_allowance(limits) < next_chunk {
            return self.restart().merge(stop.kind, stop.length);
        }
        stop
    }

    fn stop_before_work(&self, duration: Duration) -> Option<Stop> {
        let limits = &self.limits;
        let state = &self.state;
        let before_midnight = duration.min(state.until_midnight());

        let mut stop = None;
        if state.window_duty + duration > limits.duty_window {
            stop = Some(require(stop, StopKind::Rest, state.top_up(limits.rest_len)));
        }
        if state.day_duty + before_midnight > limits.duty_window {
            stop = Some(require(stop, StopKind::DayEnd, state.until_midnight()));
        }

        let mut probe = *state;
        if let Some(s) = stop {
            probe.pass(DutyStatus::OffDuty, s.length, limits, |_, _| {});
        }
        if probe.cycle + duration > limits.cycle_limit {
            let restart = self.restart();
            return Some(require(stop, restart.kind, restart.length));
        }
        stop
    }

    fn restart(&self) -> Stop {
        Stop {
            kind: StopKind::Restart,
            length: self.state.top_up(self.limits.restart_len),
        }
    }

    fn take_stop(&mut self, stop: Stop) {
        let (status, label) = match stop.kind {
            StopKind::Break => (DutyStatus::OffDuty, BREAK_LABEL),
            StopKind::DayEnd => (DutyStatus::OffDuty, OFF_DUTY_LABEL),
            StopKind::Rest if self.config.rest_in_sleeper_berth => (DutyStatus::SleeperBerth, REST_LABEL),
            StopKind::Rest => (DutyStatus::OffDuty, REST_LABEL),
            StopKind::Restart => (DutyStatus::SleeperBerth, RESTART_LABEL),
        };
        debug!(
            "Inserting {:?} at {}: {:.2}h {} (window driving {:.2}h, window duty {:.2}h, cycle {:.2}h)",
            stop.kind,
            self.state.clock,
            hours_from_duration(stop.length),
            status.as_str(),
            hours_from_duration(self.state.window_driving),
            hours_from_duration(self.state.window_duty),
            hours_from_duration(self.state.cycle)
        );
        self.advance(status, label, stop.length);
    }

    /// Spend `duration` in `status`, splitting the entry at every midnight.
    fn advance(&mut self, status: DutyStatus, label: &str, duration: Duration) {
        let book = &mut self.book;
        self.state.pass(status, duration, &self.limits, |start, end| {
            book.record(DutyEntry::new(start, end, status, label));
        });
    }

    fn finish(mut self, total_distance: f64) -> ScheduleResult {
        let finished_at = self.state.clock;
        if self.config.pad_to_full_days {
            self.book.pad_after(finished_at);
        }
        let days = self.book.finish();

        let mut trip = DayTotals::default();
        for day in &days {
            trip.driving_hours += day.totals.driving_hours;
            trip.on_duty_hours += day.totals.on_duty_hours;
            trip.off_duty_hours += day.totals.off_duty_hours;
        }

        ScheduleResult {
            days,
            total_distance,
            total_duration: hours_from_duration(finished_at - self.started_at),
            total_driving_hours: trip.driving_hours,
            total_on_duty_hours: trip.on_duty_hours,
            total_off_duty_hours: trip.off_duty_hours,
            cycle_hours_used: hours_from_duration(self.state.cycle),
            started_at: self.started_at,
            finished_at,
        }
    }
}
