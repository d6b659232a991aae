//! Duty-cycle counters threaded through the simulation

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::config::Limits;
use crate::types::DutyStatus;

/// Simulation clock plus every rolling counter the HOS limits need.
///
/// Duty time is always applied in pieces that end at or before the next
/// midnight, so the calendar-day counters never straddle two dates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DutyState {
    pub clock: NaiveDateTime,
    day: NaiveDate,
    /// Driving since the last qualifying rest
    pub window_driving: Duration,
    /// Driving + on duty since the last qualifying rest
    pub window_duty: Duration,
    pub since_break: Duration,
    pub cycle: Duration,
    /// Length of the current unbroken off-duty stretch
    pub off_run: Duration,
    pub day_driving: Duration,
    pub day_duty: Duration,
}

impl DutyState {
    pub fn new(start: NaiveDateTime, cycle: Duration) -> Self {
        Self {
            clock: start,
            day: start.date(),
            window_driving: Duration::zero(),
            window_duty: Duration::zero(),
            since_break: Duration::zero(),
            cycle,
            off_run: Duration::zero(),
            day_driving: Duration::zero(),
            day_duty: Duration::zero(),
        }
    }

    pub fn next_midnight(&self) -> NaiveDateTime {
        (self.clock.date() + Duration::days(1)).and_time(NaiveTime::MIN)
    }

    pub fn until_midnight(&self) -> Duration {
        self.next_midnight() - self.clock
    }

    /// Jump the clock forward, rolling the calendar-day counters if the
    /// date changed.
    pub fn seek(&mut self, to: NaiveDateTime) {
        self.clock = to;
        if self.clock.date() != self.day {
            self.day = self.clock.date();
            self.day_driving = Duration::zero();
            self.day_duty = Duration::zero();
        }
    }

    /// Spend `duration` in `status`, one calendar-day piece at a time.
    /// `on_piece` receives the start and end of each piece.
    pub fn pass(
        &mut self,
        status: DutyStatus,
        duration: Duration,
        limits: &Limits,
        mut on_piece: impl FnMut(NaiveDateTime, NaiveDateTime),
    ) {
        let mut remaining = duration;
        while remaining > Duration::zero() {
            let piece = remaining.min(self.until_midnight());
            let start = self.clock;
            self.apply(status, piece, limits);
            self.seek(start + piece);
            on_piece(start, self.clock);
            remaining = remaining - piece;
        }
    }

    /// Update counters for `piece` without moving the clock.
    pub fn apply(&mut self, status: DutyStatus, piece: Duration, limits: &Limits) {
        match status {
            DutyStatus::Driving | DutyStatus::OnDuty => {
                self.off_run = Duration::zero();
                self.window_duty = self.window_duty + piece;
                self.day_duty = self.day_duty + piece;
                self.cycle = self.cycle + piece;
                if status == DutyStatus::Driving {
                    self.window_driving = self.window_driving + piece;
                    self.day_driving = self.day_driving + piece;
                    self.since_break = self.since_break + piece;
                }
            }
            DutyStatus::OffDuty | DutyStatus::SleeperBerth => {
                self.off_run = self.off_run + piece;
                if self.off_run >= limits.break_len {
                    self.since_break = Duration::zero();
                }
                if self.off_run >= limits.rest_len {
                    self.window_driving = Duration::zero();
                    self.window_duty = Duration::zero();
                }
                if self.off_run >= limits.restart_len {
                    self.cycle = Duration::zero();
                }
            }
        }
    }

    /// Driving that may start now before any limit or midnight is hit.
    pub fn driving_allowance(&self, limits: &Limits) -> Duration {
        [
            limits.max_driving - self.window_driving,
            limits.duty_window - self.window_duty,
            limits.break_after - self.since_break,
            limits.max_driving - self.day_driving,
            limits.duty_window - self.day_duty,
            self.until_midnight(),
        ]
        .into_iter()
        .min()
        .unwrap_or_else(Duration::zero)
        .max(Duration::zero())
    }

    pub fn cycle_allowance(&self, limits: &Limits) -> Duration {
        (limits.cycle_limit - self.cycle).max(Duration::zero())
    }

    pub fn window_exhausted(&self, limits: &Limits) -> bool {
        self.window_driving >= limits.max_driving || self.window_duty >= limits.duty_window
    }

    pub fn day_exhausted(&self, limits: &Limits) -> bool {
        self.day_driving >= limits.max_driving || self.day_duty >= limits.duty_window
    }

    pub fn break_due(&self, limits: &Limits) -> bool {
        self.since_break >= limits.break_after
    }

    /// Remaining length of a rest of `required` given the off-duty time
    /// already accumulated.
    pub fn top_up(&self, required: Duration) -> Duration {
        (required - self.off_run).max(Duration::zero())
    }
}
