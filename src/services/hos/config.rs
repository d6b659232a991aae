//! HOS scheduler configuration

use chrono::Duration;

use crate::defaults;
use crate::error::ScheduleError;
use crate::types::duration_from_hours;

/// Longest rolling cycle accepted, in calendar days
const MAX_CYCLE_DAYS: u32 = 366;

/// Limits and log-shaping options for the duty scheduler
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Driving hours allowed between 10-hour rests (and per calendar day)
    pub max_driving_hours: f64,
    /// Driving + on-duty hours allowed between rests (and per calendar day)
    pub duty_window_hours: f64,
    /// Driving hours allowed before a break is required
    pub break_after_driving_hours: f64,
    pub break_hours: f64,
    pub rest_hours: f64,
    pub restart_hours: f64,
    /// Rolling cycle cap
    pub cycle_limit_hours: f64,
    /// Rolling cycle length in calendar days
    pub cycle_days: u32,
    /// Record 10-hour rests as sleeper berth instead of off duty
    pub rest_in_sleeper_berth: bool,
    /// Fill the first and last day with off-duty time so every day spans 24h
    pub pad_to_full_days: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::property_carrying()
    }
}

impl SchedulerConfig {
    /// Property-carrying driver, 70 hours / 8 days
    pub fn property_carrying() -> Self {
        Self {
            max_driving_hours: defaults::MAX_DRIVING_HOURS,
            duty_window_hours: defaults::DUTY_WINDOW_HOURS,
            break_after_driving_hours: defaults::BREAK_AFTER_DRIVING_HOURS,
            break_hours: defaults::BREAK_HOURS,
            rest_hours: defaults::REST_HOURS,
            restart_hours: defaults::RESTART_HOURS,
            cycle_limit_hours: defaults::CYCLE_LIMIT_HOURS,
            cycle_days: defaults::CYCLE_DAYS,
            rest_in_sleeper_berth: false,
            pad_to_full_days: false,
        }
    }

    /// Property-carrying driver on the 60 hours / 7 days cycle
    pub fn short_cycle() -> Self {
        Self {
            cycle_limit_hours: defaults::SHORT_CYCLE_LIMIT_HOURS,
            cycle_days: defaults::SHORT_CYCLE_DAYS,
            ..Self::property_carrying()
        }
    }

    pub fn with_padding(mut self, pad_to_full_days: bool) -> Self {
        self.pad_to_full_days = pad_to_full_days;
        self
    }

    pub fn with_sleeper_berth_rests(mut self, rest_in_sleeper_berth: bool) -> Self {
        self.rest_in_sleeper_berth = rest_in_sleeper_berth;
        self
    }

    /// Limits must be positive and nested: driving ≤ window ≤ cycle,
    /// break < rest < restart.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let limits = [
            ("max driving hours", self.max_driving_hours),
            ("duty window hours", self.duty_window_hours),
            ("break-after-driving hours", self.break_after_driving_hours),
            ("break hours", self.break_hours),
            ("rest hours", self.rest_hours),
            ("restart hours", self.restart_hours),
            ("cycle limit hours", self.cycle_limit_hours),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScheduleError::invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.cycle_days == 0 || self.cycle_days > MAX_CYCLE_DAYS {
            return Err(ScheduleError::invalid(format!(
                "cycle days must be between 1 and {}, got {}",
                MAX_CYCLE_DAYS, self.cycle_days
            )));
        }
        if self.max_driving_hours > self.duty_window_hours
            || self.duty_window_hours > self.cycle_limit_hours
        {
            return Err(ScheduleError::invalid(
                "limits must satisfy max driving <= duty window <= cycle limit",
            ));
        }
        if self.break_hours >= self.rest_hours || self.rest_hours >= self.restart_hours {
            return Err(ScheduleError::invalid(
                "rest lengths must satisfy break < rest < restart",
            ));
        }
        Ok(())
    }

    pub(crate) fn limits(&self) -> Limits {
        Limits {
            max_driving: duration_from_hours(self.max_driving_hours),
            duty_window: duration_from_hours(self.duty_window_hours),
            break_after: duration_from_hours(self.break_after_driving_hours),
            break_len: duration_from_hours(self.break_hours),
            rest_len: duration_from_hours(self.rest_hours),
            restart_len: duration_from_hours(self.restart_hours),
            cycle_limit: duration_from_hours(self.cycle_limit_hours),
        }
    }
}

/// Millisecond-exact form of the hour limits used by the simulation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub max_driving: Duration,
    pub duty_window: Duration,
    pub break_after: Duration,
    pub break_len: Duration,
    pub rest_len: Duration,
    pub restart_len: Duration,
    pub cycle_limit: Duration,
}
