//! Groups duty entries into per-date logs

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::defaults::OFF_DUTY_LABEL;
use crate::types::{DailyLog, DutyEntry, DutyStatus};

/// Accumulates entries for the day being built and flushes it into a
/// [`DailyLog`] once an entry for a later date arrives.
///
/// Entries must not cross midnight; callers split them beforehand.
#[derive(Debug, Default)]
pub(crate) struct DayBook {
    days: Vec<DailyLog>,
    current: Option<NaiveDate>,
    entries: Vec<DutyEntry>,
}

impl DayBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: DutyEntry) {
        if entry.end <= entry.start {
            return;
        }
        let date = entry.start.date();
        if self.current != Some(date) {
            self.flush();
            self.current = Some(date);
        }
        self.entries.push(entry);
    }

    /// Off duty from midnight up to `start`.
    pub fn pad_before(&mut self, start: NaiveDateTime) {
        let midnight = start.date().and_time(NaiveTime::MIN);
        if start > midnight {
            self.record(DutyEntry::new(midnight, start, DutyStatus::OffDuty, OFF_DUTY_LABEL));
        }
    }

    /// Off duty from `end` up to the following midnight.
    pub fn pad_after(&mut self, end: NaiveDateTime) {
        let midnight = end.date().and_time(NaiveTime::MIN);
        if end > midnight {
            let next_midnight = midnight + Duration::days(1);
            self.record(DutyEntry::new(end, next_midnight, DutyStatus::OffDuty, OFF_DUTY_LABEL));
        }
    }

    fn flush(&mut self) {
        if let Some(date) = self.current.take() {
            let entries = std::mem::take(&mut self.entries);
            self.days.push(DailyLog::new(date, entries));
        }
    }

    pub fn finish(mut self) -> Vec<DailyLog> {
        self.flush();
        self.days
    }
}
