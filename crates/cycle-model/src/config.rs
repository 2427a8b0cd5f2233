//! Cycle configuration supplied by the settings store.
//!
//! The engine never reads the store itself; callers fetch the record and
//! pass it in by value. All dates are whole calendar days in a single
//! consistent timezone chosen by the caller — the model never truncates
//! or shifts them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Interval between ovulation and the next period start, in days.
///
/// Assumed constant regardless of total cycle length; 14 is the
/// conventional average.
pub const DEFAULT_LUTEAL_PHASE_DAYS: i32 = 14;

/// A user's cycle parameters, immutable per query.
///
/// `cycle_length` is the expected number of days between consecutive
/// period starts. The plausible human range is roughly 21-45 days, but
/// that is a domain convention, not an invariant: any positive length is
/// accepted. `period_length` must be non-negative and strictly shorter
/// than the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleConfig {
    /// First day of the most recent menstrual bleeding.
    pub last_period_start: NaiveDate,
    /// Expected days between consecutive period starts.
    pub cycle_length: i32,
    /// Expected duration of bleeding within a cycle, in days.
    pub period_length: i32,
    /// Days from ovulation to the next period start.
    #[serde(default = "default_luteal_phase_length")]
    pub luteal_phase_length: i32,
}

fn default_luteal_phase_length() -> i32 {
    DEFAULT_LUTEAL_PHASE_DAYS
}

impl CycleConfig {
    /// Build a config with the conventional 14-day luteal phase.
    pub fn new(last_period_start: NaiveDate, cycle_length: i32, period_length: i32) -> Self {
        Self {
            last_period_start,
            cycle_length,
            period_length,
            luteal_phase_length: DEFAULT_LUTEAL_PHASE_DAYS,
        }
    }

    /// Override the luteal phase length.
    #[must_use]
    pub fn with_luteal_phase_length(mut self, days: i32) -> Self {
        self.luteal_phase_length = days;
        self
    }

    /// Check the configuration invariants.
    ///
    /// Exactly three conditions are rejected: a non-positive cycle
    /// length, a negative period length, and a period length that
    /// reaches or exceeds the cycle length. Nothing else is validated
    /// here; date inputs only need to be valid calendar days, which the
    /// type already guarantees.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_length <= 0 {
            return Err(ConfigError::NonPositiveCycleLength {
                cycle_length: self.cycle_length,
            });
        }
        if self.period_length < 0 {
            return Err(ConfigError::NegativePeriodLength {
                period_length: self.period_length,
            });
        }
        if self.period_length >= self.cycle_length {
            return Err(ConfigError::PeriodExceedsCycle {
                period_length: self.period_length,
                cycle_length: self.cycle_length,
            });
        }
        Ok(())
    }

    /// Zero-based cycle-day index on which ovulation is assumed to occur.
    pub fn ovulation_day(&self) -> i32 {
        self.cycle_length - self.luteal_phase_length
    }
}
