//! Derived dates: upcoming period, ovulation, fertile window, and the
//! aggregate views the presentation layer renders.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use cycle_model::{CycleConfig, FertileWindow, PhaseAssessment, Result};

use crate::cycle_day::cycle_day_number;
use crate::phase::{classify, cycle_day_offset};

/// Projected start of the next cycle after the stored last period.
///
/// Purely additive: `last_period_start + cycle_length`, independent of
/// any reference date. When the stored start is far in the past this may
/// itself be in the past; use [`next_period_on_or_after`] for the next
/// future occurrence.
pub fn next_period_date(config: &CycleConfig) -> Result<NaiveDate> {
    config.validate()?;
    Ok(config.last_period_start + Duration::days(i64::from(config.cycle_length)))
}

/// First projected period start on or after `today`.
///
/// Rolls the stored start forward by whole multiples of `cycle_length`.
/// Equal to [`next_period_date`] whenever `today` falls within the first
/// cycle after the stored start.
pub fn next_period_on_or_after(config: &CycleConfig, today: NaiveDate) -> Result<NaiveDate> {
    config.validate()?;
    let cycle = i64::from(config.cycle_length);
    let elapsed = (today - config.last_period_start).num_days();
    // Smallest k >= 1 with last_period_start + k*cycle >= today.
    let k = if elapsed <= 0 {
        1
    } else {
        (elapsed - 1).div_euclid(cycle) + 1
    };
    Ok(config.last_period_start + Duration::days(k * cycle))
}

/// Assumed ovulation date, counted backward from a period start.
///
/// `period_start` is conventionally the *next* period start, so
/// ovulation lands `luteal_phase_length` days before it.
pub fn ovulation_date(period_start: NaiveDate, luteal_phase_length: i32) -> NaiveDate {
    period_start - Duration::days(i64::from(luteal_phase_length))
}

/// Fixed six-day fertile window around an ovulation date.
///
/// Four days before ovulation through the day after, ends inclusive.
/// Not configurable per user in this model.
pub fn fertile_window(ovulation: NaiveDate) -> FertileWindow {
    FertileWindow {
        start: ovulation - Duration::days(4),
        end: ovulation + Duration::days(1),
    }
}

/// One day of a projected calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProjection {
    pub date: NaiveDate,
    /// Zero-based offset within the projected cycle.
    pub cycle_day_offset: i64,
    pub assessment: PhaseAssessment,
}

/// Classify every day in the inclusive range `[start, end]`.
///
/// The calendar view renders one month at a time from exactly this.
/// Empty when `start > end`.
pub fn project_range(
    config: &CycleConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DayProjection>> {
    config.validate()?;
    let mut days = Vec::new();
    let mut date = start;
    while date <= end {
        let offset = cycle_day_offset(date, config.last_period_start, config.cycle_length);
        days.push(DayProjection {
            date,
            cycle_day_offset: offset,
            assessment: classify(config, offset),
        });
        date += Duration::days(1);
    }
    Ok(days)
}

/// Dashboard aggregate for a single reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleOutlook {
    pub reference_date: NaiveDate,
    /// 1-indexed day of the current cycle, clamped to 1.
    pub cycle_day: u32,
    pub assessment: PhaseAssessment,
    /// First projected period start on or after the reference date.
    pub next_period: NaiveDate,
    /// Ovulation projected backward from `next_period`.
    pub ovulation: NaiveDate,
    pub fertile_window: FertileWindow,
    pub days_until_period: i64,
    /// Days until the fertile window opens; 0 while inside it. When
    /// this cycle's window has already passed, counts to the next
    /// cycle's window.
    pub days_until_fertile: i64,
}

/// Compute the full outlook the home screen renders.
pub fn outlook(config: &CycleConfig, today: NaiveDate) -> Result<CycleOutlook> {
    config.validate()?;
    let offset = cycle_day_offset(today, config.last_period_start, config.cycle_length);
    let assessment = classify(config, offset);
    let next_period = next_period_on_or_after(config, today)?;
    let ovulation = ovulation_date(next_period, config.luteal_phase_length);
    let window = fertile_window(ovulation);

    let days_until_fertile = if window.contains(today) {
        0
    } else if today < window.start {
        (window.start - today).num_days()
    } else {
        // This cycle's window is behind us; the next one sits a full
        // cycle later.
        (window.start + Duration::days(i64::from(config.cycle_length)) - today).num_days()
    };

    Ok(CycleOutlook {
        reference_date: today,
        cycle_day: cycle_day_number(today, config.last_period_start),
        assessment,
        next_period,
        ovulation,
        fertile_window: window,
        days_until_period: (next_period - today).num_days(),
        days_until_fertile,
    })
}
