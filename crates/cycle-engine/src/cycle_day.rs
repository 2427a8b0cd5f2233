//! Cycle-day numbering relative to the last period start.
//!
//! Day 1 is the first day of bleeding; there is no day 0.

use chrono::NaiveDate;

/// Calculate the 1-indexed day of the current cycle.
///
/// Whole days elapsed since `last_period_start`, plus one. A reference
/// date before `last_period_start` (a future-dated "last period") clamps
/// to day 1 — a defensive default, not a validated rule; callers that
/// want to surface the anomaly should compare the dates themselves.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use cycle_engine::cycle_day_number;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// // Same day = Day 1
/// assert_eq!(cycle_day_number(start, start), 1);
///
/// // Next day = Day 2
/// let day2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(cycle_day_number(day2, start), 2);
///
/// // Day before the start clamps to 1
/// let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(cycle_day_number(before, start), 1);
/// ```
pub fn cycle_day_number(today: NaiveDate, last_period_start: NaiveDate) -> u32 {
    let elapsed = (today - last_period_start).num_days();
    if elapsed >= 0 {
        // Elapsed days fit u32 for any pair of chrono calendar dates.
        elapsed as u32 + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_day_one() {
        let start = date(2024, 1, 1);
        assert_eq!(cycle_day_number(start, start), 1);
    }

    #[test]
    fn week_after_is_day_eight() {
        assert_eq!(cycle_day_number(date(2024, 1, 8), date(2024, 1, 1)), 8);
    }

    #[test]
    fn crosses_month_boundary() {
        assert_eq!(cycle_day_number(date(2024, 2, 3), date(2024, 1, 20)), 15);
    }

    #[test]
    fn future_dated_start_clamps_to_one() {
        assert_eq!(cycle_day_number(date(2024, 1, 1), date(2024, 1, 15)), 1);
        assert_eq!(cycle_day_number(date(2020, 6, 1), date(2024, 1, 15)), 1);
    }

    #[test]
    fn never_returns_zero() {
        // Day 1 and the clamped anomaly case are adjacent; no day 0 exists.
        let start = date(2024, 1, 15);
        assert_eq!(cycle_day_number(date(2024, 1, 14), start), 1);
        assert_eq!(cycle_day_number(start, start), 1);
    }
}
