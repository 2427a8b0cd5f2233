//! Phase classification for a single calendar day.

use chrono::NaiveDate;

use cycle_model::{CycleConfig, CyclePhase, Fertility, PhaseAssessment, Result};

/// Zero-based day index within the cycle containing `target`.
///
/// Euclidean modulo keeps the result in `[0, cycle_length)` even when
/// `target` precedes `last_period_start` — a truncating `%` would go
/// negative there and misclassify every day before the stored start.
///
/// `cycle_length` must be positive; config-taking entry points validate
/// before calling.
pub fn cycle_day_offset(
    target: NaiveDate,
    last_period_start: NaiveDate,
    cycle_length: i32,
) -> i64 {
    (target - last_period_start)
        .num_days()
        .rem_euclid(i64::from(cycle_length))
}

/// Classify a calendar day against the cycle configuration.
///
/// The model is strictly periodic: `target` and
/// `target + cycle_length` days always classify identically for an
/// unchanged config.
///
/// # Errors
///
/// Returns [`cycle_model::ConfigError`] when the config violates its
/// invariants; the classification itself cannot fail.
pub fn phase_for_date(target: NaiveDate, config: &CycleConfig) -> Result<PhaseAssessment> {
    config.validate()?;
    let offset = cycle_day_offset(target, config.last_period_start, config.cycle_length);
    Ok(classify(config, offset))
}

/// Map a cycle-day offset in `[0, cycle_length)` to its assessment.
///
/// Branch order matters: the ranges are adjacent and the first match
/// wins. Assumes a validated config.
pub(crate) fn classify(config: &CycleConfig, offset: i64) -> PhaseAssessment {
    let period_length = i64::from(config.period_length);
    let ovulation_day = i64::from(config.ovulation_day());

    if offset < period_length {
        return PhaseAssessment::new(CyclePhase::Menstrual, Fertility::NotFertile);
    }

    // Five days leading up to ovulation, ovulation day included.
    if offset >= ovulation_day - 5 && offset <= ovulation_day {
        if offset == ovulation_day - 1 {
            return PhaseAssessment::new(CyclePhase::Ovulation, Fertility::Peak);
        }
        return PhaseAssessment::new(CyclePhase::Follicular, Fertility::FertileWindow);
    }

    if offset > ovulation_day {
        return PhaseAssessment::new(CyclePhase::Luteal, Fertility::NotFertile);
    }

    // Early-cycle follicular days outside the fertile window.
    PhaseAssessment::new(CyclePhase::Follicular, Fertility::NotFertile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> CycleConfig {
        CycleConfig::new(date(2024, 1, 1), 28, 5)
    }

    #[test]
    fn offset_is_euclidean() {
        let start = date(2024, 1, 1);
        assert_eq!(cycle_day_offset(start, start, 28), 0);
        assert_eq!(cycle_day_offset(date(2024, 1, 29), start, 28), 0);
        // One day before the stored start is the last day of the
        // previous projected cycle, not offset -1.
        assert_eq!(cycle_day_offset(date(2023, 12, 31), start, 28), 27);
        assert_eq!(cycle_day_offset(date(2023, 12, 5), start, 28), 1);
    }

    #[test]
    fn menstrual_days() {
        for day in [1, 2, 3, 4, 5] {
            let assessment = phase_for_date(date(2024, 1, day), &config()).unwrap();
            assert_eq!(assessment.phase, CyclePhase::Menstrual, "day {day}");
            assert!(!assessment.fertility.is_fertile());
        }
    }

    #[test]
    fn menstrual_boundary() {
        let config = config();
        // Offset 4 is the last bleeding day; offset 5 is not menstrual.
        assert_eq!(
            phase_for_date(date(2024, 1, 5), &config).unwrap().phase,
            CyclePhase::Menstrual
        );
        assert_ne!(
            phase_for_date(date(2024, 1, 6), &config).unwrap().phase,
            CyclePhase::Menstrual
        );
    }

    #[test]
    fn peak_day_is_ovulation() {
        // ovulation_day = 14, peak at offset 13 = Jan 14.
        let assessment = phase_for_date(date(2024, 1, 14), &config()).unwrap();
        assert_eq!(assessment.phase, CyclePhase::Ovulation);
        assert_eq!(assessment.fertility, Fertility::Peak);
    }

    #[test]
    fn ovulation_day_itself_is_fertile_follicular() {
        // Offset 14 satisfies the window branch but is not the peak day.
        let assessment = phase_for_date(date(2024, 1, 15), &config()).unwrap();
        assert_eq!(assessment.phase, CyclePhase::Follicular);
        assert_eq!(assessment.fertility, Fertility::FertileWindow);
    }

    #[test]
    fn fertile_window_offsets() {
        // Offsets 9..=12 are fertile follicular days around the peak.
        for day in [10, 11, 12, 13] {
            let assessment = phase_for_date(date(2024, 1, day), &config()).unwrap();
            assert_eq!(assessment.phase, CyclePhase::Follicular, "day {day}");
            assert_eq!(assessment.fertility, Fertility::FertileWindow, "day {day}");
        }
    }

    #[test]
    fn early_follicular_is_not_fertile() {
        for day in [6, 7, 8, 9] {
            let assessment = phase_for_date(date(2024, 1, day), &config()).unwrap();
            assert_eq!(assessment.phase, CyclePhase::Follicular, "day {day}");
            assert_eq!(assessment.fertility, Fertility::NotFertile, "day {day}");
        }
    }

    #[test]
    fn luteal_days() {
        // Offsets 15..=27.
        for day in [16, 20, 28] {
            let assessment = phase_for_date(date(2024, 1, day), &config()).unwrap();
            assert_eq!(assessment.phase, CyclePhase::Luteal, "day {day}");
            assert!(!assessment.fertility.is_fertile());
        }
    }

    #[test]
    fn dates_before_start_still_classify() {
        // 2023-12-31 has offset 27, last luteal day of the prior cycle.
        let assessment = phase_for_date(date(2023, 12, 31), &config()).unwrap();
        assert_eq!(assessment.phase, CyclePhase::Luteal);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = CycleConfig::new(date(2024, 1, 1), 28, 28);
        assert!(phase_for_date(date(2024, 1, 10), &bad).is_err());
    }
}
