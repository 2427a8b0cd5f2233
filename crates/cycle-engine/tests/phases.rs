//! End-to-end phase classification scenarios.

use chrono::{Duration, NaiveDate};
use cycle_engine::{
    cycle_day_number, fertile_window, next_period_date, ovulation_date, phase_for_date,
};
use cycle_model::{ConfigError, CycleConfig, CycleError, CyclePhase, Fertility};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reference_config() -> CycleConfig {
    CycleConfig::new(date(2024, 1, 1), 28, 5)
}

#[test]
fn full_cycle_classification_table() {
    // 28-day cycle, 5 bleeding days, 14-day luteal phase: ovulation day
    // index 14, peak at offset 13.
    let config = reference_config();
    let expected: Vec<(i64, CyclePhase, bool)> = (0..28)
        .map(|offset| match offset {
            0..=4 => (offset, CyclePhase::Menstrual, false),
            5..=8 => (offset, CyclePhase::Follicular, false),
            13 => (offset, CyclePhase::Ovulation, true),
            9..=14 => (offset, CyclePhase::Follicular, true),
            _ => (offset, CyclePhase::Luteal, false),
        })
        .collect();

    for (offset, phase, fertile) in expected {
        let target = config.last_period_start + Duration::days(offset);
        let assessment = phase_for_date(target, &config).unwrap();
        assert_eq!(assessment.phase, phase, "offset {offset}");
        assert_eq!(
            assessment.fertility.is_fertile(),
            fertile,
            "offset {offset}"
        );
    }
}

#[test]
fn ovulation_day_edge_is_fertile_follicular() {
    // Offset 14 equals the ovulation day index: it satisfies the window
    // branch but is not the peak day, so it stays Follicular.
    let assessment = phase_for_date(date(2024, 1, 15), &reference_config()).unwrap();
    assert_eq!(assessment.phase, CyclePhase::Follicular);
    assert_eq!(assessment.fertility, Fertility::FertileWindow);
    assert_eq!(assessment.description(), "Fertile window");
}

#[test]
fn derived_date_arithmetic() {
    let config = reference_config();
    let next = next_period_date(&config).unwrap();
    assert_eq!(next, date(2024, 1, 29));

    let ovulation = ovulation_date(next, config.luteal_phase_length);
    assert_eq!(ovulation, date(2024, 1, 15));

    let window = fertile_window(ovulation);
    assert_eq!(window.start, date(2024, 1, 11));
    assert_eq!(window.end, date(2024, 1, 16));
}

#[test]
fn cycle_day_clamps_instead_of_failing() {
    // A future-dated last period is a soft anomaly, not an error.
    assert_eq!(cycle_day_number(date(2024, 1, 1), date(2024, 2, 1)), 1);
}

#[test]
fn configuration_violations_are_rejected() {
    let target = date(2024, 1, 10);

    let zero_cycle = CycleConfig::new(date(2024, 1, 1), 0, 5);
    assert!(matches!(
        phase_for_date(target, &zero_cycle),
        Err(CycleError::Config(ConfigError::NonPositiveCycleLength { .. }))
    ));

    let negative_period = CycleConfig::new(date(2024, 1, 1), 28, -1);
    assert!(matches!(
        phase_for_date(target, &negative_period),
        Err(CycleError::Config(ConfigError::NegativePeriodLength { .. }))
    ));

    let period_fills_cycle = CycleConfig::new(date(2024, 1, 1), 28, 28);
    assert!(matches!(
        phase_for_date(target, &period_fills_cycle),
        Err(CycleError::Config(ConfigError::PeriodExceedsCycle { .. }))
    ));
}

#[test]
fn referential_transparency() {
    // Same inputs, same outputs, regardless of call order or repetition.
    let config = reference_config();
    let target = date(2024, 1, 12);
    let first = phase_for_date(target, &config).unwrap();
    for _ in 0..100 {
        assert_eq!(phase_for_date(target, &config).unwrap(), first);
    }
}
