//! Pure cycle-phase projection.
//!
//! Maps a [`cycle_model::CycleConfig`] and a calendar date to the
//! cycle-day number, a phase assessment, and the derived dates (next
//! period, ovulation, fertile window). Every operation is a
//! deterministic function of its inputs: no I/O, no state, no clock —
//! callers supply the reference date, normalized to whole calendar days
//! in one consistent timezone.
//!
//! - **cycle_day**: 1-indexed day numbering
//! - **phase**: offset computation and phase classification
//! - **projection**: derived dates, range projection, dashboard outlook

pub mod cycle_day;
pub mod phase;
pub mod projection;

pub use cycle_day::cycle_day_number;
pub use phase::{cycle_day_offset, phase_for_date};
pub use projection::{
    CycleOutlook, DayProjection, fertile_window, next_period_date, next_period_on_or_after,
    outlook, ovulation_date, project_range,
};
