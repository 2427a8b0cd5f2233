//! Phase classification results.
//!
//! A phase assessment pairs the phase name with a fertility tag. The
//! `Follicular` name deliberately covers both fertile-window days and
//! early-cycle non-fertile days, matching the observed product
//! behavior; callers must read [`Fertility`], never infer fertility from
//! the phase name alone. Splitting the enum instead is an open product
//! question, not an engineering decision to make here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// The four phases of the periodic cycle model.
///
/// Every cycle-day offset maps to exactly one phase: no overlap, no gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    /// Menstrual bleeding days at the start of the cycle.
    Menstrual,
    /// Pre-ovulation days, both inside and outside the fertile window.
    Follicular,
    /// The single peak-fertility day just before assumed ovulation.
    Ovulation,
    /// Post-ovulation days until the next period start.
    Luteal,
}

impl CyclePhase {
    /// Stable short label for display and lookup keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstrual",
            CyclePhase::Follicular => "Follicular",
            CyclePhase::Ovulation => "Ovulation",
            CyclePhase::Luteal => "Luteal",
        }
    }

    /// All phases in cycle order.
    pub fn all() -> [CyclePhase; 4] {
        [
            CyclePhase::Menstrual,
            CyclePhase::Follicular,
            CyclePhase::Ovulation,
            CyclePhase::Luteal,
        ]
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CyclePhase {
    type Err = String;

    /// Parse a phase label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MENSTRUAL" => Ok(CyclePhase::Menstrual),
            "FOLLICULAR" => Ok(CyclePhase::Follicular),
            "OVULATION" => Ok(CyclePhase::Ovulation),
            "LUTEAL" => Ok(CyclePhase::Luteal),
            _ => Err(format!("Unknown cycle phase: {s}")),
        }
    }
}

/// Fertility tag attached to every phase assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fertility {
    /// Outside the fertile window.
    NotFertile,
    /// Inside the six-day fertile window, not the peak day.
    FertileWindow,
    /// The assumed peak-fertility day.
    Peak,
}

impl Fertility {
    /// Returns true for any day inside the fertile window, peak included.
    pub fn is_fertile(&self) -> bool {
        matches!(self, Fertility::FertileWindow | Fertility::Peak)
    }
}

/// Semantic classification of a single calendar day.
///
/// Carries no styling: visual treatment is a presentation-layer lookup
/// keyed by the phase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAssessment {
    pub phase: CyclePhase,
    pub fertility: Fertility,
}

impl PhaseAssessment {
    pub fn new(phase: CyclePhase, fertility: Fertility) -> Self {
        Self { phase, fertility }
    }

    /// Longer human-readable description distinguishing the two uses of
    /// the `Follicular` label.
    pub fn description(&self) -> &'static str {
        match (self.phase, self.fertility) {
            (CyclePhase::Menstrual, _) => "Period",
            (CyclePhase::Ovulation, _) => "Peak fertility",
            (CyclePhase::Follicular, Fertility::FertileWindow | Fertility::Peak) => {
                "Fertile window"
            }
            (CyclePhase::Follicular, Fertility::NotFertile) => "Rising energy",
            (CyclePhase::Luteal, _) => "PMS possible",
        }
    }
}

/// Inclusive span of days with elevated conception probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertileWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FertileWindow {
    /// Returns true when `date` falls inside the window, ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered by the window, ends included.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_from_str() {
        assert_eq!("Menstrual".parse::<CyclePhase>().unwrap(), CyclePhase::Menstrual);
        assert_eq!("luteal".parse::<CyclePhase>().unwrap(), CyclePhase::Luteal);
        assert_eq!("OVULATION".parse::<CyclePhase>().unwrap(), CyclePhase::Ovulation);
        assert!("periovulatory".parse::<CyclePhase>().is_err());
    }

    #[test]
    fn follicular_description_depends_on_fertility() {
        let fertile = PhaseAssessment::new(CyclePhase::Follicular, Fertility::FertileWindow);
        let quiet = PhaseAssessment::new(CyclePhase::Follicular, Fertility::NotFertile);
        assert_eq!(fertile.description(), "Fertile window");
        assert_eq!(quiet.description(), "Rising energy");
        assert_eq!(fertile.phase, quiet.phase);
    }

    #[test]
    fn fertility_flag() {
        assert!(Fertility::Peak.is_fertile());
        assert!(Fertility::FertileWindow.is_fertile());
        assert!(!Fertility::NotFertile.is_fertile());
    }

    #[test]
    fn window_contains_bounds() {
        let window = FertileWindow {
            start: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        };
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()));
        assert_eq!(window.len_days(), 6);
    }
}
