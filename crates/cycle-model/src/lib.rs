//! Data model for menstrual-cycle projection.
//!
//! - **config**: [`CycleConfig`] and its invariant validation
//! - **phase**: [`CyclePhase`], [`Fertility`], [`PhaseAssessment`],
//!   [`FertileWindow`]
//! - **profile**: boundary record shapes for the external settings and
//!   daily-log stores
//! - **error**: the [`CycleError`] taxonomy

pub mod config;
pub mod error;
pub mod phase;
pub mod profile;

pub use config::{CycleConfig, DEFAULT_LUTEAL_PHASE_DAYS};
pub use error::{ConfigError, CycleError, Result};
pub use phase::{CyclePhase, Fertility, FertileWindow, PhaseAssessment};
pub use profile::{CycleGoal, DailyLog, FlowIntensity, Mood, NotificationPrefs, UserProfile};
