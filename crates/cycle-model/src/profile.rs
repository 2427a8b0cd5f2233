//! Boundary record shapes for the external stores.
//!
//! The settings store supplies a [`UserProfile`]; the daily-log store
//! records [`DailyLog`] entries keyed by date. The projection engine
//! never reads or writes either store — these types only describe the
//! data crossing the boundary, serialized as camelCase JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CycleConfig;

/// Why the user tracks their cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleGoal {
    Understand,
    AvoidPregnancy,
    SeekPregnancy,
}

/// Menstrual flow intensity for a logged day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowIntensity {
    None,
    Spotting,
    Light,
    Medium,
    Heavy,
}

/// Self-reported mood for a logged day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    Irritated,
    Anxious,
    Sad,
    Neutral,
}

/// Reminder preferences stored alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub period_reminder: bool,
    /// Days of advance notice before the projected period start.
    pub period_reminder_days: i32,
    pub fertile_reminder: bool,
    pub log_reminder: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            period_reminder: true,
            period_reminder_days: 2,
            fertile_reminder: false,
            log_reminder: false,
        }
    }
}

/// The settings-store record, keyed by an opaque user identity upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub goal: CycleGoal,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    /// Projection inputs; the only part of the profile the engine sees.
    #[serde(flatten)]
    pub cycle: CycleConfig,
}

/// A daily-log-store record.
///
/// Unrelated to phase computation: the engine has no dependency on
/// logged observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    pub flow: FlowIntensity,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub mood: Option<Mood>,
    #[serde(default)]
    pub notes: String,
    pub intercourse: bool,
    pub protection: bool,
}
