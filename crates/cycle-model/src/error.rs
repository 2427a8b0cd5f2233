use thiserror::Error;

/// Configuration invariant violations.
///
/// These are caller errors, not environmental failures: a config that
/// trips one of these is rejected immediately and never silently
/// corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cycle length must be positive, got {cycle_length}")]
    NonPositiveCycleLength { cycle_length: i32 },
    #[error("period length must not be negative, got {period_length}")]
    NegativePeriodLength { period_length: i32 },
    #[error("period length ({period_length}) must be shorter than cycle length ({cycle_length})")]
    PeriodExceedsCycle {
        period_length: i32,
        cycle_length: i32,
    },
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("invalid cycle configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CycleError>;
