//! Command implementations.

use std::fs;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, warn};

use cycle_engine::{outlook, project_range};
use cycle_model::{CycleConfig, CyclePhase, Fertility, PhaseAssessment, UserProfile};

use crate::cli::{CalendarArgs, ProfileArgs, TodayArgs};
use crate::summary::{print_calendar, print_outlook, print_phases};

pub fn run_today(args: &TodayArgs, system_date: NaiveDate) -> Result<()> {
    let config = load_config(&args.profile)?;
    let reference = args.date.unwrap_or(system_date);
    if config.last_period_start > reference {
        // Soft anomaly: the engine clamps to cycle day 1 rather than failing.
        warn!(
            last_period_start = %config.last_period_start,
            reference = %reference,
            "last period start is in the future"
        );
    }
    let view = outlook(&config, reference).context("compute outlook")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_outlook(&view);
    }
    Ok(())
}

pub fn run_calendar(args: &CalendarArgs, system_date: NaiveDate) -> Result<()> {
    let config = load_config(&args.profile)?;
    let (start, end) = resolve_range(args, system_date)?;
    debug!(%start, %end, "projecting calendar range");
    let days = project_range(&config, start, end).context("project range")?;
    print_calendar(&days);
    Ok(())
}

pub fn run_phases() -> Result<()> {
    // One representative assessment per distinct phase/fertility pairing.
    let rows = [
        PhaseAssessment::new(CyclePhase::Menstrual, Fertility::NotFertile),
        PhaseAssessment::new(CyclePhase::Follicular, Fertility::NotFertile),
        PhaseAssessment::new(CyclePhase::Follicular, Fertility::FertileWindow),
        PhaseAssessment::new(CyclePhase::Ovulation, Fertility::Peak),
        PhaseAssessment::new(CyclePhase::Luteal, Fertility::NotFertile),
    ];
    print_phases(&rows);
    Ok(())
}

/// Resolve the cycle configuration from a profile file and flag overrides.
fn load_config(args: &ProfileArgs) -> Result<CycleConfig> {
    let base = match &args.profile {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read profile {}", path.display()))?;
            let profile: UserProfile = serde_json::from_str(&contents)
                .with_context(|| format!("parse profile {}", path.display()))?;
            debug!(name = %profile.name, "loaded profile");
            Some(profile.cycle)
        }
        None => None,
    };
    let config = resolve_config(base, args)?;
    config.validate()?;
    Ok(config)
}

/// Merge flag overrides onto an optional profile-supplied config.
///
/// Without a profile, the three core flags are all required; the luteal
/// length falls back to the 14-day convention.
fn resolve_config(base: Option<CycleConfig>, args: &ProfileArgs) -> Result<CycleConfig> {
    let mut config = match base {
        Some(config) => config,
        None => {
            let (Some(last_period), Some(cycle_length), Some(period_length)) =
                (args.last_period, args.cycle_length, args.period_length)
            else {
                bail!(
                    "no profile given; --last-period, --cycle-length and \
                     --period-length are required"
                );
            };
            CycleConfig::new(last_period, cycle_length, period_length)
        }
    };
    if let Some(last_period) = args.last_period {
        config.last_period_start = last_period;
    }
    if let Some(cycle_length) = args.cycle_length {
        config.cycle_length = cycle_length;
    }
    if let Some(period_length) = args.period_length {
        config.period_length = period_length;
    }
    if let Some(luteal) = args.luteal_length {
        config.luteal_phase_length = luteal;
    }
    Ok(config)
}

/// Turn the calendar arguments into an inclusive date range.
fn resolve_range(args: &CalendarArgs, system_date: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            bail!("--from {from} is after --to {to}");
        }
        return Ok((from, to));
    }
    match &args.month {
        Some(value) => parse_month(value),
        None => month_bounds(system_date.year(), system_date.month()),
    }
}

/// Parse a `YYYY-MM` month designator into its first and last day.
fn parse_month(value: &str) -> Result<(NaiveDate, NaiveDate)> {
    let (year, month) = value
        .split_once('-')
        .with_context(|| format!("invalid month {value:?}, expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {value:?}"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in {value:?}"))?;
    month_bounds(year, month)
}

fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid month {year}-{month:02}"))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .context("month arithmetic")?;
    Ok((first, next_first - Duration::days(1)))
}
