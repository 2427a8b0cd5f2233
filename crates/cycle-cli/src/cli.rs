//! CLI argument definitions for the cycle tracker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cycletrack",
    version,
    about = "Cycle tracker - project menstrual cycle phases and key dates",
    long_about = "Project menstrual cycle phases from a stored profile or explicit flags.\n\n\
                  All computation is local and deterministic: the projection is a simple\n\
                  periodic model over whole calendar days, not a medical prediction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the cycle outlook for a reference date.
    Today(TodayArgs),

    /// Project phases day by day over a month or date range.
    Calendar(CalendarArgs),

    /// List the cycle phases and their meanings.
    Phases,
}

/// Where the cycle configuration comes from.
///
/// Either a JSON profile file (a settings-store export) or explicit
/// flags; flags override profile values.
#[derive(Args)]
pub struct ProfileArgs {
    /// Path to a JSON profile file.
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// First day of the most recent period.
    #[arg(long = "last-period", value_name = "YYYY-MM-DD")]
    pub last_period: Option<NaiveDate>,

    /// Expected days between period starts (typically 21-45).
    #[arg(long = "cycle-length", value_name = "DAYS")]
    pub cycle_length: Option<i32>,

    /// Expected bleeding days per cycle.
    #[arg(long = "period-length", value_name = "DAYS")]
    pub period_length: Option<i32>,

    /// Days from ovulation to the next period start (default 14).
    #[arg(long = "luteal-length", value_name = "DAYS")]
    pub luteal_length: Option<i32>,
}

#[derive(Args)]
pub struct TodayArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Reference date (default: the system date).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Emit the outlook as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Month to project (default: the current month).
    #[arg(long = "month", value_name = "YYYY-MM", conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,

    /// Range start (requires --to).
    #[arg(long = "from", value_name = "YYYY-MM-DD", requires = "to")]
    pub from: Option<NaiveDate>,

    /// Range end (requires --from).
    #[arg(long = "to", value_name = "YYYY-MM-DD", requires = "from")]
    pub to: Option<NaiveDate>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
