use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitscore",
    version,
    about = "Workout gamification scoring: XP, levels, habit streaks and media priority"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding fitscore.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate activity counters into total XP and a level
    Xp(XpCommand),
    /// Resolve a total XP value to a level
    Level(LevelCommand),
    /// Compute habit streaks from a daily log
    Streak(StreakCommand),
    /// Rank exercises missing media by priority
    Priority(PriorityCommand),
    /// Level and streak in one progress card
    Summary(SummaryCommand),
}

#[derive(Args)]
pub struct XpCommand {
    /// JSON file with experience counters
    #[arg(long, conflicts_with_all = ["workouts", "volume", "achievements", "bonus"])]
    pub input: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    pub workouts: u64,
    #[arg(long, default_value_t = 0.0)]
    pub volume: f64,
    #[arg(long, default_value_t = 0)]
    pub achievements: u64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub bonus: i64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct LevelCommand {
    pub total_xp: u64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct StreakCommand {
    /// JSON array of daily habit records
    pub logs: PathBuf,
    #[arg(long)]
    pub window_days: Option<u32>,
    /// Reference day for the window (defaults to today, UTC)
    #[arg(long)]
    pub today: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PriorityCommand {
    /// Candidate JSON file, or a directory of them
    pub catalog: PathBuf,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(long)]
    pub recency_days: Option<i64>,
    /// Scoring clock as RFC 3339 (defaults to now)
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SummaryCommand {
    #[arg(long)]
    pub experience: PathBuf,
    #[arg(long)]
    pub logs: PathBuf,
    #[arg(long)]
    pub today: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
