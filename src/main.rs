mod cli;

use chrono::Utc;
use clap::Parser;
use fitscore::engine::{self, level, priority, streak, xp};
use fitscore::error::ScoreError;
use fitscore::input::{self, habits::HabitLoadOptions};
use fitscore::report::{self, OutputFormat};
use fitscore::types::config::ScoringSettings;
use fitscore::types::progress::ExperienceInputs;
use fitscore::types::report::{ScoreReport, ScoreResult};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn load_settings(cli: &cli::Cli) -> Result<ScoringSettings, ScoreError> {
    if !cli.config_dir.exists() {
        return Err(ScoreError::PathNotFound(
            cli.config_dir.display().to_string(),
        ));
    }
    match fitscore::config::load_config(&cli.config_dir)? {
        Some(cfg) => Ok(cfg.settings()),
        None => {
            tracing::info!(
                dir = %cli.config_dir.display(),
                "no fitscore.toml found, using built-in defaults"
            );
            Ok(ScoringSettings::default())
        }
    }
}

fn emit(report: &ScoreReport, format: cli::ReportFormat) -> Result<i32, ScoreError> {
    let output_format = match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    };
    let rendered = report::render(report, output_format)?;
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let mut settings = load_settings(&cli)?;

    match cli.command {
        cli::Commands::Xp(cmd) => {
            let inputs = match &cmd.input {
                Some(path) => input::experience::load(path)?,
                None => {
                    let inputs = ExperienceInputs {
                        workout_count: cmd.workouts,
                        total_volume: cmd.volume,
                        achievement_count: cmd.achievements,
                        bonus_points: cmd.bonus,
                    };
                    input::experience::validate(&inputs)?;
                    inputs
                }
            };

            let total_xp = xp::aggregate_xp_with(&inputs, &settings.xp);
            let level = level::level_for_signed_total(&settings.level, total_xp);
            tracing::info!(total_xp, level = level.level, "aggregated experience");

            let report = ScoreReport::new(
                &(&inputs, &settings.xp, &settings.level),
                ScoreResult::Xp {
                    inputs: inputs.clone(),
                    total_xp,
                    level,
                },
            )?;
            emit(&report, cmd.format)
        }
        cli::Commands::Level(cmd) => {
            let level = settings.level.compute(cmd.total_xp);
            let report = ScoreReport::new(
                &(cmd.total_xp, &settings.level),
                ScoreResult::Level(level),
            )?;
            emit(&report, cmd.format)
        }
        cli::Commands::Streak(cmd) => {
            if let Some(window_days) = cmd.window_days {
                settings.streak_window_days = window_days;
            }
            let options = HabitLoadOptions {
                window_days: settings.streak_window_days,
                rating_max: settings.rating_max,
                reference_date: cmd.today.unwrap_or_else(|| Utc::now().date_naive()),
            };
            let logs = input::habits::load(&cmd.logs, &options)?;
            let result = streak::compute_streaks(&logs, settings.streak_window_days);
            tracing::info!(
                current = result.current_streak,
                longest = result.longest_streak,
                "computed streaks"
            );

            let report = ScoreReport::new(
                &(&logs, settings.streak_window_days),
                ScoreResult::Streak {
                    streak: result,
                    days_considered: logs.len(),
                    window_days: settings.streak_window_days,
                },
            )?;
            emit(&report, cmd.format)
        }
        cli::Commands::Priority(cmd) => {
            if let Some(limit) = cmd.limit {
                settings.priority.limit = limit;
            }
            if let Some(recency_days) = cmd.recency_days {
                settings.priority.recency_threshold_days = recency_days;
            }
            settings.validate()?;

            let now = cmd.now.unwrap_or_else(Utc::now);
            let candidates = input::exercises::load(&cmd.catalog)?;
            let ranked = priority::rank_by_priority(&candidates, &settings.priority, now);
            tracing::info!(
                candidates = candidates.len(),
                shown = ranked.len(),
                "ranked exercises by media priority"
            );

            let report = ScoreReport::new(
                &(&candidates, &settings.priority, now),
                ScoreResult::Priority {
                    ranked,
                    candidates_considered: candidates.len(),
                },
            )?;
            emit(&report, cmd.format)
        }
        cli::Commands::Summary(cmd) => {
            let inputs = input::experience::load(&cmd.experience)?;
            let options = HabitLoadOptions {
                window_days: settings.streak_window_days,
                rating_max: settings.rating_max,
                reference_date: cmd.today.unwrap_or_else(|| Utc::now().date_naive()),
            };
            let logs = input::habits::load(&cmd.logs, &options)?;
            let summary = engine::summarize(&inputs, &logs, &settings);

            let report = ScoreReport::new(
                &(&inputs, &logs, &settings),
                ScoreResult::Summary(summary),
            )?;
            emit(&report, cmd.format)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
