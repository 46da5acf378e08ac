//! Pure scoring functions. Nothing in here touches the filesystem or the clock;
//! callers pass every input, including "now", explicitly.

pub mod level;
pub mod priority;
pub mod streak;
pub mod xp;

use crate::types::config::ScoringSettings;
use crate::types::progress::{DailyHabitRecord, ExperienceInputs, ProgressSummary};

/// Level and streak state for one athlete. `logs` must be sorted most-recent-first.
pub fn summarize(
    inputs: &ExperienceInputs,
    logs: &[DailyHabitRecord],
    settings: &ScoringSettings,
) -> ProgressSummary {
    let raw_xp = xp::aggregate_xp_with(inputs, &settings.xp);
    let level = level::level_for_signed_total(&settings.level, raw_xp);
    let streak = streak::compute_streaks(logs, settings.streak_window_days);

    ProgressSummary {
        raw_xp,
        level_progress: level.progress(),
        level,
        streak,
        days_logged: logs.len(),
    }
}
