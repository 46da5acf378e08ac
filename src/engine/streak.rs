use crate::types::progress::{DailyHabitRecord, StreakResult};
use chrono::NaiveDate;

/// Streaks over a habit log sorted most-recent-first.
///
/// `current_streak` counts back from the most recent record and ends at the first
/// zero-score day or date gap; a zero score on the most recent record yields 0.
/// `longest_streak` is the longest such run anywhere in the window.
///
/// Records dated `reference_window_days` or more days before the most recent record
/// are ignored; a window of 0 leaves the log unbounded.
pub fn compute_streaks(logs: &[DailyHabitRecord], reference_window_days: u32) -> StreakResult {
    let window = within_window(logs, reference_window_days);

    StreakResult {
        current_streak: run_from(window, 0),
        longest_streak: longest_run(window),
    }
}

fn within_window(logs: &[DailyHabitRecord], reference_window_days: u32) -> &[DailyHabitRecord] {
    let Some(newest) = logs.first() else {
        return logs;
    };
    if reference_window_days == 0 {
        return logs;
    }
    let end = logs
        .iter()
        .position(|record| {
            (newest.date - record.date).num_days() >= i64::from(reference_window_days)
        })
        .unwrap_or(logs.len());
    &logs[..end]
}

/// Length of the run of consecutive active days starting at `start`.
fn run_from(logs: &[DailyHabitRecord], start: usize) -> u32 {
    let mut streak = 0u32;
    let mut prev_date: Option<NaiveDate> = None;

    for record in &logs[start..] {
        if record.daily_score() <= 0 {
            break;
        }
        if let Some(prev) = prev_date {
            let gap = (prev - record.date).num_days();
            if gap != 1 {
                break;
            }
        }
        streak = streak.saturating_add(1);
        prev_date = Some(record.date);
    }

    streak
}

fn longest_run(logs: &[DailyHabitRecord]) -> u32 {
    let mut longest = 0u32;
    let mut index = 0;
    while index < logs.len() {
        let run = run_from(logs, index);
        longest = longest.max(run);
        // Runs never overlap; skip past this one (or the inactive day).
        index += usize::try_from(run).unwrap_or(usize::MAX).max(1);
    }
    longest
}
