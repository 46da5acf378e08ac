use crate::error::{Result, ScoreError};
use crate::input::read_json;
use crate::types::progress::DailyHabitRecord;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct HabitLoadOptions {
    /// Days counted back from `reference_date`, inclusive of it. 0 keeps everything.
    pub window_days: u32,
    pub rating_max: i32,
    pub reference_date: NaiveDate,
}

pub fn load(path: &Path, options: &HabitLoadOptions) -> Result<Vec<DailyHabitRecord>> {
    let records: Vec<DailyHabitRecord> = read_json(path)?;
    let prepared = prepare(records, options).map_err(|e| match e {
        ScoreError::Validation(msg) => {
            ScoreError::Validation(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        kept = prepared.len(),
        "loaded habit log"
    );
    Ok(prepared)
}

/// Validates ratings and dates, restricts to the window and sorts most-recent-first.
pub fn prepare(
    records: Vec<DailyHabitRecord>,
    options: &HabitLoadOptions,
) -> Result<Vec<DailyHabitRecord>> {
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.date) {
            return Err(ScoreError::Validation(format!(
                "duplicate habit record for {}",
                record.date
            )));
        }
        for (field, rating) in DailyHabitRecord::RATING_FIELDS
            .iter()
            .zip(record.ratings())
        {
            if let Some(value) = rating {
                if !(0..=options.rating_max).contains(&value) {
                    return Err(ScoreError::Validation(format!(
                        "{} rating {} on {} is outside 0..={}",
                        field, value, record.date, options.rating_max
                    )));
                }
            }
        }
    }

    let total = records.len();
    let mut kept = records
        .into_iter()
        .filter(|record| in_window(record.date, options))
        .collect::<Vec<_>>();
    if kept.len() < total {
        tracing::info!(
            dropped = total - kept.len(),
            window_days = options.window_days,
            "habit records outside the window were ignored"
        );
    }

    kept.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(kept)
}

fn in_window(date: NaiveDate, options: &HabitLoadOptions) -> bool {
    let days_before = (options.reference_date - date).num_days();
    if days_before < 0 {
        return false;
    }
    options.window_days == 0 || days_before < i64::from(options.window_days)
}
