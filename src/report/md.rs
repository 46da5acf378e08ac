use crate::types::progress::{LevelResult, StreakResult};
use crate::types::report::{ScoreReport, ScoreResult};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Progress Report\n\n");

    match &report.result {
        ScoreResult::Xp {
            inputs,
            total_xp,
            level,
        } => {
            output.push_str("## Experience\n\n");
            output.push_str(&format!(
                "- workouts: {}\n- volume: {:.1}\n- achievements: {}\n- bonus points: {}\n- total xp: {}\n\n",
                inputs.workout_count,
                inputs.total_volume,
                inputs.achievement_count,
                inputs.bonus_points,
                total_xp
            ));
            push_level(&mut output, level);
        }
        ScoreResult::Level(level) => push_level(&mut output, level),
        ScoreResult::Streak {
            streak,
            days_considered,
            window_days,
        } => {
            push_streak(&mut output, streak);
            output.push_str(&format!(
                "{} day(s) considered, window {} day(s)\n\n",
                days_considered, window_days
            ));
        }
        ScoreResult::Priority {
            ranked,
            candidates_considered,
        } => {
            output.push_str("## Media Priority\n\n");
            if ranked.is_empty() {
                output.push_str("- none\n\n");
            } else {
                output.push_str("| # | exercise | category | difficulty | score |\n");
                output.push_str("|---|----------|----------|------------|-------|\n");
                for (rank, entry) in ranked.iter().enumerate() {
                    let difficulty = entry
                        .exercise
                        .difficulty
                        .map(|difficulty| difficulty.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    output.push_str(&format!(
                        "| {} | {} ({}) | {} | {} | {} |\n",
                        rank + 1,
                        entry.exercise.name,
                        entry.exercise.id,
                        entry.exercise.category,
                        difficulty,
                        entry.priority_score
                    ));
                }
                output.push('\n');
            }
            output.push_str(&format!(
                "{} of {} candidate(s) shown\n\n",
                ranked.len(),
                candidates_considered
            ));
        }
        ScoreResult::Summary(summary) => {
            output.push_str(&format!("Total xp: {}\n\n", summary.raw_xp));
            push_level(&mut output, &summary.level);
            push_streak(&mut output, &summary.streak);
            output.push_str(&format!("{} day(s) logged\n\n", summary.days_logged));
        }
    }

    output.push_str(&format!("input digest: `{}`\n", report.input_digest));
    output
}

fn push_level(output: &mut String, level: &LevelResult) {
    output.push_str("## Level\n\n");
    output.push_str(&format!(
        "- level: {}\n- xp in level: {}\n- xp to next level: {}\n- progress: {:.0}%\n\n",
        level.level,
        level.current_level_xp,
        level.xp_to_next_level,
        level.progress() * 100.0
    ));
}

fn push_streak(output: &mut String, streak: &StreakResult) {
    output.push_str("## Streak\n\n");
    output.push_str(&format!(
        "- current: {}\n- longest: {}\n\n",
        streak.current_streak, streak.longest_streak
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::level::compute_level;
    use crate::types::progress::{Difficulty, ExercisePriorityCandidate, RankedExercise};
    use chrono::{TimeZone, Utc};

    #[test]
    fn markdown_level_report_contains_sections() {
        let report =
            ScoreReport::new(&120u64, ScoreResult::Level(compute_level(120))).expect("report");

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Progress Report"));
        assert!(rendered.contains("## Level"));
        assert!(rendered.contains("- level: 2"));
        assert!(rendered.contains("- xp to next level: 130"));
    }

    #[test]
    fn markdown_priority_report_lists_ranked_rows() {
        let created_at = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        let ranked = vec![RankedExercise {
            exercise: ExercisePriorityCandidate {
                id: "lunge".to_string(),
                name: "Walking Lunge".to_string(),
                category: "strength".to_string(),
                muscle_groups: vec![],
                difficulty: Some(Difficulty::Beginner),
                created_at,
                usage_count: 1,
            },
            priority_score: 12,
            usage_points: 2,
            difficulty_bonus: 10,
            recency_bonus: 0,
        }];
        let report = ScoreReport::new(
            &"catalog",
            ScoreResult::Priority {
                ranked,
                candidates_considered: 4,
            },
        )
        .expect("report");

        let rendered = to_markdown(&report);
        assert!(rendered.contains("| 1 | Walking Lunge (lunge) | strength | BEGINNER | 12 |"));
        assert!(rendered.contains("1 of 4 candidate(s) shown"));
    }
}
