use crate::types::progress::{Difficulty, ExercisePriorityCandidate, RankedExercise};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const BEGINNER_BONUS: u64 = 10;
const INTERMEDIATE_BONUS: u64 = 5;
const ADVANCED_BONUS: u64 = 0;
const RECENCY_BONUS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityOptions {
    pub recency_threshold_days: i64,
    pub limit: usize,
    pub usage_weight: u64,
}

impl Default for PriorityOptions {
    fn default() -> Self {
        Self {
            recency_threshold_days: 90,
            limit: 20,
            usage_weight: 2,
        }
    }
}

pub fn difficulty_bonus(difficulty: Option<Difficulty>) -> u64 {
    match difficulty {
        Some(Difficulty::Intermediate) => INTERMEDIATE_BONUS,
        Some(Difficulty::Advanced) => ADVANCED_BONUS,
        Some(Difficulty::Beginner) | Some(Difficulty::Unrecognized) | None => BEGINNER_BONUS,
    }
}

/// Thresholds too large for a `Duration` cover every age; too negative, none.
fn is_recent(age: Duration, threshold_days: i64) -> bool {
    match Duration::try_days(threshold_days) {
        Some(threshold) => age < threshold,
        None => threshold_days > 0,
    }
}

pub fn score(
    candidate: &ExercisePriorityCandidate,
    options: &PriorityOptions,
    now: DateTime<Utc>,
) -> RankedExercise {
    let usage_points = candidate.usage_count.saturating_mul(options.usage_weight);
    let difficulty_bonus = difficulty_bonus(candidate.difficulty);
    let age = now - candidate.created_at;
    let recency_bonus = if is_recent(age, options.recency_threshold_days) {
        RECENCY_BONUS
    } else {
        0
    };

    RankedExercise {
        exercise: candidate.clone(),
        priority_score: usage_points
            .saturating_add(difficulty_bonus)
            .saturating_add(recency_bonus),
        usage_points,
        difficulty_bonus,
        recency_bonus,
    }
}

/// Highest score first; ties keep their input order. At most `options.limit` entries.
pub fn rank_by_priority(
    candidates: &[ExercisePriorityCandidate],
    options: &PriorityOptions,
    now: DateTime<Utc>,
) -> Vec<RankedExercise> {
    let mut ranked = candidates
        .iter()
        .map(|candidate| score(candidate, options, now))
        .collect::<Vec<_>>();
    // sort_by is stable
    ranked.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    ranked.truncate(options.limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn candidate(
        id: &str,
        usage_count: u64,
        difficulty: Option<Difficulty>,
        age_days: i64,
    ) -> ExercisePriorityCandidate {
        ExercisePriorityCandidate {
            id: id.to_string(),
            name: format!("Exercise {id}"),
            category: "strength".to_string(),
            muscle_groups: vec!["quads".to_string()],
            difficulty,
            created_at: now() - Duration::days(age_days),
            usage_count,
        }
    }

    fn ids(ranked: &[RankedExercise]) -> Vec<&str> {
        ranked.iter().map(|entry| entry.exercise.id.as_str()).collect()
    }

    #[test]
    fn score_combines_usage_difficulty_and_recency() {
        let entry = score(
            &candidate("a", 4, Some(Difficulty::Intermediate), 10),
            &PriorityOptions::default(),
            now(),
        );
        assert_eq!(entry.usage_points, 8);
        assert_eq!(entry.difficulty_bonus, 5);
        assert_eq!(entry.recency_bonus, 5);
        assert_eq!(entry.priority_score, 18);
    }

    #[test]
    fn missing_or_unknown_difficulty_scores_as_beginner() {
        assert_eq!(difficulty_bonus(None), 10);
        assert_eq!(difficulty_bonus(Some(Difficulty::Unrecognized)), 10);
        assert_eq!(difficulty_bonus(Some(Difficulty::Advanced)), 0);
    }

    #[test]
    fn recency_threshold_is_exclusive() {
        let options = PriorityOptions::default();
        let at_threshold = score(&candidate("old", 0, None, 90), &options, now());
        let inside = score(&candidate("new", 0, None, 89), &options, now());
        assert_eq!(at_threshold.recency_bonus, 0);
        assert_eq!(inside.recency_bonus, 5);
    }

    #[test]
    fn extreme_recency_thresholds_do_not_panic() {
        let ancient = candidate("ancient", 0, Some(Difficulty::Advanced), 100_000);
        let options = PriorityOptions {
            recency_threshold_days: i64::MAX,
            ..PriorityOptions::default()
        };
        let ranked = rank_by_priority(&[ancient.clone()], &options, now());
        assert_eq!(ranked[0].recency_bonus, 5);

        let options = PriorityOptions {
            recency_threshold_days: i64::MIN,
            ..PriorityOptions::default()
        };
        let ranked = rank_by_priority(&[ancient], &options, now());
        assert_eq!(ranked[0].recency_bonus, 0);
    }

    #[test]
    fn ranking_is_descending_by_score() {
        let candidates = vec![
            candidate("advanced-old", 0, Some(Difficulty::Advanced), 400),
            candidate("popular", 12, Some(Difficulty::Advanced), 400),
            candidate("beginner-new", 0, Some(Difficulty::Beginner), 1),
        ];
        let ranked = rank_by_priority(&candidates, &PriorityOptions::default(), now());
        assert_eq!(ids(&ranked), vec!["popular", "beginner-new", "advanced-old"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let candidates = vec![
            candidate("first", 0, Some(Difficulty::Beginner), 200),
            candidate("second", 0, None, 200),
            candidate("third", 0, Some(Difficulty::Unrecognized), 200),
        ];
        let ranked = rank_by_priority(&candidates, &PriorityOptions::default(), now());
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn limit_truncates_without_reordering() {
        let candidates = vec![
            candidate("a", 1, Some(Difficulty::Advanced), 200),
            candidate("b", 5, Some(Difficulty::Advanced), 200),
            candidate("c", 1, Some(Difficulty::Advanced), 200),
            candidate("d", 3, Some(Difficulty::Advanced), 200),
        ];
        let full = rank_by_priority(&candidates, &PriorityOptions::default(), now());
        let options = PriorityOptions {
            limit: 3,
            ..PriorityOptions::default()
        };
        let truncated = rank_by_priority(&candidates, &options, now());
        assert_eq!(ids(&truncated), vec!["b", "d", "a"]);
        assert_eq!(truncated[..], full[..3]);
    }

    #[test]
    fn empty_candidates_produce_empty_ranking() {
        assert!(rank_by_priority(&[], &PriorityOptions::default(), now()).is_empty());
    }

    #[test]
    fn ranking_is_deterministic() {
        let candidates = vec![
            candidate("a", 2, None, 5),
            candidate("b", 2, Some(Difficulty::Intermediate), 5),
        ];
        let options = PriorityOptions::default();
        assert_eq!(
            rank_by_priority(&candidates, &options, now()),
            rank_by_priority(&candidates, &options, now())
        );
    }
}
