use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate activity counters for one athlete, already summed by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceInputs {
    #[serde(default)]
    pub workout_count: u64,
    /// Sum of reps x weight across every logged set.
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub achievement_count: u64,
    /// Trainer-awarded points; may be negative.
    #[serde(default)]
    pub bonus_points: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelResult {
    pub total_xp: u64,
    pub level: u64,
    pub current_level_xp: u64,
    pub xp_to_next_level: u64,
}

impl LevelResult {
    /// Fraction of the current level already earned, in `0.0..1.0`.
    pub fn progress(&self) -> f64 {
        let span = self.current_level_xp.saturating_add(self.xp_to_next_level);
        if span == 0 {
            return 0.0;
        }
        self.current_level_xp as f64 / span as f64
    }
}

/// One day of self-reported habit ratings. Missing ratings count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyHabitRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub sleep: Option<i32>,
    #[serde(default)]
    pub hydration: Option<i32>,
    #[serde(default)]
    pub nutrition: Option<i32>,
    #[serde(default)]
    pub training: Option<i32>,
    #[serde(default)]
    pub mobility: Option<i32>,
    #[serde(default)]
    pub recovery: Option<i32>,
    #[serde(default)]
    pub mood: Option<i32>,
    #[serde(default)]
    pub energy: Option<i32>,
}

impl DailyHabitRecord {
    pub const RATING_FIELDS: [&'static str; 8] = [
        "sleep",
        "hydration",
        "nutrition",
        "training",
        "mobility",
        "recovery",
        "mood",
        "energy",
    ];

    /// A record with every rating unset.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sleep: None,
            hydration: None,
            nutrition: None,
            training: None,
            mobility: None,
            recovery: None,
            mood: None,
            energy: None,
        }
    }

    /// Ratings in `RATING_FIELDS` order.
    pub fn ratings(&self) -> [Option<i32>; 8] {
        [
            self.sleep,
            self.hydration,
            self.nutrition,
            self.training,
            self.mobility,
            self.recovery,
            self.mood,
            self.energy,
        ]
    }

    pub fn daily_score(&self) -> i64 {
        self.ratings()
            .iter()
            .map(|rating| i64::from(rating.unwrap_or(0)))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(other)]
    Unrecognized,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active exercise that has no approved public media yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExercisePriorityCandidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedExercise {
    #[serde(flatten)]
    pub exercise: ExercisePriorityCandidate,
    pub priority_score: u64,
    pub usage_points: u64,
    pub difficulty_bonus: u64,
    pub recency_bonus: u64,
}

/// Dashboard card combining level and streak state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Aggregated XP before clamping; negative only when bonus points outweigh activity.
    pub raw_xp: i64,
    pub level: LevelResult,
    pub level_progress: f64,
    pub streak: StreakResult,
    pub days_logged: usize,
}
