use crate::engine::level::LevelCurve;
use crate::engine::priority::PriorityOptions;
use crate::engine::xp::XpWeights;
use crate::error::ScoreError;
use serde::{Deserialize, Serialize};

const MAX_CURVE_VALUE: u64 = 1_000_000;
const MAX_RECENCY_DAYS: i64 = 36_500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub xp: Option<XpConfig>,
    pub level: Option<LevelConfig>,
    pub streak: Option<StreakConfig>,
    pub priority: Option<PriorityConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XpConfig {
    pub per_workout: Option<i64>,
    pub volume_unit: Option<f64>,
    pub per_volume_unit: Option<i64>,
    pub per_achievement: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub base_requirement: Option<u64>,
    pub step: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreakConfig {
    pub window_days: Option<u32>,
    pub rating_max: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriorityConfig {
    pub recency_threshold_days: Option<i64>,
    pub limit: Option<usize>,
    pub usage_weight: Option<u64>,
}

/// Fully resolved knobs handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringSettings {
    pub xp: XpWeights,
    pub level: LevelCurve,
    pub streak_window_days: u32,
    pub rating_max: i32,
    pub priority: PriorityOptions,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            xp: XpWeights::default(),
            level: LevelCurve::default(),
            streak_window_days: 365,
            rating_max: 10,
            priority: PriorityOptions::default(),
        }
    }
}

impl ScoringConfig {
    pub fn settings(&self) -> ScoringSettings {
        let defaults = ScoringSettings::default();

        let xp = match &self.xp {
            Some(xp) => XpWeights {
                per_workout: xp.per_workout.unwrap_or(defaults.xp.per_workout),
                volume_unit: xp.volume_unit.unwrap_or(defaults.xp.volume_unit),
                per_volume_unit: xp.per_volume_unit.unwrap_or(defaults.xp.per_volume_unit),
                per_achievement: xp.per_achievement.unwrap_or(defaults.xp.per_achievement),
            },
            None => defaults.xp,
        };

        let level = match &self.level {
            Some(level) => LevelCurve {
                base: level.base_requirement.unwrap_or(defaults.level.base),
                step: level.step.unwrap_or(defaults.level.step),
            },
            None => defaults.level,
        };

        let (streak_window_days, rating_max) = match &self.streak {
            Some(streak) => (
                streak.window_days.unwrap_or(defaults.streak_window_days),
                streak.rating_max.unwrap_or(defaults.rating_max),
            ),
            None => (defaults.streak_window_days, defaults.rating_max),
        };

        let priority = match &self.priority {
            Some(priority) => PriorityOptions {
                recency_threshold_days: priority
                    .recency_threshold_days
                    .unwrap_or(defaults.priority.recency_threshold_days),
                limit: priority.limit.unwrap_or(defaults.priority.limit),
                usage_weight: priority
                    .usage_weight
                    .unwrap_or(defaults.priority.usage_weight),
            },
            None => defaults.priority,
        };

        ScoringSettings {
            xp,
            level,
            streak_window_days,
            rating_max,
            priority,
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        self.settings().validate()
    }
}

impl ScoringSettings {
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !self.xp.volume_unit.is_finite() || self.xp.volume_unit <= 0.0 {
            return Err(ScoreError::ConfigParse(
                "xp.volume_unit must be a finite number greater than 0".to_string(),
            ));
        }
        for (key, weight) in [
            ("per_workout", self.xp.per_workout),
            ("per_volume_unit", self.xp.per_volume_unit),
            ("per_achievement", self.xp.per_achievement),
        ] {
            if weight < 0 {
                return Err(ScoreError::ConfigParse(format!(
                    "xp.{key} must not be negative (found {weight})"
                )));
            }
        }

        if !(2..=MAX_CURVE_VALUE).contains(&self.level.base) {
            return Err(ScoreError::ConfigParse(format!(
                "level.base_requirement must be between 2 and {MAX_CURVE_VALUE}"
            )));
        }
        if self.level.step > MAX_CURVE_VALUE {
            return Err(ScoreError::ConfigParse(format!(
                "level.step must not exceed {MAX_CURVE_VALUE}"
            )));
        }

        if self.rating_max <= 0 {
            return Err(ScoreError::ConfigParse(
                "streak.rating_max must be greater than 0".to_string(),
            ));
        }

        if self.priority.limit == 0 {
            return Err(ScoreError::ConfigParse(
                "priority.limit must be greater than 0".to_string(),
            ));
        }
        if !(0..=MAX_RECENCY_DAYS).contains(&self.priority.recency_threshold_days) {
            return Err(ScoreError::ConfigParse(format!(
                "priority.recency_threshold_days must be between 0 and {MAX_RECENCY_DAYS}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg: ScoringConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.settings(), ScoringSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[xp]
per_workout = 20
volume_unit = 500.0
per_volume_unit = 1
per_achievement = 75

[level]
base_requirement = 200
step = 25

[streak]
window_days = 90
rating_max = 5

[priority]
recency_threshold_days = 30
limit = 5
usage_weight = 3
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("full config should parse");
        let settings = cfg.settings();
        assert_eq!(settings.xp.per_workout, 20);
        assert_eq!(settings.level, LevelCurve { base: 200, step: 25 });
        assert_eq!(settings.streak_window_days, 90);
        assert_eq!(settings.rating_max, 5);
        assert_eq!(settings.priority.limit, 5);
        assert_eq!(settings.priority.usage_weight, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[level]
step = 0
"#,
        )
        .expect("config should parse");
        let settings = cfg.settings();
        assert_eq!(settings.level.base, 100);
        assert_eq!(settings.level.step, 0);
        assert_eq!(settings.priority, PriorityOptions::default());
    }

    #[test]
    fn validate_rejects_tiny_level_base() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[level]
base_requirement = 1
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("level.base_requirement"));
    }

    #[test]
    fn validate_rejects_zero_volume_unit() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[xp]
volume_unit = 0.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("xp.volume_unit"));
    }

    #[test]
    fn validate_rejects_negative_weights() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[xp]
per_achievement = -5
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("xp.per_achievement"));
    }

    #[test]
    fn validate_rejects_zero_limit_and_bad_recency() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[priority]
limit = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());

        let cfg: ScoringConfig = toml::from_str(
            r#"
[priority]
recency_threshold_days = -1
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_rating_max() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[streak]
rating_max = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
