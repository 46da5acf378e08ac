use crate::types::progress::ExperienceInputs;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XpWeights {
    pub per_workout: i64,
    /// Volume is credited in whole units of this size.
    pub volume_unit: f64,
    pub per_volume_unit: i64,
    pub per_achievement: i64,
}

impl Default for XpWeights {
    fn default() -> Self {
        Self {
            per_workout: 10,
            volume_unit: 1000.0,
            per_volume_unit: 5,
            per_achievement: 50,
        }
    }
}

pub fn aggregate_xp(inputs: &ExperienceInputs) -> i64 {
    aggregate_xp_with(inputs, &XpWeights::default())
}

/// Expects validated inputs: finite, non-negative volume and a positive volume unit.
pub fn aggregate_xp_with(inputs: &ExperienceInputs, weights: &XpWeights) -> i64 {
    let workouts = saturating_i64(inputs.workout_count).saturating_mul(weights.per_workout);
    let achievements =
        saturating_i64(inputs.achievement_count).saturating_mul(weights.per_achievement);
    let volume = volume_units(inputs.total_volume, weights.volume_unit)
        .saturating_mul(weights.per_volume_unit);

    workouts
        .saturating_add(volume)
        .saturating_add(achievements)
        .saturating_add(inputs.bonus_points)
}

fn volume_units(total_volume: f64, unit: f64) -> i64 {
    if !total_volume.is_finite() || !unit.is_finite() || unit <= 0.0 || total_volume <= 0.0 {
        return 0;
    }
    // `as` saturates at i64::MAX for out-of-range floats.
    (total_volume / unit).floor() as i64
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
