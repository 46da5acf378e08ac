use crate::error::{Result, ScoreError};
use crate::input::read_json;
use crate::types::progress::ExperienceInputs;
use std::path::Path;

pub fn load(path: &Path) -> Result<ExperienceInputs> {
    let inputs: ExperienceInputs = read_json(path)?;
    validate(&inputs)?;
    tracing::debug!(
        path = %path.display(),
        workouts = inputs.workout_count,
        "loaded experience inputs"
    );
    Ok(inputs)
}

pub fn validate(inputs: &ExperienceInputs) -> Result<()> {
    if !inputs.total_volume.is_finite() {
        return Err(ScoreError::Validation(
            "total_volume must be a finite number".to_string(),
        ));
    }
    if inputs.total_volume < 0.0 {
        return Err(ScoreError::Validation(format!(
            "total_volume must not be negative (found {})",
            inputs.total_volume
        )));
    }
    Ok(())
}
