use crate::types::progress::{
    ExperienceInputs, LevelResult, ProgressSummary, RankedExercise, StreakResult,
};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ScoreResult {
    Xp {
        inputs: ExperienceInputs,
        total_xp: i64,
        level: LevelResult,
    },
    Level(LevelResult),
    Streak {
        streak: StreakResult,
        days_considered: usize,
        window_days: u32,
    },
    Priority {
        ranked: Vec<RankedExercise>,
        candidates_considered: usize,
    },
    Summary(ProgressSummary),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub tool: String,
    pub version: String,
    /// SHA-256 over the inputs and effective settings; equal digests mean equal results.
    pub input_digest: String,
    pub result: ScoreResult,
}

impl ScoreReport {
    pub fn new<I: Serialize>(inputs: &I, result: ScoreResult) -> Result<Self, serde_json::Error> {
        Ok(Self {
            tool: "fitscore".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_digest: input_digest(inputs)?,
            result,
        })
    }
}

pub fn input_digest<I: Serialize>(inputs: &I) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(inputs)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:x}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::level::compute_level;

    #[test]
    fn digest_is_stable_for_equal_inputs() {
        let a = input_digest(&("level", 420u64)).expect("digest should compute");
        let b = input_digest(&("level", 420u64)).expect("digest should compute");
        let c = input_digest(&("level", 421u64)).expect("digest should compute");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn result_serializes_with_kind_tag() {
        let report =
            ScoreReport::new(&0u64, ScoreResult::Level(compute_level(0))).expect("report");
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["result"]["kind"], "level");
        assert_eq!(value["result"]["data"]["xp_to_next_level"], 100);
        assert_eq!(value["tool"], "fitscore");
    }
}
