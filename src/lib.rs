pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use engine::level::compute_level;
pub use engine::priority::rank_by_priority;
pub use engine::streak::compute_streaks;
pub use engine::xp::aggregate_xp;
pub use error::{Result, ScoreError};
