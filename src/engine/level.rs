use crate::types::progress::LevelResult;
use serde::Serialize;

/// Linear XP curve: level `n` costs `base + step * (n - 1)` XP to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCurve {
    pub base: u64,
    pub step: u64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base: 100,
            step: 50,
        }
    }
}

impl LevelCurve {
    pub fn requirement(&self, level: u64) -> u128 {
        u128::from(self.base.max(1)) + u128::from(self.step) * u128::from(level.saturating_sub(1))
    }

    /// XP needed to clear levels `1..=n`. `None` when the value leaves u128.
    fn cumulative(&self, n: u128) -> Option<u128> {
        let flat = n.checked_mul(u128::from(self.base.max(1)))?;
        let triangle = n.checked_mul(n.saturating_sub(1))? / 2;
        flat.checked_add(triangle.checked_mul(u128::from(self.step))?)
    }

    /// Equivalent to repeatedly subtracting `requirement(level)` while enough XP
    /// remains, but runs in O(log total_xp).
    pub fn compute(&self, total_xp: u64) -> LevelResult {
        let total = u128::from(total_xp);
        let fits = |n: u128| self.cumulative(n).is_some_and(|needed| needed <= total);

        // cumulative(lo) <= total < cumulative(hi)
        let mut lo: u128 = 0;
        let mut hi: u128 = total / u128::from(self.base.max(1)) + 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let cleared = lo;
        let remaining = total - self.cumulative(cleared).unwrap_or(0);
        let level = clamp_u64(cleared + 1);
        let requirement = self.requirement(level);

        LevelResult {
            total_xp,
            level,
            current_level_xp: clamp_u64(remaining),
            xp_to_next_level: clamp_u64(requirement - remaining),
        }
    }
}

pub fn compute_level(total_xp: u64) -> LevelResult {
    LevelCurve::default().compute(total_xp)
}

/// Aggregated XP can dip below zero through negative bonus points; such totals
/// are scored as zero.
pub fn level_for_signed_total(curve: &LevelCurve, total: i64) -> LevelResult {
    let clamped = u64::try_from(total).unwrap_or_else(|_| {
        tracing::warn!(total, "negative xp total clamped to zero");
        0
    });
    curve.compute(clamped)
}

fn clamp_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
