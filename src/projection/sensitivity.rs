//! Occupancy sensitivity curve for the regular-season baseline

use serde::{Deserialize, Serialize};

/// Occupancy points to evaluate, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancySweep {
    pub start_pct: f64,
    pub end_pct: f64,
    pub step_pct: f64,
}

impl Default for OccupancySweep {
    /// 10%, 20%, ... 100%
    fn default() -> Self {
        Self {
            start_pct: 10.0,
            end_pct: 100.0,
            step_pct: 10.0,
        }
    }
}

impl OccupancySweep {
    /// Occupancy values in ascending order, clamped to [0, 100]
    ///
    /// Points are computed as `start + i * step` rather than by repeated
    /// addition. A non-positive step yields only the start point.
    pub fn points(&self) -> Vec<f64> {
        let start = self.start_pct.clamp(0.0, 100.0);
        let end = self.end_pct.clamp(0.0, 100.0);

        if self.step_pct.is_nan() || self.step_pct <= 0.0 || end < start {
            return vec![start];
        }

        let count = ((end - start) / self.step_pct + 1e-9).floor() as usize + 1;
        (0..count).map(|i| start + i as f64 * self.step_pct).collect()
    }
}

/// One point of the sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub occupancy_pct: f64,
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
}

/// Lowest swept occupancy at which the month turns a profit
pub fn break_even_occupancy(curve: &[SensitivityPoint]) -> Option<f64> {
    curve.iter().find(|p| p.profit >= 0.0).map(|p| p.occupancy_pct)
}
