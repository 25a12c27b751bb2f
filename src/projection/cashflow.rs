//! Multi-year cumulative cash flow

use serde::{Deserialize, Serialize};

/// Cumulative position at the end of a projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowPoint {
    /// Years since opening; 0 is the day the investment is made
    pub year: u32,
    pub cumulative_cash_flow: f64,
}

/// Straight-line cumulative cash flow for years `0..=years`
///
/// Year 0 holds the negative investment; every following year adds the same
/// annual net profit. No discounting, growth or inflation is applied.
pub fn project_cumulative(initial_investment: f64, annual_net_profit: f64, years: u32) -> Vec<CashflowPoint> {
    (0..=years)
        .map(|year| CashflowPoint {
            year,
            cumulative_cash_flow: -initial_investment + annual_net_profit * year as f64,
        })
        .collect()
}

/// First whole year in which the cumulative position is non-negative
pub fn first_positive_year(points: &[CashflowPoint]) -> Option<u32> {
    points
        .iter()
        .find(|p| p.cumulative_cash_flow >= 0.0)
        .map(|p| p.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_five_year_straight_line() {
        let points = project_cumulative(3_000_000.0, 1_296_600.0, 5);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].year, 0);
        assert_relative_eq!(points[0].cumulative_cash_flow, -3_000_000.0);
        assert_relative_eq!(points[1].cumulative_cash_flow, -1_703_400.0, epsilon = 1e-6);
        assert_relative_eq!(points[5].cumulative_cash_flow, 3_483_000.0, epsilon = 1e-6);
        assert_eq!(first_positive_year(&points), Some(3));
    }

    #[test]
    fn test_loss_never_recovers() {
        let points = project_cumulative(1_000_000.0, -50_000.0, 5);
        assert_relative_eq!(points[5].cumulative_cash_flow, -1_250_000.0);
        assert_eq!(first_positive_year(&points), None);
    }
}
