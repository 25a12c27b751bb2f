//! Core projection engine: monthly calendar, annual summary, sensitivity and long-term views

use serde::{Deserialize, Serialize};

use super::cashflow::{project_cumulative, CashflowPoint};
use super::monthly::{calculate_month, MonthlyResult};
use super::sensitivity::{OccupancySweep, SensitivityPoint};
use super::summary::AnnualSummary;
use crate::error::Result;
use crate::params::{BaseParameters, ResolvedSeason, Scenario, Season};

/// Days in every projected month; calendar month lengths are not used
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Consumables cost per booked night
pub const SUPPLIES_COST_PER_BOOKED_DAY: f64 = 300.0;

/// Horizon of the cumulative cash-flow projection
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Payback periods longer than this are shown as "10+ years"
pub const PAYBACK_DISPLAY_LIMIT_MONTHS: f64 = 120.0;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Nights available per month
    pub days_per_month: f64,

    /// Supplies cost per booked night
    pub supplies_cost_per_booked_day: f64,

    /// Occupancy points for the sensitivity curve
    pub sensitivity: OccupancySweep,

    /// Years in the cumulative cash-flow projection (year 0 excluded)
    pub projection_years: u32,

    /// Longest payback shown as a number of years
    pub payback_display_limit_months: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            days_per_month: DAYS_PER_MONTH,
            supplies_cost_per_booked_day: SUPPLIES_COST_PER_BOOKED_DAY,
            sensitivity: OccupancySweep::default(),
            projection_years: DEFAULT_PROJECTION_YEARS,
            payback_display_limit_months: PAYBACK_DISPLAY_LIMIT_MONTHS,
        }
    }
}

/// Complete projection result for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Scenario label
    pub scenario: String,

    /// One entry per calendar month, January first
    pub months: Vec<MonthlyResult>,

    pub summary: AnnualSummary,

    /// Regular-season profit by occupancy
    pub sensitivity: Vec<SensitivityPoint>,

    /// Cumulative cash flow by year, starting at year 0
    pub long_term: Vec<CashflowPoint>,
}

/// Main projection engine
///
/// Holds only configuration; every call recomputes from its inputs, so one
/// engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full projection for a scenario
    pub fn project(&self, scenario: &Scenario) -> Result<ProjectionResult> {
        scenario.validate()?;

        let months = self.project_months(scenario);
        let base = &scenario.base;
        let summary = AnnualSummary::from_months(&months, base.initial_investment, base.monthly_rent, base.monthly_utilities);
        let sensitivity = self.occupancy_curve(base);
        let long_term = project_cumulative(base.initial_investment, summary.annual_net_profit, self.config.projection_years);

        log::info!(
            "Projected {:?}: revenue {:.0}, expense {:.0}, net {:.0}, ROI {:.2}%",
            scenario.name,
            summary.total_revenue,
            summary.total_expense,
            summary.annual_net_profit,
            summary.roi_pct
        );
        if summary.payback.is_never() {
            log::warn!("Scenario {:?} does not pay back its initial investment", scenario.name);
        }

        Ok(ProjectionResult {
            scenario: scenario.name.clone(),
            months,
            summary,
            sensitivity,
            long_term,
        })
    }

    /// Annual summary only, skipping the sensitivity and long-term views
    pub fn summarize(&self, scenario: &Scenario) -> Result<AnnualSummary> {
        scenario.validate()?;
        let months = self.project_months(scenario);
        let base = &scenario.base;
        Ok(AnnualSummary::from_months(&months, base.initial_investment, base.monthly_rent, base.monthly_utilities))
    }

    /// Regular-season sensitivity curve for a set of base parameters
    pub fn sensitivity_curve(&self, base: &BaseParameters) -> Result<Vec<SensitivityPoint>> {
        base.validate()?;
        Ok(self.occupancy_curve(base))
    }

    /// Monthly results for the scenario calendar; the scenario must already be validated
    fn project_months(&self, scenario: &Scenario) -> Vec<MonthlyResult> {
        scenario
            .calendar
            .iter()
            .map(|(month, season)| {
                let resolved = scenario.resolve(season);
                let figures = calculate_month(&resolved, &scenario.base, &self.config);
                log::debug!(
                    "Month {:>2} {:<8} ADR {:.0} occ {:.1}% stay {:.1}: revenue {:.0}, expense {:.0}",
                    month,
                    season,
                    resolved.adr,
                    resolved.occupancy_pct,
                    resolved.stay_length_nights,
                    figures.total_revenue,
                    figures.total_expense
                );
                MonthlyResult::new(month, &resolved, figures)
            })
            .collect()
    }

    /// Evaluate the monthly calculation at each swept occupancy using regular-season values
    fn occupancy_curve(&self, base: &BaseParameters) -> Vec<SensitivityPoint> {
        self.config
            .sensitivity
            .points()
            .into_iter()
            .map(|occupancy_pct| {
                let resolved = ResolvedSeason {
                    season: Season::Regular,
                    adr: base.regular_adr,
                    occupancy_pct,
                    stay_length_nights: base.regular_avg_stay_length_nights,
                };
                let figures = calculate_month(&resolved, base, &self.config);
                SensitivityPoint {
                    occupancy_pct,
                    revenue: figures.total_revenue,
                    expense: figures.total_expense,
                    profit: figures.net_profit,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::params::{MonthlySeasonAssignment, SeasonProfile, SeasonProfiles};
    use crate::projection::summary::{CostCategory, Payback};
    use crate::projection::sensitivity::break_even_occupancy;
    use approx::assert_relative_eq;

    fn all_regular() -> Scenario {
        Scenario {
            name: "all regular".to_string(),
            calendar: MonthlySeasonAssignment::uniform(Season::Regular),
            ..Scenario::sample()
        }
    }

    #[test]
    fn test_all_regular_reference_year() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&all_regular()).unwrap();

        assert_eq!(result.months.len(), 12);
        for m in &result.months {
            assert_relative_eq!(m.net_profit(), 108_050.0, epsilon = 1e-6);
        }

        let s = &result.summary;
        assert_relative_eq!(s.total_revenue, 4_284_000.0, epsilon = 1e-6);
        assert_relative_eq!(s.total_expense, 2_987_400.0, epsilon = 1e-6);
        assert_relative_eq!(s.annual_net_profit, 1_296_600.0, epsilon = 1e-6);
        assert_relative_eq!(s.monthly_net_profit_average, 108_050.0, epsilon = 1e-6);
        assert_relative_eq!(s.roi_pct, 43.22, epsilon = 1e-6);
        assert_relative_eq!(s.payback.months().unwrap(), 27.7649, epsilon = 1e-3);

        assert_relative_eq!(result.long_term[0].cumulative_cash_flow, -3_000_000.0);
        assert_relative_eq!(result.long_term[1].cumulative_cash_flow, -1_703_400.0, epsilon = 1e-6);
        assert_relative_eq!(result.long_term[5].cumulative_cash_flow, 3_483_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_monthly_sums_match_annual_totals() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&Scenario::sample()).unwrap();

        let revenue: f64 = result.months.iter().map(|m| m.revenue()).sum();
        let expense: f64 = result.months.iter().map(|m| m.expense()).sum();
        assert_relative_eq!(revenue, result.summary.total_revenue, epsilon = 1e-6);
        assert_relative_eq!(expense, result.summary.total_expense, epsilon = 1e-6);
        assert_relative_eq!(result.summary.cost_breakdown.total(), expense, epsilon = 1e-6);
    }

    #[test]
    fn test_months_follow_calendar() {
        let engine = ProjectionEngine::default();
        let scenario = Scenario::sample();
        let result = engine.project(&scenario).unwrap();

        for (m, (month, season)) in result.months.iter().zip(scenario.calendar.iter()) {
            assert_eq!(m.month, month);
            assert_eq!(m.season, season);
        }

        // May is High: 15,000 * 1.3 at 85% over 3-night stays
        let may = &result.months[4];
        assert_relative_eq!(may.adr, 19_500.0, epsilon = 1e-9);
        assert_relative_eq!(may.figures.booked_days, 25.5, epsilon = 1e-9);
        assert_relative_eq!(may.figures.number_of_stays, 8.5, epsilon = 1e-9);
    }

    #[test]
    fn test_cost_breakdown_omits_zero_categories() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&all_regular()).unwrap();
        let breakdown = &result.summary.cost_breakdown;

        assert_eq!(breakdown.get(CostCategory::Management), None);
        assert_relative_eq!(breakdown.get(CostCategory::Rent).unwrap(), 1_440_000.0);
        assert_relative_eq!(breakdown.get(CostCategory::Utilities).unwrap(), 300_000.0);
        assert_relative_eq!(breakdown.get(CostCategory::OtaFees).unwrap(), 567_000.0, epsilon = 1e-6);
        assert_relative_eq!(breakdown.get(CostCategory::Cleaning).unwrap(), 604_800.0, epsilon = 1e-6);
        assert_relative_eq!(breakdown.get(CostCategory::Supplies).unwrap(), 75_600.0, epsilon = 1e-6);
        assert_eq!(breakdown.items.len(), 5);
    }

    #[test]
    fn test_invalid_stay_length_rejected() {
        let mut scenario = Scenario::sample();
        scenario.seasons.low.avg_stay_length_nights = 0.0;

        let err = ProjectionEngine::default().project(&scenario).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidParameter { season: Season::Low, .. }));
    }

    #[test]
    fn test_out_of_domain_inputs_rejected_before_any_month() {
        let engine = ProjectionEngine::default();

        let mut scenario = Scenario::sample();
        scenario.base.regular_occupancy_pct = 150.0;
        let err = engine.project(&scenario).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter { season: Season::Regular, field: "regular_occupancy_pct", .. }
        ));
        assert!(engine.summarize(&scenario).is_err());
        assert!(engine.sensitivity_curve(&scenario.base).is_err());

        let mut scenario = Scenario::sample();
        scenario.seasons.high.adr_multiplier = -2.0;
        let err = engine.project(&scenario).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter { season: Season::High, field: "adr_multiplier", .. }
        ));
    }

    #[test]
    fn test_zero_investment_roi_and_payback() {
        let mut scenario = all_regular();
        scenario.base.initial_investment = 0.0;

        let summary = ProjectionEngine::default().summarize(&scenario).unwrap();
        assert_eq!(summary.roi_pct, 0.0);
        assert_eq!(summary.payback, Payback::Months(0.0));
    }

    #[test]
    fn test_loss_making_scenario_never_pays_back() {
        let mut scenario = Scenario::sample();
        scenario.base.monthly_rent = 500_000.0;

        let result = ProjectionEngine::default().project(&scenario).unwrap();
        assert!(result.summary.annual_net_profit < 0.0);
        assert!(result.summary.roi_pct < 0.0);
        assert_eq!(result.summary.payback, Payback::Never);
        assert!(result.long_term.windows(2).all(|w| w[1].cumulative_cash_flow < w[0].cumulative_cash_flow));
    }

    #[test]
    fn test_sensitivity_ignores_seasons() {
        let engine = ProjectionEngine::default();
        let mut scenario = Scenario::sample();
        let baseline = engine.project(&scenario).unwrap().sensitivity;

        scenario.seasons = SeasonProfiles {
            high: SeasonProfile::new(3.0, 50.0, 9.0),
            semi_high: SeasonProfile::new(2.0, 20.0, 5.0),
            low: SeasonProfile::new(0.1, -60.0, 1.0),
        };
        scenario.calendar = MonthlySeasonAssignment::uniform(Season::High);
        let changed = engine.project(&scenario).unwrap().sensitivity;

        assert_eq!(baseline, changed);
        assert_eq!(baseline.len(), 10);

        // 70% point matches the reference regular month
        let p70 = baseline.iter().find(|p| p.occupancy_pct == 70.0).unwrap();
        assert_relative_eq!(p70.profit, 108_050.0, epsilon = 1e-6);
        assert!(baseline.windows(2).all(|w| w[1].profit > w[0].profit));
    }

    #[test]
    fn test_sensitivity_at_zero_occupancy() {
        let config = ProjectionConfig {
            sensitivity: OccupancySweep {
                start_pct: 0.0,
                end_pct: 100.0,
                step_pct: 10.0,
            },
            ..ProjectionConfig::default()
        };
        let engine = ProjectionEngine::new(config);
        let base = BaseParameters::default();
        let curve = engine.sensitivity_curve(&base).unwrap();

        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].occupancy_pct, 0.0);
        assert_eq!(curve[0].revenue, 0.0);
        assert_relative_eq!(curve[0].profit, -(base.monthly_rent + base.monthly_utilities));

        // Profit is 3,615 per occupancy point less 145,000 fixed: negative at 40%
        let break_even = break_even_occupancy(&curve).unwrap();
        assert_eq!(break_even, 50.0);
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let engine = ProjectionEngine::default();
        let scenario = Scenario::sample();
        assert_eq!(engine.project(&scenario).unwrap(), engine.project(&scenario).unwrap());
    }
}
