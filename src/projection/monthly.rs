//! Single-month revenue and expense calculation

use serde::{Deserialize, Serialize};

use super::engine::ProjectionConfig;
use crate::params::{BaseParameters, ResolvedSeason, Season};

/// Revenue and expense figures for one month of operation
///
/// Values are unrounded; rounding belongs to display code only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthFigures {
    pub booked_days: f64,
    pub number_of_stays: f64,

    // Revenue
    pub accommodation_revenue: f64,
    pub cleaning_revenue: f64,
    pub total_revenue: f64,

    // Expenses
    pub ota_fee: f64,
    pub management_fee: f64,
    pub cleaning_cost: f64,
    pub supplies_cost: f64,
    pub fixed_costs: f64,
    pub total_expense: f64,

    pub net_profit: f64,
}

/// Compute one month's figures from resolved seasonal operating values
///
/// The stay length must be positive; callers validate the scenario first.
pub fn calculate_month(resolved: &ResolvedSeason, base: &BaseParameters, config: &ProjectionConfig) -> MonthFigures {
    let booked_days = config.days_per_month * resolved.occupancy_pct / 100.0;
    let number_of_stays = booked_days / resolved.stay_length_nights;

    let accommodation_revenue = resolved.adr * booked_days;
    let cleaning_revenue = base.cleaning_fee_revenue_per_stay * number_of_stays;
    let total_revenue = accommodation_revenue + cleaning_revenue;

    // Commission is charged on accommodation only, not on cleaning fees
    let ota_fee = accommodation_revenue * base.ota_commission_rate_pct / 100.0;
    let variable_management_fee = (total_revenue - ota_fee) * base.management_fee_rate_pct / 100.0;
    let management_fee = variable_management_fee + base.management_fixed_fee_per_month;

    let cleaning_cost = base.cleaning_cost_per_stay * number_of_stays;
    let supplies_cost = config.supplies_cost_per_booked_day * booked_days;
    let fixed_costs = base.fixed_costs();

    let total_expense = fixed_costs + ota_fee + management_fee + cleaning_cost + supplies_cost;

    MonthFigures {
        booked_days,
        number_of_stays,
        accommodation_revenue,
        cleaning_revenue,
        total_revenue,
        ota_fee,
        management_fee,
        cleaning_cost,
        supplies_cost,
        fixed_costs,
        total_expense,
        net_profit: total_revenue - total_expense,
    }
}

/// Projection output for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// Calendar month (1 = January)
    pub month: u32,
    pub season: Season,

    // Resolved operating values
    pub adr: f64,
    pub occupancy_pct: f64,
    pub stay_length_nights: f64,

    #[serde(flatten)]
    pub figures: MonthFigures,
}

impl MonthlyResult {
    pub fn new(month: u32, resolved: &ResolvedSeason, figures: MonthFigures) -> Self {
        Self {
            month,
            season: resolved.season,
            adr: resolved.adr,
            occupancy_pct: resolved.occupancy_pct,
            stay_length_nights: resolved.stay_length_nights,
            figures,
        }
    }

    pub fn revenue(&self) -> f64 {
        self.figures.total_revenue
    }

    pub fn expense(&self) -> f64 {
        self.figures.total_expense
    }

    pub fn net_profit(&self) -> f64 {
        self.figures.net_profit
    }
}
