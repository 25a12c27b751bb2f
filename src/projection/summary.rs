//! Annual aggregation: totals, ROI, payback and cost breakdown

use std::fmt;

use serde::{Deserialize, Serialize};

use super::monthly::MonthlyResult;
use crate::params::MONTHS_PER_YEAR;

/// Payback months reported by the legacy calculator when profit never covers the investment
pub const PAYBACK_SENTINEL_MONTHS: f64 = 999.0;

/// Time needed for cumulative profit to repay the initial investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Payback {
    /// Repaid after this many months of average profit
    Months(f64),
    /// Annual profit is zero or negative
    Never,
}

impl Payback {
    pub fn from_annual(initial_investment: f64, annual_net_profit: f64) -> Self {
        if annual_net_profit > 0.0 {
            Payback::Months(initial_investment / annual_net_profit * MONTHS_PER_YEAR as f64)
        } else {
            Payback::Never
        }
    }

    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Never => None,
        }
    }

    pub fn years(&self) -> Option<f64> {
        self.months().map(|m| m / MONTHS_PER_YEAR as f64)
    }

    /// Months with `Never` mapped to the legacy 999 sentinel
    pub fn legacy_months(&self) -> f64 {
        self.months().unwrap_or(PAYBACK_SENTINEL_MONTHS)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }
}

/// Expense category for the annual breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Rent,
    Utilities,
    Cleaning,
    OtaFees,
    Management,
    Supplies,
}

impl CostCategory {
    pub const ALL: [CostCategory; 6] = [
        CostCategory::Rent,
        CostCategory::Utilities,
        CostCategory::Cleaning,
        CostCategory::OtaFees,
        CostCategory::Management,
        CostCategory::Supplies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Rent => "Rent",
            CostCategory::Utilities => "Utilities & telecom",
            CostCategory::Cleaning => "Cleaning cost",
            CostCategory::OtaFees => "OTA commission",
            CostCategory::Management => "Management fees",
            CostCategory::Supplies => "Supplies",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Annual total for one cost category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub category: CostCategory,
    pub amount: f64,
}

/// Annual costs by category, omitting categories with no spend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub items: Vec<CostItem>,
}

impl CostBreakdown {
    /// Sum each category over the monthly results
    pub fn from_months(months: &[MonthlyResult], monthly_rent: f64, monthly_utilities: f64) -> Self {
        let month_count = months.len() as f64;

        let items = CostCategory::ALL
            .iter()
            .map(|&category| {
                let amount = match category {
                    CostCategory::Rent => monthly_rent * month_count,
                    CostCategory::Utilities => monthly_utilities * month_count,
                    CostCategory::Cleaning => months.iter().map(|m| m.figures.cleaning_cost).sum(),
                    CostCategory::OtaFees => months.iter().map(|m| m.figures.ota_fee).sum(),
                    CostCategory::Management => months.iter().map(|m| m.figures.management_fee).sum(),
                    CostCategory::Supplies => months.iter().map(|m| m.figures.supplies_cost).sum(),
                };
                CostItem { category, amount }
            })
            .filter(|item| item.amount > 0.0)
            .collect();

        Self { items }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    pub fn get(&self, category: CostCategory) -> Option<f64> {
        self.items.iter().find(|i| i.category == category).map(|i| i.amount)
    }

    /// Category share of total breakdown spend, in percent
    pub fn share_pct(&self, category: CostCategory) -> Option<f64> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        self.get(category).map(|amount| amount / total * 100.0)
    }
}

/// Year-level results of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub total_revenue: f64,
    pub total_expense: f64,
    pub annual_net_profit: f64,
    pub monthly_net_profit_average: f64,
    pub roi_pct: f64,
    pub payback: Payback,
    pub cost_breakdown: CostBreakdown,
}

impl AnnualSummary {
    pub fn from_months(months: &[MonthlyResult], initial_investment: f64, monthly_rent: f64, monthly_utilities: f64) -> Self {
        let total_revenue: f64 = months.iter().map(|m| m.revenue()).sum();
        let total_expense: f64 = months.iter().map(|m| m.expense()).sum();
        let annual_net_profit = total_revenue - total_expense;

        let roi_pct = if initial_investment > 0.0 {
            annual_net_profit / initial_investment * 100.0
        } else {
            0.0
        };

        Self {
            total_revenue,
            total_expense,
            annual_net_profit,
            monthly_net_profit_average: annual_net_profit / MONTHS_PER_YEAR as f64,
            roi_pct,
            payback: Payback::from_annual(initial_investment, annual_net_profit),
            cost_breakdown: CostBreakdown::from_months(months, monthly_rent, monthly_utilities),
        }
    }
}
