//! Display formatting and CSV export of projection results
//!
//! All rounding happens here. Engine values stay unrounded.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::params::{month_name, Season};
use crate::projection::{
    first_positive_year, CostBreakdown, CostCategory, MonthlyResult, Payback, ProjectionResult, SensitivityPoint,
};

/// Whole-yen currency string with thousands separators, e.g. `¥1,296,600`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// Payback in years with one decimal, or "10+ years" past the display limit
pub fn payback_label(payback: &Payback, display_limit_months: f64) -> String {
    match payback.months() {
        Some(months) if months <= display_limit_months => format!("{:.1} years", months / 12.0),
        _ => format!("{:.0}+ years", display_limit_months / 12.0),
    }
}

/// Monthly result rounded for tables and CSV export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyDisplayRow {
    pub month: u32,
    pub month_name: &'static str,
    pub season: Season,
    pub revenue: i64,
    pub expense: i64,
    pub profit: i64,
    pub adr: i64,
    pub occupancy_pct: i64,
    pub stay_length_nights: String,
}

impl From<&MonthlyResult> for MonthlyDisplayRow {
    fn from(m: &MonthlyResult) -> Self {
        Self {
            month: m.month,
            month_name: month_name(m.month),
            season: m.season,
            revenue: m.revenue().round() as i64,
            expense: m.expense().round() as i64,
            profit: m.net_profit().round() as i64,
            adr: m.adr.round() as i64,
            occupancy_pct: m.occupancy_pct.round() as i64,
            stay_length_nights: format!("{:.1}", m.stay_length_nights),
        }
    }
}

/// Cost category with its share of total annual cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostShare {
    pub category: CostCategory,
    pub amount: f64,
    pub share_pct: f64,
}

/// Breakdown items with percentage shares, largest first
pub fn cost_shares(breakdown: &CostBreakdown) -> Vec<CostShare> {
    let mut shares: Vec<CostShare> = breakdown
        .items
        .iter()
        .filter_map(|item| {
            breakdown.share_pct(item.category).map(|share_pct| CostShare {
                category: item.category,
                amount: item.amount,
                share_pct,
            })
        })
        .collect();

    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares
}

/// Write rounded monthly rows as CSV
pub fn write_monthly_csv<W: Write>(writer: W, months: &[MonthlyResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for m in months {
        csv_writer.serialize(MonthlyDisplayRow::from(m))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the sensitivity curve as CSV, values unrounded
pub fn write_sensitivity_csv<W: Write>(writer: W, curve: &[SensitivityPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in curve {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Plain-text report of a projection
pub struct SummaryReport<'a> {
    pub result: &'a ProjectionResult,
    pub display_limit_months: f64,
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let s = &result.summary;

        writeln!(f, "Scenario: {}", result.scenario)?;
        writeln!(f, "{}", "=".repeat(72))?;
        writeln!(
            f,
            "{:>10} {:<9} {:>8} {:>5} {:>5} {:>12} {:>12} {:>12}",
            "Month", "Season", "ADR", "Occ%", "Stay", "Revenue", "Expense", "Profit"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        for m in &result.months {
            let row = MonthlyDisplayRow::from(m);
            writeln!(
                f,
                "{:>10} {:<9} {:>8} {:>5} {:>5} {:>12} {:>12} {:>12}",
                row.month_name,
                row.season.as_str(),
                row.adr,
                row.occupancy_pct,
                row.stay_length_nights,
                row.revenue,
                row.expense,
                row.profit
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Annual revenue:        {}", format_currency(s.total_revenue))?;
        writeln!(f, "Annual expense:        {}", format_currency(s.total_expense))?;
        writeln!(f, "Annual net profit:     {}", format_currency(s.annual_net_profit))?;
        writeln!(f, "Monthly average:       {}", format_currency(s.monthly_net_profit_average))?;
        writeln!(f, "ROI:                   {:.1}%", s.roi_pct)?;
        writeln!(f, "Payback:               {}", payback_label(&s.payback, self.display_limit_months))?;

        writeln!(f, "\nCost breakdown:")?;
        for share in cost_shares(&s.cost_breakdown) {
            writeln!(
                f,
                "  {:<22} {:>14} {:>6.1}%",
                share.category.label(),
                format_currency(share.amount),
                share.share_pct
            )?;
        }

        writeln!(f, "\nCumulative cash flow:")?;
        for point in &result.long_term {
            writeln!(f, "  Year {}: {:>14}", point.year, format_currency(point.cumulative_cash_flow))?;
        }
        if let Some(year) = first_positive_year(&result.long_term) {
            writeln!(f, "  Break-even within year {}", year)?;
        }

        Ok(())
    }
}

/// Render the plain-text report to a string
pub fn render_summary(result: &ProjectionResult, display_limit_months: f64) -> String {
    SummaryReport {
        result,
        display_limit_months,
    }
    .to_string()
}
