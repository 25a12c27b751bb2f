//! Regular-season baseline and fixed operating costs

use serde::{Deserialize, Serialize};

use super::season::{check_non_negative, check_percentage, check_positive, check_stay_length, Season};
use crate::error::Result;

/// Property economics for a regular-season month
///
/// Percentages are expressed on a 0-100 scale; currency amounts are whole
/// units of the operating currency (yen in the sample data).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseParameters {
    /// Up-front furnishing and setup cost
    pub initial_investment: f64,

    /// Monthly rent, incurred every month
    pub monthly_rent: f64,

    /// Utilities and telecom, incurred every month
    pub monthly_utilities: f64,

    /// Average daily rate in regular season
    pub regular_adr: f64,

    /// Occupancy in regular season (0-100)
    pub regular_occupancy_pct: f64,

    /// Average stay length in regular season (nights)
    pub regular_avg_stay_length_nights: f64,

    /// Cleaning fee charged to the guest per stay
    pub cleaning_fee_revenue_per_stay: f64,

    /// Cleaning cost paid per stay
    pub cleaning_cost_per_stay: f64,

    /// OTA commission on accommodation revenue (0-100)
    pub ota_commission_rate_pct: f64,

    /// Fixed monthly management fee
    pub management_fixed_fee_per_month: f64,

    /// Management fee on revenue net of OTA commission (0-100)
    pub management_fee_rate_pct: f64,
}

impl Default for BaseParameters {
    fn default() -> Self {
        Self {
            initial_investment: 3_000_000.0,
            monthly_rent: 120_000.0,
            monthly_utilities: 25_000.0,
            regular_adr: 15_000.0,
            regular_occupancy_pct: 70.0,
            regular_avg_stay_length_nights: 2.5,
            cleaning_fee_revenue_per_stay: 5_000.0,
            cleaning_cost_per_stay: 6_000.0,
            ota_commission_rate_pct: 15.0,
            management_fixed_fee_per_month: 0.0,
            management_fee_rate_pct: 0.0,
        }
    }
}

impl BaseParameters {
    /// Rent plus utilities
    pub fn fixed_costs(&self) -> f64 {
        self.monthly_rent + self.monthly_utilities
    }

    /// Check every field against its domain; errors are attributed to the Regular season
    ///
    /// Currency amounts must be >= 0, the ADR and stay length > 0 and
    /// percentages within 0-100. All values must be finite.
    pub fn validate(&self) -> Result<()> {
        let season = Season::Regular;
        check_non_negative(season, "initial_investment", self.initial_investment)?;
        check_non_negative(season, "monthly_rent", self.monthly_rent)?;
        check_non_negative(season, "monthly_utilities", self.monthly_utilities)?;
        check_positive(season, "regular_adr", self.regular_adr)?;
        check_percentage(season, "regular_occupancy_pct", self.regular_occupancy_pct)?;
        check_stay_length(season, self.regular_avg_stay_length_nights)?;
        check_non_negative(season, "cleaning_fee_revenue_per_stay", self.cleaning_fee_revenue_per_stay)?;
        check_non_negative(season, "cleaning_cost_per_stay", self.cleaning_cost_per_stay)?;
        check_percentage(season, "ota_commission_rate_pct", self.ota_commission_rate_pct)?;
        check_non_negative(season, "management_fixed_fee_per_month", self.management_fixed_fee_per_month)?;
        check_percentage(season, "management_fee_rate_pct", self.management_fee_rate_pct)?;
        Ok(())
    }
}
