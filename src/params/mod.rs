//! Scenario inputs: base economics, seasonal profiles and the monthly calendar

mod base;
mod season;
mod calendar;
pub mod loader;

pub use base::BaseParameters;
pub use season::{check_stay_length, clamp_occupancy, resolve_season, ResolvedSeason, Season, SeasonProfile, SeasonProfiles};
pub use calendar::{month_name, MonthlySeasonAssignment, MONTHS_PER_YEAR};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete input set for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Label used in reports and batch comparisons
    pub name: String,
    pub base: BaseParameters,
    pub seasons: SeasonProfiles,
    pub calendar: MonthlySeasonAssignment,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::sample()
    }
}

impl Scenario {
    /// Sample property: 3M investment, 15,000/night, 70% regular occupancy
    pub fn sample() -> Self {
        Self {
            name: "sample".to_string(),
            base: BaseParameters::default(),
            seasons: SeasonProfiles::default(),
            calendar: MonthlySeasonAssignment::default(),
        }
    }

    /// Load a scenario from a JSON file; missing fields take sample values
    pub fn from_json_path(path: &Path) -> Result<Self> {
        loader::load_scenario(path)
    }

    /// Resolved figures for one season of this scenario
    pub fn resolve(&self, season: Season) -> ResolvedSeason {
        resolve_season(season, &self.base, &self.seasons)
    }

    /// Reject inputs outside their domain before any month is computed
    ///
    /// Every season is checked, not only those on the calendar, so that a
    /// later toggle cannot turn a valid scenario into an invalid one.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        for season in [Season::High, Season::SemiHigh, Season::Low] {
            if let Some(profile) = self.seasons.get(season) {
                profile.validate(season)?;
            }
        }
        Ok(())
    }
}
