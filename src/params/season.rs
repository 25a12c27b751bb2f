//! Season labels, seasonal profiles and the season resolver

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::base::BaseParameters;
use crate::error::ProjectionError;

/// Demand season assigned to a calendar month
///
/// Deserializes through `FromStr`, so JSON and CSV inputs accept the same labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Season {
    Low,
    Regular,
    SemiHigh,
    High,
}

impl Season {
    /// All seasons in toggle order
    pub const ALL: [Season; 4] = [Season::Low, Season::Regular, Season::SemiHigh, Season::High];

    /// Next season in the toggle cycle: Low -> Regular -> SemiHigh -> High -> Low
    pub fn next(self) -> Self {
        match self {
            Season::Low => Season::Regular,
            Season::Regular => Season::SemiHigh,
            Season::SemiHigh => Season::High,
            Season::High => Season::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Low => "Low",
            Season::Regular => "Regular",
            Season::SemiHigh => "SemiHigh",
            Season::High => "High",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ProjectionError;

    /// Accepts the variant name in any case, with or without `-`/`_`/space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "low" => Ok(Season::Low),
            "regular" => Ok(Season::Regular),
            "semihigh" => Ok(Season::SemiHigh),
            "high" => Ok(Season::High),
            _ => Err(ProjectionError::UnknownSeason(s.to_string())),
        }
    }
}

impl TryFrom<String> for Season {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Adjustments applied to the regular-season baseline for one season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonProfile {
    /// Multiplier on the regular ADR
    pub adr_multiplier: f64,

    /// Percentage points added to regular occupancy (may be negative)
    pub occupancy_adjustment_pct: f64,

    /// Average stay length in nights; replaces the regular value
    pub avg_stay_length_nights: f64,
}

impl SeasonProfile {
    pub fn new(adr_multiplier: f64, occupancy_adjustment_pct: f64, avg_stay_length_nights: f64) -> Self {
        Self {
            adr_multiplier,
            occupancy_adjustment_pct,
            avg_stay_length_nights,
        }
    }

    /// Reject multipliers and stay lengths that are not positive, and non-finite adjustments
    pub fn validate(&self, season: Season) -> Result<(), ProjectionError> {
        check_positive(season, "adr_multiplier", self.adr_multiplier)?;
        check_finite(season, "occupancy_adjustment_pct", self.occupancy_adjustment_pct)?;
        check_stay_length(season, self.avg_stay_length_nights)
    }
}

/// Profiles for the three non-regular seasons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonProfiles {
    pub high: SeasonProfile,
    pub semi_high: SeasonProfile,
    pub low: SeasonProfile,
}

impl Default for SeasonProfiles {
    fn default() -> Self {
        Self {
            high: SeasonProfile::new(1.30, 15.0, 3.0),
            semi_high: SeasonProfile::new(1.15, 5.0, 2.5),
            low: SeasonProfile::new(0.80, -15.0, 2.0),
        }
    }
}

impl SeasonProfiles {
    /// Profile for a season; `None` for Regular, which uses the base parameters
    pub fn get(&self, season: Season) -> Option<&SeasonProfile> {
        match season {
            Season::High => Some(&self.high),
            Season::SemiHigh => Some(&self.semi_high),
            Season::Low => Some(&self.low),
            Season::Regular => None,
        }
    }
}

/// Nightly rate, occupancy and stay length in effect for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSeason {
    pub season: Season,
    pub adr: f64,
    pub occupancy_pct: f64,
    pub stay_length_nights: f64,
}

fn check(ok: bool, season: Season, field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::InvalidParameter { season, field, value })
    }
}

pub fn check_finite(season: Season, field: &'static str, value: f64) -> Result<(), ProjectionError> {
    check(true, season, field, value)
}

/// Currency amounts: finite and >= 0
pub fn check_non_negative(season: Season, field: &'static str, value: f64) -> Result<(), ProjectionError> {
    check(value >= 0.0, season, field, value)
}

/// Rates and multipliers: finite and > 0
pub fn check_positive(season: Season, field: &'static str, value: f64) -> Result<(), ProjectionError> {
    check(value > 0.0, season, field, value)
}

/// Percentages on the 0-100 scale
pub fn check_percentage(season: Season, field: &'static str, value: f64) -> Result<(), ProjectionError> {
    check((0.0..=100.0).contains(&value), season, field, value)
}

/// Reject stay lengths that would divide by zero or produce non-finite results
pub fn check_stay_length(season: Season, nights: f64) -> Result<(), ProjectionError> {
    check_positive(season, "avg_stay_length_nights", nights)
}

/// Clamp an occupancy percentage into [0, 100]
pub fn clamp_occupancy(pct: f64) -> f64 {
    pct.clamp(0.0, 100.0)
}

/// Resolve the operating figures for a season
///
/// Regular returns the base values untouched. Other seasons scale the ADR,
/// shift occupancy (clamped to [0, 100]) and take the profile's stay length.
pub fn resolve_season(season: Season, base: &BaseParameters, profiles: &SeasonProfiles) -> ResolvedSeason {
    match profiles.get(season) {
        None => ResolvedSeason {
            season,
            adr: base.regular_adr,
            occupancy_pct: base.regular_occupancy_pct,
            stay_length_nights: base.regular_avg_stay_length_nights,
        },
        Some(profile) => {
            let raw_occupancy = base.regular_occupancy_pct + profile.occupancy_adjustment_pct;
            let occupancy_pct = clamp_occupancy(raw_occupancy);
            if occupancy_pct != raw_occupancy {
                log::warn!(
                    "{} season occupancy {:.1}% clamped to {:.1}%",
                    season,
                    raw_occupancy,
                    occupancy_pct
                );
            }

            ResolvedSeason {
                season,
                adr: base.regular_adr * profile.adr_multiplier,
                occupancy_pct,
                stay_length_nights: profile.avg_stay_length_nights,
            }
        }
    }
}
