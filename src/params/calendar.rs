//! Twelve-month seasonality calendar

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::season::Season;
use crate::error::{ProjectionError, Result};

/// Months in the projection year
pub const MONTHS_PER_YEAR: usize = 12;

/// Season label for each calendar month, January first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeasonAssignment {
    months: [Season; MONTHS_PER_YEAR],
}

impl Default for MonthlySeasonAssignment {
    /// Sample calendar: quiet winter, peaks in May, August and December
    fn default() -> Self {
        use Season::*;
        Self {
            months: [
                Low, Low, Regular, SemiHigh, High, Regular, SemiHigh, High, SemiHigh, Regular, Regular, High,
            ],
        }
    }
}

impl MonthlySeasonAssignment {
    /// Same season for every month
    pub fn uniform(season: Season) -> Self {
        Self {
            months: [season; MONTHS_PER_YEAR],
        }
    }

    /// Build from a list that must contain exactly 12 entries
    pub fn from_slice(seasons: &[Season]) -> Result<Self> {
        let months: [Season; MONTHS_PER_YEAR] = seasons.try_into().map_err(|_| {
            ProjectionError::InvalidCalendar(format!(
                "expected {} months, got {}",
                MONTHS_PER_YEAR,
                seasons.len()
            ))
        })?;
        Ok(Self { months })
    }

    /// Season for a 1-indexed calendar month
    pub fn get(&self, month: u32) -> Option<Season> {
        let idx = (month as usize).checked_sub(1)?;
        self.months.get(idx).copied()
    }

    /// Advance a month one step through the season cycle, returning its new season
    pub fn toggle(&mut self, month: u32) -> Result<Season> {
        let slot = self.slot_mut(month)?;
        *slot = slot.next();
        Ok(*slot)
    }

    /// Iterate (month number, season) pairs, January = 1
    pub fn iter(&self) -> impl Iterator<Item = (u32, Season)> + '_ {
        self.months
            .iter()
            .enumerate()
            .map(|(idx, &season)| (idx as u32 + 1, season))
    }

    /// Number of months assigned to a season
    pub fn count(&self, season: Season) -> usize {
        self.months.iter().filter(|&&s| s == season).count()
    }

    fn slot_mut(&mut self, month: u32) -> Result<&mut Season> {
        (month as usize)
            .checked_sub(1)
            .and_then(|idx| self.months.get_mut(idx))
            .ok_or_else(|| ProjectionError::InvalidCalendar(format!("month {} is outside 1-12", month)))
    }
}

/// English name of a 1-indexed calendar month
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calendar() {
        let cal = MonthlySeasonAssignment::default();
        assert_eq!(cal.get(1), Some(Season::Low));
        assert_eq!(cal.get(5), Some(Season::High));
        assert_eq!(cal.get(12), Some(Season::High));
        assert_eq!(cal.get(0), None);
        assert_eq!(cal.get(13), None);

        assert_eq!(cal.count(Season::Low), 2);
        assert_eq!(cal.count(Season::Regular), 4);
        assert_eq!(cal.count(Season::SemiHigh), 3);
        assert_eq!(cal.count(Season::High), 3);
    }

    #[test]
    fn test_toggle_cycles_one_month() {
        let mut cal = MonthlySeasonAssignment::uniform(Season::Low);
        assert_eq!(cal.toggle(3).unwrap(), Season::Regular);
        assert_eq!(cal.toggle(3).unwrap(), Season::SemiHigh);
        assert_eq!(cal.toggle(3).unwrap(), Season::High);
        assert_eq!(cal.toggle(3).unwrap(), Season::Low);

        // Other months untouched
        assert_eq!(cal.count(Season::Low), 12);
        assert!(cal.toggle(0).is_err());
        assert!(cal.toggle(13).is_err());
    }

    #[test]
    fn test_from_slice_requires_twelve() {
        assert!(MonthlySeasonAssignment::from_slice(&[Season::High; 11]).is_err());
        assert!(MonthlySeasonAssignment::from_slice(&[Season::High; 13]).is_err());
        let cal = MonthlySeasonAssignment::from_slice(&[Season::High; 12]).unwrap();
        assert_eq!(cal.count(Season::Regular), 0);
        assert_eq!(cal.count(Season::High), 12);
    }

    #[test]
    fn test_json_rejects_short_calendar() {
        let short = r#"["Low","Low","Regular"]"#;
        assert!(serde_json::from_str::<MonthlySeasonAssignment>(short).is_err());

        let json = serde_json::to_string(&MonthlySeasonAssignment::default()).unwrap();
        assert!(json.starts_with(r#"["Low","Low","Regular","SemiHigh","High""#));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
