//! File-based scenario loader
//!
//! Scenarios are JSON documents (see `data/scenario.json`). A seasonality
//! calendar can also be kept separately as a `month,season` CSV.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{MonthlySeasonAssignment, Scenario, Season, MONTHS_PER_YEAR};
use crate::error::{ProjectionError, Result};

/// Default path to sample input files
pub const DEFAULT_DATA_PATH: &str = "data";

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let file = File::open(path)?;
    load_scenario_from_reader(BufReader::new(file))
}

/// Load a scenario from any JSON reader
///
/// The scenario is validated before it is returned, so out-of-range inputs
/// fail at load time rather than at projection time.
pub fn load_scenario_from_reader<R: Read>(reader: R) -> Result<Scenario> {
    let scenario: Scenario = serde_json::from_reader(reader)?;
    scenario.validate()?;
    log::debug!("Loaded scenario {:?}", scenario.name);
    Ok(scenario)
}

/// Raw CSV row of a seasonality calendar
#[derive(Debug, serde::Deserialize)]
struct CalendarRow {
    month: u32,
    season: String,
}

/// Load a seasonality calendar from a `month,season` CSV file
pub fn load_calendar(path: &Path) -> Result<MonthlySeasonAssignment> {
    let file = File::open(path)?;
    load_calendar_from_reader(file)
}

/// Load a seasonality calendar from any CSV reader
///
/// Every month 1-12 must appear exactly once; rows may come in any order.
pub fn load_calendar_from_reader<R: Read>(reader: R) -> Result<MonthlySeasonAssignment> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut months: [Option<Season>; MONTHS_PER_YEAR] = [None; MONTHS_PER_YEAR];

    for result in csv_reader.deserialize() {
        let row: CalendarRow = result?;
        let season: Season = row.season.trim().parse()?;

        let slot = (row.month as usize)
            .checked_sub(1)
            .and_then(|idx| months.get_mut(idx))
            .ok_or_else(|| ProjectionError::InvalidCalendar(format!("month {} is outside 1-12", row.month)))?;

        if slot.is_some() {
            return Err(ProjectionError::InvalidCalendar(format!("month {} listed twice", row.month)));
        }
        *slot = Some(season);
    }

    let mut seasons = Vec::with_capacity(MONTHS_PER_YEAR);
    for (idx, month) in months.iter().enumerate() {
        match month {
            Some(season) => seasons.push(*season),
            None => {
                return Err(ProjectionError::InvalidCalendar(format!("month {} is missing", idx + 1)));
            }
        }
    }

    MonthlySeasonAssignment::from_slice(&seasons)
}

/// Load the sample scenario from `data/scenario.json`
pub fn load_default_scenario() -> Result<Scenario> {
    load_scenario(&Path::new(DEFAULT_DATA_PATH).join("scenario.json"))
}
