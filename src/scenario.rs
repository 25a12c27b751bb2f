//! Scenario runner for batch and what-if projections
//!
//! Wraps one engine configuration and runs many scenarios against it.
//! Projections share no state, so batches run in parallel with rayon.

use rayon::prelude::*;

use crate::error::Result;
use crate::params::{Scenario, MONTHS_PER_YEAR};
use crate::projection::{AnnualSummary, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Outcome of advancing one month's season by one step
#[derive(Debug, Clone)]
pub struct ToggleVariant {
    /// Calendar month that was toggled (1 = January)
    pub month: u32,
    pub scenario: Scenario,
    pub summary: AnnualSummary,
}

/// Runner holding a shared projection engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&[Scenario::sample(), other])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner with the default configuration (30-day months, 300/night supplies)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, scenario: &Scenario) -> Result<ProjectionResult> {
        self.engine.project(scenario)
    }

    /// Project several scenarios in parallel; results keep input order
    ///
    /// Fails with the first invalid scenario's error.
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Result<Vec<ProjectionResult>> {
        log::info!("Running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.engine.project(s)).collect()
    }

    /// Summaries for the scenario with each month advanced one season in turn
    pub fn toggle_variants(&self, scenario: &Scenario) -> Result<Vec<ToggleVariant>> {
        scenario.validate()?;

        (1..=MONTHS_PER_YEAR as u32)
            .into_par_iter()
            .map(|month| -> Result<ToggleVariant> {
                let mut variant = scenario.clone();
                let season = variant.calendar.toggle(month)?;
                variant.name = format!("{} ({} -> {})", scenario.name, month, season);
                let summary = self.engine.summarize(&variant)?;
                Ok(ToggleVariant {
                    month,
                    scenario: variant,
                    summary,
                })
            })
            .collect()
    }
}
