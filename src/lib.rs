//! Minpaku Projection - revenue and payback engine for short-term rental properties
//!
//! This library provides:
//! - Season resolution from a regular-season baseline and three seasonal profiles
//! - Monthly revenue and expense calculation over a 12-month seasonality calendar
//! - Annual totals, ROI, payback period and cost breakdown
//! - Occupancy sensitivity curve and straight-line multi-year cash flow
//! - Batch and what-if scenario runs

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::{BaseParameters, MonthlySeasonAssignment, Scenario, Season, SeasonProfile, SeasonProfiles};
pub use projection::{AnnualSummary, MonthlyResult, Payback, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
