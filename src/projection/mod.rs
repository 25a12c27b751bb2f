//! Projection engine for monthly, annual and multi-year rental economics

mod engine;
mod monthly;
mod summary;
mod sensitivity;
mod cashflow;

pub use engine::{
    ProjectionConfig, ProjectionEngine, ProjectionResult, DAYS_PER_MONTH, DEFAULT_PROJECTION_YEARS,
    PAYBACK_DISPLAY_LIMIT_MONTHS, SUPPLIES_COST_PER_BOOKED_DAY,
};
pub use monthly::{calculate_month, MonthFigures, MonthlyResult};
pub use summary::{AnnualSummary, CostBreakdown, CostCategory, CostItem, Payback, PAYBACK_SENTINEL_MONTHS};
pub use sensitivity::{break_even_occupancy, OccupancySweep, SensitivityPoint};
pub use cashflow::{first_positive_year, project_cumulative, CashflowPoint};
