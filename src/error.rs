//! Error types for scenario loading and projection

use thiserror::Error;

use crate::params::Season;

/// Result type for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised by the projection engine and scenario loaders
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A parameter would make the monthly calculation non-finite
    #[error("invalid {field} for {season} season: {value}")]
    InvalidParameter {
        season: Season,
        field: &'static str,
        value: f64,
    },

    /// Seasonality calendar does not describe exactly 12 months
    #[error("invalid seasonality calendar: {0}")]
    InvalidCalendar(String),

    /// Season label could not be parsed
    #[error("unknown season label: {0:?}")]
    UnknownSeason(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_season() {
        let err = ProjectionError::InvalidParameter {
            season: Season::Low,
            field: "avg_stay_length_nights",
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Low"));
        assert!(msg.contains("avg_stay_length_nights"));
    }
}
