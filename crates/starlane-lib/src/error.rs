use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Starlane library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location is constructed from invalid values.
    #[error("invalid location: {message}")]
    InvalidLocation { message: String },

    /// Raised when a connection is constructed from invalid values.
    #[error("invalid connection: {message}")]
    InvalidConnection { message: String },

    /// Raised when a vehicle is constructed from invalid values.
    #[error("invalid vehicle: {message}")]
    InvalidVehicle { message: String },

    /// Raised when a fuel cost is requested for a negative distance.
    #[error("cannot calculate fuel for a negative distance: {distance}")]
    NegativeDistance { distance: f64 },

    /// Raised when a location name could not be found in the graph.
    #[error("unknown system name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a vehicle name or index could not be found in the catalog.
    #[error("unknown ship: {name}{}", format_suggestions(.suggestions))]
    UnknownVehicle {
        name: String,
        suggestions: Vec<String>,
    },

    /// Dataset file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV framing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_lists_single_suggestion() {
        let err = Error::UnknownLocation {
            name: "Sool".to_string(),
            suggestions: vec!["Sol".to_string()],
        };
        assert_eq!(err.to_string(), "unknown system name: Sool. Did you mean 'Sol'?");
    }

    #[test]
    fn unknown_vehicle_without_suggestions_is_bare() {
        let err = Error::UnknownVehicle {
            name: "Nothing".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown ship: Nothing");
    }
}
