//! Error types.

use thiserror::Error;

/// Error returned by a [`ProgressSink`](crate::anneal::ProgressSink).
///
/// Sinks are free to fail for any reason (I/O, a closed channel); the
/// engine does not inspect the error, it only stops and hands it back.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// An invalid [`SearchConfig`](crate::anneal::SearchConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board_size must be at least 2, got {0}")]
    BoardTooSmall(usize),

    #[error("{name} must be finite and positive, got {value}")]
    InvalidTemperature { name: &'static str, value: f64 },

    #[error("final_temperature ({final_t}) must be less than initial_temperature ({initial_t})")]
    TemperatureOrder { initial_t: f64, final_t: f64 },

    #[error("cooling_factor must be in (0, 1), got {0}")]
    CoolingFactor(f64),

    #[error("steps_per_temperature must be positive")]
    NoSteps,
}

/// An assignment that is not a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("assignment is empty")]
    Empty,

    #[error("row {row} in column {column} is out of range for a board of size {size}")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },

    #[error("row {row} is used by both column {first} and column {second}")]
    DuplicateRow {
        row: usize,
        first: usize,
        second: usize,
    },
}

/// Failure of an annealing run.
#[derive(Debug, Error)]
pub enum AnnealError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("progress sink failed at temperature step {step}")]
    Sink {
        step: usize,
        #[source]
        source: SinkError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::TemperatureOrder {
            initial_t: 1.0,
            final_t: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "final_temperature (2) must be less than initial_temperature (1)"
        );
    }

    #[test]
    fn test_anneal_error_keeps_sink_source() {
        let io = std::io::Error::other("disk full");
        let err = AnnealError::Sink {
            step: 3,
            source: Box::new(io),
        };
        assert!(err.to_string().contains("step 3"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".into()));
    }

    #[test]
    fn test_config_error_converts() {
        let err: AnnealError = ConfigError::NoSteps.into();
        assert!(matches!(err, AnnealError::Config(ConfigError::NoSteps)));
    }
}
