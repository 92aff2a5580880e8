//! Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for one annealing run.
///
/// Temperature falls geometrically, `T_{k+1} = cooling_factor * T_k`, from
/// `initial_temperature` until it is no longer above `final_temperature`.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_board_size(12)
///     .with_initial_temperature(50.0)
///     .with_final_temperature(0.05)
///     .with_cooling_factor(0.97)
///     .with_steps_per_temperature(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Board size `n` (queens and columns). At least 2.
    pub board_size: usize,

    /// Starting temperature. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// The run stops once the temperature is no longer above this.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Perturbations tried at each temperature level.
    pub steps_per_temperature: usize,

    /// Random seed for reproducibility. `None` draws one per run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            initial_temperature: 100.0,
            final_temperature: 0.1,
            cooling_factor: 0.98,
            steps_per_temperature: 100,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of temperature levels the schedule will visit.
    ///
    /// Only meaningful for a valid configuration.
    pub fn temperature_levels(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut levels = 0;
        while t > self.final_temperature {
            t *= self.cooling_factor;
            levels += 1;
        }
        levels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        for (name, value) in [
            ("initial_temperature", self.initial_temperature),
            ("final_temperature", self.final_temperature),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTemperature { name, value });
            }
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                initial_t: self.initial_temperature,
                final_t: self.final_temperature,
            });
        }
        // NaN fails both comparisons, so test for the valid range.
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ConfigError::CoolingFactor(self.cooling_factor));
        }
        if self.steps_per_temperature == 0 {
            return Err(ConfigError::NoSteps);
        }
        Ok(())
    }
}
