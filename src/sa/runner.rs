//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::types::{ProgressEvent, ProgressSink, SinkControl};
use crate::error::{AnnealError, ConfigError};
use crate::queens::{Candidate, EnergyFunction, PairwiseConflicts};
use crate::random::RandomSource;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Lowest-energy candidate ever accepted, or `None` if no move was
    /// accepted before the run ended.
    pub best: Option<Candidate>,

    /// Energy of `best`; `f64::INFINITY` when there is none.
    pub best_energy: f64,

    /// Temperature levels visited (one progress event each).
    pub temperature_levels: usize,

    /// Total perturbations evaluated.
    pub iterations: usize,

    /// Accepted moves, improving or not.
    pub accepted_moves: usize,

    /// Accepted moves that increased the energy.
    pub worse_accepted: usize,

    /// Temperature when the loop exited.
    pub final_temperature: f64,

    /// Whether a sink or the cancel flag ended the run before the schedule did.
    pub stopped_early: bool,

    /// Seed the random source was built from, if it was seeded by the engine.
    pub seed: Option<u64>,
}

impl AnnealResult {
    /// Whether any candidate was accepted.
    pub fn solution_found(&self) -> bool {
        self.best.is_some()
    }

    /// Whether the best candidate has zero energy.
    pub fn is_conflict_free(&self) -> bool {
        self.best_energy == 0.0
    }
}

/// Simulated annealing over permutation placements.
///
/// Each temperature level runs a fixed number of swap-perturb / rescore /
/// Metropolis-accept cycles, reports one [`ProgressEvent`], then cools
/// geometrically. The best candidate is tracked apart from the current one,
/// so uphill walks late in the schedule never lose it.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealingEngine, NullSink, SearchConfig};
///
/// let config = SearchConfig::default().with_board_size(8).with_seed(7);
/// let mut engine = AnnealingEngine::new(config).unwrap();
/// let result = engine.run(NullSink).unwrap();
/// let best = result.best.expect("at least one accepted move");
/// assert_eq!(best.size(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingEngine<E = PairwiseConflicts, R: Rng = StdRng> {
    config: SearchConfig,
    energy: E,
    rng: RandomSource<R>,
    seed: Option<u64>,
}

impl AnnealingEngine {
    /// Validates `config` and builds an engine scoring with
    /// [`PairwiseConflicts`].
    ///
    /// Without `config.seed` a fresh seed is drawn; it is logged and
    /// reported in [`AnnealResult::seed`] so the run can be replayed.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: RandomSource::seeded(seed),
            energy: PairwiseConflicts,
            seed: Some(seed),
            config,
        })
    }
}

impl<E: EnergyFunction, R: Rng> AnnealingEngine<E, R> {
    /// Replaces the energy function.
    pub fn with_energy<E2: EnergyFunction>(self, energy: E2) -> AnnealingEngine<E2, R> {
        AnnealingEngine {
            config: self.config,
            energy,
            rng: self.rng,
            seed: self.seed,
        }
    }

    /// Replaces the random source. The result no longer reports a seed.
    pub fn with_random<R2: Rng>(self, rng: RandomSource<R2>) -> AnnealingEngine<E, R2> {
        AnnealingEngine {
            config: self.config,
            energy: self.energy,
            rng,
            seed: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the full cooling schedule, reporting to `sink`.
    pub fn run<S: ProgressSink>(&mut self, sink: S) -> Result<AnnealResult, AnnealError> {
        self.run_with_cancel(sink, None)
    }

    /// Runs with an optional cancellation flag, checked between temperature
    /// levels.
    pub fn run_with_cancel<S: ProgressSink>(
        &mut self,
        mut sink: S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, AnnealError> {
        let config = &self.config;
        let n = config.board_size;

        let mut current = Candidate::random(n, &mut self.rng);
        current.rescore(&self.energy);
        let mut working = current.clone();
        let mut best: Option<Candidate> = None;
        let mut best_energy = f64::INFINITY;

        let mut temperature = config.initial_temperature;
        let mut step = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut worse_total = 0usize;
        let mut stopped_early = false;

        info!(
            board_size = n,
            seed = ?self.seed,
            initial_energy = current.energy(),
            levels = config.temperature_levels(),
            "annealing started"
        );

        while temperature > config.final_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!(step, temperature, "annealing cancelled");
                    stopped_early = true;
                    break;
                }
            }

            // Reset every level: the reported percentage is per level.
            let mut worse_accepted = 0usize;

            for _ in 0..config.steps_per_temperature {
                working.perturb(&mut self.rng);
                working.rescore(&self.energy);
                iterations += 1;

                // Metropolis acceptance; ties count as improvements.
                let accept = if working.energy() <= current.energy() {
                    true
                } else {
                    let delta = working.energy() - current.energy();
                    let test = self.rng.next_unit();
                    let probability = (-delta / temperature).exp();
                    if probability > test {
                        worse_accepted += 1;
                        true
                    } else {
                        false
                    }
                };

                if accept {
                    accepted_moves += 1;
                    current.clone_from(&working);
                    if current.energy() < best_energy {
                        best_energy = current.energy();
                        best = Some(current.clone());
                    }
                } else {
                    working.clone_from(&current);
                }
            }
            worse_total += worse_accepted;

            let event = ProgressEvent {
                step_index: step,
                temperature,
                best_energy,
                current_energy: current.energy(),
                worse_accepted_percent: 100.0 * worse_accepted as f64
                    / config.steps_per_temperature as f64,
            };
            debug!(
                step,
                temperature,
                best_energy,
                worse_accepted_percent = event.worse_accepted_percent,
                "temperature level done"
            );
            let control = sink
                .on_progress(&event)
                .map_err(|source| AnnealError::Sink { step, source })?;

            step += 1;
            temperature *= config.cooling_factor;

            if control == SinkControl::Stop {
                warn!(step, temperature, best_energy, "annealing stopped by progress sink");
                stopped_early = true;
                break;
            }
        }

        if best.is_some() {
            info!(
                best_energy,
                levels = step,
                iterations,
                accepted_moves,
                "annealing finished"
            );
        } else {
            warn!(levels = step, iterations, "annealing finished without accepting a candidate");
        }

        Ok(AnnealResult {
            best,
            best_energy,
            temperature_levels: step,
            iterations,
            accepted_moves,
            worse_accepted: worse_total,
            final_temperature: temperature,
            stopped_early,
            seed: self.seed,
        })
    }
}
