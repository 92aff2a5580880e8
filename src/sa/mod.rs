//! Simulated Annealing (SA) over permutation placements.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp(-delta / T)`, which shrinks as the temperature cools geometrically,
//! letting the search escape local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod sink;
mod types;

pub use config::SearchConfig;
pub use runner::{AnnealResult, AnnealingEngine};
pub use sink::{inspect, sink_fn, CsvSink, FnSink, NullSink, RecordingSink};
pub use types::{ProgressEvent, ProgressSink, SinkControl};
