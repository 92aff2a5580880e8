//! Simulated annealing over permutation placements.
//!
//! The crate is built around a single-solution annealer:
//!
//! - **Random source** ([`random`]): explicitly owned, seedable uniform
//!   draws, so every run can be replayed.
//! - **Placement model** ([`queens`]): one queen per column encoded as a
//!   permutation, a swap perturbation, and pluggable diagonal-conflict
//!   energy functions.
//! - **Annealing engine** ([`sa`]): geometric cooling, Metropolis
//!   acceptance, best-so-far tracking, and one progress event per
//!   temperature level delivered to a [`ProgressSink`](sa::ProgressSink).
//!
//! # Example
//!
//! ```
//! use u_anneal::sa::{AnnealingEngine, RecordingSink, SearchConfig};
//!
//! let config = SearchConfig::default().with_board_size(8).with_seed(42);
//! let mut sink = RecordingSink::new();
//! let result = AnnealingEngine::new(config)?.run(&mut sink)?;
//!
//! assert_eq!(sink.events.len(), result.temperature_levels);
//! if let Some(best) = &result.best {
//!     println!("{best}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod queens;
pub mod random;
pub mod sa;
