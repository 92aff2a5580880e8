//! N-queens placement model.
//!
//! A placement puts one queen in every column of an `n x n` board and
//! encodes it as a permutation, so the annealer only has to remove
//! diagonal conflicts.

mod candidate;
mod energy;

pub use candidate::Candidate;
pub use energy::{DiagonalHistogram, DiagonalScan, EnergyFunction, PairwiseConflicts};
