//! Permutation-encoded queen placement.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::energy::EnergyFunction;
use crate::error::CandidateError;
use crate::random::RandomSource;

/// One queen per column; `assignment[i]` is the row of the queen in column `i`.
///
/// The assignment is always a permutation of `0..n`, so no two queens share a
/// row or a column and only diagonal conflicts remain to be scored.
///
/// The cached [`energy`](Self::energy) is only meaningful after
/// [`rescore`](Self::rescore) has been called following the last mutation.
/// A freshly built candidate carries `f64::INFINITY`.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    assignment: Vec<usize>,
    energy: f64,
}

impl Candidate {
    /// Creates the identity placement `[0, 1, ..., n-1]` (unscored).
    pub fn identity(n: usize) -> Self {
        Self {
            assignment: (0..n).collect(),
            energy: f64::INFINITY,
        }
    }

    /// Creates a random placement: the identity followed by `n` perturbations.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2` (a swap needs two distinct columns).
    pub fn random<R: Rng>(n: usize, rng: &mut RandomSource<R>) -> Self {
        let mut candidate = Self::identity(n);
        for _ in 0..n {
            candidate.perturb(rng);
        }
        candidate
    }

    /// Builds a candidate from an explicit assignment (unscored).
    pub fn from_assignment(assignment: Vec<usize>) -> Result<Self, CandidateError> {
        let size = assignment.len();
        if size == 0 {
            return Err(CandidateError::Empty);
        }
        let mut owner: Vec<Option<usize>> = vec![None; size];
        for (column, &row) in assignment.iter().enumerate() {
            if row >= size {
                return Err(CandidateError::RowOutOfRange { column, row, size });
            }
            if let Some(first) = owner[row] {
                return Err(CandidateError::DuplicateRow {
                    row,
                    first,
                    second: column,
                });
            }
            owner[row] = Some(column);
        }
        Ok(Self {
            assignment,
            energy: f64::INFINITY,
        })
    }

    /// Board size `n`.
    pub fn size(&self) -> usize {
        self.assignment.len()
    }

    /// Row of the queen in each column.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Cached energy from the last [`rescore`](Self::rescore).
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Swaps the rows of columns `x` and `y`.
    pub fn swap(&mut self, x: usize, y: usize) {
        self.assignment.swap(x, y);
    }

    /// Swaps the rows of two distinct, uniformly chosen columns.
    ///
    /// Returns the swapped columns. The cached energy is stale afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the board has fewer than two columns.
    pub fn perturb<R: Rng>(&mut self, rng: &mut RandomSource<R>) -> (usize, usize) {
        let n = self.size();
        let x = rng.next_below(n);
        let y = rng.next_excluding(n, &[x]);
        self.swap(x, y);
        (x, y)
    }

    /// Recomputes and caches the energy; returns it.
    pub fn rescore<E: EnergyFunction + ?Sized>(&mut self, energy: &E) -> f64 {
        self.energy = energy.energy(&self.assignment);
        self.energy
    }

    /// Whether the assignment is a permutation of `0..n`.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.size()];
        self.assignment.iter().all(|&row| {
            row < seen.len() && !std::mem::replace(&mut seen[row], true)
        })
    }
}

impl Clone for Candidate {
    fn clone(&self) -> Self {
        Self {
            assignment: self.assignment.clone(),
            energy: self.energy,
        }
    }

    // Reuses the buffer; the engine snapshots on every accept and reject.
    fn clone_from(&mut self, source: &Self) {
        self.assignment.clone_from(&source.assignment);
        self.energy = source.energy;
    }
}

/// Renders the board, rows top to bottom, `Q` for a queen and `.` otherwise.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for column in 0..n {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let cell = if self.assignment[column] == row { "Q" } else { "." };
                f.write_str(cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
