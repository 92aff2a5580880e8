//! Diagonal conflict counting.
//!
//! Row and column conflicts cannot occur under the permutation encoding, so
//! the energy of a placement is the number of unordered queen pairs sharing a
//! diagonal: columns `i != j` attack each other when
//! `|assignment[i] - assignment[j]| == |i - j|`.
//!
//! Three interchangeable implementations are provided. They always agree;
//! they differ only in cost.

/// Computes the energy (cost) of an assignment. Lower is better.
///
/// Any `Fn(&[usize]) -> f64` closure is an energy function, which makes it
/// easy to plug in an alternative cost model.
pub trait EnergyFunction {
    /// Energy of the given assignment (`assignment[i]` = row in column `i`).
    fn energy(&self, assignment: &[usize]) -> f64;
}

impl<F> EnergyFunction for F
where
    F: Fn(&[usize]) -> f64,
{
    fn energy(&self, assignment: &[usize]) -> f64 {
        self(assignment)
    }
}

/// O(n²) scan over every unordered column pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseConflicts;

impl EnergyFunction for PairwiseConflicts {
    fn energy(&self, assignment: &[usize]) -> f64 {
        let mut conflicts = 0usize;
        for (i, &ri) in assignment.iter().enumerate() {
            for (offset, &rj) in assignment[i + 1..].iter().enumerate() {
                if ri.abs_diff(rj) == offset + 1 {
                    conflicts += 1;
                }
            }
        }
        conflicts as f64
    }
}

/// Walks the four diagonals out of every queen on a materialized board.
///
/// Each attacking pair is reached once from either end, so the number of
/// queens landed on is halved.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalScan;

const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl EnergyFunction for DiagonalScan {
    fn energy(&self, assignment: &[usize]) -> f64 {
        let n = assignment.len();
        let mut board = vec![false; n * n];
        for (x, &y) in assignment.iter().enumerate() {
            board[x * n + y] = true;
        }

        let size = n as isize;
        let mut hits = 0usize;
        for (x, &y) in assignment.iter().enumerate() {
            for &(dx, dy) in &DIRECTIONS {
                let (mut cx, mut cy) = (x as isize, y as isize);
                loop {
                    cx += dx;
                    cy += dy;
                    if cx < 0 || cx >= size || cy < 0 || cy >= size {
                        break;
                    }
                    if board[cx as usize * n + cy as usize] {
                        hits += 1;
                    }
                }
            }
        }
        (hits / 2) as f64
    }
}

/// O(n) occupancy count per diagonal; `k` queens on one line make
/// `k * (k - 1) / 2` conflicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalHistogram;

impl EnergyFunction for DiagonalHistogram {
    fn energy(&self, assignment: &[usize]) -> f64 {
        let n = assignment.len();
        if n == 0 {
            return 0.0;
        }
        let lines = 2 * n - 1;
        let mut diagonal = vec![0usize; lines];
        let mut anti = vec![0usize; lines];
        for (x, &y) in assignment.iter().enumerate() {
            diagonal[x + y] += 1;
            anti[x + n - 1 - y] += 1;
        }
        let conflicts: usize = diagonal
            .iter()
            .chain(anti.iter())
            .map(|&k| k * k.saturating_sub(1) / 2)
            .sum();
        conflicts as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_energies(assignment: &[usize]) -> [f64; 3] {
        [
            PairwiseConflicts.energy(assignment),
            DiagonalScan.energy(assignment),
            DiagonalHistogram.energy(assignment),
        ]
    }

    #[test]
    fn test_identity_4_has_six_conflicts() {
        // Every pair of the main diagonal attacks: C(4, 2) = 6.
        assert_eq!(all_energies(&[0, 1, 2, 3]), [6.0; 3]);
    }

    #[test]
    fn test_anti_diagonal() {
        assert_eq!(all_energies(&[4, 3, 2, 1, 0]), [10.0; 3]);
    }

    #[test]
    fn test_known_solutions_have_zero_energy() {
        assert_eq!(all_energies(&[1, 3, 0, 2]), [0.0; 3]);
        assert_eq!(all_energies(&[0, 4, 7, 5, 2, 6, 1, 3]), [0.0; 3]);
    }

    #[test]
    fn test_hand_counted_board() {
        // Attacking column pairs: (0,1), (0,2), (1,3), (2,3).
        assert_eq!(all_energies(&[1, 0, 3, 2]), [4.0; 3]);
    }

    #[test]
    fn test_small_boards() {
        assert_eq!(all_energies(&[0]), [0.0; 3]);
        assert_eq!(all_energies(&[1, 0]), [1.0; 3]);
        assert_eq!(all_energies(&[0, 2, 1]), [1.0; 3]);
    }

    #[test]
    fn test_closure_is_energy_function() {
        let displaced = |a: &[usize]| a.iter().enumerate().filter(|&(i, &r)| i != r).count() as f64;
        assert_eq!(displaced.energy(&[1, 0, 2]), 2.0);
    }

    fn permutation(max: usize) -> impl Strategy<Value = Vec<usize>> {
        (1..=max).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
    }

    proptest! {
        #[test]
        fn prop_implementations_agree(assignment in permutation(30)) {
            let [a, b, c] = all_energies(&assignment);
            prop_assert_eq!(a, b);
            prop_assert_eq!(a, c);
        }

        #[test]
        fn prop_mirror_invariant(assignment in permutation(30)) {
            // Reversing the columns or flipping the rows maps diagonals onto
            // anti-diagonals, so the pair count must not change.
            let n = assignment.len();
            let reversed: Vec<usize> = assignment.iter().rev().copied().collect();
            let flipped: Vec<usize> = assignment.iter().map(|&r| n - 1 - r).collect();
            let e = PairwiseConflicts.energy(&assignment);
            prop_assert_eq!(e, PairwiseConflicts.energy(&reversed));
            prop_assert_eq!(e, PairwiseConflicts.energy(&flipped));
        }

        #[test]
        fn prop_energy_bounded(assignment in permutation(30)) {
            let n = assignment.len();
            let e = PairwiseConflicts.energy(&assignment);
            prop_assert!(e >= 0.0);
            prop_assert!(e <= (n * n.saturating_sub(1) / 2) as f64);
        }
    }
}
