use nalgebra::{Matrix2, Matrix3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coincidence::search::Coincidence;
use crate::math::{det2, gcd_of_list};

/// An orientation-preserving, primitive pair of integer supercell matrices.
///
/// Both determinants are strictly positive and the eight entries are
/// coprime: pairs with a common factor describe scalar multiples of a
/// smaller coincidence cell and are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupercellPair {
    pub m: Matrix2<i32>,
    pub n: Matrix2<i32>,
}

impl SupercellPair {
    /// Combine two coincidences into row-stacked supercell matrices.
    ///
    /// Returns `None` unless both determinants are positive and the entries
    /// are coprime.
    pub fn from_coincidences(first: &Coincidence, second: &Coincidence) -> Option<Self> {
        let m = Matrix2::new(first.m.x, first.m.y, second.m.x, second.m.y);
        let n = Matrix2::new(first.n.x, first.n.y, second.n.x, second.n.y);
        if det2(&m) <= 0 || det2(&n) <= 0 {
            return None;
        }

        let entries = [
            m[(0, 0)],
            m[(0, 1)],
            m[(1, 0)],
            m[(1, 1)],
            n[(0, 0)],
            n[(0, 1)],
            n[(1, 0)],
            n[(1, 1)],
        ]
        .map(i64::from);
        if gcd_of_list(&entries) != 1 {
            return None;
        }

        Some(SupercellPair { m, n })
    }

    /// Lift the 2×2 blocks into 3×3 supercell matrices acting on a layer
    /// cell, with a trailing 1 on the out-of-plane axis.
    pub fn lifted(&self) -> (Matrix3<i32>, Matrix3<i32>) {
        (lift(&self.m), lift(&self.n))
    }
}

fn lift(m: &Matrix2<i32>) -> Matrix3<i32> {
    Matrix3::new(
        m[(0, 0)],
        m[(0, 1)],
        0,
        m[(1, 0)],
        m[(1, 1)],
        0,
        0,
        0,
        1,
    )
}

/// Reduce the coincidences of one angle to primitive supercell pairs.
///
/// Every unordered pair of distinct coincidences contributes at most one
/// supercell pair: row order within the matrices flips the sign of both
/// determinants, so exactly one orientation can pass the positivity filter.
/// Trying both orientations keeps the result independent of the search
/// order.
pub fn reduce_to_independent_pairs(coincidences: &[Coincidence]) -> Vec<SupercellPair> {
    let combine = |i: usize| -> Vec<SupercellPair> {
        let first = &coincidences[i];
        coincidences[i + 1..]
            .iter()
            .filter_map(|second| {
                SupercellPair::from_coincidences(first, second)
                    .or_else(|| SupercellPair::from_coincidences(second, first))
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let pairs = (0..coincidences.len())
        .into_par_iter()
        .flat_map_iter(combine)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let pairs = (0..coincidences.len()).flat_map(combine).collect();

    pairs
}
