use log::info;
use nalgebra::{Matrix2, Vector2};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::math::{basis_dot, distance, rotation_2d};

/// A single integer coincidence between the two layer lattices.
///
/// `m` are the coefficients on the bottom basis, `n` on the rotated top
/// basis; the corresponding lattice points agree within the search
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coincidence {
    pub m: Vector2<i32>,
    pub n: Vector2<i32>,
}

/// Solve `|A·m − R(θ)·B·n| < tolerance` on the integer grid `[n_min, n_max]⁴`.
///
/// Tuples whose four indices are all equal are excluded, which also removes
/// the null tuple. The comparison is strict, and the observable order of the
/// returned list is unspecified: workers scan disjoint slabs of the grid and
/// their private buffers are merged at the end.
pub fn find_coincidences(
    a: &Matrix2<f64>,
    b: &Matrix2<f64>,
    theta: f64,
    n_min: i32,
    n_max: i32,
    tolerance: f64,
) -> Vec<Coincidence> {
    let rotated_b = rotation_2d(theta) * b;
    let combinations = (i64::from(n_max) - i64::from(n_min) + 1).pow(4);
    info!("Scanning {combinations} index combinations");

    let scan_slab = |i: i32| -> Vec<Coincidence> {
        let mut local = Vec::new();
        for j in n_min..=n_max {
            let m = Vector2::new(i, j);
            let am = basis_dot(a, &m);
            for k in n_min..=n_max {
                for l in n_min..=n_max {
                    if i == j && j == k && k == l {
                        continue;
                    }
                    let n = Vector2::new(k, l);
                    let rbn = basis_dot(&rotated_b, &n);
                    if distance(&am, &rbn) < tolerance {
                        local.push(Coincidence { m, n });
                    }
                }
            }
        }
        local
    };

    #[cfg(feature = "parallel")]
    let coincidences = (n_min..=n_max)
        .into_par_iter()
        .flat_map_iter(scan_slab)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let coincidences = (n_min..=n_max).flat_map(scan_slab).collect();

    coincidences
}
