// Coincidence module: angle-resolved superlattice search
// This module enumerates integer coincidences between two layer lattices and
// reduces them to primitive, orientation-preserving supercell pairs

// ======================== MODULE DECLARATIONS ========================
pub mod pair_reduction;
pub mod search;


// ======================== COINCIDENCE SEARCH ========================
pub use search::{
    find_coincidences, // fn(a, b, theta_rad, n_min, n_max, tolerance) -> Vec<Coincidence>
    Coincidence,       // struct - integer coefficients (m, n) with |A·m − R(θ)·B·n| < tolerance
};

// ======================== PRIMITIVE PAIR REDUCTION ========================
pub use pair_reduction::{
    reduce_to_independent_pairs, // fn(&[Coincidence]) -> Vec<SupercellPair>
    SupercellPair,               // struct - 2x2 integer supercell matrices (M, N), det > 0, coprime entries
};
