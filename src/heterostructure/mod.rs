// Heterostructure module: interface construction, deduplication and sweeps
// This module drives the coincidence search across angles and turns the
// accepted supercell pairs into standardized, deduplicated interfaces

// ======================== MODULE DECLARATIONS ========================
pub mod builder;
pub mod dedup;
pub mod interface;
pub mod sweep;


// ======================== INTERFACE RECORD ========================
pub use interface::Interface; // struct - bottom/top supercells, stacked atoms, angle, M, N, space group

// Interface impl methods:
//   bottom(&self) / top(&self) / stack(&self) -> &Atoms    - the three atom collections
//   angle(&self) -> f64                                    - rotation angle in degrees
//   supercell_matrices(&self) -> (&Matrix3<i32>, &Matrix3<i32>)
//   space_group(&self) -> i32                              - international space-group number
//   area(&self) -> f64                                     - in-plane area of the stacked cell (Å²)
//   atom_count(&self) -> usize                             - atoms in the stacked cell
//   stress(&self) -> f64                                   - relative in-plane supercell mismatch

// ======================== SEARCH ORCHESTRATION ========================
pub use builder::InterfaceBuilder; // struct - builder over all search parameters, run() -> Result<Vec<Interface>>

// InterfaceBuilder impl methods:
//   new(bottom: Atoms, top: Atoms) -> Self                 - builder with default parameters
//   with_index_range(self, n_min, n_max) -> Self           - integer search window
//   with_angles(self, angles: Vec<f64>) -> Self            - explicit angles in degrees (overrides the sweep)
//   with_angle_sweep(self, limits, stepsize) -> Self       - inclusive sweep in degrees
//   with_tolerance(self, tolerance) -> Self                - coincidence tolerance (Å)
//   with_weight(self, weight) -> Self                      - cell blend weight in [0, 1]
//   with_distance(self, distance) -> Self                  - interlayer distance (Å)
//   with_no_idealize(self, flag) -> Self                   - keep stacked atoms unidealized
//   with_symprec(self, symprec) -> Self                    - symmetry search precision
//   with_angle_tolerance(self, degrees) -> Self            - symmetry angle tolerance
//   run(self) -> Result<Vec<Interface>>                    - execute the full pipeline

// ======================== DEDUPLICATION & SWEEPS ========================
pub use dedup::filter_unique_interfaces; // fn(Vec<Interface>) -> Vec<Interface> - one representative per class
pub use sweep::{
    find_lowest_stress_interface, // fn(&InterfaceBuilder, &SweepWindows) -> Result<Option<Interface>>
    SweepWindows,                 // struct - tolerance and index windows of the lowest-stress sweep
};
