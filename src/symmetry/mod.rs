// Symmetry module: space-group standardization of stacked interfaces
// The symmetry engine itself is external (moyo); this module is the thin
// boundary between the Atoms model and that engine

// ======================== MODULE DECLARATIONS ========================
pub mod standardize;


// ======================== STANDARDIZATION ========================
pub use standardize::standardize_atoms; // fn(&mut Atoms, to_primitive, no_idealize, symprec, angle_tolerance_deg) -> i32
