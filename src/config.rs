// Constants

// Tolerances
pub const BASIS_SINGULAR_TOLERANCE: f64 = 1e-10; // Smallest acceptable in-plane basis determinant
pub const FRACTIONAL_BOUNDARY_EPSILON: f64 = 1e-6; // Half-open window for cell membership in supercell filling
pub const AREA_EPSILON: f64 = 1e-4; // Quantization step for interface areas (Å²)
pub const ANGLE_SWEEP_EPSILON: f64 = 1e-9; // Slack on the inclusive upper bound of angle sweeps (°)

// Search defaults, mirrored by the command-line layer
pub const DEFAULT_N_MAX: i32 = 10;
pub const DEFAULT_N_MIN: i32 = 0;
pub const DEFAULT_ANGLE_LIMITS: (f64, f64) = (0.0, 90.0);
pub const DEFAULT_ANGLE_STEPSIZE: f64 = 1.0;
pub const DEFAULT_TOLERANCE: f64 = 0.1;
pub const DEFAULT_WEIGHT: f64 = 0.5;
pub const DEFAULT_DISTANCE: f64 = 4.0;
pub const DEFAULT_SYMPREC: f64 = 1e-5;
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 5.0;
