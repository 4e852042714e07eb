use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::atoms::{make_supercell, rotate_atoms_around_z, stack_atoms, Atoms};
use crate::coincidence::{find_coincidences, reduce_to_independent_pairs, SupercellPair};
use crate::config::{
    ANGLE_SWEEP_EPSILON, BASIS_SINGULAR_TOLERANCE, DEFAULT_ANGLE_LIMITS, DEFAULT_ANGLE_STEPSIZE,
    DEFAULT_ANGLE_TOLERANCE, DEFAULT_DISTANCE, DEFAULT_N_MAX, DEFAULT_N_MIN, DEFAULT_SYMPREC,
    DEFAULT_TOLERANCE, DEFAULT_WEIGHT,
};
use crate::error::BuilderError;
use crate::heterostructure::dedup::filter_unique_interfaces;
use crate::heterostructure::interface::Interface;
use crate::symmetry::standardize_atoms;
use crate::Result;

/// Builder over the coincidence-lattice interface search.
///
/// All angles are degrees; conversion to radians happens once inside the
/// search and rotation stages.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    bottom: Atoms,
    top: Atoms,
    n_min: i32,
    n_max: i32,
    angles: Vec<f64>,
    angle_limits: (f64, f64),
    angle_stepsize: f64,
    tolerance: f64,
    weight: f64,
    distance: f64,
    no_idealize: bool,
    symprec: f64,
    angle_tolerance: f64,
}

impl InterfaceBuilder {
    /// Create a builder with the default search parameters.
    pub fn new(bottom: Atoms, top: Atoms) -> Self {
        InterfaceBuilder {
            bottom,
            top,
            n_min: DEFAULT_N_MIN,
            n_max: DEFAULT_N_MAX,
            angles: Vec::new(),
            angle_limits: DEFAULT_ANGLE_LIMITS,
            angle_stepsize: DEFAULT_ANGLE_STEPSIZE,
            tolerance: DEFAULT_TOLERANCE,
            weight: DEFAULT_WEIGHT,
            distance: DEFAULT_DISTANCE,
            no_idealize: false,
            symprec: DEFAULT_SYMPREC,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
        }
    }

    /// Set the integer index window of the grid search.
    pub fn with_index_range(mut self, n_min: i32, n_max: i32) -> Self {
        self.n_min = n_min;
        self.n_max = n_max;
        self
    }

    /// Search exactly these angles (degrees). A non-empty list overrides the
    /// sweep limits.
    pub fn with_angles(mut self, angles: Vec<f64>) -> Self {
        self.angles = angles;
        self
    }

    /// Sweep angles from `limits.0` to `limits.1` inclusive (degrees).
    pub fn with_angle_sweep(mut self, limits: (f64, f64), stepsize: f64) -> Self {
        self.angle_limits = limits;
        self.angle_stepsize = stepsize;
        self
    }

    /// Set the coincidence tolerance in Å.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the cell blend weight between the two layers.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the interlayer distance in Å.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Keep the stacked atoms unidealized during standardization.
    pub fn with_no_idealize(mut self, no_idealize: bool) -> Self {
        self.no_idealize = no_idealize;
        self
    }

    /// Set the symmetry search precision.
    pub fn with_symprec(mut self, symprec: f64) -> Self {
        self.symprec = symprec;
        self
    }

    /// Set the symmetry angle tolerance in degrees.
    pub fn with_angle_tolerance(mut self, angle_tolerance: f64) -> Self {
        self.angle_tolerance = angle_tolerance;
        self
    }

    /// Execute the search and return the deduplicated interface catalogue.
    ///
    /// The result is sorted by `(space_group, atom_count, area)` and is empty
    /// when no angle yields a primitive supercell pair.
    pub fn run(self) -> Result<Vec<Interface>> {
        self.validate()?;

        let angle_set = self.angle_set();
        if angle_set.is_empty() {
            return Err(BuilderError::InvalidParameter(
                "angle set is empty".to_string(),
            ));
        }

        let a = self.bottom.in_plane_basis();
        let b = self.top.in_plane_basis();
        if a.determinant().abs() < BASIS_SINGULAR_TOLERANCE {
            return Err(BuilderError::DegenerateCell(
                "bottom layer in-plane basis is singular".to_string(),
            ));
        }
        if b.determinant().abs() < BASIS_SINGULAR_TOLERANCE {
            return Err(BuilderError::DegenerateCell(
                "top layer in-plane basis is singular".to_string(),
            ));
        }

        // Stage 1 + 2: coincidence search and pair reduction, per angle.
        let mut pairs_per_angle: Vec<(f64, Vec<SupercellPair>)> = Vec::new();
        for &angle in &angle_set {
            let coincidences = find_coincidences(
                &a,
                &b,
                angle.to_radians(),
                self.n_min,
                self.n_max,
                self.tolerance,
            );
            if coincidences.is_empty() {
                debug!("no coincidences at {angle}°");
                continue;
            }
            let pairs = reduce_to_independent_pairs(&coincidences);
            info!(
                "{} coincidences, {} independent pairs at {angle}°",
                coincidences.len(),
                pairs.len()
            );
            if !pairs.is_empty() {
                pairs_per_angle.push((angle, pairs));
            }
        }

        if pairs_per_angle.is_empty() {
            warn!("no angle produced a primitive supercell pair");
            return Ok(Vec::new());
        }

        // Stage 3: build, standardize, deduplicate.
        let mut interfaces = Vec::new();
        for (angle, pairs) in &pairs_per_angle {
            #[cfg(feature = "parallel")]
            let built: Result<Vec<Option<Interface>>> = pairs
                .par_iter()
                .map(|pair| self.build_interface(*angle, pair))
                .collect();
            #[cfg(not(feature = "parallel"))]
            let built: Result<Vec<Option<Interface>>> = pairs
                .iter()
                .map(|pair| self.build_interface(*angle, pair))
                .collect();

            interfaces.extend(built?.into_iter().flatten());
        }

        info!("{} interfaces before deduplication", interfaces.len());
        Ok(filter_unique_interfaces(interfaces))
    }

    // Build one candidate: supercells, rotation, stacking, standardization.
    fn build_interface(&self, angle: f64, pair: &SupercellPair) -> Result<Option<Interface>> {
        let (m3, n3) = pair.lifted();
        let bottom_layer = make_supercell(&self.bottom, &m3)?;
        let top_layer = make_supercell(&self.top, &n3)?;
        let top_rotated = rotate_atoms_around_z(&top_layer, angle.to_radians());
        let mut stack = stack_atoms(&bottom_layer, &top_rotated, self.weight, self.distance)?;

        let space_group = standardize_atoms(
            &mut stack,
            true,
            self.no_idealize,
            self.symprec,
            self.angle_tolerance,
        );
        if space_group == 0 {
            debug!("dropping candidate at {angle}°: standardization failed");
            return Ok(None);
        }

        Ok(Some(Interface::new(
            bottom_layer,
            top_rotated,
            stack,
            angle,
            m3,
            n3,
            space_group,
        )))
    }

    fn validate(&self) -> Result<()> {
        if self.n_max < self.n_min {
            return Err(BuilderError::InvalidParameter(format!(
                "n_max ({}) must not be smaller than n_min ({})",
                self.n_max, self.n_min
            )));
        }
        if self.tolerance <= 0.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.distance <= 0.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "distance must be positive, got {}",
                self.distance
            )));
        }
        if !(0.0..=1.0).contains(&self.weight) {
            return Err(BuilderError::InvalidParameter(format!(
                "weight must lie in [0, 1], got {}",
                self.weight
            )));
        }
        if self.angles.is_empty() && self.angle_stepsize <= 0.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "angle stepsize must be positive, got {}",
                self.angle_stepsize
            )));
        }
        Ok(())
    }

    // Explicit angles win; otherwise the inclusive sweep over the limits.
    fn angle_set(&self) -> Vec<f64> {
        if !self.angles.is_empty() {
            return self.angles.clone();
        }

        let (start, end) = self.angle_limits;
        let mut angles = Vec::new();
        let mut angle = start;
        while angle <= end + ANGLE_SWEEP_EPSILON {
            angles.push(angle);
            angle += self.angle_stepsize;
        }
        angles
    }
}
