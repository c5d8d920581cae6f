//! A validated generation request: field parameters, lattice, and iso-levels.
//!
//! The request samples the field once and reuses the same `ScalarField` for
//! both iso-surface extraction and volume-fraction estimation, so the two
//! outputs can never disagree about what was sampled.

use crate::errors::TpmsError;
use crate::field::FieldParameters;
use crate::float_types::Real;
use crate::lattice::{LatticeSpec, ScalarField};
use crate::mc;
use crate::mesh::Mesh;
use tracing::debug;

/// One extracted level set together with its solid-fraction estimate.
#[derive(Debug, Clone)]
pub struct IsoSurface {
    pub iso_level: Real,
    /// World-space triangle soup; empty when the iso-level lies outside the
    /// sampled value range.
    pub mesh: Mesh,
    /// Percentage of lattice samples with value ≥ `iso_level`, in `[0, 100]`.
    pub volume_fraction: Real,
}

/// Parameters for one generation pass, validated at construction.
#[derive(Debug, Clone)]
pub struct TpmsRequest {
    params: FieldParameters,
    lattice: LatticeSpec,
    iso_levels: Vec<Real>,
}

impl TpmsRequest {
    /// Build a request. Fails if no iso-level is given or any is non-finite;
    /// lattice constraints are already enforced by [`LatticeSpec::new`].
    pub fn new(
        params: FieldParameters,
        lattice: LatticeSpec,
        iso_levels: Vec<Real>,
    ) -> Result<Self, TpmsError> {
        if iso_levels.is_empty() {
            return Err(TpmsError::NoIsoLevels);
        }
        if let Some(&bad) = iso_levels.iter().find(|iso| !iso.is_finite()) {
            return Err(TpmsError::NonFiniteIsoLevel(bad));
        }
        Ok(TpmsRequest {
            params,
            lattice,
            iso_levels,
        })
    }

    pub const fn params(&self) -> &FieldParameters {
        &self.params
    }

    pub const fn lattice(&self) -> &LatticeSpec {
        &self.lattice
    }

    pub fn iso_levels(&self) -> &[Real] {
        &self.iso_levels
    }

    /// Sample the field once, then extract one [`IsoSurface`] per requested
    /// iso-level, in request order.
    pub fn run(&self) -> Result<Vec<IsoSurface>, TpmsError> {
        let field = ScalarField::sample(&self.lattice, &self.params)?;

        let surfaces = self
            .iso_levels
            .iter()
            .map(|&iso| {
                let mesh = mc::polygonize(&field, iso).to_world(&self.lattice);
                let volume_fraction = field.volume_fraction(iso);
                debug!(
                    iso_level = iso,
                    triangles = mesh.len(),
                    volume_fraction,
                    "extracted iso-surface"
                );
                IsoSurface {
                    iso_level: iso,
                    mesh,
                    volume_fraction,
                }
            })
            .collect();

        Ok(surfaces)
    }
}
