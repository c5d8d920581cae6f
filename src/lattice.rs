//! Regular lattice specification, dense field sampling, and the point-count
//! volume-fraction estimate.

use crate::errors::TpmsError;
use crate::field::FieldParameters;
use crate::float_types::{Real, TAU};
use nalgebra::Point3;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An N×N×N sampling grid spanning `[domain_min, domain_max]` on every axis.
///
/// Axis coordinates are the N evenly spaced values from `domain_min` to
/// `domain_max` inclusive, so the spacing is `(max − min) / (N − 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSpec {
    resolution: usize,
    domain_min: Real,
    domain_max: Real,
}

impl LatticeSpec {
    /// Validate and build a lattice spec. `resolution` must be at least 2
    /// and the domain must be a non-empty finite interval.
    pub fn new(resolution: usize, domain_min: Real, domain_max: Real) -> Result<Self, TpmsError> {
        if resolution < 2 {
            return Err(TpmsError::ResolutionTooSmall(resolution));
        }
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_max <= domain_min {
            return Err(TpmsError::InvalidDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        Ok(LatticeSpec {
            resolution,
            domain_min,
            domain_max,
        })
    }

    /// The conventional TPMS preview domain, `[−2π, 2π]` per axis.
    pub fn with_default_domain(resolution: usize) -> Result<Self, TpmsError> {
        Self::new(resolution, -TAU, TAU)
    }

    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    pub const fn domain_min(&self) -> Real {
        self.domain_min
    }

    pub const fn domain_max(&self) -> Real {
        self.domain_max
    }

    /// Distance between adjacent samples along one axis.
    pub fn spacing(&self) -> Real {
        (self.domain_max - self.domain_min) / (self.resolution as Real - 1.0)
    }

    /// Total number of samples in the full Cartesian product, N³.
    pub const fn sample_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// World coordinate of integer axis index `i` (0 ..= N−1).
    pub fn axis_coordinate(&self, i: usize) -> Real {
        self.domain_min + i as Real * self.spacing()
    }

    /// Affine map from (possibly fractional) grid-index space to world space.
    ///
    /// Marching-cubes vertices live on voxel edges at fractional indices;
    /// applying this map to every vertex keeps mesh geometry metrically
    /// consistent with the sampled field.
    pub fn index_to_world(&self, p: &Point3<Real>) -> Point3<Real> {
        let s = self.spacing();
        Point3::new(
            self.domain_min + p.x * s,
            self.domain_min + p.y * s,
            self.domain_min + p.z * s,
        )
    }
}

/// A dense block of N³ field samples plus the lattice that produced it.
///
/// Sample order is x-fastest: `index = ix + N·(iy + N·iz)`. The field is
/// immutable after creation and is shared by iso-surface extraction and
/// volume-fraction estimation so both always see the same data.
#[derive(Debug, Clone)]
pub struct ScalarField {
    spec: LatticeSpec,
    values: Vec<Real>,
}

impl ScalarField {
    /// Evaluate `params` at every lattice point of `spec`.
    ///
    /// O(N³) time and memory; allocation failure at high resolution is
    /// reported as [`TpmsError::FieldAllocation`] rather than aborting.
    pub fn sample(spec: &LatticeSpec, params: &FieldParameters) -> Result<Self, TpmsError> {
        let n = spec.resolution();
        let total = spec.sample_count();

        let mut values: Vec<Real> = Vec::new();
        values
            .try_reserve_exact(total)
            .map_err(|source| TpmsError::FieldAllocation {
                resolution: n,
                samples: total,
                source,
            })?;

        #[cfg(not(feature = "parallel"))]
        {
            for iz in 0..n {
                let z = spec.axis_coordinate(iz);
                for iy in 0..n {
                    let y = spec.axis_coordinate(iy);
                    for ix in 0..n {
                        let x = spec.axis_coordinate(ix);
                        values.push(params.evaluate(x, y, z));
                    }
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            // Z-slabs are independent; filling them in parallel leaves the
            // sample order identical to the serial loop.
            values.resize(total, 0.0);
            values
                .par_chunks_mut(n * n)
                .enumerate()
                .for_each(|(iz, slab)| {
                    let z = spec.axis_coordinate(iz);
                    for iy in 0..n {
                        let y = spec.axis_coordinate(iy);
                        for ix in 0..n {
                            let x = spec.axis_coordinate(ix);
                            slab[ix + iy * n] = params.evaluate(x, y, z);
                        }
                    }
                });
        }

        debug!(resolution = n, samples = total, "sampled scalar field");
        Ok(ScalarField { spec: *spec, values })
    }

    /// Wrap an existing sample block. The length must be `spec.sample_count()`.
    #[cfg(test)]
    pub(crate) fn from_raw(spec: LatticeSpec, values: Vec<Real>) -> Self {
        assert_eq!(values.len(), spec.sample_count());
        ScalarField { spec, values }
    }

    pub const fn spec(&self) -> &LatticeSpec {
        &self.spec
    }

    /// All samples in x-fastest order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Flat index of grid point (ix, iy, iz).
    #[inline]
    pub const fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        let n = self.spec.resolution();
        ix + n * (iy + n * iz)
    }

    /// Sample at grid point (ix, iy, iz).
    #[inline]
    pub fn value(&self, ix: usize, iy: usize, iz: usize) -> Real {
        self.values[self.index(ix, iy, iz)]
    }

    /// Smallest sampled value.
    pub fn min_value(&self) -> Real {
        self.values.iter().copied().fold(Real::INFINITY, Real::min)
    }

    /// Largest sampled value.
    pub fn max_value(&self) -> Real {
        self.values
            .iter()
            .copied()
            .fold(Real::NEG_INFINITY, Real::max)
    }

    /// Percentage of lattice samples with `value ≥ iso`, in `[0, 100]`.
    ///
    /// A point-sampling approximation of the solid fraction, not a geometric
    /// volume integral; accuracy improves with resolution. Monotonically
    /// non-increasing in `iso` for a fixed field.
    pub fn volume_fraction(&self, iso: Real) -> Real {
        let above = self.values.iter().filter(|&&v| v >= iso).count();
        above as Real / self.values.len() as Real * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ShapeKind;
    use crate::float_types::PI;
    use approx::assert_relative_eq;

    fn gyroid_3() -> ScalarField {
        let spec = LatticeSpec::new(3, -PI, PI).unwrap();
        let params = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
        ScalarField::sample(&spec, &params).unwrap()
    }

    #[test]
    fn rejects_degenerate_specs() {
        assert!(matches!(
            LatticeSpec::new(1, 0.0, 1.0),
            Err(TpmsError::ResolutionTooSmall(1))
        ));
        assert!(matches!(
            LatticeSpec::new(8, 1.0, 1.0),
            Err(TpmsError::InvalidDomain { .. })
        ));
        assert!(matches!(
            LatticeSpec::new(8, 0.0, Real::NAN),
            Err(TpmsError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn axis_coordinates_span_domain_inclusively() {
        let spec = LatticeSpec::new(5, -1.0, 1.0).unwrap();
        assert_relative_eq!(spec.axis_coordinate(0), -1.0);
        assert_relative_eq!(spec.axis_coordinate(4), 1.0);
        assert_relative_eq!(spec.spacing(), 0.5);
    }

    #[test]
    fn index_to_world_matches_axis_coordinates() {
        let spec = LatticeSpec::new(9, -2.0, 2.0).unwrap();
        let p = spec.index_to_world(&Point3::new(0.0, 4.0, 8.0));
        assert_relative_eq!(p.x, spec.axis_coordinate(0));
        assert_relative_eq!(p.y, spec.axis_coordinate(4));
        assert_relative_eq!(p.z, spec.axis_coordinate(8));
    }

    #[test]
    fn gyroid_corner_values_are_exact() {
        // At every corner of [−π, π]³ each sine factor is sin(±π) = 0,
        // so the gyroid field is exactly 0 there.
        let field = gyroid_3();
        assert_eq!(field.values().len(), 27);
        for &(ix, iy, iz) in &[(0, 0, 0), (2, 0, 0), (0, 2, 0), (2, 2, 2)] {
            assert_relative_eq!(field.value(ix, iy, iz), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn volume_fraction_counts_samples_at_or_above_iso() {
        let field = gyroid_3();
        let above = field.values().iter().filter(|&&v| v >= 0.0).count();
        assert_relative_eq!(
            field.volume_fraction(0.0),
            above as Real / 27.0 * 100.0
        );
    }

    #[test]
    fn volume_fraction_saturates_outside_value_range() {
        let field = gyroid_3();
        assert_relative_eq!(field.volume_fraction(field.min_value() - 1.0), 100.0);
        assert_relative_eq!(field.volume_fraction(field.max_value() + 1.0), 0.0);
    }

    #[test]
    fn volume_fraction_is_monotone_in_iso() {
        let spec = LatticeSpec::with_default_domain(16).unwrap();
        let params = FieldParameters::new(ShapeKind::Neovius, 1.0, 1.0);
        let field = ScalarField::sample(&spec, &params).unwrap();
        let mut prev = 100.0;
        let mut iso = -4.0;
        while iso <= 4.0 {
            let vf = field.volume_fraction(iso);
            assert!(vf <= prev, "fraction rose from {prev} to {vf} at iso {iso}");
            prev = vf;
            iso += 0.25;
        }
    }
}
