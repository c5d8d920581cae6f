//! Marching-cubes iso-surface extraction over a sampled scalar field.
//!
//! Each elementary cube of eight lattice-adjacent samples is processed
//! independently against a static 256-entry case table, producing a triangle
//! soup with vertices in grid-index space. No vertex welding is performed,
//! so adjacent cubes duplicate vertices on shared edges.

mod tables;

use crate::float_types::{EPSILON, Real};
use crate::lattice::ScalarField;
use crate::mesh::{Mesh, Triangle};
use nalgebra::Point3;
use tables::{CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Extract the `iso` level set of `field` as a triangle soup in grid-index
/// coordinates.
///
/// An iso-level outside the sampled value range classifies every cube
/// uniformly and yields an empty mesh; that is an ordinary result, not an
/// error. Degenerate triangles from exact iso equality are passed through
/// unfiltered.
pub fn polygonize(field: &ScalarField, iso: Real) -> Mesh {
    let n = field.spec().resolution();

    #[cfg(not(feature = "parallel"))]
    let triangles: Vec<Triangle> = {
        let mut triangles = Vec::new();
        for iz in 0..n - 1 {
            for iy in 0..n - 1 {
                for ix in 0..n - 1 {
                    march_cube(field, iso, ix, iy, iz, &mut triangles);
                }
            }
        }
        triangles
    };

    #[cfg(feature = "parallel")]
    let triangles: Vec<Triangle> = (0..n - 1)
        .into_par_iter()
        .flat_map_iter(|iz| {
            // Cubes are independent; iterating slabs in parallel and letting
            // rayon collect in order keeps the output identical to serial.
            let mut slab = Vec::new();
            for iy in 0..n - 1 {
                for ix in 0..n - 1 {
                    march_cube(field, iso, ix, iy, iz, &mut slab);
                }
            }
            slab
        })
        .collect();

    debug!(iso_level = iso, triangles = triangles.len(), "polygonized iso-surface");
    Mesh { triangles }
}

/// Emit the triangles for one cube whose origin corner is (ix, iy, iz).
fn march_cube(
    field: &ScalarField,
    iso: Real,
    ix: usize,
    iy: usize,
    iz: usize,
    out: &mut Vec<Triangle>,
) {
    let mut corner_values: [Real; 8] = [0.0; 8];
    let mut code = 0usize;
    for (bit, offset) in CORNER_OFFSETS.iter().enumerate() {
        let v = field.value(ix + offset[0], iy + offset[1], iz + offset[2]);
        corner_values[bit] = v;
        if v < iso {
            code |= 1 << bit;
        }
    }

    let entry = &TRI_TABLE[code];
    if entry[0] < 0 {
        return;
    }

    // Interpolated crossing point on each active edge, computed on demand.
    let mut edge_points = [None::<Point3<Real>>; 12];
    let mut crossing = |edge: usize| -> Point3<Real> {
        *edge_points[edge].get_or_insert_with(|| {
            let [c0, c1] = EDGE_CORNERS[edge];
            let (v0, v1) = (corner_values[c0], corner_values[c1]);
            // Coincident sample values degenerate to the edge midpoint.
            let t = if (v1 - v0).abs() <= EPSILON {
                0.5
            } else {
                ((iso - v0) / (v1 - v0)).clamp(0.0, 1.0)
            };
            let p0 = CORNER_OFFSETS[c0];
            let p1 = CORNER_OFFSETS[c1];
            Point3::new(
                ix as Real + p0[0] as Real + t * (p1[0] as Real - p0[0] as Real),
                iy as Real + p0[1] as Real + t * (p1[1] as Real - p0[1] as Real),
                iz as Real + p0[2] as Real + t * (p1[2] as Real - p0[2] as Real),
            )
        })
    };

    for tri in entry.chunks_exact(3) {
        if tri[0] < 0 {
            break;
        }
        let v0 = crossing(tri[0] as usize);
        let v1 = crossing(tri[1] as usize);
        let v2 = crossing(tri[2] as usize);
        out.push(Triangle::new(v0, v1, v2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldParameters, ShapeKind};
    use crate::lattice::LatticeSpec;

    fn sampled(kind: ShapeKind, n: usize) -> ScalarField {
        let spec = LatticeSpec::with_default_domain(n).unwrap();
        let params = FieldParameters::new(kind, 1.0, 1.0);
        ScalarField::sample(&spec, &params).unwrap()
    }

    #[test]
    fn uniform_field_produces_empty_mesh() {
        let field = sampled(ShapeKind::SchwarzP, 8);
        // SchwarzP with a = b = 1 is bounded by [−4, 2]
        assert!(polygonize(&field, 100.0).is_empty());
        assert!(polygonize(&field, -100.0).is_empty());
    }

    #[test]
    fn gyroid_zero_level_is_nonempty() {
        let field = sampled(ShapeKind::Gyroid, 12);
        assert!(!polygonize(&field, 0.0).is_empty());
    }

    #[test]
    fn vertices_stay_inside_index_space() {
        let field = sampled(ShapeKind::Neovius, 10);
        let mesh = polygonize(&field, 0.0);
        let n = field.spec().resolution() as Real;
        for tri in &mesh.triangles {
            for v in &tri.vertices {
                for i in 0..3 {
                    assert!(v[i] >= 0.0 && v[i] <= n - 1.0, "vertex out of range: {v}");
                }
            }
        }
    }

    #[test]
    fn single_active_corner_emits_one_triangle() {
        // Hand-built 2×2×2 field: one corner below iso, seven above.
        let spec = LatticeSpec::new(2, 0.0, 1.0).unwrap();
        let values = vec![-1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let field = ScalarField::from_raw(spec, values);
        let mesh = polygonize(&field, 0.0);
        assert_eq!(mesh.len(), 1);
    }
}
