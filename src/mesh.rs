//! Triangle-soup mesh shared by extraction and export.

use crate::float_types::{EPSILON, Real};
use crate::lattice::LatticeSpec;
use nalgebra::{Point3, Vector3};

/// One triangle; three vertices in winding order, no shared-vertex indexing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<Real>; 3],
}

impl Triangle {
    pub const fn new(v0: Point3<Real>, v1: Point3<Real>, v2: Point3<Real>) -> Self {
        Triangle {
            vertices: [v0, v1, v2],
        }
    }

    /// Unit facet normal, `normalize((v1−v0) × (v2−v0))`.
    ///
    /// Zero-area triangles yield the zero vector rather than NaN; degenerate
    /// facets can legitimately appear when a field sample equals the
    /// iso-level exactly.
    pub fn normal(&self) -> Vector3<Real> {
        let [v0, v1, v2] = self.vertices;
        let n = (v1 - v0).cross(&(v2 - v0));
        let len = n.norm();
        if len > EPSILON {
            n / len
        } else {
            Vector3::zeros()
        }
    }
}

/// An ordered triangle soup.
///
/// Duplicate vertices across adjacent triangles are permitted (no welding),
/// and a mesh may be empty when an iso-level lies outside the sampled
/// value range.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub const fn new() -> Self {
        Mesh {
            triangles: Vec::new(),
        }
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds over all vertices, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut verts = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *verts.next()?;
        let (mut lo, mut hi) = (first, first);
        for v in verts {
            for i in 0..3 {
                lo[i] = lo[i].min(v[i]);
                hi[i] = hi[i].max(v[i]);
            }
        }
        Some((lo, hi))
    }

    /// Map every vertex from grid-index space to world space using the
    /// lattice that produced the underlying field.
    pub fn to_world(&self, spec: &LatticeSpec) -> Mesh {
        Mesh {
            triangles: self
                .triangles
                .iter()
                .map(|t| {
                    Triangle::new(
                        spec.index_to_world(&t.vertices[0]),
                        spec.index_to_world(&t.vertices[1]),
                        spec.index_to_world(&t.vertices[2]),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn facet_normal_is_unit_length() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        let n = tri.normal();
        assert_relative_eq!(n.norm(), 1.0);
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn zero_area_triangle_has_zero_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let tri = Triangle::new(p, p, p);
        assert_eq!(tri.normal(), Vector3::zeros());
    }

    #[test]
    fn bounds_of_empty_mesh_is_none() {
        assert!(Mesh::new().bounds().is_none());
    }
}
