//! Binary and ASCII STL export.
//!
//! The binary layout is byte-exact: an 80-byte zero-filled header, a
//! little-endian `u32` triangle count, then one 50-byte record per facet
//! (3×f32 normal, 3×3×f32 vertices, u16 attribute set to 0). A mesh of T
//! triangles therefore serializes to exactly `84 + 50·T` bytes.

use crate::errors::TpmsError;
use crate::mesh::Mesh;
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// Serialize `mesh` to an in-memory **binary STL** byte vector.
///
/// Facet normals are recomputed from the vertex winding; zero-area facets
/// get the zero vector.
pub fn to_stl_binary(mesh: &Mesh) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + 4 + mesh.len() * FACET_LEN);
    out.extend_from_slice(&[0u8; HEADER_LEN]);
    out.extend_from_slice(&(mesh.len() as u32).to_le_bytes());

    #[allow(clippy::unnecessary_cast)]
    for tri in &mesh.triangles {
        let n = tri.normal();
        for c in [n.x, n.y, n.z] {
            out.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for v in &tri.vertices {
            for c in [v.x, v.y, v.z] {
                out.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }
    out
}

/// Serialize `mesh` to an **ASCII STL** string with the given solid `name`.
///
/// Handy for eyeballing small meshes; CAD toolchains normally want the
/// binary form.
pub fn to_stl_ascii(mesh: &Mesh, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for tri in &mesh.triangles {
        let n = tri.normal();
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri.vertices {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Write `mesh` as binary STL to `path`, returning the path on success.
///
/// The file handle is scoped to `std::fs::write`, so it is flushed and
/// closed on every exit path.
pub fn write_stl_binary(mesh: &Mesh, path: impl AsRef<Path>) -> Result<PathBuf, TpmsError> {
    let path = path.as_ref();
    let bytes = to_stl_binary(mesh);
    std::fs::write(path, &bytes).map_err(|source| TpmsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        triangles = mesh.len(),
        "wrote binary STL"
    );
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;
    use nalgebra::Point3;

    fn two_triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.triangles.push(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ));
        mesh.triangles.push(Triangle::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ));
        mesh
    }

    #[test]
    fn binary_layout_is_byte_exact() {
        let bytes = to_stl_binary(&two_triangle_mesh());
        assert_eq!(bytes.len(), 84 + 2 * 50);
        // Zero-filled header
        assert!(bytes[..80].iter().all(|&b| b == 0));
        // Little-endian triangle count
        assert_eq!(u32::from_le_bytes(bytes[80..84].try_into().unwrap()), 2);
        // Attribute byte count of the first facet is 0
        assert_eq!(&bytes[84 + 48..84 + 50], &[0, 0]);
    }

    #[test]
    fn empty_mesh_serializes_to_header_only() {
        let bytes = to_stl_binary(&Mesh::new());
        assert_eq!(bytes.len(), 84);
        assert_eq!(u32::from_le_bytes(bytes[80..84].try_into().unwrap()), 0);
    }

    #[test]
    fn first_facet_normal_points_up() {
        let bytes = to_stl_binary(&two_triangle_mesh());
        let nz = f32::from_le_bytes(bytes[84 + 8..84 + 12].try_into().unwrap());
        assert_eq!(nz, 1.0);
    }

    #[test]
    fn ascii_output_brackets_the_solid() {
        let text = to_stl_ascii(&two_triangle_mesh(), "sample");
        assert!(text.starts_with("solid sample\n"));
        assert!(text.ends_with("endsolid sample\n"));
        assert_eq!(text.matches("facet normal").count(), 2);
    }

    #[test]
    fn write_to_bad_path_reports_io_error() {
        let err = write_stl_binary(&two_triangle_mesh(), "/nonexistent-dir/out.stl").unwrap_err();
        assert!(matches!(err, TpmsError::Io { .. }));
    }
}
