//! Request validation, sampling, and export errors

use crate::float_types::Real;
use std::collections::TryReserveError;
use std::path::PathBuf;

/// Everything that can go wrong between request construction and STL export.
///
/// Empty meshes, degenerate triangles, and volume fractions of exactly 0%
/// or 100% are ordinary results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum TpmsError {
    /// Lattice resolution below the minimum of two samples per axis
    #[error("lattice resolution must be at least 2, got {0}")]
    ResolutionTooSmall(usize),
    /// Domain bounds are reversed, empty, or not finite
    #[error("domain [{min}, {max}] is empty or not finite")]
    InvalidDomain { min: Real, max: Real },
    /// A request must carry at least one iso-level
    #[error("at least one iso-level must be requested")]
    NoIsoLevels,
    /// Iso-levels must be finite so cube classification is total
    #[error("iso-level {0} is not finite")]
    NonFiniteIsoLevel(Real),
    /// The N³ sample buffer could not be allocated; retry at lower resolution
    #[error("failed to allocate {samples} field samples at resolution {resolution}")]
    FieldAllocation {
        resolution: usize,
        samples: usize,
        #[source]
        source: TryReserveError,
    },
    /// The mesh file could not be created or written
    #[error("failed to write mesh to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
