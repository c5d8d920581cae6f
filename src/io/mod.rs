//! Mesh serialization.

#[cfg(feature = "stl-io")]
pub mod stl;
