//! Triply periodic minimal surface generation: implicit field sampling on a
//! regular lattice, marching-cubes iso-surface extraction, point-count volume
//! fraction estimation, and binary STL export.
//!
//! ```rust
//! use tpmsgen::{FieldParameters, LatticeSpec, ShapeKind, TpmsRequest};
//!
//! # fn main() -> Result<(), tpmsgen::TpmsError> {
//! let params = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
//! let lattice = LatticeSpec::with_default_domain(32)?;
//! let surfaces = TpmsRequest::new(params, lattice, vec![0.0])?.run()?;
//! assert!(!surfaces[0].mesh.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded sampling and extraction
//! - **demo**: build the demo binary (pulls in `tracing-subscriber`)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod field;
pub mod float_types;
pub mod io;
pub mod lattice;
pub mod mc;
pub mod mesh;
pub mod request;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::TpmsError;
pub use field::{FieldParameters, ShapeKind};
pub use lattice::{LatticeSpec, ScalarField};
pub use mesh::{Mesh, Triangle};
pub use request::{IsoSurface, TpmsRequest};
