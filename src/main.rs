// main.rs
//
// Minimal demonstration of tpmsgen: sample every surface family on the
// default [-2π, 2π] domain and write one binary STL per family, the way the
// downstream CAD toolchain consumes them.

use std::fs;
use tpmsgen::io::stl;
use tpmsgen::{FieldParameters, LatticeSpec, ShapeKind, TpmsError, TpmsRequest};

fn main() -> Result<(), TpmsError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Ensure the /stl folder exists
    let _ = fs::create_dir_all("stl");

    let lattice = LatticeSpec::with_default_domain(64)?;

    for kind in ShapeKind::ALL {
        let params = FieldParameters::new(kind, 1.0, 1.0);
        let request = TpmsRequest::new(params, lattice, vec![0.0])?;

        for surface in request.run()? {
            let path = stl::write_stl_binary(&surface.mesh, format!("stl/{kind}.stl"))?;
            println!(
                "{kind}: {} triangles, volume fraction {:.2}%, wrote {}",
                surface.mesh.len(),
                surface.volume_fraction,
                path.display()
            );
        }
    }

    Ok(())
}
