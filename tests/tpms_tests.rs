use tpmsgen::float_types::{PI, Real};
use tpmsgen::{FieldParameters, LatticeSpec, ScalarField, ShapeKind, TpmsRequest};

#[test]
fn gyroid_n3_scenario_matches_hand_computation() {
    // Gyroid, N = 3, domain [−π, π], a = b = 1: 27 samples on {−π, 0, π}³.
    // Every corner has sin(±π) in each term, so the field is 0 there up to
    // floating-point rounding of π.
    let spec = LatticeSpec::new(3, -PI, PI).unwrap();
    let params = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
    let field = ScalarField::sample(&spec, &params).unwrap();

    assert_eq!(field.values().len(), 27);
    for &(ix, iy, iz) in &[
        (0, 0, 0),
        (2, 0, 0),
        (0, 2, 0),
        (0, 0, 2),
        (2, 2, 0),
        (2, 0, 2),
        (0, 2, 2),
        (2, 2, 2),
    ] {
        let v = field.value(ix, iy, iz);
        assert!(
            v.abs() < 1e-12,
            "corner ({ix},{iy},{iz}) should be ~0, got {v}"
        );
    }
    // The center is exactly 0: every factor is sin(0) or multiplied by it.
    assert_eq!(field.value(1, 1, 1), 0.0);

    // The reported fraction is exactly the sample count ratio.
    let above = field.values().iter().filter(|&&v| v >= 0.0).count();
    let expected = above as Real / 27.0 * 100.0;
    assert_eq!(field.volume_fraction(0.0), expected);
}

#[test]
fn schwarz_p_n50_zero_level_stays_inside_domain() {
    let lattice = LatticeSpec::with_default_domain(50).unwrap();
    let params = FieldParameters::new(ShapeKind::SchwarzP, 1.0, 1.0);
    let request = TpmsRequest::new(params, lattice, vec![0.0]).unwrap();

    let surfaces = request.run().unwrap();
    let mesh = &surfaces[0].mesh;
    assert!(!mesh.is_empty(), "SchwarzP at iso 0 should produce a surface");

    let (lo, hi) = mesh.bounds().unwrap();
    for i in 0..3 {
        assert!(
            lo[i] >= lattice.domain_min() - 1e-9,
            "mesh extends below domain on axis {i}: {}",
            lo[i]
        );
        assert!(
            hi[i] <= lattice.domain_max() + 1e-9,
            "mesh extends above domain on axis {i}: {}",
            hi[i]
        );
    }
}

#[test]
fn out_of_range_iso_level_is_an_empty_result_not_an_error() {
    let lattice = LatticeSpec::with_default_domain(20).unwrap();
    let params = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
    let request = TpmsRequest::new(params, lattice, vec![50.0]).unwrap();

    let surfaces = request.run().unwrap();
    assert!(surfaces[0].mesh.is_empty());
    assert_eq!(surfaces[0].volume_fraction, 0.0);
}

#[test]
fn iso_level_below_field_minimum_gives_full_fraction() {
    let lattice = LatticeSpec::with_default_domain(20).unwrap();
    let params = FieldParameters::new(ShapeKind::Neovius, 1.0, 1.0);
    let field = ScalarField::sample(&lattice, &params).unwrap();

    assert_eq!(field.volume_fraction(field.min_value()), 100.0);
    assert_eq!(field.volume_fraction(field.max_value() + 1e-9), 0.0);
}

#[test]
fn multiple_iso_levels_share_one_field() {
    let lattice = LatticeSpec::with_default_domain(24).unwrap();
    let params = FieldParameters::new(ShapeKind::SchwarzD, 1.0, 1.0);
    let request = TpmsRequest::new(params, lattice, vec![-0.3, 0.0, 0.3]).unwrap();

    let surfaces = request.run().unwrap();
    assert_eq!(surfaces.len(), 3);
    for pair in surfaces.windows(2) {
        assert!(
            pair[0].volume_fraction >= pair[1].volume_fraction,
            "volume fraction must not increase with iso-level"
        );
    }
    // Each level gets its own mesh; no merging across levels.
    assert!(surfaces.iter().all(|s| !s.mesh.is_empty()));
}

#[test]
fn coefficients_change_the_sampled_field() {
    let lattice = LatticeSpec::with_default_domain(12).unwrap();
    let unit = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
    let skewed = FieldParameters::new(ShapeKind::Gyroid, 2.0, 0.5);

    let f0 = ScalarField::sample(&lattice, &unit).unwrap();
    let f1 = ScalarField::sample(&lattice, &skewed).unwrap();
    assert_ne!(f0.values(), f1.values());
}

#[test]
fn sampling_is_deterministic() {
    let lattice = LatticeSpec::with_default_domain(16).unwrap();
    let params = FieldParameters::new(ShapeKind::SchwarzP, 1.2, 0.8);

    let f0 = ScalarField::sample(&lattice, &params).unwrap();
    let f1 = ScalarField::sample(&lattice, &params).unwrap();
    assert_eq!(f0.values(), f1.values());
}
