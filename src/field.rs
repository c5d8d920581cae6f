//! Implicit TPMS scalar fields and their coefficients.

use crate::float_types::Real;

/// The supported triply periodic minimal surface families.
///
/// The set is closed: dispatch over it is exhaustive at compile time, so an
/// unknown surface name can only be rejected where a `ShapeKind` is first
/// constructed (e.g. when parsing user input), never deep in a sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Gyroid,
    SchwarzD,
    SchwarzP,
    Neovius,
}

impl ShapeKind {
    /// All supported kinds, in a fixed order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Gyroid,
        ShapeKind::SchwarzD,
        ShapeKind::SchwarzP,
        ShapeKind::Neovius,
    ];

    /// Short lowercase name, suitable for file stems.
    pub const fn name(&self) -> &'static str {
        match self {
            ShapeKind::Gyroid => "gyroid",
            ShapeKind::SchwarzD => "schwarz_d",
            ShapeKind::SchwarzP => "schwarz_p",
            ShapeKind::Neovius => "neovius",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A surface family together with its two shape coefficients.
///
/// Immutable once a sampling pass begins; `a` and `b` are typically in
/// `0.5..=2.0` but any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParameters {
    pub kind: ShapeKind,
    pub a: Real,
    pub b: Real,
}

impl FieldParameters {
    pub const fn new(kind: ShapeKind, a: Real, b: Real) -> Self {
        FieldParameters { kind, a, b }
    }

    /// Evaluate the field at a point. Pure, total for all finite inputs.
    ///
    /// * Gyroid:    `a·sin x cos y + b·sin y cos z + sin z cos x`
    /// * Schwarz D: `a·cos x + b·cos y + cos z`
    /// * Schwarz P: `a·cos x + b·cos y + cos z − 1`
    /// * Neovius:   `a·(cos x + cos y + cos z) + b·cos x cos y cos z`
    #[inline]
    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Real {
        let (a, b) = (self.a, self.b);
        match self.kind {
            ShapeKind::Gyroid => {
                a * (x.sin() * y.cos()) + b * (y.sin() * z.cos()) + z.sin() * x.cos()
            },
            ShapeKind::SchwarzD => a * x.cos() + b * y.cos() + z.cos(),
            ShapeKind::SchwarzP => a * x.cos() + b * y.cos() + z.cos() - 1.0,
            ShapeKind::Neovius => {
                a * (x.cos() + y.cos() + z.cos()) + b * x.cos() * y.cos() * z.cos()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;
    use approx::assert_relative_eq;

    #[test]
    fn gyroid_vanishes_where_every_sine_is_zero() {
        // sin(±π) = 0, so every term of the gyroid sum vanishes
        let params = FieldParameters::new(ShapeKind::Gyroid, 1.0, 1.0);
        assert_relative_eq!(params.evaluate(-PI, -PI, -PI), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn schwarz_p_is_schwarz_d_minus_one() {
        let d = FieldParameters::new(ShapeKind::SchwarzD, 1.3, 0.7);
        let p = FieldParameters::new(ShapeKind::SchwarzP, 1.3, 0.7);
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (0.4, -1.1, 2.8), (-3.0, 0.5, 1.0)] {
            assert_relative_eq!(p.evaluate(x, y, z), d.evaluate(x, y, z) - 1.0);
        }
    }

    #[test]
    fn all_kinds_finite_on_bounded_domain() {
        for kind in ShapeKind::ALL {
            let params = FieldParameters::new(kind, 1.0, 1.0);
            let mut t = -2.0 * PI;
            while t <= 2.0 * PI {
                assert!(
                    params.evaluate(t, t * 0.5, -t).is_finite(),
                    "{kind} produced a non-finite value at t = {t}"
                );
                t += 0.37;
            }
        }
    }
}
