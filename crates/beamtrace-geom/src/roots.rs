//! Closed-form real-root extraction for low-degree polynomials.
//!
//! The cubic solver backs the ray-Bézier intersection query. It uses the
//! general cubic formula on the depressed cubic, switching on the
//! discriminant so that complex roots are never materialized: the
//! three-real-root case goes through the trigonometric form, the
//! single-real-root case through Cardano's formula. Coefficients within
//! tolerance of zero demote the polynomial to the next lower degree.

use beamtrace_math::Tolerance;

/// Real roots of `a1 * x + a0 = 0`.
///
/// A constant polynomial has no roots; the degenerate all-zero case is
/// reported as rootless as well rather than as infinitely many.
pub fn linear_roots(a0: f64, a1: f64, tol: &Tolerance) -> Vec<f64> {
    if tol.is_zero(a1) {
        Vec::new()
    } else {
        vec![-a0 / a1]
    }
}

/// Real roots of `a2 * x^2 + a1 * x + a0 = 0`.
pub fn quadratic_roots(a0: f64, a1: f64, a2: f64, tol: &Tolerance) -> Vec<f64> {
    if tol.is_zero(a2) {
        return linear_roots(a0, a1, tol);
    }
    let discr = a1 * a1 - 4.0 * a2 * a0;
    if tol.is_zero(discr) {
        vec![-a1 / (2.0 * a2)]
    } else if discr > 0.0 {
        let sq = discr.sqrt();
        vec![(-a1 + sq) / (2.0 * a2), (-a1 - sq) / (2.0 * a2)]
    } else {
        Vec::new()
    }
}

/// Real roots of `a3 * x^3 + a2 * x^2 + a1 * x + a0 = 0`.
///
/// See <https://en.wikipedia.org/wiki/Cubic_equation#General_cubic_formula>.
pub fn cubic_real_roots(a0: f64, a1: f64, a2: f64, a3: f64, tol: &Tolerance) -> Vec<f64> {
    if tol.is_zero(a3) {
        return quadratic_roots(a0, a1, a2, tol);
    }
    let (a, b, c, d) = (a3, a2, a1, a0);

    // Depressed cubic t^3 + p*t + q with x = t - b / (3a)
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);

    let t = if tol.is_zero(p) {
        vec![(-q).cbrt()]
    } else {
        let discr = -(4.0 * p * p * p + 27.0 * q * q);
        if tol.is_zero(discr) {
            if tol.is_zero(q) {
                vec![0.0]
            } else {
                // Double root and simple root
                vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
            }
        } else if discr < 0.0 {
            // One real root (Cardano)
            let sq = (-discr / 108.0).sqrt();
            vec![(-q / 2.0 + sq).cbrt() + (-q / 2.0 - sq).cbrt()]
        } else {
            // Three real roots (trigonometric form)
            let m = 2.0 * (-p / 3.0).sqrt();
            let theta = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).acos() / 3.0;
            (0..3)
                .map(|k| m * (theta - 2.0 * std::f64::consts::PI * k as f64 / 3.0).cos())
                .collect()
        }
    };

    t.into_iter().map(|x| x - b / (3.0 * a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roots(mut found: Vec<f64>, mut expected: Vec<f64>) {
        found.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(found.len(), expected.len(), "{found:?} vs {expected:?}");
        for (f, e) in found.iter().zip(expected.iter()) {
            assert!((f - e).abs() < 1e-5, "{found:?} vs {expected:?}");
        }
    }

    fn roots(a0: f64, a1: f64, a2: f64, a3: f64) -> Vec<f64> {
        cubic_real_roots(a0, a1, a2, a3, &Tolerance::DEFAULT)
    }

    #[test]
    fn test_three_distinct_roots() {
        assert_roots(roots(-12.0, 22.0, -12.0, 2.0), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_double_and_simple_root() {
        // The double root at 1 is reported once
        assert_roots(roots(0.0, 1.0, -2.0, 1.0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_single_real_root_depressed() {
        assert_roots(roots(-8.0, 0.0, 0.0, 1.0), vec![2.0]);
    }

    #[test]
    fn test_single_real_root_general() {
        assert_roots(roots(1.0, 2.0, 0.0, 1.0), vec![-0.453398]);
    }

    #[test]
    fn test_triple_root() {
        assert_roots(roots(0.0, 0.0, 0.0, 1.0), vec![0.0]);
        assert_roots(roots(-1.0, 3.0, -3.0, 1.0), vec![1.0]);
    }

    #[test]
    fn test_quadratic_fallback() {
        assert_roots(roots(1.0, -2.0, 1.0, 0.0), vec![1.0]);
        assert_roots(roots(-1.0, 0.0, 1.0, 0.0), vec![-1.0, 1.0]);
        assert_roots(roots(1.0, 0.0, 1.0, 0.0), vec![]);
    }

    #[test]
    fn test_linear_fallback() {
        assert_roots(roots(1.0, 2.0, 0.0, 0.0), vec![-0.5]);
        assert_roots(roots(1.0, 0.0, 0.0, 0.0), vec![]);
        assert_roots(roots(0.0, 0.0, 0.0, 0.0), vec![]);
    }
}
