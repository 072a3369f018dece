//! Trapezoidal quadrature over arbitrary (possibly non-uniform) grids.
//!
//! The integrand is supplied as a closure over the sample index so products of
//! several fields can be integrated without materializing them.

use num_complex::Complex64;

/// Integrates a complex integrand sampled at the nodes `x` with the composite
/// trapezoidal rule.
///
/// Returns zero for fewer than two nodes. A descending grid yields the
/// negated integral.
pub fn trapezoid<F>(x: &[f64], integrand: F) -> Complex64
where
    F: Fn(usize) -> Complex64,
{
    x.windows(2)
        .enumerate()
        .map(|(i, w)| (integrand(i) + integrand(i + 1)) * (0.5 * (w[1] - w[0])))
        .sum()
}

/// Real-valued counterpart of [`trapezoid`].
pub fn trapezoid_real<F>(x: &[f64], integrand: F) -> f64
where
    F: Fn(usize) -> f64,
{
    x.windows(2)
        .enumerate()
        .map(|(i, w)| 0.5 * (w[1] - w[0]) * (integrand(i) + integrand(i + 1)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_function_is_exact() {
        // Trapezoid rule integrates linear functions exactly, even on an uneven grid.
        let x = [0.0, 0.1, 0.5, 1.3, 2.0];
        let area = trapezoid_real(&x, |i| 3.0 * x[i] + 1.0);
        assert_abs_diff_eq!(area, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_has_known_truncation_error() {
        // Uniform grid of step h on [0, 1]: error for x^2 is exactly h^2 / 6.
        let n = 11;
        let x: Vec<f64> = (0..n).map(|i| f64::from(i) / 10.0).collect();
        let area = trapezoid_real(&x, |i| x[i] * x[i]);
        assert_abs_diff_eq!(area - 1.0 / 3.0, 0.01 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn complex_integrand() {
        let x = [0.0, 1.0, 2.0];
        let f = [
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(2.0, -2.0),
        ];
        let area = trapezoid(&x, |i| f[i]);
        assert_abs_diff_eq!(area.re, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(area.im, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn descending_grid_negates() {
        let x = [1.0, 0.0];
        assert_abs_diff_eq!(trapezoid_real(&x, |_| 2.0), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_nodes_is_zero() {
        assert_abs_diff_eq!(trapezoid_real(&[1.0], |_| 5.0), 0.0);
        assert_abs_diff_eq!(trapezoid(&[], |_| Complex64::new(1.0, 0.0)).norm(), 0.0);
    }
}
