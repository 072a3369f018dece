//! Power coupling between two sampled transverse field profiles.
//!
//! With electric fields only, the result is the normalized overlap
//!
//! ```text
//! t = |∫ conj(u) v| / (sqrt(∫ |u|^2) sqrt(∫ |v|^2))
//! ```
//!
//! When both magnetic fields are given, the Poynting cross terms are used:
//!
//! ```text
//! t = | Re(P_uv P_vu / P_vv) / Re(P_uu) |,   P_ab = ∫ a conj(h_b)
//! ```
//!
//! All integrals use the trapezoidal rule on the caller's grid. Denominators
//! are not guarded: a vanishing net power flow yields `inf`/`NaN`, and an
//! advisory is logged when a denominator is close to zero.

use num_complex::Complex64;
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::math::quadrature::trapezoid;

/// Denominator magnitude below which an advisory is logged.
const DENOMINATOR_FLOOR: f64 = 1e-12;

/// Overlap integral between an incident field `u` and an outgoing field `v`.
#[derive(Debug, Clone, Copy)]
pub struct Overlap<'a> {
    x: &'a [f64],
    u: &'a [Complex64],
    v: &'a [Complex64],
    magnetic: Option<(&'a [Complex64], &'a [Complex64])>,
}

impl<'a> Overlap<'a> {
    /// Creates an electric-field-only overlap.
    #[must_use]
    pub fn new(x: &'a [f64], u: &'a [Complex64], v: &'a [Complex64]) -> Self {
        Self {
            x,
            u,
            v,
            magnetic: None,
        }
    }

    /// Switches to the E+H formulation with magnetic fields `hu` and `hv`.
    #[must_use]
    pub fn with_magnetic(mut self, hu: &'a [Complex64], hv: &'a [Complex64]) -> Self {
        self.magnetic = Some((hu, hv));
        self
    }

    /// Evaluates the power coupling efficiency.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::LengthMismatch` if any field length differs from `x`.
    pub fn execute(&self) -> Result<f64> {
        self.check_len("u", self.u)?;
        self.check_len("v", self.v)?;
        match self.magnetic {
            Some((hu, hv)) => {
                self.check_len("hu", hu)?;
                self.check_len("hv", hv)?;
                Ok(self.electromagnetic(hu, hv))
            }
            None => Ok(self.electric()),
        }
    }

    fn check_len(&self, field: &'static str, values: &[Complex64]) -> Result<()> {
        if values.len() == self.x.len() {
            Ok(())
        } else {
            Err(AnalysisError::LengthMismatch {
                field,
                expected: self.x.len(),
                actual: values.len(),
            }
            .into())
        }
    }

    fn electric(&self) -> f64 {
        let (x, u, v) = (self.x, self.u, self.v);
        let uu = trapezoid(x, |i| u[i].conj() * u[i]);
        let vv = trapezoid(x, |i| v[i].conj() * v[i]);
        let uv = trapezoid(x, |i| u[i].conj() * v[i]);

        advise_small("P_uu", uu.re);
        advise_small("P_vv", vv.re);
        let t = Complex64::from(uv.norm()) / (uu.sqrt() * vv.sqrt());
        debug!(samples = x.len(), t = t.norm(), "electric overlap");
        t.norm()
    }

    fn electromagnetic(&self, hu: &[Complex64], hv: &[Complex64]) -> f64 {
        let (x, u, v) = (self.x, self.u, self.v);
        let uu = trapezoid(x, |i| u[i] * hu[i].conj());
        let vv = trapezoid(x, |i| v[i] * hv[i].conj());
        let uv = trapezoid(x, |i| u[i] * hv[i].conj());
        let vu = trapezoid(x, |i| v[i] * hu[i].conj());

        advise_small("Re(P_uu)", uu.re);
        advise_small("|P_vv|", vv.norm());
        let t = ((uv * vu / vv).re / uu.re).abs();
        debug!(samples = x.len(), t, "electromagnetic overlap");
        t
    }
}

fn advise_small(term: &'static str, value: f64) {
    if value.abs() < DENOMINATOR_FLOOR {
        warn!(term, value, "overlap denominator near zero; result is unreliable");
    }
}

/// Overlap with optional magnetic fields.
///
/// The E+H formulation is used only when both `hu` and `hv` are given; a
/// single magnetic field is ignored.
///
/// # Errors
///
/// Returns `AnalysisError::LengthMismatch` if any supplied field length differs from `x`.
pub fn overlap(
    x: &[f64],
    u: &[Complex64],
    v: &[Complex64],
    hu: Option<&[Complex64]>,
    hv: Option<&[Complex64]>,
) -> Result<f64> {
    let base = Overlap::new(x, u, v);
    match (hu, hv) {
        (Some(hu), Some(hv)) => base.with_magnetic(hu, hv).execute(),
        (None, None) => base.execute(),
        _ => {
            warn!("only one magnetic field supplied; using the electric-field overlap");
            base.execute()
        }
    }
}

/// Lifts a real-valued field profile to complex samples.
#[must_use]
pub fn real_field(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}
