//! Refractive-index models for common integrated-photonics materials.
//!
//! Models are evaluated at wavelengths in micrometres. Evaluating outside a
//! model's fitted window still returns a value, together with an
//! [`Advisory`] that is also logged.

mod sellmeier;

use std::fmt;

use tracing::warn;

/// Default temperature for the silicon model, in kelvin.
pub const SI_DEFAULT_TEMPERATURE: f64 = 295.0;

/// Quantity an advisory refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Wavelength in micrometres.
    Wavelength,
    /// Temperature in kelvin.
    Temperature,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wavelength => write!(f, "wavelength (um)"),
            Self::Temperature => write!(f, "temperature (K)"),
        }
    }
}

/// Non-fatal notice that a model was evaluated outside its fitted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advisory {
    pub material: &'static str,
    pub quantity: Quantity,
    /// First offending value.
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: extrapolating beyond {} range {}-{} (got {})",
            self.material, self.quantity, self.min, self.max, self.value
        )
    }
}

/// A value plus any advisories raised while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    pub value: T,
    pub advisories: Vec<Advisory>,
}

impl<T> Advised<T> {
    /// `true` if the value was computed entirely inside the fitted ranges.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Drops the advisories.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// A dispersive material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Idealized, `n = 1` everywhere.
    Air,
    /// Crystalline silicon, temperature-dependent (20-300 K, 1.1-5.6 um).
    Si { temperature_k: f64 },
    /// Fused silica (0.21-6.7 um).
    SiO2,
    /// Silicon nitride (0.31-5.504 um).
    Si3N4,
    /// Lithium tantalate (0.45-4.0 um).
    LiTaO3,
}

impl Material {
    /// Silicon at the default temperature.
    #[must_use]
    pub fn si() -> Self {
        Self::Si {
            temperature_k: SI_DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Air => "Air",
            Self::Si { .. } => "Si",
            Self::SiO2 => "SiO2",
            Self::Si3N4 => "Si3N4",
            Self::LiTaO3 => "LiTaO3",
        }
    }

    /// Fitted wavelength window in micrometres, `None` when unbounded.
    #[must_use]
    pub fn wavelength_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Air => None,
            Self::Si { .. } => Some((1.1, 5.6)),
            Self::SiO2 => Some((0.21, 6.7)),
            Self::Si3N4 => Some((0.31, 5.504)),
            Self::LiTaO3 => Some((0.45, 4.0)),
        }
    }

    /// Refractive index at `wavelength_um`.
    #[must_use]
    pub fn refractive_index(&self, wavelength_um: f64) -> Advised<f64> {
        let advisories = self.check(std::slice::from_ref(&wavelength_um));
        Advised {
            value: self.index_at(wavelength_um),
            advisories,
        }
    }

    /// Refractive indices at several wavelengths.
    ///
    /// At most one wavelength advisory is raised per call, for the first
    /// wavelength outside the window.
    #[must_use]
    pub fn refractive_indices(&self, wavelengths_um: &[f64]) -> Advised<Vec<f64>> {
        let advisories = self.check(wavelengths_um);
        Advised {
            value: wavelengths_um.iter().map(|&x| self.index_at(x)).collect(),
            advisories,
        }
    }

    fn index_at(&self, x: f64) -> f64 {
        match *self {
            Self::Air => 1.0,
            Self::Si { temperature_k } => sellmeier::silicon(x, temperature_k),
            Self::SiO2 => sellmeier::silica(x),
            Self::Si3N4 => sellmeier::silicon_nitride(x),
            Self::LiTaO3 => sellmeier::lithium_tantalate(x),
        }
    }

    fn check(&self, wavelengths: &[f64]) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if let Some((min, max)) = self.wavelength_range() {
            if let Some(&value) = wavelengths.iter().find(|&&x| !(min..=max).contains(&x)) {
                advisories.push(Advisory {
                    material: self.name(),
                    quantity: Quantity::Wavelength,
                    value,
                    min,
                    max,
                });
            }
        }
        if let Self::Si { temperature_k } = *self {
            if !(20.0..=300.0).contains(&temperature_k) {
                advisories.push(Advisory {
                    material: self.name(),
                    quantity: Quantity::Temperature,
                    value: temperature_k,
                    min: 20.0,
                    max: 300.0,
                });
            }
        }
        for advisory in &advisories {
            warn!(%advisory, "material model extrapolation");
        }
        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_indices_at_telecom_wavelength() {
        let sio2 = Material::SiO2.refractive_index(1.55);
        assert!(sio2.is_clean());
        assert_abs_diff_eq!(sio2.value, 1.444_024, epsilon = 1e-5);

        let si = Material::si().refractive_index(1.55);
        assert!(si.is_clean());
        assert!(si.value > 3.47 && si.value < 3.49, "{}", si.value);

        assert_abs_diff_eq!(Material::Si3N4.refractive_index(1.55).value, 1.996_28, epsilon = 1e-4);
        assert_abs_diff_eq!(Material::LiTaO3.refractive_index(1.55).value, 2.119_12, epsilon = 1e-4);
    }

    #[test]
    fn air_is_unity_everywhere() {
        let n = Material::Air.refractive_indices(&[0.01, 1.55, 100.0]);
        assert!(n.is_clean());
        assert_eq!(n.value, vec![1.0; 3]);
    }

    #[test]
    fn silica_is_normally_dispersive() {
        let n = Material::SiO2.refractive_indices(&[0.8, 1.3, 1.55]).into_value();
        assert!(n.windows(2).all(|w| w[1] < w[0]), "{n:?}");
    }

    #[test]
    fn window_edges_are_inclusive() {
        assert!(Material::si().refractive_indices(&[1.1, 5.6]).is_clean());
        assert!(Material::LiTaO3.refractive_indices(&[0.45, 4.0]).is_clean());
    }

    #[test]
    fn wavelength_outside_window_is_advised_once() {
        let n = Material::SiO2.refractive_indices(&[0.1, 0.15, 1.55]);
        assert_eq!(n.value.len(), 3);
        assert_eq!(n.advisories.len(), 1);
        let advisory = n.advisories[0];
        assert_eq!(advisory.material, "SiO2");
        assert_eq!(advisory.quantity, Quantity::Wavelength);
        assert_abs_diff_eq!(advisory.value, 0.1);
        assert!(advisory.to_string().contains("0.21-6.7"));
    }

    #[test]
    fn silicon_temperature_is_checked() {
        let cold = Material::Si { temperature_k: 10.0 }.refractive_index(1.55);
        assert_eq!(cold.advisories.len(), 1);
        assert_eq!(cold.advisories[0].quantity, Quantity::Temperature);
        assert!(cold.value.is_finite());

        let both = Material::Si { temperature_k: 400.0 }.refractive_index(8.0);
        assert_eq!(both.advisories.len(), 2);
    }

    #[test]
    fn silicon_index_rises_with_temperature() {
        let cold = Material::Si { temperature_k: 100.0 }.refractive_index(1.55).value;
        let warm = Material::Si { temperature_k: 295.0 }.refractive_index(1.55).value;
        assert!(warm > cold);
    }

    #[test]
    fn advisories_are_logged() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        let n = Material::Si3N4.refractive_index(6.0);
        assert!(!n.is_clean());
    }
}
