//! Dispersion formulas. `x` is the wavelength in micrometres.

/// Evaluates a polynomial with coefficients ordered highest degree first.
fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * t + c)
}

/// Temperature-dependent Sellmeier model for crystalline silicon.
pub(super) fn silicon(x: f64, temperature_k: f64) -> f64 {
    const S: [[f64; 5]; 3] = [
        [3.4469e-12, -5.823e-09, 4.2169e-06, -0.000_208_02, 10.491],
        [-1.3509e-06, 0.001_059_4, -0.278_72, 29.166, -1346.6],
        [103.24, 678.41, -76158.0, -1.7621e6, 4.4283e7],
    ];
    const X: [[f64; 5]; 3] = [
        [2.3248e-14, -2.5105e-10, 1.6713e-07, -1.1423e-05, 0.299_71],
        [-1.1321e-06, 0.001_175, -0.357_96, 42.389, -3517.1],
        [23.577, -39.37, -6907.4, -1.4498e5, 1.714e6],
    ];
    let x2 = x * x;
    let sum: f64 = S
        .iter()
        .zip(&X)
        .map(|(s, xi)| {
            let resonance = horner(xi, temperature_k);
            horner(s, temperature_k) * x2 / (x2 - resonance * resonance)
        })
        .sum();
    (1.0 + sum).sqrt()
}

/// Fused silica at 20 C.
pub(super) fn silica(x: f64) -> f64 {
    const TERMS: [(f64, f64); 3] = [
        (0.696_166_3, 0.068_404_3),
        (0.407_942_6, 0.116_241_4),
        (0.897_479_4, 9.896_161),
    ];
    resonant_sum(x, &TERMS).sqrt()
}

pub(super) fn silicon_nitride(x: f64) -> f64 {
    const TERMS: [(f64, f64); 2] = [(3.0249, 0.135_340_6), (40314.0, 1239.842)];
    resonant_sum(x, &TERMS).sqrt()
}

pub(super) fn lithium_tantalate(x: f64) -> f64 {
    let x2 = x * x;
    (4.512_24 + 0.084_752_2 / (x2 - 0.198_76 * 0.198_76) - 0.023_904_6 * x2).sqrt()
}

/// `1 + sum(b / (1 - (c / x)^2))`
fn resonant_sum(x: f64, terms: &[(f64, f64)]) -> f64 {
    1.0 + terms
        .iter()
        .map(|&(b, c)| b / (1.0 - (c / x).powi(2)))
        .sum::<f64>()
}
