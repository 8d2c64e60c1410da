//! Deviation normalisation and the non-linear aging curve.

/// Normalised deviations are clamped to this band before shaping.
pub const DEVIATION_CLAMP: f64 = 1.2;

/// Normalised distance of a measured value from its ideal, in units of
/// tolerance, clamped to [-1.2, 1.2].
pub fn deviation(value: f64, ideal: f64, tolerance: f64) -> f64 {
    ((value - ideal) / tolerance).clamp(-DEVIATION_CLAMP, DEVIATION_CLAMP)
}

/// Non-linear biological curve: degradation (d > 0) is squared so it
/// accelerates, improvement (d < 0) grows sub-linearly at power 1.3.
pub fn bio_curve(d: f64) -> f64 {
    if d > 0.0 {
        d.powi(2)
    } else {
        -d.abs().powf(1.3)
    }
}

/// Round half away from zero to one decimal place, the display precision
/// of every organ age and the overall index.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
