//! Special mathematical functions.
//!
//! Real-valued roots that stay defined for negative arguments, used by the
//! inverse-CDF transforms.

/// Real cube root that preserves the sign of its argument.
///
/// # Mathematical Definition
/// ```text
/// cbrt(x) =  x^(1/3)      for x ≥ 0
///         = −(−x)^(1/3)   for x < 0
/// ```
///
/// `x.powf(1.0 / 3.0)` is NaN for every negative `x`; this function is the
/// odd extension and is total over the reals (NaN stays NaN, ±∞ stays ±∞).
///
/// # Examples
/// ```
/// use invcdf_lab::special::signed_cbrt;
/// assert!((signed_cbrt(27.0) - 3.0).abs() < 1e-15);
/// assert!((signed_cbrt(-27.0) + 3.0).abs() < 1e-15);
/// ```
pub fn signed_cbrt(x: f64) -> f64 {
    if x >= 0.0 {
        x.cbrt()
    } else {
        -(-x).cbrt()
    }
}

/// Elementwise signed cube root.
///
/// Returns a vector of the same length as `xs` where each entry is
/// [`signed_cbrt`] of the corresponding input.
///
/// # Examples
/// ```
/// use invcdf_lab::special::cube;
/// let out = cube(&[8.0, -8.0, 0.0, 1.0]);
/// for (got, want) in out.iter().zip([2.0, -2.0, 0.0, 1.0]) {
///     assert!((got - want).abs() < 1e-15);
/// }
/// ```
pub fn cube(xs: &[f64]) -> Vec<f64> {
    xs.iter().copied().map(signed_cbrt).collect()
}

// ============================================================================
// Tests
// ============================================================================
