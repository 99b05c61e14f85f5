//! Inverse-CDF transforms.
//!
//! Each transform maps a uniform draw `u ∈ [0, 1)` to a draw from a target
//! distribution by evaluating the closed-form inverse of that distribution's
//! CDF. None of the functions validate their input: values outside `[0, 1]`
//! produce whatever the formula yields.
//!
//! # Supported Transforms
//!
//! | Transform | F⁻¹(u) | Target PDF | Mean |
//! |---|---|---|---|
//! | [`Transform::Identity`] | u | 1 | 1/2 |
//! | [`Transform::Sqrt`] | √u | 2x | 2/3 |
//! | [`Transform::ScaledSqrt`] | √(4u)/2 | 2x | 2/3 |
//! | [`Transform::CubeRoot`] | ∛u | 3x² | 3/4 |
//! | [`Transform::ShiftedCubeRoot`] | (−0.2 − ∛(1 − 3(u + 0.335)))/1.24 | 1.24(0.2 + 1.24x)² | see [`Transform::mean`] |
//! | [`Transform::TwoThirdsPower`] | u^(2/3) | 1.5√x | 3/5 |

use crate::special::signed_cbrt;

/// Offset added to `u` inside the shifted cube root.
const SHIFT_U: f64 = 0.335;
/// Additive offset of the shifted cube root's output.
const SHIFT_X: f64 = 0.2;
/// Output scale of the shifted cube root.
const SHIFT_SCALE: f64 = 1.24;

/// Inverse CDF of the linear density `f(x) = 2x` on `[0, 1]`.
///
/// # Examples
/// ```
/// use invcdf_lab::transforms::invcdf_lin;
/// assert_eq!(invcdf_lin(0.25), 0.5);
/// ```
pub fn invcdf_lin(u: f64) -> f64 {
    u.sqrt()
}

/// Inverse CDF of the linear density written as `√(4u)/2`.
///
/// Scaling by 4 and halving are exact in binary floating point, so this is
/// bit-for-bit equal to [`invcdf_lin`] on `[0, 1]`.
pub fn invcdf_lin_scaled(u: f64) -> f64 {
    (4.0 * u).sqrt() / 2.0
}

/// Inverse CDF of the quadratic density `f(x) = 3x²` on `[0, 1]`.
pub fn invcdf_sq(u: f64) -> f64 {
    signed_cbrt(u)
}

/// Shifted and scaled cube-root transform.
///
/// ```text
/// F⁻¹(u) = (−0.2 − ∛(1 − 3(u + 0.335))) / 1.24
/// ```
///
/// The cube root argument is negative for every `u ∈ [0, 1]`, so the signed
/// root is required. The target density is the shifted quadratic
/// `f(x) = 1.24 (0.2 + 1.24x)²`.
pub fn invcdf_sq_shifted(u: f64) -> f64 {
    (-SHIFT_X - signed_cbrt(1.0 - 3.0 * (u + SHIFT_U))) / SHIFT_SCALE
}

/// Inverse CDF of the square-root density `f(x) = 1.5√x` on `[0, 1]`.
///
/// # Examples
/// ```
/// use invcdf_lab::transforms::invcdf_sqrt;
/// assert!((invcdf_sqrt(0.5) - 0.6300).abs() < 1e-4);
/// ```
pub fn invcdf_sqrt(u: f64) -> f64 {
    u.powf(2.0 / 3.0)
}

/// A named uniform-to-target mapping together with its target distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// The untransformed uniform baseline.
    Identity,
    /// `√u`, linear target density.
    Sqrt,
    /// `√(4u)/2`, linear target density.
    ScaledSqrt,
    /// `∛u`, quadratic target density.
    CubeRoot,
    /// Shifted and scaled cube root, shifted quadratic target density.
    ShiftedCubeRoot,
    /// `u^(2/3)`, square-root target density.
    TwoThirdsPower,
}

impl Transform {
    /// Human-readable title used for plot rows and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Identity => "Uniform",
            Transform::Sqrt => "Linear",
            Transform::ScaledSqrt => "Linear (scaled)",
            Transform::CubeRoot => "Quadratic",
            Transform::ShiftedCubeRoot => "Shifted quadratic",
            Transform::TwoThirdsPower => "Square root",
        }
    }

    /// Evaluates the inverse CDF at `u`.
    pub fn apply(&self, u: f64) -> f64 {
        match self {
            Transform::Identity => u,
            Transform::Sqrt => invcdf_lin(u),
            Transform::ScaledSqrt => invcdf_lin_scaled(u),
            Transform::CubeRoot => invcdf_sq(u),
            Transform::ShiftedCubeRoot => invcdf_sq_shifted(u),
            Transform::TwoThirdsPower => invcdf_sqrt(u),
        }
    }

    /// Applies the transform elementwise.
    pub fn apply_all(&self, us: &[f64]) -> Vec<f64> {
        us.iter().map(|&u| self.apply(u)).collect()
    }

    /// Image of `[0, 1]` under the transform, as `(low, high)`.
    pub fn support(&self) -> (f64, f64) {
        match self {
            Transform::ShiftedCubeRoot => (invcdf_sq_shifted(0.0), invcdf_sq_shifted(1.0)),
            _ => (0.0, 1.0),
        }
    }

    /// CDF of the target distribution, clamped to `[0, 1]` outside the support.
    ///
    /// This is the forward map: `cdf(apply(u)) == u` for `u ∈ [0, 1]`.
    pub fn cdf(&self, x: f64) -> f64 {
        let (lo, hi) = self.support();
        if x <= lo {
            return 0.0;
        }
        if x >= hi {
            return 1.0;
        }
        match self {
            Transform::Identity => x,
            Transform::Sqrt | Transform::ScaledSqrt => x * x,
            Transform::CubeRoot => x * x * x,
            Transform::ShiftedCubeRoot => {
                let s = SHIFT_X + SHIFT_SCALE * x;
                (s * s * s - (3.0 * SHIFT_U - 1.0)) / 3.0
            }
            Transform::TwoThirdsPower => x * x.sqrt(),
        }
    }

    /// PDF of the target distribution, zero outside the support.
    pub fn pdf(&self, x: f64) -> f64 {
        let (lo, hi) = self.support();
        if x < lo || x > hi {
            return 0.0;
        }
        match self {
            Transform::Identity => 1.0,
            Transform::Sqrt | Transform::ScaledSqrt => 2.0 * x,
            Transform::CubeRoot => 3.0 * x * x,
            Transform::ShiftedCubeRoot => {
                let s = SHIFT_X + SHIFT_SCALE * x;
                SHIFT_SCALE * s * s
            }
            Transform::TwoThirdsPower => 1.5 * x.sqrt(),
        }
    }

    /// Analytic mean of the target distribution.
    ///
    /// For the shifted cube root, with `a = 3·0.335 − 1`:
    /// ```text
    /// E[X] = (−0.2 + ((3 + a)^(4/3) − a^(4/3)) / 4) / 1.24
    /// ```
    pub fn mean(&self) -> f64 {
        match self {
            Transform::Identity => 0.5,
            Transform::Sqrt | Transform::ScaledSqrt => 2.0 / 3.0,
            Transform::CubeRoot => 0.75,
            Transform::ShiftedCubeRoot => {
                let a = 3.0 * SHIFT_U - 1.0;
                let four_thirds = 4.0 / 3.0;
                let e_root = ((3.0 + a).powf(four_thirds) - a.powf(four_thirds)) / 4.0;
                (-SHIFT_X + e_root) / SHIFT_SCALE
            }
            Transform::TwoThirdsPower => 0.6,
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Transform; 6] = [
        Transform::Identity,
        Transform::Sqrt,
        Transform::ScaledSqrt,
        Transform::CubeRoot,
        Transform::ShiftedCubeRoot,
        Transform::TwoThirdsPower,
    ];

    #[test]
    fn test_invcdf_sqrt_half() {
        let v = invcdf_sqrt(0.5);
        assert!((v - 0.5_f64.powf(2.0 / 3.0)).abs() < 1e-15);
        assert!((v - 0.6300).abs() < 1e-4);
    }

    #[test]
    fn test_invcdf_sq_endpoints() {
        assert_eq!(invcdf_sq(0.0), 0.0);
        assert!((invcdf_sq(1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_invcdf_lin_endpoints() {
        assert_eq!(invcdf_lin(0.0), 0.0);
        assert_eq!(invcdf_lin(1.0), 1.0);
        assert_eq!(invcdf_lin_scaled(0.0), 0.0);
        assert_eq!(invcdf_lin_scaled(1.0), 1.0);
    }

    #[test]
    fn test_shifted_cube_root_range() {
        let (lo, hi) = Transform::ShiftedCubeRoot.support();
        // ∛(−0.005) ≈ −0.171, ∛(−3.005) ≈ −1.443
        assert!((lo + 0.0234).abs() < 1e-3, "lo = {lo}");
        assert!((hi - 1.0025).abs() < 1e-3, "hi = {hi}");
        assert!(invcdf_sq_shifted(0.5).is_finite());
    }

    #[test]
    fn test_shifted_cube_root_mean() {
        let m = Transform::ShiftedCubeRoot.mean();
        assert!((m - 0.7128).abs() < 1e-3, "mean = {m}");
    }

    #[test]
    fn test_out_of_range_input_is_not_validated() {
        assert!(invcdf_lin(-1.0).is_nan());
        assert!((invcdf_sq(-8.0) + 2.0).abs() < 1e-15);
        assert!(invcdf_sqrt(4.0) > 1.0);
    }

    #[test]
    fn test_identity_is_identity() {
        let us = [0.0, 0.1, 0.5, 0.999];
        assert_eq!(Transform::Identity.apply_all(&us), us.to_vec());
    }

    #[test]
    fn test_cdf_clamped() {
        for t in ALL {
            let (lo, hi) = t.support();
            assert_eq!(t.cdf(lo - 1.0), 0.0, "{t}");
            assert_eq!(t.cdf(hi + 1.0), 1.0, "{t}");
            assert_eq!(t.pdf(hi + 1.0), 0.0, "{t}");
        }
    }

    #[test]
    fn test_pdf_integrates_to_one() {
        // Midpoint rule over the support.
        for t in ALL {
            let (lo, hi) = t.support();
            let n = 20_000;
            let h = (hi - lo) / n as f64;
            let integral: f64 = (0..n)
                .map(|i| t.pdf(lo + (i as f64 + 0.5) * h) * h)
                .sum();
            assert!((integral - 1.0).abs() < 1e-6, "{t}: ∫pdf = {integral}");
        }
    }

    #[test]
    fn test_mean_matches_pdf_moment() {
        for t in ALL {
            let (lo, hi) = t.support();
            let n = 20_000;
            let h = (hi - lo) / n as f64;
            let moment: f64 = (0..n)
                .map(|i| {
                    let x = lo + (i as f64 + 0.5) * h;
                    x * t.pdf(x) * h
                })
                .sum();
            assert!((moment - t.mean()).abs() < 1e-6, "{t}: {moment} vs {}", t.mean());
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<&str> = ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
