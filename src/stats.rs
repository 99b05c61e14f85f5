//! Descriptive statistics for sample sets.
//!
//! Used to check that a transformed sample looks like its target
//! distribution: moments, extremes, a fixed-bin histogram and the
//! Kolmogorov–Smirnov distance to an analytic CDF.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier-compensated summation, O(ε) error independent of n.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Histogram**: equal-width bins, right edge of the last bin inclusive.

/// Compensated sum of `data`.
///
/// # Algorithm
/// Neumaier's variant of Kahan summation: the branch picks whichever operand
/// is larger in magnitude so that the low-order bits of the smaller one go
/// into the compensation term.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik und
/// Mechanik* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use invcdf_lab::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use invcdf_lab::stats::mean;
/// assert!((mean(&[1.0, 2.0, 3.0, 4.0]).unwrap() - 2.5).abs() < 1e-15);
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Population variance (denominator `n`) via Welford's algorithm.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut count = 0.0_f64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / count)
}

/// Smallest value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Largest value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Kolmogorov–Smirnov distance between the empirical CDF of `data` and `cdf`.
///
/// ```text
/// D = max_i max( (i+1)/n − F(x₍ᵢ₎),  F(x₍ᵢ₎) − i/n )
/// ```
/// over the sorted sample `x₍₀₎ ≤ … ≤ x₍ₙ₋₁₎`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use invcdf_lab::stats::ks_distance;
/// let d = ks_distance(&[0.25, 0.75], |x| x.clamp(0.0, 1.0)).unwrap();
/// assert!((d - 0.25).abs() < 1e-15);
/// ```
pub fn ks_distance<F: Fn(f64) -> f64>(data: &[f64], cdf: F) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    let n = sorted.len() as f64;
    let d = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i as f64 + 1.0) / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0_f64, f64::max);
    Some(d)
}

/// Descriptive statistics of one sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl SampleSummary {
    /// Computes the summary.
    ///
    /// # Returns
    /// - `None` if `data` is empty or contains NaN/Inf.
    pub fn compute(data: &[f64]) -> Option<Self> {
        Some(Self {
            count: data.len(),
            mean: mean(data)?,
            variance: variance(data)?,
            min: min(data)?,
            max: max(data)?,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram over a closed range.
///
/// Bin `k` covers `[edges[k], edges[k+1])`; the last bin also includes its
/// right edge. Non-finite values and values outside the range are dropped.
///
/// # Examples
/// ```
/// use invcdf_lab::stats::Histogram;
/// let h = Histogram::new(&[0.0, 0.1, 0.5, 1.0], 2).unwrap();
/// assert_eq!(h.counts(), &[2, 2]);
/// assert_eq!(h.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    lo: f64,
    hi: f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Builds a histogram over the observed range of `data`.
    ///
    /// If every value is equal the range is widened to `[v − 0.5, v + 0.5]`.
    ///
    /// # Returns
    /// - `None` if `bins == 0` or `data` has no finite values.
    pub fn new(data: &[f64], bins: usize) -> Option<Self> {
        let finite = data.iter().copied().filter(|x| x.is_finite());
        let (lo, hi) = finite.fold(None, |acc: Option<(f64, f64)>, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })?;
        if lo == hi {
            return Self::with_range(data, bins, lo - 0.5, hi + 0.5);
        }
        Self::with_range(data, bins, lo, hi)
    }

    /// Builds a histogram over `[lo, hi]`.
    ///
    /// # Returns
    /// - `None` if `bins == 0`, the bounds are not finite, or `lo >= hi`.
    pub fn with_range(data: &[f64], bins: usize, lo: f64, hi: f64) -> Option<Self> {
        if bins == 0 || !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return None;
        }
        let mut counts = vec![0_u64; bins];
        let width = (hi - lo) / bins as f64;
        for &x in data {
            if !x.is_finite() || x < lo || x > hi {
                continue;
            }
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Some(Self { lo, hi, counts })
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// Number of values that landed in some bin.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `bins + 1` bin boundaries from `lo` to `hi`.
    pub fn edges(&self) -> Vec<f64> {
        let w = self.bin_width();
        (0..=self.counts.len())
            .map(|k| if k == self.counts.len() { self.hi } else { self.lo + k as f64 * w })
            .collect()
    }

    pub fn bin_centers(&self) -> Vec<f64> {
        let w = self.bin_width();
        (0..self.counts.len())
            .map(|k| self.lo + (k as f64 + 0.5) * w)
            .collect()
    }

    /// Counts normalised so that the histogram integrates to one.
    pub fn density(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let scale = 1.0 / (total as f64 * self.bin_width());
        self.counts.iter().map(|&c| c as f64 * scale).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_mean_rejects_non_finite() {
        assert_eq!(mean(&[1.0, f64::NAN]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY]), None);
    }

    #[test]
    fn test_variance_population() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(variance(&[3.0]), Some(0.0));
        assert_eq!(variance(&[]), None);
    }

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(5.0));
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn test_kahan_sum_cancellation() {
        assert_eq!(kahan_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
        let tenths = vec![0.1; 10];
        assert!((kahan_sum(&tenths) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_summary() {
        let s = SampleSummary::compute(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.count, 3);
        assert!((s.mean - 2.0).abs() < 1e-15);
        assert!((s.variance - 2.0 / 3.0).abs() < 1e-15);
        assert_eq!((s.min, s.max), (1.0, 3.0));
        assert!(SampleSummary::compute(&[]).is_none());
    }

    #[test]
    fn test_histogram_right_edge_inclusive() {
        let h = Histogram::with_range(&[0.0, 0.5, 1.0], 4, 0.0, 1.0).unwrap();
        assert_eq!(h.counts(), &[1, 0, 1, 1]);
    }

    #[test]
    fn test_histogram_drops_out_of_range() {
        let h = Histogram::with_range(&[-0.1, 0.2, 1.1, f64::NAN], 2, 0.0, 1.0).unwrap();
        assert_eq!(h.total(), 1);
    }

    #[test]
    fn test_histogram_constant_data() {
        let h = Histogram::new(&[2.0; 10], 5).unwrap();
        assert_eq!(h.range(), (1.5, 2.5));
        assert_eq!(h.total(), 10);
        assert_eq!(h.counts()[2], 10);
    }

    #[test]
    fn test_histogram_invalid() {
        assert!(Histogram::new(&[1.0, 2.0], 0).is_none());
        assert!(Histogram::new(&[], 10).is_none());
        assert!(Histogram::new(&[f64::NAN], 10).is_none());
        assert!(Histogram::with_range(&[1.0], 10, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_histogram_edges_and_centers() {
        let h = Histogram::with_range(&[], 4, 0.0, 2.0).unwrap();
        assert_eq!(h.edges(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(h.bin_centers(), vec![0.25, 0.75, 1.25, 1.75]);
        assert_eq!(h.density(), vec![0.0; 4]);
        assert_eq!(h.max_count(), 0);
    }

    #[test]
    fn test_histogram_density_integrates_to_one() {
        let data: Vec<f64> = (0..1000).map(|i| (i as f64 / 999.0).powi(2)).collect();
        let h = Histogram::new(&data, 20).unwrap();
        let area: f64 = h.density().iter().map(|d| d * h.bin_width()).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ks_distance_perfect_grid() {
        // Midpoints of n equal cells are at distance 1/(2n) from U(0,1).
        let n = 100;
        let data: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let d = ks_distance(&data, |x| x.clamp(0.0, 1.0)).unwrap();
        assert!((d - 0.005).abs() < 1e-12, "d = {d}");
    }

    #[test]
    fn test_ks_distance_wrong_distribution() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
        let d = ks_distance(&data, |x| (x * x).clamp(0.0, 1.0)).unwrap();
        assert!(d > 0.2, "d = {d}");
        assert_eq!(ks_distance(&[], |x| x), None);
    }
}
