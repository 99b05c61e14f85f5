//! Evenly spaced evaluation grids.

/// Returns `n` evenly spaced points from `start` to `end`, both included.
///
/// Points are computed as `start + k·step` and the last one is pinned to
/// `end` so rounding never pushes it past the interval.
///
/// - `n == 0` yields an empty vector.
/// - `n == 1` yields `[start]`.
///
/// # Examples
/// ```
/// use invcdf_lab::grid::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { end } else { start + k as f64 * step })
                .collect()
        }
    }
}

/// Unit-interval grid used to draw transform curves.
pub fn unit_grid(n: usize) -> Vec<f64> {
    linspace(0.0, 1.0, n)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_increasing(n in 2_usize..2000) {
            let g = unit_grid(n);
            prop_assert!(g.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(g.iter().all(|x| (0.0..=1.0).contains(x)));
        }
    }
}
