//! Smoothed circular sampling primitives.
//!
//! These drive the interleave engine: uniform draws are smoothed with a
//! closed-loop (circular-valued) moving mean, then mapped to discrete source
//! indices by darts sampling over cumulative proportion bins.

use num_complex::Complex;
use num_traits::Zero;
use rayon::prelude::*;
use std::ops::{Add, Sub};

/// Central moving sum of `radius` neighbors on each side.
///
/// Border elements use only the neighbors actually available: with radius 2
/// the output at index 1 sums the elements at 0..=3. Computed via an
/// exclusive scan, so the cost per element is one subtraction regardless of
/// the radius.
pub fn central_moving_sum<T>(input: &[T], radius: usize) -> Vec<T>
where
    T: Copy + Zero + Add<Output = T> + Sub<Output = T>,
{
    let n = input.len();
    let mut xscan = Vec::with_capacity(n + 1);
    let mut acc = T::zero();
    xscan.push(acc);
    for &value in input {
        acc = acc + value;
        xscan.push(acc);
    }

    (0..n)
        .map(|i| {
            let left = i.saturating_sub(radius);
            let right = (i + radius + 1).min(n);
            xscan[right] - xscan[left]
        })
        .collect()
}

/// Scale factor for the fixed-point unit vectors of
/// [`closed_loop_moving_mean`]. The moving sum adds up to `2 * radius + 1`
/// scaled components, which must fit in an `i64`; inputs longer than
/// `2^13` elements per window would overflow.
const UNIT_SCALE: f64 = (1u64 << 50) as f64;

/// Central moving mean on a circular value domain.
///
/// Values live on a loop spanning `[loop_min, loop_max)`: averaging is done
/// by summing the values' unit vectors on that circle and converting the
/// resulting angle back, which handles the wraparound discontinuity that a
/// plain arithmetic mean would smear. The loop closure applies to the value
/// domain only; the sequence borders are handled asymmetrically as in
/// [`central_moving_sum`], not wrapped.
///
/// The unit vectors are summed in scaled 64-bit integer arithmetic so
/// rounding errors do not accumulate over the prefix sums.
pub fn closed_loop_moving_mean(
    values: &[f64],
    loop_min: f64,
    loop_max: f64,
    radius: usize,
) -> Vec<f64> {
    debug_assert!(loop_min < loop_max);
    debug_assert!(values
        .iter()
        .all(|&v| (loop_min..=loop_max).contains(&v)));

    let tau = std::f64::consts::TAU;
    let width = loop_max - loop_min;

    // Map values to phase angles, then to scaled integer unit vectors.
    let unit_vectors: Vec<Complex<i64>> = values
        .iter()
        .map(|&v| {
            let angle = tau * (v - loop_min) / width;
            Complex::new(
                (UNIT_SCALE * angle.cos()) as i64,
                (UNIT_SCALE * angle.sin()) as i64,
            )
        })
        .collect();

    let summed = central_moving_sum(&unit_vectors, radius);

    // Back to angles in (0, 2*pi], then into the value domain.
    summed
        .iter()
        .map(|&c| {
            if c.re == 0 && c.im == 0 {
                return loop_min;
            }
            let mut angle = Complex::new(c.re as f64, c.im as f64).arg();
            if angle <= 0.0 {
                angle += tau;
            }
            loop_min + width * angle / tau
        })
        .collect()
}

/// Assign each bullet in [0, 1) to a bin sized by the given quotas.
///
/// Quotas are renormalized internally, so any positive total works. Each
/// bullet lands in the first cumulative bin whose upper boundary is not
/// below it; the final boundary is inclusive.
pub fn darts_sampling(quotas: &[f64], bullets: &[f64]) -> Vec<usize> {
    debug_assert!(!quotas.is_empty());

    let total: f64 = quotas.iter().sum();
    let mut cumulative = Vec::with_capacity(quotas.len());
    let mut acc = 0.0;
    for &quota in quotas {
        acc += quota / total;
        cumulative.push(acc);
    }

    let last = quotas.len() - 1;
    bullets
        .par_iter()
        .map(|&bullet| {
            cumulative
                .partition_point(|&boundary| boundary < bullet)
                .min(last)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_moving_sum_radius_zero_is_identity() {
        let input = [3i64, -1, 4, 1, 5];
        assert_eq!(central_moving_sum(&input, 0), input.to_vec());
    }

    #[test]
    fn test_central_moving_sum_borders() {
        let input = [1i64, 2, 3, 4, 5];
        assert_eq!(central_moving_sum(&input, 2), vec![6, 10, 15, 14, 12]);
    }

    #[test]
    fn test_central_moving_sum_radius_exceeding_length() {
        let input = [1i64, 2, 3];
        assert_eq!(central_moving_sum(&input, 10), vec![6, 6, 6]);
    }

    #[test]
    fn test_moving_mean_radius_zero_preserves_interior_values() {
        let input = [0.25, 0.5, 0.75];
        let out = closed_loop_moving_mean(&input, 0.0, 1.0, 0);
        for (a, b) in input.iter().zip(&out) {
            assert!((a - b).abs() < 1e-9, "{} became {}", a, b);
        }
    }

    #[test]
    fn test_moving_mean_constant_input_is_invariant() {
        let input = [0.4; 8];
        let out = closed_loop_moving_mean(&input, 0.0, 1.0, 3);
        for &v in &out {
            assert!((v - 0.4).abs() < 1e-9);
        }
    }

    #[test]
    fn test_moving_mean_averages_across_the_loop_seam() {
        // 0.95 and 0.05 straddle the wraparound; their circular mean sits
        // at the seam, not at the arithmetic mean 0.5.
        let input = [0.95, 0.05];
        let out = closed_loop_moving_mean(&input, 0.0, 1.0, 1);
        for &v in &out {
            let seam_distance = v.min(1.0 - v);
            assert!(seam_distance < 0.01, "value {} far from the seam", v);
        }
    }

    #[test]
    fn test_darts_sampling_proportionality() {
        let quotas = [1.0, 1.0, 2.0];
        let bullets: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
        assert_eq!(
            darts_sampling(&quotas, &bullets),
            vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 2]
        );
    }

    #[test]
    fn test_darts_sampling_renormalizes_quotas() {
        let bullets: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
        assert_eq!(
            darts_sampling(&[1.0, 1.0, 2.0], &bullets),
            darts_sampling(&[25.0, 25.0, 50.0], &bullets)
        );
    }

    #[test]
    fn test_darts_sampling_final_boundary_inclusive() {
        assert_eq!(darts_sampling(&[1.0, 1.0], &[1.0]), vec![1]);
    }
}
