//! Bound-ratio evaluation.
//!
//! Given a value extrapolated from a cell to a neighbour centroid, find the
//! largest factor in `[0, 1]` that keeps the extrapolation inside the
//! admissible range:
//!
//! ```text
//! small = eps * max(|q_max|, |q_min|)
//! q_hat - q >  small  =>  min(1, (q_max - q) / (q_hat - q))
//! q_hat - q < -small  =>  min(1, (q_min - q) / (q_hat - q))
//! otherwise           =>  1
//! ```

/// Default scale-relative tolerance.
pub const EPSILON: f64 = 1e-12;

/// Largest scale in `[0, 1]` keeping `predicted` within
/// `[bound_min, bound_max]`, measured from `reference`.
///
/// `reference` is the cell's own value and is assumed to lie inside the
/// bounds. Differences smaller than `1e-12 * max(|bound_max|, |bound_min|)`
/// are treated as no change and return `1.0`.
///
/// # Examples
///
/// ```
/// use kerf_limiter::bound_ratio;
///
/// // Overshoot by a factor of two: halve the slope.
/// assert_eq!(bound_ratio(1.5, 1.0, 0.0, 0.5), 0.5);
/// // Inside the bounds: leave it alone.
/// assert_eq!(bound_ratio(0.7, 1.0, 0.0, 0.5), 1.0);
/// ```
#[inline]
pub fn bound_ratio(predicted: f64, bound_max: f64, bound_min: f64, reference: f64) -> f64 {
    bound_ratio_with(predicted, bound_max, bound_min, reference, EPSILON)
}

/// [`bound_ratio`] with an explicit tolerance.
#[inline]
pub fn bound_ratio_with(
    predicted: f64,
    bound_max: f64,
    bound_min: f64,
    reference: f64,
    epsilon: f64,
) -> f64 {
    let small = epsilon * bound_max.abs().max(bound_min.abs());
    let excess = predicted - reference;
    if excess > small {
        f64::min(1.0, (bound_max - reference) / excess)
    } else if excess < -small {
        f64::min(1.0, (bound_min - reference) / excess)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Fixed cases ────────────────────────────────────────────

    #[test]
    fn overshoot_is_scaled_back() {
        // (1 - 0.5) / (1.5 - 0.5)
        assert_eq!(bound_ratio(2.0, 1.0, 0.0, 0.5), 1.0 / 3.0);
        assert_eq!(bound_ratio(1.5, 1.0, 0.0, 0.5), 0.5);
    }

    #[test]
    fn undershoot_is_scaled_back() {
        // (0 - 0.5) / (-0.5 - 0.5)
        assert_eq!(bound_ratio(-0.5, 1.0, 0.0, 0.5), 0.5);
        assert_eq!(bound_ratio(-4.0, 10.0, -2.0, 0.0), 0.5);
    }

    #[test]
    fn hitting_a_bound_exactly_is_not_limited() {
        assert_eq!(bound_ratio(1.0, 1.0, 0.0, 0.5), 1.0);
        assert_eq!(bound_ratio(0.0, 1.0, 0.0, 0.5), 1.0);
    }

    #[test]
    fn prediction_at_reference_is_not_limited() {
        assert_eq!(bound_ratio(0.5, 1.0, 0.0, 0.5), 1.0);
        // Zero-width bounds make `small` zero; equality still returns 1.
        assert_eq!(bound_ratio(0.0, 0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn noise_below_tolerance_is_ignored() {
        let q = 1.0e6;
        assert_eq!(bound_ratio(q + 1e-7, q, q, q), 1.0);
        assert_eq!(bound_ratio(q - 1e-7, q, q, q), 1.0);
        // The same offset above tolerance collapses to zero.
        assert_eq!(bound_ratio(q + 1e-3, q, q, q), 0.0);
    }

    #[test]
    fn prediction_at_reference_against_collapsed_range_is_zero() {
        // Reference sits on the upper bound; any rise is disallowed.
        assert_eq!(bound_ratio(3.0, 2.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn explicit_epsilon() {
        // small = 0.1 * 0.52; the 0.05 overshoot falls inside it.
        assert_eq!(bound_ratio_with(0.55, 0.52, 0.0, 0.5, 0.1), 1.0);
        assert!(bound_ratio(0.55, 0.52, 0.0, 0.5) < 0.5);
        // small = 0.1; an excess of 1.0 is well outside it.
        assert_eq!(bound_ratio_with(1.5, 1.0, 0.0, 0.5, 0.1), 0.5);
    }

    // ── Property tests ─────────────────────────────────────────

    proptest! {
        #[test]
        fn ratio_is_in_unit_interval(
            lo in -100.0f64..100.0,
            width in 0.0f64..50.0,
            t in 0.0f64..=1.0,
            predicted in -300.0f64..300.0,
        ) {
            let hi = lo + width;
            let reference = lo + t * width;
            let alpha = bound_ratio(predicted, hi, lo, reference);
            prop_assert!((0.0..=1.0).contains(&alpha), "alpha = {}", alpha);
        }

        #[test]
        fn in_bounds_prediction_is_never_limited(
            lo in -100.0f64..100.0,
            width in 0.0f64..50.0,
            t in 0.0f64..=1.0,
            s in 0.0f64..=1.0,
        ) {
            let hi = lo + width;
            let reference = lo + t * width;
            let predicted = lo + s * width;
            prop_assert!(bound_ratio(predicted, hi, lo, reference) >= 1.0 - 1e-9);
        }

        #[test]
        fn scaled_prediction_respects_bounds(
            lo in -100.0f64..100.0,
            width in 0.0f64..50.0,
            t in 0.0f64..=1.0,
            predicted in -300.0f64..300.0,
        ) {
            let hi = lo + width;
            let reference = lo + t * width;
            let alpha = bound_ratio(predicted, hi, lo, reference);
            let limited = reference + alpha * (predicted - reference);
            let tol = 1e-9 * (1.0 + hi.abs().max(lo.abs()));
            prop_assert!(limited <= hi + tol, "{} > {}", limited, hi);
            prop_assert!(limited >= lo - tol, "{} < {}", limited, lo);
        }
    }
}
