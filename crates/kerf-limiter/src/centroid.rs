//! Centroid-aware directional limiter for one cell and one component.
//!
//! The unlimited gradient is used to extrapolate the cell value to the
//! true centroid of every connected neighbour in the 3^D stencil. Each
//! prediction is checked against the pair bounds `[min(q, q_nb), max(q, q_nb)]`.
//! A violation yields a bound ratio that caps every axis along which the
//! neighbour is actually displaced:
//!
//! ```text
//! delta[a] = centroid(nb, a) - centroid(cell, a) + offset[a]
//! q_hat    = q + sum(delta[a] * gradient[a])
//! if q_hat escapes [q_min, q_max]:
//!     r = bound_ratio(q_hat, q_max, q_min, q)
//!     for a with |delta[a]| > eps: scale[a] = min(scale[a], r)
//! ```
//!
//! The result is one scale per axis in `[0, 1]`; the caller multiplies it
//! into the gradient with [`apply_scales`].

use crate::bound::bound_ratio_with;
use crate::config::LimiterConfig;
use kerf_core::{CentroidAccess, ConnectivityAccess, FieldAccess, IntVect};
use kerf_space::stencil_offsets;

/// Per-axis scale factors keeping the reconstruction at `cell` monotone.
///
/// Uses the default [`LimiterConfig`]. `state`, `flags` and `centroids`
/// must answer for `cell` and its whole 3^D neighbourhood.
///
/// # Examples
///
/// ```
/// use kerf_core::{CellBox, IntVect};
/// use kerf_limiter::centroid_limiter;
/// use kerf_space::{CellArray, EbGeometry};
///
/// // q = i on a regular grid; a slope of 2 overshoots both x-neighbours.
/// let bx = CellBox::<2>::cube(3).unwrap();
/// let geom = EbGeometry::all_regular(bx);
/// let state = CellArray::from_fn(bx, 1, |iv, _| iv[0] as f64);
///
/// let scales = centroid_limiter(IntVect([1, 1]), 0, &state, &geom, &[2.0, 0.0], &geom);
/// assert_eq!(scales, [0.5, 0.5]);
/// ```
#[inline]
pub fn centroid_limiter<const D: usize, S, F, C>(
    cell: IntVect<D>,
    component: usize,
    state: &S,
    flags: &F,
    gradient: &[f64; D],
    centroids: &C,
) -> [f64; D]
where
    S: FieldAccess<D> + ?Sized,
    F: ConnectivityAccess<D> + ?Sized,
    C: CentroidAccess<D> + ?Sized,
{
    centroid_limiter_with(
        cell,
        component,
        state,
        flags,
        gradient,
        centroids,
        &LimiterConfig::default(),
    )
}

/// [`centroid_limiter`] with explicit configuration.
pub fn centroid_limiter_with<const D: usize, S, F, C>(
    cell: IntVect<D>,
    component: usize,
    state: &S,
    flags: &F,
    gradient: &[f64; D],
    centroids: &C,
    config: &LimiterConfig,
) -> [f64; D]
where
    S: FieldAccess<D> + ?Sized,
    F: ConnectivityAccess<D> + ?Sized,
    C: CentroidAccess<D> + ?Sized,
{
    let eps = config.epsilon;
    let mut scales = [1.0f64; D];
    let q = state.value(cell, component);

    for offset in stencil_offsets::<D>() {
        if !flags.is_connected(cell, offset) {
            continue;
        }
        if config.prune_collapsed {
            let alpha = scales.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if alpha <= 0.0 {
                break;
            }
        }

        let nb = cell + offset;
        let mut delta = [0.0f64; D];
        for (axis, d) in delta.iter_mut().enumerate() {
            *d = centroids.centroid(nb, axis) - centroids.centroid(cell, axis)
                + f64::from(offset[axis]);
        }

        // Left fold from q keeps the summation order of q + dx*gx + dy*gy + dz*gz.
        let q_hat = delta
            .iter()
            .zip(gradient)
            .fold(q, |acc, (d, g)| acc + d * g);

        let q_nb = state.value(nb, component);
        let q_max = q_nb.max(q);
        let q_min = q_nb.min(q);

        if q_hat - q_max > (eps * q_max).abs() || q_hat - q_min < -(eps * q_min).abs() {
            let new_lim = bound_ratio_with(q_hat, q_max, q_min, q, eps);
            for (s, d) in scales.iter_mut().zip(&delta) {
                if d.abs() > eps {
                    *s = s.min(new_lim);
                }
            }
        }
    }

    scales
}

/// Multiply per-axis scales into a gradient.
#[inline]
pub fn apply_scales<const D: usize>(gradient: &[f64; D], scales: &[f64; D]) -> [f64; D] {
    let mut out = *gradient;
    for (g, s) in out.iter_mut().zip(scales) {
        *g *= s;
    }
    out
}
