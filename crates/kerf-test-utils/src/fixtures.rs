//! Reusable geometry and field fixtures.
//!
//! - [`cylinder_2d`] / [`sphere_3d`]: a round body embedded in an `n^D`
//!   box, with cut cells whose centroids lean away from the body.
//! - [`noisy_state`]: deterministic pseudo-random field values.
//! - [`pseudo_random`]: the hash the fixtures draw from.
//!
//! Every fixture returns the *valid* box together with data that covers
//! `valid.grow(1)`, which is what the limiter sweep requires.

use kerf_core::{CellBox, IntVect};
use kerf_space::{CellArray, EbGeometry};

/// Deterministic value in `[0, 1)` for index `i`.
pub fn pseudo_random(i: u64) -> f64 {
    let x = i
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407);
    let x = (x ^ (x >> 33)).wrapping_mul(2862933555777941757);
    (x >> 11) as f64 / (1u64 << 53) as f64
}

/// Centroid offset for a cell whose centre sits `dist` from the body
/// centre along unit direction `dir`. Cells within 1.5 widths of the
/// surface lean outward; the rest sit at the nominal centre.
fn lean<const D: usize>(dir: [f64; D], dist: f64, radius: f64) -> [f64; D] {
    let gap = dist - radius;
    if !(0.0..1.5).contains(&gap) {
        return [0.0; D];
    }
    let weight = 0.4 * (1.0 - gap / 1.5);
    dir.map(|d| d * weight)
}

/// The valid `n^D` box and a map from cell to (direction, distance) relative
/// to the box centre.
fn body<const D: usize>(n: u32) -> (CellBox<D>, impl Fn(IntVect<D>) -> ([f64; D], f64)) {
    let valid = CellBox::<D>::new(IntVect::zero(), IntVect::splat(n.max(1) as i32 - 1))
        .unwrap_or_else(|e| panic!("fixture box: {e}"));
    let centre = n as f64 / 2.0;
    let polar = move |iv: IntVect<D>| {
        let mut r = [0.0; D];
        for (axis, c) in r.iter_mut().enumerate() {
            *c = iv[axis] as f64 + 0.5 - centre;
        }
        let dist = r.iter().map(|c| c * c).sum::<f64>().sqrt();
        let dir = if dist > 0.0 { r.map(|c| c / dist) } else { [0.0; D] };
        (dir, dist)
    };
    (valid, polar)
}

/// A disk of `radius` cells centred in an `n x n` box.
pub fn cylinder_2d(n: u32, radius: f64) -> (CellBox<2>, EbGeometry<2>) {
    embedded_body::<2>(n, radius)
}

/// A ball of `radius` cells centred in an `n x n x n` box.
pub fn sphere_3d(n: u32, radius: f64) -> (CellBox<3>, EbGeometry<3>) {
    embedded_body::<3>(n, radius)
}

fn embedded_body<const D: usize>(n: u32, radius: f64) -> (CellBox<D>, EbGeometry<D>) {
    let (valid, polar) = body::<D>(n);
    let geom = EbGeometry::from_covered_mask(
        valid.grow(1),
        |iv| polar(iv).1 < radius,
        |iv| {
            let (dir, dist) = polar(iv);
            lean(dir, dist, radius)
        },
    );
    (valid, geom)
}

/// `ncomp` components of pseudo-random values in `[1, 2)` over
/// `valid.grow(1)`.
pub fn noisy_state<const D: usize>(valid: CellBox<D>, ncomp: usize, seed: u64) -> CellArray<D> {
    let bx = valid.grow(1);
    let ncells = bx.num_cells() as u64;
    CellArray::from_fn(bx, ncomp, |cell, comp| {
        let n = bx.offset_of(cell).unwrap_or(0) as u64;
        1.0 + pseudo_random(seed.wrapping_mul(31).wrapping_add(comp as u64 * ncells + n))
    })
}

/// Evaluate a linear profile at each cell's true centroid.
///
/// `value = base + sum(slope[axis] * (cell[axis] + centroid[axis]))`, so an
/// exact gradient of `slope` reproduces every neighbour value.
pub fn linear_state<const D: usize>(
    valid: CellBox<D>,
    geom: &EbGeometry<D>,
    base: f64,
    slope: [f64; D],
) -> CellArray<D> {
    let bx = valid.grow(1);
    CellArray::from_fn(bx, 1, |cell, _| {
        let mut v = base;
        for (axis, s) in slope.iter().enumerate() {
            let c = geom.centroids().get(cell, axis).unwrap_or(0.0);
            v += s * (cell[axis] as f64 + c);
        }
        v
    })
}

/// A slope array over `valid` with every cell set to `gradient` for each
/// of `ncomp` components (layout: component `n`, axis `a` at `n * D + a`).
pub fn uniform_slopes<const D: usize>(valid: CellBox<D>, ncomp: usize, gradient: [f64; D]) -> CellArray<D> {
    CellArray::from_fn(valid, ncomp * D, |_, c| gradient[c % D])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_random_is_deterministic_and_bounded() {
        for i in 0..1000 {
            let v = pseudo_random(i);
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, pseudo_random(i));
        }
        assert_ne!(pseudo_random(1), pseudo_random(2));
    }

    #[test]
    fn cylinder_has_all_cell_kinds() {
        let (valid, geom) = cylinder_2d(16, 4.0);
        assert_eq!(geom.cell_box(), valid.grow(1));
        let (regular, cut, covered) = geom.flags().census();
        assert!(regular > 0);
        assert!(cut > 0);
        assert!(covered > 0);
    }

    #[test]
    fn cut_cell_centroids_lean_outward() {
        let (_, geom) = cylinder_2d(16, 4.0);
        // Directly right of the body: centre (8,8), cell (12,8) sits 4.5 out.
        let cx = geom.centroids().get(IntVect([12, 8]), 0).unwrap();
        assert!(cx > 0.0, "expected outward lean, got {cx}");
    }

    #[test]
    fn noisy_state_covers_ghosts() {
        let valid = CellBox::<3>::cube(4).unwrap();
        let state = noisy_state(valid, 2, 7);
        assert_eq!(state.cell_box(), valid.grow(1));
        assert!(state.as_slice().iter().all(|v| (1.0..2.0).contains(v)));
    }
}
