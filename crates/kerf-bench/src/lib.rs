//! Benchmark profiles for the Kerf limiter.
//!
//! Provides pre-built limiter inputs for benchmarks and examples:
//!
//! - [`reference_profile_2d`]: 128x128 box around a disk (16K cells)
//! - [`reference_profile_3d`]: 32^3 box around a ball (32K cells)
//! - [`stress_profile_2d`]: 512x512 box around a disk (~262K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kerf_core::CellBox;
use kerf_space::{CellArray, EbGeometry};
use kerf_test_utils::fixtures::{cylinder_2d, noisy_state, pseudo_random, sphere_3d};

/// Everything one sweep needs.
pub struct LimiterProfile<const D: usize> {
    /// The box whose slopes are limited.
    pub valid: CellBox<D>,
    /// Flags and centroids over `valid.grow(1)`.
    pub geometry: EbGeometry<D>,
    /// Cell values over `valid.grow(1)`.
    pub state: CellArray<D>,
    /// Unlimited slopes over `valid`, `ncomp * D` components.
    pub slopes: CellArray<D>,
}

/// Slopes in `[-1.5, 1.5)`, deterministic in `seed`.
fn noisy_slopes<const D: usize>(valid: CellBox<D>, ncomp: usize, seed: u64) -> CellArray<D> {
    let ncells = valid.num_cells() as u64;
    CellArray::from_fn(valid, ncomp * D, |cell, c| {
        let n = valid.offset_of(cell).unwrap_or(0) as u64;
        3.0 * pseudo_random((seed ^ 0xA5A5).wrapping_add(c as u64 * ncells + n)) - 1.5
    })
}

/// 128x128 disk profile with `ncomp` components.
pub fn reference_profile_2d(ncomp: usize, seed: u64) -> LimiterProfile<2> {
    let (valid, geometry) = cylinder_2d(128, 40.0);
    LimiterProfile {
        valid,
        state: noisy_state(valid, ncomp, seed),
        slopes: noisy_slopes(valid, ncomp, seed),
        geometry,
    }
}

/// 32^3 ball profile with `ncomp` components.
pub fn reference_profile_3d(ncomp: usize, seed: u64) -> LimiterProfile<3> {
    let (valid, geometry) = sphere_3d(32, 10.0);
    LimiterProfile {
        valid,
        state: noisy_state(valid, ncomp, seed),
        slopes: noisy_slopes(valid, ncomp, seed),
        geometry,
    }
}

/// 512x512 disk profile, single component.
pub fn stress_profile_2d(seed: u64) -> LimiterProfile<2> {
    let (valid, geometry) = cylinder_2d(512, 160.0);
    LimiterProfile {
        valid,
        state: noisy_state(valid, 1, seed),
        slopes: noisy_slopes(valid, 1, seed),
        geometry,
    }
}
