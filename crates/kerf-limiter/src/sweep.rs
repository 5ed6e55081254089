//! Box sweep driver: limit every slope in a valid region.
//!
//! The per-cell kernel is pure, so a sweep is a flat map over
//! `(component, cell)` pairs followed by a sequential multiply into the
//! slope array. With the `parallel` feature the map runs on rayon; the
//! result is identical to the serial path.
//!
//! Slope layout: the slope of component `n` along axis `a` is stored at
//! component `n * D + a` of the slope array.

use std::ops::Range;

use crate::centroid::centroid_limiter_with;
use crate::config::LimiterConfig;
use kerf_core::{check_dim, CellBox, ConfigError, FieldAccess, IntVect, LimiterError};
use kerf_space::{CellArray, EbGeometry};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Limits whole slope arrays over a valid box.
///
/// # Construction
///
/// ```
/// use kerf_limiter::{LimiterConfig, SlopeLimiter};
///
/// let limiter = SlopeLimiter::<2>::builder()
///     .config(LimiterConfig::default())
///     .components(0..3)
///     .build()
///     .unwrap();
/// assert_eq!(limiter.components(), Some(0..3));
/// ```
#[derive(Clone, Debug)]
pub struct SlopeLimiter<const D: usize> {
    config: LimiterConfig,
    components: Option<Range<usize>>,
}

/// Builder for [`SlopeLimiter`].
///
/// Everything is optional: the default config, and every component of
/// the state.
pub struct SlopeLimiterBuilder<const D: usize> {
    config: LimiterConfig,
    components: Option<Range<usize>>,
}

impl<const D: usize> SlopeLimiterBuilder<D> {
    /// Set the limiter configuration.
    pub fn config(mut self, config: LimiterConfig) -> Self {
        self.config = config;
        self
    }

    /// Restrict limiting to a range of state components.
    pub fn components(mut self, components: Range<usize>) -> Self {
        self.components = Some(components);
        self
    }

    /// Build the limiter, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `D` is not 2 or 3
    /// - the configuration fails [`LimiterConfig::validate`]
    /// - the component range is empty
    pub fn build(self) -> Result<SlopeLimiter<D>, LimiterError> {
        check_dim::<D>()?;
        self.config.validate()?;
        if self.components.as_ref().is_some_and(|r| r.is_empty()) {
            return Err(ConfigError::EmptyComponentRange.into());
        }
        Ok(SlopeLimiter {
            config: self.config,
            components: self.components,
        })
    }
}

impl<const D: usize> SlopeLimiter<D> {
    /// Create a new builder.
    pub fn builder() -> SlopeLimiterBuilder<D> {
        SlopeLimiterBuilder {
            config: LimiterConfig::default(),
            components: None,
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &LimiterConfig {
        &self.config
    }

    /// The component range, or `None` for all components.
    pub fn components(&self) -> Option<Range<usize>> {
        self.components.clone()
    }

    /// Compute per-axis scales for every cell of `valid`.
    ///
    /// `state` and `geometry` must cover `valid.grow(1)`; `slopes` must
    /// cover `valid` with `D` slope components per limited state
    /// component. Covered cells are not evaluated and get a scale of 1.
    ///
    /// # Errors
    ///
    /// [`LimiterError::Data`] when an input is too small.
    pub fn compute_scales(
        &self,
        valid: &CellBox<D>,
        state: &CellArray<D>,
        geometry: &EbGeometry<D>,
        slopes: &CellArray<D>,
    ) -> Result<ScaleField<D>, LimiterError> {
        let comps = self
            .components
            .clone()
            .unwrap_or(0..state.num_components());

        let halo = valid.grow(1);
        state.check_covers(&halo, "state")?;
        geometry.check_covers(&halo)?;
        geometry.centroids().check_covers(&halo, "centroids")?;
        slopes.check_covers(valid, "slopes")?;
        state.check_components(comps.end, "state")?;
        slopes.check_components(comps.end * D, "slopes")?;

        let _span = tracing::debug_span!(
            "compute_scales",
            dim = D,
            cells = valid.num_cells(),
            components = comps.len(),
        )
        .entered();

        let ncells = valid.num_cells();
        let total = ncells * comps.len();
        let config = self.config;
        let eval = |i: usize| -> ([f64; D], bool) {
            let comp = comps.start + i / ncells;
            let cell = valid.cell_at(i % ncells);
            scale_cell(cell, comp, state, geometry, slopes, &config)
        };

        #[cfg(feature = "parallel")]
        let (scales, finite): (Vec<[f64; D]>, Vec<bool>) =
            (0..total).into_par_iter().map(eval).unzip();
        #[cfg(not(feature = "parallel"))]
        let (scales, finite): (Vec<[f64; D]>, Vec<bool>) = (0..total).map(eval).unzip();

        let field = ScaleField {
            bx: *valid,
            components: comps,
            covered: valid
                .iter()
                .map(|cell| geometry.flags().get(cell).is_some_and(|f| f.is_covered()))
                .collect(),
            non_finite: finite.iter().filter(|ok| !**ok).count(),
            scales,
        };

        let stats = field.stats();
        debug!(
            visited = stats.cells_visited,
            covered = stats.cells_covered,
            limited = stats.cells_limited,
            min_scale = stats.min_scale,
            "scales computed"
        );
        if stats.non_finite > 0 {
            warn!(
                count = stats.non_finite,
                "non-finite state or slope values; their scales were left at 1"
            );
        }
        Ok(field)
    }

    /// Compute scales and multiply them into `slopes`.
    ///
    /// # Errors
    ///
    /// Same as [`compute_scales`](Self::compute_scales); `slopes` is left
    /// untouched on error.
    pub fn limit_in_place(
        &self,
        valid: &CellBox<D>,
        state: &CellArray<D>,
        geometry: &EbGeometry<D>,
        slopes: &mut CellArray<D>,
    ) -> Result<SweepStats, LimiterError> {
        let field = self.compute_scales(valid, state, geometry, slopes)?;
        field.apply(slopes);
        Ok(field.stats())
    }
}

/// Scales for one pair, and whether its own value and slope were finite.
fn scale_cell<const D: usize>(
    cell: IntVect<D>,
    comp: usize,
    state: &CellArray<D>,
    geometry: &EbGeometry<D>,
    slopes: &CellArray<D>,
    config: &LimiterConfig,
) -> ([f64; D], bool) {
    if geometry.flags().get(cell).is_some_and(|f| f.is_covered()) {
        return ([1.0; D], true);
    }
    let mut gradient = [0.0; D];
    for (axis, g) in gradient.iter_mut().enumerate() {
        *g = slopes.get(cell, comp * D + axis).unwrap_or(f64::NAN);
    }
    let finite = state.value(cell, comp).is_finite() && gradient.iter().all(|g| g.is_finite());
    let scales = centroid_limiter_with(cell, comp, state, geometry, &gradient, geometry, config);
    (scales, finite)
}

/// Per-cell, per-component scale vectors produced by a sweep.
#[derive(Clone, Debug)]
pub struct ScaleField<const D: usize> {
    bx: CellBox<D>,
    components: Range<usize>,
    covered: Vec<bool>,
    non_finite: usize,
    // (comp - components.start) * ncells + offset
    scales: Vec<[f64; D]>,
}

impl<const D: usize> ScaleField<D> {
    /// The valid box the scales were computed over.
    pub fn cell_box(&self) -> CellBox<D> {
        self.bx
    }

    /// The limited component range.
    pub fn components(&self) -> Range<usize> {
        self.components.clone()
    }

    /// Scales at `(cell, comp)`, or `None` outside the box or range.
    pub fn get(&self, cell: IntVect<D>, comp: usize) -> Option<[f64; D]> {
        if !self.components.contains(&comp) {
            return None;
        }
        let n = self.bx.offset_of(cell)?;
        Some(self.scales[(comp - self.components.start) * self.bx.num_cells() + n])
    }

    /// Multiply the scales into `slopes` using the `n * D + a` layout.
    ///
    /// `slopes` must cover the scale box; cells outside it are skipped.
    pub fn apply(&self, slopes: &mut CellArray<D>) {
        let ncells = self.bx.num_cells();
        for (i, scale) in self.scales.iter().enumerate() {
            let comp = self.components.start + i / ncells;
            let cell = self.bx.cell_at(i % ncells);
            for (axis, s) in scale.iter().enumerate() {
                if let Some(g) = slopes.get_mut(cell, comp * D + axis) {
                    *g *= s;
                }
            }
        }
    }

    /// Summary of the sweep.
    pub fn stats(&self) -> SweepStats {
        let ncells = self.bx.num_cells();
        let mut stats = SweepStats {
            cells_visited: 0,
            cells_covered: 0,
            cells_limited: 0,
            non_finite: self.non_finite,
            min_scale: 1.0,
        };
        for (i, scale) in self.scales.iter().enumerate() {
            if self.covered[i % ncells] {
                stats.cells_covered += 1;
                continue;
            }
            stats.cells_visited += 1;
            if scale.iter().any(|&s| s < 1.0) {
                stats.cells_limited += 1;
            }
            stats.min_scale = scale.iter().copied().fold(stats.min_scale, f64::min);
        }
        stats
    }
}

/// Counts from one sweep, per `(cell, component)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepStats {
    /// Pairs the kernel evaluated.
    pub cells_visited: usize,
    /// Pairs skipped because the cell is covered.
    pub cells_covered: usize,
    /// Pairs with at least one axis scale below 1.
    pub cells_limited: usize,
    /// Evaluated pairs whose own value or slope was NaN or infinite.
    ///
    /// NaN comparisons are false, so such a pair is never limited.
    pub non_finite: usize,
    /// Smallest axis scale over evaluated pairs; 1 when nothing was limited.
    pub min_scale: f64,
}
