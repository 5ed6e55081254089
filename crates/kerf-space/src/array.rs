//! Multi-component cell-centred storage.

use kerf_core::{CellBox, DataError, FieldAccess, IntVect};

/// Owned multi-component data over a [`CellBox`].
///
/// Component-major: all cells of component 0, then component 1, and so
/// on. Within a component the first axis is fastest. Used for field
/// state, centroid offsets (one component per axis) and slopes.
#[derive(Clone, Debug, PartialEq)]
pub struct CellArray<const D: usize> {
    bx: CellBox<D>,
    ncomp: usize,
    data: Vec<f64>,
}

impl<const D: usize> CellArray<D> {
    /// Every entry set to `fill`.
    pub fn new(bx: CellBox<D>, ncomp: usize, fill: f64) -> Self {
        Self {
            bx,
            ncomp,
            data: vec![fill; bx.num_cells() * ncomp],
        }
    }

    /// Build each entry from `f(cell, component)`.
    pub fn from_fn(bx: CellBox<D>, ncomp: usize, mut f: impl FnMut(IntVect<D>, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(bx.num_cells() * ncomp);
        for comp in 0..ncomp {
            data.extend(bx.iter().map(|cell| f(cell, comp)));
        }
        Self { bx, ncomp, data }
    }

    /// Wrap an existing buffer laid out component-major.
    ///
    /// Returns `Err(DataError::LengthMismatch)` unless
    /// `data.len() == bx.num_cells() * ncomp`.
    pub fn from_vec(bx: CellBox<D>, ncomp: usize, data: Vec<f64>) -> Result<Self, DataError> {
        let expected = bx.num_cells() * ncomp;
        if data.len() != expected {
            return Err(DataError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { bx, ncomp, data })
    }

    /// The box this array covers.
    pub fn cell_box(&self) -> CellBox<D> {
        self.bx
    }

    /// Components stored per cell.
    pub fn num_components(&self) -> usize {
        self.ncomp
    }

    fn index(&self, cell: IntVect<D>, comp: usize) -> Option<usize> {
        if comp >= self.ncomp {
            return None;
        }
        self.bx
            .offset_of(cell)
            .map(|n| comp * self.bx.num_cells() + n)
    }

    /// Value at `(cell, comp)`, or `None` outside the box or component range.
    pub fn get(&self, cell: IntVect<D>, comp: usize) -> Option<f64> {
        self.index(cell, comp).map(|i| self.data[i])
    }

    /// Mutable value at `(cell, comp)`.
    pub fn get_mut(&mut self, cell: IntVect<D>, comp: usize) -> Option<&mut f64> {
        self.index(cell, comp).map(move |i| &mut self.data[i])
    }

    /// All cells of one component.
    pub fn component_slice(&self, comp: usize) -> Option<&[f64]> {
        let n = self.bx.num_cells();
        (comp < self.ncomp).then(|| &self.data[comp * n..(comp + 1) * n])
    }

    /// The whole buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Check that the array covers `needed`; `input` names it in the error.
    pub fn check_covers(&self, needed: &CellBox<D>, input: &'static str) -> Result<(), DataError> {
        if self.bx.contains_box(needed) {
            Ok(())
        } else {
            Err(DataError::BoxNotCovered {
                input,
                needed: needed.to_string(),
                available: self.bx.to_string(),
            })
        }
    }

    /// Check that at least `ncomp` components are stored.
    pub fn check_components(&self, ncomp: usize, input: &'static str) -> Result<(), DataError> {
        if ncomp <= self.ncomp {
            Ok(())
        } else {
            Err(DataError::ComponentOutOfRange {
                input,
                component: ncomp.saturating_sub(1),
                available: self.ncomp,
            })
        }
    }
}

impl<const D: usize> FieldAccess<D> for CellArray<D> {
    /// Reads outside the box or component range return NaN, which the
    /// kernels propagate rather than sanitize.
    fn value(&self, cell: IntVect<D>, component: usize) -> f64 {
        debug_assert!(
            self.bx.contains(cell),
            "field read at {cell} outside {}",
            self.bx
        );
        self.get(cell, component).unwrap_or(f64::NAN)
    }

    fn num_components(&self) -> usize {
        self.ncomp
    }
}
