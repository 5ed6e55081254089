//! Embedded-boundary geometry: connectivity flags plus centroid offsets.

use crate::array::CellArray;
use crate::flag::{CellFlag, FlagArray};
use crate::stencil::stencil_offsets;
use kerf_core::{CellBox, CentroidAccess, ConnectivityAccess, DataError, IntVect};

/// Largest magnitude a centroid offset may take, in cell widths.
pub const MAX_CENTROID_OFFSET: f64 = 0.5;

/// Flags and centroid offsets over a shared [`CellBox`].
///
/// The centroid array stores one component per axis. The box normally
/// includes the ghost layer the limiter reads, i.e. `valid.grow(1)`.
#[derive(Clone, Debug)]
pub struct EbGeometry<const D: usize> {
    flags: FlagArray<D>,
    centroids: CellArray<D>,
}

impl<const D: usize> EbGeometry<D> {
    /// Every cell regular with its centroid at the nominal centre.
    pub fn all_regular(bx: CellBox<D>) -> Self {
        Self {
            flags: FlagArray::new(bx, CellFlag::regular()),
            centroids: CellArray::new(bx, D, 0.0),
        }
    }

    /// Build from a covered-cell predicate and a centroid function.
    ///
    /// A live cell is connected to a neighbour offset iff the neighbour is
    /// inside `bx` and not covered. Live cells that lose any neighbour are
    /// tagged single-valued. Centroids of live cells come from `centroid`,
    /// clamped to `[-0.5, 0.5]`; covered cells get zero.
    pub fn from_covered_mask(
        bx: CellBox<D>,
        covered: impl Fn(IntVect<D>) -> bool,
        centroid: impl Fn(IntVect<D>) -> [f64; D],
    ) -> Self {
        let flags = FlagArray::from_fn(bx, |cell| {
            if covered(cell) {
                return CellFlag::covered();
            }
            let mut flag = CellFlag::single_valued();
            let mut cut = false;
            for offset in stencil_offsets::<D>() {
                let nb = cell + offset;
                if !bx.contains(nb) || covered(nb) {
                    flag.set_disconnected(offset);
                    cut = true;
                }
            }
            if !cut {
                flag = CellFlag::regular();
            }
            flag
        });
        let centroids = CellArray::from_fn(bx, D, |cell, axis| {
            if covered(cell) {
                0.0
            } else {
                centroid(cell)[axis].clamp(-MAX_CENTROID_OFFSET, MAX_CENTROID_OFFSET)
            }
        });
        Self { flags, centroids }
    }

    /// Assemble from separately built parts.
    ///
    /// Both parts must cover the same box and `centroids` must carry `D`
    /// components.
    pub fn from_parts(flags: FlagArray<D>, centroids: CellArray<D>) -> Result<Self, DataError> {
        if flags.cell_box() != centroids.cell_box() {
            return Err(DataError::BoxMismatch {
                input: "centroids",
                expected: flags.cell_box().to_string(),
                actual: centroids.cell_box().to_string(),
            });
        }
        if centroids.num_components() != D {
            return Err(DataError::ComponentOutOfRange {
                input: "centroids",
                component: D - 1,
                available: centroids.num_components(),
            });
        }
        Ok(Self { flags, centroids })
    }

    /// The box this geometry covers.
    pub fn cell_box(&self) -> CellBox<D> {
        self.flags.cell_box()
    }

    /// Connectivity flags.
    pub fn flags(&self) -> &FlagArray<D> {
        &self.flags
    }

    /// Mutable connectivity flags, for carving extra cuts into a built
    /// geometry.
    pub fn flags_mut(&mut self) -> &mut FlagArray<D> {
        &mut self.flags
    }

    /// Centroid offsets, one component per axis.
    pub fn centroids(&self) -> &CellArray<D> {
        &self.centroids
    }

    /// Check that the geometry covers `needed`.
    pub fn check_covers(&self, needed: &CellBox<D>) -> Result<(), DataError> {
        self.flags.check_covers(needed)
    }
}

impl<const D: usize> ConnectivityAccess<D> for EbGeometry<D> {
    fn is_connected(&self, cell: IntVect<D>, offset: IntVect<D>) -> bool {
        self.flags.is_connected(cell, offset)
    }
}

impl<const D: usize> CentroidAccess<D> for EbGeometry<D> {
    fn centroid(&self, cell: IntVect<D>, axis: usize) -> f64 {
        debug_assert!(
            self.centroids.cell_box().contains(cell),
            "centroid read at {cell} outside {}",
            self.centroids.cell_box()
        );
        self.centroids.get(cell, axis).unwrap_or(f64::NAN)
    }
}

impl<const D: usize> CentroidAccess<D> for CellArray<D> {
    fn centroid(&self, cell: IntVect<D>, axis: usize) -> f64 {
        debug_assert!(
            self.cell_box().contains(cell),
            "centroid read at {cell} outside {}",
            self.cell_box()
        );
        self.get(cell, axis).unwrap_or(f64::NAN)
    }
}
