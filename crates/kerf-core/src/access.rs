//! Read-only data-access traits for per-cell kernels.
//!
//! Kernels never own grid data. They read field values, embedded-boundary
//! connectivity and centroid offsets through these traits, addressed by
//! integer cell index. Implementations must answer for the invoking cell
//! and every cell in its 3^D neighbourhood; ghost data is the caller's
//! responsibility.

use crate::index::IntVect;

/// Read-only access to a multi-component cell-centred field.
pub trait FieldAccess<const D: usize> {
    /// Value of `component` at `cell`.
    fn value(&self, cell: IntVect<D>, component: usize) -> f64;

    /// Number of components stored per cell.
    fn num_components(&self) -> usize;
}

/// Read-only access to embedded-boundary connectivity.
///
/// `is_connected(cell, offset)` answers whether `cell` and `cell + offset`
/// exchange fluxes through the cut geometry. `offset` has components in
/// `{-1, 0, 1}`; the zero offset reports whether the cell itself is live.
pub trait ConnectivityAccess<const D: usize> {
    /// Returns `true` if `cell` is connected to `cell + offset`.
    fn is_connected(&self, cell: IntVect<D>, offset: IntVect<D>) -> bool;
}

/// Read-only access to volumetric centroid offsets.
///
/// The offset is the displacement of the cell's centroid from its nominal
/// centre, in units of cell width, typically within `[-0.5, 0.5]`.
pub trait CentroidAccess<const D: usize> {
    /// Centroid offset of `cell` along `axis`.
    fn centroid(&self, cell: IntVect<D>, axis: usize) -> f64;
}

impl<const D: usize, T: FieldAccess<D> + ?Sized> FieldAccess<D> for &T {
    fn value(&self, cell: IntVect<D>, component: usize) -> f64 {
        (**self).value(cell, component)
    }

    fn num_components(&self) -> usize {
        (**self).num_components()
    }
}

impl<const D: usize, T: ConnectivityAccess<D> + ?Sized> ConnectivityAccess<D> for &T {
    fn is_connected(&self, cell: IntVect<D>, offset: IntVect<D>) -> bool {
        (**self).is_connected(cell, offset)
    }
}

impl<const D: usize, T: CentroidAccess<D> + ?Sized> CentroidAccess<D> for &T {
    fn centroid(&self, cell: IntVect<D>, axis: usize) -> f64 {
        (**self).centroid(cell, axis)
    }
}
