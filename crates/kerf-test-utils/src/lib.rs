//! Test utilities and mock accessors for Kerf development.
//!
//! Provides HashMap-backed mock implementations of the access traits
//! ([`FieldAccess`], [`ConnectivityAccess`], [`CentroidAccess`]) for
//! hand-built kernel scenarios, a [`CountingField`] wrapper for checking
//! how much data a kernel touches, and geometry fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use kerf_core::{CentroidAccess, ConnectivityAccess, FieldAccess, IntVect};

/// Mock implementation of [`FieldAccess`].
///
/// Cells not explicitly set read as `default`. Pre-populate values with
/// [`set`](MockField::set) before passing to code under test.
pub struct MockField<const D: usize> {
    values: HashMap<(IntVect<D>, usize), f64>,
    default: f64,
    ncomp: usize,
}

impl<const D: usize> MockField<D> {
    pub fn new(ncomp: usize, default: f64) -> Self {
        Self {
            values: HashMap::new(),
            default,
            ncomp,
        }
    }

    /// Set the value of one component at one cell.
    pub fn set(&mut self, cell: impl Into<IntVect<D>>, comp: usize, value: f64) -> &mut Self {
        self.values.insert((cell.into(), comp), value);
        self
    }
}

impl<const D: usize> FieldAccess<D> for MockField<D> {
    fn value(&self, cell: IntVect<D>, component: usize) -> f64 {
        self.values
            .get(&(cell, component))
            .copied()
            .unwrap_or(self.default)
    }

    fn num_components(&self) -> usize {
        self.ncomp
    }
}

/// Mock implementation of [`ConnectivityAccess`].
///
/// Answers `default` unless an `(cell, offset)` pair was overridden.
pub struct MockConnectivity<const D: usize> {
    overrides: HashMap<(IntVect<D>, IntVect<D>), bool>,
    default: bool,
}

impl<const D: usize> MockConnectivity<D> {
    /// Every cell connected to every neighbour.
    pub fn all_connected() -> Self {
        Self {
            overrides: HashMap::new(),
            default: true,
        }
    }

    /// No connections at all.
    pub fn none_connected() -> Self {
        Self {
            overrides: HashMap::new(),
            default: false,
        }
    }

    pub fn connect(&mut self, cell: impl Into<IntVect<D>>, offset: impl Into<IntVect<D>>) -> &mut Self {
        self.overrides.insert((cell.into(), offset.into()), true);
        self
    }

    pub fn disconnect(&mut self, cell: impl Into<IntVect<D>>, offset: impl Into<IntVect<D>>) -> &mut Self {
        self.overrides.insert((cell.into(), offset.into()), false);
        self
    }

    /// Disconnect `a` and `b` from each other in both directions.
    pub fn disconnect_pair(&mut self, a: impl Into<IntVect<D>>, b: impl Into<IntVect<D>>) -> &mut Self {
        let (a, b) = (a.into(), b.into());
        self.disconnect(a, b - a);
        self.disconnect(b, a - b)
    }
}

impl<const D: usize> ConnectivityAccess<D> for MockConnectivity<D> {
    fn is_connected(&self, cell: IntVect<D>, offset: IntVect<D>) -> bool {
        self.overrides
            .get(&(cell, offset))
            .copied()
            .unwrap_or(self.default)
    }
}

/// Mock implementation of [`CentroidAccess`]. Unset cells sit at the
/// nominal centre.
pub struct MockCentroids<const D: usize> {
    offsets: HashMap<IntVect<D>, [f64; D]>,
}

impl<const D: usize> MockCentroids<D> {
    pub fn new() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }

    pub fn set(&mut self, cell: impl Into<IntVect<D>>, offset: [f64; D]) -> &mut Self {
        self.offsets.insert(cell.into(), offset);
        self
    }
}

impl<const D: usize> Default for MockCentroids<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> CentroidAccess<D> for MockCentroids<D> {
    fn centroid(&self, cell: IntVect<D>, axis: usize) -> f64 {
        self.offsets.get(&cell).map_or(0.0, |c| c[axis])
    }
}

/// Wraps a [`FieldAccess`] and counts `value()` calls.
///
/// Uses `AtomicUsize` so the wrapper stays `Sync` for parallel sweeps.
pub struct CountingField<F> {
    inner: F,
    reads: AtomicUsize,
}

impl<F> CountingField<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    /// How many values have been read.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Reset the read counter.
    pub fn reset(&self) {
        self.reads.store(0, Ordering::Relaxed);
    }
}

impl<const D: usize, F: FieldAccess<D>> FieldAccess<D> for CountingField<F> {
    fn value(&self, cell: IntVect<D>, component: usize) -> f64 {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.inner.value(cell, component)
    }

    fn num_components(&self) -> usize {
        self.inner.num_components()
    }
}
