//! Per-cell embedded-boundary flags.
//!
//! A [`CellFlag`] packs the cell kind and a 27-bit connectivity mask into
//! one `u32`. Bit `(di+1) + 3(dj+1) + 9(dk+1)` is set when the cell is
//! connected to its neighbour at offset `(di, dj, dk)`. 2D grids use the
//! `dk = 0` plane only.

use crate::stencil::stencil_offsets;
use kerf_core::{CellBox, ConnectivityAccess, DataError, IntVect};
use smallvec::SmallVec;
use std::fmt;

const NEIGHBOUR_MASK: u32 = (1 << 27) - 1;
const KIND_SHIFT: u32 = 27;
const KIND_MASK: u32 = 0b11 << KIND_SHIFT;

/// Classification of a cell relative to the embedded boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Fully inside the fluid; unit volume, nominal centroid.
    Regular,
    /// Cut by the boundary; one fluid region per cell.
    SingleValued,
    /// Entirely inside the body; carries no fluid.
    Covered,
}

impl CellKind {
    fn bits(self) -> u32 {
        let code: u32 = match self {
            Self::Regular => 0,
            Self::SingleValued => 1,
            Self::Covered => 2,
        };
        code << KIND_SHIFT
    }
}

/// Compact embedded-boundary record for one cell.
///
/// # Examples
///
/// ```
/// use kerf_core::IntVect;
/// use kerf_space::{CellFlag, CellKind};
///
/// let mut flag = CellFlag::single_valued();
/// flag.set_disconnected(IntVect([1, 0]));
/// assert_eq!(flag.kind(), CellKind::SingleValued);
/// assert!(!flag.is_connected(IntVect([1, 0])));
/// assert!(flag.is_connected(IntVect([-1, 0])));
/// assert_eq!(flag.num_connected::<2>(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellFlag(u32);

/// Bit position of `offset`, or `None` when it leaves the 3x3x3 stencil.
fn neighbour_bit<const D: usize>(offset: IntVect<D>) -> Option<u32> {
    if D > 3 {
        return None;
    }
    let mut bit = 0u32;
    let mut stride = 1u32;
    for axis in 0..3 {
        let c = if axis < D { offset[axis] } else { 0 };
        if !(-1..=1).contains(&c) {
            return None;
        }
        bit += (c + 1) as u32 * stride;
        stride *= 3;
    }
    Some(bit)
}

impl CellFlag {
    /// A regular cell, connected to every neighbour and to itself.
    pub const fn regular() -> Self {
        Self(NEIGHBOUR_MASK)
    }

    /// A covered cell, connected to nothing.
    pub const fn covered() -> Self {
        Self(2 << KIND_SHIFT)
    }

    /// A cut cell, initially connected to every neighbour.
    ///
    /// Builders then clear the offsets the geometry blocks.
    pub const fn single_valued() -> Self {
        Self(NEIGHBOUR_MASK | (1 << KIND_SHIFT))
    }

    /// Cell kind.
    pub fn kind(&self) -> CellKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => CellKind::Regular,
            1 => CellKind::SingleValued,
            _ => CellKind::Covered,
        }
    }

    /// Change the cell kind, leaving connectivity untouched.
    pub fn set_kind(&mut self, kind: CellKind) {
        self.0 = (self.0 & !KIND_MASK) | kind.bits();
    }

    /// Returns `true` for [`CellKind::Regular`].
    pub fn is_regular(&self) -> bool {
        self.kind() == CellKind::Regular
    }

    /// Returns `true` for [`CellKind::SingleValued`].
    pub fn is_single_valued(&self) -> bool {
        self.kind() == CellKind::SingleValued
    }

    /// Returns `true` for [`CellKind::Covered`].
    pub fn is_covered(&self) -> bool {
        self.kind() == CellKind::Covered
    }

    /// Returns `true` if connected to the neighbour at `offset`.
    ///
    /// Offsets outside `{-1, 0, 1}^D` are never connected.
    pub fn is_connected<const D: usize>(&self, offset: IntVect<D>) -> bool {
        neighbour_bit(offset).is_some_and(|bit| self.0 & (1 << bit) != 0)
    }

    /// Mark the neighbour at `offset` as connected.
    pub fn set_connected<const D: usize>(&mut self, offset: IntVect<D>) {
        if let Some(bit) = neighbour_bit(offset) {
            self.0 |= 1 << bit;
        }
    }

    /// Mark the neighbour at `offset` as disconnected.
    pub fn set_disconnected<const D: usize>(&mut self, offset: IntVect<D>) {
        if let Some(bit) = neighbour_bit(offset) {
            self.0 &= !(1 << bit);
        }
    }

    /// Number of connected offsets in the 3^D stencil, self included.
    pub fn num_connected<const D: usize>(&self) -> usize {
        stencil_offsets::<D>()
            .filter(|&o| self.is_connected(o))
            .count()
    }

    /// Connected offsets in stencil order.
    pub fn connected_offsets<const D: usize>(&self) -> SmallVec<[IntVect<D>; 27]> {
        stencil_offsets::<D>()
            .filter(|&o| self.is_connected(o))
            .collect()
    }
}

impl Default for CellFlag {
    fn default() -> Self {
        Self::regular()
    }
}

impl fmt::Debug for CellFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellFlag")
            .field("kind", &self.kind())
            .field("mask", &format_args!("{:#029b}", self.0 & NEIGHBOUR_MASK))
            .finish()
    }
}

/// Per-cell [`CellFlag`] storage over a [`CellBox`].
///
/// Cells outside the box read as covered.
#[derive(Clone, Debug)]
pub struct FlagArray<const D: usize> {
    bx: CellBox<D>,
    flags: Vec<CellFlag>,
}

impl<const D: usize> FlagArray<D> {
    /// Every cell set to `flag`.
    pub fn new(bx: CellBox<D>, flag: CellFlag) -> Self {
        Self {
            bx,
            flags: vec![flag; bx.num_cells()],
        }
    }

    /// Build each cell's flag from a closure.
    pub fn from_fn(bx: CellBox<D>, mut f: impl FnMut(IntVect<D>) -> CellFlag) -> Self {
        let flags = bx.iter().map(&mut f).collect();
        Self { bx, flags }
    }

    /// The box this array covers.
    pub fn cell_box(&self) -> CellBox<D> {
        self.bx
    }

    /// Flag at `cell`, or `None` outside the box.
    pub fn get(&self, cell: IntVect<D>) -> Option<CellFlag> {
        self.bx.offset_of(cell).map(|n| self.flags[n])
    }

    /// Mutable flag at `cell`, or `None` outside the box.
    pub fn get_mut(&mut self, cell: IntVect<D>) -> Option<&mut CellFlag> {
        self.bx.offset_of(cell).map(|n| &mut self.flags[n])
    }

    /// Disconnect `a` from `b` in both directions.
    ///
    /// `b - a` must be a stencil offset; otherwise nothing changes.
    pub fn disconnect_pair(&mut self, a: IntVect<D>, b: IntVect<D>) {
        let offset = b - a;
        if let Some(flag) = self.get_mut(a) {
            flag.set_disconnected(offset);
        }
        if let Some(flag) = self.get_mut(b) {
            flag.set_disconnected(-offset);
        }
    }

    /// Check that the array covers `needed`.
    pub fn check_covers(&self, needed: &CellBox<D>) -> Result<(), DataError> {
        if self.bx.contains_box(needed) {
            Ok(())
        } else {
            Err(DataError::BoxNotCovered {
                input: "flags",
                needed: needed.to_string(),
                available: self.bx.to_string(),
            })
        }
    }

    /// Number of cells of each kind, as `(regular, single_valued, covered)`.
    pub fn census(&self) -> (usize, usize, usize) {
        self.flags
            .iter()
            .fold((0, 0, 0), |(r, s, c), flag| match flag.kind() {
                CellKind::Regular => (r + 1, s, c),
                CellKind::SingleValued => (r, s + 1, c),
                CellKind::Covered => (r, s, c + 1),
            })
    }
}

impl<const D: usize> ConnectivityAccess<D> for FlagArray<D> {
    fn is_connected(&self, cell: IntVect<D>, offset: IntVect<D>) -> bool {
        debug_assert!(self.bx.contains(cell), "flag read at {cell} outside {}", self.bx);
        self.get(cell).is_some_and(|flag| flag.is_connected(offset))
    }
}
