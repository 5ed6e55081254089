//! Integer cell indices ([`IntVect`]) and inclusive index boxes ([`CellBox`]).

use crate::error::IndexError;
use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

/// Supported spatial dimensions.
pub const MIN_DIM: usize = 2;
/// Supported spatial dimensions.
pub const MAX_DIM: usize = 3;

/// Check that `D` is a supported spatial dimension (2 or 3).
pub fn check_dim<const D: usize>() -> Result<(), IndexError> {
    if (MIN_DIM..=MAX_DIM).contains(&D) {
        Ok(())
    } else {
        Err(IndexError::UnsupportedDimension { dim: D })
    }
}

/// A cell-centred integer index in `D` dimensions.
///
/// Component `0` is the fastest-varying axis (`i`), then `j`, then `k`.
/// Also used for neighbour offsets, where each component is in `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntVect<const D: usize>(pub [i32; D]);

impl<const D: usize> IntVect<D> {
    /// The origin / zero offset.
    pub const fn zero() -> Self {
        Self([0; D])
    }

    /// Every component set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self([v; D])
    }

    /// Unit offset along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= D`.
    pub fn unit(axis: usize) -> Self {
        let mut iv = [0; D];
        iv[axis] = 1;
        Self(iv)
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl<const D: usize> From<[i32; D]> for IntVect<D> {
    fn from(v: [i32; D]) -> Self {
        Self(v)
    }
}

impl<const D: usize> Index<usize> for IntVect<D> {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl<const D: usize> Add for IntVect<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        Self(out)
    }
}

impl<const D: usize> Sub for IntVect<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        Self(out)
    }
}

impl<const D: usize> Neg for IntVect<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|c| -c))
    }
}

impl<const D: usize> fmt::Display for IntVect<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, c) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// An inclusive, cell-centred index box `[lo, hi]`.
///
/// Cells are linearised with the first axis fastest, which is the layout
/// used by every array type in the workspace.
///
/// # Examples
///
/// ```
/// use kerf_core::{CellBox, IntVect};
///
/// let bx = CellBox::new(IntVect([0, 0]), IntVect([3, 1])).unwrap();
/// assert_eq!(bx.num_cells(), 8);
/// assert_eq!(bx.offset_of(IntVect([1, 1])), Some(5));
/// assert_eq!(bx.grow(1).num_cells(), 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBox<const D: usize> {
    lo: IntVect<D>,
    hi: IntVect<D>,
}

impl<const D: usize> CellBox<D> {
    /// Create a box from inclusive corners.
    ///
    /// Returns `Err(IndexError::InvertedBox)` if `hi < lo` on any axis and
    /// `Err(IndexError::UnsupportedDimension)` unless `D` is 2 or 3.
    pub fn new(lo: IntVect<D>, hi: IntVect<D>) -> Result<Self, IndexError> {
        check_dim::<D>()?;
        for axis in 0..D {
            if hi[axis] < lo[axis] {
                return Err(IndexError::InvertedBox {
                    axis,
                    lo: lo[axis],
                    hi: hi[axis],
                });
            }
        }
        Ok(Self { lo, hi })
    }

    /// A box of `n` cells per axis starting at the origin.
    ///
    /// Returns `Err(IndexError::ExtentOverflow)` if `n` exceeds `i32::MAX`.
    pub fn cube(n: u32) -> Result<Self, IndexError> {
        if n == 0 {
            return Err(IndexError::InvertedBox {
                axis: 0,
                lo: 0,
                hi: -1,
            });
        }
        let extent = i32::try_from(n).map_err(|_| IndexError::ExtentOverflow { extent: n })?;
        Self::new(IntVect::zero(), IntVect::splat(extent - 1))
    }

    /// Lower (inclusive) corner.
    pub fn lo(&self) -> IntVect<D> {
        self.lo
    }

    /// Upper (inclusive) corner.
    pub fn hi(&self) -> IntVect<D> {
        self.hi
    }

    /// Grow by `n` cells on every side. Used to describe ghost regions.
    pub fn grow(&self, n: i32) -> Self {
        Self {
            lo: self.lo - IntVect::splat(n),
            hi: self.hi + IntVect::splat(n),
        }
    }

    /// Number of cells along `axis`.
    pub fn length(&self, axis: usize) -> usize {
        (self.hi[axis] - self.lo[axis] + 1).max(0) as usize
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        (0..D).map(|axis| self.length(axis)).product()
    }

    /// Returns `true` if `iv` lies inside the box.
    pub fn contains(&self, iv: IntVect<D>) -> bool {
        (0..D).all(|axis| iv[axis] >= self.lo[axis] && iv[axis] <= self.hi[axis])
    }

    /// Returns `true` if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.lo) && self.contains(other.hi)
    }

    /// Flat offset of `iv`, first axis fastest. `None` outside the box.
    pub fn offset_of(&self, iv: IntVect<D>) -> Option<usize> {
        if !self.contains(iv) {
            return None;
        }
        let mut offset = 0usize;
        let mut stride = 1usize;
        for axis in 0..D {
            offset += (iv[axis] - self.lo[axis]) as usize * stride;
            stride *= self.length(axis);
        }
        Some(offset)
    }

    /// Inverse of [`offset_of`](Self::offset_of).
    ///
    /// `n` must be below [`num_cells`](Self::num_cells); larger values wrap
    /// on the last axis and produce a cell outside the box.
    pub fn cell_at(&self, n: usize) -> IntVect<D> {
        let mut rem = n;
        let mut iv = self.lo;
        for axis in 0..D {
            let len = self.length(axis);
            if axis + 1 == D {
                iv.0[axis] += rem as i32;
            } else {
                iv.0[axis] += (rem % len) as i32;
                rem /= len;
            }
        }
        iv
    }

    /// Iterate over every cell, first axis fastest.
    pub fn iter(&self) -> impl Iterator<Item = IntVect<D>> + '_ {
        (0..self.num_cells()).map(move |n| self.cell_at(n))
    }
}

impl<const D: usize> fmt::Display for CellBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── IntVect ────────────────────────────────────────────────

    #[test]
    fn intvect_arithmetic() {
        let a = IntVect([1, 2, 3]);
        let b = IntVect([-1, 0, 1]);
        assert_eq!(a + b, IntVect([0, 2, 4]));
        assert_eq!(a - b, IntVect([2, 2, 2]));
        assert_eq!(-b, IntVect([1, 0, -1]));
        assert_eq!(IntVect::<3>::unit(2), IntVect([0, 0, 1]));
        assert!(IntVect::<2>::zero().is_zero());
    }

    #[test]
    fn intvect_display() {
        assert_eq!(IntVect([4, -2]).to_string(), "(4, -2)");
        assert_eq!(IntVect([1, 2, 3]).to_string(), "(1, 2, 3)");
    }

    // ── CellBox construction ───────────────────────────────────

    #[test]
    fn new_rejects_inverted_box() {
        let err = CellBox::new(IntVect([0, 5]), IntVect([3, 4])).unwrap_err();
        assert_eq!(
            err,
            IndexError::InvertedBox {
                axis: 1,
                lo: 5,
                hi: 4
            }
        );
    }

    #[test]
    fn new_rejects_unsupported_dimension() {
        let err = CellBox::new(IntVect([0]), IntVect([3])).unwrap_err();
        assert_eq!(err, IndexError::UnsupportedDimension { dim: 1 });
        assert!(CellBox::new(IntVect([0; 4]), IntVect([1; 4])).is_err());
    }

    #[test]
    fn cube_zero_is_rejected() {
        assert!(CellBox::<2>::cube(0).is_err());
        assert_eq!(CellBox::<3>::cube(4).unwrap().num_cells(), 64);
    }

    #[test]
    fn cube_rejects_extent_beyond_i32() {
        assert_eq!(
            CellBox::<2>::cube(1u32 << 31).unwrap_err(),
            IndexError::ExtentOverflow { extent: 1u32 << 31 }
        );
        let bx = CellBox::<2>::cube(i32::MAX as u32).unwrap();
        assert_eq!(bx.hi(), IntVect::splat(i32::MAX - 1));
    }

    #[test]
    fn single_cell_box() {
        let bx = CellBox::new(IntVect([7, 7]), IntVect([7, 7])).unwrap();
        assert_eq!(bx.num_cells(), 1);
        assert_eq!(bx.offset_of(IntVect([7, 7])), Some(0));
        assert_eq!(bx.iter().collect::<Vec<_>>(), vec![IntVect([7, 7])]);
    }

    // ── Layout ─────────────────────────────────────────────────

    #[test]
    fn first_axis_is_fastest() {
        let bx = CellBox::new(IntVect([0, 0, 0]), IntVect([1, 2, 3])).unwrap();
        assert_eq!(bx.offset_of(IntVect([1, 0, 0])), Some(1));
        assert_eq!(bx.offset_of(IntVect([0, 1, 0])), Some(2));
        assert_eq!(bx.offset_of(IntVect([0, 0, 1])), Some(6));
        let cells: Vec<_> = bx.iter().take(3).collect();
        assert_eq!(
            cells,
            vec![IntVect([0, 0, 0]), IntVect([1, 0, 0]), IntVect([0, 1, 0])]
        );
    }

    #[test]
    fn grow_and_contains() {
        let bx = CellBox::<2>::cube(4).unwrap();
        let grown = bx.grow(1);
        assert_eq!(grown.lo(), IntVect([-1, -1]));
        assert_eq!(grown.hi(), IntVect([4, 4]));
        assert!(grown.contains_box(&bx));
        assert!(!bx.contains_box(&grown));
        assert!(!bx.contains(IntVect([4, 0])));
        assert_eq!(bx.offset_of(IntVect([-1, 0])), None);
    }

    // ── Property tests ─────────────────────────────────────────

    proptest! {
        #[test]
        fn offset_roundtrips_through_cell_at(
            lo_i in -5i32..5, lo_j in -5i32..5, lo_k in -5i32..5,
            li in 1i32..6, lj in 1i32..6, lk in 1i32..6,
        ) {
            let lo = IntVect([lo_i, lo_j, lo_k]);
            let hi = IntVect([lo_i + li - 1, lo_j + lj - 1, lo_k + lk - 1]);
            let bx = CellBox::new(lo, hi).unwrap();
            for n in 0..bx.num_cells() {
                let cell = bx.cell_at(n);
                prop_assert!(bx.contains(cell));
                prop_assert_eq!(bx.offset_of(cell), Some(n));
            }
        }
    }
}
