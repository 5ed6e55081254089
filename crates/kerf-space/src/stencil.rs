//! The fixed 3^D neighbour stencil.
//!
//! Cut-cell connectivity is not limited to face neighbours, so every
//! offset in `{-1, 0, 1}^D` is visited, diagonals and the zero offset
//! included. The iterator is allocation-free and yields offsets with the
//! first axis fastest:
//!
//! ```text
//! 2D: (-1,-1) (0,-1) (1,-1) (-1,0) (0,0) (1,0) (-1,1) (0,1) (1,1)
//! ```

use kerf_core::IntVect;
use std::iter::FusedIterator;

/// Number of offsets in the 2D stencil.
pub const STENCIL_SIZE_2D: usize = 9;

/// Number of offsets in the 3D stencil.
pub const STENCIL_SIZE_3D: usize = 27;

/// Number of offsets in the `d`-dimensional stencil (`3^d`).
pub const fn stencil_size(d: usize) -> usize {
    let mut n = 1;
    let mut i = 0;
    while i < d {
        n *= 3;
        i += 1;
    }
    n
}

/// Iterate over every offset of the 3^D stencil, first axis fastest.
///
/// # Examples
///
/// ```
/// use kerf_core::IntVect;
/// use kerf_space::stencil_offsets;
///
/// let offsets: Vec<_> = stencil_offsets::<2>().collect();
/// assert_eq!(offsets.len(), 9);
/// assert_eq!(offsets[0], IntVect([-1, -1]));
/// assert_eq!(offsets[1], IntVect([0, -1]));
/// assert_eq!(offsets[4], IntVect([0, 0]));
/// ```
pub fn stencil_offsets<const D: usize>() -> StencilOffsets<D> {
    StencilOffsets { next: 0 }
}

/// Iterator returned by [`stencil_offsets`].
#[derive(Clone, Debug)]
pub struct StencilOffsets<const D: usize> {
    next: usize,
}

impl<const D: usize> StencilOffsets<D> {
    const LEN: usize = stencil_size(D);
}

impl<const D: usize> Iterator for StencilOffsets<D> {
    type Item = IntVect<D>;

    fn next(&mut self) -> Option<IntVect<D>> {
        if self.next >= Self::LEN {
            return None;
        }
        let mut rem = self.next;
        let mut offset = [0i32; D];
        for c in offset.iter_mut() {
            *c = (rem % 3) as i32 - 1;
            rem /= 3;
        }
        self.next += 1;
        Some(IntVect(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Self::LEN.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<const D: usize> ExactSizeIterator for StencilOffsets<D> {}

impl<const D: usize> FusedIterator for StencilOffsets<D> {}
