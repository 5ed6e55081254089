//! Grid-side data structures for Kerf.
//!
//! The limiter kernels read their inputs through the traits in
//! [`kerf_core::access`]. This crate provides the concrete storage those
//! traits are normally backed by:
//!
//! - [`CellArray`]: multi-component cell-centred values (state, slopes,
//!   centroid offsets)
//! - [`CellFlag`] / [`FlagArray`]: cell kind plus 3x3x3 connectivity mask
//! - [`EbGeometry`]: flags and centroid offsets bundled over one box
//! - [`stencil_offsets`]: the fixed, allocation-free 3^D neighbour stencil

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod flag;
pub mod geometry;
pub mod stencil;

pub use array::CellArray;
pub use flag::{CellFlag, CellKind, FlagArray};
pub use geometry::{EbGeometry, MAX_CENTROID_OFFSET};
pub use stencil::{stencil_offsets, stencil_size, StencilOffsets, STENCIL_SIZE_2D, STENCIL_SIZE_3D};
