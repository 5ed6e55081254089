//! Kerf: slope limiting on cut-cell grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Kerf sub-crates. For most users, adding `kerf` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kerf::prelude::*;
//!
//! // A 16x16 box with a round body in the middle. Data covers one ghost
//! // layer around the valid box.
//! let valid = CellBox::<2>::cube(16).unwrap();
//! let geometry = EbGeometry::from_covered_mask(
//!     valid.grow(1),
//!     |iv| {
//!         let (x, y) = (iv[0] as f64 - 7.5, iv[1] as f64 - 7.5);
//!         x * x + y * y < 16.0
//!     },
//!     |_| [0.0, 0.0],
//! );
//! let state = CellArray::from_fn(valid.grow(1), 1, |iv, _| (iv[0] % 3) as f64);
//! let mut slopes = CellArray::new(valid, 2, 1.0);
//!
//! let limiter = SlopeLimiter::<2>::builder().build().unwrap();
//! let stats = limiter
//!     .limit_in_place(&valid, &state, &geometry, &mut slopes)
//!     .unwrap();
//! assert!(stats.cells_covered > 0);
//! assert!(stats.min_scale <= 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kerf-core` | Index vectors and boxes, access traits, errors |
//! | [`space`] | `kerf-space` | Cell arrays, flags, stencil, embedded-boundary geometry |
//! | [`limiter`] | `kerf-limiter` | Bound ratio, centroid limiter, box sweeps |
//!
//! # Features
//!
//! - `parallel`: run box sweeps on rayon.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Index space, access traits and errors (`kerf-core`).
///
/// Kernels read their inputs through [`types::FieldAccess`],
/// [`types::ConnectivityAccess`] and [`types::CentroidAccess`]; implement
/// these to run the limiter over your own storage.
pub use kerf_core as types;

/// Grid-side storage (`kerf-space`).
///
/// [`space::CellArray`] for values, [`space::FlagArray`] for connectivity,
/// and [`space::EbGeometry`] bundling flags with centroid offsets.
pub use kerf_space as space;

/// The limiter itself (`kerf-limiter`).
///
/// [`limiter::centroid_limiter`] for one cell, [`limiter::SlopeLimiter`]
/// for a whole box.
pub use kerf_limiter as limiter;

/// Common imports for typical Kerf usage.
///
/// ```rust
/// use kerf::prelude::*;
/// ```
pub mod prelude {
    // Index space and access traits
    pub use kerf_core::{CellBox, CentroidAccess, ConnectivityAccess, FieldAccess, IntVect};

    // Errors
    pub use kerf_core::{ConfigError, DataError, IndexError, LimiterError};

    // Storage
    pub use kerf_space::{stencil_offsets, CellArray, CellFlag, CellKind, EbGeometry, FlagArray};

    // Limiter
    pub use kerf_limiter::{
        apply_scales, bound_ratio, centroid_limiter, LimiterConfig, ScaleField, SlopeLimiter,
        SweepStats,
    };
}
