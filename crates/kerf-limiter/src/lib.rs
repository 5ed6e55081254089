//! Centroid-aware slope limiter for embedded-boundary grids.
//!
//! Cells cut by an embedded boundary have centroids that sit off the
//! regular grid. A reconstruction `q + grad(q) . dx` extrapolated to a
//! neighbour's true centroid can then overshoot the range spanned by the
//! two cell values. This crate computes per-axis scale factors that remove
//! those overshoots.
//!
//! # Layers
//!
//! 1. [`bound_ratio`]: the largest factor in `[0, 1]` keeping one
//!    extrapolation inside its bounds.
//! 2. [`centroid_limiter`]: scans the 3^D stencil of one cell and
//!    combines the per-neighbour ratios into one scale per axis.
//! 3. [`SlopeLimiter`]: sweeps a whole box of cells, validating the input
//!    shapes and logging a summary through `tracing`.
//!
//! The first two are total functions over plain values and the access
//! traits in [`kerf_core::access`]; only the sweep returns errors.
//!
//! # Features
//!
//! - `parallel`: evaluate the sweep on rayon. Results are identical to the
//!   serial path.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bound;
pub mod centroid;
pub mod config;
pub mod sweep;

pub use bound::{bound_ratio, bound_ratio_with, EPSILON};
pub use centroid::{apply_scales, centroid_limiter, centroid_limiter_with};
pub use config::LimiterConfig;
pub use sweep::{ScaleField, SlopeLimiter, SlopeLimiterBuilder, SweepStats};
