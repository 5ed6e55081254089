//! Core types and traits for the Kerf cut-cell toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Kerf workspace:
//! integer index vectors and boxes, the read-only access traits through
//! which kernels see field, connectivity and centroid data, and the
//! error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod error;
pub mod index;

pub use access::{CentroidAccess, ConnectivityAccess, FieldAccess};
pub use error::{ConfigError, DataError, IndexError, LimiterError};
pub use index::{check_dim, CellBox, IntVect};
