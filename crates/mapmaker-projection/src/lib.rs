#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the projection module.
pub mod error;

/// Axis-aligned rectangles used as projection domains.
pub mod interval;

/// Two-dimensional point type.
pub mod point;

/// Affine projections between two intervals.
pub mod projection;

pub use crate::error::ProjectionError;
pub use crate::interval::Interval;
pub use crate::point::Point2;
pub use crate::projection::Projection;
