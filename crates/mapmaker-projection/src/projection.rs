//! Per-axis affine projections between two rectangles.
//!
//! A [`Projection`] maps points from a *source* [`Interval`] onto a *target*
//! [`Interval`] by independent linear interpolation along each axis:
//!
//! ```text
//! x' = target.left.x + (target.diff_x / source.diff_x) * (x - source.left.x)
//! y' = target.left.y + (target.diff_y / source.diff_y) * (y - source.left.y)
//! ```
//!
//! The corners of the source map onto the corners of the target and every
//! point in between proportionally. Points outside the source are
//! extrapolated, not clamped. The two axes are scaled independently, so the
//! aspect ratio is not preserved.
//!
//! # Variants
//!
//! * [`Projection::new`] - explicit source and target.
//! * [`Projection::identity`] - target equals source, returns inputs untouched.
//! * [`Projection::unit`] - target is the unit square `(0, 0)-(1, 1)`.
//! * [`Projection::symmetric_unit`] - target is `(-1, -1)-(1, 1)`.
//!
//! # Example: data coordinates to screen pixels
//!
//! ```
//! use mapmaker_projection::{Interval, Projection};
//!
//! let data = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
//! let screen = Interval::new(100.0, 100.0, 200.0, 300.0).unwrap();
//!
//! let projection = Projection::new(data, screen);
//! assert_eq!(projection.translate(5.0, 10.0), (150.0, 200.0));
//! ```

use num_traits::Float;

use crate::interval::Interval;
use crate::point::Point2;

/// How a projection evaluates `translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Mapping<T> {
    /// Inputs are returned unchanged.
    Identity,
    /// Independent scale per axis.
    Affine {
        scale_x: AxisScale<T>,
        scale_y: AxisScale<T>,
    },
}

/// Scale applied to the offset from `source.left` along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AxisScale<T> {
    /// `target.diff / source.diff` as a normal float.
    Ratio(T),
    /// The ratio overflows or underflows, so the offset is normalized first.
    Normalized { source_diff: T, target_diff: T },
}

impl<T: Float> AxisScale<T> {
    fn new(source_diff: T, target_diff: T) -> Self {
        let ratio = target_diff / source_diff;
        if ratio.is_normal() {
            Self::Ratio(ratio)
        } else {
            Self::Normalized {
                source_diff,
                target_diff,
            }
        }
    }

    #[inline]
    fn apply(self, offset: T) -> T {
        match self {
            Self::Ratio(ratio) => ratio * offset,
            Self::Normalized {
                source_diff,
                target_diff,
            } => offset / source_diff * target_diff,
        }
    }
}

/// An immutable affine mapping from a source rectangle onto a target rectangle.
///
/// Instances are plain values and can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection<T = f64> {
    source: Interval<T>,
    target: Interval<T>,
    mapping: Mapping<T>,
}

impl<T: Float> Projection<T> {
    /// Create a projection from `source` onto `target`.
    ///
    /// Both intervals are already validated, so construction cannot fail.
    /// When the width or height ratio of the two intervals is not representable
    /// as a normal float, that axis divides by the source extent before
    /// multiplying by the target extent instead.
    ///
    /// # Arguments
    ///
    /// * `source` - The domain of the input points.
    /// * `target` - The domain of the output points.
    pub fn new(source: Interval<T>, target: Interval<T>) -> Self {
        let scale_x = AxisScale::new(source.diff_x(), target.diff_x());
        let scale_y = AxisScale::new(source.diff_y(), target.diff_y());

        log::trace!(
            "affine projection {:?} -> {:?}",
            (source.left().to_f64_pair(), source.right().to_f64_pair()),
            (target.left().to_f64_pair(), target.right().to_f64_pair()),
        );

        Self {
            source,
            target,
            mapping: Mapping::Affine { scale_x, scale_y },
        }
    }

    /// Create a projection that leaves every point unchanged.
    ///
    /// The target is set to `source` and [`Projection::translate`] skips the
    /// arithmetic entirely, so no rounding error is introduced.
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Projection};
    ///
    /// let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
    /// let projection = Projection::identity(source);
    ///
    /// assert_eq!(projection.translate(3.0, 7.0), (3.0, 7.0));
    /// ```
    pub fn identity(source: Interval<T>) -> Self {
        Self {
            source,
            target: source,
            mapping: Mapping::Identity,
        }
    }

    /// Create a projection onto the unit square `(0, 0)-(1, 1)`.
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Projection};
    ///
    /// let source = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
    /// let projection = Projection::unit(source);
    ///
    /// assert_eq!(projection.translate(0.0, 0.0), (0.0, 0.0));
    /// ```
    pub fn unit(source: Interval<T>) -> Self {
        Self::new(source, Interval::unit())
    }

    /// Create a projection onto the zero-centered square `(-1, -1)-(1, 1)`.
    pub fn symmetric_unit(source: Interval<T>) -> Self {
        Self::new(source, Interval::symmetric_unit())
    }

    /// The projection mapping the target back onto the source.
    ///
    /// The inverse of an identity projection is itself.
    pub fn inverse(&self) -> Self {
        match self.mapping {
            Mapping::Identity => *self,
            Mapping::Affine { .. } => Self::new(self.target, self.source),
        }
    }

    /// The domain of the input points.
    #[inline]
    pub fn source(&self) -> &Interval<T> {
        &self.source
    }

    /// The domain of the output points.
    #[inline]
    pub fn target(&self) -> &Interval<T> {
        &self.target
    }

    /// Whether [`Projection::translate`] returns its inputs unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self.mapping, Mapping::Identity)
    }

    /// Map a point given by its coordinates from source to target space.
    ///
    /// # Arguments
    ///
    /// * `x` - The horizontal coordinate in source space.
    /// * `y` - The vertical coordinate in source space.
    ///
    /// # Returns
    ///
    /// The `(x, y)` coordinates in target space.
    #[inline]
    pub fn translate(&self, x: T, y: T) -> (T, T) {
        match self.mapping {
            Mapping::Identity => (x, y),
            Mapping::Affine { scale_x, scale_y } => {
                let src = self.source.left();
                let dst = self.target.left();
                (
                    dst.x + scale_x.apply(x - src.x),
                    dst.y + scale_y.apply(y - src.y),
                )
            }
        }
    }

    /// Map a point from source to target space.
    ///
    /// ```
    /// use mapmaker_projection::{Interval, Point2, Projection};
    ///
    /// let source: Interval = Interval::new(-10.0, -10.0, 10.0, 10.0).unwrap();
    /// let projection = Projection::symmetric_unit(source);
    ///
    /// assert_eq!(projection.translate_point([10.0, -10.0]), Point2::new(1.0, -1.0));
    /// ```
    #[inline]
    pub fn translate_point(&self, point: impl Into<Point2<T>>) -> Point2<T> {
        let point = point.into();
        let (x, y) = self.translate(point.x, point.y);
        Point2::new(x, y)
    }
}

impl<T: Float> Default for Projection<T> {
    /// An identity projection over the unit square.
    fn default() -> Self {
        Self::identity(Interval::unit())
    }
}
