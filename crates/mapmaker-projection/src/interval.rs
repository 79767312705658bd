use num_traits::Float;

use crate::error::ProjectionError;
use crate::point::Point2;

/// An axis-aligned, non-degenerate rectangle.
///
/// The rectangle is described by its `left` (minimum) and `right` (maximum)
/// corners. Width and height are computed once on construction so that
/// projections built on top of it never recompute them.
///
/// # Examples
///
/// ```
/// use mapmaker_projection::Interval;
///
/// let interval = Interval::new(0.0, 0.0, 10.0, 20.0).unwrap();
///
/// assert_eq!(interval.diff_x(), 10.0);
/// assert_eq!(interval.diff_y(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<T = f64> {
    left: Point2<T>,
    right: Point2<T>,
    diff_x: T,
    diff_y: T,
}

impl<T: Float> Interval<T> {
    /// Create a new interval from four scalar bounds.
    ///
    /// # Arguments
    ///
    /// * `left_x` - The minimum horizontal coordinate.
    /// * `left_y` - The minimum vertical coordinate.
    /// * `right_x` - The maximum horizontal coordinate.
    /// * `right_y` - The maximum vertical coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidInterval`] if `left_x >= right_x`,
    /// `left_y >= right_y`, any bound is NaN or the resulting extent is not finite.
    pub fn new(left_x: T, left_y: T, right_x: T, right_y: T) -> Result<Self, ProjectionError> {
        Self::from_corners(Point2::new(left_x, left_y), Point2::new(right_x, right_y))
    }

    /// Create a new interval from its two corner points.
    ///
    /// Accepts anything convertible into a [`Point2`], e.g. tuples or arrays.
    ///
    /// ```
    /// use mapmaker_projection::Interval;
    ///
    /// let interval = Interval::<f32>::from_corners((-5.0f32, 0.0f32), [5.0f32, 1.0f32]).unwrap();
    /// assert_eq!(interval.diff_x(), 10.0);
    ///
    /// assert!(Interval::<f64>::from_corners((1.0f64, 0.0f64), (0.0f64, 1.0f64)).is_err());
    /// ```
    pub fn from_corners(
        left: impl Into<Point2<T>>,
        right: impl Into<Point2<T>>,
    ) -> Result<Self, ProjectionError> {
        let (left, right) = (left.into(), right.into());
        let diff_x = right.x - left.x;
        let diff_y = right.y - left.y;

        // NOTE: NaN bounds fail the ordering check since they never compare less-than
        let ordered = left.x < right.x && left.y < right.y;
        if !ordered || !diff_x.is_finite() || !diff_y.is_finite() {
            let err = ProjectionError::InvalidInterval {
                left: left.to_f64_pair(),
                right: right.to_f64_pair(),
            };
            log::debug!("{err}");
            return Err(err);
        }

        Ok(Self {
            left,
            right,
            diff_x,
            diff_y,
        })
    }

    /// The unit square with corners (0, 0) and (1, 1).
    pub fn unit() -> Self {
        Self {
            left: Point2::new(T::zero(), T::zero()),
            right: Point2::new(T::one(), T::one()),
            diff_x: T::one(),
            diff_y: T::one(),
        }
    }

    /// The zero-centered square with corners (-1, -1) and (1, 1).
    pub fn symmetric_unit() -> Self {
        let two = T::one() + T::one();
        Self {
            left: Point2::new(-T::one(), -T::one()),
            right: Point2::new(T::one(), T::one()),
            diff_x: two,
            diff_y: two,
        }
    }

    /// The minimum corner.
    #[inline]
    pub fn left(&self) -> Point2<T> {
        self.left
    }

    /// The maximum corner.
    #[inline]
    pub fn right(&self) -> Point2<T> {
        self.right
    }

    /// Width of the rectangle, always strictly positive.
    #[inline]
    pub fn diff_x(&self) -> T {
        self.diff_x
    }

    /// Height of the rectangle, always strictly positive.
    #[inline]
    pub fn diff_y(&self) -> T {
        self.diff_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_diffs() -> Result<(), Box<dyn std::error::Error>> {
        let interval = Interval::new(-2.5, 1.0, 7.5, 4.0)?;
        assert_eq!(interval.left(), Point2::new(-2.5, 1.0));
        assert_eq!(interval.right(), Point2::new(7.5, 4.0));
        assert_eq!(interval.diff_x(), 10.0);
        assert_eq!(interval.diff_y(), 3.0);
        Ok(())
    }

    #[test]
    fn test_interval_from_corners_matches_scalars() -> Result<(), Box<dyn std::error::Error>> {
        let a = Interval::new(0.0f32, 0.0, 10.0, 20.0)?;
        let b = Interval::<f32>::from_corners((0.0f32, 0.0f32), (10.0f32, 20.0f32))?;
        let c = Interval::<f32>::from_corners([0.0f32, 0.0f32], Point2::new(10.0f32, 20.0f32))?;
        assert_eq!(a, b);
        assert_eq!(b, c);
        Ok(())
    }

    #[test]
    fn test_interval_degenerate_x() {
        let res = Interval::new(5.0, 5.0, 5.0, 10.0);
        assert_eq!(
            res,
            Err(ProjectionError::InvalidInterval {
                left: (5.0, 5.0),
                right: (5.0, 10.0),
            })
        );
    }

    #[test]
    fn test_interval_inverted() {
        assert!(Interval::new(0.0, 10.0, 10.0, 0.0).is_err());
        assert!(Interval::new(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(Interval::new(0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_interval_non_finite() {
        assert!(Interval::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(Interval::new(0.0, 0.0, 1.0, f64::NAN).is_err());
        assert!(Interval::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 0.0, 1.0, 1.0).is_err());
        // both corners finite but the width overflows
        assert!(Interval::new(-f64::MAX, 0.0, f64::MAX, 1.0).is_err());
    }

    #[test]
    fn test_interval_fixed_targets() {
        let unit = Interval::<f64>::unit();
        assert_eq!(unit.left(), Point2::new(0.0, 0.0));
        assert_eq!(unit.right(), Point2::new(1.0, 1.0));
        assert_eq!((unit.diff_x(), unit.diff_y()), (1.0, 1.0));

        let sym = Interval::<f32>::symmetric_unit();
        assert_eq!(sym.left(), Point2::new(-1.0, -1.0));
        assert_eq!(sym.right(), Point2::new(1.0, 1.0));
        assert_eq!((sym.diff_x(), sym.diff_y()), (2.0, 2.0));
    }

    #[test]
    fn test_interval_error_message() {
        let err = Interval::new(1.0, 0.0, 1.0, 1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid interval"), "{msg}");
        assert!(msg.contains("(1.0, 0.0)"), "{msg}");
    }
}
