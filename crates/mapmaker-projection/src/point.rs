/// A point in two-dimensional space.
///
/// # Examples
///
/// ```
/// use mapmaker_projection::Point2;
///
/// let p: Point2 = (3.0, 7.0).into();
///
/// assert_eq!(p, Point2::new(3.0, 7.0));
/// assert_eq!(<[f64; 2]>::from(p), [3.0, 7.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2<T = f64> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point2<T> {
    /// Create a new point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: num_traits::Float> Point2<T> {
    /// Widen the coordinates to `f64` for reporting purposes.
    pub(crate) fn to_f64_pair(self) -> (f64, f64) {
        (
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> From<Point2<T>> for [T; 2] {
    fn from(p: Point2<T>) -> Self {
        [p.x, p.y]
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
