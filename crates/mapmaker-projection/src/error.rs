/// An error type for the projection module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Error when the left corner is not strictly below the right corner on both axes.
    #[error("Invalid interval: left corner {left:?} must be strictly less than right corner {right:?} with finite extent")]
    InvalidInterval {
        /// The requested left (min) corner.
        left: (f64, f64),
        /// The requested right (max) corner.
        right: (f64, f64),
    },
}
