use core::fmt;

/// Rejected map configuration. A missing path is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The buffer does not hold exactly `width * height` cells.
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A dimension does not fit the `i32` coordinates used by [Point](grid_util::point::Point).
    DimensionOverflow { width: usize, height: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { width, height, len } => write!(
                f,
                "map of {}x{} needs {} cells but the buffer holds {}",
                width,
                height,
                width * height,
                len
            ),
            Self::DimensionOverflow { width, height } => {
                write!(f, "map of {}x{} exceeds the coordinate range", width, height)
            }
        }
    }
}

impl std::error::Error for MapError {}
