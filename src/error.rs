use thiserror::Error;

/// Top-level error type for contour construction.
#[derive(Debug, Error)]
pub enum EnchanterError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The supporting lines are parallel or coincident.
    #[error("system has no or infinitely many solutions")]
    DegenerateSystem,

    #[error("decimal places must be non-negative, got {decimals}")]
    InvalidPrecision { decimals: i32 },
}

/// Errors raised by indexed containers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{container}: index {index} is out of range for length {len}")]
    IndexOutOfRange {
        container: &'static str,
        index: usize,
        len: usize,
    },

    #[error("value {value} is not present")]
    ValueNotFound { value: usize },
}

/// Errors caused by invalid caller input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("a point set needs at least one point")]
    EmptyPointSet,

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("value {value} is already present")]
    DuplicateValue { value: usize },
}

/// Coarse classification of an [`EnchanterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
    NotFound,
    DegenerateSystem,
}

impl EnchanterError {
    /// Returns the kind of failure this error represents.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(GeometryError::DegenerateSystem) => ErrorKind::DegenerateSystem,
            Self::Geometry(GeometryError::InvalidPrecision { .. }) | Self::Input(_) => {
                ErrorKind::InvalidArgument
            }
            Self::Lookup(LookupError::IndexOutOfRange { .. }) => ErrorKind::IndexOutOfRange,
            Self::Lookup(LookupError::ValueNotFound { .. }) => ErrorKind::NotFound,
        }
    }
}

/// Convenience type alias for results using [`EnchanterError`].
pub type Result<T> = std::result::Result<T, EnchanterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_from_variants() {
        let err: EnchanterError = GeometryError::DegenerateSystem.into();
        assert_eq!(err.kind(), ErrorKind::DegenerateSystem);

        let err: EnchanterError = GeometryError::InvalidPrecision { decimals: -1 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: EnchanterError = InputError::EmptyPointSet.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: EnchanterError = LookupError::ValueNotFound { value: 3 }.into();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err: EnchanterError = LookupError::IndexOutOfRange {
            container: "PointSet",
            index: 4,
            len: 2,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn out_of_range_message_names_container() {
        let err = LookupError::IndexOutOfRange {
            container: "Polygon",
            index: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Polygon: index 7 is out of range for length 3"
        );
    }
}
