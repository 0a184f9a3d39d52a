//! Recoverable failures of classification, normalization, measurement and rendering
//!
//! None of these are fatal. Each names the reason an element could not be
//! classified, measured or drawn so that the caller can branch on it,
//! e.g. skip drawing on [Error::LineOutsideViewport].

use crate::multivector::GradeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Components in more than one grade survived cleaning
    #[error("not pure grade: grades {grades}")]
    NotPureGrade { grades: GradeSet },

    /// A norm or metric was requested outside the grades it is defined for
    #[error("unsupported grade: grades {grades}")]
    UnsupportedGrade { grades: GradeSet },

    /// Normalization of an element whose norm is zero, e.g. an ideal point or line
    #[error("cannot normalize an element with zero norm")]
    DegenerateNormalization,

    /// Distance to or from an ideal element
    #[error("distance is undefined for ideal elements")]
    UndefinedDistance,

    /// The line never crosses the viewport; there is nothing to draw
    #[error("line lies outside the viewport")]
    LineOutsideViewport,

    /// Only pure lines and points can be drawn
    #[error("cannot draw an element with grades {grades}")]
    UnclassifiablePrimitive { grades: GradeSet },

    /// The viewport bounds do not describe a rectangle of positive area
    #[error("viewport must satisfy xmin < xmax and ymin < ymax")]
    DegenerateViewport,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
