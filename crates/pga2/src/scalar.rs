//! Traits that govern the scalar data type used by pga2
//!
//! Sums and products are all the algebra itself needs, so most of the
//! [multivector](crate::multivector) arithmetic only asks for a [Ring].
//! Classification, norms and rendering compare magnitudes against a tolerance
//! and take square roots, so they ask for the umbrella trait [Real].

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` requires that its datatype is `Copy` to avoid the need to clone or borrow when writing
/// mathematical expressions.
pub trait Ring:
    Clone
    + Copy
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which can represent fractional values such as ½.
///
/// Motors act on geometry twice (once from each side of the sandwich product),
/// so their construction halves angles and distances.
pub trait Rational: Ring {
    /// Construct a rational scalar
    /// from an integer numerator and integer denominator
    fn from_fraction(numerator: isize, denominator: isize) -> Self;

    /// A scalar value that when multiplied by 2 equals [one](Ring::one)
    fn one_half() -> Self {
        Self::from_fraction(1, 2)
    }
}

/// A scalar datatype which is closed under the square root function.
///
/// All uses of `sqrt()` within the library
/// are on sums of squares, so its use within the library is NaN-free.
pub trait Sqrt: Ring {
    /// This scalar's positive square root
    fn sqrt(self) -> Self;
}

/// A scalar datatype whose reciprocal can be taken.
///
/// This is NOT NaN-free for floating point types.
/// Within the library, `recip()` is only reached after the divisor
/// has been checked against the caller's tolerance,
/// see [normalize](crate::multivector::Multivector::normalize).
pub trait Recip {
    type Output;
    fn recip(self) -> Self::Output;
}

/// A scalar datatype which implements trigonometric functions.
///
/// Used for [rotors](crate::motor::rotor) and [angles](crate::ops::angle_between).
pub trait Trig: Sized {
    /// The cosine of a scalar (in radians)
    fn cos(self) -> Self;

    /// The sine of a scalar (in radians)
    fn sin(self) -> Self;

    /// The four-quadrant arctangent of `self / x`
    fn atan2(self, x: Self) -> Self;
}

/// The scalar bound used by every tolerance-aware operation.
///
/// `Real` is implemented for `f32` and `f64`.
pub trait Real:
    Ring + Rational + Sqrt + Recip<Output = Self> + Trig + PartialOrd + Debug
{
    /// A tolerance suitable for cleaning round-off noise
    /// out of values of order one.
    fn default_epsilon() -> Self;
}

/// The tolerance used by [Real::default_epsilon] for `f64`
pub const DEFAULT_EPSILON: f64 = 1e-6;

macro_rules! impl_for_float {
    ($type:ident, $eps:expr) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Rational for $type {
            fn from_fraction(numerator: isize, denominator: isize) -> $type {
                numerator as $type / denominator as $type
            }
        }

        impl Sqrt for $type {
            fn sqrt(self) -> $type {
                self.sqrt()
            }
        }

        impl Trig for $type {
            fn cos(self) -> $type {
                self.cos()
            }
            fn sin(self) -> $type {
                self.sin()
            }
            fn atan2(self, x: $type) -> $type {
                self.atan2(x)
            }
        }

        impl Recip for $type {
            type Output = $type;

            fn recip(self) -> $type {
                self.recip()
            }
        }

        impl Real for $type {
            fn default_epsilon() -> $type {
                $eps
            }
        }
    };
}

impl_for_float!(f32, 1e-5);
impl_for_float!(f64, DEFAULT_EPSILON);
