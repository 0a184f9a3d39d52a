//! Rigid transformations: rotors, translators and reflections
//!
//! A [Motor] is an even multivector (scalar + bivector) applied by the sandwich
//! product `M X M̃`. It moves points and lines alike without changing their grade.

use crate::algebraic_ops::*;
use crate::error::{Error, Result};
use crate::multivector::Multivector;
use crate::scalar::*;

/// A proper rigid motion: any combination of rotation and translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motor<T> {
    versor: Multivector<T>,
}

impl<T: Ring> Motor<T> {
    /// The motor that leaves everything in place
    pub fn identity() -> Motor<T> {
        Motor {
            versor: Multivector::from_scalar(T::one()),
        }
    }

    pub fn as_multivector(&self) -> Multivector<T> {
        self.versor
    }

    /// Move `x` by this motor: `M x M̃`
    pub fn transform(&self, x: Multivector<T>) -> Multivector<T> {
        self.versor
            .geometric_product(x)
            .geometric_product(self.versor.reverse())
    }

    /// The motor equivalent to applying `self` and then `next`
    pub fn then(self, next: Motor<T>) -> Motor<T> {
        Motor {
            versor: next.versor.geometric_product(self.versor),
        }
    }

    /// The motor that undoes this one
    pub fn inverse(self) -> Motor<T> {
        Motor {
            versor: self.versor.reverse(),
        }
    }
}

/// Translation by `(dx, dy)`: `1 + (dy/2) e20 - (dx/2) e01`
///
/// ```
/// use pga2::motor::translator;
/// use pga2::make_point;
///
/// let moved = translator(3., -1.).transform(make_point(1., 1.));
/// assert!(moved.equals_within(&make_point(4., 0.), 1e-12));
/// ```
pub fn translator<T: Rational>(dx: T, dy: T) -> Motor<T> {
    let half = T::one_half();
    Motor {
        versor: Multivector::new([
            T::one(),
            T::zero(),
            T::zero(),
            T::zero(),
            -(dx * half),
            dy * half,
            T::zero(),
            T::zero(),
        ]),
    }
}

/// Counter-clockwise rotation by `angle` radians about a real point:
/// `cos(angle/2) - sin(angle/2) P` for the normalized center `P`
///
/// Fails with [Error::UnsupportedGrade] if `center` is not a point
/// and with [Error::DegenerateNormalization] if it is ideal.
pub fn rotor<T: Real>(angle: T, center: Multivector<T>, eps: T) -> Result<Motor<T>> {
    center.as_point(eps)?;
    let center = center.normalize(eps)?;
    let half = angle * T::one_half();
    Ok(Motor {
        versor: Multivector::from_scalar(half.cos()) - center * half.sin(),
    })
}

/// Reflect `x` across a real line
///
/// The result is `m x m` for the normalized mirror `m`,
/// with the grade-2 part negated so that points keep the sign of their weight.
///
/// ```
/// use pga2::motor::reflect;
/// use pga2::{make_line, make_point};
///
/// // Across the y axis
/// let mirror = make_line(1., 0., 0.);
/// let image = reflect(make_point(2., 5.), mirror, 1e-9).unwrap();
/// assert!(image.equals_within(&make_point(-2., 5.), 1e-12));
/// ```
pub fn reflect<T: Real>(x: Multivector<T>, mirror: Multivector<T>, eps: T) -> Result<Multivector<T>> {
    if mirror.as_line(eps)?.is_ideal(eps) {
        return Err(Error::DegenerateNormalization);
    }
    let m = mirror.normalize(eps)?;
    let image = m.geometric_product(x).geometric_product(m);
    Ok(image.map_blades(|blade, v| if blade.grade() == 2 { -v } else { v }))
}
