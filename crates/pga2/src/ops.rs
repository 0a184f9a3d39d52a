//! Geometric operations
//!
//! Norms, normalization, and the queries built on meet & join.
//!
//! Every function that compares against zero takes the tolerance `eps` explicitly;
//! there is no global tolerance.

use crate::algebraic_ops::*;
use crate::error::{Error, Result};
use crate::multivector::Multivector;
use crate::primitive::{Line, Point, Primitive};
use crate::scalar::*;

/// The lower-dimensional geometry shared between its two operands, i.e. intersection.
///
/// In 2D, this meets two lines at a point.
/// The result is not normalized: its weight is the sine of the angle between the lines
/// times both lines' Euclidean norms.
///
/// `Meet` is exception-free.
/// Parallel lines meet at an ideal point,
/// and coincident lines meet at zero.
///
/// ```
/// use pga2::primitive::{Line, Point};
/// use pga2::ops::*;
///
/// // x = 3 and y = 2
/// let p = Line::new(1., 0., -3.).meet(Line::new(0., 1., -2.));
/// assert_eq!(p.coordinates(1e-9).unwrap(), [3., 2.]);
///
/// // x = 1 and x = 2
/// let p = Line::new(1., 0., -1.).meet(Line::new(1., 0., -2.));
/// assert!(p.is_ideal(1e-9));
/// ```
pub trait Meet<T> {
    type Output;
    fn meet(self, r: T) -> Self::Output;
}

/// The higher-dimensional geometry containing its two operands, similar to a union.
///
/// In 2D, this joins two points into the line through them.
/// The line is oriented from the first point towards the second,
/// and for two normalized points its Euclidean norm is their distance.
///
/// Joining a real point and an ideal point gives the line through the point
/// in that direction.
///
/// ```
/// use pga2::primitive::Point;
/// use pga2::ops::*;
///
/// let l = Point::new(10f64, 10f64).join(Point::new(13f64, 14f64));
/// assert_eq!((l.a * l.a + l.b * l.b).sqrt(), 5.);
/// ```
pub trait Join<T> {
    type Output;
    fn join(self, r: T) -> Self::Output;
}

impl<T: Ring> Meet<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    fn meet(self, r: Multivector<T>) -> Multivector<T> {
        self.wedge(r)
    }
}

impl<T: Ring> Join<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    fn join(self, r: Multivector<T>) -> Multivector<T> {
        self.vee(r)
    }
}

impl<T: Ring> Meet<Line<T>> for Line<T> {
    type Output = Point<T>;
    fn meet(self, r: Line<T>) -> Point<T> {
        Point {
            x: self.b * r.c - self.c * r.b,
            y: self.c * r.a - self.a * r.c,
            w: self.a * r.b - self.b * r.a,
        }
    }
}

impl<T: Ring> Join<Point<T>> for Point<T> {
    type Output = Line<T>;
    fn join(self, r: Point<T>) -> Line<T> {
        Line {
            a: self.y * r.w - self.w * r.y,
            b: self.w * r.x - self.x * r.w,
            c: self.x * r.y - self.y * r.x,
        }
    }
}

impl<T: Real> Multivector<T> {
    /// The Euclidean (weight) norm
    ///
    /// * scalar: its value
    /// * line `a e1 + b e2 + c e0`: `sqrt(a² + b²)`
    /// * point `x e20 + y e01 + w e12`: `w` (signed, so that normalizing makes `w = 1`)
    /// * pseudoscalar: 0
    ///
    /// Ideal elements have a Euclidean norm of zero.
    /// Fails with [Error::UnsupportedGrade] on mixed grades.
    pub fn euclidean_norm(&self, eps: T) -> Result<T> {
        match self.classify(eps) {
            Primitive::Scalar(s) => Ok(s),
            Primitive::Line(l) => Ok((l.a * l.a + l.b * l.b).sqrt()),
            Primitive::Point(p) => Ok(p.w),
            Primitive::Pseudoscalar(_) => Ok(T::zero()),
            Primitive::Invalid(grades) => Err(Error::UnsupportedGrade { grades }),
        }
    }

    /// The ideal (bulk) norm, complementary to [euclidean_norm](Multivector::euclidean_norm)
    ///
    /// * scalar: 0
    /// * line: `|c|`, the distance from the origin once the line is normalized
    /// * point: `sqrt(x² + y²)`, the length of an ideal point's direction
    /// * pseudoscalar: the magnitude of its coefficient
    pub fn ideal_norm(&self, eps: T) -> Result<T> {
        match self.classify(eps) {
            Primitive::Scalar(_) => Ok(T::zero()),
            Primitive::Line(l) => Ok(l.c.abs()),
            Primitive::Point(p) => Ok((p.x * p.x + p.y * p.y).sqrt()),
            Primitive::Pseudoscalar(s) => Ok(s.abs()),
            Primitive::Invalid(grades) => Err(Error::UnsupportedGrade { grades }),
        }
    }

    /// Divide by the [Euclidean norm](Multivector::euclidean_norm)
    ///
    /// Normalized lines have `a² + b² = 1`; normalized points have `w = 1`.
    /// Fails with [Error::DegenerateNormalization] when the norm is within `eps` of zero,
    /// e.g. for ideal points and the ideal line.
    ///
    /// ```
    /// use pga2::{make_point_w, Error};
    ///
    /// let p = make_point_w(4., 6., 2.).normalize(1e-9).unwrap();
    /// assert_eq!(p, pga2::make_point(2., 3.));
    ///
    /// let ideal = make_point_w(1., 1., 0.);
    /// assert_eq!(ideal.normalize(1e-9), Err(Error::DegenerateNormalization));
    /// ```
    pub fn normalize(self, eps: T) -> Result<Self> {
        let norm = self.euclidean_norm(eps)?;
        if norm.abs() <= eps {
            return Err(Error::DegenerateNormalization);
        }
        Ok(self * norm.recip())
    }

    /// Divide by the [ideal norm](Multivector::ideal_norm)
    ///
    /// This turns an ideal point into a unit direction.
    pub fn normalize_ideal(self, eps: T) -> Result<Self> {
        let norm = self.ideal_norm(eps)?;
        if norm <= eps {
            return Err(Error::DegenerateNormalization);
        }
        Ok(self * norm.recip())
    }
}

/// True if the two lines meet at an ideal point
///
/// Coincident lines meet at zero, which also counts as parallel.
pub fn is_parallel<T: Real>(l1: Multivector<T>, l2: Multivector<T>, eps: T) -> bool {
    l1.meet(l2).is_ideal_point(eps)
}

/// True if the normals of two real lines are orthogonal
///
/// Fails with [Error::UnsupportedGrade] if either operand is not a line,
/// and with [Error::DegenerateNormalization] if either is the ideal line.
pub fn is_perpendicular<T: Real>(l1: Multivector<T>, l2: Multivector<T>, eps: T) -> Result<bool> {
    let (n1, n2) = unit_lines(l1, l2, eps)?;
    Ok((n1.a * n2.a + n1.b * n2.b).abs() <= eps)
}

/// The angle in `[0, π]` between the normals of two real lines
pub fn angle_between<T: Real>(l1: Multivector<T>, l2: Multivector<T>, eps: T) -> Result<T> {
    let (n1, n2) = unit_lines(l1, l2, eps)?;
    let cos = n1.a * n2.a + n1.b * n2.b;
    let sin = n1.a * n2.b - n1.b * n2.a;
    Ok(sin.abs().atan2(cos))
}

fn unit_lines<T: Real>(
    l1: Multivector<T>,
    l2: Multivector<T>,
    eps: T,
) -> Result<(Line<T>, Line<T>)> {
    l1.as_line(eps)?;
    l2.as_line(eps)?;
    Ok((l1.normalize(eps)?.as_line(eps)?, l2.normalize(eps)?.as_line(eps)?))
}

// Normalizes a real point, or reports why it has no finite location
fn real_point<T: Real>(p: Multivector<T>, eps: T) -> Result<Multivector<T>> {
    if p.as_point(eps)?.is_ideal(eps) {
        return Err(Error::UndefinedDistance);
    }
    p.normalize(eps)
}

fn real_line<T: Real>(l: Multivector<T>, eps: T) -> Result<Multivector<T>> {
    if l.as_line(eps)?.is_ideal(eps) {
        return Err(Error::UndefinedDistance);
    }
    l.normalize(eps)
}

/// The Euclidean distance between two real points
///
/// Fails with [Error::UndefinedDistance] if either point is ideal.
///
/// ```
/// use pga2::{make_point, make_ideal_point, Error};
/// use pga2::ops::distance_point_point;
///
/// let d = distance_point_point(make_point(10., 10.), make_point(13., 14.), 1e-9);
/// assert_eq!(d, Ok(5.));
///
/// let d = distance_point_point(make_point(0., 0.), make_ideal_point(1., 0.), 1e-9);
/// assert_eq!(d, Err(Error::UndefinedDistance));
/// ```
pub fn distance_point_point<T: Real>(p1: Multivector<T>, p2: Multivector<T>, eps: T) -> Result<T> {
    let p1 = real_point(p1, eps)?;
    let p2 = real_point(p2, eps)?;
    Ok(p1.join(p2).magnitude_squared().sqrt())
}

/// The distance from a real point to a real line, positive on the side
/// the line's normal `(a, b)` points towards
pub fn signed_distance_point_line<T: Real>(
    p: Multivector<T>,
    l: Multivector<T>,
    eps: T,
) -> Result<T> {
    let p = real_point(p, eps)?;
    let l = real_line(l, eps)?;
    Ok(l.wedge(p).pseudoscalar_part())
}

/// The unsigned distance from a real point to a real line
///
/// Fails with [Error::UndefinedDistance] if either operand is ideal.
pub fn distance_point_line<T: Real>(p: Multivector<T>, l: Multivector<T>, eps: T) -> Result<T> {
    signed_distance_point_line(p, l, eps).map(|d| d.abs())
}

/// The signed area of the triangle through three real points,
/// positive when they wind counter-clockwise
pub fn signed_area<T: Real>(
    a: Multivector<T>,
    b: Multivector<T>,
    c: Multivector<T>,
    eps: T,
) -> Result<T> {
    let a = real_point(a, eps)?;
    let b = real_point(b, eps)?;
    let c = real_point(c, eps)?;
    Ok(a.join(b).join(c).scalar_part() * T::one_half())
}
