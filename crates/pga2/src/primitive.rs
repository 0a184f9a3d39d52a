//! Points, lines and grade classification
//!
//! A [Multivector] only acquires a geometric meaning once it is known to be pure-graded.
//! [Multivector::classify] performs that check once and returns a [Primitive],
//! which callers match on exhaustively.
//!
//! ## As geometry
//! * A grade-1 element `a e1 + b e2 + c e0` is the [Line] `ax + by + c = 0`.
//!   It is the ideal line (the line at infinity) when `a = b = 0`.
//! * A grade-2 element `x e20 + y e01 + w e12` is the [Point] `(x/w, y/w)`.
//!   It is an ideal point, the direction `(x, y)`, when `w = 0`.
//!
//! Both are homogeneous: multiplying by a non-zero scalar does not change the geometry.

use crate::blade::Blade;
use crate::error::{Error, Result};
use crate::multivector::{GradeSet, Multivector};
use crate::scalar::*;

/// e.g. a point in the plane or an ideal (infinite) point
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Point<T> {
    /// The coefficient on e20
    pub x: T,
    /// The coefficient on e01
    pub y: T,
    /// The coefficient on e12 (the projective weight)
    pub w: T,
}

/// e.g. a line in the plane or the ideal line
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Line<T> {
    /// The coefficient on e1
    pub a: T,
    /// The coefficient on e2
    pub b: T,
    /// The coefficient on e0
    pub c: T,
}

/// The geometric reading of a multivector, decided by its grades
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive<T> {
    Scalar(T),
    Line(Line<T>),
    Point(Point<T>),
    Pseudoscalar(T),
    /// More than one grade is present
    Invalid(GradeSet),
}

impl<T: Ring> Point<T> {
    /// The point at Euclidean coordinates `(x, y)`
    pub fn new(x: T, y: T) -> Point<T> {
        Point { x, y, w: T::one() }
    }

    pub fn homogeneous(x: T, y: T, w: T) -> Point<T> {
        Point { x, y, w }
    }

    /// The point at infinity in the direction `(dx, dy)`
    pub fn ideal(dx: T, dy: T) -> Point<T> {
        Point {
            x: dx,
            y: dy,
            w: T::zero(),
        }
    }

    pub fn origin() -> Point<T> {
        Point::new(T::zero(), T::zero())
    }
}

impl<T: Real> Point<T> {
    pub fn is_ideal(&self, eps: T) -> bool {
        self.w.abs() <= eps
    }

    /// The Euclidean coordinates `(x/w, y/w)`
    ///
    /// Fails with [Error::DegenerateNormalization] for ideal points.
    pub fn coordinates(&self, eps: T) -> Result<[T; 2]> {
        if self.is_ideal(eps) {
            return Err(Error::DegenerateNormalization);
        }
        let inv_w = self.w.recip();
        Ok([self.x * inv_w, self.y * inv_w])
    }
}

impl<T: Ring> Line<T> {
    /// The line `ax + by + c = 0`
    pub fn new(a: T, b: T, c: T) -> Line<T> {
        Line { a, b, c }
    }

    /// The line at infinity
    pub fn ideal() -> Line<T> {
        Line {
            a: T::zero(),
            b: T::zero(),
            c: T::one(),
        }
    }
}

impl<T: Real> Line<T> {
    pub fn is_ideal(&self, eps: T) -> bool {
        self.a.abs() <= eps && self.b.abs() <= eps
    }

    /// Evaluates `ax + by + c` at the given Euclidean coordinates.
    /// Its sign tells which side of the line the coordinates fall on.
    pub fn side(&self, [x, y]: [T; 2]) -> T {
        self.a * x + self.b * y + self.c
    }
}

impl<T: Ring> From<Point<T>> for Multivector<T> {
    fn from(p: Point<T>) -> Multivector<T> {
        Multivector::from_blade(Blade::E20, p.x)
            + Multivector::from_blade(Blade::E01, p.y)
            + Multivector::from_blade(Blade::E12, p.w)
    }
}

impl<T: Ring> From<Line<T>> for Multivector<T> {
    fn from(l: Line<T>) -> Multivector<T> {
        Multivector::from_blade(Blade::E1, l.a)
            + Multivector::from_blade(Blade::E2, l.b)
            + Multivector::from_blade(Blade::E0, l.c)
    }
}

/// The real point `(x, y)` as a multivector, `x e20 + y e01 + e12`
///
/// ```
/// use pga2::{make_line, make_point};
/// use pga2::ops::Meet;
///
/// // y = 2 and x = 3 meet at (3, 2)
/// let p = make_line(0., 1., -2.).meet(make_line(1., 0., -3.));
/// assert!(p.normalize(1e-9).unwrap().equals_within(&make_point(3., 2.), 1e-9));
/// ```
pub fn make_point<T: Ring>(x: T, y: T) -> Multivector<T> {
    Point::new(x, y).into()
}

/// The homogeneous point `x e20 + y e01 + w e12`
pub fn make_point_w<T: Ring>(x: T, y: T, w: T) -> Multivector<T> {
    Point::homogeneous(x, y, w).into()
}

/// The point at infinity in the direction `(dx, dy)`
pub fn make_ideal_point<T: Ring>(dx: T, dy: T) -> Multivector<T> {
    Point::ideal(dx, dy).into()
}

/// The line `ax + by + c = 0` as a multivector, `a e1 + b e2 + c e0`
pub fn make_line<T: Ring>(a: T, b: T, c: T) -> Multivector<T> {
    Line::new(a, b, c).into()
}

/// The line at infinity, `e0`
pub fn ideal_line<T: Ring>() -> Multivector<T> {
    Line::ideal().into()
}

impl<T: Real> Multivector<T> {
    /// Decide what this multivector represents, after cleaning at `eps`
    ///
    /// The zero multivector classifies as the scalar zero.
    pub fn classify(self, eps: T) -> Primitive<T> {
        let m = self.clean(eps);
        let grades = m.grades(eps);
        let primitive = match grades.only() {
            None if grades.is_empty() => Primitive::Scalar(T::zero()),
            None => Primitive::Invalid(grades),
            Some(0) => Primitive::Scalar(m.scalar_part()),
            Some(1) => Primitive::Line(Line {
                a: m.get(Blade::E1),
                b: m.get(Blade::E2),
                c: m.get(Blade::E0),
            }),
            Some(2) => Primitive::Point(Point {
                x: m.get(Blade::E20),
                y: m.get(Blade::E01),
                w: m.get(Blade::E12),
            }),
            Some(_) => Primitive::Pseudoscalar(m.pseudoscalar_part()),
        };
        log::trace!("classified {:?} as {:?}", self, primitive);
        primitive
    }

    /// True for the ideal line: nothing but grade 1 survives cleaning, and `a = b = 0`
    pub fn is_ideal_line(&self, eps: T) -> bool {
        let m = self.clean(eps);
        m.grades(eps).is_within(1)
            && m.get(Blade::E1) == T::zero()
            && m.get(Blade::E2) == T::zero()
    }

    /// True for ideal points: nothing but grade 2 survives cleaning, and `w = 0`
    ///
    /// The zero multivector (e.g. the meet of two coincident lines) counts as ideal.
    pub fn is_ideal_point(&self, eps: T) -> bool {
        let m = self.clean(eps);
        m.grades(eps).is_within(2) && m.get(Blade::E12) == T::zero()
    }

    /// View this multivector as a [Point]
    ///
    /// Fails with [Error::UnsupportedGrade] unless it is pure grade 2.
    pub fn as_point(&self, eps: T) -> Result<Point<T>> {
        match self.classify(eps) {
            Primitive::Point(p) => Ok(p),
            _ => Err(Error::UnsupportedGrade {
                grades: self.grades(eps),
            }),
        }
    }

    /// View this multivector as a [Line]
    ///
    /// Fails with [Error::UnsupportedGrade] unless it is pure grade 1.
    pub fn as_line(&self, eps: T) -> Result<Line<T>> {
        match self.classify(eps) {
            Primitive::Line(l) => Ok(l),
            _ => Err(Error::UnsupportedGrade {
                grades: self.grades(eps),
            }),
        }
    }
}
