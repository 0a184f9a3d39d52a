//! The multivector value type
//!
//! A [Multivector] holds one coefficient per [basis blade](crate::blade::Blade).
//! It is `Copy` and never mutated in place:
//! every operation returns a new value.
//!
//! The products (wedge, vee, dual, ...) live in [algebraic_ops](crate::algebraic_ops),
//! norms and geometric queries in [ops](crate::ops).

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::blade::{Blade, BLADE_COUNT};
use crate::error::{Error, Result};
use crate::scalar::*;

/// An element of 2D projective geometric algebra
///
/// ```
/// use pga2::blade::Blade;
/// use pga2::multivector::Multivector;
///
/// let a = Multivector::from_blade(Blade::E1, 2.) + Multivector::from_blade(Blade::E0, -3.);
/// assert_eq!(a.get(Blade::E1), 2.);
/// assert_eq!(a.get(Blade::E0), -3.);
/// assert_eq!(a.get(Blade::E12), 0.);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Multivector<T> {
    coeffs: [T; BLADE_COUNT],
}

impl<T> Multivector<T> {
    /// Build a multivector from coefficients in the order
    /// `{1, e0, e1, e2, e01, e20, e12, e012}`
    pub const fn new(coeffs: [T; BLADE_COUNT]) -> Self {
        Multivector { coeffs }
    }

    pub fn coeffs(&self) -> &[T; BLADE_COUNT] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> [T; BLADE_COUNT] {
        self.coeffs
    }
}

impl<T: Ring> Multivector<T> {
    pub fn zero() -> Self {
        Multivector {
            coeffs: [T::zero(); BLADE_COUNT],
        }
    }

    pub fn from_scalar(value: T) -> Self {
        Self::from_blade(Blade::Scalar, value)
    }

    pub fn from_pseudoscalar(value: T) -> Self {
        Self::from_blade(Blade::E012, value)
    }

    /// A multivector with a single non-zero coefficient
    pub fn from_blade(blade: Blade, value: T) -> Self {
        let mut coeffs = [T::zero(); BLADE_COUNT];
        coeffs[blade.index()] = value;
        Multivector { coeffs }
    }

    /// The coefficient on the given blade
    pub fn get(&self, blade: Blade) -> T {
        self.coeffs[blade.index()]
    }

    pub fn scalar_part(&self) -> T {
        self.get(Blade::Scalar)
    }

    pub fn pseudoscalar_part(&self) -> T {
        self.get(Blade::E012)
    }

    /// The part of this multivector of the given grade, with every other coefficient zeroed
    pub fn grade_part(self, grade: usize) -> Self {
        self.map_blades(|blade, v| if blade.grade() == grade { v } else { T::zero() })
    }

    /// Multiply every coefficient by `k`
    pub fn scale(self, k: T) -> Self {
        self.map_blades(|_, v| v * k)
    }

    pub(crate) fn map_blades(self, f: impl Fn(Blade, T) -> T) -> Self {
        let mut coeffs = self.coeffs;
        for blade in Blade::ALL {
            coeffs[blade.index()] = f(blade, coeffs[blade.index()]);
        }
        Multivector { coeffs }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut coeffs = self.coeffs;
        for (l, r) in coeffs.iter_mut().zip(rhs.coeffs) {
            *l = f(*l, r);
        }
        Multivector { coeffs }
    }
}

impl<T: Real> Multivector<T> {
    /// Replace every coefficient whose magnitude is at most `eps` with an exact zero
    ///
    /// Floating point round-off leaves tiny coefficients behind
    /// (e.g. the `e12` part of the meet of two nearly parallel lines)
    /// which would otherwise defeat grade classification.
    pub fn clean(self, eps: T) -> Self {
        self.map_blades(|_, v| if v.abs() <= eps { T::zero() } else { v })
    }

    /// True if every coefficient differs from `other`'s by at most `eps`
    pub fn equals_within(&self, other: &Self, eps: T) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(&l, &r)| (l - r).abs() <= eps)
    }

    /// Whether every coefficient is within `eps` of zero
    pub fn is_zero(&self, eps: T) -> bool {
        self.coeffs.iter().all(|v| v.abs() <= eps)
    }

    /// The grades with a coefficient larger than `eps`
    pub fn grades(&self, eps: T) -> GradeSet {
        Blade::ALL
            .into_iter()
            .filter(|b| self.get(*b).abs() > eps)
            .fold(GradeSet::EMPTY, |set, b| set.with(b.grade()))
    }

    /// The grades present after [cleaning](Multivector::clean),
    /// or [Error::NotPureGrade] if there is more than one
    ///
    /// The zero multivector yields the empty set.
    pub fn grade_set(&self, eps: T) -> Result<GradeSet> {
        let grades = self.grades(eps);
        if grades.len() > 1 {
            Err(Error::NotPureGrade { grades })
        } else {
            Ok(grades)
        }
    }
}

impl<T: Ring> Add for Multivector<T> {
    type Output = Multivector<T>;
    fn add(self, r: Multivector<T>) -> Multivector<T> {
        self.zip_with(r, |a, b| a + b)
    }
}

impl<T: Ring> Sub for Multivector<T> {
    type Output = Multivector<T>;
    fn sub(self, r: Multivector<T>) -> Multivector<T> {
        self.zip_with(r, |a, b| a - b)
    }
}

impl<T: Ring> Neg for Multivector<T> {
    type Output = Multivector<T>;
    fn neg(self) -> Multivector<T> {
        self.map_blades(|_, v| -v)
    }
}

impl<T: Ring> Mul<T> for Multivector<T> {
    type Output = Multivector<T>;
    fn mul(self, r: T) -> Multivector<T> {
        self.scale(r)
    }
}

macro_rules! impl_scalar_mul {
    ($type:ident) => {
        impl Mul<Multivector<$type>> for $type {
            type Output = Multivector<$type>;
            fn mul(self, r: Multivector<$type>) -> Multivector<$type> {
                r.scale(self)
            }
        }
    };
}

impl_scalar_mul!(f32);
impl_scalar_mul!(f64);

/// Formats as a sum of blades in basis order, e.g. `2e01 + 3e20 + 1e12`
impl<T: Ring + PartialEq + fmt::Display> fmt::Display for Multivector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for blade in Blade::ALL {
            let v = self.get(blade);
            if v == T::zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match blade {
                Blade::Scalar => write!(f, "{}", v)?,
                _ => write!(f, "{}{}", v, blade)?,
            }
        }
        if first {
            write!(f, "{}", T::zero())?;
        }
        Ok(())
    }
}

/// A set of grades in `0..=3`
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GradeSet(u8);

impl GradeSet {
    pub const EMPTY: GradeSet = GradeSet(0);

    pub fn single(grade: usize) -> GradeSet {
        GradeSet::EMPTY.with(grade)
    }

    /// This set plus `grade`
    pub fn with(self, grade: usize) -> GradeSet {
        debug_assert!(grade <= 3);
        GradeSet(self.0 | (1 << grade))
    }

    pub fn contains(&self, grade: usize) -> bool {
        grade <= 3 && self.0 & (1 << grade) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The only grade in the set, if there is exactly one
    pub fn only(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// True if the set holds no grade other than `grade`
    pub fn is_within(&self, grade: usize) -> bool {
        self.0 & !(1 << grade) == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..=3).filter(|g| self.contains(*g))
    }
}

impl fmt::Display for GradeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, g) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", g)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for GradeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GradeSet{}", self)
    }
}
