//! Low-level geometric algebra operations
//!
//! These are named after their algebraic expressions.
//! Consider using the aliases in the [ops](crate::ops) module when available,
//! for code that reflects the geometric interpretation.
//! (e.g. when intersecting two lines, prefer `l1.meet(l2)` over `l1.wedge(l2)`)
//!
//! All products are driven by the compile-time [structure constants](crate::blade::CAYLEY).

use crate::blade::{Blade, CAYLEY, DUAL, REVERSE_SIGN};
use crate::multivector::Multivector;
use crate::scalar::*;

/// The reverse operator Ã
///
/// Reverses the order of the basis vectors in every blade,
/// which negates grades 2 and 3.
pub trait Reverse {
    fn reverse(self) -> Self;
}

/// The dual operator, mapping grade k to grade 3 - k
///
/// This library uses the right complement:
/// every blade `B` maps to the blade `B̄` with `B ∧ B̄ = +e012`.
/// With this basis the map is involutive, `a.dual().dual() == a`, in every grade.
pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

/// The wedge product from exterior algebra, A ∧ B
pub trait Wedge<T> {
    type Output;
    fn wedge(self, r: T) -> Self::Output;
}

/// The regressive product (vee), A ∨ B = dual(dual(A) ∧ dual(B))
pub trait Vee<T> {
    type Output;
    fn vee(self, r: T) -> Self::Output;
}

/// The geometric product A B
pub trait GeometricProduct<T> {
    type Output;
    fn geometric_product(self, r: T) -> Self::Output;
}

fn product<T: Ring>(
    l: Multivector<T>,
    r: Multivector<T>,
    keep: impl Fn(Blade, Blade) -> bool,
) -> Multivector<T> {
    let mut coeffs = [T::zero(); 8];
    for lb in Blade::ALL {
        for rb in Blade::ALL {
            let entry = CAYLEY[lb.index()][rb.index()];
            if entry.sign == 0 || !keep(lb, rb) {
                continue;
            }
            let term = l.get(lb) * r.get(rb) * T::from_integer(entry.sign as isize);
            coeffs[entry.blade.index()] = coeffs[entry.blade.index()] + term;
        }
    }
    Multivector::new(coeffs)
}

impl<T: Ring> Reverse for Multivector<T> {
    fn reverse(self) -> Self {
        self.map_blades(|blade, v| {
            if REVERSE_SIGN[blade.grade()] < 0 {
                -v
            } else {
                v
            }
        })
    }
}

impl<T: Ring> Dual for Multivector<T> {
    type Output = Multivector<T>;
    fn dual(self) -> Multivector<T> {
        let mut coeffs = [T::zero(); 8];
        for blade in Blade::ALL {
            let d = DUAL[blade.index()];
            let v = self.get(blade);
            coeffs[d.blade.index()] = if d.sign < 0 { -v } else { v };
        }
        Multivector::new(coeffs)
    }
}

impl<T: Ring> Wedge<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    fn wedge(self, r: Multivector<T>) -> Multivector<T> {
        product(self, r, |lb, rb| {
            CAYLEY[lb.index()][rb.index()].is_exterior(lb, rb)
        })
    }
}

impl<T: Ring> Vee<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    fn vee(self, r: Multivector<T>) -> Multivector<T> {
        self.dual().wedge(r.dual()).dual()
    }
}

impl<T: Ring> GeometricProduct<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    fn geometric_product(self, r: Multivector<T>) -> Multivector<T> {
        product(self, r, |_, _| true)
    }
}

impl<T: Ring> Multivector<T> {
    /// The scalar part of `A Ã`
    ///
    /// For a line `a e1 + b e2 + c e0` this is `a² + b²`,
    /// for a point `x e20 + y e01 + w e12` it is `w²`.
    pub fn magnitude_squared(self) -> T {
        self.geometric_product(self.reverse()).scalar_part()
    }
}
