//! Basis blades and structure constants
//!
//! The algebra has three basis vectors `e0`, `e1`, `e2` with metric `[0, 1, 1]`:
//! `e0` is the projective (degenerate) direction and squares to zero,
//! while `e1` and `e2` are Euclidean and square to one.
//!
//! Coefficients are stored in the fixed order
//! `{1, e0, e1, e2, e01, e20, e12, e012}`.
//! Note the spelling `e20` rather than `e02`:
//! it puts the bivector part of a point `x e20 + y e01 + w e12`
//! into the same order as its coordinates,
//! and it makes the [dual](DUAL) a plain reversal of the coefficient array.
//!
//! The multiplication table is computed at compile time from the metric.
//! Internally each blade is a bitmask over `(e0, e1, e2)` in ascending order,
//! plus an orientation sign relating that canonical blade to the stored one
//! (`e20 = -e02`).

use core::fmt;

/// Number of basis blades in the algebra
pub const BLADE_COUNT: usize = 8;

/// The metric: the square of each basis vector `e0`, `e1`, `e2`
pub const METRIC: [i8; 3] = [0, 1, 1];

/// One basis blade of the algebra
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Blade {
    Scalar,
    E0,
    E1,
    E2,
    E01,
    E20,
    E12,
    E012,
}

impl Blade {
    /// Every blade, in storage order
    pub const ALL: [Blade; BLADE_COUNT] = [
        Blade::Scalar,
        Blade::E0,
        Blade::E1,
        Blade::E2,
        Blade::E01,
        Blade::E20,
        Blade::E12,
        Blade::E012,
    ];

    /// Position of this blade's coefficient in a multivector
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Blade> {
        if index < BLADE_COUNT {
            Some(Blade::ALL[index])
        } else {
            None
        }
    }

    /// The number of basis vectors wedged together to form this blade
    pub const fn grade(self) -> usize {
        match self {
            Blade::Scalar => 0,
            Blade::E0 | Blade::E1 | Blade::E2 => 1,
            Blade::E01 | Blade::E20 | Blade::E12 => 2,
            Blade::E012 => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Blade::Scalar => "1",
            Blade::E0 => "e0",
            Blade::E1 => "e1",
            Blade::E2 => "e2",
            Blade::E01 => "e01",
            Blade::E20 => "e20",
            Blade::E12 => "e12",
            Blade::E012 => "e012",
        }
    }

    // Bitmask over (e0, e1, e2) and the sign taking the
    // ascending-order blade to this one
    const fn canonical(self) -> (u8, i8) {
        match self {
            Blade::Scalar => (0b000, 1),
            Blade::E0 => (0b001, 1),
            Blade::E1 => (0b010, 1),
            Blade::E2 => (0b100, 1),
            Blade::E01 => (0b011, 1),
            Blade::E20 => (0b101, -1),
            Blade::E12 => (0b110, 1),
            Blade::E012 => (0b111, 1),
        }
    }

    const fn from_mask(mask: u8) -> Blade {
        let mut i = 0;
        while i < BLADE_COUNT {
            if Blade::ALL[i].canonical().0 == mask {
                return Blade::ALL[i];
            }
            i += 1;
        }
        panic!("bitmask does not name a blade");
    }
}

impl fmt::Display for Blade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the multiplication table: `lhs * rhs = sign * blade`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub blade: Blade,
    /// One of -1, 0, +1
    pub sign: i8,
}

impl Product {
    /// Whether this product survives the exterior (wedge) product,
    /// i.e. its grade is the sum of the operand grades
    pub const fn is_exterior(self, lhs: Blade, rhs: Blade) -> bool {
        self.sign != 0 && self.blade.grade() == lhs.grade() + rhs.grade()
    }
}

// Sign from sorting the basis vectors of a * b into ascending order
const fn reorder_sign(a: u8, b: u8) -> i8 {
    let mut a = a >> 1;
    let mut swaps = 0;
    while a != 0 {
        swaps += (a & b).count_ones();
        a >>= 1;
    }
    if swaps % 2 == 0 {
        1
    } else {
        -1
    }
}

// Product of the squares of every basis vector shared by a and b
const fn metric_factor(a: u8, b: u8) -> i8 {
    let shared = a & b;
    let mut factor = 1;
    let mut i = 0;
    while i < METRIC.len() {
        if (shared >> i) & 1 == 1 {
            factor *= METRIC[i];
        }
        i += 1;
    }
    factor
}

const fn multiply(lhs: Blade, rhs: Blade) -> Product {
    let (a, sign_a) = lhs.canonical();
    let (b, sign_b) = rhs.canonical();
    let blade = Blade::from_mask(a ^ b);
    let (_, sign_out) = blade.canonical();
    Product {
        blade,
        sign: sign_a * sign_b * reorder_sign(a, b) * metric_factor(a, b) * sign_out,
    }
}

const fn build_cayley() -> [[Product; BLADE_COUNT]; BLADE_COUNT] {
    let mut table = [[Product {
        blade: Blade::Scalar,
        sign: 0,
    }; BLADE_COUNT]; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        let mut j = 0;
        while j < BLADE_COUNT {
            table[i][j] = multiply(Blade::ALL[i], Blade::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    table
}

// The right complement: the blade that completes each blade to +e012
const fn build_dual() -> [Product; BLADE_COUNT] {
    let mut table = [Product {
        blade: Blade::Scalar,
        sign: 0,
    }; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        let mut j = 0;
        while j < BLADE_COUNT {
            let lhs = Blade::ALL[i];
            let rhs = Blade::ALL[j];
            let p = multiply(lhs, rhs);
            if lhs.grade() + rhs.grade() == 3 && p.is_exterior(lhs, rhs) {
                // lhs ∧ (sign * rhs) = +e012
                table[i] = Product {
                    blade: rhs,
                    sign: p.sign,
                };
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// The geometric product of every pair of basis blades,
/// indexed as `CAYLEY[lhs.index()][rhs.index()]`
pub const CAYLEY: [[Product; BLADE_COUNT]; BLADE_COUNT] = build_cayley();

/// The dual (right complement) of every basis blade.
///
/// For each blade `B`, `B ∧ dual(B) = +e012`.
/// In this basis every sign is positive and the map pairs
/// `1 ↔ e012`, `e0 ↔ e12`, `e1 ↔ e20`, `e2 ↔ e01`,
/// so applying it twice is the identity in every grade.
pub const DUAL: [Product; BLADE_COUNT] = build_dual();

/// The sign the reverse operator applies to each grade, `(-1)^(k(k-1)/2)`
pub const REVERSE_SIGN: [i8; 4] = [1, 1, -1, -1];
