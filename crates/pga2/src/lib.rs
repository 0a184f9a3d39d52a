//! pga2 is a library for doing plane geometry with 2D projective geometric algebra.
//!
//! Points, lines, and their ideal (infinite) counterparts are all values of one type,
//! the 8-component [Multivector](multivector::Multivector) over the basis
//! `{1, e0, e1, e2, e01, e20, e12, e012}` with metric `e0² = 0`, `e1² = e2² = 1`.
//!
//! * A line `ax + by + c = 0` is the vector `a e1 + b e2 + c e0`.
//! * A point `(x, y)` is the bivector `x e20 + y e01 + e12`,
//!   and a direction `(x, y)` is the ideal point `x e20 + y e01`.
//!
//! pga2 uses [homogeneous coordinates](https://en.wikipedia.org/wiki/Homogeneous_coordinates)
//! to express ideal points and the ideal line,
//! and to provide exception-free [meet](ops::Meet) & [join](ops::Join) operations:
//! parallel lines meet at an ideal point rather than failing.
//!
//! Failure only appears where a Euclidean answer does not exist,
//! e.g. normalizing an ideal point or measuring a distance to one.
//! These return an [Error] the caller can branch on.
//!
//! Every operation that must decide whether a coefficient is zero
//! takes an explicit tolerance `eps`.
//! [Real::default_epsilon](scalar::Real::default_epsilon) gives a reasonable default.
//!
//! ```
//! use pga2::*;
//! use pga2::ops::*;
//!
//! let eps = 1e-9;
//! let a = make_point(0., 0.);
//! let b = make_point(1., 0.);
//! let c = make_point(0.5, 0.866);
//!
//! // Lines through pairs of points
//! let ab = a.join(b);
//! let bc = b.join(c);
//!
//! // ...meet back at the shared point
//! let p = ab.meet(bc).normalize(eps).unwrap();
//! assert!(p.equals_within(&b, eps));
//! ```
//!
//! For drawing, [render](render::render) turns a point or line into a
//! [Drawable](render::Drawable) clipped to a [Viewport](render::Viewport).

pub mod algebraic_ops;
pub mod blade;
pub mod error;
pub mod motor;
pub mod multivector;
pub mod ops;
pub mod primitive;
pub mod render;
pub mod scalar;

pub use error::{Error, Result};
pub use multivector::{GradeSet, Multivector};
pub use primitive::{ideal_line, make_ideal_point, make_line, make_point, make_point_w, Primitive};
