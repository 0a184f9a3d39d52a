//! Turning points and lines into something a plotting surface can draw
//!
//! [render] is a pure function of a primitive and a [Viewport].
//! It classifies the primitive once and returns a [Drawable];
//! labels, colors and pixels are up to the caller.
//!
//! ## Lines
//! A real line is clipped to the viewport by testing which side of the line each corner lies on.
//! Every edge whose two corners lie strictly on opposite sides is crossed.
//! The crossing is interpolated from the two corners' signed distances,
//! so a nearly axis-aligned line never meets an edge at an ideal point.
//!
//! A corner within `eps` of the line counts as a crossing point by itself.
//! This makes lines through a corner, along an edge, or along a diagonal
//! produce exactly two distinct points.
//! A line that only grazes a single corner has nothing to draw.
//!
//! The ideal line is drawn as the viewport's boundary curve.
//!
//! ## Points
//! A real point becomes a marker. An ideal point becomes an arrow from the viewport center
//! in its direction, a quarter of the viewport's smaller side long,
//! so that it always stays inside the viewport.

use crate::algebraic_ops::*;
use crate::error::{Error, Result};
use crate::multivector::Multivector;
use crate::primitive::{make_point, Line, Point, Primitive};
use crate::scalar::*;

/// An axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport<T> {
    xmin: T,
    xmax: T,
    ymin: T,
    ymax: T,
}

impl<T: Real> Viewport<T> {
    /// Fails with [Error::DegenerateViewport] unless `xmin < xmax` and `ymin < ymax`
    pub fn new(xmin: T, xmax: T, ymin: T, ymax: T) -> Result<Viewport<T>> {
        if !(xmin < xmax && ymin < ymax) {
            return Err(Error::DegenerateViewport);
        }
        Ok(Viewport {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    pub fn xmin(&self) -> T {
        self.xmin
    }

    pub fn xmax(&self) -> T {
        self.xmax
    }

    pub fn ymin(&self) -> T {
        self.ymin
    }

    pub fn ymax(&self) -> T {
        self.ymax
    }

    pub fn width(&self) -> T {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> T {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> [T; 2] {
        let half = T::one_half();
        [(self.xmin + self.xmax) * half, (self.ymin + self.ymax) * half]
    }

    pub fn contains(&self, [x, y]: [T; 2]) -> bool {
        self.xmin <= x && x <= self.xmax && self.ymin <= y && y <= self.ymax
    }

    /// Corners counter-clockwise from `(xmin, ymin)`
    pub fn corners(&self) -> [[T; 2]; 4] {
        [
            [self.xmin, self.ymin],
            [self.xmax, self.ymin],
            [self.xmax, self.ymax],
            [self.xmin, self.ymax],
        ]
    }

    /// Boundary lines; edge `j` runs from corner `j` to corner `j + 1`
    pub fn edges(&self) -> [Line<T>; 4] {
        let one = T::one();
        let zero = T::zero();
        [
            Line::new(zero, -one, self.ymin),
            Line::new(-one, zero, self.xmax),
            Line::new(zero, one, -self.ymax),
            Line::new(one, zero, -self.xmin),
        ]
    }
}

/// A description of what to draw, in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drawable<T> {
    /// A clipped real line
    Segment { x0: T, y0: T, x1: T, y1: T },
    /// A real point
    Marker { x: T, y: T },
    /// An ideal point: an arrow from `(x, y)` (the viewport center) to `(x + dx, y + dy)`
    DirectionArrow { x: T, y: T, dx: T, dy: T },
    /// The ideal line; conventionally drawn as the outline
    /// (or the inscribed ellipse) of the viewport
    BoundaryCurve,
}

/// Classify `primitive` and describe how to draw it in `viewport`
///
/// ```
/// use pga2::render::{render, Drawable, Viewport};
/// use pga2::{make_line, Error};
///
/// let line = make_line(1., 0., -3.); // x = 3
///
/// let far = Viewport::new(-1., 1., -1., 1.).unwrap();
/// assert_eq!(render(line, &far, 1e-9), Err(Error::LineOutsideViewport));
///
/// let near = Viewport::new(0., 5., 0., 5.).unwrap();
/// match render(line, &near, 1e-9).unwrap() {
///     Drawable::Segment { x0, y0, x1, y1 } => assert_eq!([x0, y0, x1, y1], [3., 0., 3., 5.]),
///     other => panic!("expected a segment, got {:?}", other),
/// }
/// ```
pub fn render<T: Real>(primitive: Multivector<T>, viewport: &Viewport<T>, eps: T) -> Result<Drawable<T>> {
    let drawable = match primitive.classify(eps) {
        Primitive::Line(line) => render_line(line, viewport, eps)?,
        Primitive::Point(point) => render_point(point, viewport, eps)?,
        Primitive::Scalar(_) | Primitive::Pseudoscalar(_) | Primitive::Invalid(_) => {
            return Err(Error::UnclassifiablePrimitive {
                grades: primitive.grades(eps),
            });
        }
    };
    log::trace!("rendered {:?} as {:?}", primitive, drawable);
    Ok(drawable)
}

fn render_line<T: Real>(line: Line<T>, viewport: &Viewport<T>, eps: T) -> Result<Drawable<T>> {
    if line.is_ideal(eps) {
        return Ok(Drawable::BoundaryCurve);
    }

    // Unit normal, so that side values are distances and compare against eps
    let unit = Multivector::from(line).normalize(eps)?;

    let corners = viewport.corners();
    let side = corners.map(|[x, y]| make_point(x, y).wedge(unit).pseudoscalar_part());

    let mut points: Vec<[T; 2]> = Vec::with_capacity(4);
    let mut push = |p: [T; 2]| {
        let seen = points
            .iter()
            .any(|q| (q[0] - p[0]).abs() <= eps && (q[1] - p[1]).abs() <= eps);
        if !seen {
            points.push(p);
        }
    };

    for j in 0..4 {
        let k = (j + 1) % 4;
        if side[j].abs() <= eps {
            log::debug!("line passes through viewport corner {:?}", corners[j]);
            push(corners[j]);
            continue;
        }
        if side[k].abs() <= eps {
            continue;
        }
        let opposite = (side[j] < T::zero()) != (side[k] < T::zero());
        if opposite {
            push(crossing(corners[j], side[j], corners[k], side[k]));
        }
    }

    match points.as_slice() {
        [] | [_] => {
            log::debug!("line {:?} does not cross {:?}", unit, viewport);
            Err(Error::LineOutsideViewport)
        }
        [p0, p1] => Ok(segment(*p0, *p1)),
        _ => {
            log::debug!("{} crossing points for {:?}, keeping the farthest pair", points.len(), unit);
            let (p0, p1) = farthest_pair(&points);
            Ok(segment(p0, p1))
        }
    }
}

// The point between two corners where the side value is zero.
// The side values have opposite signs and magnitudes above eps.
fn crossing<T: Real>(cj: [T; 2], sj: T, ck: [T; 2], sk: T) -> [T; 2] {
    let inv = (sj - sk).recip();
    [
        (sj * ck[0] - sk * cj[0]) * inv,
        (sj * ck[1] - sk * cj[1]) * inv,
    ]
}

fn segment<T>([x0, y0]: [T; 2], [x1, y1]: [T; 2]) -> Drawable<T> {
    Drawable::Segment { x0, y0, x1, y1 }
}

fn farthest_pair<T: Real>(points: &[[T; 2]]) -> ([T; 2], [T; 2]) {
    let dist2 = |p: [T; 2], q: [T; 2]| {
        let dx = p[0] - q[0];
        let dy = p[1] - q[1];
        dx * dx + dy * dy
    };
    let mut best = (points[0], points[1]);
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            if dist2(p, q) > dist2(best.0, best.1) {
                best = (p, q);
            }
        }
    }
    best
}

fn render_point<T: Real>(point: Point<T>, viewport: &Viewport<T>, eps: T) -> Result<Drawable<T>> {
    if point.is_ideal(eps) {
        let length = (point.x * point.x + point.y * point.y).sqrt();
        if length <= eps {
            return Err(Error::DegenerateNormalization);
        }
        let side = if viewport.width() < viewport.height() {
            viewport.width()
        } else {
            viewport.height()
        };
        let scale = side * T::from_fraction(1, 4) * length.recip();
        let [x, y] = viewport.center();
        return Ok(Drawable::DirectionArrow {
            x,
            y,
            dx: point.x * scale,
            dy: point.y * scale,
        });
    }
    let [x, y] = point.coordinates(eps)?;
    Ok(Drawable::Marker { x, y })
}
