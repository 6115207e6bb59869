//! Lines in point-normal form.

use geoeq_core::{Result, Session};
use geoeq_value::{is_zero, Algebra, Value};

use crate::point::Point;
use crate::vector::Vector;

/// The line through `origin` perpendicular to `normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    origin: Point,
    normal: Vector,
}

impl Line {
    /// Creates a line from a point on it and a normal vector.
    #[must_use]
    pub fn new(origin: Point, normal: Vector) -> Self {
        Self { origin, normal }
    }

    /// The line through `a` and `b`, with normal `rotated90(b - a)`.
    pub fn through(session: &mut Session, a: &Point, b: &Point) -> Line {
        let ab = b.sub(session, a);
        let normal = ab.rotated90(session);
        Line::new(a.clone(), normal)
    }

    /// The perpendicular bisector of `a` and `b`: through their midpoint,
    /// with normal `b - a`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the midpoint division.
    pub fn perpendicular_bisector(session: &mut Session, a: &Point, b: &Point) -> Result<Line> {
        let origin = Point::midpoint(session, a, b)?;
        let normal = b.sub(session, a);
        Ok(Line::new(origin, normal))
    }

    /// The line through `point` perpendicular to `line`.
    pub fn perpendicular_to(session: &mut Session, point: &Point, line: &Line) -> Line {
        let normal = line.normal.rotated90(session);
        Line::new(point.clone(), normal)
    }

    /// The line through `point` parallel to `line`.
    #[must_use]
    pub fn parallel_to(point: &Point, line: &Line) -> Line {
        Line::new(point.clone(), line.normal.clone())
    }

    /// A point on the line.
    #[must_use]
    pub fn origin(&self) -> &Point {
        &self.origin
    }

    /// The normal vector.
    #[must_use]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    /// `(p - origin)·normal`: zero exactly when `p` is on the line.
    fn offset(&self, session: &mut Session, p: &Point) -> Value {
        let v = p.sub(session, &self.origin);
        v.dot(session, &self.normal)
    }

    /// Constrains `p` to lie on the line.
    ///
    /// Emits the incidence expression `(p - origin)·normal`, plus its
    /// sample when the sample is symbolic.
    ///
    /// # Errors
    ///
    /// Fails like [`geoeq_value::is_zero`]: the sampled point must be on the
    /// sampled line.
    pub fn contains(&self, session: &mut Session, p: &Point) -> Result<()> {
        let offset = self.offset(session, p);
        is_zero(session, &offset)
    }

    /// Signed distance from `p`, measured along the normal.
    ///
    /// # Errors
    ///
    /// Returns [`geoeq_core::EngineError::DegenerateConstruction`] for a
    /// normal of zero sampled length.
    pub fn distance_to_point(&self, session: &mut Session, p: &Point) -> Result<Value> {
        let offset = self.offset(session, p);
        let length = self.normal.length(session);
        session.div(&offset, &length)
    }

    /// Squared distance from `p`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Line::distance_to_point`].
    pub fn distance_to_point_sqr(&self, session: &mut Session, p: &Point) -> Result<Value> {
        let offset = self.offset(session, p);
        let offset_sqr = session.powi(&offset, 2);
        let length_sqr = self.normal.length_sqr(session);
        session.div(&offset_sqr, &length_sqr)
    }
}
