//! Points and the constructions that derive them.
//!
//! Every derived point is pure arithmetic over its inputs: no construction
//! introduces an equation shape of its own.

use geoeq_core::{Result, Session};
use geoeq_value::{Algebra, Value};
use tracing::trace;

use crate::line::Line;
use crate::vector::Vector;

/// A point of the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: Value,
    y: Value,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: Value, y: Value) -> Self {
        Self { x, y }
    }

    /// A numerically pinned point with literal coordinates.
    #[must_use]
    pub fn fixed(x: i64, y: i64) -> Self {
        Self::new(Value::literal(x), Value::literal(y))
    }

    /// A degree of freedom: two fresh unknowns sampled at `(x, y)`.
    pub fn free(session: &mut Session, x: i64, y: i64) -> Self {
        let x = session.fresh(x);
        let y = session.fresh(y);
        Self::new(x, y)
    }

    /// The x coordinate.
    #[must_use]
    pub fn x(&self) -> &Value {
        &self.x
    }

    /// The y coordinate.
    #[must_use]
    pub fn y(&self) -> &Value {
        &self.y
    }

    /// The position vector of the point.
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x.clone(), self.y.clone())
    }

    /// The vector from `other` to `self`.
    pub fn sub(&self, session: &mut Session, other: &Point) -> Vector {
        let x = session.sub(&self.x, &other.x);
        let y = session.sub(&self.y, &other.y);
        Vector::new(x, y)
    }

    /// The point translated by `v`.
    pub fn translate(&self, session: &mut Session, v: &Vector) -> Point {
        let x = session.add(&self.x, v.x());
        let y = session.add(&self.y, v.y());
        Point::new(x, y)
    }

    /// A free point sampled at `(x, y)` and constrained to `line`.
    ///
    /// # Errors
    ///
    /// Fails like [`Line::contains`] when the sample is off the line.
    pub fn sliding(session: &mut Session, x: i64, y: i64, line: &Line) -> Result<Point> {
        let p = Point::free(session, x, y);
        line.contains(session, &p)?;
        Ok(p)
    }

    /// The midpoint `(a + b) / 2`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying division.
    pub fn midpoint(session: &mut Session, a: &Point, b: &Point) -> Result<Point> {
        let two = Value::literal(2);
        let sx = session.add(&a.x, &b.x);
        let x = session.div(&sx, &two)?;
        let sy = session.add(&a.y, &b.y);
        let y = session.div(&sy, &two)?;
        Ok(Point::new(x, y))
    }

    /// The intersection of two lines.
    ///
    /// Walks from `l1`'s origin along its direction (the rotated normal) by
    /// `t = ((o2 - o1)·n2) / (d·n2)`.
    ///
    /// # Errors
    ///
    /// Returns [`geoeq_core::EngineError::DegenerateConstruction`] when the
    /// lines are parallel at their samples.
    pub fn intersection(session: &mut Session, l1: &Line, l2: &Line) -> Result<Point> {
        let direction = l1.normal().rotated90(session);
        let offset = l2.origin().sub(session, l1.origin());
        let along = offset.dot(session, l2.normal());
        let speed = direction.dot(session, l2.normal());
        let t = session.div(&along, &speed)?;
        let step = direction.scale(session, &t);
        trace!(t = %t, "intersection parameter");
        Ok(l1.origin().translate(session, &step))
    }

    /// The orthogonal projection of `p` onto `line`:
    /// `p - n * ((p - o)·n / |n|²)`.
    ///
    /// # Errors
    ///
    /// Returns [`geoeq_core::EngineError::DegenerateConstruction`] for a
    /// normal of zero sampled length.
    pub fn projection(session: &mut Session, p: &Point, line: &Line) -> Result<Point> {
        let offset = p.sub(session, line.origin());
        let along = offset.dot(session, line.normal());
        let norm = line.normal().length_sqr(session);
        let factor = session.div(&along, &norm)?;
        Ok(p.shifted_back(session, line.normal(), &factor))
    }

    /// The mirror image of `p` in `line`: `p - n * (2(p - o)·n / |n|²)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Point::projection`].
    pub fn reflection(session: &mut Session, p: &Point, line: &Line) -> Result<Point> {
        let offset = p.sub(session, line.origin());
        let along = offset.dot(session, line.normal());
        let twice = session.mul(&Value::literal(2), &along);
        let norm = line.normal().length_sqr(session);
        let factor = session.div(&twice, &norm)?;
        Ok(p.shifted_back(session, line.normal(), &factor))
    }

    /// The point `a + k(b - a)`.
    pub fn scaled_vector(session: &mut Session, k: &Value, a: &Point, b: &Point) -> Point {
        let ab = b.sub(session, a);
        let step = ab.scale(session, k);
        a.translate(session, &step)
    }

    /// `self - n * factor`, as a point.
    fn shifted_back(&self, session: &mut Session, n: &Vector, factor: &Value) -> Point {
        let shift = n.scale(session, factor);
        let v = self.to_vector().sub(session, &shift);
        Point::new(v.x().clone(), v.y().clone())
    }
}
