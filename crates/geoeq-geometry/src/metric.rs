//! Distances and angles.

use geoeq_core::{EngineError, Result, Session};
use geoeq_value::{Algebra, Value};

use crate::line::Line;
use crate::point::Point;
use crate::vector::Vector;

/// A figure that distances are measured between.
#[derive(Clone, Copy, Debug)]
pub enum Figure<'a> {
    /// A point.
    Point(&'a Point),
    /// A line.
    Line(&'a Line),
}

impl<'a> From<&'a Point> for Figure<'a> {
    fn from(p: &'a Point) -> Self {
        Figure::Point(p)
    }
}

impl<'a> From<&'a Line> for Figure<'a> {
    fn from(l: &'a Line) -> Self {
        Figure::Line(l)
    }
}

/// Distance between two figures.
///
/// Point/point is Euclidean; a point and a line give the signed distance
/// along the line's normal, in either argument order.
///
/// # Errors
///
/// Returns [`EngineError::UndefinedPairing`] for two lines, and propagates
/// division failures for a degenerate line.
pub fn distance<'a>(
    session: &mut Session,
    a: impl Into<Figure<'a>>,
    b: impl Into<Figure<'a>>,
) -> Result<Value> {
    match (a.into(), b.into()) {
        (Figure::Point(p), Figure::Point(q)) => {
            let sqr = point_distance_sqr(session, p, q);
            Ok(session.sqrt(&sqr))
        }
        (Figure::Line(l), Figure::Point(p)) | (Figure::Point(p), Figure::Line(l)) => {
            l.distance_to_point(session, p)
        }
        (Figure::Line(_), Figure::Line(_)) => Err(EngineError::UndefinedPairing),
    }
}

/// Squared distance between two figures.
///
/// # Errors
///
/// Same conditions as [`distance`].
pub fn distance_sqr<'a>(
    session: &mut Session,
    a: impl Into<Figure<'a>>,
    b: impl Into<Figure<'a>>,
) -> Result<Value> {
    match (a.into(), b.into()) {
        (Figure::Point(p), Figure::Point(q)) => Ok(point_distance_sqr(session, p, q)),
        (Figure::Line(l), Figure::Point(p)) | (Figure::Point(p), Figure::Line(l)) => {
            l.distance_to_point_sqr(session, p)
        }
        (Figure::Line(_), Figure::Line(_)) => Err(EngineError::UndefinedPairing),
    }
}

fn point_distance_sqr(session: &mut Session, p: &Point, q: &Point) -> Value {
    let dx = session.sub(p.x(), q.x());
    let dx2 = session.powi(&dx, 2);
    let dy = session.sub(p.y(), q.y());
    let dy2 = session.powi(&dy, 2);
    session.add(&dx2, &dy2)
}

/// Cotangent of the angle between two vectors, `(a·b) / (a × b)`.
///
/// # Errors
///
/// Fails like division when the vectors are parallel.
pub fn cot(session: &mut Session, a: &Vector, b: &Vector) -> Result<Value> {
    let dot = a.dot(session, b);
    let cross = a.cross(session, b);
    session.div(&dot, &cross)
}
