//! Terminal assertions on geometric objects.

use geoeq_core::{Result, Session};
use geoeq_value::{is_constant, is_zero, Algebra};

use crate::line::Line;
use crate::metric::{cot, distance, Figure};
use crate::point::Point;
use crate::vector::Vector;

/// Asserts that both components of `v` are zero.
///
/// # Errors
///
/// Fails like [`is_zero`] on the first offending component.
pub fn is_zero_vector(session: &mut Session, v: &Vector) -> Result<()> {
    is_zero(session, v.x())?;
    is_zero(session, v.y())
}

/// Records `point` under `name` in the plot store. No equations are emitted.
pub fn plot(session: &mut Session, name: &str, point: &Point) {
    session.record_plot(name, point.x().to_string(), point.y().to_string());
}

/// Asserts that the distance between two figures keeps its sampled value.
///
/// # Errors
///
/// Fails like [`distance`] and [`is_constant`].
pub fn distance_is_constant<'a>(
    session: &mut Session,
    a: impl Into<Figure<'a>>,
    b: impl Into<Figure<'a>>,
) -> Result<()> {
    let d = distance(session, a, b)?;
    is_constant(session, &d)
}

/// Asserts that the (unoriented) angle between two lines keeps its sampled
/// value, through `|cot|` of their normals.
///
/// # Errors
///
/// Fails like [`cot`] for parallel lines and like [`is_constant`].
pub fn angle_is_constant(session: &mut Session, l1: &Line, l2: &Line) -> Result<()> {
    let c = cot(session, l1.normal(), l2.normal())?;
    let c = session.abs(&c);
    is_constant(session, &c)
}
