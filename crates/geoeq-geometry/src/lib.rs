//! # geoeq-geometry
//!
//! Planar geometry over geoeq values.
//!
//! This crate provides:
//! - Points and vectors, fixed (literal) or free (fresh unknowns)
//! - Lines in point-normal form and their standard constructions
//! - Derived points: midpoints, intersections, projections, reflections
//! - Distances, angles and incidence assertions
//!
//! Every construction is plain arithmetic on [`geoeq_value::Value`]s, so it
//! inherits the engine's equation and sample behavior unchanged.
//!
//! ## Example
//!
//! ```
//! use geoeq_core::Session;
//! use geoeq_geometry::{distance_is_constant, Line, Point};
//!
//! let mut session = Session::new();
//! let line = Line::through(&mut session, &Point::fixed(-1, 0), &Point::fixed(1, 0));
//! let x = Point::free(&mut session, 0, 2);
//! distance_is_constant(&mut session, &x, &line).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assert;
pub mod line;
pub mod metric;
pub mod point;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use assert::{angle_is_constant, distance_is_constant, is_zero_vector, plot};
pub use line::Line;
pub use metric::{cot, distance, distance_sqr, Figure};
pub use point::Point;
pub use vector::{multiply, Operand, Product, Vector};
