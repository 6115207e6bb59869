//! # geoeq
//!
//! Symbolic equation generation for planar geometric constructions.
//!
//! A construction is written as ordinary arithmetic over points, vectors
//! and lines. Every derived quantity becomes a named unknown (`a`, `b`, …,
//! `z`, `a1`, …) with exactly one defining polynomial equation, and every
//! unknown carries a sample: the value it takes for the construction's
//! sampled input positions. The resulting equation list is meant for an
//! external polynomial solver.
//!
//! ## Features
//!
//! - **Explicit Sessions**: all state lives in a [`Session`](core::Session)
//! - **Exact Samples**: integer samples fold exactly; irrational ones stay symbolic
//! - **Float Witnesses**: optional `f64` approximations that validate assertions
//! - **Scenes**: JSON-described construction scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use geoeq::prelude::*;
//!
//! let mut session = Session::new();
//! let line = Line::through(&mut session, &Point::fixed(-1, 0), &Point::fixed(1, 0));
//! let x = Point::free(&mut session, 0, 2);
//! let d = distance(&mut session, &x, &line).unwrap();
//! is_constant(&mut session, &d).unwrap();
//!
//! let output = session.finish();
//! assert_eq!(output.equations.last().unwrap().as_str(), format!("{d} - -2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use geoeq_core as core;
pub use geoeq_geometry as geometry;
pub use geoeq_scene as scene;
pub use geoeq_value as value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use geoeq_core::{ConstructionOutput, EngineError, Session, SessionConfig, VarId};
    pub use geoeq_geometry::{
        angle_is_constant, cot, distance, distance_is_constant, distance_sqr, is_zero_vector,
        multiply, plot, Figure, Line, Point, Vector,
    };
    pub use geoeq_scene::{Invariant, Scene, SceneError, Step};
    pub use geoeq_value::{is_constant, is_zero, Algebra, RationalValue, Sample, Value};
}
